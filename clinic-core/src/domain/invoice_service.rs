//! Invoice domain service.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    IdGenerator, InvoiceRepository, InvoiceRepositoryError, OperationRepository,
    OperationRepositoryError,
};
use crate::domain::{
    CreateInvoiceRequest, DomainError, Invoice, InvoiceId, InvoiceStatus, OperationId,
};

fn map_invoice_repository_error(error: InvoiceRepositoryError) -> DomainError {
    DomainError::repository(error.to_string())
}

fn map_operation_repository_error(error: OperationRepositoryError) -> DomainError {
    DomainError::repository(error.to_string())
}

/// Use cases over invoices.
pub struct InvoiceService<I, O> {
    invoices: Arc<I>,
    operations: Arc<O>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl<I, O> InvoiceService<I, O> {
    /// Create a new service with its collaborators.
    pub fn new(
        invoices: Arc<I>,
        operations: Arc<O>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            invoices,
            operations,
            ids,
            clock,
        }
    }
}

impl<I, O> InvoiceService<I, O>
where
    I: InvoiceRepository,
    O: OperationRepository,
{
    /// Bill an existing operation.
    ///
    /// The referenced operation must exist; new invoices always start
    /// [`InvoiceStatus::Pending`] with creation and last-update stamped from
    /// a single clock read.
    pub async fn create_invoice(
        &self,
        request: CreateInvoiceRequest,
    ) -> Result<Invoice, DomainError> {
        let operation = self
            .operations
            .retrieve(&request.operation_id)
            .await
            .map_err(map_operation_repository_error)?;
        if operation.is_none() {
            return Err(DomainError::operation_not_found(&request.operation_id));
        }

        let now = self.clock.utc();
        let invoice = Invoice {
            id: InvoiceId::new(self.ids.generate()),
            operation_id: request.operation_id,
            amount: request.amount,
            status: InvoiceStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        let saved = self
            .invoices
            .save(&invoice)
            .await
            .map_err(map_invoice_repository_error)?;
        tracing::debug!(invoice_id = %saved.id, operation_id = %saved.operation_id, "invoice created");
        Ok(saved)
    }

    /// Set an invoice's status unconditionally.
    ///
    /// No transition graph is enforced: PAID may go back to PENDING. `None`
    /// when the id is unknown.
    pub async fn update_invoice_status(
        &self,
        id: &InvoiceId,
        status: InvoiceStatus,
    ) -> Result<Option<Invoice>, DomainError> {
        self.invoices
            .update_status(id, status, self.clock.utc())
            .await
            .map_err(map_invoice_repository_error)
    }

    /// Every invoice billed for the given operation.
    ///
    /// No existence check on the operation: unknown ids yield an empty list,
    /// indistinguishable from an operation with no invoices.
    pub async fn get_invoices_for_operation(
        &self,
        operation_id: &OperationId,
    ) -> Result<Vec<Invoice>, DomainError> {
        self.invoices
            .find_by_operation_id(operation_id)
            .await
            .map_err(map_invoice_repository_error)
    }
}

#[cfg(test)]
#[path = "invoice_service_tests.rs"]
mod tests;
