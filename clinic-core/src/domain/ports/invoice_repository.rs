//! Port for invoice persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Invoice, InvoiceId, InvoiceStatus, OperationId};

use super::define_repository_error;

define_repository_error! {
    /// Errors raised by invoice repository adapters.
    pub enum InvoiceRepositoryError => "invoice repository"
}

/// Port for invoice storage and status updates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Insert or fully replace an invoice, returning it as persisted.
    async fn save(&self, invoice: &Invoice) -> Result<Invoice, InvoiceRepositoryError>;

    /// Fetch an invoice by id. `None` when the id is unknown.
    async fn retrieve(
        &self,
        id: &InvoiceId,
    ) -> Result<Option<Invoice>, InvoiceRepositoryError>;

    /// Every invoice billed for the given operation. Empty when none exist
    /// or the operation is unknown — the two cases are not distinguished.
    async fn find_by_operation_id(
        &self,
        operation_id: &OperationId,
    ) -> Result<Vec<Invoice>, InvoiceRepositoryError>;

    /// Set the status unconditionally, stamping `updated_at` as the new
    /// last-update. `None` when the id is unknown.
    async fn update_status(
        &self,
        id: &InvoiceId,
        status: InvoiceStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Invoice>, InvoiceRepositoryError>;
}

/// Fixture implementation for tests that do not exercise invoice storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureInvoiceRepository;

#[async_trait]
impl InvoiceRepository for FixtureInvoiceRepository {
    async fn save(&self, invoice: &Invoice) -> Result<Invoice, InvoiceRepositoryError> {
        Ok(invoice.clone())
    }

    async fn retrieve(
        &self,
        _id: &InvoiceId,
    ) -> Result<Option<Invoice>, InvoiceRepositoryError> {
        Ok(None)
    }

    async fn find_by_operation_id(
        &self,
        _operation_id: &OperationId,
    ) -> Result<Vec<Invoice>, InvoiceRepositoryError> {
        Ok(Vec::new())
    }

    async fn update_status(
        &self,
        _id: &InvoiceId,
        _status: InvoiceStatus,
        _updated_at: DateTime<Utc>,
    ) -> Result<Option<Invoice>, InvoiceRepositoryError> {
        Ok(None)
    }
}
