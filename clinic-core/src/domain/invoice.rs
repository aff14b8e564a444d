//! Invoices billed for operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{InvoiceId, Money, OperationId};

/// Billing state of an invoice.
///
/// Any status may be set to any other via
/// [`InvoiceService::update_invoice_status`](crate::domain::InvoiceService::update_invoice_status);
/// no transition graph is enforced in this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Cancelled,
}

/// An amount billed for a single operation.
///
/// ## Invariants
/// - `operation_id` referenced an existing operation at creation time.
/// - Newly created invoices are always [`InvoiceStatus::Pending`] with
///   `created_at == updated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub operation_id: OperationId,
    pub amount: Money,
    pub status: InvoiceStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by the caller when billing an operation.
///
/// The initial status is not part of the request: invoices always start
/// pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    pub operation_id: OperationId,
    pub amount: Money,
}
