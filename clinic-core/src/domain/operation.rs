//! Clinical operations performed on patients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AssetKey, Money, OperationId, OperationTypeCode, PatientId};

/// Dentition of the tooth a detail line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToothKind {
    Permanent,
    Deciduous,
}

/// Per-tooth cost line itemizing an operation's estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToothDetail {
    pub tooth_number: u8,
    pub tooth_kind: ToothKind,
    pub estimated_cost: Money,
}

/// Free-text note appended to an operation after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationNote {
    pub text: String,
    pub recorded_at: DateTime<Utc>,
}

/// A clinical act performed on a patient.
///
/// ## Invariants
/// - `patient_id` referenced an existing patient at creation time.
/// - When `details` is non-empty, the detail costs rounded half-up to two
///   decimals sum to `estimated_cost` rounded the same way. This is checked
///   at creation only; the record is otherwise immutable apart from the
///   incremental note and asset appends.
/// - `operation_type` points into the catalog by code; the reference is
///   checked by existence, not enforced relationally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientOperation {
    pub id: OperationId,
    pub patient_id: PatientId,
    pub operation_type: OperationTypeCode,
    pub description: String,
    pub executor: String,
    pub asset_keys: Vec<AssetKey>,
    pub notes: Vec<OperationNote>,
    pub estimated_cost: Money,
    pub details: Vec<ToothDetail>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by the caller when recording a new operation.
///
/// Runs through the
/// [`CompositeOperationRequestValidator`](crate::domain::CompositeOperationRequestValidator)
/// before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOperationRequest {
    pub patient_id: PatientId,
    pub operation_type: OperationTypeCode,
    pub description: String,
    pub executor: String,
    pub estimated_cost: Money,
    pub details: Vec<ToothDetail>,
}
