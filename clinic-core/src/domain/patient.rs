//! Patient record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::PatientId;

/// A person treated by the practice.
///
/// ## Invariants
/// - Identity is `id` alone; every other field may repeat across patients.
/// - Mutation happens only by full replacement through
///   [`PatientRepository::save`](crate::domain::ports::PatientRepository::save);
///   there is no partial-update operation and no deletion in this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    pub birth_date: NaiveDate,
    pub tax_code: String,
    pub medical_history: String,
}

/// Fields supplied by the caller when registering a new patient.
///
/// The id is allocated by the service, never by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    pub birth_date: NaiveDate,
    pub tax_code: String,
    pub medical_history: String,
}
