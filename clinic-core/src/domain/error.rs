//! Domain-level error taxonomy.
//!
//! These errors are transport agnostic: callers match on the variant (a
//! missing entity maps to a 404-equivalent at an HTTP boundary, a validation
//! failure to a 400-equivalent). Downstream repository and storage failures
//! are carried opaquely and never interpreted or retried here.

use thiserror::Error;

use crate::domain::{InvoiceId, OperationId, OperationTypeCode, PatientId, UserId};

/// Entity kinds referenced by [`DomainError::NotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Patient,
    Operation,
    Invoice,
    OperationType,
    User,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Patient => "patient",
            Self::Operation => "operation",
            Self::Invoice => "invoice",
            Self::OperationType => "operation type",
            Self::User => "user",
        };
        f.write_str(label)
    }
}

/// Business-invariant violations detected before any persistence happens.
///
/// New rules add variants here; a validation failure is always terminal for
/// the call and never partially applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The itemized detail costs do not reconcile with the top-level
    /// estimate.
    #[error("estimated amount mismatch: {message}")]
    EstimatedAmountMismatch { message: String },
}

/// Failures surfaced by the domain services.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A referenced entity does not exist for the given id or key.
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: String },
    /// A catalog entry with this code already exists.
    ///
    /// Not raised by the default upsert path; available to strict-insert
    /// flows and uniqueness-enforcing adapters.
    #[error("operation type {code} already exists")]
    OperationTypeAlreadyExists { code: OperationTypeCode },
    /// The request content violates a business invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Opaque repository failure, carried through untranslated.
    #[error("repository failure: {message}")]
    Repository { message: String },
    /// Opaque object-storage failure, carried through untranslated.
    #[error("storage failure: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn patient_not_found(id: &PatientId) -> Self {
        Self::NotFound {
            entity: EntityKind::Patient,
            id: id.to_string(),
        }
    }

    pub fn operation_not_found(id: &OperationId) -> Self {
        Self::NotFound {
            entity: EntityKind::Operation,
            id: id.to_string(),
        }
    }

    pub fn invoice_not_found(id: &InvoiceId) -> Self {
        Self::NotFound {
            entity: EntityKind::Invoice,
            id: id.to_string(),
        }
    }

    pub fn operation_type_not_found(code: &OperationTypeCode) -> Self {
        Self::NotFound {
            entity: EntityKind::OperationType,
            id: code.to_string(),
        }
    }

    pub fn user_not_found(id: &UserId) -> Self {
        Self::NotFound {
            entity: EntityKind::User,
            id: id.to_string(),
        }
    }

    pub fn operation_type_already_exists(code: OperationTypeCode) -> Self {
        Self::OperationTypeAlreadyExists { code }
    }

    pub fn repository(message: impl Into<String>) -> Self {
        Self::Repository {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_entity_kind_and_id() {
        let error = DomainError::patient_not_found(&PatientId::new("p-42"));
        assert_eq!(error.to_string(), "patient p-42 not found");
        assert_eq!(
            error,
            DomainError::NotFound {
                entity: EntityKind::Patient,
                id: "p-42".to_owned(),
            }
        );
    }

    #[test]
    fn already_exists_names_the_offending_code() {
        let error =
            DomainError::operation_type_already_exists(OperationTypeCode::new("SURGERY"));
        assert_eq!(error.to_string(), "operation type SURGERY already exists");
    }

    #[test]
    fn validation_errors_convert_transparently() {
        let error: DomainError = ValidationError::EstimatedAmountMismatch {
            message: "details sum to 90.00 EUR, estimate is 100.00 EUR".to_owned(),
        }
        .into();
        assert!(error.to_string().starts_with("estimated amount mismatch"));
    }
}
