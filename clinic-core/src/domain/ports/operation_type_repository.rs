//! Port for the operation-type catalog.

use async_trait::async_trait;

use crate::domain::OperationType;

use super::define_repository_error;

define_repository_error! {
    /// Errors raised by catalog repository adapters.
    pub enum OperationTypeRepositoryError => "operation type repository"
}

/// Port for the operation-type catalog.
///
/// # Upsert by natural key
///
/// `save` is keyed by the type code, not a surrogate id. The required
/// adapter behaviour is an explicit two-step inside one transactional
/// boundary: look the code up; insert when absent; when present, replace the
/// existing row's description and cost in place. Saving an existing code
/// never duplicates the row and never fails — callers needing insert-only
/// semantics must check existence themselves.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OperationTypeRepository: Send + Sync {
    /// Insert or replace the catalog entry with this code, returning it as
    /// persisted.
    async fn save(
        &self,
        operation_type: &OperationType,
    ) -> Result<OperationType, OperationTypeRepositoryError>;

    /// Every catalog entry, ordered ascending by type code.
    async fn retrieve_all(&self) -> Result<Vec<OperationType>, OperationTypeRepositoryError>;
}

/// Fixture implementation with an empty catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureOperationTypeRepository;

#[async_trait]
impl OperationTypeRepository for FixtureOperationTypeRepository {
    async fn save(
        &self,
        operation_type: &OperationType,
    ) -> Result<OperationType, OperationTypeRepositoryError> {
        Ok(operation_type.clone())
    }

    async fn retrieve_all(&self) -> Result<Vec<OperationType>, OperationTypeRepositoryError> {
        Ok(Vec::new())
    }
}
