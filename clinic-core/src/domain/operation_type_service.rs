//! Operation-type catalog service.

use std::sync::Arc;

use crate::domain::ports::{OperationTypeRepository, OperationTypeRepositoryError};
use crate::domain::{DomainError, OperationType};

fn map_repository_error(error: OperationTypeRepositoryError) -> DomainError {
    DomainError::repository(error.to_string())
}

/// Use cases over the operation-type catalog.
#[derive(Clone)]
pub struct OperationTypeService<R> {
    catalog: Arc<R>,
}

impl<R> OperationTypeService<R> {
    /// Create a new service with the catalog repository.
    pub fn new(catalog: Arc<R>) -> Self {
        Self { catalog }
    }
}

impl<R> OperationTypeService<R>
where
    R: OperationTypeRepository,
{
    /// Insert or replace the catalog entry with this code.
    ///
    /// Strictly upsert: saving an existing code updates its description and
    /// cost in place and is not an error. Callers needing insert-only
    /// semantics must check existence themselves first.
    pub async fn save_operation_type(
        &self,
        operation_type: OperationType,
    ) -> Result<OperationType, DomainError> {
        self.catalog
            .save(&operation_type)
            .await
            .map_err(map_repository_error)
    }

    /// Every catalog entry, ordered ascending by type code.
    pub async fn retrieve_operation_types(&self) -> Result<Vec<OperationType>, DomainError> {
        self.catalog.retrieve_all().await.map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "operation_type_service_tests.rs"]
mod tests;
