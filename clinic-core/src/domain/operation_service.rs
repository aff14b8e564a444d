//! Operation domain service.

use std::sync::Arc;

use bytes::Bytes;
use mockable::Clock;

use crate::domain::ports::{
    IdGenerator, OperationRepository, OperationRepositoryError, PatientRepository,
    PatientRepositoryError, StorageService, StorageServiceError, UploadFileRequest,
};
use crate::domain::{
    AssetKey, CompositeOperationRequestValidator, CreateOperationRequest, DomainError,
    OperationId, OperationNote, PatientId, PatientOperation,
};

fn map_operation_repository_error(error: OperationRepositoryError) -> DomainError {
    DomainError::repository(error.to_string())
}

fn map_patient_repository_error(error: PatientRepositoryError) -> DomainError {
    DomainError::repository(error.to_string())
}

fn map_storage_error(error: StorageServiceError) -> DomainError {
    DomainError::storage(error.to_string())
}

/// Use cases over the operations performed on patients.
pub struct OperationService<O, P, S> {
    operations: Arc<O>,
    patients: Arc<P>,
    storage: Arc<S>,
    validator: CompositeOperationRequestValidator,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl<O, P, S> OperationService<O, P, S> {
    /// Create a new service with its collaborators.
    pub fn new(
        operations: Arc<O>,
        patients: Arc<P>,
        storage: Arc<S>,
        validator: CompositeOperationRequestValidator,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            operations,
            patients,
            storage,
            validator,
            ids,
            clock,
        }
    }
}

impl<O, P, S> OperationService<O, P, S>
where
    O: OperationRepository,
    P: PatientRepository,
    S: StorageService,
{
    /// Record a new operation for an existing patient.
    ///
    /// The request runs through the composite validator, then the patient
    /// reference is checked; nothing is persisted unless both pass. Creation
    /// and last-update stamps come from a single clock read.
    pub async fn create_operation(
        &self,
        request: CreateOperationRequest,
    ) -> Result<PatientOperation, DomainError> {
        self.validator.validate(&request)?;
        self.ensure_patient_exists(&request.patient_id).await?;

        let now = self.clock.utc();
        let operation = PatientOperation {
            id: OperationId::new(self.ids.generate()),
            patient_id: request.patient_id,
            operation_type: request.operation_type,
            description: request.description,
            executor: request.executor,
            asset_keys: Vec::new(),
            notes: Vec::new(),
            estimated_cost: request.estimated_cost,
            details: request.details,
            created_at: now,
            updated_at: now,
        };

        let saved = self
            .operations
            .save(&operation)
            .await
            .map_err(map_operation_repository_error)?;
        tracing::debug!(
            operation_id = %saved.id,
            patient_id = %saved.patient_id,
            "operation recorded"
        );
        Ok(saved)
    }

    /// Fetch an operation by id; absence is not an error.
    pub async fn get_operation(
        &self,
        id: &OperationId,
    ) -> Result<Option<PatientOperation>, DomainError> {
        self.operations
            .retrieve(id)
            .await
            .map_err(map_operation_repository_error)
    }

    /// Every operation recorded for the given patient.
    ///
    /// Re-checks patient existence even when the caller has just done so:
    /// each entry point taking a patient id enforces the precondition
    /// itself rather than trusting earlier calls.
    pub async fn retrieve_operations_for_patient(
        &self,
        patient_id: &PatientId,
    ) -> Result<Vec<PatientOperation>, DomainError> {
        self.ensure_patient_exists(patient_id).await?;
        self.operations
            .find_by_patient_id(patient_id)
            .await
            .map_err(map_operation_repository_error)
    }

    /// Append a note, timestamped from the injected clock. `None` when the
    /// operation is unknown.
    pub async fn add_operation_note(
        &self,
        id: &OperationId,
        text: String,
    ) -> Result<Option<PatientOperation>, DomainError> {
        let note = OperationNote {
            text,
            recorded_at: self.clock.utc(),
        };
        self.operations
            .add_note(id, &note)
            .await
            .map_err(map_operation_repository_error)
    }

    /// Upload an asset and attach its key to the operation.
    ///
    /// Two non-atomic steps, in this order: upload to the object store, then
    /// append the key. When the append finds no such operation the upload
    /// has already happened and the object stays behind; the call returns
    /// `None` without raising. Storage failures propagate and nothing is
    /// attached.
    pub async fn add_operation_asset(
        &self,
        id: &OperationId,
        key: AssetKey,
        content_length: u64,
        content_type: String,
        body: Bytes,
    ) -> Result<Option<PatientOperation>, DomainError> {
        self.storage
            .upload_file(UploadFileRequest {
                key: key.clone(),
                content_length,
                content_type,
                body,
            })
            .await
            .map_err(map_storage_error)?;

        let updated = self
            .operations
            .add_asset(id, &key, self.clock.utc())
            .await
            .map_err(map_operation_repository_error)?;
        if updated.is_none() {
            tracing::warn!(
                operation_id = %id,
                asset_key = %key,
                "asset uploaded but the operation does not exist; object left behind"
            );
        }
        Ok(updated)
    }

    async fn ensure_patient_exists(&self, patient_id: &PatientId) -> Result<(), DomainError> {
        let found = self
            .patients
            .retrieve(patient_id)
            .await
            .map_err(map_patient_repository_error)?;
        match found {
            Some(_) => Ok(()),
            None => Err(DomainError::patient_not_found(patient_id)),
        }
    }
}

#[cfg(test)]
#[path = "operation_service_tests.rs"]
mod tests;
