//! Port for operation persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{AssetKey, OperationId, OperationNote, PatientId, PatientOperation};

use super::define_repository_error;

define_repository_error! {
    /// Errors raised by operation repository adapters.
    pub enum OperationRepositoryError => "operation repository"
}

/// Port for operation storage, retrieval, and incremental appends.
///
/// The append operations receive fully-built values from the service: notes
/// arrive already timestamped and asset appends carry the append instant, so
/// adapters never read a clock. Both appends must advance the operation's
/// last-update timestamp to the supplied instant and return `None` when the
/// id is unknown.
///
/// Append is read-modify-write with no optimistic-concurrency token;
/// serializing concurrent appends against the same id is the adapter's
/// responsibility.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OperationRepository: Send + Sync {
    /// Fetch an operation by id. `None` when the id is unknown.
    async fn retrieve(
        &self,
        id: &OperationId,
    ) -> Result<Option<PatientOperation>, OperationRepositoryError>;

    /// Insert or fully replace an operation, returning it as persisted.
    async fn save(
        &self,
        operation: &PatientOperation,
    ) -> Result<PatientOperation, OperationRepositoryError>;

    /// Every operation recorded for the given patient.
    async fn find_by_patient_id(
        &self,
        patient_id: &PatientId,
    ) -> Result<Vec<PatientOperation>, OperationRepositoryError>;

    /// Append a note, advancing the last-update stamp to the note's
    /// `recorded_at`. `None` when the id is unknown.
    async fn add_note(
        &self,
        id: &OperationId,
        note: &OperationNote,
    ) -> Result<Option<PatientOperation>, OperationRepositoryError>;

    /// Append an asset key, advancing the last-update stamp to `recorded_at`.
    /// `None` when the id is unknown.
    async fn add_asset(
        &self,
        id: &OperationId,
        key: &AssetKey,
        recorded_at: DateTime<Utc>,
    ) -> Result<Option<PatientOperation>, OperationRepositoryError>;
}

/// Fixture implementation for tests that do not exercise operation storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureOperationRepository;

#[async_trait]
impl OperationRepository for FixtureOperationRepository {
    async fn retrieve(
        &self,
        _id: &OperationId,
    ) -> Result<Option<PatientOperation>, OperationRepositoryError> {
        Ok(None)
    }

    async fn save(
        &self,
        operation: &PatientOperation,
    ) -> Result<PatientOperation, OperationRepositoryError> {
        Ok(operation.clone())
    }

    async fn find_by_patient_id(
        &self,
        _patient_id: &PatientId,
    ) -> Result<Vec<PatientOperation>, OperationRepositoryError> {
        Ok(Vec::new())
    }

    async fn add_note(
        &self,
        _id: &OperationId,
        _note: &OperationNote,
    ) -> Result<Option<PatientOperation>, OperationRepositoryError> {
        Ok(None)
    }

    async fn add_asset(
        &self,
        _id: &OperationId,
        _key: &AssetKey,
        _recorded_at: DateTime<Utc>,
    ) -> Result<Option<PatientOperation>, OperationRepositoryError> {
        Ok(None)
    }
}
