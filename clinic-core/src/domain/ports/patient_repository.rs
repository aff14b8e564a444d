//! Port for patient persistence.

use async_trait::async_trait;

use crate::domain::{Patient, PatientId};

use super::define_repository_error;

define_repository_error! {
    /// Errors raised by patient repository adapters.
    pub enum PatientRepositoryError => "patient repository"
}

/// Port for patient storage and retrieval.
///
/// `save` is insert-or-replace keyed by id: saving an id that already exists
/// replaces the whole record. There is no partial update and no delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Fetch a patient by id. `None` when the id is unknown.
    async fn retrieve(
        &self,
        id: &PatientId,
    ) -> Result<Option<Patient>, PatientRepositoryError>;

    /// Insert or fully replace a patient record, returning it as persisted.
    async fn save(&self, patient: &Patient) -> Result<Patient, PatientRepositoryError>;

    /// Case-insensitive substring search over patient names.
    ///
    /// Ordering is implementation-defined but must be stable across calls.
    async fn search_by_name(
        &self,
        fragment: &str,
    ) -> Result<Vec<Patient>, PatientRepositoryError>;
}

/// Fixture implementation for tests that do not exercise patient storage.
///
/// Lookups find nothing, saves echo their input, searches are empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePatientRepository;

#[async_trait]
impl PatientRepository for FixturePatientRepository {
    async fn retrieve(
        &self,
        _id: &PatientId,
    ) -> Result<Option<Patient>, PatientRepositoryError> {
        Ok(None)
    }

    async fn save(&self, patient: &Patient) -> Result<Patient, PatientRepositoryError> {
        Ok(patient.clone())
    }

    async fn search_by_name(
        &self,
        _fragment: &str,
    ) -> Result<Vec<Patient>, PatientRepositoryError> {
        Ok(Vec::new())
    }
}
