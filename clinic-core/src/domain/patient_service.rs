//! Patient domain service.

use std::sync::Arc;

use crate::domain::ports::{IdGenerator, PatientRepository, PatientRepositoryError};
use crate::domain::{CreatePatientRequest, DomainError, Patient, PatientId};

fn map_repository_error(error: PatientRepositoryError) -> DomainError {
    DomainError::repository(error.to_string())
}

/// Use cases over patient records.
#[derive(Clone)]
pub struct PatientService<R> {
    patients: Arc<R>,
    ids: Arc<dyn IdGenerator>,
}

impl<R> PatientService<R> {
    /// Create a new service with the patient repository and id generator.
    pub fn new(patients: Arc<R>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { patients, ids }
    }
}

impl<R> PatientService<R>
where
    R: PatientRepository,
{
    /// Register a new patient under a freshly allocated id.
    ///
    /// No uniqueness check happens beyond what the repository enforces on
    /// the id.
    pub async fn create_patient(
        &self,
        request: CreatePatientRequest,
    ) -> Result<Patient, DomainError> {
        let patient = Patient {
            id: PatientId::new(self.ids.generate()),
            name: request.name,
            email: request.email,
            phone: request.phone,
            address: request.address,
            city: request.city,
            nationality: request.nationality,
            birth_date: request.birth_date,
            tax_code: request.tax_code,
            medical_history: request.medical_history,
        };

        let saved = self
            .patients
            .save(&patient)
            .await
            .map_err(map_repository_error)?;
        tracing::debug!(patient_id = %saved.id, "patient registered");
        Ok(saved)
    }

    /// Fetch a patient by id; absence is not an error.
    pub async fn retrieve_patient(
        &self,
        id: &PatientId,
    ) -> Result<Option<Patient>, DomainError> {
        self.patients
            .retrieve(id)
            .await
            .map_err(map_repository_error)
    }

    /// Case-insensitive substring search over patient names, in the
    /// repository's (stable) ordering.
    pub async fn search_patients_by_name(
        &self,
        fragment: &str,
    ) -> Result<Vec<Patient>, DomainError> {
        self.patients
            .search_by_name(fragment)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "patient_service_tests.rs"]
mod tests;
