//! Domain ports: the contracts persistence and storage adapters must honor.
//!
//! One file per port. Every repository port carries its own two-variant
//! error enum, a mockall automock for unit tests, and a no-op fixture
//! implementation for tests that do not exercise it. Reference in-memory
//! adapters live in [`crate::test_support`].

mod macros;
pub(crate) use macros::define_repository_error;

mod id_generator;
mod invoice_repository;
mod operation_repository;
mod operation_type_repository;
mod patient_repository;
mod storage_service;
mod user_repository;

#[cfg(test)]
pub use id_generator::MockIdGenerator;
pub use id_generator::{IdGenerator, UuidIdGenerator};
#[cfg(test)]
pub use invoice_repository::MockInvoiceRepository;
pub use invoice_repository::{
    FixtureInvoiceRepository, InvoiceRepository, InvoiceRepositoryError,
};
#[cfg(test)]
pub use operation_repository::MockOperationRepository;
pub use operation_repository::{
    FixtureOperationRepository, OperationRepository, OperationRepositoryError,
};
#[cfg(test)]
pub use operation_type_repository::MockOperationTypeRepository;
pub use operation_type_repository::{
    FixtureOperationTypeRepository, OperationTypeRepository, OperationTypeRepositoryError,
};
#[cfg(test)]
pub use patient_repository::MockPatientRepository;
pub use patient_repository::{
    FixturePatientRepository, PatientRepository, PatientRepositoryError,
};
#[cfg(test)]
pub use storage_service::MockStorageService;
pub use storage_service::{
    FixtureStorageService, StorageService, StorageServiceError, UploadFileRequest,
};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserRepository, UserRepositoryError};
