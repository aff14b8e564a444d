//! Domain model and services for the practice's clinical records.
//!
//! Layering, leaf first: value objects ([`money`], [`ids`]) → entities
//! ([`patient`], [`operation`], [`operation_type`], [`invoice`], [`user`])
//! → the adapter contracts in [`ports`] → [`validation`] rules → the
//! services orchestrating repositories, validators, id generation, and the
//! clock. Every service call is a synchronous request/response unit with no
//! shared mutable state; atomicity is only as strong as the adapters behind
//! the ports.

pub mod error;
pub mod ids;
pub mod invoice;
pub mod invoice_service;
pub mod money;
pub mod operation;
pub mod operation_service;
pub mod operation_type;
pub mod operation_type_service;
pub mod patient;
pub mod patient_service;
pub mod ports;
pub mod user;
pub mod user_service;
pub mod validation;

pub use self::error::{DomainError, EntityKind, ValidationError};
pub use self::ids::{AssetKey, InvoiceId, OperationId, PatientId, UserId};
pub use self::invoice::{CreateInvoiceRequest, Invoice, InvoiceStatus};
pub use self::invoice_service::InvoiceService;
pub use self::money::{CurrencyCode, Money, MoneyValidationError};
pub use self::operation::{
    CreateOperationRequest, OperationNote, PatientOperation, ToothDetail, ToothKind,
};
pub use self::operation_service::OperationService;
pub use self::operation_type::{OperationType, OperationTypeCode};
pub use self::operation_type_service::OperationTypeService;
pub use self::patient::{CreatePatientRequest, Patient};
pub use self::patient_service::PatientService;
pub use self::user::{CreateUserRequest, User};
pub use self::user_service::UserService;
pub use self::validation::{
    CompositeOperationRequestValidator, EstimatedAmountEqualToDetailsSumValidator,
    OperationRequestValidator,
};
