//! End-to-end service flows over the in-memory reference adapters.

use std::collections::HashSet;
use std::sync::Arc;

use bytes::Bytes;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use clinic_core::domain::ports::UuidIdGenerator;
use clinic_core::domain::{
    AssetKey, CompositeOperationRequestValidator, CreateInvoiceRequest, CreateOperationRequest,
    CreatePatientRequest, CreateUserRequest, DomainError, InvoiceService, InvoiceStatus, Money,
    OperationId, OperationService, OperationTypeCode, PatientId, PatientService, ToothDetail,
    ToothKind, UserService,
};
use clinic_core::test_support::{
    InMemoryInvoiceRepository, InMemoryOperationRepository, InMemoryPatientRepository,
    InMemoryStorageService, InMemoryUserRepository, MutableClock, SequenceIdGenerator,
};

fn dec(raw: &str) -> Decimal {
    raw.parse().expect("literal decimal")
}

fn patient_request(name: &str) -> CreatePatientRequest {
    CreatePatientRequest {
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: None,
        address: None,
        city: Some("Torino".to_owned()),
        nationality: None,
        birth_date: NaiveDate::from_ymd_opt(1987, 4, 12).expect("valid date"),
        tax_code: "BNCNNA87D52L219K".to_owned(),
        medical_history: String::new(),
    }
}

fn operation_request(patient_id: PatientId) -> CreateOperationRequest {
    CreateOperationRequest {
        patient_id,
        operation_type: OperationTypeCode::new("SURGERY"),
        description: "wisdom tooth extraction".to_owned(),
        executor: "Dr. Rossi".to_owned(),
        estimated_cost: Money::eur(dec("100.00")),
        details: vec![
            ToothDetail {
                tooth_number: 18,
                tooth_kind: ToothKind::Permanent,
                estimated_cost: Money::eur(dec("60.00")),
            },
            ToothDetail {
                tooth_number: 28,
                tooth_kind: ToothKind::Permanent,
                estimated_cost: Money::eur(dec("40.00")),
            },
        ],
    }
}

struct Harness {
    operations: Arc<InMemoryOperationRepository>,
    invoices: Arc<InMemoryInvoiceRepository>,
    storage: Arc<InMemoryStorageService>,
    clock: Arc<MutableClock>,
    patient_service: PatientService<InMemoryPatientRepository>,
    operation_service: OperationService<
        InMemoryOperationRepository,
        InMemoryPatientRepository,
        InMemoryStorageService,
    >,
    invoice_service: InvoiceService<InMemoryInvoiceRepository, InMemoryOperationRepository>,
}

impl Harness {
    fn new() -> Self {
        let patients = Arc::new(InMemoryPatientRepository::default());
        let operations = Arc::new(InMemoryOperationRepository::default());
        let invoices = Arc::new(InMemoryInvoiceRepository::default());
        let storage = Arc::new(InMemoryStorageService::default());
        let clock = Arc::new(MutableClock::new(Utc::now()));

        let patient_service = PatientService::new(
            Arc::clone(&patients),
            Arc::new(SequenceIdGenerator::new("patient")),
        );
        let operation_service = OperationService::new(
            Arc::clone(&operations),
            Arc::clone(&patients),
            Arc::clone(&storage),
            CompositeOperationRequestValidator::default(),
            Arc::new(SequenceIdGenerator::new("operation")),
            clock.clone(),
        );
        let invoice_service = InvoiceService::new(
            Arc::clone(&invoices),
            Arc::clone(&operations),
            Arc::new(SequenceIdGenerator::new("invoice")),
            clock.clone(),
        );

        Self {
            operations,
            invoices,
            storage,
            clock,
            patient_service,
            operation_service,
            invoice_service,
        }
    }
}

#[tokio::test]
async fn registering_and_finding_patients() {
    let harness = Harness::new();

    let anna = harness
        .patient_service
        .create_patient(patient_request("Anna Bianchi"))
        .await
        .expect("create succeeds");
    harness
        .patient_service
        .create_patient(patient_request("Luca Verdi"))
        .await
        .expect("create succeeds");

    let found = harness
        .patient_service
        .retrieve_patient(&anna.id)
        .await
        .expect("lookup succeeds")
        .expect("anna exists");
    assert_eq!(found, anna);

    // Case-insensitive substring match.
    let matches = harness
        .patient_service
        .search_patients_by_name("BIAN")
        .await
        .expect("search succeeds");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Anna Bianchi");

    let nobody = harness
        .patient_service
        .retrieve_patient(&PatientId::new("patient-404"))
        .await
        .expect("lookup succeeds");
    assert!(nobody.is_none());
}

#[tokio::test]
async fn every_created_entity_gets_a_fresh_id() {
    let patients = Arc::new(InMemoryPatientRepository::default());
    let service = PatientService::new(Arc::clone(&patients), Arc::new(UuidIdGenerator));

    let mut seen = HashSet::new();
    for n in 0..120 {
        let patient = service
            .create_patient(patient_request(&format!("Patient {n}")))
            .await
            .expect("create succeeds");
        assert!(seen.insert(patient.id), "id allocated twice");
    }
}

#[tokio::test]
async fn recording_an_operation_for_an_unknown_patient_persists_nothing() {
    let harness = Harness::new();
    let ghost = PatientId::new("patient-404");

    let error = harness
        .operation_service
        .create_operation(operation_request(ghost.clone()))
        .await
        .expect_err("unknown patient");
    assert_eq!(error, DomainError::patient_not_found(&ghost));

    use clinic_core::domain::ports::OperationRepository;
    let stored = harness
        .operations
        .find_by_patient_id(&ghost)
        .await
        .expect("listing succeeds");
    assert!(stored.is_empty(), "nothing may be persisted");
}

#[tokio::test]
async fn operation_lifecycle_with_notes_and_assets() {
    let harness = Harness::new();
    let patient = harness
        .patient_service
        .create_patient(patient_request("Anna Bianchi"))
        .await
        .expect("create succeeds");

    let operation = harness
        .operation_service
        .create_operation(operation_request(patient.id.clone()))
        .await
        .expect("create succeeds");
    assert_eq!(operation.created_at, operation.updated_at);

    let fetched = harness
        .operation_service
        .get_operation(&operation.id)
        .await
        .expect("lookup succeeds")
        .expect("operation exists");
    assert_eq!(fetched, operation);
    let unknown = harness
        .operation_service
        .get_operation(&OperationId::new("operation-404"))
        .await
        .expect("lookup succeeds");
    assert!(unknown.is_none());

    // Listing re-checks the patient and then finds the operation.
    let listed = harness
        .operation_service
        .retrieve_operations_for_patient(&patient.id)
        .await
        .expect("listing succeeds");
    assert_eq!(listed, vec![operation.clone()]);

    harness.clock.advance_seconds(60);
    let with_note = harness
        .operation_service
        .add_operation_note(&operation.id, "sutures removed".to_owned())
        .await
        .expect("append succeeds")
        .expect("operation exists");
    assert_eq!(with_note.notes.len(), 1);
    assert_eq!(with_note.notes[0].text, "sutures removed");
    assert_eq!(with_note.updated_at, with_note.notes[0].recorded_at);
    assert!(with_note.updated_at > operation.created_at);

    harness.clock.advance_seconds(60);
    let key = AssetKey::new(format!("operations/{}/xray.png", operation.id));
    let with_asset = harness
        .operation_service
        .add_operation_asset(
            &operation.id,
            key.clone(),
            4,
            "image/png".to_owned(),
            Bytes::from_static(b"\x89PNG"),
        )
        .await
        .expect("upload and append succeed")
        .expect("operation exists");
    assert_eq!(with_asset.asset_keys, vec![key.clone()]);
    assert!(with_asset.updated_at > with_note.updated_at);

    use clinic_core::domain::ports::StorageService;
    let body = harness
        .storage
        .get_file(&key)
        .await
        .expect("object stored");
    assert_eq!(body, Bytes::from_static(b"\x89PNG"));
}

#[tokio::test]
async fn orphaned_uploads_are_accepted_when_the_operation_is_unknown() {
    let harness = Harness::new();
    let key = AssetKey::new("operations/operation-404/xray.png");

    let result = harness
        .operation_service
        .add_operation_asset(
            &OperationId::new("operation-404"),
            key.clone(),
            4,
            "image/png".to_owned(),
            Bytes::from_static(b"\x89PNG"),
        )
        .await
        .expect("absent result, not an error");
    assert!(result.is_none());

    // The upload happened anyway: the object is observable in storage.
    assert!(harness.storage.contains(&key));
}

#[tokio::test]
async fn invoice_lifecycle() {
    let harness = Harness::new();
    let patient = harness
        .patient_service
        .create_patient(patient_request("Anna Bianchi"))
        .await
        .expect("create succeeds");
    let operation = harness
        .operation_service
        .create_operation(operation_request(patient.id.clone()))
        .await
        .expect("create succeeds");

    let invoice = harness
        .invoice_service
        .create_invoice(CreateInvoiceRequest {
            operation_id: operation.id.clone(),
            amount: Money::eur(dec("100.00")),
        })
        .await
        .expect("create succeeds");
    assert_eq!(invoice.status, InvoiceStatus::Pending);
    assert_eq!(invoice.created_at, invoice.updated_at);

    harness.clock.advance_seconds(3600);
    let paid = harness
        .invoice_service
        .update_invoice_status(&invoice.id, InvoiceStatus::Paid)
        .await
        .expect("update succeeds")
        .expect("invoice exists");
    assert_eq!(paid.status, InvoiceStatus::Paid);
    assert!(paid.updated_at > paid.created_at);

    // No guard on transitions: PAID may go back to PENDING.
    let reopened = harness
        .invoice_service
        .update_invoice_status(&invoice.id, InvoiceStatus::Pending)
        .await
        .expect("update succeeds")
        .expect("invoice exists");
    assert_eq!(reopened.status, InvoiceStatus::Pending);

    let listed = harness
        .invoice_service
        .get_invoices_for_operation(&operation.id)
        .await
        .expect("listing succeeds");
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn billing_an_unknown_operation_persists_nothing() {
    let harness = Harness::new();
    let ghost = OperationId::new("operation-404");

    let error = harness
        .invoice_service
        .create_invoice(CreateInvoiceRequest {
            operation_id: ghost.clone(),
            amount: Money::eur(dec("100.00")),
        })
        .await
        .expect_err("invalid operation reference");
    assert_eq!(error, DomainError::operation_not_found(&ghost));

    // Listing for the unknown operation stays empty — and, deliberately,
    // does not itself fail.
    let listed = harness
        .invoice_service
        .get_invoices_for_operation(&ghost)
        .await
        .expect("empty list, not an error");
    assert!(listed.is_empty());

    use clinic_core::domain::ports::InvoiceRepository;
    let stored = harness
        .invoices
        .find_by_operation_id(&ghost)
        .await
        .expect("listing succeeds");
    assert!(stored.is_empty());
}

#[tokio::test]
async fn updating_an_unknown_invoice_returns_absent() {
    let harness = Harness::new();
    let result = harness
        .invoice_service
        .update_invoice_status(
            &clinic_core::domain::InvoiceId::new("invoice-404"),
            InvoiceStatus::Cancelled,
        )
        .await
        .expect("update succeeds");
    assert!(result.is_none());
}

#[tokio::test]
async fn user_accounts_round_trip() {
    let users = Arc::new(InMemoryUserRepository::default());
    let service = UserService::new(
        Arc::clone(&users),
        Arc::new(SequenceIdGenerator::new("user")),
    );

    let marta = service
        .create_user(CreateUserRequest {
            name: "Marta Conti".to_owned(),
            email: "marta.conti@example.com".to_owned(),
            phone: None,
            address: None,
            city: Some("Milano".to_owned()),
            birth_date: NaiveDate::from_ymd_opt(1990, 9, 3).expect("valid date"),
        })
        .await
        .expect("create succeeds");

    let found = service
        .retrieve_user(&marta.id)
        .await
        .expect("lookup succeeds")
        .expect("marta exists");
    assert_eq!(found, marta);

    let matches = service
        .search_users_by_name("CONTI")
        .await
        .expect("search succeeds");
    assert_eq!(matches, vec![marta]);
}
