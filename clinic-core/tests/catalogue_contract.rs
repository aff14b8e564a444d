//! Contract tests for the operation-type catalog.
//!
//! Runs against the in-memory reference adapter; a persistent adapter must
//! pass the same assertions unchanged.

use std::sync::Arc;

use rust_decimal::Decimal;

use clinic_core::domain::ports::OperationTypeRepository;
use clinic_core::domain::{Money, OperationType, OperationTypeCode, OperationTypeService};
use clinic_core::test_support::InMemoryOperationTypeRepository;

fn dec(raw: &str) -> Decimal {
    raw.parse().expect("literal decimal")
}

fn entry(code: &str, description: &str, cost: &str) -> OperationType {
    OperationType {
        code: OperationTypeCode::new(code),
        description: description.to_owned(),
        estimated_cost: Money::eur(dec(cost)),
    }
}

#[tokio::test]
async fn saving_an_existing_code_replaces_the_row_in_place() {
    let repo = InMemoryOperationTypeRepository::default();

    repo.save(&entry("SURGERY", "Surgical procedures", "400.00"))
        .await
        .expect("insert succeeds");
    let before = repo.retrieve_all().await.expect("listing succeeds");

    repo.save(&entry("SURGERY", "Oral surgery", "450.00"))
        .await
        .expect("replace succeeds");
    let after = repo.retrieve_all().await.expect("listing succeeds");

    assert_eq!(after.len(), before.len(), "no duplicate row");
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].description, "Oral surgery");
    assert_eq!(after[0].estimated_cost, Money::eur(dec("450.00")));
}

#[tokio::test]
async fn listing_orders_entries_by_code_ascending() {
    let repo = InMemoryOperationTypeRepository::default();
    for operation_type in [
        entry("SURGERY", "Surgical procedures", "400.00"),
        entry("CONSULTATION", "First visit", "50.00"),
        entry("TREATMENT", "Conservative treatment", "120.00"),
        entry("DIAGNOSTIC", "Imaging and diagnosis", "80.00"),
    ] {
        repo.save(&operation_type).await.expect("insert succeeds");
    }

    let listed = repo.retrieve_all().await.expect("listing succeeds");
    let codes: Vec<&str> = listed
        .iter()
        .map(|operation_type| operation_type.code.as_str())
        .collect();
    assert_eq!(
        codes,
        ["CONSULTATION", "DIAGNOSTIC", "SURGERY", "TREATMENT"]
    );
}

#[tokio::test]
async fn the_service_exposes_the_same_upsert_semantics() {
    let repo = Arc::new(InMemoryOperationTypeRepository::default());
    let service = OperationTypeService::new(Arc::clone(&repo));

    service
        .save_operation_type(entry("CONSULTATION", "First visit", "50.00"))
        .await
        .expect("insert succeeds");
    // Second save with the same code is not an error.
    let replaced = service
        .save_operation_type(entry("CONSULTATION", "Follow-up visit", "35.00"))
        .await
        .expect("upsert succeeds");
    assert_eq!(replaced.description, "Follow-up visit");

    let listed = service
        .retrieve_operation_types()
        .await
        .expect("listing succeeds");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].estimated_cost, Money::eur(dec("35.00")));
}
