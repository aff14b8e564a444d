//! In-memory reference adapters and deterministic test doubles.
//!
//! Every port has an adapter here backed by a plain map behind a mutex.
//! They double as the executable reference for the repository contracts —
//! notably upsert-by-natural-key on the catalog — and as the storage for the
//! end-to-end service tests. Enabled through the `test-support` feature.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;

use crate::domain::ports::{
    IdGenerator, InvoiceRepository, InvoiceRepositoryError, OperationRepository,
    OperationRepositoryError, OperationTypeRepository, OperationTypeRepositoryError,
    PatientRepository, PatientRepositoryError, StorageService, StorageServiceError,
    UploadFileRequest, UserRepository, UserRepositoryError,
};
use crate::domain::{
    AssetKey, Invoice, InvoiceId, InvoiceStatus, OperationId, OperationNote, OperationType,
    OperationTypeCode, Patient, PatientId, PatientOperation, User, UserId,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(_) => panic!("test-support mutex poisoned"),
    }
}

/// Clock whose reading only moves when a test says so.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn advance_seconds(&self, seconds: i64) {
        *lock(&self.0) += TimeDelta::seconds(seconds);
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *lock(&self.0)
    }
}

/// Generator yielding `prefix-1`, `prefix-2`, … for readable assertions.
pub struct SequenceIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequenceIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn generate(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{n}", self.prefix)
    }
}

/// Case-insensitive substring match used by the name searches.
fn name_matches(name: &str, fragment: &str) -> bool {
    name.to_lowercase().contains(&fragment.to_lowercase())
}

/// In-memory patient store keyed by id.
#[derive(Default)]
pub struct InMemoryPatientRepository {
    patients: Mutex<HashMap<PatientId, Patient>>,
}

#[async_trait]
impl PatientRepository for InMemoryPatientRepository {
    async fn retrieve(
        &self,
        id: &PatientId,
    ) -> Result<Option<Patient>, PatientRepositoryError> {
        Ok(lock(&self.patients).get(id).cloned())
    }

    async fn save(&self, patient: &Patient) -> Result<Patient, PatientRepositoryError> {
        lock(&self.patients).insert(patient.id.clone(), patient.clone());
        Ok(patient.clone())
    }

    async fn search_by_name(
        &self,
        fragment: &str,
    ) -> Result<Vec<Patient>, PatientRepositoryError> {
        let mut matches: Vec<Patient> = lock(&self.patients)
            .values()
            .filter(|patient| name_matches(&patient.name, fragment))
            .cloned()
            .collect();
        // Stable ordering across calls: by name, then id.
        matches.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.as_str().cmp(b.id.as_str())));
        Ok(matches)
    }
}

/// In-memory operation store keyed by id.
#[derive(Default)]
pub struct InMemoryOperationRepository {
    operations: Mutex<HashMap<OperationId, PatientOperation>>,
}

#[async_trait]
impl OperationRepository for InMemoryOperationRepository {
    async fn retrieve(
        &self,
        id: &OperationId,
    ) -> Result<Option<PatientOperation>, OperationRepositoryError> {
        Ok(lock(&self.operations).get(id).cloned())
    }

    async fn save(
        &self,
        operation: &PatientOperation,
    ) -> Result<PatientOperation, OperationRepositoryError> {
        lock(&self.operations).insert(operation.id.clone(), operation.clone());
        Ok(operation.clone())
    }

    async fn find_by_patient_id(
        &self,
        patient_id: &PatientId,
    ) -> Result<Vec<PatientOperation>, OperationRepositoryError> {
        let mut found: Vec<PatientOperation> = lock(&self.operations)
            .values()
            .filter(|operation| &operation.patient_id == patient_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.as_str().cmp(b.id.as_str())));
        Ok(found)
    }

    async fn add_note(
        &self,
        id: &OperationId,
        note: &OperationNote,
    ) -> Result<Option<PatientOperation>, OperationRepositoryError> {
        let mut operations = lock(&self.operations);
        Ok(operations.get_mut(id).map(|operation| {
            operation.notes.push(note.clone());
            operation.updated_at = note.recorded_at;
            operation.clone()
        }))
    }

    async fn add_asset(
        &self,
        id: &OperationId,
        key: &AssetKey,
        recorded_at: DateTime<Utc>,
    ) -> Result<Option<PatientOperation>, OperationRepositoryError> {
        let mut operations = lock(&self.operations);
        Ok(operations.get_mut(id).map(|operation| {
            operation.asset_keys.push(key.clone());
            operation.updated_at = recorded_at;
            operation.clone()
        }))
    }
}

/// In-memory catalog keyed by type code.
///
/// The map is ordered by code, so `retrieve_all` ordering is structural
/// rather than a sort at read time. `save` is the reference implementation
/// of upsert-by-natural-key: the map insert replaces any existing entry for
/// the code.
#[derive(Default)]
pub struct InMemoryOperationTypeRepository {
    entries: Mutex<BTreeMap<OperationTypeCode, OperationType>>,
}

#[async_trait]
impl OperationTypeRepository for InMemoryOperationTypeRepository {
    async fn save(
        &self,
        operation_type: &OperationType,
    ) -> Result<OperationType, OperationTypeRepositoryError> {
        lock(&self.entries).insert(operation_type.code.clone(), operation_type.clone());
        Ok(operation_type.clone())
    }

    async fn retrieve_all(&self) -> Result<Vec<OperationType>, OperationTypeRepositoryError> {
        Ok(lock(&self.entries).values().cloned().collect())
    }
}

/// In-memory invoice store keyed by id.
#[derive(Default)]
pub struct InMemoryInvoiceRepository {
    invoices: Mutex<HashMap<InvoiceId, Invoice>>,
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoiceRepository {
    async fn save(&self, invoice: &Invoice) -> Result<Invoice, InvoiceRepositoryError> {
        lock(&self.invoices).insert(invoice.id.clone(), invoice.clone());
        Ok(invoice.clone())
    }

    async fn retrieve(
        &self,
        id: &InvoiceId,
    ) -> Result<Option<Invoice>, InvoiceRepositoryError> {
        Ok(lock(&self.invoices).get(id).cloned())
    }

    async fn find_by_operation_id(
        &self,
        operation_id: &OperationId,
    ) -> Result<Vec<Invoice>, InvoiceRepositoryError> {
        let mut found: Vec<Invoice> = lock(&self.invoices)
            .values()
            .filter(|invoice| &invoice.operation_id == operation_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.as_str().cmp(b.id.as_str())));
        Ok(found)
    }

    async fn update_status(
        &self,
        id: &InvoiceId,
        status: InvoiceStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Invoice>, InvoiceRepositoryError> {
        let mut invoices = lock(&self.invoices);
        Ok(invoices.get_mut(id).map(|invoice| {
            invoice.status = status;
            invoice.updated_at = updated_at;
            invoice.clone()
        }))
    }
}

/// In-memory user store keyed by id.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn retrieve(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(lock(&self.users).get(id).cloned())
    }

    async fn save(&self, user: &User) -> Result<User, UserRepositoryError> {
        lock(&self.users).insert(user.id.clone(), user.clone());
        Ok(user.clone())
    }

    async fn search_by_name(
        &self,
        fragment: &str,
    ) -> Result<Vec<User>, UserRepositoryError> {
        let mut matches: Vec<User> = lock(&self.users)
            .values()
            .filter(|user| name_matches(&user.name, fragment))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.as_str().cmp(b.id.as_str())));
        Ok(matches)
    }
}

/// In-memory object store keyed by asset key.
#[derive(Default)]
pub struct InMemoryStorageService {
    objects: Mutex<HashMap<AssetKey, Bytes>>,
}

impl InMemoryStorageService {
    /// Whether an object was uploaded under this key. Lets tests observe the
    /// upload side effect independently of the metadata append.
    pub fn contains(&self, key: &AssetKey) -> bool {
        lock(&self.objects).contains_key(key)
    }
}

#[async_trait]
impl StorageService for InMemoryStorageService {
    async fn upload_file(&self, request: UploadFileRequest) -> Result<(), StorageServiceError> {
        lock(&self.objects).insert(request.key, request.body);
        Ok(())
    }

    async fn get_file(&self, key: &AssetKey) -> Result<Bytes, StorageServiceError> {
        lock(&self.objects)
            .get(key)
            .cloned()
            .ok_or_else(|| StorageServiceError::not_found(key.clone()))
    }
}
