//! Domain core for a dental practice's clinical records.
//!
//! Patients, the operations performed on them, the invoices billed for
//! those operations, and the operation-type catalog. Persistence, transport,
//! and object-store bindings are adapters behind the port traits in
//! [`domain::ports`]; this crate owns the entities, the business rules, and
//! the contracts those adapters must honor.

pub mod domain;

#[cfg(feature = "test-support")]
pub mod test_support;
