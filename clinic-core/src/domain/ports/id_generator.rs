//! Port for allocating entity identifiers.

use uuid::Uuid;

/// Allocates opaque, globally unique identifier strings.
///
/// One generator instance is injected per entity kind. Generated ids are
/// random and never derived from entity fields; the collision probability is
/// treated as zero. Allocation is synchronous — it never does I/O.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Default generator backed by random UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
