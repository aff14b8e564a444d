//! Catalog of operation types and their estimated base costs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Money;

/// Natural key of a catalog entry, e.g. `SURGERY`.
///
/// Unlike the surrogate entity ids, the code is business-meaningful: saving a
/// type under an existing code replaces that entry. The derived ordering is
/// lexicographic and is the listing order of the catalog.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OperationTypeCode(String);

impl OperationTypeCode {
    /// Wrap a catalog code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The raw code string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for OperationTypeCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for OperationTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for OperationTypeCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<OperationTypeCode> for String {
    fn from(value: OperationTypeCode) -> Self {
        value.0
    }
}

/// A catalog entry: what an operation kind is expected to cost.
///
/// Identity is the code, not a surrogate id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationType {
    pub code: OperationTypeCode,
    pub description: String,
    pub estimated_cost: Money,
}
