//! Opaque entity identifiers.
//!
//! Ids are allocated by an injected [`IdGenerator`](crate::domain::ports::IdGenerator)
//! and treated as opaque strings: value equality, string representation, no
//! further structure. They are never derived from other fields.

macro_rules! define_entity_id {
    (
        $(#[$outer:meta])*
        $name:ident
    ) => {
        $(#[$outer])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an externally generated identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The raw identifier string.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_entity_id! {
    /// Identifier of a patient record.
    PatientId
}

define_entity_id! {
    /// Identifier of an operation performed on a patient.
    OperationId
}

define_entity_id! {
    /// Identifier of an invoice.
    InvoiceId
}

define_entity_id! {
    /// Identifier of a back-office user.
    UserId
}

define_entity_id! {
    /// Key of an uploaded file in object storage.
    AssetKey
}
