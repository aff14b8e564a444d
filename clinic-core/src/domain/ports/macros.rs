//! Helper macro for repository port error enums.
//!
//! Every repository adapter fails through the same two shapes, so the enum is
//! stamped out per port: distinct types keep mockall signatures honest while
//! the services map all of them to the same opaque domain variant.

macro_rules! define_repository_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident => $label:literal
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            /// The backing store could not be reached.
            #[error("{} connection failed: {message}", $label)]
            Connection { message: String },
            /// A query or mutation failed during execution.
            #[error("{} query failed: {message}", $label)]
            Query { message: String },
        }

        impl $name {
            pub fn connection(message: impl Into<String>) -> Self {
                Self::Connection {
                    message: message.into(),
                }
            }

            pub fn query(message: impl Into<String>) -> Self {
                Self::Query {
                    message: message.into(),
                }
            }
        }
    };
}

pub(crate) use define_repository_error;
