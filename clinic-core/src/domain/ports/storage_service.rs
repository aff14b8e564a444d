//! Port for the object store holding operation assets.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::AssetKey;

/// Errors raised by object-storage adapters.
///
/// Unlike the repository ports, storage failures are keyed: the offending
/// asset key travels with the error so callers can report which upload or
/// download went wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageServiceError {
    /// The store could not be reached.
    #[error("storage connection failed: {message}")]
    Connection { message: String },
    /// No object exists under the requested key.
    #[error("no stored object under key {key}")]
    NotFound { key: AssetKey },
    /// The transfer itself failed part-way.
    #[error("transfer failed for key {key}: {message}")]
    Transfer { key: AssetKey, message: String },
}

impl StorageServiceError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn not_found(key: AssetKey) -> Self {
        Self::NotFound { key }
    }

    pub fn transfer(key: AssetKey, message: impl Into<String>) -> Self {
        Self::Transfer {
            key,
            message: message.into(),
        }
    }
}

/// What to upload and under which key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFileRequest {
    pub key: AssetKey,
    pub content_length: u64,
    pub content_type: String,
    pub body: Bytes,
}

/// Port for uploading and fetching operation assets.
///
/// Errors from the underlying store propagate unchanged; nothing is retried
/// at this layer. Uploads happen before the asset key is attached to its
/// operation, so an orphaned object after a failed attach is possible — see
/// [`OperationService::add_operation_asset`](crate::domain::OperationService::add_operation_asset)
/// for the accepted partial-failure mode. Adapters are not expected to roll
/// uploads back.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageService: Send + Sync {
    /// Store the payload under `request.key`, replacing any previous object
    /// with that key.
    async fn upload_file(&self, request: UploadFileRequest) -> Result<(), StorageServiceError>;

    /// Fetch the payload stored under `key`.
    async fn get_file(&self, key: &AssetKey) -> Result<Bytes, StorageServiceError>;
}

/// Fixture implementation that swallows uploads and holds no objects.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureStorageService;

#[async_trait]
impl StorageService for FixtureStorageService {
    async fn upload_file(&self, _request: UploadFileRequest) -> Result<(), StorageServiceError> {
        Ok(())
    }

    async fn get_file(&self, key: &AssetKey) -> Result<Bytes, StorageServiceError> {
        Err(StorageServiceError::not_found(key.clone()))
    }
}
