//! Port for user persistence.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_repository_error;

define_repository_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError => "user repository"
}

/// Port for user storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by id. `None` when the id is unknown.
    async fn retrieve(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Insert or fully replace a user record, returning it as persisted.
    async fn save(&self, user: &User) -> Result<User, UserRepositoryError>;

    /// Case-insensitive substring search over user names.
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<User>, UserRepositoryError>;
}

/// Fixture implementation for tests that do not exercise user storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn retrieve(&self, _id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(None)
    }

    async fn save(&self, user: &User) -> Result<User, UserRepositoryError> {
        Ok(user.clone())
    }

    async fn search_by_name(
        &self,
        _fragment: &str,
    ) -> Result<Vec<User>, UserRepositoryError> {
        Ok(Vec::new())
    }
}
