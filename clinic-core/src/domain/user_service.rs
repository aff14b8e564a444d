//! User domain service.

use std::sync::Arc;

use crate::domain::ports::{IdGenerator, UserRepository, UserRepositoryError};
use crate::domain::{CreateUserRequest, DomainError, User, UserId};

fn map_repository_error(error: UserRepositoryError) -> DomainError {
    DomainError::repository(error.to_string())
}

/// Thin CRUD orchestration over user accounts. No cross-entity validation.
#[derive(Clone)]
pub struct UserService<R> {
    users: Arc<R>,
    ids: Arc<dyn IdGenerator>,
}

impl<R> UserService<R> {
    /// Create a new service with the user repository and id generator.
    pub fn new(users: Arc<R>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { users, ids }
    }
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    /// Create a user account under a freshly allocated id.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        let user = User {
            id: UserId::new(self.ids.generate()),
            name: request.name,
            email: request.email,
            phone: request.phone,
            address: request.address,
            city: request.city,
            birth_date: request.birth_date,
        };

        self.users.save(&user).await.map_err(map_repository_error)
    }

    /// Fetch a user by id; absence is not an error.
    pub async fn retrieve_user(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.users.retrieve(id).await.map_err(map_repository_error)
    }

    /// Case-insensitive substring search over user names.
    pub async fn search_users_by_name(
        &self,
        fragment: &str,
    ) -> Result<Vec<User>, DomainError> {
        self.users
            .search_by_name(fragment)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
