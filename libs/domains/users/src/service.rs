//! User Service - pass-through layer between handlers and the repository

use std::sync::Arc;
use tracing::instrument;

use crate::models::{UpdateUser, User};
use crate::repository::UserRepository;

/// Service layer for user operations
///
/// Builds new `User` values and forwards everything else to the repository
/// unchanged. Not-found stays a `None`/`false` sentinel here; the handlers
/// decide how to report it.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a user. The repository replaces the placeholder id.
    #[instrument(skip(self, name, email))]
    pub async fn create_user(&self, name: String, email: String) -> User {
        let user = User::new(name, email);
        self.repository.create(user).await
    }

    #[instrument(skip(self))]
    pub async fn get_all_users(&self) -> Vec<User> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_user_by_id(&self, id: u64) -> Option<User> {
        self.repository.find_by_id(id).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_user(&self, id: u64, input: UpdateUser) -> Option<User> {
        self.repository.update(id, input).await
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: u64) -> bool {
        self.repository.delete(id).await
    }
}
