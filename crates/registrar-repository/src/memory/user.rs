//! In-memory user repository.

use super::table::Table;
use crate::traits::UserRepository;
use async_trait::async_trait;
use registrar_core::{RegistrarResult, User, UserId};
use tracing::debug;

fn email_clash(existing: &User, candidate: &User) -> Option<String> {
    existing
        .email
        .eq_ignore_ascii_case(&candidate.email)
        .then(|| format!("Email '{}' already exists", candidate.email))
}

/// User repository over an in-process table.
pub struct InMemoryUserRepository {
    users: Table<UserId, User>,
}

impl InMemoryUserRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: Table::new("User", email_clash),
        }
    }

    /// Creates a repository seeded with `users`.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Table::with_rows("User", email_clash, users),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> RegistrarResult<Option<User>> {
        debug!("Repository: find user {}", id);
        Ok(self.users.get(id).await)
    }

    async fn find_all(&self) -> RegistrarResult<Vec<User>> {
        Ok(self.users.all().await)
    }

    async fn save(&self, user: &User) -> RegistrarResult<User> {
        self.users.insert(user).await
    }

    async fn update(&self, user: &User) -> RegistrarResult<User> {
        self.users.replace(user).await
    }
}
