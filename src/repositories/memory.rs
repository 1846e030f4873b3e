//! In-memory user store for tests and embedding without a server.

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use tokio::sync::RwLock;

use crate::errors::DirectoryError;
use crate::models::{User, UserPatch};
use crate::repositories::UserStore;

/// [`UserStore`] backed by a process-local map.
///
/// Uniqueness is checked inside `insert` while the write lock is held, so
/// concurrent duplicate creates cannot both succeed.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<ObjectId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with records, bypassing the insert-time uniqueness
    /// guard. Exists so tests can stage a broken invariant and watch lookups
    /// refuse to resolve it.
    #[cfg(test)]
    fn seeded(records: Vec<User>) -> Self {
        let users = records
            .into_iter()
            .map(|user| {
                let id = user.id.unwrap_or_else(ObjectId::new);
                (id, User { id: Some(id), ..user })
            })
            .collect();
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DirectoryError> {
        let users = self.users.read().await;
        let matches: Vec<&User> = users.values().filter(|u| u.email == email).collect();
        if matches.len() > 1 {
            return Err(DirectoryError::IntegrityViolation {
                email: email.to_string(),
                count: matches.len(),
            });
        }
        Ok(matches.first().map(|u| (*u).clone()))
    }

    async fn find_all(&self) -> Result<Vec<User>, DirectoryError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn insert(&self, user: &User) -> Result<ObjectId, DirectoryError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(DirectoryError::DuplicateEmail(user.email.clone()));
        }

        let id = user.id.unwrap_or_else(ObjectId::new);
        users.insert(
            id,
            User {
                id: Some(id),
                ..user.clone()
            },
        );
        Ok(id)
    }

    async fn apply_patch(&self, id: ObjectId, patch: &UserPatch) -> Result<(), DirectoryError> {
        let mut users = self.users.write().await;
        if let Some(user) = users.get_mut(&id) {
            user.name = patch.name.clone();
            if let Some(ref password) = patch.password {
                user.password = password.clone();
            }
            user.updated_at = DateTime::now();
        }
        Ok(())
    }
}
