//! Repository layer for database operations.
//!
//! The service layer holds a [`UserStore`] explicitly instead of reaching for
//! an ambient database handle, so alternative stores (an in-memory map for
//! tests and embedders) can be swapped in behind the same port.

pub mod memory;
pub mod user_repository;

pub use memory::InMemoryUserRepository;
pub use user_repository::MongoUserRepository;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::errors::DirectoryError;
use crate::models::{User, UserPatch};

/// Storage port for the user directory.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// The unique record for `email`, or `None`.
    ///
    /// Must fail with [`DirectoryError::IntegrityViolation`] when more than
    /// one record matches; silently picking one would hide a broken
    /// uniqueness invariant.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DirectoryError>;

    /// Every record, in whatever order the store yields them.
    async fn find_all(&self) -> Result<Vec<User>, DirectoryError>;

    /// Insert a new record and return its assigned identifier.
    ///
    /// Must reject a duplicate email atomically with
    /// [`DirectoryError::DuplicateEmail`], even under concurrent inserts.
    async fn insert(&self, user: &User) -> Result<ObjectId, DirectoryError>;

    /// Apply a partial update to the record with `id` and refresh its
    /// `updated_at` timestamp. A missing `id` is a no-op.
    async fn apply_patch(&self, id: ObjectId, patch: &UserPatch) -> Result<(), DirectoryError>;
}
