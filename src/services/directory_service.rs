//! User directory service: the four operations over the users collection.

use log::{debug, info, warn};
use mongodb::bson::{oid::ObjectId, DateTime};
use validator::Validate;

use crate::constants::ERR_MISSING_RECORD_ID;
use crate::errors::DirectoryError;
use crate::models::{CreateUser, UpdateUser, User, UserPatch};
use crate::repositories::UserStore;
use crate::utils::mask_email;
use crate::validators::validation_errors_to_directory_error;

/// Stateless facade over one [`UserStore`].
///
/// Each operation is a single bounded call against the store; nothing is
/// cached or locked across calls.
pub struct UserDirectory<S: UserStore> {
    store: S,
}

impl<S: UserStore> UserDirectory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The unique user for `email`, or `None` — absence is a normal result,
    /// not an error.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, DirectoryError> {
        self.store.find_by_email(&email.to_lowercase()).await
    }

    /// Every user in the directory, unfiltered and unpaginated; ordering is
    /// whatever the store yields.
    pub async fn list(&self) -> Result<Vec<User>, DirectoryError> {
        self.store.find_all().await
    }

    /// Register a new user and return the assigned identifier.
    ///
    /// `password` must already be hashed by the caller; it is stored verbatim.
    /// Fails with [`DirectoryError::DuplicateEmail`] when the email is taken.
    pub async fn create(&self, req: CreateUser) -> Result<ObjectId, DirectoryError> {
        req.validate().map_err(validation_errors_to_directory_error)?;
        let email = req.email.to_lowercase();

        // Friendly rejection on the common path; the store's own uniqueness
        // guard still catches two creates racing past this check.
        if self.store.find_by_email(&email).await?.is_some() {
            warn!(
                "Create failed: email {} already registered",
                mask_email(&email)
            );
            return Err(DirectoryError::DuplicateEmail(email));
        }

        let now = DateTime::now();
        let user = User {
            id: None,
            email,
            name: req.name,
            password: req.password,
            created_at: now,
            updated_at: now,
        };

        let id = self.store.insert(&user).await?;
        info!("Created user {} ({})", id, mask_email(&user.email));
        Ok(id)
    }

    /// Replace the name, and the password when one is supplied, for the user
    /// with `email`; returns the identifier of the updated record.
    ///
    /// Returns `Ok(None)` when no such user exists — a soft miss, not an
    /// error. The email itself is never changed by this operation.
    pub async fn update(&self, req: UpdateUser) -> Result<Option<ObjectId>, DirectoryError> {
        req.validate().map_err(validation_errors_to_directory_error)?;
        let email = req.email.to_lowercase();

        let Some(user) = self.store.find_by_email(&email).await? else {
            debug!("Update skipped: no user for email {}", mask_email(&email));
            return Ok(None);
        };
        let id = user
            .id
            .ok_or_else(|| DirectoryError::Internal(ERR_MISSING_RECORD_ID.to_string()))?;

        let patch = UserPatch {
            name: req.new_name,
            password: req.new_password,
        };
        self.store.apply_patch(id, &patch).await?;

        info!("Updated user {} ({})", id, mask_email(&email));
        Ok(Some(id))
    }
}
