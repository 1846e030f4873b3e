use std::error::Error as StdError;
use std::fmt;

use mongodb::error::{ErrorKind, WriteError, WriteFailure};

use crate::constants::{ERR_AMBIGUOUS_EMAIL, ERR_EMAIL_EXISTS};
use crate::utils::mask_email;

#[derive(Debug)]
pub enum DirectoryError {
    /// `create` was asked to register an email that already has a record.
    /// Retrying with the same email will always fail again.
    DuplicateEmail(String),
    /// An email lookup matched more than one record. The uniqueness invariant
    /// is broken; callers must not proceed as if one record were authoritative.
    IntegrityViolation { email: String, count: usize },
    /// Request payload rejected before touching the store.
    Validation(Vec<String>),
    /// Driver or server fault from the underlying store.
    Database(mongodb::error::Error),
    /// A condition the store guarantees against was observed anyway.
    Internal(String),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::DuplicateEmail(email) => {
                write!(f, "{}: {}", ERR_EMAIL_EXISTS, mask_email(email))
            }
            DirectoryError::IntegrityViolation { email, count } => {
                write!(
                    f,
                    "{}: {} matched {} records",
                    ERR_AMBIGUOUS_EMAIL,
                    mask_email(email),
                    count
                )
            }
            DirectoryError::Validation(errors) => {
                write!(f, "Validation failed: {}", errors.join("; "))
            }
            DirectoryError::Database(err) => write!(f, "Database error: {}", err),
            DirectoryError::Internal(message) => write!(f, "Internal error: {}", message),
        }
    }
}

impl StdError for DirectoryError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            DirectoryError::Database(err) => Some(err),
            _ => None,
        }
    }
}

impl From<mongodb::error::Error> for DirectoryError {
    fn from(err: mongodb::error::Error) -> Self {
        DirectoryError::Database(err)
    }
}

/// Server error code MongoDB reports for unique-index violations.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Whether a driver error is a duplicate-key rejection from the unique email
/// index, i.e. a concurrent create lost the race.
pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(WriteError { code, .. })) => {
            *code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}
