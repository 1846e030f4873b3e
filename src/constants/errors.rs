//! Error message constants used throughout the crate.

pub const ERR_EMAIL_EXISTS: &str = "Email already registered";
pub const ERR_AMBIGUOUS_EMAIL: &str = "Multiple user records share one email";
pub const ERR_MISSING_RECORD_ID: &str = "Stored user record has no identifier";
