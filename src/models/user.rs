use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// User document stored in the `users` collection.
///
/// `password` is opaque credential material, hashed by the caller before it
/// reaches this layer; it is stored and overwritten verbatim, never inspected.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    /// Assigned by the store at insert; immutable afterwards.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Logical unique key, stored lowercase. No operation changes it.
    pub email: String,
    pub name: String,
    pub password: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// Payload for registering a new directory entry.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Already hashed by the caller.
    #[validate(length(min = 1, message = "Password hash is required"))]
    pub password: String,
}

/// Payload for updating an existing entry, addressed by email.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub new_name: String,
    /// `None` leaves the stored password untouched. There is no way to clear
    /// a password through this operation.
    #[validate(length(min = 1, message = "Password hash must not be empty"))]
    pub new_password: Option<String>,
}

/// Partial update applied to one record.
///
/// `password: None` means "keep the stored value", distinct from replacing it.
#[derive(Debug, Clone)]
pub struct UserPatch {
    pub name: String,
    pub password: Option<String>,
}
