//! Minimal user-account data layer: a single `users` collection (email, name,
//! hashed password) and four operations over it — lookup by email, full
//! listing, create, and partial update.
//!
//! Passwords are hashed by the caller before they reach this layer; nothing
//! here authenticates, hashes, or inspects credential material. The one
//! invariant this crate owns is email uniqueness: [`UserDirectory::create`]
//! rejects an already-registered email, and the stores back that check with an
//! atomic uniqueness guard so concurrent creates cannot slip past it.
//!
//! Storage access goes through the [`UserStore`] port. [`MongoUserRepository`]
//! is the production store; [`InMemoryUserRepository`] serves tests and
//! embedders that do not want a server.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod validators;

pub use errors::DirectoryError;
pub use models::{CreateUser, UpdateUser, User, UserPatch};
pub use repositories::{InMemoryUserRepository, MongoUserRepository, UserStore};
pub use services::UserDirectory;
