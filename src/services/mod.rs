//! Services organized by domain concern.

pub mod directory_service;

pub use directory_service::UserDirectory;
