//! Application constants: collection names and message strings.

pub mod collections;
pub mod errors;

pub use collections::*;
pub use errors::*;
