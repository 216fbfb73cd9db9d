//! Common types shared by every replacement policy.
//!
//! Currently this is the error surface: the [`ReplacementError`] enum, its
//! [`ErrorKind`] classification, and the crate-wide [`Result`] alias.

/// Error types and classification.
pub mod error;

pub use error::{ErrorKind, ReplacementError, Result};
