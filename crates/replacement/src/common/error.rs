//! Replacement policy error definitions.
//!
//! This module defines the error handling surface of the policy engines. It provides:
//! 1. **Error Representation:** Every way a policy construction or operation can fail.
//! 2. **Classification:** Grouping of errors into configuration, capability, and
//!    consistency failures so callers can react per kind.
//! 3. **Result Alias:** A crate-wide `Result` bound to [`ReplacementError`].

use thiserror::Error;

/// Broad classification of a [`ReplacementError`].
///
/// Cache models usually only care which of these three buckets an error falls
/// into: configuration errors are fixed by choosing another policy or geometry,
/// unsupported operations are capability mismatches, and consistency errors are
/// caller bugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unknown policy name or a way count the policy cannot be built for.
    Configuration,
    /// The policy cannot express the requested operation.
    UnsupportedOperation,
    /// An operation addressed a way the policy does not track.
    InternalConsistency,
}

/// Errors raised by replacement policies and the policy factory.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplacementError {
    /// The requested policy name is not registered.
    ///
    /// The message enumerates every supported name.
    #[error(
        "\"{name}\" replacement policy is not defined, supported policies are: {}",
        crate::config::PolicyKind::supported_names()
    )]
    UnknownPolicy {
        /// Name as supplied by the caller.
        name: String,
    },

    /// A policy was asked to manage zero ways.
    #[error("number of ways must be positive")]
    ZeroWays,

    /// A tree policy was asked to manage a way count that is not a power of two.
    #[error("number of ways must be a power of 2, got {ways}")]
    WaysNotPowerOfTwo {
        /// Rejected associativity.
        ways: usize,
    },

    /// A serialized configuration could not be decoded.
    #[error("invalid replacement configuration: {0}")]
    InvalidConfig(String),

    /// The policy has no way to express the requested operation.
    #[error("{policy} does not support {operation}")]
    Unsupported {
        /// Name of the refusing policy.
        policy: &'static str,
        /// Name of the refused operation.
        operation: &'static str,
    },

    /// A way index outside `0..ways` reached the policy.
    #[error("way {way} is not tracked by a {ways}-way policy")]
    UntrackedWay {
        /// Offending way index.
        way: usize,
        /// Associativity of the policy.
        ways: usize,
    },
}

impl ReplacementError {
    /// Returns the broad kind of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownPolicy { .. }
            | Self::ZeroWays
            | Self::WaysNotPowerOfTwo { .. }
            | Self::InvalidConfig(_) => ErrorKind::Configuration,
            Self::Unsupported { .. } => ErrorKind::UnsupportedOperation,
            Self::UntrackedWay { .. } => ErrorKind::InternalConsistency,
        }
    }

    /// Returns true for errors raised while building a policy.
    pub const fn is_configuration(&self) -> bool {
        matches!(self.kind(), ErrorKind::Configuration)
    }
}

/// A specialized `Result` type for replacement policy operations.
pub type Result<T> = std::result::Result<T, ReplacementError>;
