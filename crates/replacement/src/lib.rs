//! Cache replacement policy library.
//!
//! This crate implements the victim-selection engines a set-associative cache
//! simulator plugs into each of its sets:
//! 1. **Policies:** Exact LRU over a linked recency order and tree Pseudo-LRU
//!    over one direction bit per internal node, behind one trait.
//! 2. **Factory:** Construction by registered name (`"LRU"`, `"Pseudo-LRU"`).
//! 3. **Configuration:** Serde-deserializable policy selection.
//! 4. **Statistics:** An instrumenting wrapper counting policy operations.
//!
//! ```
//! use cache_replacement::{ReplacementPolicy, create_replacement};
//!
//! let mut policy = create_replacement("LRU", 4)?;
//! policy.touch(0)?;
//! assert_eq!(policy.update(), 1);
//! # Ok::<(), cache_replacement::ReplacementError>(())
//! ```

/// Error types shared by every policy.
pub mod common;
/// Policy selection configuration (names, defaults, JSON decoding).
pub mod config;
/// Name-to-policy factory.
pub mod factory;
/// Replacement policy trait and implementations (LRU, PLRU).
pub mod policies;
/// Operation counters and the instrumenting wrapper.
pub mod stats;

/// Error type returned by every fallible operation.
pub use crate::common::{ErrorKind, ReplacementError, Result};
/// Policy selection enum and configuration structure.
pub use crate::config::{PolicyKind, ReplacementConfig};
/// Builds a policy from its registered name.
pub use crate::factory::create_replacement;
/// The policy contract and its two engines.
pub use crate::policies::{LruPolicy, PlruPolicy, ReplacementPolicy};
/// Counting wrapper for any policy.
pub use crate::stats::{Instrumented, PolicyStats};
