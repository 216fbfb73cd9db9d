//! Configuration for replacement policy construction.
//!
//! This module defines the structures used to pick and size a policy. It provides:
//! 1. **Defaults:** Baseline associativity and policy when a field is omitted.
//! 2. **Enums:** The registered policy names ([`PolicyKind`]).
//! 3. **Structures:** [`ReplacementConfig`], deserializable from JSON.
//!
//! The string names accepted here are the same ones the factory accepts.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::{ReplacementError, Result};
use crate::policies::{lru, plru};

/// Default configuration constants.
mod defaults {
    /// Default associativity (direct-mapped).
    pub const WAYS: usize = 1;
}

/// Cache replacement policy algorithms.
///
/// Specifies the algorithm used to select which way to evict when a new line
/// must be installed in a full cache set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum PolicyKind {
    /// Least Recently Used replacement policy.
    ///
    /// Evicts the way that was accessed least recently.
    #[default]
    #[serde(rename = "LRU", alias = "Lru")]
    Lru,
    /// Pseudo-LRU (tree-based) replacement policy.
    ///
    /// Approximates LRU using a binary tree of direction bits. Requires a
    /// power-of-two associativity.
    #[serde(rename = "Pseudo-LRU", alias = "PseudoLru")]
    PseudoLru,
}

impl PolicyKind {
    /// Every registered policy, in the order they are listed to users.
    pub const ALL: [Self; 2] = [Self::Lru, Self::PseudoLru];

    /// Returns the canonical name of the policy.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lru => lru::NAME,
            Self::PseudoLru => plru::NAME,
        }
    }

    /// Returns the registered names joined for display in error messages.
    pub fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = ReplacementError;

    /// Parses a policy name. Matching is exact and case-sensitive.
    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| ReplacementError::UnknownPolicy {
                name: name.to_owned(),
            })
    }
}

/// Replacement policy configuration for one cache structure.
///
/// # Examples
///
/// ```
/// use cache_replacement::ReplacementPolicy;
/// use cache_replacement::config::{PolicyKind, ReplacementConfig};
///
/// let config = ReplacementConfig::from_json(r#"{ "policy": "Pseudo-LRU", "ways": 8 }"#)?;
/// assert_eq!(config.policy, PolicyKind::PseudoLru);
/// let policy = config.build()?;
/// assert_eq!(policy.get_ways(), 8);
/// # Ok::<(), cache_replacement::ReplacementError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplacementConfig {
    /// Replacement policy
    pub policy: PolicyKind,
    /// Associativity (number of ways)
    pub ways: usize,
}

impl ReplacementConfig {
    /// Decodes a configuration from JSON. Omitted fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ReplacementError::InvalidConfig`] when the text is not valid
    /// JSON, names an unknown policy, or carries unknown fields.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ReplacementError::InvalidConfig(e.to_string()))
    }
}

impl Default for ReplacementConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::default(),
            ways: defaults::WAYS,
        }
    }
}
