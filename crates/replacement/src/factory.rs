//! Policy factory.
//!
//! Maps a policy name (or [`PolicyKind`]) and an associativity to a boxed
//! [`ReplacementPolicy`]. The cache model consults the factory once per cache
//! structure while it is being set up.

use tracing::debug;

use crate::common::Result;
use crate::config::{PolicyKind, ReplacementConfig};
use crate::policies::{LruPolicy, PlruPolicy, ReplacementPolicy};

/// Creates the policy registered under `name` for a set of `ways` ways.
///
/// Names are matched exactly: `"LRU"` or `"Pseudo-LRU"`.
///
/// # Errors
///
/// Returns [`ReplacementError::UnknownPolicy`](crate::ReplacementError::UnknownPolicy)
/// listing the supported names when `name` is not registered, or the
/// construction error of the selected policy when `ways` does not suit it.
pub fn create_replacement(name: &str, ways: usize) -> Result<Box<dyn ReplacementPolicy>> {
    let kind = name.parse::<PolicyKind>().inspect_err(|e| {
        debug!(name, ways, error = %e, "replacement policy lookup failed");
    })?;
    kind.build(ways)
}

impl PolicyKind {
    /// Builds a policy of this kind for a set of `ways` ways.
    ///
    /// # Errors
    ///
    /// Returns the construction error of the selected policy, e.g.
    /// [`ReplacementError::WaysNotPowerOfTwo`](crate::ReplacementError::WaysNotPowerOfTwo)
    /// for a tree policy.
    pub fn build(self, ways: usize) -> Result<Box<dyn ReplacementPolicy>> {
        let policy: Result<Box<dyn ReplacementPolicy>> = match self {
            Self::Lru => LruPolicy::new(ways).map(|p| Box::new(p) as Box<dyn ReplacementPolicy>),
            Self::PseudoLru => {
                PlruPolicy::new(ways).map(|p| Box::new(p) as Box<dyn ReplacementPolicy>)
            }
        };
        match &policy {
            Ok(_) => debug!(policy = %self, ways, "replacement policy created"),
            Err(e) => debug!(policy = %self, ways, error = %e, "replacement policy rejected"),
        }
        policy
    }
}

impl ReplacementConfig {
    /// Builds the configured policy.
    ///
    /// # Errors
    ///
    /// Returns the construction error of the selected policy.
    pub fn build(&self) -> Result<Box<dyn ReplacementPolicy>> {
        self.policy.build(self.ways)
    }
}
