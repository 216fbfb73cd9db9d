//! Replacement policy statistics.
//!
//! This module tracks how a cache set drives its policy. It provides:
//! 1. **Counters:** Touches, victim selections, and forced evictions.
//! 2. **Instrumentation:** [`Instrumented`], a pass-through wrapper that counts
//!    every call made on the policy it owns.

use crate::common::{ErrorKind, Result};
use crate::policies::ReplacementPolicy;

/// Counters collected by [`Instrumented`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyStats {
    /// Successful `touch` calls.
    pub touches: u64,
    /// Victims selected through `update`.
    pub updates: u64,
    /// Successful `set_to_erase` calls.
    pub forced_erases: u64,
    /// `set_to_erase` calls the policy could not express.
    pub rejected_erases: u64,
}

impl PolicyStats {
    /// Clears every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A replacement policy wrapper that counts the operations passed through it.
///
/// Behaviour of the wrapped policy is unchanged, so a cache model can swap an
/// instrumented policy in without noticing.
#[derive(Debug, Clone)]
pub struct Instrumented<P> {
    inner: P,
    stats: PolicyStats,
}

impl<P: ReplacementPolicy> Instrumented<P> {
    /// Wraps `inner` with zeroed counters.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            stats: PolicyStats::default(),
        }
    }

    /// Returns the counters collected so far.
    pub const fn stats(&self) -> &PolicyStats {
        &self.stats
    }

    /// Clears the counters without touching policy state.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Returns the wrapped policy.
    pub const fn inner(&self) -> &P {
        &self.inner
    }

    /// Unwraps the policy, discarding the counters.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: ReplacementPolicy> ReplacementPolicy for Instrumented<P> {
    #[inline]
    fn touch(&mut self, way: usize) -> Result<()> {
        self.inner.touch(way)?;
        self.stats.touches += 1;
        Ok(())
    }

    fn set_to_erase(&mut self, way: usize) -> Result<()> {
        match self.inner.set_to_erase(way) {
            Ok(()) => {
                self.stats.forced_erases += 1;
                Ok(())
            }
            Err(e) => {
                if e.kind() == ErrorKind::UnsupportedOperation {
                    self.stats.rejected_erases += 1;
                }
                Err(e)
            }
        }
    }

    #[inline]
    fn update(&mut self) -> usize {
        self.stats.updates += 1;
        self.inner.update()
    }

    #[inline]
    fn peek_victim(&self) -> usize {
        self.inner.peek_victim()
    }

    #[inline]
    fn get_ways(&self) -> usize {
        self.inner.get_ways()
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
