//! Cache Replacement Policies.
//!
//! Implements the algorithms that pick a victim way inside one set of a
//! set-associative cache. Each instance serves exactly one set and only ever
//! sees way indices in `0..ways`.
//!
//! # Policies
//!
//! - `Lru`: exact Least Recently Used over a linked recency order.
//! - `Plru`: tree Pseudo-LRU over one direction bit per internal node.

/// Least Recently Used replacement policy.
pub mod lru;

/// Pseudo-LRU (tree-based) replacement policy.
pub mod plru;

use std::fmt::Debug;

use crate::common::Result;

pub use lru::LruPolicy;
pub use plru::{Direction, PlruPolicy};

/// Trait for cache replacement policies.
///
/// The owning cache set calls [`touch`](Self::touch) on every hit or fill,
/// [`update`](Self::update) when a new line must be installed, and optionally
/// [`set_to_erase`](Self::set_to_erase) to force a specific way out next.
pub trait ReplacementPolicy: Send + Sync + Debug {
    /// Records that `way` was just accessed.
    ///
    /// # Arguments
    ///
    /// * `way` - The way index within the set, `way < ways`.
    ///
    /// # Errors
    ///
    /// Returns [`ReplacementError::UntrackedWay`](crate::ReplacementError::UntrackedWay)
    /// when `way` is outside the set.
    fn touch(&mut self, way: usize) -> Result<()>;

    /// Marks `way` as the preferred next eviction candidate.
    ///
    /// The request is best effort: touching the same way again before the next
    /// [`update`](Self::update) cancels it.
    ///
    /// # Errors
    ///
    /// Returns [`ReplacementError::Unsupported`](crate::ReplacementError::Unsupported)
    /// when the policy cannot express a forced eviction, or
    /// [`ReplacementError::UntrackedWay`](crate::ReplacementError::UntrackedWay) when
    /// `way` is outside the set.
    fn set_to_erase(&mut self, way: usize) -> Result<()>;

    /// Selects the way to evict and marks it as freshly used.
    ///
    /// # Returns
    ///
    /// The index of the way the new line should be installed in.
    fn update(&mut self) -> usize;

    /// Returns the way the next [`update`](Self::update) would select, without
    /// changing any state.
    fn peek_victim(&self) -> usize;

    /// Returns the associativity this policy was built for.
    fn get_ways(&self) -> usize;

    /// Returns the registered name of the policy.
    fn name(&self) -> &'static str;
}

impl<P: ReplacementPolicy + ?Sized> ReplacementPolicy for Box<P> {
    #[inline]
    fn touch(&mut self, way: usize) -> Result<()> {
        (**self).touch(way)
    }

    #[inline]
    fn set_to_erase(&mut self, way: usize) -> Result<()> {
        (**self).set_to_erase(way)
    }

    #[inline]
    fn update(&mut self) -> usize {
        (**self).update()
    }

    #[inline]
    fn peek_victim(&self) -> usize {
        (**self).peek_victim()
    }

    #[inline]
    fn get_ways(&self) -> usize {
        (**self).get_ways()
    }

    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }
}
