//! Pseudo-LRU (PLRU) Replacement Policy.
//!
//! PLRU approximates the Least Recently Used algorithm using a binary tree of bits.
//! It requires significantly less storage than full LRU (W-1 bits for W ways).
//!
//! The tree is implicit in a flat array: node `0` is the root and node `n` has
//! children `2n + 1` and `2n + 2`. Leaves follow the `W - 1` internal nodes, so
//! way `w` lives at tree index `w + W - 1`:
//!
//! ```text
//!        0
//!      /   \
//!     1     2      internal nodes
//!    / \   / \
//!   3   4 5   6    leaves
//!   0   1 2   3    ways
//! ```
//!
//! Each bit points toward the subtree to evict from next, i.e. away from the
//! most recently used side. To find a victim, the tree is traversed following
//! the bits from the root to a leaf.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()`: O(log W)
//!   - `update()`: O(log W)
//! - **Space Complexity:** W-1 direction flags
//! - **Allocation:** Only at construction
//! - **Hardware Cost:** Low - simple bit operations
//! - **Best Case:** Similar to LRU for most access patterns
//! - **Worst Case:** Pathological cases can cause premature eviction of useful lines

use tracing::{trace, warn};

use super::ReplacementPolicy;
use crate::common::{ReplacementError, Result};

/// Registered name of the PLRU policy.
pub const NAME: &str = "Pseudo-LRU";

/// Direction flag stored in every internal tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Evict from the left subtree next.
    #[default]
    Left,
    /// Evict from the right subtree next.
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[inline]
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns which side of its parent tree index `node` hangs on.
    ///
    /// Left children have odd indices, right children even ones.
    #[inline]
    const fn of_child(node: usize) -> Self {
        if node % 2 == 1 { Self::Left } else { Self::Right }
    }
}

/// PLRU Policy state.
#[derive(Clone, Debug)]
pub struct PlruPolicy {
    /// Direction flags of the `ways - 1` internal nodes.
    nodes: Vec<Direction>,
    /// Number of ways in the set.
    ways: usize,
}

impl PlruPolicy {
    /// Creates a new PLRU policy instance with every node pointing left.
    ///
    /// # Arguments
    ///
    /// * `ways` - The associativity (number of ways) of the set. Must be a
    ///   power of two.
    ///
    /// # Errors
    ///
    /// Returns [`ReplacementError::ZeroWays`] when `ways` is zero and
    /// [`ReplacementError::WaysNotPowerOfTwo`] for any other non power of two.
    pub fn new(ways: usize) -> Result<Self> {
        if ways == 0 {
            return Err(ReplacementError::ZeroWays);
        }
        if !ways.is_power_of_two() {
            return Err(ReplacementError::WaysNotPowerOfTwo { ways });
        }
        Ok(Self {
            nodes: vec![Direction::Left; ways - 1],
            ways,
        })
    }

    /// Returns the direction flags, root first.
    pub fn directions(&self) -> &[Direction] {
        &self.nodes
    }

    /// Follows the flags from the root down to a leaf and returns its way.
    #[inline]
    fn find_victim(&self) -> usize {
        let mut node = 0;
        while node < self.nodes.len() {
            node = 2 * node
                + match self.nodes[node] {
                    Direction::Left => 1,
                    Direction::Right => 2,
                };
        }
        node - self.nodes.len()
    }

    /// Points every flag on the path from `way` to the root away from it.
    #[inline]
    fn mark_used(&mut self, way: usize) {
        let mut node = way + self.nodes.len();
        while node != 0 {
            let parent = (node - 1) / 2;
            if Direction::of_child(node) == self.nodes[parent] {
                self.nodes[parent] = self.nodes[parent].flipped();
            }
            node = parent;
        }
    }
}

impl ReplacementPolicy for PlruPolicy {
    /// Updates the tree bits on access.
    ///
    /// Flags on the path to the accessed way that point toward it are flipped,
    /// protecting it from immediate eviction.
    #[inline]
    fn touch(&mut self, way: usize) -> Result<()> {
        if way >= self.ways {
            warn!(way, ways = self.ways, "PLRU addressed an untracked way");
            return Err(ReplacementError::UntrackedWay {
                way,
                ways: self.ways,
            });
        }
        self.mark_used(way);
        Ok(())
    }

    /// Always fails: the tree only orders sibling subtrees relative to each
    /// other and has no slot for an absolute "evict this first" request.
    fn set_to_erase(&mut self, way: usize) -> Result<()> {
        trace!(way, "PLRU rejected forced eviction");
        Err(ReplacementError::Unsupported {
            policy: NAME,
            operation: "inverted access",
        })
    }

    /// Traverses the tree to the pseudo-least-recently-used way and touches it.
    #[inline]
    fn update(&mut self) -> usize {
        let way = self.find_victim();
        self.mark_used(way);
        trace!(way, "PLRU victim selected");
        way
    }

    #[inline]
    fn peek_victim(&self) -> usize {
        self.find_victim()
    }

    #[inline]
    fn get_ways(&self) -> usize {
        self.ways
    }

    fn name(&self) -> &'static str {
        NAME
    }
}
