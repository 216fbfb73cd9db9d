//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the way that has not been accessed for the longest time.
//! Recency is kept as a doubly-linked list threaded through a fixed arena of
//! nodes. The head of the list is the Most Recently Used way and the tail is the
//! Least Recently Used one. A position map translates a way index to its arena
//! slot, so any way can be spliced to either end without searching.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()`: O(1)
//!   - `set_to_erase()`: O(1)
//!   - `update()`: O(1)
//! - **Space Complexity:** O(W) where W is the number of ways
//! - **Allocation:** Only at construction; splices relink indices in place
//! - **Best Case:** Workloads with strong temporal locality
//! - **Worst Case:** Scanning patterns larger than the set (thrashing)

use tracing::{trace, warn};

use super::ReplacementPolicy;
use crate::common::{ReplacementError, Result};

/// Registered name of the LRU policy.
pub const NAME: &str = "LRU";

/// One arena node of the recency list.
#[derive(Clone, Copy, Debug)]
struct RecencyLink {
    /// Way stored in this node.
    way: usize,
    /// Slot of the more recently used neighbour.
    prev: Option<usize>,
    /// Slot of the less recently used neighbour.
    next: Option<usize>,
}

/// LRU Policy state.
#[derive(Clone, Debug)]
pub struct LruPolicy {
    /// Arena of list nodes; slots never move once built.
    links: Vec<RecencyLink>,
    /// Way index to arena slot.
    slot_of: Vec<usize>,
    /// Slot of the Most Recently Used way.
    head: usize,
    /// Slot of the Least Recently Used way.
    tail: usize,
}

impl LruPolicy {
    /// Creates a new LRU policy instance.
    ///
    /// Ways are pushed to the front in index order, so before any access the
    /// eviction order is `0, 1, ..., ways - 1`.
    ///
    /// # Arguments
    ///
    /// * `ways` - The associativity (number of ways) of the set.
    ///
    /// # Errors
    ///
    /// Returns [`ReplacementError::ZeroWays`] when `ways` is zero.
    pub fn new(ways: usize) -> Result<Self> {
        if ways == 0 {
            return Err(ReplacementError::ZeroWays);
        }

        // Slot `s` holds way `ways - 1 - s`: slot 0 is the last way pushed.
        let links = (0..ways)
            .map(|slot| RecencyLink {
                way: ways - 1 - slot,
                prev: slot.checked_sub(1),
                next: (slot + 1 < ways).then_some(slot + 1),
            })
            .collect();
        let slot_of = (0..ways).map(|way| ways - 1 - way).collect();

        Ok(Self {
            links,
            slot_of,
            head: 0,
            tail: ways - 1,
        })
    }

    /// Returns the ways ordered from Most to Least Recently Used.
    pub fn recency_order(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(self.head), |&slot| self.links[slot].next)
            .map(|slot| self.links[slot].way)
    }

    /// Looks up the arena slot of `way`.
    #[inline]
    fn slot(&self, way: usize) -> Result<usize> {
        self.slot_of.get(way).copied().ok_or_else(|| {
            warn!(way, ways = self.links.len(), "LRU addressed an untracked way");
            ReplacementError::UntrackedWay {
                way,
                ways: self.links.len(),
            }
        })
    }

    /// Unlinks `slot` from its neighbours.
    ///
    /// The caller guarantees `slot` is neither the head nor the tail it is about
    /// to become, so at least one neighbour survives on each side it leaves.
    #[inline]
    fn unlink(&mut self, slot: usize) {
        let RecencyLink { prev, next, .. } = self.links[slot];
        match prev {
            Some(p) => self.links[p].next = next,
            None => {
                if let Some(n) = next {
                    self.head = n;
                }
            }
        }
        match next {
            Some(n) => self.links[n].prev = prev,
            None => {
                if let Some(p) = prev {
                    self.tail = p;
                }
            }
        }
    }

    /// Splices `slot` to the head (MRU end).
    #[inline]
    fn move_to_front(&mut self, slot: usize) {
        if slot == self.head {
            return;
        }
        self.unlink(slot);
        let old_head = self.head;
        self.links[slot].prev = None;
        self.links[slot].next = Some(old_head);
        self.links[old_head].prev = Some(slot);
        self.head = slot;
    }

    /// Splices `slot` to the tail (LRU end).
    #[inline]
    fn move_to_back(&mut self, slot: usize) {
        if slot == self.tail {
            return;
        }
        self.unlink(slot);
        let old_tail = self.tail;
        self.links[slot].next = None;
        self.links[slot].prev = Some(old_tail);
        self.links[old_tail].next = Some(slot);
        self.tail = slot;
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Moves `way` to the MRU position.
    #[inline]
    fn touch(&mut self, way: usize) -> Result<()> {
        let slot = self.slot(way)?;
        self.move_to_front(slot);
        Ok(())
    }

    /// Moves `way` to the LRU position so the next `update()` selects it.
    fn set_to_erase(&mut self, way: usize) -> Result<()> {
        let slot = self.slot(way)?;
        self.move_to_back(slot);
        trace!(way, "LRU way forced to eviction end");
        Ok(())
    }

    /// Evicts the LRU way and reinstalls it at the MRU position.
    #[inline]
    fn update(&mut self) -> usize {
        let slot = self.tail;
        self.move_to_front(slot);
        let way = self.links[slot].way;
        trace!(way, "LRU victim selected");
        way
    }

    #[inline]
    fn peek_victim(&self) -> usize {
        self.links[self.tail].way
    }

    #[inline]
    fn get_ways(&self) -> usize {
        self.links.len()
    }

    fn name(&self) -> &'static str {
        NAME
    }
}
