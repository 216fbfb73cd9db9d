//! PLRU Policy Tests.
//!
//! Tree layout for 4 ways (`L` = evict from the left subtree next):
//!
//! ```text
//!        0
//!      /   \
//!     1     2
//!    / \   / \
//!   w0 w1 w2 w3
//! ```
//!
//! All flags start `L`, so the first victim is way 0. `update` flips every flag
//! on the path it follows, which makes consecutive updates walk the leaves in
//! bit-reversed order.

use cache_replacement::policies::Direction;
use cache_replacement::{ErrorKind, PlruPolicy, ReplacementError, ReplacementPolicy};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{Access, SetHarness};

fn updates(policy: &mut PlruPolicy, n: usize) -> Vec<usize> {
    (0..n).map(|_| policy.update()).collect()
}

// ══════════════════════════════════════════════════════════
// 1. Construction
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(3)]
#[case(5)]
#[case(6)]
#[case(12)]
#[case(100)]
fn plru_rejects_non_power_of_two(#[case] ways: usize) {
    let err = PlruPolicy::new(ways).unwrap_err();
    assert_eq!(err, ReplacementError::WaysNotPowerOfTwo { ways });
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn plru_rejects_zero_ways() {
    assert_eq!(PlruPolicy::new(0).unwrap_err(), ReplacementError::ZeroWays);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(4)]
#[case(8)]
#[case(64)]
fn plru_accepts_power_of_two(#[case] ways: usize) {
    let policy = PlruPolicy::new(ways).unwrap();
    assert_eq!(policy.get_ways(), ways);
    assert_eq!(policy.name(), "Pseudo-LRU");
    assert_eq!(policy.directions().len(), ways - 1);
    assert!(policy.directions().iter().all(|d| *d == Direction::Left));
}

// ══════════════════════════════════════════════════════════
// 2. Victim selection
// ══════════════════════════════════════════════════════════

/// All flags point left, so the leftmost leaf is the first victim.
#[test]
fn plru_initial_victim_is_zero() {
    let mut policy = PlruPolicy::new(4).unwrap();
    assert_eq!(policy.peek_victim(), 0);
    assert_eq!(policy.update(), 0);
}

#[test]
fn plru_four_way_update_sequence() {
    let mut policy = PlruPolicy::new(4).unwrap();
    assert_eq!(updates(&mut policy, 8), vec![0, 2, 1, 3, 0, 2, 1, 3]);
}

#[test]
fn plru_eight_way_update_sequence() {
    let mut policy = PlruPolicy::new(8).unwrap();
    assert_eq!(updates(&mut policy, 8), vec![0, 4, 2, 6, 1, 5, 3, 7]);
}

/// After touching way 0 it is not selected again until the other ways have
/// been handed out by `update`.
#[test]
fn plru_touch_protects_way() {
    let mut policy = PlruPolicy::new(4).unwrap();
    policy.touch(0).unwrap();
    assert_eq!(
        policy.directions(),
        &[Direction::Right, Direction::Right, Direction::Left]
    );
    assert_eq!(updates(&mut policy, 4), vec![2, 1, 3, 0]);
}

/// Touching every way once in order brings the tree back to all-left.
#[test]
fn plru_full_sweep_restores_initial_tree() {
    let mut policy = PlruPolicy::new(4).unwrap();
    for way in 0..4 {
        policy.touch(way).unwrap();
    }
    assert!(policy.directions().iter().all(|d| *d == Direction::Left));
    assert_eq!(policy.peek_victim(), 0);
}

/// Touching a right-subtree way points the root back to the left.
#[test]
fn plru_touch_right_subtree() {
    let mut policy = PlruPolicy::new(4).unwrap();
    policy.touch(3).unwrap();
    policy.touch(2).unwrap();
    assert_eq!(
        policy.directions(),
        &[Direction::Left, Direction::Left, Direction::Right]
    );
    assert_eq!(policy.update(), 0);
}

/// Repeated touches of the same way leave the tree unchanged.
#[test]
fn plru_touch_is_idempotent() {
    let mut policy = PlruPolicy::new(8).unwrap();
    policy.touch(5).unwrap();
    let before = policy.directions().to_vec();
    policy.touch(5).unwrap();
    assert_eq!(policy.directions(), before.as_slice());
}

#[test]
fn plru_single_way() {
    let mut policy = PlruPolicy::new(1).unwrap();
    assert!(policy.directions().is_empty());
    policy.touch(0).unwrap();
    assert_eq!(updates(&mut policy, 3), vec![0, 0, 0]);
}

#[test]
fn plru_touch_untracked_way() {
    let mut policy = PlruPolicy::new(4).unwrap();
    let err = policy.touch(4).unwrap_err();
    assert_eq!(err, ReplacementError::UntrackedWay { way: 4, ways: 4 });
    assert_eq!(err.kind(), ErrorKind::InternalConsistency);
    assert!(policy.directions().iter().all(|d| *d == Direction::Left));
}

// ══════════════════════════════════════════════════════════
// 3. Set to erase
// ══════════════════════════════════════════════════════════

/// The tree cannot force a way out; every request fails, in range or not.
#[rstest]
#[case(0)]
#[case(3)]
#[case(4)]
#[case(usize::MAX)]
fn plru_set_to_erase_unsupported(#[case] way: usize) {
    let mut policy = PlruPolicy::new(4).unwrap();
    policy.touch(1).unwrap();
    let before = policy.directions().to_vec();

    let err = policy.set_to_erase(way).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
    assert_eq!(
        err,
        ReplacementError::Unsupported {
            policy: "Pseudo-LRU",
            operation: "inverted access",
        }
    );
    assert_eq!(policy.directions(), before.as_slice());
}

// ══════════════════════════════════════════════════════════
// 4. Driven through a cache set
// ══════════════════════════════════════════════════════════

/// With two ways the tree is a single flag and behaves like exact LRU.
#[test]
fn plru_two_way_set_matches_lru() {
    let mut set = SetHarness::new(PlruPolicy::new(2).unwrap());

    assert_eq!(set.access(0xA).unwrap(), Access::Miss { way: 0, evicted: None });
    assert_eq!(set.access(0xB).unwrap(), Access::Miss { way: 1, evicted: None });
    assert_eq!(set.access(0xA).unwrap(), Access::Hit(0));
    assert_eq!(
        set.access(0xC).unwrap(),
        Access::Miss {
            way: 1,
            evicted: Some(0xB)
        }
    );
    assert_eq!(set.tag(0), Some(0xA));
}

#[test]
fn plru_set_invalidate_reports_unsupported() {
    let mut set = SetHarness::new(PlruPolicy::new(4).unwrap());
    let _ = set.access(0x10).unwrap();
    let err = set.invalidate(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
    assert!(!set.contains(0x10));
}
