//! An ordered map based on an unbalanced binary search tree.
//!
//! Every node caches the size of its subtree, which makes the order
//! statistics [`rank`](map/struct.Map.html#method.rank) and
//! [`select`](map/struct.Map.html#method.select) O(height) and lets range
//! iterators report their exact length.
//!
//! The tree performs no rebalancing: operations are O(height), and the
//! height is O(n) in the worst case (for example after insertion in sorted
//! order). Deletion splices in the in-order successor, which is known to
//! skew the tree leftward over many deletions. Both are deliberate
//! properties of this structure, not defects; callers that need a
//! guaranteed O(log n) height should use a balanced tree instead.

pub use self::map::Map;

pub mod map;

mod node;

#[cfg(feature = "quickcheck")]
mod quickcheck;
