mod iter;


use compare::Compare;
use std::cmp::Ordering::*;
use std::mem;

pub use self::iter::{IntoIter, Iter, LevelOrder, PostOrder, PreOrder};

pub type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
pub struct Node<K, V> {
    left: Link<K, V>,
    right: Link<K, V>,
    size: usize,
    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Node { left: None, right: None, size: 1, key: key, value: value }
    }

    fn update_size(&mut self) {
        self.size = 1 + size(&self.left) + size(&self.right);
    }
}

/// Returns the number of nodes in the subtree, reading the root's cached count.
pub fn size<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.size)
}

pub fn insert<K, V, C>(link: &mut Link<K, V>, cmp: &C, key: K, value: V) -> Option<V>
    where C: Compare<K>
{
    match *link {
        None => {
            *link = Some(Box::new(Node::new(key, value)));
            None
        }
        Some(ref mut node) => {
            let old_value = match cmp.compare(&key, &node.key) {
                Equal => return Some(mem::replace(&mut node.value, value)),
                Less => insert(&mut node.left, cmp, key, value),
                Greater => insert(&mut node.right, cmp, key, value),
            };

            // The count only changes when a new node was created below.
            if old_value.is_none() { node.update_size(); }
            old_value
        }
    }
}

pub fn get<'a, K, V, C, Q: ?Sized>(link: &'a Link<K, V>, cmp: &C, key: &Q) -> Option<&'a V>
    where C: Compare<Q, K>
{
    match *link {
        None => None,
        Some(ref node) => match cmp.compare(key, &node.key) {
            Less => get(&node.left, cmp, key),
            Greater => get(&node.right, cmp, key),
            Equal => Some(&node.value),
        },
    }
}

pub fn get_mut<'a, K, V, C, Q: ?Sized>(link: &'a mut Link<K, V>, cmp: &C, key: &Q)
    -> Option<&'a mut V> where C: Compare<Q, K>
{
    match *link {
        None => None,
        Some(ref mut node) => match cmp.compare(key, &node.key) {
            Less => get_mut(&mut node.left, cmp, key),
            Greater => get_mut(&mut node.right, cmp, key),
            Equal => Some(&mut node.value),
        },
    }
}

pub fn remove<K, V, C, Q: ?Sized>(link: &mut Link<K, V>, cmp: &C, key: &Q) -> Option<(K, V)>
    where C: Compare<Q, K>
{
    let order = match *link {
        None => return None,
        Some(ref node) => cmp.compare(key, &node.key),
    };

    if order == Equal {
        link.take().map(|node| {
            let node = *node;
            *link = splice(node.left, node.right);
            (node.key, node.value)
        })
    } else {
        link.as_mut().and_then(|node| {
            let child = if order == Less { &mut node.left } else { &mut node.right };
            let removed = remove(child, cmp, key);
            if removed.is_some() { node.update_size(); }
            removed
        })
    }
}

// Hibbard deletion: a node with two children is replaced by its in-order
// successor, the minimum of its right subtree, which takes over both
// children. The successor node itself is moved into place.
fn splice<K, V>(left: Link<K, V>, right: Link<K, V>) -> Link<K, V> {
    match (left, right) {
        (None, right) => right,
        (left, None) => left,
        (left, Some(right)) => {
            let (mut succ, rest) = detach_min(right);
            succ.left = left;
            succ.right = rest;
            succ.update_size();
            Some(succ)
        }
    }
}

// Unlinks the minimum node of the subtree, returning it (childless, size 1)
// along with the remainder of the subtree. Sizes on the descent path are
// recomputed on the way back up.
fn detach_min<K, V>(mut node: Box<Node<K, V>>) -> (Box<Node<K, V>>, Link<K, V>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            node.size = 1;
            (node, rest)
        }
        Some(left) => {
            let (min, rest) = detach_min(left);
            node.left = rest;
            node.update_size();
            (min, Some(node))
        }
    }
}

fn detach_max<K, V>(mut node: Box<Node<K, V>>) -> (Box<Node<K, V>>, Link<K, V>) {
    match node.right.take() {
        None => {
            let rest = node.left.take();
            node.size = 1;
            (node, rest)
        }
        Some(right) => {
            let (max, rest) = detach_max(right);
            node.right = rest;
            node.update_size();
            (max, Some(node))
        }
    }
}

pub fn remove_min<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
    link.take().map(|node| {
        let (min, rest) = detach_min(node);
        *link = rest;
        let min = *min;
        (min.key, min.value)
    })
}

pub fn remove_max<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
    link.take().map(|node| {
        let (max, rest) = detach_max(node);
        *link = rest;
        let max = *max;
        (max.key, max.value)
    })
}

pub fn min<K, V>(link: &Link<K, V>) -> Option<(&K, &V)> {
    let mut node = link.as_ref()?;
    while let Some(ref left) = node.left { node = left; }
    Some((&node.key, &node.value))
}

pub fn max<K, V>(link: &Link<K, V>) -> Option<(&K, &V)> {
    let mut node = link.as_ref()?;
    while let Some(ref right) = node.right { node = right; }
    Some((&node.key, &node.value))
}

/// Counts the keys in the subtree that compare strictly less than `key`.
pub fn rank<K, V, C, Q: ?Sized>(link: &Link<K, V>, cmp: &C, key: &Q) -> usize
    where C: Compare<Q, K>
{
    match *link {
        None => 0,
        Some(ref node) => match cmp.compare(key, &node.key) {
            Less => rank(&node.left, cmp, key),
            Greater => 1 + size(&node.left) + rank(&node.right, cmp, key),
            Equal => size(&node.left),
        },
    }
}

/// Finds the entry of rank `k` by descending through the subtree counts.
pub fn select<K, V>(link: &Link<K, V>, k: usize) -> Option<(&K, &V)> {
    match *link {
        None => None,
        Some(ref node) => {
            let t = size(&node.left);
            if t > k {
                select(&node.left, k)
            } else if t < k {
                select(&node.right, k - t - 1)
            } else {
                Some((&node.key, &node.value))
            }
        }
    }
}

/// Longest path from the subtree root to an absent child, in edges. An empty
/// subtree has height -1. O(n): the height is not cached.
pub fn height<K, V>(link: &Link<K, V>) -> isize {
    match *link {
        None => -1,
        Some(ref node) => 1 + std::cmp::max(height(&node.left), height(&node.right)),
    }
}

/// Checks symmetric order: every key lies strictly between the open bounds
/// imposed by its ancestors.
pub fn is_ordered<K, V, C>(link: &Link<K, V>, cmp: &C, lo: Option<&K>, hi: Option<&K>) -> bool
    where C: Compare<K>
{
    match *link {
        None => true,
        Some(ref node) => {
            lo.map_or(true, |lo| cmp.compares_lt(lo, &node.key))
                && hi.map_or(true, |hi| cmp.compares_gt(hi, &node.key))
                && is_ordered(&node.left, cmp, lo, Some(&node.key))
                && is_ordered(&node.right, cmp, Some(&node.key), hi)
        }
    }
}

/// Checks that every cached size equals one plus the sizes of the children.
pub fn is_size_consistent<K, V>(link: &Link<K, V>) -> bool {
    match *link {
        None => true,
        Some(ref node) => {
            node.size == 1 + size(&node.left) + size(&node.right)
                && is_size_consistent(&node.left)
                && is_size_consistent(&node.right)
        }
    }
}
