//! An ordered map based on an unbalanced binary search tree with subtree
//! counts.

use compare::{Compare, Natural};
use std::cmp::Ordering;
use std::cmp::Ordering::*;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::mem::transmute;
use std::ops;
use std::ops::Bound;
use super::node::{self, Link};

/// An ordered map based on an unbalanced binary search tree.
///
/// Each node caches the number of entries in its subtree, so the map answers
/// the order statistics [`rank`](#method.rank) and [`select`](#method.select)
/// in O(height) time and knows the exact length of any
/// [`range`](#method.range) up front.
///
/// The tree is never rebalanced: every operation is O(height), and the height
/// is only O(log n) for well-shuffled insertion orders. Inserting keys in
/// sorted order degrades it to O(n), and deletion splices the in-order
/// successor into the removed node's place, which skews the tree leftward
/// over many deletions. Both are inherited properties of the structure.
///
/// The behavior of this map is undefined if a key's ordering relative to any
/// other key changes while the key is in the map. This is normally only
/// possible through `Cell`, `RefCell`, or unsafe code.
#[derive(Clone)]
pub struct Map<K, V, C = Natural<K>> where C: Compare<K> {
    root: Link<K, V>,
    cmp: C,
}

impl<K, V> Map<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Map::with_cmp(compare::natural()) }
}

impl<K, V, C> Map<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut map = rank_tree::Map::with_cmp(natural().rev());
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Map { root: None, cmp: cmp }
    }

    /// Checks if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert(2, "b");
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of entries in the map.
    ///
    /// This is the root's cached subtree count, so it is O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert(2, "b");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize { node::size(&self.root) }

    /// Returns a reference to the map's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all entries from the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.len(), 2);
    ///
    /// map.clear();
    ///
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.iter().next(), None);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Inserts an entry into the map, returning the previous value, if any,
    /// associated with the key.
    ///
    /// Inserting never removes: unlike symbol tables with a nullable value
    /// type, there is no "absent value" that turns an insertion into a
    /// deletion. Removal is always the explicit [`remove`](#method.remove)
    /// call.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    /// assert_eq!(map.insert(1, "a"), None);
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.insert(1, "b"), Some("a"));
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        node::insert(&mut self.root, &self.cmp, key, value)
    }

    /// Removes and returns the entry whose key is equal to the given key,
    /// returning `None` if the map does not contain the key.
    ///
    /// A node with two children is replaced by its in-order successor
    /// (Hibbard deletion).
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.remove(&1), Some((1, "a")));
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.remove(&1), None);
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)>
        where C: Compare<Q, K>
    {
        node::remove(&mut self.root, &self.cmp, key)
    }

    /// Checks if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    /// assert!(!map.contains_key(&1));
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.get(key).is_some()
    }

    /// Returns a reference to the value associated with the given key, or
    /// `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    /// assert_eq!(map.get(&1), None);
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        node::get(&self.root, &self.cmp, key)
    }

    /// Returns a mutable reference to the value associated with the given
    /// key, or `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    /// map.insert(1, "a");
    ///
    /// {
    ///     let value = map.get_mut(&1).unwrap();
    ///     assert_eq!(*value, "a");
    ///     *value = "b";
    /// }
    ///
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V>
        where C: Compare<Q, K>
    {
        node::get_mut(&mut self.root, &self.cmp, key)
    }

    /// Returns a reference to the map's minimum key and a reference to its
    /// associated value, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    /// assert_eq!(rank_tree::Map::min(&map), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(rank_tree::Map::min(&map), Some((&1, &"a")));
    /// ```
    pub fn min(&self) -> Option<(&K, &V)> {
        node::min(&self.root)
    }

    /// Returns a reference to the map's maximum key and a reference to its
    /// associated value, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    /// assert_eq!(rank_tree::Map::max(&map), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(rank_tree::Map::max(&map), Some((&3, &"c")));
    /// ```
    pub fn max(&self) -> Option<(&K, &V)> {
        node::max(&self.root)
    }

    /// Removes the map's minimum key and returns it and its associated value,
    /// or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    /// assert_eq!(map.remove_min(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.remove_min(), Some((1, "a")));
    /// assert_eq!(rank_tree::Map::min(&map), Some((&2, &"b")));
    /// ```
    pub fn remove_min(&mut self) -> Option<(K, V)> {
        node::remove_min(&mut self.root)
    }

    /// Removes the map's maximum key and returns it and its associated value,
    /// or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    /// assert_eq!(map.remove_max(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.remove_max(), Some((3, "c")));
    /// assert_eq!(rank_tree::Map::max(&map), Some((&2, &"b")));
    /// ```
    pub fn remove_max(&mut self) -> Option<(K, V)> {
        node::remove_max(&mut self.root)
    }

    /// Returns the number of keys in the map that are strictly less than the
    /// given key.
    ///
    /// The key itself need not be present: for an absent key this is the
    /// position at which it would be inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    ///
    /// for key in [5, 3, 8, 1] {
    ///     map.insert(key, ());
    /// }
    ///
    /// assert_eq!(map.rank(&1), 0);
    /// assert_eq!(map.rank(&5), 2);
    /// assert_eq!(map.rank(&4), 2);
    /// assert_eq!(map.rank(&9), 4);
    /// ```
    pub fn rank<Q: ?Sized>(&self, key: &Q) -> usize where C: Compare<Q, K> {
        node::rank(&self.root, &self.cmp, key)
    }

    /// Returns the entry of rank `k`: the one with the (k + 1)-th smallest
    /// key, 0-indexed. Returns `None` if `k >= self.len()`.
    ///
    /// `select` inverts [`rank`](#method.rank): for every `k` in
    /// `0..self.len()`, `map.rank(map.select(k).unwrap().0) == k`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    ///
    /// map.insert(5, "e");
    /// map.insert(3, "c");
    /// map.insert(8, "h");
    ///
    /// assert_eq!(map.select(0), Some((&3, &"c")));
    /// assert_eq!(map.select(1), Some((&5, &"e")));
    /// assert_eq!(map.select(2), Some((&8, &"h")));
    /// assert_eq!(map.select(3), None);
    /// ```
    pub fn select(&self, k: usize) -> Option<(&K, &V)> {
        node::select(&self.root, k)
    }

    /// Returns the height of the tree in edges: the longest path from the
    /// root to an absent child. The empty map has height -1 and a single
    /// entry has height 0.
    ///
    /// O(n): the height is recomputed on every call.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    /// assert_eq!(map.height(), -1);
    ///
    /// map.insert(2, "b");
    /// assert_eq!(map.height(), 0);
    ///
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    /// assert_eq!(map.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        node::height(&self.root)
    }

    /// Returns an iterator that consumes the map.
    ///
    /// The iterator yields the entries in ascending order according to the
    /// map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.into_iter();
    /// assert_eq!(it.next(), Some((1, "a")));
    /// assert_eq!(it.next(), Some((2, "b")));
    /// assert_eq!(it.next(), Some((3, "c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter(node::IntoIter::new(self.root.take()))
    }

    /// Returns an iterator over the map's entries with immutable references
    /// to the values.
    ///
    /// The iterator yields the entries in ascending order according to the
    /// map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// for (key, value) in map.iter() {
    ///     println!("{:?}: {:?}", key, value);
    /// }
    /// ```
    pub fn iter(&self) -> Iter<K, V> {
        Iter(node::Iter::new(&self.root))
    }

    /// Returns an iterator over the map's entries with mutable references to
    /// the values.
    ///
    /// The iterator yields the entries in ascending order according to the
    /// map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    ///
    /// map.insert("b", 2);
    /// map.insert("a", 1);
    /// map.insert("c", 3);
    ///
    /// for (_, value) in map.iter_mut() {
    ///     *value *= 2;
    /// }
    ///
    /// assert_eq!(map[&"a"], 2);
    /// assert_eq!(map[&"b"], 4);
    /// assert_eq!(map[&"c"], 6);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<K, V> {
        IterMut { iter: self.iter(), _mut: PhantomData }
    }

    /// Returns the in-order traversal of the map: ascending key order.
    ///
    /// This is an alias for [`iter`](#method.iter), named alongside the
    /// other traversal orders.
    pub fn in_order(&self) -> Iter<K, V> { self.iter() }

    /// Returns the pre-order traversal of the map: each node before its
    /// children, left subtree before right.
    ///
    /// Inserting the yielded keys into an empty map reproduces the tree's
    /// exact shape.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    ///
    /// for key in [2, 1, 3] {
    ///     map.insert(key, ());
    /// }
    ///
    /// let keys: Vec<_> = map.pre_order().map(|e| *e.0).collect();
    /// assert_eq!(keys, [2, 1, 3]);
    /// ```
    pub fn pre_order(&self) -> PreOrder<K, V> {
        PreOrder(node::PreOrder::new(&self.root))
    }

    /// Returns the post-order traversal of the map: each node after both of
    /// its children.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    ///
    /// for key in [2, 1, 3] {
    ///     map.insert(key, ());
    /// }
    ///
    /// let keys: Vec<_> = map.post_order().map(|e| *e.0).collect();
    /// assert_eq!(keys, [1, 3, 2]);
    /// ```
    pub fn post_order(&self) -> PostOrder<K, V> {
        PostOrder(node::PostOrder::new(&self.root))
    }

    /// Returns the level-order traversal of the map: level by level from the
    /// root, left to right within a level.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rank_tree::Map::new();
    ///
    /// for key in [2, 1, 3] {
    ///     map.insert(key, ());
    /// }
    ///
    /// let keys: Vec<_> = map.level_order().map(|e| *e.0).collect();
    /// assert_eq!(keys, [2, 1, 3]);
    /// ```
    pub fn level_order(&self) -> LevelOrder<K, V> {
        LevelOrder(node::LevelOrder::new(&self.root))
    }

    /// Returns an iterator over the map's entries whose keys lie in the given
    /// range with immutable references to the values.
    ///
    /// The iterator yields the entries in ascending order according to the
    /// map's comparator. Thanks to the subtree counts its length is exact
    /// from the start, so it implements `ExactSizeIterator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::Bound::{Included, Excluded, Unbounded};
    ///
    /// let mut map = rank_tree::Map::new();
    ///
    /// map.insert("b", 2);
    /// map.insert("a", 1);
    /// map.insert("c", 3);
    ///
    /// assert_eq!(map.range(Unbounded, Unbounded).collect::<Vec<_>>(),
    ///     [(&"a", &1), (&"b", &2), (&"c", &3)]);
    /// assert_eq!(map.range(Excluded(&"a"), Included(&"f")).collect::<Vec<_>>(),
    ///     [(&"b", &2), (&"c", &3)]);
    /// assert_eq!(map.range(Included(&"a"), Excluded(&"b")).collect::<Vec<_>>(),
    ///     [(&"a", &1)]);
    /// assert_eq!(map.range(Included(&"a"), Included(&"c")).len(), 3);
    /// ```
    pub fn range<Min: ?Sized, Max: ?Sized>(&self, min: Bound<&Min>, max: Bound<&Max>)
        -> Range<K, V> where C: Compare<Min, K> + Compare<Max, K>
    {
        Range(node::Iter::range(&self.root, &self.cmp, min, max))
    }

    /// Checks the map's three structural invariants, returning `true` only
    /// if all of them hold: symmetric order ([`is_ordered`](#method.is_ordered)),
    /// subtree counts ([`is_size_consistent`](#method.is_size_consistent)),
    /// and the rank/select inverse law
    /// ([`is_rank_consistent`](#method.is_rank_consistent)).
    ///
    /// This is a diagnostic for tests and debugging: it is O(n log n) and is
    /// not run by the mutating operations. It returns `true` for every map
    /// reachable through this API.
    pub fn check(&self) -> bool {
        self.is_ordered() && self.is_size_consistent() && self.is_rank_consistent()
    }

    /// Checks that every node's key lies strictly between the open bounds
    /// imposed by its ancestors: the symmetric order invariant.
    pub fn is_ordered(&self) -> bool {
        node::is_ordered(&self.root, &self.cmp, None, None)
    }

    /// Checks that every node's cached subtree count equals one plus the
    /// counts of its children.
    pub fn is_size_consistent(&self) -> bool {
        node::is_size_consistent(&self.root)
    }

    /// Checks that `rank` and `select` are inverses: `rank(select(i)) == i`
    /// for every `i` in `0..len()`, and `select(rank(key))` is `key` for
    /// every key present.
    pub fn is_rank_consistent(&self) -> bool {
        for i in 0..self.len() {
            match self.select(i) {
                Some((key, _)) if self.rank(key) == i => {}
                _ => return false,
            }
        }

        self.iter().all(|(key, _)| match self.select(self.rank(key)) {
            Some((selected, _)) => self.cmp.compares_eq(selected, key),
            None => false,
        })
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &Link<K, V> { &self.root }
}

impl<K, V, C> Debug for Map<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;

        let mut it = self.iter();

        if let Some((k, v)) = it.next() {
            write!(f, "{:?}: {:?}", k, v)?;
            for (k, v) in it { write!(f, ", {:?}: {:?}", k, v)?; }
        }

        write!(f, "}}")
    }
}

impl<K, V, C> Default for Map<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { Map::with_cmp(Default::default()) }
}

impl<K, V, C> Extend<(K, V)> for Map<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k, v); }
    }
}

impl<K, V, C> FromIterator<(K, V)> for Map<K, V, C> where C: Compare<K> + Default {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(it: I) -> Self {
        let mut map: Self = Default::default();
        map.extend(it);
        map
    }
}

impl<K, V, C> Hash for Map<K, V, C> where K: Hash, V: Hash, C: Compare<K> {
    fn hash<H: Hasher>(&self, h: &mut H) {
        for e in self.iter() { e.hash(h); }
    }
}

impl<'a, K, V, C, Q: ?Sized> ops::Index<&'a Q> for Map<K, V, C>
    where C: Compare<K> + Compare<Q, K>
{
    type Output = V;
    fn index(&self, key: &Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, C> IntoIterator for &'a Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<'a, K, V, C> IntoIterator for &'a mut Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> IterMut<'a, K, V> { self.iter_mut() }
}

impl<K, V, C> IntoIterator for Map<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> IntoIter<K, V> { self.into_iter() }
}

impl<K, V, C> PartialEq for Map<K, V, C> where V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| {
            self.cmp.compares_eq(l.0, r.0) && l.1 == r.1
        })
    }
}

impl<K, V, C> Eq for Map<K, V, C> where V: Eq, C: Compare<K> {}

impl<K, V, C> PartialOrd for Map<K, V, C> where V: PartialOrd, C: Compare<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let mut l = self.iter();
        let mut r = other.iter();

        loop {
            match (l.next(), r.next()) {
                (None, None) => return Some(Equal),
                (None, Some(_)) => return Some(Less),
                (Some(_), None) => return Some(Greater),
                (Some(l), Some(r)) => match self.cmp.compare(l.0, r.0) {
                    Equal => match l.1.partial_cmp(r.1) {
                        Some(Equal) => {}
                        non_eq => return non_eq,
                    },
                    non_eq => return Some(non_eq),
                },
            }
        }
    }
}

impl<K, V, C> Ord for Map<K, V, C> where V: Ord, C: Compare<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut l = self.iter();
        let mut r = other.iter();

        loop {
            match (l.next(), r.next()) {
                (None, None) => return Equal,
                (None, Some(_)) => return Less,
                (Some(_), None) => return Greater,
                (Some(l), Some(r)) => match self.cmp.compare(l.0, r.0) {
                    Equal => match l.1.cmp(r.1) {
                        Equal => {}
                        non_eq => return non_eq,
                    },
                    non_eq => return non_eq,
                },
            }
        }
    }
}

/// An iterator that consumes the map.
///
/// The iterator yields the entries in ascending order according to the map's
/// comparator.
///
/// Acquire through [`Map::into_iter`](struct.Map.html#method.into_iter) or
/// the `IntoIterator` trait.
#[derive(Clone)]
pub struct IntoIter<K, V>(node::IntoIter<K, V>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

/// An iterator over the map's entries with immutable references to the
/// values.
///
/// The iterator yields the entries in ascending order according to the map's
/// comparator.
///
/// Acquire through [`Map::iter`](struct.Map.html#method.iter) or the
/// `IntoIterator` trait.
pub struct Iter<'a, K: 'a, V: 'a>(node::Iter<'a, K, V>);

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Iter<'a, K, V> { Iter(self.0.clone()) }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> { self.0.next_back() }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// An iterator over the map's entries with mutable references to the values.
///
/// The iterator yields the entries in ascending order according to the map's
/// comparator.
///
/// Acquire through [`Map::iter_mut`](struct.Map.html#method.iter_mut) or the
/// `IntoIterator` trait.
pub struct IterMut<'a, K: 'a, V: 'a> {
    iter: Iter<'a, K, V>,
    _mut: PhantomData<&'a mut V>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<(&'a K, &'a mut V)> {
        let next = self.iter.next();
        unsafe { transmute(next) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.iter.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a mut V)> {
        let next_back = self.iter.next_back();
        unsafe { transmute(next_back) }
    }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

/// An iterator over the map's entries whose keys lie in a given range with
/// immutable references to the values.
///
/// The iterator yields the entries in ascending order according to the map's
/// comparator. Its length is exact, derived from the subtree counts.
///
/// Acquire through [`Map::range`](struct.Map.html#method.range).
pub struct Range<'a, K: 'a, V: 'a>(node::Iter<'a, K, V>);

impl<'a, K, V> Clone for Range<'a, K, V> {
    fn clone(&self) -> Range<'a, K, V> { Range(self.0.clone()) }
}

impl<'a, K, V> Iterator for Range<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for Range<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> { self.0.next_back() }
}

impl<'a, K, V> ExactSizeIterator for Range<'a, K, V> {}

/// A pre-order iterator over the map's entries: each node before its
/// children, left subtree before right.
///
/// Acquire through [`Map::pre_order`](struct.Map.html#method.pre_order).
pub struct PreOrder<'a, K: 'a, V: 'a>(node::PreOrder<'a, K, V>);

impl<'a, K, V> Clone for PreOrder<'a, K, V> {
    fn clone(&self) -> PreOrder<'a, K, V> { PreOrder(self.0.clone()) }
}

impl<'a, K, V> Iterator for PreOrder<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for PreOrder<'a, K, V> {}

/// A post-order iterator over the map's entries: each node after both of its
/// children.
///
/// Acquire through [`Map::post_order`](struct.Map.html#method.post_order).
pub struct PostOrder<'a, K: 'a, V: 'a>(node::PostOrder<'a, K, V>);

impl<'a, K, V> Clone for PostOrder<'a, K, V> {
    fn clone(&self) -> PostOrder<'a, K, V> { PostOrder(self.0.clone()) }
}

impl<'a, K, V> Iterator for PostOrder<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for PostOrder<'a, K, V> {}

/// A level-order (breadth-first) iterator over the map's entries.
///
/// Acquire through [`Map::level_order`](struct.Map.html#method.level_order).
pub struct LevelOrder<'a, K: 'a, V: 'a>(node::LevelOrder<'a, K, V>);

impl<'a, K, V> Clone for LevelOrder<'a, K, V> {
    fn clone(&self) -> LevelOrder<'a, K, V> { LevelOrder(self.0.clone()) }
}

impl<'a, K, V> Iterator for LevelOrder<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for LevelOrder<'a, K, V> {}
