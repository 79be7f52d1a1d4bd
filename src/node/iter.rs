use compare::Compare;
use std::collections::VecDeque;
use std::ops::Bound;
use super::{Link, Node};

/// A double-ended in-order iterator over a subtree.
///
/// Two descent stacks track the next entry from either end; `remaining` is
/// the exact number of entries left, computed up front from the subtree
/// counts, and is the sole cutoff once the ends converge.
pub struct Iter<'a, K: 'a, V: 'a> {
    fwd: Vec<&'a Node<K, V>>,
    rev: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub fn new(root: &'a Link<K, V>) -> Iter<'a, K, V> {
        let mut it = Iter { fwd: vec![], rev: vec![], remaining: super::size(root) };
        it.descend_left(root.as_deref());
        it.descend_right(root.as_deref());
        it
    }

    pub fn range<C, Min: ?Sized, Max: ?Sized>(root: &'a Link<K, V>, cmp: &C,
                                              min: Bound<&Min>, max: Bound<&Max>)
        -> Iter<'a, K, V> where C: Compare<Min, K> + Compare<Max, K>
    {
        // The subtree counts give the number of keys on either side of each
        // bound, so the range's length is exact before any entry is yielded.
        let below_min = match min {
            Bound::Unbounded => 0,
            Bound::Included(q) => super::rank(root, cmp, q),
            Bound::Excluded(q) =>
                super::rank(root, cmp, q) + super::get(root, cmp, q).is_some() as usize,
        };

        let below_max = match max {
            Bound::Unbounded => super::size(root),
            Bound::Included(q) =>
                super::rank(root, cmp, q) + super::get(root, cmp, q).is_some() as usize,
            Bound::Excluded(q) => super::rank(root, cmp, q),
        };

        let mut it = Iter {
            fwd: vec![],
            rev: vec![],
            remaining: below_max.saturating_sub(below_min),
        };

        it.seek_min(root.as_deref(), cmp, min);
        it.seek_max(root.as_deref(), cmp, max);
        it
    }

    fn descend_left(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.fwd.push(n);
            node = n.left.as_deref();
        }
    }

    fn descend_right(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.rev.push(n);
            node = n.right.as_deref();
        }
    }

    fn seek_min<C, Min: ?Sized>(&mut self, mut node: Option<&'a Node<K, V>>, cmp: &C,
                                min: Bound<&Min>) where C: Compare<Min, K>
    {
        while let Some(n) = node {
            let in_range = match min {
                Bound::Unbounded => true,
                Bound::Included(q) => !cmp.compares_gt(q, &n.key),
                Bound::Excluded(q) => cmp.compares_lt(q, &n.key),
            };

            node = if in_range {
                self.fwd.push(n);
                n.left.as_deref()
            } else {
                n.right.as_deref()
            };
        }
    }

    fn seek_max<C, Max: ?Sized>(&mut self, mut node: Option<&'a Node<K, V>>, cmp: &C,
                                max: Bound<&Max>) where C: Compare<Max, K>
    {
        while let Some(n) = node {
            let in_range = match max {
                Bound::Unbounded => true,
                Bound::Included(q) => !cmp.compares_lt(q, &n.key),
                Bound::Excluded(q) => cmp.compares_gt(q, &n.key),
            };

            node = if in_range {
                self.rev.push(n);
                n.right.as_deref()
            } else {
                n.left.as_deref()
            };
        }
    }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Iter<'a, K, V> {
        Iter { fwd: self.fwd.clone(), rev: self.rev.clone(), remaining: self.remaining }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        if self.remaining == 0 { return None; }

        self.fwd.pop().map(|node| {
            self.remaining -= 1;
            self.descend_left(node.right.as_deref());
            (&node.key, &node.value)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        if self.remaining == 0 { return None; }

        self.rev.pop().map(|node| {
            self.remaining -= 1;
            self.descend_right(node.left.as_deref());
            (&node.key, &node.value)
        })
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// An in-order iterator that consumes the tree, unlinking nodes as it
/// descends.
#[derive(Clone)]
pub struct IntoIter<K, V> {
    stack: Vec<Box<Node<K, V>>>,
    remaining: usize,
}

impl<K, V> IntoIter<K, V> {
    pub fn new(root: Link<K, V>) -> IntoIter<K, V> {
        let mut it = IntoIter { stack: vec![], remaining: super::size(&root) };
        it.descend_left(root);
        it
    }

    fn descend_left(&mut self, mut link: Link<K, V>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.stack.pop().map(|mut node| {
            self.remaining -= 1;
            let right = node.right.take();
            self.descend_left(right);
            let node = *node;
            (node.key, node.value)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

/// A pre-order iterator: each node before its children, left subtree first.
pub struct PreOrder<'a, K: 'a, V: 'a> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> PreOrder<'a, K, V> {
    pub fn new(root: &'a Link<K, V>) -> PreOrder<'a, K, V> {
        PreOrder {
            stack: root.as_deref().into_iter().collect(),
            remaining: super::size(root),
        }
    }
}

impl<'a, K, V> Clone for PreOrder<'a, K, V> {
    fn clone(&self) -> PreOrder<'a, K, V> {
        PreOrder { stack: self.stack.clone(), remaining: self.remaining }
    }
}

impl<'a, K, V> Iterator for PreOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        self.stack.pop().map(|node| {
            self.remaining -= 1;
            if let Some(right) = node.right.as_deref() { self.stack.push(right); }
            if let Some(left) = node.left.as_deref() { self.stack.push(left); }
            (&node.key, &node.value)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<'a, K, V> ExactSizeIterator for PreOrder<'a, K, V> {}

/// A post-order iterator: each node after both of its children.
///
/// A stacked node is either unexpanded (children not yet pushed) or
/// expanded and awaiting its own visit.
pub struct PostOrder<'a, K: 'a, V: 'a> {
    stack: Vec<(&'a Node<K, V>, bool)>,
    remaining: usize,
}

impl<'a, K, V> PostOrder<'a, K, V> {
    pub fn new(root: &'a Link<K, V>) -> PostOrder<'a, K, V> {
        PostOrder {
            stack: root.as_deref().map(|node| (node, false)).into_iter().collect(),
            remaining: super::size(root),
        }
    }
}

impl<'a, K, V> Clone for PostOrder<'a, K, V> {
    fn clone(&self) -> PostOrder<'a, K, V> {
        PostOrder { stack: self.stack.clone(), remaining: self.remaining }
    }
}

impl<'a, K, V> Iterator for PostOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        loop {
            match self.stack.pop() {
                None => return None,
                Some((node, true)) => {
                    self.remaining -= 1;
                    return Some((&node.key, &node.value));
                }
                Some((node, false)) => {
                    self.stack.push((node, true));
                    if let Some(right) = node.right.as_deref() { self.stack.push((right, false)); }
                    if let Some(left) = node.left.as_deref() { self.stack.push((left, false)); }
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<'a, K, V> ExactSizeIterator for PostOrder<'a, K, V> {}

/// A level-order (breadth-first) iterator: level by level from the root,
/// left to right within a level.
pub struct LevelOrder<'a, K: 'a, V: 'a> {
    queue: VecDeque<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> LevelOrder<'a, K, V> {
    pub fn new(root: &'a Link<K, V>) -> LevelOrder<'a, K, V> {
        LevelOrder {
            queue: root.as_deref().into_iter().collect(),
            remaining: super::size(root),
        }
    }
}

impl<'a, K, V> Clone for LevelOrder<'a, K, V> {
    fn clone(&self) -> LevelOrder<'a, K, V> {
        LevelOrder { queue: self.queue.clone(), remaining: self.remaining }
    }
}

impl<'a, K, V> Iterator for LevelOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        self.queue.pop_front().map(|node| {
            self.remaining -= 1;
            if let Some(left) = node.left.as_deref() { self.queue.push_back(left); }
            if let Some(right) = node.right.as_deref() { self.queue.push_back(right); }
            (&node.key, &node.value)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<'a, K, V> ExactSizeIterator for LevelOrder<'a, K, V> {}
