extern crate rank_tree;

use rank_tree::Map;
use std::ops::Bound::{Excluded, Included, Unbounded};

fn sample() -> Map<i32, i32> {
    let mut map = Map::new();
    for (i, key) in [5, 3, 8, 1, 4, 7, 9].iter().enumerate() {
        map.insert(*key, i as i32);
    }
    map
}

fn keys<'a, I>(it: I) -> Vec<i32> where I: Iterator<Item = (&'a i32, &'a i32)> {
    it.map(|e| *e.0).collect()
}

#[test]
fn sample_shape() {
    let map = sample();

    assert_eq!(map.len(), 7);
    assert!(!map.is_empty());
    assert_eq!(Map::min(&map), Some((&1, &3)));
    assert_eq!(Map::max(&map), Some((&9, &6)));
    assert_eq!(map.height(), 2);
    assert!(map.check());
}

#[test]
fn sample_traversals() {
    let map = sample();

    assert_eq!(keys(map.iter()), [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(keys(map.in_order()), [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(keys(map.pre_order()), [5, 3, 1, 4, 8, 7, 9]);
    assert_eq!(keys(map.post_order()), [1, 4, 3, 7, 9, 8, 5]);
    assert_eq!(keys(map.level_order()), [5, 3, 8, 1, 4, 7, 9]);
}

#[test]
fn sample_rank_select() {
    let map = sample();

    // Keys strictly less than 7 are 1, 3, 4, and 5.
    assert_eq!(map.rank(&7), 4);
    assert_eq!(map.select(4).map(|e| *e.0), Some(7));

    assert_eq!(map.rank(&1), 0);
    assert_eq!(map.rank(&9), 6);
    assert_eq!(map.rank(&0), 0);
    assert_eq!(map.rank(&6), 4);
    assert_eq!(map.rank(&10), 7);

    assert_eq!(map.select(0).map(|e| *e.0), Some(1));
    assert_eq!(map.select(6).map(|e| *e.0), Some(9));
    assert_eq!(map.select(7), None);

    for i in 0..map.len() {
        let (key, _) = map.select(i).unwrap();
        assert_eq!(map.rank(key), i);
    }
}

#[test]
fn remove_two_children_splices_successor() {
    let mut map = sample();

    // The root (5) has two children; its successor (7) takes its place.
    assert_eq!(map.remove(&5), Some((5, 0)));

    assert_eq!(map.len(), 6);
    assert!(!map.contains_key(&5));
    assert_eq!(keys(map.iter()), [1, 3, 4, 7, 8, 9]);
    assert_eq!(keys(map.pre_order()), [7, 3, 1, 4, 8, 9]);
    assert!(map.check());
}

#[test]
fn remove_min_removes_smallest() {
    let mut map = sample();

    assert_eq!(map.remove_min(), Some((1, 3)));
    assert_eq!(Map::min(&map), Some((&3, &1)));
    assert_eq!(map.len(), 6);
    assert!(map.check());
}

#[test]
fn remove_max_removes_largest() {
    let mut map = sample();

    assert_eq!(map.remove_max(), Some((9, 6)));
    assert_eq!(Map::max(&map), Some((&8, &2)));
    assert_eq!(map.len(), 6);
    assert!(map.check());
}

#[test]
fn remove_absent_is_a_noop() {
    let mut map = sample();

    assert_eq!(map.remove(&6), None);
    assert_eq!(map.len(), 7);
    assert_eq!(keys(map.iter()), [1, 3, 4, 5, 7, 8, 9]);
    assert!(map.check());
}

#[test]
fn empty_map() {
    let map = Map::<i32, i32>::new();

    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.height(), -1);
    assert_eq!(Map::min(&map), None);
    assert_eq!(Map::max(&map), None);
    assert_eq!(map.select(0), None);
    assert_eq!(map.rank(&1), 0);
    assert_eq!(map.iter().next(), None);
    assert_eq!(map.pre_order().next(), None);
    assert_eq!(map.post_order().next(), None);
    assert_eq!(map.level_order().next(), None);
    assert!(map.check());
}

#[test]
fn remove_from_empty_map() {
    let mut map = Map::<i32, i32>::new();

    assert_eq!(map.remove(&1), None);
    assert_eq!(map.remove_min(), None);
    assert_eq!(map.remove_max(), None);
}

#[test]
fn overwrite_keeps_len() {
    let mut map = Map::new();

    assert_eq!(map.insert(1, "a"), None);
    assert_eq!(map.insert(1, "b"), Some("a"));
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&1), Some(&"b"));
    assert!(map.check());
}

// The source symbol table treats putting a null value as a deletion request.
// That overload is not representable here: inserting always inserts, and
// removal is the explicit `remove` call.
#[test]
fn insert_never_removes() {
    let mut map = Map::new();

    map.insert(1, None::<&str>);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&1), Some(&None));

    map.insert(1, Some("a"));
    assert_eq!(map.len(), 1);

    assert_eq!(map.remove(&1), Some((1, Some("a"))));
    assert_eq!(map.len(), 0);
}

#[test]
fn range_bounds_are_honored() {
    let map = sample();

    let range = map.range(Included(&3), Included(&8));
    assert_eq!(range.len(), 5);
    assert_eq!(keys(range), [3, 4, 5, 7, 8]);

    assert_eq!(keys(map.range(Excluded(&3), Excluded(&8))), [4, 5, 7]);
    assert_eq!(keys(map.range(Unbounded, Excluded(&5))), [1, 3, 4]);
    assert_eq!(keys(map.range(Included(&6), Unbounded)), [7, 8, 9]);
    assert!(keys(map.range(Included(&10), Unbounded)).is_empty());

    // Inverted bounds yield an empty range.
    assert_eq!(map.range(Included(&8), Included(&3)).len(), 0);
    assert!(keys(map.range(Included(&8), Included(&3))).is_empty());
}

#[test]
fn range_is_double_ended() {
    let map = sample();

    let mut range = map.range(Included(&3), Included(&8));
    assert_eq!(range.next().map(|e| *e.0), Some(3));
    assert_eq!(range.next_back().map(|e| *e.0), Some(8));
    assert_eq!(range.next_back().map(|e| *e.0), Some(7));
    assert_eq!(range.next().map(|e| *e.0), Some(4));
    assert_eq!(range.next().map(|e| *e.0), Some(5));
    assert_eq!(range.next(), None);
    assert_eq!(range.next_back(), None);
}

#[test]
fn sorted_insertion_degrades_height() {
    let mut map = Map::new();
    for key in 0..10 {
        map.insert(key, ());
    }

    // No rebalancing: a sorted insertion order yields a path.
    assert_eq!(map.height(), 9);
    assert!(map.check());
}

#[test]
fn values_update_in_place() {
    let mut map = sample();

    if let Some(value) = map.get_mut(&4) {
        *value = 40;
    }
    assert_eq!(map[&4], 40);

    for (_, value) in map.iter_mut() {
        *value += 1;
    }
    assert_eq!(map[&4], 41);
    assert!(map.check());
}
