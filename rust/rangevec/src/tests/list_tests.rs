use crate::{Interval, IntervalList, tests::assert_invariants, tests::runs};

#[test]
fn test_default_read_is_zero() {
    let list = IntervalList::new();
    for pos in [-1_000_000, -1, 0, 1, 5, i64::MAX, i64::MIN] {
        assert_eq!(list.get(pos), 0);
        assert_eq!(list[pos], 0);
    }
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
}

#[test]
fn test_write_then_read() {
    let mut list = IntervalList::new();
    list.insert(5, 3).unwrap();
    assert_eq!(list.get(5), 3);
    assert_eq!(runs(&list), vec![(5, 6, 3)]);
}

#[test]
fn test_coalescing_two_writes_one_run() {
    let mut list = IntervalList::new();
    list.insert(5, 3).unwrap();
    list.insert(6, 3).unwrap();
    assert_eq!(runs(&list), vec![(5, 7, 3)]);
}

#[test]
fn test_coalescing_from_the_left() {
    let mut list = IntervalList::new();
    list.insert(6, 3).unwrap();
    list.insert(5, 3).unwrap();
    assert_eq!(runs(&list), vec![(5, 7, 3)]);
}

#[test]
fn test_elision() {
    let mut list = IntervalList::new();
    list.insert(5, 3).unwrap();
    list.insert(5, 0).unwrap();
    assert_eq!(list.get(5), 0);
    assert!(list.is_empty());
}

#[test]
fn test_split_then_merge_round_trip() {
    let mut list = IntervalList::new();
    list.insert(4, 3).unwrap();
    list.insert(5, 3).unwrap();
    assert_eq!(runs(&list), vec![(4, 6, 3)]);
    list.insert(4, 9).unwrap();
    assert_eq!(runs(&list), vec![(4, 5, 9), (5, 6, 3)]);
    list.insert(4, 3).unwrap();
    assert_eq!(runs(&list), vec![(4, 6, 3)]);
}

/// `get` compares positions against run starts only; positions covered by a
/// run past its first position read as zero. `interval_at` is the
/// containment lookup.
#[test]
fn test_get_matches_run_begin_only() {
    let mut list = IntervalList::new();
    list.insert(5, 3).unwrap();
    list.insert(6, 3).unwrap();
    list.insert(7, 3).unwrap();
    assert_eq!(runs(&list), vec![(5, 8, 3)]);

    assert_eq!(list.get(5), 3);
    assert_eq!(list.get(6), 0);
    assert_eq!(list.get(7), 0);
    assert_eq!(list[6], 0);

    assert_eq!(list.interval_at(6).map(Interval::value), Some(3));
    assert_eq!(list.interval_at(7).map(Interval::range), Some(5..8));
    assert_eq!(list.interval_at(8), None);
    assert_eq!(list.interval_at(4), None);
}

#[test]
fn test_negative_positions() {
    let mut list = IntervalList::new();
    list.insert(-3, 2).unwrap();
    list.insert(-2, 2).unwrap();
    list.insert(0, -4).unwrap();
    assert_eq!(runs(&list), vec![(-3, -1, 2), (0, 1, -4)]);
    assert_eq!(list.get(0), -4);
    assert_invariants(&list);
}

#[test]
fn test_deep_copy_independence() {
    let mut a = IntervalList::new();
    a.insert(1, 1).unwrap();
    a.insert(2, 1).unwrap();
    a.insert(10, 5).unwrap();
    let b = a.clone();
    let c = a.try_clone().unwrap();

    a.insert(10, 0).unwrap();
    a.insert(1, 7).unwrap();
    a.insert(20, 2).unwrap();

    for copy in [&b, &c] {
        assert_eq!(copy.get(1), 1);
        assert_eq!(copy.get(10), 5);
        assert_eq!(copy.get(20), 0);
        assert_eq!(runs(copy), vec![(1, 3, 1), (10, 11, 5)]);
    }
    assert_eq!(a.get(1), 7);
    assert_ne!(a, b);
    assert_eq!(b, c);
}

#[test]
fn test_assign_from_replaces_contents() {
    let mut target = IntervalList::new();
    target.insert(100, 9).unwrap();

    let mut source = IntervalList::new();
    source.insert(3, 4).unwrap();
    source.insert(4, 4).unwrap();

    target.assign_from(&source).unwrap();
    assert_eq!(target, source);
    assert_eq!(target.get(100), 0);

    source.insert(3, 0).unwrap();
    assert_eq!(runs(&target), vec![(3, 5, 4)]);
    assert_eq!(runs(&source), vec![(4, 5, 4)]);
}

#[test]
fn test_clone_from_replaces_contents() {
    let mut target = IntervalList::new();
    target.insert(-8, 1).unwrap();
    let mut source = IntervalList::new();
    source.insert(2, 2).unwrap();
    target.clone_from(&source);
    assert_eq!(runs(&target), vec![(2, 3, 2)]);

    let empty = IntervalList::new();
    target.clone_from(&empty);
    assert!(target.is_empty());
}

#[test]
fn test_self_assignment_is_harmless() {
    let mut list = IntervalList::new();
    list.insert(1, 1).unwrap();
    let snapshot = list.clone();
    list.assign_from(&snapshot).unwrap();
    assert_eq!(list, snapshot);
}

#[test]
fn test_remove_by_begin() {
    let mut list = IntervalList::new();
    list.insert(1, 1).unwrap();
    list.insert_range(4..7, 2).unwrap();
    list.insert(9, 3).unwrap();

    let removed = list.remove(4).unwrap();
    assert_eq!(removed, Interval::new(4..7, 2));
    assert_eq!(runs(&list), vec![(1, 2, 1), (9, 10, 3)]);

    assert!(list.remove(9).is_ok());
    assert!(list.remove(1).is_ok());
    assert!(list.is_empty());
}

#[test]
fn test_remove_missing_is_not_found() {
    let mut empty = IntervalList::new();
    assert!(empty.remove(0).unwrap_err().is_not_found());

    let mut list = IntervalList::new();
    list.insert_range(4..7, 2).unwrap();
    assert!(list.remove(5).unwrap_err().is_not_found());
    assert!(list.remove(100).unwrap_err().is_not_found());
    assert_eq!(runs(&list), vec![(4, 7, 2)]);
}

#[test]
fn test_clear() {
    let mut list = IntervalList::new();
    list.insert(1, 1).unwrap();
    list.insert(3, 1).unwrap();
    list.clear();
    assert!(list.is_empty());
    list.insert(2, 5).unwrap();
    assert_eq!(runs(&list), vec![(2, 3, 5)]);
}

#[test]
fn test_display_and_debug() {
    let mut list = IntervalList::new();
    assert_eq!(list.to_string(), "{}");
    list.insert(5, 3).unwrap();
    list.insert(6, 3).unwrap();
    list.insert(9, -1).unwrap();
    assert_eq!(list.to_string(), "[5,7)=3 [9,10)=-1");
    assert!(format!("{list:?}").contains("begin: 5"));
}

#[test]
fn test_proxy_reads_and_writes() {
    let mut list = IntervalList::new();
    list.at(5).set(3).unwrap();
    list.at(6).set(3).unwrap();
    assert!(list.at(5) == 3);
    assert!(list.at(6) == 0);
    assert_eq!(list.at(5).position(), 5);
    assert_eq!(i64::from(list.at(5)), 3);
    assert_eq!(list.at(5).to_string(), "3");

    let mut proxy = list.at(5);
    proxy.set(0).unwrap();
    assert_eq!(proxy.get(), 0);
    assert_eq!(runs(&list), vec![(6, 7, 3)]);
}

#[test]
fn test_try_from_intervals() {
    let list = IntervalList::try_from_intervals([
        Interval::new(0..2, 1),
        Interval::new(2..4, 2),
        Interval::new(8..9, 1),
    ])
    .unwrap();
    assert_eq!(runs(&list), vec![(0, 2, 1), (2, 4, 2), (8, 9, 1)]);

    let mut list = list;
    list.insert(4, 2).unwrap();
    assert_eq!(runs(&list), vec![(0, 2, 1), (2, 5, 2), (8, 9, 1)]);
}

#[test]
fn test_try_from_intervals_rejects_broken_invariants() {
    let overlapping = [Interval::new(0..3, 1), Interval::new(2..4, 2)];
    let unsorted = [Interval::new(5..6, 1), Interval::new(0..1, 2)];
    let uncoalesced = [Interval::new(0..2, 1), Interval::new(2..4, 1)];
    let zero = [Interval::new(0..2, 0)];
    let empty_run = [Interval {
        begin: 3,
        end: 3,
        value: 1,
    }];
    assert!(IntervalList::try_from_intervals(overlapping).is_err());
    assert!(IntervalList::try_from_intervals(unsorted).is_err());
    assert!(IntervalList::try_from_intervals(uncoalesced).is_err());
    assert!(IntervalList::try_from_intervals(zero).is_err());
    assert!(IntervalList::try_from_intervals(empty_run).is_err());
    assert!(IntervalList::try_from_intervals(Vec::new()).unwrap().is_empty());
}

#[test]
fn test_long_chain_teardown() {
    let mut list = IntervalList::new();
    for pos in (0..20_000).step_by(2) {
        list.insert(pos, 1).unwrap();
    }
    assert_eq!(list.len(), 10_000);
    let copy = list.clone();
    drop(list);
    assert_eq!(copy.len(), 10_000);
}

#[cfg(feature = "serde")]
#[test]
fn test_interval_serde() {
    let iv = Interval::new(2..5, 7);
    let json = serde_json::to_string(&iv).unwrap();
    assert_eq!(json, r#"{"begin":2,"end":5,"value":7}"#);
    let back: Interval = serde_json::from_str(&json).unwrap();
    assert_eq!(back, iv);
}
