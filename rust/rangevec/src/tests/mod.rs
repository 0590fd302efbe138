mod list_tests;

use crate::IntervalList;

/// Stored runs as `(begin, end, value)` triples.
pub(crate) fn runs(list: &IntervalList) -> Vec<(i64, i64, i64)> {
    list.iter()
        .map(|iv| (iv.begin(), iv.end(), iv.value()))
        .collect()
}

/// Panics unless the list satisfies every structural invariant.
pub(crate) fn assert_invariants(list: &IntervalList) {
    let stored: Vec<_> = list.iter().copied().collect();
    assert_eq!(stored.len(), list.len(), "{list}");
    for iv in &stored {
        assert!(iv.begin() < iv.end(), "empty run {iv} in {list}");
        assert_ne!(iv.value(), 0, "zero run {iv} in {list}");
    }
    for pair in stored.windows(2) {
        assert!(pair[0].end() <= pair[1].begin(), "overlap in {list}");
        assert!(
            !(pair[0].end() == pair[1].begin() && pair[0].value() == pair[1].value()),
            "uncoalesced {} {} in {list}",
            pair[0],
            pair[1]
        );
    }
}
