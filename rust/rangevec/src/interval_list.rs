//! A sparse, unbounded array of `i64` values stored as a chain of runs.

use std::{fmt, ops::Index};

use rangevec_common::{Result, error::Error, verify_data};

use crate::{
    Interval,
    chain::{Chain, Iter},
    proxy::IndexProxy,
};

/// A sparse, conceptually unbounded array indexed by `i64` positions, where
/// every position that was never written reads as zero.
///
/// Instead of one slot per position, the list stores an ordered chain of
/// disjoint half-open [`Interval`]s, each tagged with a single non-zero value.
/// Between public calls the chain always satisfies:
///
/// 1. Ascending order: for consecutive runs `a`, `b`: `a.end() <= b.begin()`.
/// 2. Disjointness (follows from 1 and `begin < end`).
/// 3. Maximal coalescing: no two touching runs (`a.end() == b.begin()`) share a value.
/// 4. No stored run has value zero.
/// 5. Every position outside the stored runs has the value zero.
///
/// `IntervalList` is a plain value type: cloning deep-copies the chain and the
/// copy shares nothing with the source. It performs no internal
/// synchronization; wrap it in a lock to share it between threads.
///
/// # Examples
///
/// ```
/// use rangevec::IntervalList;
///
/// let mut list = IntervalList::new();
/// list.insert(5, 3).unwrap();
/// list.insert(6, 3).unwrap();
/// assert_eq!(list.len(), 1);
/// assert_eq!(list.get(5), 3);
/// assert_eq!(list.to_string(), "[5,7)=3");
/// ```
#[derive(Default)]
pub struct IntervalList {
    pub(crate) chain: Chain,
}

impl IntervalList {
    /// Creates an empty list; every position reads as zero.
    pub fn new() -> IntervalList {
        IntervalList {
            chain: Chain::new(),
        }
    }

    /// Builds a list from runs that are already normalized.
    ///
    /// The input must be ascending, disjoint, maximally coalesced and free of
    /// zero values; anything else is rejected with an invalid-format error.
    pub fn try_from_intervals<I>(intervals: I) -> Result<IntervalList>
    where
        I: IntoIterator<Item = Interval>,
    {
        let intervals: Vec<Interval> = intervals.into_iter().collect();
        for interval in &intervals {
            verify_data!(intervals, interval.begin() < interval.end());
            verify_data!(intervals, interval.value() != 0);
        }
        for pair in intervals.windows(2) {
            verify_data!(intervals, pair[0].end() <= pair[1].begin());
            verify_data!(intervals, !pair[0].can_absorb(&pair[1]));
        }
        let chain = Chain::try_from_sorted(intervals)
            .map_err(|e| Error::allocation("IntervalList::try_from_intervals", e))?;
        Ok(IntervalList { chain })
    }

    /// Number of stored runs (not the number of non-zero positions).
    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Resets every position to zero.
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Iterates over the stored runs in ascending position order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        self.chain.iter()
    }

    /// Returns the value of the run that begins exactly at `position`, or zero.
    ///
    /// Only the `begin` of each run is compared: a position strictly inside a
    /// run, past its first position, reads as zero here even though the run
    /// covers it. [`IntervalList::interval_at`] performs the containment lookup.
    pub fn get(&self, position: i64) -> i64 {
        self.iter()
            .find(|interval| interval.begin() == position)
            .map_or(0, Interval::value)
    }

    /// Returns the stored run that covers `position`, if any.
    pub fn interval_at(&self, position: i64) -> Option<&Interval> {
        self.iter()
            .take_while(|interval| interval.begin() <= position)
            .find(|interval| interval.contains(position))
    }

    /// Unlinks and returns the run that begins exactly at `position`.
    ///
    /// Fails with a not-found error when the list is empty or no run begins
    /// at `position`; the list is left unchanged in that case.
    pub fn remove(&mut self, position: i64) -> Result<Interval> {
        let mut prev = None;
        while let Some(id) = self.chain.next_of(prev) {
            let begin = self.chain.get(id).begin();
            if begin == position {
                let removed = self.chain.remove_after(prev);
                log::trace!("removed run at {position}");
                return removed.ok_or_else(|| Error::not_found(position));
            }
            if begin > position {
                break;
            }
            prev = Some(id);
        }
        Err(Error::not_found(position))
    }

    /// Returns a subscript proxy that reads through [`IntervalList::get`] and
    /// writes through [`IntervalList::insert`].
    pub fn at(&mut self, position: i64) -> IndexProxy<'_> {
        IndexProxy::new(self, position)
    }

    /// Deep-copies the list, reporting allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<IntervalList> {
        let chain = self
            .chain
            .try_clone()
            .map_err(|e| Error::allocation("IntervalList::try_clone", e))?;
        Ok(IntervalList { chain })
    }

    /// Replaces the contents of `self` with a deep copy of `other`.
    ///
    /// The copy is built completely before `self` is touched: on failure
    /// `self` keeps its previous contents, and on success the previous chain
    /// is dropped exactly once, after the swap.
    pub fn assign_from(&mut self, other: &IntervalList) -> Result<()> {
        let mut copy = other.try_clone()?;
        std::mem::swap(self, &mut copy);
        log::debug!("assigned list of {} runs", self.len());
        Ok(())
    }
}

impl Clone for IntervalList {
    fn clone(&self) -> IntervalList {
        IntervalList {
            chain: self.chain.clone(),
        }
    }

    fn clone_from(&mut self, source: &IntervalList) {
        let mut copy = source.clone();
        std::mem::swap(self, &mut copy);
    }
}

impl PartialEq for IntervalList {
    fn eq(&self, other: &IntervalList) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for IntervalList {}

impl fmt::Debug for IntervalList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for IntervalList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}");
        }
        for (i, interval) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{interval}")?;
        }
        Ok(())
    }
}

impl Index<i64> for IntervalList {
    type Output = i64;

    /// Read-only subscript with the same exact-begin semantics as
    /// [`IntervalList::get`].
    fn index(&self, position: i64) -> &i64 {
        self.iter()
            .find(|interval| interval.begin() == position)
            .map_or(&0, |interval| &interval.value)
    }
}

impl<'a> IntoIterator for &'a IntervalList {
    type Item = &'a Interval;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
