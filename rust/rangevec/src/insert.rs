//! Point and range writes: splicing a candidate run into the chain and
//! restoring the list invariants afterwards.

use std::ops::Range;

use rangevec_common::{Result, error::Error, verify_arg};

use crate::{Interval, IntervalList, chain::NodeId};

/// Upper bound on the nodes a single write allocates: the candidate itself
/// plus the trailing remainder of a run split in the middle.
const MAX_NODES_PER_WRITE: usize = 2;

impl IntervalList {
    /// Sets the value at `position`. Writing zero clears the position.
    ///
    /// This is a write of the unit range `[position, position + 1)`; see
    /// [`IntervalList::insert_range`]. `position` must be below `i64::MAX`.
    pub fn insert(&mut self, position: i64, value: i64) -> Result<()> {
        verify_arg!(position, position < i64::MAX);
        self.insert_range(position..position + 1, value)
    }

    /// Sets every position in `range` to `value`. Writing zero clears the range.
    ///
    /// The candidate run is spliced into the chain at its ordered position.
    /// Where it overlaps an existing run, that run is overwritten, shrunk, or
    /// split around the candidate; runs that end up with value zero are
    /// elided. A final coalescing pass merges touching runs of equal value.
    ///
    /// All storage the write may need is reserved up front: if that fails the
    /// error is returned and the list is unchanged.
    pub fn insert_range(&mut self, range: Range<i64>, value: i64) -> Result<()> {
        verify_arg!(range, range.start < range.end);
        self.chain
            .reserve(MAX_NODES_PER_WRITE)
            .map_err(|e| Error::allocation("IntervalList::insert_range", e))?;

        let candidate = Interval::new(range, value);
        log::trace!("insert {candidate}");

        let mut prev: Option<NodeId> = None;
        while let Some(cur) = self.chain.next_of(prev) {
            let existing = *self.chain.get(cur);
            if candidate.end() <= existing.begin() {
                // Entirely in front of `cur`, and past `prev`.
                self.place(prev, candidate);
                self.coalesce();
                return Ok(());
            }
            if candidate.begin() >= existing.end() {
                prev = Some(cur);
                continue;
            }
            self.resolve_overlap(prev, cur, candidate);
            self.coalesce();
            return Ok(());
        }

        self.place(prev, candidate);
        self.coalesce();
        Ok(())
    }

    /// Links `candidate` at `at` unless its value is zero, in which case it
    /// is elided. Returns the new node, if any.
    fn place(&mut self, at: Option<NodeId>, candidate: Interval) -> Option<NodeId> {
        if candidate.value() == 0 {
            log::trace!("elide {candidate}");
            return None;
        }
        Some(self.chain.insert_after(at, candidate))
    }

    /// Splices `candidate` into the chain around `cur`, the first run it
    /// overlaps. `prev` is the link slot in front of `cur`.
    fn resolve_overlap(&mut self, prev: Option<NodeId>, cur: NodeId, candidate: Interval) {
        let existing = *self.chain.get(cur);

        if candidate.begin() <= existing.begin() {
            if candidate.end() >= existing.end() {
                // Covers all of `cur`: take over its node.
                let anchor = if candidate.value() == 0 {
                    log::trace!("elide {existing}");
                    self.chain.remove_after(prev);
                    prev
                } else {
                    *self.chain.get_mut(cur) = candidate;
                    Some(cur)
                };
                self.trim_covered(anchor, candidate.end());
            } else {
                // Covers the front of `cur`.
                log::trace!("shrink {existing} to begin at {}", candidate.end());
                self.chain.get_mut(cur).begin = candidate.end();
                self.place(prev, candidate);
            }
        } else if candidate.end() > existing.end() {
            // Starts inside `cur` and runs past its end.
            log::trace!("shrink {existing} to end at {}", candidate.begin());
            self.chain.get_mut(cur).end = candidate.begin();
            let anchor = self.place(Some(cur), candidate).unwrap_or(cur);
            self.trim_covered(Some(anchor), candidate.end());
        } else {
            // Tail or middle of `cur`: keep a trailing remainder if one is left.
            if candidate.end() < existing.end() {
                log::trace!("split {existing} at {}", candidate.end());
                self.chain.split_at(cur, candidate.end());
            }
            self.chain.get_mut(cur).end = candidate.begin();
            self.place(Some(cur), candidate);
        }
    }

    /// Removes or shrinks the runs following `anchor` that start before `end`.
    ///
    /// Only wide candidates can reach past the run they first overlap; for a
    /// unit write this finds nothing to do.
    fn trim_covered(&mut self, anchor: Option<NodeId>, end: i64) {
        while let Some(next) = self.chain.next_of(anchor) {
            let interval = *self.chain.get(next);
            if interval.begin() >= end {
                break;
            }
            if interval.end() <= end {
                log::trace!("drop covered {interval}");
                self.chain.remove_after(anchor);
            } else {
                self.chain.get_mut(next).begin = end;
                break;
            }
        }
    }

    /// Merges every pair of touching runs with equal values, in one pass
    /// over the chain.
    pub(crate) fn coalesce(&mut self) {
        let mut cursor = self.chain.head();
        while let Some(id) = cursor {
            match self.chain.next(id) {
                Some(next) if self.chain.get(id).can_absorb(self.chain.get(next)) => {
                    if let Some(absorbed) = self.chain.remove_after(Some(id)) {
                        log::trace!("merge {absorbed} into {}", self.chain.get(id));
                        self.chain.get_mut(id).end = absorbed.end();
                    }
                }
                _ => cursor = self.chain.next(id),
            }
        }
    }
}
