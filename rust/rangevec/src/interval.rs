//! A single run of equal values over a half-open range of positions.

use std::{fmt, ops::Range};

use rangevec_common::{Result, verify_arg};

/// One contiguous run `[begin, end)` of positions that all share `value`.
///
/// The shape of an `Interval` is fixed once it is handed out: callers can read
/// its bounds and value, while only the owning
/// [`IntervalList`](crate::IntervalList) rewrites them as it splits, merges
/// and shrinks runs.
///
/// Invariants:
/// - `begin < end` (the range is never empty).
/// - While stored in a list, `value != 0`; zero is represented by absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub(crate) begin: i64,
    pub(crate) end: i64,
    pub(crate) value: i64,
}

impl Interval {
    /// Creates an interval covering `range` with the given `value`.
    ///
    /// The range must be non-empty; this is only checked in debug builds.
    /// Use [`Interval::try_new`] for unchecked input.
    #[inline]
    pub fn new(range: Range<i64>, value: i64) -> Interval {
        debug_assert!(range.start < range.end, "empty interval {range:?}");
        Interval {
            begin: range.start,
            end: range.end,
            value,
        }
    }

    /// Creates an interval covering `range`, rejecting empty or inverted ranges.
    pub fn try_new(range: Range<i64>, value: i64) -> Result<Interval> {
        verify_arg!(range, range.start < range.end);
        Ok(Interval::new(range, value))
    }

    /// Creates the unit interval `[position, position + 1)`.
    pub fn unit(position: i64, value: i64) -> Result<Interval> {
        verify_arg!(position, position < i64::MAX);
        Ok(Interval::new(position..position + 1, value))
    }

    /// First covered position (inclusive).
    #[inline]
    pub fn begin(&self) -> i64 {
        self.begin
    }

    /// First position past the run (exclusive).
    #[inline]
    pub fn end(&self) -> i64 {
        self.end
    }

    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Number of positions covered by the run.
    #[inline]
    pub fn len(&self) -> i64 {
        self.end - self.begin
    }

    /// Always `false` for a well-formed interval; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.begin
    }

    #[inline]
    pub fn range(&self) -> Range<i64> {
        self.begin..self.end
    }

    /// Returns `true` if `begin <= position < end`.
    #[inline]
    pub fn contains(&self, position: i64) -> bool {
        self.begin <= position && position < self.end
    }

    /// Returns `true` if `next` starts exactly where `self` ends and carries
    /// the same value, i.e. the two runs should be stored as one.
    #[inline]
    pub(crate) fn can_absorb(&self, next: &Interval) -> bool {
        self.end == next.begin && self.value == next.value
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{})={}", self.begin, self.end, self.value)
    }
}
