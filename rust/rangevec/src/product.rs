//! Positional product of two interval lists.

use std::{cmp::Ordering, ops::Mul};

use crate::IntervalList;

impl IntervalList {
    /// Combines two lists into a single scalar by walking both chains in
    /// parallel, one cursor per list.
    ///
    /// Each list is read as an infinite vector that is zero outside its runs,
    /// and the walk accumulates contributions run by run, so the cost is
    /// linear in the number of stored runs rather than in the covered span:
    ///
    /// - Both runs begin at the same position: adds `a.value * b.value` once,
    ///   regardless of the run lengths, and advances both cursors.
    /// - `a` begins first: adds the length of the part of `b` that `a` covers,
    ///   weighted by `a.value`, and advances `a`.
    /// - `b` begins first: if `b` reaches the end of `a`, adds
    ///   `(a.end - b.begin) * a.value`; advances `b` either way.
    ///
    /// Stops as soon as either chain is exhausted; empty inputs yield zero.
    ///
    /// Span lengths, products and the running total use two's-complement
    /// wrapping arithmetic, so runs reaching across most of the `i64` domain
    /// never make this panic; results that do not fit in `i64` wrap.
    pub fn combine(&self, other: &IntervalList) -> i64 {
        let mut left = self.iter();
        let mut right = other.iter();
        let mut a = left.next();
        let mut b = right.next();
        let mut total = 0i64;

        while let (Some(x), Some(y)) = (a, b) {
            match x.begin().cmp(&y.begin()) {
                Ordering::Equal => {
                    total = total.wrapping_add(x.value().wrapping_mul(y.value()));
                    a = left.next();
                    b = right.next();
                }
                Ordering::Less => {
                    if y.end() <= x.end() {
                        total = total.wrapping_add(weighted(y.begin(), y.end(), x.value()));
                    } else if x.end() > y.begin() {
                        total = total.wrapping_add(weighted(y.begin(), x.end(), x.value()));
                    }
                    a = left.next();
                }
                Ordering::Greater => {
                    if y.end() >= x.end() {
                        total = total.wrapping_add(weighted(y.begin(), x.end(), x.value()));
                    }
                    b = right.next();
                }
            }
        }

        log::debug!(
            "combined {} runs with {} runs: {total}",
            self.len(),
            other.len()
        );
        total
    }
}

/// `(end - begin) * value`, wrapping on overflow.
#[inline]
fn weighted(begin: i64, end: i64, value: i64) -> i64 {
    end.wrapping_sub(begin).wrapping_mul(value)
}

impl Mul for &IntervalList {
    type Output = i64;

    fn mul(self, rhs: &IntervalList) -> i64 {
        self.combine(rhs)
    }
}
