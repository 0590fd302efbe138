//! Sparse integer arrays stored as ordered chains of equal-value runs.
//!
//! An [`IntervalList`] behaves like an infinite `i64`-indexed array of `i64`
//! values that are all zero until written. Rather than storing positions, it
//! keeps a minimal ordered chain of disjoint half-open [`Interval`]s, each with
//! one non-zero value, merging touching runs of equal value and dropping runs
//! that become zero.
//!
//! # Key Types
//!
//! - [`Interval`] - One run `[begin, end)` carrying a single value
//! - [`IntervalList`] - The sparse array: lookup, point/range writes, and the
//!   positional product [`IntervalList::combine`] (also available as `&a * &b`)
//! - [`IndexProxy`] - Subscript-style read/write access to one position

mod chain;
mod insert;
pub mod interval;
pub mod interval_list;
mod product;
pub mod proxy;
#[cfg(test)]
mod tests;

pub use chain::Iter;
pub use interval::Interval;
pub use interval_list::IntervalList;
pub use proxy::IndexProxy;
pub use rangevec_common::{Result, error::Error, error::ErrorKind};
