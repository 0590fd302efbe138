//! Reference model: one map entry per non-zero position.

use std::{collections::BTreeMap, ops::Range};

/// A sparse integer array that stores every non-zero position individually.
///
/// Slow but obviously correct; tests compare the run-based list against it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DenseModel {
    values: BTreeMap<i64, i64>,
}

impl DenseModel {
    pub fn new() -> DenseModel {
        DenseModel::default()
    }

    /// Sets `position` to `value`; zero removes the entry.
    pub fn set(&mut self, position: i64, value: i64) {
        if value == 0 {
            self.values.remove(&position);
        } else {
            self.values.insert(position, value);
        }
    }

    pub fn set_range(&mut self, range: Range<i64>, value: i64) {
        for position in range {
            self.set(position, value);
        }
    }

    /// Value at `position`, zero when unset.
    pub fn get(&self, position: i64) -> i64 {
        self.values.get(&position).copied().unwrap_or(0)
    }

    /// Number of non-zero positions.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Collapses the positions into maximal runs of equal value, in the
    /// `(range, value)` form the run-based list should hold.
    pub fn runs(&self) -> Vec<(Range<i64>, i64)> {
        let mut runs: Vec<(Range<i64>, i64)> = Vec::new();
        for (&position, &value) in &self.values {
            match runs.last_mut() {
                Some((range, run_value)) if range.end == position && *run_value == value => {
                    range.end += 1;
                }
                _ => runs.push((position..position + 1, value)),
            }
        }
        runs
    }

    /// Sum over all positions of `self[p] * other[p]`.
    pub fn dot(&self, other: &DenseModel) -> i64 {
        self.values
            .iter()
            .map(|(position, value)| value * other.get(*position))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::DenseModel;

    #[test]
    fn test_runs_collapse_equal_neighbours() {
        let mut model = DenseModel::new();
        model.set_range(2..5, 7);
        model.set(5, 1);
        model.set(9, 1);
        model.set(3, 0);
        assert_eq!(model.runs(), vec![(2..3, 7), (4..5, 7), (5..6, 1), (9..10, 1)]);
        assert_eq!(model.count(), 4);
    }

    #[test]
    fn test_dot() {
        let mut a = DenseModel::new();
        let mut b = DenseModel::new();
        a.set_range(0..4, 2);
        b.set_range(2..6, 3);
        assert_eq!(a.dot(&b), 12);
        assert_eq!(b.dot(&a), 12);
    }
}
