//! Seeded generation of random write operations.

use std::ops::Range;

/// A single write against a sparse array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Set one position.
    Set { position: i64, value: i64 },
    /// Set every position in a range.
    SetRange { range: Range<i64>, value: i64 },
}

/// Reproducible stream of [`Op`]s over a bounded window of positions.
///
/// Values are drawn from a small alphabet (zero included) so that writes
/// regularly touch equal neighbours, overwrite runs and clear them again.
pub struct OpGenerator {
    rng: fastrand::Rng,
    window: Range<i64>,
    max_value: i64,
    max_width: i64,
    range_ratio: u8,
    stride: i64,
}

impl OpGenerator {
    /// Creates a generator producing point writes within `window` with
    /// values in `0..=max_value`.
    pub fn new(seed: u64, window: Range<i64>, max_value: i64) -> OpGenerator {
        assert!(window.start < window.end);
        assert!(max_value > 0);
        OpGenerator {
            rng: fastrand::Rng::with_seed(seed),
            window,
            max_value,
            max_width: 1,
            range_ratio: 0,
            stride: 1,
        }
    }

    /// Mixes in range writes of up to `max_width` positions; `percent` of
    /// the generated ops will be ranges.
    pub fn with_ranges(mut self, max_width: i64, percent: u8) -> OpGenerator {
        assert!(max_width > 0);
        self.max_width = max_width;
        self.range_ratio = percent.min(100);
        self
    }

    /// Restricts point writes to positions that are multiples of `stride`.
    pub fn with_stride(mut self, stride: i64) -> OpGenerator {
        assert!(stride > 0);
        self.stride = stride;
        self
    }

    fn position(&mut self) -> i64 {
        let slots = (self.window.end - self.window.start + self.stride - 1) / self.stride;
        self.window.start + self.rng.i64(0..slots) * self.stride
    }

    fn value(&mut self) -> i64 {
        self.rng.i64(0..=self.max_value)
    }
}

impl Iterator for OpGenerator {
    type Item = Op;

    fn next(&mut self) -> Option<Op> {
        if self.rng.u8(0..100) < self.range_ratio {
            let start = self.rng.i64(self.window.clone());
            let width = self.rng.i64(1..=self.max_width);
            let end = (start + width).min(self.window.end).max(start + 1);
            let value = self.value();
            Some(Op::SetRange {
                range: start..end,
                value,
            })
        } else {
            let position = self.position();
            let value = self.value();
            Some(Op::Set { position, value })
        }
    }
}
