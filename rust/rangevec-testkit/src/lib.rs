//! Test utilities and helpers for the rangevec project.
//!
//! This crate provides:
//! - [`DenseModel`]: a straightforward reference model of a sparse integer
//!   array, used to cross-check the run-based implementation
//! - [`OpGenerator`]: a seeded, reproducible stream of write operations
//!
//! # Usage
//!
//! This crate is primarily intended for use within the rangevec test suite.

pub mod model;
pub mod ops;

pub use model::DenseModel;
pub use ops::{Op, OpGenerator};
