//! Command implementations for rangevec-cmd

use clap::ValueEnum;

pub mod run;
pub mod script;

/// Output rendering for `dump` statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    /// `[begin,end)=value` runs separated by spaces
    Text,
    /// One JSON object per dump
    Json,
}
