//! Stats module - Descriptive statistics

mod calculator;

pub use calculator::{DescriptiveStats, StatsCalculator};
