//! Core types, parsing, and aggregation for NOAA TDV climate data
//!
//! Single-pass streaming engine: each input line parses into an
//! [`Observation`], which folds into the per-state running statistics
//! held by a [`StateTable`]. The report renderer consumes the final
//! table in first-seen order.

pub mod aggregate;
pub mod parser;
pub mod report;
pub mod types;
pub mod units;

pub use aggregate::*;
pub use parser::*;
pub use report::*;
pub use types::*;
pub use units::*;
