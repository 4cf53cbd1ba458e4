// crates/engine/src/lib.rs
//! Post-processing for numbered performance-test result files.
//!
//! [`reformat`] turns raw `rs{i}.txt` samples into `<line> <value>` pairs,
//! [`average`] merges `rc{i}.txt` runs into per-index means.

pub mod average;
pub mod config;
pub mod error;
pub mod reformat;
pub mod repr;
pub mod text;

pub use crate::average::{Aggregate, AverageSummary, Sample};
pub use crate::config::{AverageConfig, FileSeries, ReformatConfig};
pub use crate::error::{EngineError, Result, SampleError};
pub use crate::reformat::{FileReport, ReformatEvent, ReformatSummary, Record};
