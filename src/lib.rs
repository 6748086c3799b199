//! Generates the CockroachDB monitoring integration artifacts from the
//! `metrics.html` catalog published with CockroachDB: `metadata.csv` describing
//! every metric, and the `METRIC_MAP` literal translating Prometheus metric
//! names to CockroachDB metric names.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod naming;
pub mod pipeline;
pub mod writers;

pub use catalog::{Catalog, Metric};
pub use error::{GeneratorError, Result};
pub use pipeline::{run, GenerateOptions, GenerateSummary};
