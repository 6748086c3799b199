//! metadata.csv for the integration's metadata registry.

use super::expand;
use crate::catalog::Metric;
use crate::constants::{INTEGRATION, METADATA_COLUMNS, NAMESPACE};
use crate::error::Result;
use crate::naming::cockroachdb_metric_name;
use serde::Serialize;
use std::io::Write;
use tracing::debug;

/// One metadata.csv record. Field order is the column order.
#[derive(Debug, Serialize)]
pub struct MetadataRow<'a> {
    pub metric_name: String,
    pub metric_type: String,
    pub interval: &'static str,
    pub unit_name: String,
    pub per_unit_name: &'static str,
    pub description: &'a str,
    pub orientation: &'static str,
    pub integration: &'static str,
    pub short_name: &'static str,
    pub curated_metric: &'static str,
}

impl<'a> MetadataRow<'a> {
    /// Row for `raw_name`, which is either `metric.name` or one of its
    /// histogram sub-metrics.
    pub fn new(metric: &'a Metric, raw_name: &str) -> Self {
        Self {
            metric_name: format!("{}.{}", NAMESPACE, cockroachdb_metric_name(raw_name)),
            metric_type: metric.metric_type.to_lowercase(),
            interval: "",
            unit_name: metric.unit.to_lowercase(),
            per_unit_name: "",
            description: &metric.description,
            orientation: "0",
            integration: INTEGRATION,
            short_name: "",
            curated_metric: "",
        }
    }
}

/// Write the header and one row per emitted metric name. Returns the number of
/// data rows written.
pub fn write_metadata<W: Write>(writer: W, metrics: &[Metric]) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(METADATA_COLUMNS)?;

    let mut rows = 0usize;
    for (metric, raw_name) in expand(metrics) {
        csv_writer.serialize(MetadataRow::new(metric, &raw_name))?;
        rows += 1;
    }

    csv_writer.flush()?;
    debug!("metadata: wrote {} rows", rows);
    Ok(rows)
}
