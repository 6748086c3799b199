//! METRIC_MAP literal translating Prometheus names to CockroachDB names.
//!
//! The consumer evaluates this file as source, so the exact shape matters:
//!
//! ```text
//! METRIC_MAP = {
//!     'sql_query_count': 'sql.query.count',
//! }
//! ```
//!
//! The closing brace is not followed by a newline.

use super::expand;
use crate::catalog::Metric;
use crate::constants::METRIC_MAP_NAME;
use crate::naming::{cockroachdb_metric_name, prometheus_metric_name};
use std::io::{self, Write};
use tracing::debug;

/// Write the mapping literal. Returns the number of entries written.
pub fn write_mapping<W: Write>(writer: &mut W, metrics: &[Metric]) -> io::Result<usize> {
    writeln!(writer, "{} = {{", METRIC_MAP_NAME)?;

    let mut entries = 0usize;
    for (_, raw_name) in expand(metrics) {
        writeln!(
            writer,
            "    '{}': '{}',",
            prometheus_metric_name(&raw_name),
            cockroachdb_metric_name(&raw_name)
        )?;
        entries += 1;
    }

    write!(writer, "}}")?;
    debug!("mapping: wrote {} entries", entries);
    Ok(entries)
}
