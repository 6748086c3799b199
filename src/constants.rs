//! Defaults and fixed layout constants shared across the generator.

// Default output files (used when the CLI omits the positional paths)
pub const DEFAULT_METADATA_FILE: &str = "metadata.csv";
pub const DEFAULT_MAPPING_FILE: &str = "mapping.txt";

// Namespace prefix for metadata metric names, and the `integration` column value
pub const NAMESPACE: &str = "cockroachdb";
pub const INTEGRATION: &str = "cockroachdb";

/// Opening marker of the mapping file; the consumer evaluates it as a dict literal.
pub const METRIC_MAP_NAME: &str = "METRIC_MAP";

/// Sub-metrics emitted after every histogram, in output order.
pub const HISTOGRAM_SUFFIXES: [&str; 3] = ["bucket", "count", "sum"];

pub const HISTOGRAM_TYPE: &str = "histogram";

// metrics.html layout: Layer, Metric, Description, Y-Axis Label, Type, Unit,
// Aggregation, Derivative
pub const EXPECTED_CELLS: usize = 8;
pub const NAME_CELL: usize = 1;
pub const DESCRIPTION_CELL: usize = 2;
pub const TYPE_CELL: usize = 4;
pub const UNIT_CELL: usize = 5;

/// Column schema of metadata.csv.
pub const METADATA_COLUMNS: [&str; 10] = [
    "metric_name",
    "metric_type",
    "interval",
    "unit_name",
    "per_unit_name",
    "description",
    "orientation",
    "integration",
    "short_name",
    "curated_metric",
];
