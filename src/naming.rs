//! Metric name normalization for the two output naming conventions.
//!
//! The metadata registry keeps CockroachDB's dotted names, the Prometheus side
//! of the mapping does not. Both rules replace disallowed characters with `_`;
//! they differ only in whether `.` is allowed.

use once_cell::sync::Lazy;
use regex::Regex;

static COCKROACHDB_DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_.]").expect("valid cockroachdb name pattern"));
static PROMETHEUS_DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_]").expect("valid prometheus name pattern"));

/// Name as used by the metadata registry and as mapping value: dots preserved.
pub fn cockroachdb_metric_name(name: &str) -> String {
    COCKROACHDB_DISALLOWED.replace_all(name, "_").into_owned()
}

/// Name as scraped from the Prometheus endpoint, used as mapping key: dots
/// collapse to `_`.
pub fn prometheus_metric_name(name: &str) -> String {
    PROMETHEUS_DISALLOWED.replace_all(name, "_").into_owned()
}
