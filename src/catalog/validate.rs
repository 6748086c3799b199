//! Duplicate detection for the augmented catalog.

use super::Metric;
use crate::error::{GeneratorError, Result};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, warn};

/// Ensure every metric name in `metrics` is unique.
///
/// All duplicated names are collected before failing so a single run reports
/// every conflict. Names are listed once each, in ascending order.
pub fn ensure_unique_names(metrics: &[Metric]) -> Result<()> {
    let duplicates = duplicate_names(metrics);
    if duplicates.is_empty() {
        debug!("validate: {} metric names are unique", metrics.len());
        return Ok(());
    }

    for name in &duplicates {
        warn!("Metric name conflict detected: '{}'", name);
    }
    Err(GeneratorError::DuplicateMetrics { names: duplicates })
}

/// Names that occur more than once in `metrics`, sorted and deduplicated.
pub fn duplicate_names(metrics: &[Metric]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(metrics.len());
    let mut duplicates = BTreeSet::new();

    for metric in metrics {
        if !seen.insert(metric.name.as_str()) {
            duplicates.insert(metric.name.clone());
        }
    }

    duplicates.into_iter().collect()
}
