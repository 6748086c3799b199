//! Metric catalog
//!
//! The catalog is the ordered list of metric definitions that flows through the
//! generator: extracted from metrics.html, augmented with the overlay, checked
//! for duplicate names and finally sorted by name before both writers read it.

pub mod overlay;
pub mod parser;
pub mod validate;

use crate::constants::{HISTOGRAM_SUFFIXES, HISTOGRAM_TYPE};
use crate::error::Result;
use tracing::debug;

/// A single CockroachDB metric definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    /// Metric name as published by CockroachDB (e.g. `sql.query.count`).
    pub name: String,
    /// Free-text description, may be empty.
    pub description: String,
    /// Metric type label (e.g. `COUNTER`, `GAUGE`, `HISTOGRAM`), case preserved.
    pub metric_type: String,
    /// Unit label (e.g. `COUNT`, `TIMESTAMP`, `SECONDS`), case preserved.
    pub unit: String,
}

impl Metric {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        metric_type: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            metric_type: metric_type.into(),
            unit: unit.into(),
        }
    }

    pub fn is_histogram(&self) -> bool {
        self.metric_type.eq_ignore_ascii_case(HISTOGRAM_TYPE)
    }

    /// Raw names this metric contributes to the generated artifacts.
    ///
    /// Always starts with the metric's own name. Histograms are followed by
    /// their `.bucket`, `.count` and `.sum` sub-metrics so writers keep them
    /// grouped with the parent regardless of catalog order.
    pub fn emitted_names(&self) -> Vec<String> {
        let mut names = vec![self.name.clone()];
        if self.is_histogram() {
            names.extend(
                HISTOGRAM_SUFFIXES
                    .iter()
                    .map(|suffix| format!("{}.{}", self.name, suffix)),
            );
        }
        names
    }
}

/// Ordered sequence of metrics at a given pipeline stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    metrics: Vec<Metric>,
}

impl Catalog {
    pub fn new(metrics: Vec<Metric>) -> Self {
        Self { metrics }
    }

    /// Append the overlay of metrics missing from metrics.html.
    pub fn augment(mut self) -> Self {
        let before = self.metrics.len();
        self.metrics.extend(overlay::metrics());
        debug!(
            "catalog: appended {} overlay metrics to {} extracted",
            self.metrics.len() - before,
            before
        );
        self
    }

    /// Fail if any metric name occurs more than once.
    pub fn validate(&self) -> Result<()> {
        validate::ensure_unique_names(&self.metrics)
    }

    /// Order the catalog by metric name, byte-wise.
    pub fn sorted(mut self) -> Self {
        self.metrics.sort_by(|a, b| a.name.cmp(&b.name));
        self
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn histogram_count(&self) -> usize {
        self.metrics.iter().filter(|m| m.is_histogram()).count()
    }
}
