//! Artifact writers for the monitoring integration.
//!
//! Both writers read the same sorted, validated catalog and apply the same
//! histogram expansion, see [`expand`].

pub mod mapping;
pub mod metadata;

pub use mapping::write_mapping;
pub use metadata::write_metadata;

use crate::catalog::Metric;

/// Every `(metric, raw name)` pair to emit, in output order.
///
/// Histograms yield their own name followed by the `.bucket`, `.count` and
/// `.sum` sub-metrics, so sub-metrics always directly follow their parent
/// regardless of where their names would sort.
pub fn expand(metrics: &[Metric]) -> impl Iterator<Item = (&Metric, String)> + '_ {
    metrics
        .iter()
        .flat_map(|metric| metric.emitted_names().into_iter().map(move |name| (metric, name)))
}
