//! Metrics known to be missing from metrics.html.
//!
//! metrics.html is generated from a CockroachDB node running in insecure mode
//! without enterprise features, so the certificate expiration gauges, the
//! license expiry gauge and a handful of admission control counters never show
//! up in it. They are maintained here by hand and appended to the extracted
//! catalog.

use super::Metric;

/// One hand-maintained metric definition.
#[derive(Debug, Clone, Copy)]
pub struct OverlayEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub metric_type: &'static str,
    pub unit: &'static str,
}

impl OverlayEntry {
    const fn new(
        name: &'static str,
        description: &'static str,
        metric_type: &'static str,
        unit: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            metric_type,
            unit,
        }
    }

    pub fn to_metric(&self) -> Metric {
        Metric::new(self.name, self.description, self.metric_type, self.unit)
    }
}

const ADMITTED: &str = "Number of requests admitted";

pub static OVERLAY: &[OverlayEntry] = &[
    OverlayEntry::new("admission.admitted.kv.bulk_normal_pri", ADMITTED, "COUNTER", "COUNT"),
    OverlayEntry::new("admission.errored.kv.bulk_normal_pri", ADMITTED, "COUNTER", "COUNT"),
    OverlayEntry::new("admission.requested.kv.bulk_normal_pri", ADMITTED, "COUNTER", "COUNT"),
    OverlayEntry::new("admission.wait_durations.kv.bulk_normal_pri", ADMITTED, "COUNTER", "COUNT"),
    OverlayEntry::new("admission.wait_queue_length.kv.bulk_normal_pri", ADMITTED, "COUNTER", "COUNT"),
    OverlayEntry::new(
        "seconds_until_enterprise_license_expiry",
        "Seconds until enterprise license expiry (0 if no license present or running without enterprise features)",
        "GAUGE",
        "SECONDS",
    ),
    OverlayEntry::new(
        "security.certificate.expiration.ca",
        "Expiration for the CA certificate. 0 means no certificate or error.",
        "GAUGE",
        "TIMESTAMP",
    ),
    OverlayEntry::new(
        "security.certificate.expiration.ca-client-tenant",
        "Expiration for the Tenant Client CA certificate. 0 means no certificate or error.",
        "GAUGE",
        "TIMESTAMP",
    ),
    OverlayEntry::new(
        "security.certificate.expiration.client",
        "Minimum expiration for client certificates, labeled by SQL user. 0 means no certificate or error.",
        "GAUGE",
        "TIMESTAMP",
    ),
    OverlayEntry::new(
        "security.certificate.expiration.client-ca",
        "Expiration for the client CA certificate. 0 means no certificate or error.",
        "GAUGE",
        "TIMESTAMP",
    ),
    OverlayEntry::new(
        "security.certificate.expiration.client-tenant",
        "Expiration for the Tenant Client certificate. 0 means no certificate or error.",
        "GAUGE",
        "TIMESTAMP",
    ),
    OverlayEntry::new(
        "security.certificate.expiration.node",
        "Expiration for the node certificate. 0 means no certificate or error.",
        "GAUGE",
        "TIMESTAMP",
    ),
    OverlayEntry::new(
        "security.certificate.expiration.node-client",
        "Expiration for the node's client certificate. 0 means no certificate or error.",
        "GAUGE",
        "TIMESTAMP",
    ),
    OverlayEntry::new(
        "security.certificate.expiration.ui",
        "Expiration for the UI certificate. 0 means no certificate or error.",
        "GAUGE",
        "TIMESTAMP",
    ),
    OverlayEntry::new(
        "security.certificate.expiration.ui-ca",
        "Expiration for the UI CA certificate. 0 means no certificate or error.",
        "GAUGE",
        "TIMESTAMP",
    ),
];

/// The overlay as owned catalog entries.
pub fn metrics() -> impl Iterator<Item = Metric> {
    OVERLAY.iter().map(OverlayEntry::to_metric)
}
