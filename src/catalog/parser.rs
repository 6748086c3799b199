//! Extraction of metric definitions from CockroachDB's generated metrics.html.

use super::Metric;
use crate::constants::{DESCRIPTION_CELL, EXPECTED_CELLS, NAME_CELL, TYPE_CELL, UNIT_CELL};
use crate::error::{GeneratorError, Result};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("valid tr selector"));
static CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("valid td selector"));

/// Turns a metrics catalog document into metric definitions in document order.
pub trait CatalogParser {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<Metric>>;
}

/// Parser for the metrics.html table layout: one `tr` per metric with exactly
/// eight `td` cells.
///
/// Rows without any `td` (headers, spacers) are skipped. Any other cell count
/// means the document layout changed and the row is rejected rather than read
/// from guessed positions.
#[derive(Debug, Default, Clone, Copy)]
pub struct MetricsHtmlV1Parser;

impl MetricsHtmlV1Parser {
    pub fn new() -> Self {
        Self
    }

    fn parse_row(row: ElementRef<'_>) -> Result<Option<Metric>> {
        let cells: Vec<ElementRef<'_>> = row.select(&CELL_SELECTOR).collect();

        if cells.is_empty() {
            return Ok(None);
        }

        if cells.len() != EXPECTED_CELLS {
            return Err(GeneratorError::MalformedRow {
                cells: cells.len(),
                row: row.html(),
            });
        }

        let name = cell_text(cells[NAME_CELL]);
        if name.is_empty() {
            return Err(GeneratorError::EmptyMetricName { row: row.html() });
        }

        Ok(Some(Metric {
            name,
            description: cell_text(cells[DESCRIPTION_CELL]),
            metric_type: cell_text(cells[TYPE_CELL]),
            unit: cell_text(cells[UNIT_CELL]),
        }))
    }
}

impl CatalogParser for MetricsHtmlV1Parser {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<Metric>> {
        debug!("MetricsHtmlV1Parser: start bytes_len={}", bytes.len());
        let html = String::from_utf8_lossy(bytes);
        let document = Html::parse_document(&html);

        let mut metrics = Vec::new();
        let mut skipped = 0usize;
        for row in document.select(&ROW_SELECTOR) {
            match Self::parse_row(row)? {
                Some(metric) => metrics.push(metric),
                None => skipped += 1,
            }
        }

        info!(
            "MetricsHtmlV1Parser: extracted metrics count={} skipped_rows={}",
            metrics.len(),
            skipped
        );
        Ok(metrics)
    }
}

/// Rendered text of a cell: nested markup stripped, text nodes concatenated
/// and surrounding whitespace trimmed.
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}
