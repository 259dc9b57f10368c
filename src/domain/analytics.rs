// ============================================================
// ANALYTICS REPORT TYPES
// ============================================================
// Data structures for raw page-view data fetched from the
// analytics reporting API. Immutable once produced.

use serde::{Deserialize, Serialize};

/// Ordered dimension and metric labels of a report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnHeader {
    /// Dimension names, e.g. `ga:date`, `ga:pagePath`
    pub dimensions: Vec<String>,

    /// Metric names/aliases, e.g. `views`
    pub metrics: Vec<String>,
}

/// One raw analytics row: dimension values and integer metric values,
/// positionally matching the column header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsRow {
    pub dimensions: Vec<String>,
    pub metrics: Vec<i64>,
}

/// A fully fetched report (all pages accumulated).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// Report name from the request definition (used for logging and
    /// output file naming)
    pub name: String,

    /// Human-readable date span the report covers, e.g.
    /// `2024-01-01_to_2024-01-31` (used for output file naming)
    pub date_span: String,

    pub header: ColumnHeader,
    pub rows: Vec<AnalyticsRow>,
}

impl AnalyticsReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
