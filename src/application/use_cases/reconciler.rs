// ============================================================
// RECONCILER
// ============================================================
// Linear pipeline tying the engine together: catalog metadata and
// raw analytics rows become tables keyed by the resolved identifier,
// duplicate refs are collapsed by summing views, and both sides are
// joined into the presentation table.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::application::use_cases::identifier_resolver::{is_relevant_url, resolve_ids};
use crate::domain::error::{AppError, Result};
use crate::domain::{AnalyticsReport, CatalogDocument, ColumnType, Table, Value};

/// Synthetic column carrying the resolved identifier on every table.
pub const REF_COLUMN: &str = "REF";

/// Name of the aggregated views column in the grouped/merged output.
pub const PAGEVIEWS_COLUMN: &str = "pageviews";

/// Catalog cells that may carry the document URL; the first non-empty
/// one in document order is used.
const URL_CELL_NAMES: &[&str] = &["oecd.org url", "mediahub link"];

/// The pipe-joined theme and directorate cells are split into three
/// columns each; the third keeps any overflow.
const THEMES_CELL: &str = "themes";
const DIRECTORATES_CELL: &str = "directorates";
const THEME_COLUMNS: &[&str] = &["Theme 1", "Theme 2", "Theme 3 (and more)"];
const DIRECTORATE_COLUMNS: &[&str] = &["Dir 1", "Dir 2", "Dir 3 (and more)"];

/// Fixed presentation order of the reconciled report.
pub const PRESENTATION_COLUMNS: &[&str] = &[
    "pageviews",
    "Work Title",
    "Title",
    "Subtitle",
    "Language",
    "Medium",
    "Theme 1",
    "Theme 2",
    "Theme 3 (and more)",
    "Dir 1",
    "Dir 2",
    "Dir 3 (and more)",
    "Web Topics",
    "Keywords",
    "Availability",
    "Date of Publication",
    "iLibrary Access Type",
    "Manifestation ID",
    "Expression ID",
    "Work ID",
    "REF",
    "Oecd.Org Url",
    "MediaHub Link",
];

const SORT_COLUMNS: &[&str] = &["Work Title", "Language", "Medium"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcilerSettings {
    /// Dimension column naming the page path; the URL dimension sits
    /// one position before it in the decorated table.
    #[serde(default = "default_page_path_column")]
    pub page_path_column: String,

    /// Metric alias summed per identifier.
    #[serde(default = "default_views_metric")]
    pub views_metric: String,
}

fn default_page_path_column() -> String {
    "ga:pagePath".to_string()
}

fn default_views_metric() -> String {
    "views".to_string()
}

impl Default for ReconcilerSettings {
    fn default() -> Self {
        Self {
            page_path_column: default_page_path_column(),
            views_metric: default_views_metric(),
        }
    }
}

/// All tables produced for one report; the intermediate ones are kept
/// for debug output.
#[derive(Debug)]
pub struct ReconciledTables {
    pub resolved: Table,
    pub grouped: Table,
    pub merged: Table,
}

pub struct Reconciler {
    settings: ReconcilerSettings,
}

impl Reconciler {
    pub fn new(settings: ReconcilerSettings) -> Self {
        Self { settings }
    }

    /// Run the full pipeline for one analytics report against an
    /// already-built catalog table.
    pub fn reconcile(&self, report: &AnalyticsReport, catalog: &Table) -> Result<ReconciledTables> {
        let resolved = self.resolved_table(report)?;
        info!(
            report = %report.name,
            raw_rows = report.rows.len(),
            resolved_rows = resolved.len(),
            "Resolved identifiers from raw analytics rows"
        );

        let grouped = self.group_by_ref(&resolved)?;
        info!(report = %report.name, groups = grouped.len(), "Grouped page views by identifier");

        let merged = self.merge(&grouped, catalog);
        info!(report = %report.name, rows = merged.len(), "Merged analytics with catalog metadata");

        Ok(ReconciledTables {
            resolved,
            grouped,
            merged,
        })
    }

    /// Build the catalog table: one row per document, keyed by the
    /// identifier resolved from its URL cells. Documents without a
    /// usable URL are filtered out, not errors.
    pub fn catalog_table(&self, document: &CatalogDocument) -> Result<Table> {
        if document.header.is_empty() {
            return Err(AppError::MalformedInput(
                "Catalog document has no header row".to_string(),
            ));
        }

        let mut table = Table::new();
        table.add_column(REF_COLUMN, ColumnType::Text);
        for label in &document.header {
            table.add_column(label, ColumnType::Text);
        }
        for label in THEME_COLUMNS.iter().chain(DIRECTORATE_COLUMNS) {
            table.add_column(label, ColumnType::Text);
        }
        table.set_primary_key(&[REF_COLUMN])?;

        let mut skipped = 0usize;
        for row in &document.rows {
            let Some(url) = row.first_non_empty(URL_CELL_NAMES) else {
                // some documents only carry a blog URL, or none at all
                skipped += 1;
                continue;
            };
            if !is_relevant_url(url) {
                skipped += 1;
                continue;
            }
            let candidates = resolve_ids(url);
            let Some(ref_value) = candidates.first() else {
                skipped += 1;
                continue;
            };

            let mut values = Vec::with_capacity(table.columns().len());
            values.push(Value::from(ref_value.clone()));
            for index in 0..document.header.len() {
                let cell = row.cells.get(index).map(|c| c.value.as_str()).unwrap_or("");
                values.push(Value::from(cell));
            }
            for theme in split_grouped_cell(row.cell(THEMES_CELL).unwrap_or("")) {
                values.push(Value::from(theme));
            }
            for directorate in split_grouped_cell(row.cell(DIRECTORATES_CELL).unwrap_or("")) {
                values.push(Value::from(directorate.to_uppercase()));
            }

            match table.append_values(values) {
                Ok(()) => {}
                Err(AppError::DuplicateKey(msg)) => {
                    // several language editions can share one English
                    // identifier; the first one wins
                    warn!(%msg, "Skipping catalog document with duplicate identifier");
                    skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }
        info!(
            documents = document.rows.len(),
            kept = table.len(),
            skipped,
            "Built catalog table"
        );
        Ok(table)
    }

    /// Decorate raw analytics rows with resolved identifiers: one
    /// output row per candidate, keeping dimension and metric values.
    /// Rows whose URL is not relevant are dropped.
    pub fn resolved_table(&self, report: &AnalyticsReport) -> Result<Table> {
        let mut table = Table::new();
        table.add_column(REF_COLUMN, ColumnType::Text);
        for dimension in &report.header.dimensions {
            table.add_column(dimension, ColumnType::Text);
        }
        for metric in &report.header.metrics {
            table.add_column(metric, ColumnType::Integer);
        }

        // the URL dimension sits right before the page path column in
        // the REF-decorated schema
        let url_index = match table
            .column_index(&self.settings.page_path_column)
            .and_then(|ordinal| ordinal.checked_sub(1))
        {
            Some(index) => index,
            None => {
                warn!(
                    column = %self.settings.page_path_column,
                    report = %report.name,
                    "Report carries no usable page path column, dropping all rows"
                );
                return Ok(table);
            }
        };

        let mut skipped = 0usize;
        for row in &report.rows {
            let url = row.dimensions.get(url_index).map(String::as_str).unwrap_or("");
            if url.is_empty() || !is_relevant_url(url) {
                skipped += 1;
                continue;
            }
            // several candidates per URL are expected; the wrong ones
            // find no catalog match and drop out at the join
            for candidate in resolve_ids(url) {
                let mut values = Vec::with_capacity(table.columns().len());
                values.push(Value::from(candidate));
                values.extend(row.dimensions.iter().map(|d| Value::from(d.as_str())));
                values.extend(row.metrics.iter().map(|m| Value::from(*m)));
                table.append_values(values)?;
            }
        }
        if skipped > 0 {
            info!(report = %report.name, skipped, "Dropped rows without a relevant URL");
        }
        Ok(table)
    }

    /// Collapse duplicate identifiers (one document reached through
    /// several URL variants) into a single page-view total.
    pub fn group_by_ref(&self, resolved: &Table) -> Result<Table> {
        let mut grouped = resolved.group_by(REF_COLUMN, &self.settings.views_metric);
        grouped.rename_column(&self.settings.views_metric, PAGEVIEWS_COLUMN);
        grouped.set_primary_key(&[REF_COLUMN])?;
        Ok(grouped)
    }

    /// Inner join on the identifier, then fixed presentation order and
    /// title/language/medium sort. Unmatched rows on either side are
    /// silently dropped.
    pub fn merge(&self, grouped: &Table, catalog: &Table) -> Table {
        let mut merged = grouped.join(catalog, |row1, row2| {
            row1.get(REF_COLUMN) == row2.get(REF_COLUMN)
        });
        merged.reorder_columns(PRESENTATION_COLUMNS);
        merged.sort_by(SORT_COLUMNS);
        merged
    }
}

/// Split a pipe-joined cell into exactly three trimmed parts, the
/// third keeping everything beyond the second separator.
fn split_grouped_cell(value: &str) -> [String; 3] {
    let mut parts = [String::new(), String::new(), String::new()];
    for (index, part) in value.splitn(3, '|').enumerate() {
        parts[index] = part.trim().to_string();
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AnalyticsRow, CatalogCell, CatalogRow, ColumnHeader};

    const FOOD_SYSTEMS_HUB_URL: &str =
        "https://www.oecd.org/coronavirus/policy-responses/covid-19-and-global-food-systems-aeb1434b/";
    const FOOD_SYSTEMS_LEGACY_URL: &str =
        "https://www.oecd.org/coronavirus/policy-responses/covid-19-and-global-food-systems/";

    fn catalog_row(pairs: &[(&str, &str)]) -> CatalogRow {
        CatalogRow {
            cells: pairs
                .iter()
                .map(|(name, value)| CatalogCell {
                    name: name.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }

    fn test_document() -> CatalogDocument {
        CatalogDocument {
            header: vec![
                "Work Title".to_string(),
                "Language".to_string(),
                "Medium".to_string(),
                "Themes".to_string(),
                "Directorates".to_string(),
                "Oecd.Org Url".to_string(),
            ],
            rows: vec![
                catalog_row(&[
                    ("work title", "COVID-19 and global food systems"),
                    ("language", "English"),
                    ("medium", "Web"),
                    ("themes", "Agriculture | Trade | Health | Tax"),
                    ("directorates", "tad | ech"),
                    ("oecd.org url", FOOD_SYSTEMS_HUB_URL),
                ]),
                // blog-only document: no usable URL, silently skipped
                catalog_row(&[
                    ("work title", "Some blog post"),
                    ("language", "English"),
                    ("medium", "Web"),
                    ("themes", ""),
                    ("directorates", ""),
                    ("oecd.org url", "https://oecdecoscope.blog/2020/some-post/"),
                ]),
            ],
        }
    }

    fn test_report(rows: Vec<AnalyticsRow>) -> AnalyticsReport {
        AnalyticsReport {
            name: "weekly".to_string(),
            date_span: "20240101_20240107".to_string(),
            header: ColumnHeader {
                dimensions: vec!["ga:date".to_string(), "ga:pagePath".to_string()],
                metrics: vec!["views".to_string()],
            },
            rows,
        }
    }

    fn analytics_row(url: &str, views: i64) -> AnalyticsRow {
        AnalyticsRow {
            dimensions: vec!["20240102".to_string(), url.to_string()],
            metrics: vec![views],
        }
    }

    #[test]
    fn test_catalog_table_keys_rows_by_resolved_ref() {
        let reconciler = Reconciler::new(ReconcilerSettings::default());
        let catalog = reconciler.catalog_table(&test_document()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0, REF_COLUMN), Some(&Value::Text("aeb1434b".into())));
        assert_eq!(catalog.get(0, "Theme 1"), Some(&Value::Text("Agriculture".into())));
        assert_eq!(catalog.get(0, "Theme 2"), Some(&Value::Text("Trade".into())));
        assert_eq!(
            catalog.get(0, "Theme 3 (and more)"),
            Some(&Value::Text("Health | Tax".into()))
        );
        assert_eq!(catalog.get(0, "Dir 1"), Some(&Value::Text("TAD".into())));
        assert_eq!(catalog.get(0, "Dir 2"), Some(&Value::Text("ECH".into())));
    }

    #[test]
    fn test_catalog_table_skips_duplicate_identifiers() {
        let mut document = test_document();
        document.rows.push(catalog_row(&[
            ("work title", "COVID-19 and global food systems (fr)"),
            ("language", "French"),
            ("medium", "Web"),
            ("themes", ""),
            ("directorates", ""),
            // non-Latin/legacy editions share the English identifier
            ("oecd.org url", FOOD_SYSTEMS_LEGACY_URL),
        ]));
        let reconciler = Reconciler::new(ReconcilerSettings::default());
        let catalog = reconciler.catalog_table(&document).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get(0, "Language"),
            Some(&Value::Text("English".into()))
        );
    }

    #[test]
    fn test_catalog_without_header_is_fatal() {
        let reconciler = Reconciler::new(ReconcilerSettings::default());
        let document = CatalogDocument {
            header: Vec::new(),
            rows: Vec::new(),
        };
        let err = reconciler.catalog_table(&document).unwrap_err();
        assert!(matches!(err, AppError::MalformedInput(_)));
    }

    #[test]
    fn test_resolved_table_drops_irrelevant_urls() {
        let reconciler = Reconciler::new(ReconcilerSettings::default());
        let report = test_report(vec![
            analytics_row(FOOD_SYSTEMS_HUB_URL, 5),
            analytics_row("https://www.oecd.org/about/", 99),
            analytics_row("", 42),
        ]);
        let resolved = reconciler.resolved_table(&report).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved.get(0, REF_COLUMN), Some(&Value::Text("aeb1434b".into())));
        assert_eq!(resolved.get(0, "views"), Some(&Value::Int(5)));
    }

    #[test]
    fn test_page_path_column_in_first_position_drops_all_rows() {
        // the configured column naming position 0 leaves no room for a
        // URL dimension before it; all rows drop instead of panicking
        let reconciler = Reconciler::new(ReconcilerSettings {
            page_path_column: REF_COLUMN.to_string(),
            ..ReconcilerSettings::default()
        });
        let report = test_report(vec![analytics_row(FOOD_SYSTEMS_HUB_URL, 5)]);
        let resolved = reconciler.resolved_table(&report).unwrap();
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_resolved_table_emits_one_row_per_candidate() {
        let reconciler = Reconciler::new(ReconcilerSettings::default());
        let report = test_report(vec![analytics_row(
            "https://www.oecd.org/coronavirus/policy-responses/foo-aeb1434b/annex-12345678.pdf",
            4,
        )]);
        let resolved = reconciler.resolved_table(&report).unwrap();
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved.get(0, REF_COLUMN), Some(&Value::Text("aeb1434b".into())));
        assert_eq!(resolved.get(1, REF_COLUMN), Some(&Value::Text("12345678".into())));
        // both rows carry the full metric value; only one survives the
        // join, so the total is never double-counted
        assert_eq!(resolved.get(1, "views"), Some(&Value::Int(4)));
    }

    #[test]
    fn test_end_to_end_merges_duplicate_refs_into_one_row() {
        let reconciler = Reconciler::new(ReconcilerSettings::default());
        let catalog = reconciler.catalog_table(&test_document()).unwrap();
        // same document reached through two URL variants
        let report = test_report(vec![
            analytics_row(FOOD_SYSTEMS_HUB_URL, 5),
            analytics_row(FOOD_SYSTEMS_LEGACY_URL, 7),
        ]);

        let tables = reconciler.reconcile(&report, &catalog).unwrap();
        assert_eq!(tables.grouped.len(), 1);
        assert_eq!(tables.merged.len(), 1);
        assert_eq!(
            tables.merged.get(0, PAGEVIEWS_COLUMN),
            Some(&Value::Int(12))
        );
        assert_eq!(
            tables.merged.get(0, "Work Title"),
            Some(&Value::Text("COVID-19 and global food systems".into()))
        );

        // presentation order: only configured columns, relative order kept
        let names = tables.merged.column_names();
        assert_eq!(names.first(), Some(&PAGEVIEWS_COLUMN));
        assert!(!names.contains(&"Themes"));
        assert!(!names.contains(&"ga:date"));
        let ref_position = names.iter().position(|n| *n == REF_COLUMN).unwrap();
        let title_position = names.iter().position(|n| *n == "Work Title").unwrap();
        assert!(title_position < ref_position);
    }

    #[test]
    fn test_candidates_without_catalog_match_are_dropped() {
        let reconciler = Reconciler::new(ReconcilerSettings::default());
        let catalog = reconciler.catalog_table(&test_document()).unwrap();
        let report = test_report(vec![analytics_row(
            "https://www.oecd.org/coronavirus/policy-responses/foo-aeb1434b/annex-12345678.pdf",
            4,
        )]);
        let tables = reconciler.reconcile(&report, &catalog).unwrap();
        // the stray 12345678 candidate finds no catalog row
        assert_eq!(tables.merged.len(), 1);
        assert_eq!(tables.merged.get(0, PAGEVIEWS_COLUMN), Some(&Value::Int(4)));
    }

    #[test]
    fn test_merge_sorts_by_title_language_medium() {
        let reconciler = Reconciler::new(ReconcilerSettings::default());
        let mut document = test_document();
        document.rows.push(catalog_row(&[
            ("work title", "A debt standstill for the poorest countries"),
            ("language", "English"),
            ("medium", "Web"),
            ("themes", ""),
            ("directorates", ""),
            (
                "oecd.org url",
                "https://www.oecd.org/coronavirus/policy-responses/a-debt-standstill-462eabd8/",
            ),
        ]));
        let catalog = reconciler.catalog_table(&document).unwrap();
        let report = test_report(vec![
            analytics_row(FOOD_SYSTEMS_HUB_URL, 5),
            analytics_row(
                "https://www.oecd.org/coronavirus/policy-responses/a-debt-standstill-462eabd8/",
                3,
            ),
        ]);
        let tables = reconciler.reconcile(&report, &catalog).unwrap();
        assert_eq!(tables.merged.len(), 2);
        assert_eq!(
            tables.merged.get(0, "Work Title"),
            Some(&Value::Text("A debt standstill for the poorest countries".into()))
        );
    }
}
