// ============================================================
// ANALYTICS CLIENT
// ============================================================
// Fetches one report per definition from the reporting API. Requests
// are paginated with a page token; all pages are folded into a single
// in-memory report. Fluent date expressions in the definition are
// evaluated into concrete ranges right before each request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use crate::application::use_cases::date_eval::{evaluate_date, evaluate_date_span};
use crate::domain::error::{AppError, Result};
use crate::domain::{AnalyticsReport, AnalyticsRow, ColumnHeader};
use crate::infrastructure::config::{AnalyticsSettings, DateRangeDefinition, ReportDefinition};

const REPORTS_ENDPOINT: &str = "v4/reports:batchGet";
const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

// ---- wire types -------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GetReportsRequest {
    report_requests: Vec<ReportRequest>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportRequest {
    view_id: String,
    date_ranges: Vec<WireDateRange>,
    dimensions: Vec<WireDimension>,
    metrics: Vec<WireMetric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireDateRange {
    start_date: String,
    end_date: String,
}

#[derive(Debug, Serialize)]
struct WireDimension {
    name: String,
}

#[derive(Debug, Serialize)]
struct WireMetric {
    expression: String,
    alias: String,
}

#[derive(Debug, Deserialize)]
struct GetReportsResponse {
    #[serde(default)]
    reports: Vec<WireReport>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireReport {
    column_header: WireColumnHeader,
    data: WireReportData,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireColumnHeader {
    #[serde(default)]
    dimensions: Vec<String>,
    metric_header: WireMetricHeader,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMetricHeader {
    #[serde(default)]
    metric_header_entries: Vec<WireMetricHeaderEntry>,
}

#[derive(Debug, Deserialize)]
struct WireMetricHeaderEntry {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireReportData {
    #[serde(default)]
    rows: Vec<WireRow>,
    row_count: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WireRow {
    #[serde(default)]
    dimensions: Vec<String>,
    #[serde(default)]
    metrics: Vec<WireDateRangeValues>,
}

#[derive(Debug, Deserialize)]
struct WireDateRangeValues {
    #[serde(default)]
    values: Vec<String>,
}

// ---- client -----------------------------------------------------

pub struct AnalyticsClient {
    client: reqwest::Client,
    address: Url,
    view_id: String,
    token: String,
}

impl AnalyticsClient {
    pub fn new(settings: &AnalyticsSettings, token: String) -> Result<Self> {
        let address = Url::parse(&settings.address).map_err(|e| {
            AppError::Config(format!("Bad analytics address '{}': {}", settings.address, e))
        })?;
        Ok(Self {
            client: reqwest::Client::new(),
            address,
            view_id: settings.view_id.clone(),
            token,
        })
    }

    /// Fetch all pages of one report definition.
    pub async fn fetch_report(&self, definition: &ReportDefinition) -> Result<AnalyticsReport> {
        let date_ranges = translate_dates(&definition.date_ranges, &definition.date_spans);
        let date_span = report_date_span(&date_ranges);

        let mut header = ColumnHeader::default();
        let mut rows: Vec<AnalyticsRow> = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let report = self
                .fetch_page(definition, &date_ranges, page_token.take())
                .await?;
            if report.data.row_count.is_none() {
                break;
            }
            header = ColumnHeader {
                dimensions: report.column_header.dimensions,
                metrics: report
                    .column_header
                    .metric_header
                    .metric_header_entries
                    .into_iter()
                    .map(|entry| entry.name)
                    .collect(),
            };
            rows.extend(report.data.rows.into_iter().map(|row| AnalyticsRow {
                dimensions: row.dimensions,
                // the first entry carries the values for our single
                // date range; text metrics parse leniently to 0
                metrics: row
                    .metrics
                    .first()
                    .map(|m| {
                        m.values
                            .iter()
                            .map(|v| v.trim().parse().unwrap_or(0))
                            .collect()
                    })
                    .unwrap_or_default(),
            }));
            page_token = report.next_page_token.filter(|t| !t.is_empty());
            if page_token.is_none() {
                break;
            }
        }

        info!(report = %definition.name, rows = rows.len(), "Fetched analytics report");
        Ok(AnalyticsReport {
            name: definition.name.clone(),
            date_span,
            header,
            rows,
        })
    }

    async fn fetch_page(
        &self,
        definition: &ReportDefinition,
        date_ranges: &[WireDateRange],
        page_token: Option<String>,
    ) -> Result<WireReport> {
        let url = self.address.join(REPORTS_ENDPOINT).map_err(|e| {
            AppError::Config(format!("Bad analytics endpoint '{}': {}", REPORTS_ENDPOINT, e))
        })?;
        let body = GetReportsRequest {
            report_requests: vec![ReportRequest {
                view_id: self.view_id.clone(),
                date_ranges: date_ranges.to_vec(),
                dimensions: definition
                    .dimensions
                    .iter()
                    .map(|name| WireDimension { name: name.clone() })
                    .collect(),
                metrics: definition
                    .metrics
                    .iter()
                    .map(|m| WireMetric {
                        expression: m.expression.clone(),
                        alias: m.alias.clone(),
                    })
                    .collect(),
                page_token,
            }],
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Fetch(format!("Analytics request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Fetch(format!(
                "Analytics API error ({}): {}",
                status, text
            )));
        }

        let mut parsed: GetReportsResponse = response
            .json()
            .await
            .map_err(|e| AppError::Fetch(format!("Failed to parse analytics response: {}", e)))?;
        if parsed.reports.is_empty() {
            return Err(AppError::Fetch(
                "Analytics response carries no report".to_string(),
            ));
        }
        Ok(parsed.reports.remove(0))
    }
}

/// Fluent spans win over literal ranges; range endpoints may themselves
/// be fluent expressions.
fn translate_dates(ranges: &[DateRangeDefinition], spans: &[String]) -> Vec<WireDateRange> {
    if !spans.is_empty() {
        return spans
            .iter()
            .map(|span| {
                let evaluated = evaluate_date_span(span);
                WireDateRange {
                    start_date: evaluated.start.format(WIRE_DATE_FORMAT).to_string(),
                    end_date: evaluated.end.format(WIRE_DATE_FORMAT).to_string(),
                }
            })
            .collect();
    }
    ranges
        .iter()
        .map(|range| WireDateRange {
            start_date: wire_date(&range.start_date),
            end_date: wire_date(&range.end_date),
        })
        .collect()
}

/// An endpoint is either a literal ISO date or a fluent expression.
fn wire_date(value: &str) -> String {
    let date = NaiveDate::parse_from_str(value.trim(), WIRE_DATE_FORMAT)
        .unwrap_or_else(|_| evaluate_date(value));
    date.format(WIRE_DATE_FORMAT).to_string()
}

/// Human-readable span tag used in report names and file names.
fn report_date_span(ranges: &[WireDateRange]) -> String {
    ranges
        .iter()
        .map(|r| format!("{}_to_{}", r.start_date, r.end_date))
        .collect::<Vec<_>>()
        .join("_and_")
}
