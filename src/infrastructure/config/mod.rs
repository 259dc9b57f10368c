// ============================================================
// CONFIGURATION
// ============================================================
// Layered settings: a TOML file merged with READTRACK_ environment
// overrides. Secrets never live in the file, only the names of the
// environment variables carrying them.

use std::env;
use std::path::Path;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::application::use_cases::reconciler::ReconcilerSettings;
use crate::domain::error::{AppError, Result};

const ENV_PREFIX: &str = "READTRACK_";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub analytics: AnalyticsSettings,
    #[serde(default)]
    pub reconciler: ReconcilerSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Base address of the catalog middleware API.
    pub address: String,
    /// Endpoint path appended to the base address.
    pub endpoint: String,
    /// Environment variable holding the bearer token.
    #[serde(default = "default_catalog_token_env")]
    pub token_env: String,
}

fn default_catalog_token_env() -> String {
    "READTRACK_CATALOG_TOKEN".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSettings {
    /// Base address of the reporting API.
    pub address: String,
    /// View the report rows are scoped to.
    pub view_id: String,
    /// Environment variable holding the bearer token.
    #[serde(default = "default_analytics_token_env")]
    pub token_env: String,
    /// One pipeline run is executed per definition.
    pub reports: Vec<ReportDefinition>,
}

fn default_analytics_token_env() -> String {
    "READTRACK_ANALYTICS_TOKEN".to_string()
}

/// One report request: what to fetch and for which dates. Either
/// `date_spans` (fluent expressions) or `date_ranges` (literal or
/// fluent endpoints); spans win when both are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDefinition {
    pub name: String,
    pub dimensions: Vec<String>,
    pub metrics: Vec<MetricDefinition>,
    #[serde(default)]
    pub date_ranges: Vec<DateRangeDefinition>,
    #[serde(default)]
    pub date_spans: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricDefinition {
    pub expression: String,
    /// Column name the metric is reported under.
    pub alias: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRangeDefinition {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Directory the CSV reports are written to; created when absent.
    pub directory: String,
    /// Also write the intermediate resolved/grouped tables.
    #[serde(default)]
    pub debug_tables: bool,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Settings> {
        let settings: Settings = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| AppError::Config(format!("Failed to load settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.analytics.reports.is_empty() {
            return Err(AppError::Config(
                "At least one report definition is required".to_string(),
            ));
        }
        for report in &self.analytics.reports {
            if report.date_ranges.is_empty() && report.date_spans.is_empty() {
                return Err(AppError::Config(format!(
                    "Report '{}' defines neither date_ranges nor date_spans",
                    report.name
                )));
            }
            if report.dimensions.is_empty() || report.metrics.is_empty() {
                return Err(AppError::Config(format!(
                    "Report '{}' must define dimensions and metrics",
                    report.name
                )));
            }
        }
        Ok(())
    }

    /// Resolve a token env-var name into its value.
    pub fn secret(env_name: &str) -> Result<String> {
        env::var(env_name)
            .map_err(|_| AppError::Config(format!("Missing environment variable '{}'", env_name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_settings() -> Settings {
        Settings {
            catalog: CatalogSettings {
                address: "https://kappa.example.org/".to_string(),
                endpoint: "reports/policy-responses".to_string(),
                token_env: default_catalog_token_env(),
            },
            analytics: AnalyticsSettings {
                address: "https://reporting.example.org/".to_string(),
                view_id: "12345".to_string(),
                token_env: default_analytics_token_env(),
                reports: vec![ReportDefinition {
                    name: "weekly".to_string(),
                    dimensions: vec!["ga:date".to_string(), "ga:pagePath".to_string()],
                    metrics: vec![MetricDefinition {
                        expression: "ga:uniquePageviews".to_string(),
                        alias: "views".to_string(),
                    }],
                    date_ranges: Vec::new(),
                    date_spans: vec!["lastweek".to_string()],
                }],
            },
            reconciler: ReconcilerSettings::default(),
            output: OutputSettings {
                directory: "out".to_string(),
                debug_tables: false,
            },
        }
    }

    #[test]
    fn test_valid_settings_pass_validation() {
        assert!(minimal_settings().validate().is_ok());
    }

    #[test]
    fn test_report_without_dates_fails_validation() {
        let mut settings = minimal_settings();
        settings.analytics.reports[0].date_spans.clear();
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_no_reports_fails_validation() {
        let mut settings = minimal_settings();
        settings.analytics.reports.clear();
        assert!(settings.validate().is_err());
    }
}
