use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Local;
use tracing::{error, info};

use readtrack::application::use_cases::reconciler::Reconciler;
use readtrack::domain::error::Result;
use readtrack::infrastructure::clients::{AnalyticsClient, CatalogClient};
use readtrack::infrastructure::config::Settings;
use readtrack::infrastructure::csv::ReportWriter;
use readtrack::infrastructure::xml::parse_catalog;

const EXIT_INVALID_ARGUMENTS: u8 = 1;
const EXIT_UNKNOWN_ERROR: u8 = 10;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let Some(config_path) = config_path_from_args() else {
        eprintln!("Usage: readtrack <path-to-settings.toml>");
        return ExitCode::from(EXIT_INVALID_ARGUMENTS);
    };

    match run(&config_path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Pipeline failed");
            ExitCode::from(EXIT_UNKNOWN_ERROR)
        }
    }
}

fn config_path_from_args() -> Option<PathBuf> {
    let path = PathBuf::from(env::args().nth(1)?);
    path.is_file().then_some(path)
}

async fn run(config_path: &Path) -> Result<()> {
    let settings = Settings::load(config_path)?;
    let writer = ReportWriter::new(&settings.output.directory);
    let reconciler = Reconciler::new(settings.reconciler.clone());

    info!("Fetching document metadata from the catalog");
    let catalog_client = CatalogClient::new(
        &settings.catalog.address,
        Settings::secret(&settings.catalog.token_env)?,
    )?;
    let payload = catalog_client.fetch_report(&settings.catalog.endpoint).await?;
    let document = parse_catalog(&payload)?;
    let catalog = reconciler.catalog_table(&document)?;

    let analytics_client = AnalyticsClient::new(
        &settings.analytics,
        Settings::secret(&settings.analytics.token_env)?,
    )?;
    let generated_on = Local::now().format("%Y%m%d%H%M");

    for definition in &settings.analytics.reports {
        info!(report = %definition.name, "Fetching page-view data");
        let report = analytics_client.fetch_report(definition).await?;
        let tables = reconciler.reconcile(&report, &catalog)?;

        let tag = format!("{}_{}_generatedOn_{}", report.name, report.date_span, generated_on);
        writer.write(&tables.merged, &tag)?;
        if settings.output.debug_tables {
            writer.write(&tables.resolved, &format!("_DEBUG_raw_{}", tag))?;
            writer.write(&tables.grouped, &format!("_DEBUG_grouped_{}", tag))?;
        }
    }
    Ok(())
}
