pub mod analytics;
pub mod catalog;

pub use analytics::AnalyticsClient;
pub use catalog::CatalogClient;
