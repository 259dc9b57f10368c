pub mod analytics;
pub mod catalog;
pub mod date_span;
pub mod error;
pub mod table;

pub use analytics::{AnalyticsReport, AnalyticsRow, ColumnHeader};
pub use catalog::{CatalogCell, CatalogDocument, CatalogRow};
pub use date_span::DateSpan;
pub use table::{ColumnType, Record, Table, Value};
