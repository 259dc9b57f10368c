pub mod use_cases;

pub use use_cases::date_eval::{evaluate_date, evaluate_date_span};
pub use use_cases::identifier_resolver::{is_relevant_url, resolve_ids};
pub use use_cases::reconciler::{
    ReconciledTables, Reconciler, ReconcilerSettings, PAGEVIEWS_COLUMN, PRESENTATION_COLUMNS,
    REF_COLUMN,
};
