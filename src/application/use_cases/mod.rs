pub mod date_eval;
pub mod identifier_resolver;
pub mod reconciler;
