pub mod clients;
pub mod config;
pub mod csv;
pub mod xml;
