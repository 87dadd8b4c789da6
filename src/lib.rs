//! Consolidates localization export bundles into one SQLite store.
//!
//! Each archive is opened, its localization project documents are read, and
//! every translated string is merged into `Localizations`, keyed by file and
//! position, with one column per language.

pub mod database;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use services::config::AppConfig;
pub use services::converter::{convert, run, ConvertReport};
