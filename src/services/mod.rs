pub mod archive;
pub mod config;
pub mod converter;
pub mod document;
pub mod language;
