//! SQLite store holding every merged localization.
//!
//! The store is a single file with exactly one writer. [`Store`] owns the
//! only connection for the lifetime of a run; the repositories borrow it
//! mutably so nothing else can write while an operation is in flight.

pub mod file_repo;
pub mod localization_repo;
pub mod models;
pub mod schema_repo;

use crate::types::errors::ConvertResult;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::path::Path;
use std::str::FromStr;

/// Initial schema, compiled into the binary.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub struct Store {
    conn: SqliteConnection,
}

impl Store {
    /// Open (creating if missing) the store file at `path` and bring its schema up to date.
    pub async fn open(path: &Path) -> ConvertResult<Self> {
        let opts = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        log::info!("Opening store {}", path.display());
        Self::connect_with(opts).await
    }

    /// Private in-memory store, gone once the handle is dropped.
    pub async fn open_in_memory() -> ConvertResult<Self> {
        let opts = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        Self::connect_with(opts).await
    }

    async fn connect_with(opts: SqliteConnectOptions) -> ConvertResult<Self> {
        let mut conn = opts.connect().await?;
        MIGRATOR.run(&mut conn).await?;
        Ok(Self { conn })
    }

    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }

    /// Flush and close the connection.
    pub async fn close(self) -> ConvertResult<()> {
        self.conn.close().await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/store_test.rs"]
mod tests;
