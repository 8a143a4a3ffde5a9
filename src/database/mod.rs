//! Database module
//!
//! This module provides all persistence functionality including:
//! - The lazily-connected process-wide pool (connector)
//! - Schema and migrations
//! - Model definitions
//! - Repository layer for CRUD operations

pub mod models;
pub mod repository;
pub mod schema;

pub use models::*;
pub use repository::Repository;
pub use schema::initialize_database;

use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::OnceCell;

/// Build connection options shared by migration and application connections.
fn connect_options(db_path: &Path) -> std::result::Result<SqliteConnectOptions, sqlx::Error> {
    SqliteConnectOptions::from_str(&format!("sqlite://{}?mode=rwc", db_path.display())).map(
        |opts| {
            opts.create_if_missing(true)
                .busy_timeout(Duration::from_secs(5))
                .journal_mode(SqliteJournalMode::Wal)
        },
    )
}

/// Create a database connection pool and bring the schema up to date.
///
/// Migrations run on a dedicated single-connection pool that is closed
/// before the application pool is created. This prevents schema-caching
/// issues where pooled connections opened before ALTER TABLE ADD COLUMN
/// still see the old column count.
pub async fn create_pool(db_path: &Path) -> Result<SqlitePool> {
    tracing::info!("Creating database connection pool at: {:?}", db_path);

    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let migration_pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_options(db_path)?)
        .await?;

    initialize_database(&migration_pool).await?;
    migration_pool.close().await;

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options(db_path)?)
        .await?;

    tracing::info!("Database pool created successfully");

    Ok(pool)
}

/// Process-wide lazily-established handle to the design store.
///
/// The first `get` establishes the pool; later calls return the cached
/// handle. Concurrent first callers all await the same in-flight
/// attempt, so exactly one pool is ever created. A failed attempt
/// propagates to its callers and leaves the cell empty, so the next
/// request makes a fresh attempt. There is no teardown; the connector
/// lives as long as the process.
pub struct Connector {
    database_path: PathBuf,
    pool: OnceCell<SqlitePool>,
}

impl Connector {
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            database_path,
            pool: OnceCell::new(),
        }
    }

    /// Return the shared pool, connecting on first use.
    pub async fn get(&self) -> Result<&SqlitePool> {
        self.pool
            .get_or_try_init(|| create_pool(&self.database_path))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn concurrent_first_callers_share_one_pool() {
        let temp_dir = TempDir::new().unwrap();
        let connector = Connector::new(temp_dir.path().join("test.db"));

        let (a, b) = tokio::join!(connector.get(), connector.get());

        assert!(std::ptr::eq(a.unwrap(), b.unwrap()));
    }

    #[tokio::test]
    async fn get_is_idempotent_across_calls() {
        let temp_dir = TempDir::new().unwrap();
        let connector = Connector::new(temp_dir.path().join("test.db"));

        let first = connector.get().await.unwrap() as *const SqlitePool;
        let second = connector.get().await.unwrap() as *const SqlitePool;

        assert_eq!(first, second);
    }
}
