// ABOUTME: Database connection management and schema bootstrap
// ABOUTME: Opens the SQLite pool, creates tables if needed, and seeds the default list

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use chrono::Utc;
use listkeep_core::{DEFAULT_LIST_ID, DEFAULT_LIST_NAME};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::{SqliteStore, StorageError, StorageResult};

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS lists (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        text TEXT NOT NULL,
        listId INTEGER DEFAULT 1 REFERENCES lists(id) ON DELETE SET NULL,
        isHidden INTEGER NOT NULL DEFAULT 0,
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_items_list_id ON items(listId)",
];

/// Owner of the connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if missing) the database file at `path` and bootstrap the schema
    pub async fn init_with_path(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(StorageError::Io)?;
            }
        }

        debug!("Connecting to database: {}", path.display());

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await
            .map_err(StorageError::Sqlx)?;

        info!("Database connection established");

        let database = Self { pool };
        database.bootstrap().await?;
        Ok(database)
    }

    /// Private in-memory database; lives as long as its single pooled connection
    pub async fn init_in_memory() -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(StorageError::Sqlx)?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(StorageError::Sqlx)?;

        let database = Self { pool };
        database.bootstrap().await?;
        Ok(database)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Store handle sharing this database's pool
    pub fn store(&self) -> SqliteStore {
        SqliteStore::new(self.pool.clone())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection closed");
    }

    async fn bootstrap(&self) -> StorageResult<()> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(StorageError::Sqlx)?;
        }

        let now = Utc::now();
        let seeded = sqlx::query(
            "INSERT OR IGNORE INTO lists (id, name, createdAt, updatedAt) VALUES (?, ?, ?, ?)",
        )
        .bind(DEFAULT_LIST_ID)
        .bind(DEFAULT_LIST_NAME)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?
        .rows_affected();

        if seeded > 0 {
            info!("Seeded default list (id {})", DEFAULT_LIST_ID);
        }

        debug!("Schema bootstrap completed");
        Ok(())
    }
}
