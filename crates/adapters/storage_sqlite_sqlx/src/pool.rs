//! `SQLite` connection pool setup and schema bootstrap.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use daylog_domain::error::StorageError;

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:daylog.db` or `sqlite::memory:`).
    pub database_url: String,
    /// Path to the schema definition file applied at startup.
    pub schema_path: PathBuf,
}

impl Config {
    /// Build a [`Database`] from this configuration.
    ///
    /// Creates the connection pool, creates the database file if missing,
    /// and applies the schema definition.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::SchemaInit`] if the connection cannot be
    /// opened or the schema cannot be applied. Fatal to startup: there is
    /// no degraded mode without a working store.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(&self.database_url, &self.schema_path).await
    }
}

/// Holds the `SQLite` connection pool and provides access to it.
///
/// The pool lives for the whole process; it is never explicitly closed.
#[derive(Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database and apply the schema.
    async fn initialize(database_url: &str, schema_path: &Path) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|err| StorageError::SchemaInit(Box::new(err)))?
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|err| StorageError::SchemaInit(Box::new(err)))?;

        apply_schema(&pool, schema_path).await?;

        Ok(Self { pool })
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Read the schema definition file and apply it statement by statement.
///
/// Statements are separated by `;`; whitespace-only fragments (such as the
/// one after a trailing semicolon) are skipped. Safe to re-run against an
/// already-initialized store as long as the schema file sticks to
/// `CREATE ... IF NOT EXISTS`.
pub(crate) async fn apply_schema(pool: &SqlitePool, path: &Path) -> Result<(), StorageError> {
    let schema = std::fs::read_to_string(path).map_err(|err| {
        StorageError::SchemaInit(format!("could not read schema file {}: {err}", path.display()).into())
    })?;

    for statement in schema.split(';') {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|err| StorageError::SchemaInit(Box::new(err)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../../schema-init.sql");

    fn config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            schema_path: PathBuf::from(SCHEMA_PATH),
        }
    }

    #[tokio::test]
    async fn should_create_pool_and_entries_table_when_using_memory_db() {
        let db = config().build().await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|row| row.0.as_str()).collect();
        assert!(names.contains(&"entries"), "missing entries table");
    }

    #[tokio::test]
    async fn should_apply_schema_twice_without_error() {
        let db = config().build().await.unwrap();

        apply_schema(db.pool(), Path::new(SCHEMA_PATH)).await.unwrap();

        // table still usable after the second pass
        sqlx::query("INSERT INTO entries (id, date, type, note, value, data) VALUES ('a', 'b', 'c', '', 0.0, NULL)")
            .execute(db.pool())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn should_fail_startup_when_schema_file_is_missing() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            schema_path: PathBuf::from("no-such-schema.sql"),
        };
        let err = config.build().await.unwrap_err();
        assert!(matches!(err, StorageError::SchemaInit(_)));
    }

    #[tokio::test]
    async fn should_skip_whitespace_fragments_between_statements() {
        let path = std::env::temp_dir().join(format!("daylog-schema-{}.sql", std::process::id()));
        std::fs::write(
            &path,
            "CREATE TABLE IF NOT EXISTS scratch (x INTEGER);\n\n;  ;\n",
        )
        .unwrap();

        let db = Config {
            database_url: "sqlite::memory:".to_string(),
            schema_path: path.clone(),
        }
        .build()
        .await;

        std::fs::remove_file(&path).ok();
        db.unwrap();
    }
}
