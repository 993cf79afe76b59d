use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

mod items;

pub use items::ItemRepository;

const CREATE_STATIONERIES: &str = r#"
    CREATE TABLE IF NOT EXISTS stationeries (
        id TEXT PRIMARY KEY,
        category TEXT,
        name TEXT,
        location TEXT,
        in_use INTEGER,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Open a pool on the SQLite file named by `database_url`, creating the file if needed.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    connect_with(options).await
}

pub async fn connect_with(options: SqliteConnectOptions) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Create the `stationeries` table if absent. Safe to run on every start.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_STATIONERIES).execute(pool).await?;
    info!("Table `stationeries` is ready.");
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use tempfile::TempDir;

    /// Fresh store in a temp directory. Keep the `TempDir` alive for the pool's lifetime.
    pub async fn temp_pool() -> (TempDir, SqlitePool) {
        let dir = tempfile::tempdir().unwrap();
        let pool = open_at(&dir).await;
        (dir, pool)
    }

    pub async fn open_at(dir: &TempDir) -> SqlitePool {
        let options = SqliteConnectOptions::new()
            .filename(dir.path().join("stockery.db"))
            .create_if_missing(true);
        let pool = connect_with(options).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        pool
    }
}
