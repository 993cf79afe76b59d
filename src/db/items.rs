use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Item, NewItem};

/// Sole point of contact with the `stationeries` table.
///
/// Items can only be listed and created; there is no update or delete path.
#[derive(Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Every row in the store's natural scan order (no ORDER BY).
    pub async fn list(&self) -> AppResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            "SELECT id, category, name, location, in_use, created_at, updated_at
             FROM stationeries",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Insert one row under a freshly generated id and return that id.
    ///
    /// Timestamps come from the column defaults.
    pub async fn create(&self, payload: &NewItem) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO stationeries (id, category, name, location, in_use)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&payload.category)
        .bind(&payload.name)
        .bind(&payload.location)
        .bind(i64::from(payload.in_use))
        .execute(&self.pool)
        .await
        .map_err(AppError::StoreWrite)?;

        Ok(id)
    }
}
