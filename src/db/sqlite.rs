use crate::db::models::{Gadget, Widget};
use crate::db::repository::WarehouseRepository;
use crate::error::WarehouseError;
use async_trait::async_trait;
use sqlx::SqlitePool;

/// `WarehouseRepository` backed by a SQLite connection pool.
#[derive(Clone)]
pub struct SqliteWarehouseRepository {
    pool: SqlitePool,
}

impl SqliteWarehouseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl WarehouseRepository for SqliteWarehouseRepository {
    async fn get_all_widgets(&self) -> Result<Vec<Widget>, WarehouseError> {
        let rows = sqlx::query_as::<_, Widget>(
            r#"
        SELECT id, description, price, gears, sprockets
        FROM widgets
        ORDER BY id
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get_widget(&self, id: i64) -> Result<Option<Widget>, WarehouseError> {
        let row = sqlx::query_as::<_, Widget>(
            r#"
        SELECT id, description, price, gears, sprockets
        FROM widgets
        WHERE id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn insert_widget(&self, widget: &Widget) -> Result<u64, WarehouseError> {
        let res = sqlx::query(
            r#"
        INSERT INTO widgets (id, description, price, gears, sprockets)
        VALUES (?, ?, ?, ?, ?)
        "#,
        )
        .bind(widget.id)
        .bind(&widget.description)
        .bind(widget.price)
        .bind(widget.gears)
        .bind(widget.sprockets)
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected())
    }

    async fn update_widget(&self, widget: &Widget) -> Result<u64, WarehouseError> {
        let res = sqlx::query(
            r#"
        UPDATE widgets
        SET description = ?, price = ?, gears = ?, sprockets = ?
        WHERE id = ?
        "#,
        )
        .bind(&widget.description)
        .bind(widget.price)
        .bind(widget.gears)
        .bind(widget.sprockets)
        .bind(widget.id)
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected())
    }

    async fn delete_widget(&self, id: i64) -> Result<u64, WarehouseError> {
        let res = sqlx::query("DELETE FROM widgets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(res.rows_affected())
    }

    async fn get_all_gadgets(&self) -> Result<Vec<Gadget>, WarehouseError> {
        let rows = sqlx::query_as::<_, Gadget>(
            r#"
        SELECT id, description, price, cylinders
        FROM gadgets
        ORDER BY id
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get_gadget(&self, id: i64) -> Result<Option<Gadget>, WarehouseError> {
        let row = sqlx::query_as::<_, Gadget>(
            r#"
        SELECT id, description, price, cylinders
        FROM gadgets
        WHERE id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn insert_gadget(&self, gadget: &Gadget) -> Result<u64, WarehouseError> {
        let res = sqlx::query(
            r#"
        INSERT INTO gadgets (id, description, price, cylinders)
        VALUES (?, ?, ?, ?)
        "#,
        )
        .bind(gadget.id)
        .bind(&gadget.description)
        .bind(gadget.price)
        .bind(gadget.cylinders)
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected())
    }

    async fn update_gadget(&self, gadget: &Gadget) -> Result<u64, WarehouseError> {
        let res = sqlx::query(
            r#"
        UPDATE gadgets
        SET description = ?, price = ?, cylinders = ?
        WHERE id = ?
        "#,
        )
        .bind(&gadget.description)
        .bind(gadget.price)
        .bind(gadget.cylinders)
        .bind(gadget.id)
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected())
    }

    async fn delete_gadget(&self, id: i64) -> Result<u64, WarehouseError> {
        let res = sqlx::query("DELETE FROM gadgets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(res.rows_affected())
    }
}
