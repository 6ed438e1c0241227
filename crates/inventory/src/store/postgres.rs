//! Postgres-backed inventory store.

use async_trait::async_trait;
use sqlx::PgPool;

use merx_core::{PageParams, ServiceResult};

use super::InventoryStore;
use crate::model::{AdjustmentRecord, DEFAULT_MIN_STOCK, HistoryEntry, InventoryRow};

pub struct PgInventoryStore {
    pool: PgPool,
}

impl PgInventoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Create the tables on boot. Idempotent.
pub async fn ensure_schema(pool: &PgPool) -> ServiceResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS inventories (
            id          BIGSERIAL PRIMARY KEY,
            product_id  BIGINT NOT NULL UNIQUE,
            quantity    INTEGER NOT NULL DEFAULT 0,
            min_stock   INTEGER NOT NULL DEFAULT 10
        )
        "#,
    )
    .execute(pool)
    .await?;
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS inventory_histories (
            id                BIGSERIAL PRIMARY KEY,
            product_id        BIGINT NOT NULL,
            quantity_changed  INTEGER NOT NULL,
            kind              TEXT NOT NULL,
            reason            TEXT,
            reference_id      TEXT,
            created_at        TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

#[async_trait]
impl InventoryStore for PgInventoryStore {
    async fn apply_adjustment(&self, record: AdjustmentRecord) -> ServiceResult<InventoryRow> {
        // Row upsert + history append must land together.
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, InventoryRow>(
            r#"
            INSERT INTO inventories (product_id, quantity, min_stock)
            VALUES ($1, $2, $3)
            ON CONFLICT (product_id)
            DO UPDATE SET quantity = inventories.quantity + EXCLUDED.quantity
            RETURNING *
            "#,
        )
        .bind(record.product_id)
        .bind(record.quantity_changed)
        .bind(DEFAULT_MIN_STOCK)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO inventory_histories
                (product_id, quantity_changed, kind, reason, reference_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(record.product_id)
        .bind(record.quantity_changed)
        .bind(record.kind.as_str())
        .bind(&record.reason)
        .bind(&record.reference_id)
        .bind(record.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }

    async fn find_by_product(&self, product_id: i64) -> ServiceResult<Option<InventoryRow>> {
        let row = sqlx::query_as::<_, InventoryRow>(
            "SELECT * FROM inventories WHERE product_id = $1",
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list(&self, page: PageParams) -> ServiceResult<(Vec<InventoryRow>, u64)> {
        let content = sqlx::query_as::<_, InventoryRow>(
            "SELECT * FROM inventories ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventories")
            .fetch_one(&self.pool)
            .await?;

        Ok((content, total as u64))
    }

    async fn history(
        &self,
        product_id: Option<i64>,
        page: PageParams,
    ) -> ServiceResult<(Vec<HistoryEntry>, u64)> {
        let content = sqlx::query_as::<_, HistoryEntry>(
            r#"
            SELECT * FROM inventory_histories
            WHERE ($1::BIGINT IS NULL OR product_id = $1)
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(product_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM inventory_histories WHERE ($1::BIGINT IS NULL OR product_id = $1)",
        )
        .bind(product_id)
        .fetch_one(&self.pool)
        .await?;

        Ok((content, total as u64))
    }
}
