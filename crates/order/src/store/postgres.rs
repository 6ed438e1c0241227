//! Postgres-backed order store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use merx_core::{PageParams, ServiceResult};

use super::OrderStore;
use crate::model::{ItemDraft, Order, OrderDraft, OrderItem};

pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Create both tables on boot. Idempotent.
pub async fn ensure_schema(pool: &PgPool) -> ServiceResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS orders (
            id               BIGSERIAL PRIMARY KEY,
            order_number     TEXT NOT NULL,
            partner_id       BIGINT NOT NULL,
            status           TEXT NOT NULL,
            total_amount     NUMERIC(19, 2) NOT NULL,
            shipping_address TEXT,
            created_at       TIMESTAMPTZ NOT NULL,
            updated_at       TIMESTAMPTZ NOT NULL,
            deleted          BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
    )
    .execute(pool)
    .await?;
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS order_items (
            id         BIGSERIAL PRIMARY KEY,
            order_id   BIGINT NOT NULL REFERENCES orders (id),
            product_id BIGINT NOT NULL,
            quantity   INTEGER NOT NULL,
            unit_price NUMERIC(19, 2) NOT NULL,
            sub_total  NUMERIC(19, 2) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn create(
        &self,
        draft: OrderDraft,
        items: Vec<ItemDraft>,
    ) -> ServiceResult<(Order, Vec<OrderItem>)> {
        // Header and lines commit together or not at all.
        let mut tx = self.pool.begin().await?;

        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders
                (order_number, partner_id, status, total_amount, shipping_address,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&draft.order_number)
        .bind(draft.partner_id)
        .bind(&draft.status)
        .bind(draft.total_amount)
        .bind(&draft.shipping_address)
        .bind(draft.now)
        .bind(draft.now)
        .fetch_one(&mut *tx)
        .await?;

        let mut rows = Vec::with_capacity(items.len());
        for item in items {
            let row = sqlx::query_as::<_, OrderItem>(
                r#"
                INSERT INTO order_items (order_id, product_id, quantity, unit_price, sub_total)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
                "#,
            )
            .bind(order.id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.unit_price)
            .bind(item.sub_total)
            .fetch_one(&mut *tx)
            .await?;
            rows.push(row);
        }

        tx.commit().await?;
        Ok((order, rows))
    }

    async fn find_active(&self, id: i64) -> ServiceResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            "SELECT * FROM orders WHERE id = $1 AND deleted = FALSE",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(order)
    }

    async fn items_for(&self, order_id: i64) -> ServiceResult<Vec<OrderItem>> {
        let items = sqlx::query_as::<_, OrderItem>(
            "SELECT * FROM order_items WHERE order_id = $1 ORDER BY id",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn search(
        &self,
        keyword: Option<&str>,
        page: PageParams,
    ) -> ServiceResult<(Vec<Order>, u64)> {
        let content = sqlx::query_as::<_, Order>(
            r#"
            SELECT * FROM orders
            WHERE deleted = FALSE
              AND ($1::TEXT IS NULL OR order_number ILIKE '%' || $1 || '%')
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(keyword)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM orders
            WHERE deleted = FALSE
              AND ($1::TEXT IS NULL OR order_number ILIKE '%' || $1 || '%')
            "#,
        )
        .bind(keyword)
        .fetch_one(&self.pool)
        .await?;

        Ok((content, total as u64))
    }

    async fn update_status(
        &self,
        id: i64,
        status: &str,
        now: DateTime<Utc>,
    ) -> ServiceResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET status = $2, updated_at = $3
            WHERE id = $1 AND deleted = FALSE
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;
        Ok(order)
    }
}
