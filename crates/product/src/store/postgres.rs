//! Postgres-backed product store.

use async_trait::async_trait;
use sqlx::PgPool;

use merx_core::{PageParams, ServiceResult};

use super::{ProductFilter, ProductStore};
use crate::model::{Product, ProductDraft};

pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Create the table on boot. Idempotent.
pub async fn ensure_schema(pool: &PgPool) -> ServiceResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id              BIGSERIAL PRIMARY KEY,
            name            TEXT NOT NULL,
            sku             TEXT NOT NULL,
            category        TEXT,
            price           NUMERIC(19, 2) NOT NULL,
            stock_quantity  INTEGER NOT NULL DEFAULT 0,
            status          TEXT NOT NULL,
            created_at      TIMESTAMPTZ NOT NULL,
            updated_at      TIMESTAMPTZ NOT NULL,
            deleted         BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
    )
    .execute(pool)
    .await?;
    // Uniqueness only among live rows, so a deleted product frees its SKU.
    sqlx::query(
        "CREATE UNIQUE INDEX IF NOT EXISTS products_sku_active
         ON products (sku) WHERE deleted = FALSE",
    )
    .execute(pool)
    .await?;
    Ok(())
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(&self, draft: ProductDraft) -> ServiceResult<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products
                (name, sku, category, price, stock_quantity, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.sku)
        .bind(&draft.category)
        .bind(draft.price)
        .bind(draft.stock_quantity)
        .bind(&draft.status)
        .bind(draft.created_at)
        .bind(draft.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(product)
    }

    async fn find_active(&self, id: i64) -> ServiceResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE id = $1 AND deleted = FALSE",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    async fn sku_exists(&self, sku: &str) -> ServiceResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM products WHERE sku = $1 AND deleted = FALSE)",
        )
        .bind(sku)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn search(
        &self,
        filter: &ProductFilter,
        page: PageParams,
    ) -> ServiceResult<(Vec<Product>, u64)> {
        // Null binds bypass their filter, same shape for count and page.
        let content = sqlx::query_as::<_, Product>(
            r#"
            SELECT * FROM products
            WHERE deleted = FALSE
              AND ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
              AND ($2::TEXT IS NULL OR category = $2)
              AND ($3::TEXT IS NULL OR status = $3)
            ORDER BY created_at DESC, id DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(&filter.keyword)
        .bind(&filter.category)
        .bind(&filter.status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM products
            WHERE deleted = FALSE
              AND ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
              AND ($2::TEXT IS NULL OR category = $2)
              AND ($3::TEXT IS NULL OR status = $3)
            "#,
        )
        .bind(&filter.keyword)
        .bind(&filter.category)
        .bind(&filter.status)
        .fetch_one(&self.pool)
        .await?;

        Ok((content, total as u64))
    }

    async fn update(&self, product: Product) -> ServiceResult<Product> {
        let updated = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = $2, category = $3, price = $4, stock_quantity = $5,
                status = $6, updated_at = $7
            WHERE id = $1 AND deleted = FALSE
            RETURNING *
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.price)
        .bind(product.stock_quantity)
        .bind(&product.status)
        .bind(product.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn soft_delete(&self, id: i64) -> ServiceResult<bool> {
        let result = sqlx::query("UPDATE products SET deleted = TRUE WHERE id = $1 AND deleted = FALSE")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
