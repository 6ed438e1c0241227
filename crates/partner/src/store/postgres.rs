//! Postgres-backed partner store.

use async_trait::async_trait;
use sqlx::PgPool;

use merx_core::{PageParams, ServiceResult};

use super::{PartnerFilter, PartnerStore};
use crate::model::{Partner, PartnerDraft};

pub struct PgPartnerStore {
    pool: PgPool,
}

impl PgPartnerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Create the table on boot. Idempotent.
pub async fn ensure_schema(pool: &PgPool) -> ServiceResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS partners (
            id              BIGSERIAL PRIMARY KEY,
            name            TEXT NOT NULL,
            kind            TEXT NOT NULL,
            contact_person  TEXT,
            email           TEXT,
            phone           TEXT,
            address         TEXT,
            status          TEXT NOT NULL,
            created_at      TIMESTAMPTZ NOT NULL,
            updated_at      TIMESTAMPTZ NOT NULL,
            deleted         BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

#[async_trait]
impl PartnerStore for PgPartnerStore {
    async fn insert(&self, draft: PartnerDraft) -> ServiceResult<Partner> {
        let partner = sqlx::query_as::<_, Partner>(
            r#"
            INSERT INTO partners
                (name, kind, contact_person, email, phone, address, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.kind)
        .bind(&draft.contact_person)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(&draft.address)
        .bind(&draft.status)
        .bind(draft.created_at)
        .bind(draft.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(partner)
    }

    async fn find_active(&self, id: i64) -> ServiceResult<Option<Partner>> {
        let partner = sqlx::query_as::<_, Partner>(
            "SELECT * FROM partners WHERE id = $1 AND deleted = FALSE",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(partner)
    }

    async fn search(
        &self,
        filter: &PartnerFilter,
        page: PageParams,
    ) -> ServiceResult<(Vec<Partner>, u64)> {
        // Null binds bypass their filter, same shape for count and page.
        let content = sqlx::query_as::<_, Partner>(
            r#"
            SELECT * FROM partners
            WHERE deleted = FALSE
              AND ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
              AND ($2::TEXT IS NULL OR kind = $2)
            ORDER BY id DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(&filter.keyword)
        .bind(&filter.kind)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM partners
            WHERE deleted = FALSE
              AND ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
              AND ($2::TEXT IS NULL OR kind = $2)
            "#,
        )
        .bind(&filter.keyword)
        .bind(&filter.kind)
        .fetch_one(&self.pool)
        .await?;

        Ok((content, total as u64))
    }

    async fn update(&self, partner: Partner) -> ServiceResult<Partner> {
        let updated = sqlx::query_as::<_, Partner>(
            r#"
            UPDATE partners
            SET name = $2, kind = $3, contact_person = $4, email = $5,
                phone = $6, address = $7, status = $8, updated_at = $9
            WHERE id = $1 AND deleted = FALSE
            RETURNING *
            "#,
        )
        .bind(partner.id)
        .bind(&partner.name)
        .bind(&partner.kind)
        .bind(&partner.contact_person)
        .bind(&partner.email)
        .bind(&partner.phone)
        .bind(&partner.address)
        .bind(&partner.status)
        .bind(partner.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn soft_delete(&self, id: i64) -> ServiceResult<bool> {
        let result = sqlx::query("UPDATE partners SET deleted = TRUE WHERE id = $1 AND deleted = FALSE")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
