//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::entities::Product;
use crate::domain::repository::{ProductFilter, ProductRepository};
use crate::domain::value_objects::ProductDraft;
use crate::error::CatalogResult;

const PRODUCT_COLUMNS: &str = r#"
    id,
    name,
    description,
    price,
    is_deleted,
    created_at,
    created_by,
    updated_at,
    update_by,
    deleted_at,
    deleted_by,
    row_version
"#;

/// Escape `\`, `%` and `_` so user-supplied text matches literally when
/// wrapped in an ILIKE pattern.
pub(crate) fn escape_like(needle: &str) -> String {
    needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// PostgreSQL-backed product repository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for PgProductRepository {
    async fn list(&self, filter: &ProductFilter) -> CatalogResult<Vec<Product>> {
        // NULL binds disable the corresponding predicate
        let name_pattern = filter
            .name
            .as_deref()
            .map(|n| format!("%{}%", escape_like(n)));

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE is_deleted = FALSE
              AND ($1::text IS NULL OR name ILIKE $1)
              AND ($2::numeric IS NULL OR price >= $2)
              AND ($3::numeric IS NULL OR price <= $3)
            ORDER BY id
            "#
        ))
        .bind(name_pattern)
        .bind(filter.min_price)
        .bind(filter.max_price)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn find_visible(&self, id: i32) -> CatalogResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE id = $1 AND is_deleted = FALSE
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn exists_visible(&self, id: i32) -> CatalogResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM products WHERE id = $1 AND is_deleted = FALSE
            )
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn insert(&self, draft: &ProductDraft, created_by: &str) -> CatalogResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            INSERT INTO products (name, description, price, is_deleted, created_at, created_by, row_version)
            VALUES ($1, $2, $3, FALSE, NOW(), $4, 0)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(draft.name.as_str())
        .bind(draft.description.as_deref())
        .bind(draft.price.value())
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_product())
    }

    async fn update_versioned(
        &self,
        id: i32,
        draft: &ProductDraft,
        updated_by: &str,
        expected_version: i32,
    ) -> CatalogResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2,
                description = $3,
                price = $4,
                updated_at = NOW(),
                update_by = $5,
                row_version = row_version + 1
            WHERE id = $1 AND is_deleted = FALSE AND row_version = $6
            "#,
        )
        .bind(id)
        .bind(draft.name.as_str())
        .bind(draft.description.as_deref())
        .bind(draft.price.value())
        .bind(updated_by)
        .bind(expected_version)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn soft_delete_versioned(
        &self,
        id: i32,
        deleted_by: &str,
        expected_version: i32,
    ) -> CatalogResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET is_deleted = TRUE,
                deleted_at = NOW(),
                deleted_by = $2,
                row_version = row_version + 1
            WHERE id = $1 AND is_deleted = FALSE AND row_version = $3
            "#,
        )
        .bind(id)
        .bind(deleted_by)
        .bind(expected_version)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    description: Option<String>,
    price: Decimal,
    is_deleted: bool,
    created_at: DateTime<Utc>,
    created_by: Option<String>,
    updated_at: Option<DateTime<Utc>>,
    update_by: Option<String>,
    deleted_at: Option<DateTime<Utc>>,
    deleted_by: Option<String>,
    row_version: i32,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            is_deleted: self.is_deleted,
            created_at: self.created_at,
            created_by: self.created_by,
            updated_at: self.updated_at,
            update_by: self.update_by,
            deleted_at: self.deleted_at,
            deleted_by: self.deleted_by,
            row_version: self.row_version,
        }
    }
}
