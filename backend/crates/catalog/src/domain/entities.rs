//! Domain Entities

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A catalog product.
///
/// Rows are never physically removed: `is_deleted` plus the
/// `deleted_at`/`deleted_by` stamps are the only removal mechanism.
/// `row_version` is the optimistic-concurrency token, bumped on every
/// write; it never leaves the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Generated, immutable id
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub update_by: Option<String>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<String>,
    pub row_version: i32,
}
