//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use rust_decimal::Decimal;

use crate::domain::entities::Product;
use crate::domain::value_objects::ProductDraft;
use crate::error::CatalogResult;

/// Optional narrowing applied to the product list.
///
/// `name` is a case-insensitive substring match; the price bounds are
/// inclusive.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

/// Product repository trait.
///
/// All operations see only visible (non-soft-deleted) rows. The
/// versioned writes are compare-and-swap on `row_version`: they return
/// `false` when no visible row with the expected version matched, and
/// the caller decides between not-found and conflict.
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// List visible products matching the filter, in id order
    async fn list(&self, filter: &ProductFilter) -> CatalogResult<Vec<Product>>;

    /// Find a visible product by id
    async fn find_visible(&self, id: i32) -> CatalogResult<Option<Product>>;

    /// Whether a visible product with this id exists
    async fn exists_visible(&self, id: i32) -> CatalogResult<bool>;

    /// Insert a new product, stamping `created_at`/`created_by`
    async fn insert(&self, draft: &ProductDraft, created_by: &str) -> CatalogResult<Product>;

    /// Overwrite name/description/price and stamp `updated_at`/`update_by`
    async fn update_versioned(
        &self,
        id: i32,
        draft: &ProductDraft,
        updated_by: &str,
        expected_version: i32,
    ) -> CatalogResult<bool>;

    /// Flip `is_deleted` and stamp `deleted_at`/`deleted_by`
    async fn soft_delete_versioned(
        &self,
        id: i32,
        deleted_by: &str,
        expected_version: i32,
    ) -> CatalogResult<bool>;
}
