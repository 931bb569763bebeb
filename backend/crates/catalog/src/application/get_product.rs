//! Get Product Use Case

use std::sync::Arc;

use crate::domain::entities::Product;
use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};

/// Fetch a single visible product. A soft-deleted product is reported as
/// not-found, indistinguishable from one that never existed.
pub struct GetProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> GetProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: i32) -> CatalogResult<Product> {
        self.repo
            .find_visible(id)
            .await?
            .ok_or(CatalogError::NotFound)
    }
}
