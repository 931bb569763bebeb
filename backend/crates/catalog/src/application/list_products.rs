//! List Products Use Case

use std::sync::Arc;

use crate::domain::entities::Product;
use crate::domain::repository::{ProductFilter, ProductRepository};
use crate::error::CatalogResult;

/// List use case: visible products, optionally narrowed by name substring
/// and inclusive price bounds. No pagination.
pub struct ListProductsUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> ListProductsUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, filter: ProductFilter) -> CatalogResult<Vec<Product>> {
        self.repo.list(&filter).await
    }
}
