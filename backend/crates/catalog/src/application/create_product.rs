//! Create Product Use Case

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::entities::Product;
use crate::domain::repository::ProductRepository;
use crate::domain::value_objects::ProductDraft;
use crate::error::CatalogResult;

/// Create input
pub struct CreateProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    /// Attribution for `created_by` (authenticated user or "system")
    pub created_by: String,
}

/// Create use case
pub struct CreateProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> CreateProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateProductInput) -> CatalogResult<Product> {
        let draft = ProductDraft::new(input.name, input.description, input.price)?;

        let product = self.repo.insert(&draft, &input.created_by).await?;

        tracing::info!(
            product_id = product.id,
            created_by = %input.created_by,
            "Product created"
        );

        Ok(product)
    }
}
