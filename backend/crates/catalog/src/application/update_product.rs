//! Update Product Use Case

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::repository::ProductRepository;
use crate::domain::value_objects::ProductDraft;
use crate::error::{CatalogError, CatalogResult};

/// Update input
pub struct UpdateProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    /// Attribution for `update_by` (authenticated user or "system")
    pub updated_by: String,
}

/// Full overwrite of a visible product's name, description and price.
///
/// The write is compare-and-swap on the row version read just before it.
/// A CAS miss means another writer got in between: if the row is still
/// visible that is a genuine concurrent modification, otherwise the row
/// was deleted under us and we report not-found.
pub struct UpdateProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: i32, input: UpdateProductInput) -> CatalogResult<()> {
        let draft = ProductDraft::new(input.name, input.description, input.price)?;

        let existing = self
            .repo
            .find_visible(id)
            .await?
            .ok_or(CatalogError::NotFound)?;

        let swapped = self
            .repo
            .update_versioned(id, &draft, &input.updated_by, existing.row_version)
            .await?;
        if !swapped {
            return if self.repo.exists_visible(id).await? {
                Err(CatalogError::Conflict)
            } else {
                Err(CatalogError::NotFound)
            };
        }

        tracing::info!(
            product_id = id,
            updated_by = %input.updated_by,
            "Product updated"
        );
        Ok(())
    }
}
