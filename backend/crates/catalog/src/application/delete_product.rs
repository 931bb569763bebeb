//! Delete Product Use Case

use std::sync::Arc;

use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};

/// Soft delete: the row stays in storage with `is_deleted` set and the
/// deletion stamped, but disappears from every read path.
///
/// Same compare-and-swap discipline as update: a CAS miss against a
/// still-visible row is a concurrent modification, against a vanished
/// row it is not-found.
pub struct DeleteProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: i32, deleted_by: &str) -> CatalogResult<()> {
        let existing = self
            .repo
            .find_visible(id)
            .await?
            .ok_or(CatalogError::NotFound)?;

        let swapped = self
            .repo
            .soft_delete_versioned(id, deleted_by, existing.row_version)
            .await?;
        if !swapped {
            return if self.repo.exists_visible(id).await? {
                Err(CatalogError::Conflict)
            } else {
                Err(CatalogError::NotFound)
            };
        }

        tracing::info!(product_id = id, deleted_by = %deleted_by, "Product soft-deleted");
        Ok(())
    }
}
