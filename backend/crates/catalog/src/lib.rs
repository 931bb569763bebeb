//! Catalog (Product Management) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Product entity, validated value objects, repository trait
//! - `application/` - CRUD use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Soft delete
//! Products are never physically removed. Delete flips `is_deleted` and
//! stamps `deleted_at`/`deleted_by`; a soft-deleted row is invisible to
//! every read and write path, indistinguishable from a row that never
//! existed.
//!
//! ## Concurrency
//! Concurrent writers are resolved by an optimistic row-version check at
//! write time. A lost race where the row is no longer visible reads as
//! not-found; any other conflict propagates and is never swallowed.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgProductRepository;
pub use presentation::router::catalog_router;
