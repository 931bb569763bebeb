//! HTTP Handlers

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use std::sync::Arc;

use kernel::principal::Principal;
use kernel::response::ApiResponse;

use crate::application::{
    CreateProductInput, CreateProductUseCase, DeleteProductUseCase, GetProductUseCase,
    ListProductsUseCase, UpdateProductInput, UpdateProductUseCase,
};
use crate::domain::repository::{ProductFilter, ProductRepository};
use crate::error::CatalogResult;
use crate::presentation::dto::{ListProductsQuery, ProductPayload, ProductResponse};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /api/products
pub async fn list_products<R>(
    State(state): State<CatalogAppState<R>>,
    Query(query): Query<ListProductsQuery>,
) -> CatalogResult<ApiResponse<Vec<ProductResponse>>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListProductsUseCase::new(state.repo.clone());

    let filter = ProductFilter {
        name: query.name,
        min_price: query.min_price,
        max_price: query.max_price,
    };

    let products = use_case.execute(filter).await?;
    let body: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

    Ok(ApiResponse::ok(body))
}

/// GET /api/products/{id}
pub async fn get_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<i32>,
) -> CatalogResult<ApiResponse<ProductResponse>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetProductUseCase::new(state.repo.clone());

    let product = use_case.execute(id).await?;

    Ok(ApiResponse::ok(ProductResponse::from(product)))
}

/// POST /api/products
pub async fn create_product<R>(
    State(state): State<CatalogAppState<R>>,
    principal: Option<Extension<Principal>>,
    Json(payload): Json<ProductPayload>,
) -> CatalogResult<impl IntoResponse>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateProductUseCase::new(state.repo.clone());

    let input = CreateProductInput {
        name: payload.name,
        description: payload.description,
        price: payload.price,
        created_by: Principal::attribution(principal.as_deref()),
    };

    let product = use_case.execute(input).await?;
    let location = format!("/api/products/{}", product.id);

    Ok((
        [(header::LOCATION, location)],
        ApiResponse::created(ProductResponse::from(product)),
    ))
}

/// PUT /api/products/{id}
pub async fn update_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<i32>,
    principal: Option<Extension<Principal>>,
    Json(payload): Json<ProductPayload>,
) -> CatalogResult<StatusCode>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateProductUseCase::new(state.repo.clone());

    let input = UpdateProductInput {
        name: payload.name,
        description: payload.description,
        price: payload.price,
        updated_by: Principal::attribution(principal.as_deref()),
    };

    use_case.execute(id, input).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/products/{id}
pub async fn delete_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<i32>,
    principal: Option<Extension<Principal>>,
) -> CatalogResult<StatusCode>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteProductUseCase::new(state.repo.clone());

    let deleted_by = Principal::attribution(principal.as_deref());
    use_case.execute(id, &deleted_by).await?;

    Ok(StatusCode::NO_CONTENT)
}
