//! 产品 JSON API 处理器

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use super::model::{Product, ProductPayload};
use crate::app::AppState;
use crate::core::{
    error::CoreError,
    extract::{ApiJson, ApiPath},
};

/// `/api/products` 路由
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.products.list().await?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Product>, CoreError> {
    let product = state.products.require(id).await?;
    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ProductPayload>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let new = payload.validated()?;
    let product = state.products.create(new).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// 先检查记录是否存在，再校验请求体
pub async fn update_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<ProductPayload>,
) -> Result<Json<Product>, CoreError> {
    let existing = state.products.require(id).await?;
    let update = payload.validated()?;
    let product = state.products.update(existing, update).await?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, CoreError> {
    state.products.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
