//! Product CRUD handlers.
//!
//! Bodies are taken as raw bytes so the controller can classify decoding
//! failures itself instead of relying on axum's `Json` rejections.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use restclean_core::api::ApiMessage;
use restclean_core::product::Product;

use crate::{controller::Listing, error::ApiError, state::AppState};

/// List products (GET /product).
pub async fn list_products(State(state): State<AppState>) -> Result<Response, ApiError> {
    let response = match state.controller.list().await? {
        Listing::Products(products) => Json(products).into_response(),
        Listing::Empty(message) => Json(message).into_response(),
    };
    Ok(response)
}

/// Get a product by ID (GET /product/{id}).
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product = state.controller.get_by_id(&id).await?;
    Ok(Json(product))
}

/// Create a product (POST /product).
pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = state.controller.add(&body).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product (PUT /product/{id}).
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Product>, ApiError> {
    let product = state.controller.update(&id, &body).await?;
    Ok(Json(product))
}

/// Delete a product (DELETE /product/{id}).
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiMessage>, ApiError> {
    let message = state.controller.delete(&id).await?;
    Ok(Json(message))
}
