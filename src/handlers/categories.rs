use axum::{extract::State, response::Json};
use common::CategoryDto;
use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::extractors::{ApiPath, ValidatedJson};
use crate::schemas::{AppState, MessageResponse};
use crate::services::CategoryService;
use crate::validation::CategoryPayload;

/// Get all categories, ordered by name
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of all categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "categories"
)]
#[instrument(skip(state))]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryDto>>, ApiError> {
    debug!("Fetching all categories");
    let categories = CategoryService::new(&state.db).list().await?;
    Ok(Json(categories))
}

/// Get a single category by ID
#[utoipa::path(
    get,
    path = "/api/categories/{category_id}",
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "categories"
)]
#[instrument(skip(state))]
pub async fn get_category(
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<i32>,
) -> Result<Json<CategoryDto>, ApiError> {
    let category = CategoryService::new(&state.db).get(category_id).await?;
    Ok(Json(category))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CategoryPayload,
    responses(
        (status = 200, description = "Category created", body = CategoryDto),
        (status = 400, description = "Invalid payload or duplicate name", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "categories"
)]
#[instrument(skip(state))]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CategoryPayload>,
) -> Result<Json<CategoryDto>, ApiError> {
    debug!("Creating category with name: {}", payload.name);
    let category = CategoryService::new(&state.db).create(payload).await?;
    Ok(Json(category))
}

/// Replace an existing category
#[utoipa::path(
    put,
    path = "/api/categories/{category_id}",
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    request_body = CategoryPayload,
    responses(
        (status = 200, description = "Category updated", body = CategoryDto),
        (status = 400, description = "Invalid payload or duplicate name", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "categories"
)]
#[instrument(skip(state))]
pub async fn update_category(
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<i32>,
    ValidatedJson(payload): ValidatedJson<CategoryPayload>,
) -> Result<Json<CategoryDto>, ApiError> {
    let category = CategoryService::new(&state.db)
        .update(category_id, payload)
        .await?;
    Ok(Json(category))
}

/// Delete a category that has no transactions
#[utoipa::path(
    delete,
    path = "/api/categories/{category_id}",
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
        (status = 400, description = "Category still has transactions", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "categories"
)]
#[instrument(skip(state))]
pub async fn delete_category(
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    CategoryService::new(&state.db).delete(category_id).await?;
    Ok(Json(MessageResponse::new("Category deleted successfully")))
}
