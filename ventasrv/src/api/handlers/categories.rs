//! HTTP handlers for the category lookup.

use crate::api::models::{DataResponse, categories::CategoryResponse};
use crate::db::handlers::Categories;
use crate::errors::{Error, Result};
use crate::AppState;
use axum::{Json, extract::State};

#[utoipa::path(
    get,
    path = "/api/alimentos",
    tag = "alimentos",
    summary = "List categories",
    responses(
        (status = 200, description = "All categories ordered by name", body = DataResponse<CategoryResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<DataResponse<CategoryResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Categories::new(&mut conn);

    let categories = repo.list().await?;
    Ok(Json(DataResponse::new(
        categories.into_iter().map(CategoryResponse::from).collect(),
    )))
}
