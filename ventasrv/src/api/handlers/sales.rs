//! HTTP handlers for sales CRUD and date filtering.

use crate::api::models::{
    DataResponse,
    sales::{
        ChangesResponse, RangeQuery, SaleCreate, SaleCreatedResponse, SaleQuantityUpdate,
        SaleResponse,
    },
};
use crate::db::handlers::{SaleFilter, Sales};
use crate::db::models::sales::SaleCreateDBRequest;
use crate::errors::{Error, Result};
use crate::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

#[utoipa::path(
    get,
    path = "/api/ventas",
    tag = "ventas",
    summary = "List sales",
    responses(
        (status = 200, description = "All sales ordered by date then product", body = DataResponse<SaleResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_sales(State(state): State<AppState>) -> Result<Json<DataResponse<SaleResponse>>> {
    let sales = query_sales(&state, &SaleFilter::All).await?;
    Ok(Json(DataResponse::new(sales)))
}

#[utoipa::path(
    get,
    path = "/api/ventas/fecha/{fecha}",
    tag = "ventas",
    summary = "List sales on an exact date",
    params(("fecha" = String, Path, description = "Calendar date, matched exactly")),
    responses(
        (status = 200, description = "Sales on that date ordered by product", body = DataResponse<SaleResponse>),
        (status = 404, description = "No sales on that date"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all, fields(fecha = %fecha))]
pub async fn sales_by_date(
    State(state): State<AppState>,
    Path(fecha): Path<String>,
) -> Result<Json<DataResponse<SaleResponse>>> {
    let sales = query_sales(&state, &SaleFilter::ExactDate(fecha)).await?;

    // Unlike the unfiltered listing, an empty result here is a miss, not an
    // empty success.
    if sales.is_empty() {
        return Err(Error::not_found("No se encontraron ventas para esa fecha."));
    }
    Ok(Json(DataResponse::new(sales)))
}

#[utoipa::path(
    get,
    path = "/api/ventas/rango_fecha",
    tag = "ventas",
    summary = "List sales in an inclusive date range",
    params(RangeQuery),
    responses(
        (status = 200, description = "Sales between the bounds ordered by date then product", body = DataResponse<SaleResponse>),
        (status = 400, description = "Missing desde or hasta"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn sales_by_range(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<DataResponse<SaleResponse>>> {
    // An empty bound counts as missing, like an absent parameter.
    let (Some(from), Some(to)) = (
        query.desde.filter(|s| !s.is_empty()),
        query.hasta.filter(|s| !s.is_empty()),
    ) else {
        return Err(Error::bad_request("Se requieren fechas \"desde\" y \"hasta\"."));
    };

    let sales = query_sales(&state, &SaleFilter::DateRange { from, to }).await?;
    Ok(Json(DataResponse::new(sales)))
}

#[utoipa::path(
    post,
    path = "/api/ventas",
    tag = "ventas",
    summary = "Create a sale",
    request_body = SaleCreate,
    responses(
        (status = 201, description = "Sale created", body = SaleCreatedResponse),
        (status = 400, description = "Missing required field or unknown category"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_sale(
    State(state): State<AppState>,
    Json(body): Json<SaleCreate>,
) -> Result<(StatusCode, Json<SaleCreatedResponse>)> {
    let (Some(fecha), Some(id_alimento), Some(cantidad)) = (
        body.fecha.filter(|s| !s.is_empty()),
        body.id_alimento,
        body.cantidad,
    ) else {
        return Err(Error::bad_request("Faltan datos."));
    };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Sales::new(&mut conn);

    let sale = repo
        .create(&SaleCreateDBRequest {
            date: fecha,
            category_id: id_alimento,
            quantity: cantidad,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(SaleCreatedResponse::new(sale))))
}

#[utoipa::path(
    put,
    path = "/api/ventas/{id}",
    tag = "ventas",
    summary = "Update a sale's quantity",
    params(("id" = i64, Path, description = "Sale ID")),
    request_body = SaleQuantityUpdate,
    responses(
        (status = 200, description = "Sale updated", body = ChangesResponse),
        (status = 400, description = "Missing cantidad"),
        (status = 404, description = "Sale not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all, fields(id))]
pub async fn update_sale(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<SaleQuantityUpdate>,
) -> Result<Json<ChangesResponse>> {
    let Some(cantidad) = body.cantidad else {
        return Err(Error::bad_request("Se requiere la nueva cantidad."));
    };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Sales::new(&mut conn);

    let cambios = repo.update_quantity(id, cantidad).await?;
    if cambios == 0 {
        return Err(Error::not_found(format!("Venta con ID {id} no encontrada.")));
    }

    Ok(Json(ChangesResponse {
        mensaje: "Venta actualizada".to_string(),
        cambios,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/ventas/{id}",
    tag = "ventas",
    summary = "Delete a sale",
    params(("id" = i64, Path, description = "Sale ID")),
    responses(
        (status = 200, description = "Sale deleted", body = ChangesResponse),
        (status = 404, description = "Sale not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all, fields(id))]
pub async fn delete_sale(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ChangesResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Sales::new(&mut conn);

    let cambios = repo.delete(id).await?;
    if cambios == 0 {
        return Err(Error::not_found(format!("Venta con ID {id} no encontrada.")));
    }

    Ok(Json(ChangesResponse {
        mensaje: "Venta eliminada".to_string(),
        cambios,
    }))
}

/// Run a sales listing through a short-lived pool connection.
async fn query_sales(state: &AppState, filter: &SaleFilter) -> Result<Vec<SaleResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Sales::new(&mut conn);

    let sales = repo.list(filter).await?;
    Ok(sales.into_iter().map(SaleResponse::from).collect())
}
