//! OpenAPI documentation for the sales API, served at `/docs`.

use utoipa::OpenApi;

use crate::api::models::{
    DataResponse,
    categories::CategoryResponse,
    sales::{
        ChangesResponse, RangeQuery, SaleCreate, SaleCreatedResponse, SaleQuantityUpdate,
        SaleResponse,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ventasrv",
        description = "Supermarket sales records API: a CSV-seeded SQLite store with CRUD endpoints."
    ),
    paths(
        crate::api::handlers::categories::list_categories,
        crate::api::handlers::sales::list_sales,
        crate::api::handlers::sales::sales_by_date,
        crate::api::handlers::sales::sales_by_range,
        crate::api::handlers::sales::create_sale,
        crate::api::handlers::sales::update_sale,
        crate::api::handlers::sales::delete_sale,
    ),
    components(schemas(
        DataResponse<CategoryResponse>,
        DataResponse<SaleResponse>,
        CategoryResponse,
        SaleResponse,
        RangeQuery,
        SaleCreate,
        SaleCreatedResponse,
        SaleQuantityUpdate,
        ChangesResponse,
    )),
    tags(
        (name = "alimentos", description = "Product category lookup"),
        (name = "ventas", description = "Sales CRUD and date filtering")
    )
)]
pub struct ApiDoc;
