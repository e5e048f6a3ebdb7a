use axum::{
    Json, Router,
    extract::{Path, Query},
    routing::get,
};

use crate::{
    dto::catalog::{CategoryInfo, ProductList},
    error::AppResult,
    models::{Category, Product},
    response::ApiResponse,
    routes::params::CatalogQuery,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories))
        .route("/{category}", get(list_products))
        .route("/{category}/products/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/catalog",
    responses(
        (status = 200, description = "Catalog pages and their routes", body = ApiResponse<Vec<CategoryInfo>>)
    ),
    tag = "Catalog"
)]
pub async fn list_categories() -> Json<ApiResponse<Vec<CategoryInfo>>> {
    Json(catalog_service::list_categories())
}

#[utoipa::path(
    get,
    path = "/api/catalog/{category}",
    params(
        ("category" = Category, Path, description = "Catalog page"),
        ("tag" = Option<String>, Query, description = "Filter tag, `All` for none")
    ),
    responses(
        (status = 200, description = "Products of one page", body = ApiResponse<ProductList>),
        (status = 400, description = "Unknown or unsupported tag"),
    ),
    tag = "Catalog"
)]
pub async fn list_products(
    Path(category): Path<Category>,
    Query(query): Query<CatalogQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    Ok(Json(catalog_service::list_products(category, query)?))
}

#[utoipa::path(
    get,
    path = "/api/catalog/{category}/products/{id}",
    params(
        ("category" = Category, Path, description = "Catalog page"),
        ("id" = u32, Path, description = "Product ID within the page")
    ),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Catalog"
)]
pub async fn get_product(
    Path((category, id)): Path<(Category, u32)>,
) -> AppResult<Json<ApiResponse<Product>>> {
    Ok(Json(catalog_service::get_product(category, id)?))
}
