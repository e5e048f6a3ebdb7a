use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};

use crate::{
    domain::cart::Receipt,
    dto::cart::{AddToCartRequest, CartOverview, CartView, SetQuantityRequest},
    error::AppResult,
    middleware::{json::JsonBody, session::Session},
    models::Category,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_overview))
        .route("/{category}", get(view_cart).post(add_to_cart))
        .route("/{category}/checkout", post(checkout))
        .route(
            "/{category}/{product_id}",
            put(set_quantity).delete(remove_from_cart),
        )
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Summary of every page's cart", body = ApiResponse<CartOverview>)
    ),
    tag = "Cart"
)]
pub async fn cart_overview(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Json<ApiResponse<CartOverview>>> {
    Ok(Json(cart_service::overview(&state, &session).await?))
}

#[utoipa::path(
    get,
    path = "/api/cart/{category}",
    params(
        ("category" = Category, Path, description = "Catalog page owning the cart")
    ),
    responses(
        (status = 200, description = "Cart lines and total", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn view_cart(
    State(state): State<AppState>,
    session: Session,
    Path(category): Path<Category>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    Ok(Json(cart_service::view_cart(&state, &session, category).await?))
}

#[utoipa::path(
    post,
    path = "/api/cart/{category}",
    params(
        ("category" = Category, Path, description = "Catalog page owning the cart")
    ),
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Product added or its quantity bumped", body = ApiResponse<CartView>),
        (status = 404, description = "Product not on this page"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    session: Session,
    Path(category): Path<Category>,
    JsonBody(payload): JsonBody<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    Ok(Json(
        cart_service::add_item(&state, &session, category, payload).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/cart/{category}/{product_id}",
    params(
        ("category" = Category, Path, description = "Catalog page owning the cart"),
        ("product_id" = u32, Path, description = "Product ID")
    ),
    request_body = SetQuantityRequest,
    responses(
        (status = 200, description = "Quantity set; unreadable or non-positive input becomes 1", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn set_quantity(
    State(state): State<AppState>,
    session: Session,
    Path((category, product_id)): Path<(Category, u32)>,
    JsonBody(payload): JsonBody<SetQuantityRequest>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    Ok(Json(
        cart_service::set_quantity(&state, &session, category, product_id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{category}/{product_id}",
    params(
        ("category" = Category, Path, description = "Catalog page owning the cart"),
        ("product_id" = u32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Line removed if present", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    session: Session,
    Path((category, product_id)): Path<(Category, u32)>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    Ok(Json(
        cart_service::remove_item(&state, &session, category, product_id).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/cart/{category}/checkout",
    params(
        ("category" = Category, Path, description = "Catalog page owning the cart")
    ),
    responses(
        (status = 200, description = "Simulated purchase; cart cleared", body = ApiResponse<Receipt>),
        (status = 409, description = "Cart is empty"),
    ),
    tag = "Cart"
)]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    Path(category): Path<Category>,
) -> AppResult<Json<ApiResponse<Receipt>>> {
    Ok(Json(cart_service::checkout(&state, &session, category).await?))
}
