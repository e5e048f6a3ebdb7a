use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::search::{SearchRequest, SearchResults},
    middleware::{json::JsonBody, session::Session},
    response::ApiResponse,
    services::search_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(search))
        .route("/results", get(search_results))
}

#[utoipa::path(
    post,
    path = "/api/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Products whose name contains the query", body = ApiResponse<SearchResults>)
    ),
    tag = "Search"
)]
pub async fn search(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<SearchRequest>,
) -> Json<ApiResponse<SearchResults>> {
    Json(search_service::search(&state, &session, payload).await)
}

#[utoipa::path(
    get,
    path = "/api/search/results",
    responses(
        (status = 200, description = "Results of this session's last search", body = ApiResponse<SearchResults>)
    ),
    tag = "Search"
)]
pub async fn search_results(
    State(state): State<AppState>,
    session: Session,
) -> Json<ApiResponse<SearchResults>> {
    Json(search_service::last_results(&state, &session).await)
}
