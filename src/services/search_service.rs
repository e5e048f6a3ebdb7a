use crate::{
    catalog::SEARCH_INDEX,
    domain::search as quick_search,
    dto::search::{SearchRequest, SearchResults},
    middleware::session::Session,
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Runs the navigation-bar search and hands the results to the results page.
pub async fn search(
    state: &AppState,
    session: &Session,
    payload: SearchRequest,
) -> ApiResponse<SearchResults> {
    let items = quick_search::search(&SEARCH_INDEX, &payload.query);
    tracing::debug!(
        session = session.as_str(),
        query = %payload.query,
        hits = items.len(),
        "catalog search"
    );
    state.set_search_handoff(session, items.clone()).await;

    let meta = Meta::total(items.len());
    ApiResponse::success("Search results", SearchResults { items }, Some(meta))
}

/// Results of the session's last search, or nothing when it never searched.
pub async fn last_results(state: &AppState, session: &Session) -> ApiResponse<SearchResults> {
    let items = state.search_handoff(session).await;
    let meta = Meta::total(items.len());
    let message = if items.is_empty() {
        "No results found."
    } else {
        "Search results"
    };
    ApiResponse::info(message, SearchResults { items }, Some(meta))
}
