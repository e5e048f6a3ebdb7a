use stirling_storefront::{
    dto::search::SearchRequest,
    middleware::session::Session,
    services::search_service,
    state::AppState,
};

fn query(text: &str) -> SearchRequest {
    SearchRequest {
        query: text.to_string(),
    }
}

#[tokio::test]
async fn search_matches_substrings_case_insensitively() {
    let state = AppState::in_memory();
    let resp = search_service::search(&state, &Session::anonymous(), query("tEnNiS")).await;
    let items = resp.data.expect("results").items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Tennis Shoes");
}

#[tokio::test]
async fn empty_and_unmatched_queries_return_nothing() {
    let state = AppState::in_memory();
    let session = Session::anonymous();
    for text in ["", "  ", "flip-flops"] {
        let resp = search_service::search(&state, &session, query(text)).await;
        assert!(resp.data.expect("results").items.is_empty(), "{text:?}");
    }
}

#[tokio::test]
async fn results_page_shows_last_search_of_the_session() -> anyhow::Result<()> {
    let state = AppState::in_memory();
    let searcher = Session::new("searcher")?;
    let visitor = Session::new("visitor")?;

    let direct = search_service::last_results(&state, &searcher).await;
    assert_eq!(direct.message, "No results found.");
    assert!(direct.data.expect("results").items.is_empty());

    search_service::search(&state, &searcher, query("shoes")).await;
    let handed = search_service::last_results(&state, &searcher).await;
    assert_eq!(handed.data.expect("results").items.len(), 3);

    let other = search_service::last_results(&state, &visitor).await;
    assert!(other.data.expect("results").items.is_empty());
    Ok(())
}
