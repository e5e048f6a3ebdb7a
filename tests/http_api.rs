use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use stirling_storefront::{app::build_router, state::AppState};
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body = serde_json::from_slice(&bytes).expect("json body");
    (status, body)
}

fn get(uri: &str, session: &str) -> Request<Body> {
    Request::get(uri)
        .header("x-session-id", session)
        .body(Body::empty())
        .expect("request")
}

fn with_json(method: &str, uri: &str, session: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("x-session-id", session)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn catalog_lists_pages_and_filters_by_tag() {
    let app = build_router(AppState::in_memory());

    let (status, body) = send(&app, get("/api/catalog", "s1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(7));
    assert_eq!(body["data"][5]["path"], "/sport");

    let (status, body) = send(&app, get("/api/catalog/gear?tag=Accessories", "s1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"][0]["name"], "Unisex Accessories Pack");
    assert_eq!(body["meta"]["total"], 1);

    let (status, _) = send(&app, get("/api/catalog/mens?tag=Men", "s1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, get("/api/catalog/sale/products/2", "s1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price"], 126.0);
    assert_eq!(body["data"]["original_price"], 180.0);
}

#[tokio::test]
async fn cart_round_trip_over_http() {
    let app = build_router(AppState::in_memory());

    let (status, body) = send(
        &app,
        with_json("POST", "/api/cart/new-arrivals", "shopper", json!({ "product_id": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["level"], "success");

    let (status, body) = send(
        &app,
        with_json("PUT", "/api/cart/new-arrivals/2", "shopper", json!({ "quantity": "2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], "360.00");

    let (status, body) = send(&app, get("/api/cart", "shopper")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"], 2);

    let (status, body) = send(
        &app,
        with_json("POST", "/api/cart/new-arrivals/checkout", "shopper", json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Purchase successful! Total: $360.00");

    let (status, body) = send(
        &app,
        with_json("POST", "/api/cart/new-arrivals/checkout", "shopper", json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["level"], "warning");
    assert_eq!(body["message"], "Your cart is empty!");
}

#[tokio::test]
async fn reviews_and_search_over_http() {
    let app = build_router(AppState::in_memory());

    let (status, body) = send(
        &app,
        with_json("POST", "/api/reviews", "reader", json!({ "category": "Sneakers", "name": "Lee" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Please fill out all fields!");

    let (status, _) = send(
        &app,
        with_json(
            "POST",
            "/api/reviews",
            "reader",
            json!({ "category": "Sneakers", "name": "Lee", "review": "Bouncy", "rating": 5 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, get("/api/reviews?category=Sneakers", "reader")).await;
    assert_eq!(body["data"]["items"][0]["name"], "Lee");
    let (_, body) = send(&app, get("/api/reviews", "reader")).await;
    assert_eq!(body["data"]["category"], "Men's Shoes");
    assert_eq!(body["data"]["items"].as_array().map(Vec::len), Some(0));

    let (_, body) = send(&app, get("/api/search/results", "reader")).await;
    assert_eq!(body["data"]["items"].as_array().map(Vec::len), Some(0));
    let (status, body) = send(
        &app,
        with_json("POST", "/api/search", "reader", json!({ "query": "basket" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"][0]["name"], "Basketball Sneakers");
    let (_, body) = send(&app, get("/api/search/results", "reader")).await;
    assert_eq!(body["data"]["items"][0]["price"], 140.0);
}

#[tokio::test]
async fn invalid_session_header_is_rejected() {
    let app = build_router(AppState::in_memory());
    let (status, body) = send(&app, get("/api/cart", "not a valid id!")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["level"], "error");
}

#[tokio::test]
async fn unknown_routes_return_json_not_found() {
    let app = build_router(AppState::in_memory());
    let (status, body) = send(&app, get("/nowhere", "s1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["path"], "/nowhere");
}

#[tokio::test]
async fn any_quantity_value_falls_back_instead_of_failing() {
    let app = build_router(AppState::in_memory());
    send(&app, with_json("POST", "/api/cart/mens", "boxes", json!({ "product_id": 1 }))).await;

    let (status, body) = send(
        &app,
        with_json("PUT", "/api/cart/mens/1", "boxes", json!({ "quantity": 2.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["lines"][0]["quantity"], 2);

    for odd in [json!(null), json!(true), json!([3]), json!({ "n": 3 })] {
        let (status, body) = send(
            &app,
            with_json("PUT", "/api/cart/mens/1", "boxes", json!({ "quantity": odd })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "quantity {odd}");
        assert_eq!(body["level"], "info");
        assert_eq!(body["data"]["lines"][0]["quantity"], 1, "quantity {odd}");
    }

    let (status, body) = send(&app, with_json("PUT", "/api/cart/mens/1", "boxes", json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["lines"][0]["quantity"], 1);
}

#[tokio::test]
async fn out_of_range_ratings_get_a_warning_notice() {
    let app = build_router(AppState::in_memory());

    for rating in [json!(300), json!(-1), json!(6)] {
        let (status, body) = send(
            &app,
            with_json(
                "POST",
                "/api/reviews",
                "critic",
                json!({ "category": "Sneakers", "name": "Lee", "review": "Too stiff", "rating": rating }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "rating {rating}");
        assert_eq!(body["level"], "warning");
        assert_eq!(body["message"], "Rating must be between 1 and 5");
    }

    let (_, body) = send(&app, get("/api/reviews?category=Sneakers", "critic")).await;
    assert_eq!(body["data"]["items"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn malformed_bodies_still_get_the_envelope() {
    let app = build_router(AppState::in_memory());

    let broken = Request::post("/api/reviews")
        .header("x-session-id", "critic")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .expect("request");
    let (status, body) = send(&app, broken).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["level"], "error");
    assert!(body["message"].is_string());

    let (status, body) = send(
        &app,
        with_json("POST", "/api/reviews", "critic", json!({ "rating": 4.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["level"], "error");
}
