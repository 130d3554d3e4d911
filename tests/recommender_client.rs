//! Runs the HTTP client against a local stub of the recommender API.

use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

use recotui::domain::entities::{ProductId, RecommendationSource, UserId};
use recotui::domain::errors::RecommenderError;
use recotui::domain::ports::{RecommendationQuery, RecommenderPort};
use recotui::infrastructure::RecommenderClient;

async fn recommend(
    Path(user_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    match user_id.as_str() {
        "missing" => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "User not found"})),
        )
            .into_response(),
        "nobody" => Json(json!({"user_id": "nobody", "recommendations": [], "source": "popularity_fallback"}))
            .into_response(),
        "garbled" => "not json".into_response(),
        _ => {
            let k = params.get("k").cloned().unwrap_or_else(|| "10".to_string());
            Json(json!({
                "user_id": user_id,
                "recommendations": [
                    {"product_id": "abc123456789", "product_name": "wireless_mouse", "score": 0.9},
                    {"product_id": format!("k{k}"), "product_name": "desk_lamp"}
                ],
                "source": "collaborative_filtering"
            }))
            .into_response()
        }
    }
}

async fn explain(Path((user_id, product_id)): Path<(String, String)>) -> impl IntoResponse {
    if product_id == "unknown" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": format!("Product with ID '{product_id}' not found.")})),
        )
            .into_response();
    }
    Json(json!({
        "user_id": user_id,
        "product_id": product_id,
        "explanation": format!("{user_id} looked at similar items to {product_id}.")
    }))
    .into_response()
}

async fn root() -> impl IntoResponse {
    Json(json!({"message": "Welcome."}))
}

async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/", get(root))
        .route("/recommend/{user_id}", get(recommend))
        .route("/explain/{user_id}/{product_id}", get(explain));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    format!("http://{addr}")
}

fn client(base_url: &str) -> RecommenderClient {
    RecommenderClient::with_base_url(base_url, None).expect("client")
}

fn query(user: &str) -> RecommendationQuery {
    RecommendationQuery::new(UserId::parse(user).expect("non-blank"))
}

#[tokio::test]
async fn test_recommend_success() {
    let base = spawn_stub().await;
    let set = client(&base)
        .recommend(&query("42").with_limit(Some(3)))
        .await
        .expect("recommendations");

    assert_eq!(set.len(), 2);
    assert_eq!(set.user_id().map(UserId::as_str), Some("42"));
    assert_eq!(set.source(), &RecommendationSource::CollaborativeFiltering);

    let first = &set.recommendations()[0];
    assert_eq!(first.display_name(), "wireless mouse");
    assert_eq!(first.short_id(), "abc1234567...");

    let second = &set.recommendations()[1];
    assert_eq!(second.product_id().as_str(), "k3");
    assert!(second.score().abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_recommend_empty_list() {
    let base = spawn_stub().await;
    let set = client(&base)
        .recommend(&query("nobody"))
        .await
        .expect("recommendations");

    assert!(set.is_empty());
    assert_eq!(set.source(), &RecommendationSource::PopularityFallback);
}

#[tokio::test]
async fn test_recommend_not_found_is_generic_error() {
    let base = spawn_stub().await;
    let err = client(&base)
        .recommend(&query("missing"))
        .await
        .expect_err("404");

    assert!(matches!(
        err,
        RecommenderError::RecommendationsUnavailable { status: 404 }
    ));
    assert_eq!(
        err.to_string(),
        "User not found or an error occurred on the server."
    );
}

#[tokio::test]
async fn test_recommend_malformed_body() {
    let base = spawn_stub().await;
    let err = client(&base)
        .recommend(&query("garbled"))
        .await
        .expect_err("bad body");

    assert!(matches!(err, RecommenderError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_user_id_is_path_encoded() {
    let base = spawn_stub().await;
    let set = client(&base)
        .recommend(&query("a b/c"))
        .await
        .expect("recommendations");

    assert_eq!(set.user_id().map(UserId::as_str), Some("a b/c"));
}

#[tokio::test]
async fn test_explain_success_and_not_found() {
    let base = spawn_stub().await;
    let client = client(&format!("{base}/"));
    let user = UserId::parse("42").expect("non-blank");

    let explanation = client
        .explain(&user, &ProductId::parse("abc").expect("non-blank"))
        .await
        .expect("explanation");
    assert_eq!(explanation.text(), "42 looked at similar items to abc.");

    let err = client
        .explain(&user, &ProductId::parse("unknown").expect("non-blank"))
        .await
        .expect_err("404");
    assert_eq!(err.to_string(), "Could not fetch explanation.");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_stub().await;
    assert!(client(&base).health_check().await.is_ok());
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = client(&format!("http://{addr}"))
        .recommend(&query("42"))
        .await
        .expect_err("connection refused");

    assert!(err.is_network_error());
}
