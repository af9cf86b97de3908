//! Integration tests for the opinion half of the API.

mod common;

use axum::http::StatusCode;
use common::{get, post};
use serde_json::json;

fn opinion_body(category: &str, answer: &str) -> serde_json::Value {
    json!({
        "category": category,
        "question": "What did you think of this year's releases?",
        "answer": answer,
        "userId": "viewer-42",
    })
}

#[tokio::test]
async fn create_tags_sentiment_at_write_time() {
    let (app, _dir) = common::test_app();

    let (status, body) = post(
        &app,
        "/api/opinions",
        opinion_body("film", "This was an amazing and great film"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["sentiment"], "positive");
    assert_eq!(body["impact"], 1);
    assert!(body["id"].is_string());

    let (status, body) = post(
        &app,
        "/api/opinions",
        opinion_body("film", "okay film, nothing special"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["sentiment"], "neutral");
}

#[tokio::test]
async fn create_rejects_blank_required_fields() {
    let (app, _dir) = common::test_app();

    let mut body = opinion_body("television", "fine");
    body["answer"] = json!("   ");
    let (status, reply) = post(&app, "/api/opinions", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(reply["message"], "answer is required");

    // A missing field is also a validation failure, not a different error class.
    let mut body = opinion_body("television", "fine");
    body.as_object_mut().unwrap().remove("category");
    let (status, _) = post(&app, "/api/opinions", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Nothing was written.
    let (_, page) = get(&app, "/api/opinions").await;
    assert_eq!(page["pagination"]["total"], 0);
}

#[tokio::test]
async fn listing_paginates_with_an_envelope() {
    let (app, _dir) = common::test_app();
    for i in 0..3 {
        let (status, _) = post(
            &app,
            "/api/opinions",
            opinion_body("film", &format!("film number {i}")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = get(&app, "/api/opinions?page=1&limit=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["opinions"].as_array().unwrap().len(), 2);
    assert_eq!(body["pagination"], json!({"total": 3, "page": 1, "pages": 2}));

    let (_, rest) = get(&app, "/api/opinions?page=2&limit=2").await;
    assert_eq!(rest["opinions"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn category_listing_filters_and_degrades_quietly() {
    let (app, _dir) = common::test_app();
    post(&app, "/api/opinions", opinion_body("film", "a great watch")).await;
    post(&app, "/api/opinions", opinion_body("television", "terrible scheduling")).await;

    let (status, body) = get(&app, "/api/opinions/category/film").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    // Sentiment filter applies; an unknown sentiment matches nothing.
    let (_, positives) = get(&app, "/api/opinions/category/film?sentiment=positive").await;
    assert_eq!(positives.as_array().unwrap().len(), 1);
    let (status, none) = get(&app, "/api/opinions/category/film?sentiment=elated").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(none, json!([]));

    // Unknown category and unrecognised timeframe degrade, not error.
    let (status, none) = get(&app, "/api/opinions/category/anime").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(none, json!([]));
    let (_, all) = get(&app, "/api/opinions/category/film?timeframe=fortnight").await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn analytics_counts_categories_as_a_set() {
    let (app, _dir) = common::test_app();
    post(&app, "/api/opinions", opinion_body("film", "one")).await;
    post(&app, "/api/opinions", opinion_body("film", "two")).await;
    post(&app, "/api/opinions", opinion_body("television", "three")).await;

    let (status, report) = get(&app, "/api/opinions/analytics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["totalOpinions"], 3);

    let mut breakdown: Vec<(String, u64)> = report["categoryBreakdown"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| {
            (
                row["_id"].as_str().unwrap().to_string(),
                row["count"].as_u64().unwrap(),
            )
        })
        .collect();
    breakdown.sort();
    assert_eq!(
        breakdown,
        vec![("film".to_string(), 2), ("television".to_string(), 1)]
    );
}

#[tokio::test]
async fn trending_ranks_tags_descending() {
    let (app, _dir) = common::test_app();
    for tags in [vec!["pacing", "casting"], vec!["pacing"]] {
        let mut body = opinion_body("film", "fine");
        body["tags"] = json!(tags);
        post(&app, "/api/opinions", body).await;
    }

    let (status, rows) = get(&app, "/api/opinions/trending").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows[0], json!({"_id": "pacing", "count": 2}));
    assert_eq!(rows[1], json!({"_id": "casting", "count": 1}));
}

#[tokio::test]
async fn health_and_fallback() {
    let (app, _dir) = common::test_app();

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");

    let (status, body) = get(&app, "/api/nonsense").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Resource not found");
}
