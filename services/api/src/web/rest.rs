//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the opinion REST endpoints and the master
//! definition for the OpenAPI specification.

use crate::web::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use moviepulse_core::domain::{
    Demographics, Opinion, OpinionCategory, Sentiment, Timeframe,
};
use moviepulse_core::ports::OpinionFilter;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        list_opinions_handler,
        create_opinion_handler,
        analytics_handler,
        trending_handler,
        crate::web::votes::submit_vote_handler,
        crate::web::votes::eligibility_handler,
    ),
    components(
        schemas(CreateOpinionRequest)
    ),
    tags(
        (name = "MoviePulse API", description = "Opinion collection and analytics endpoints.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

/// A generic JSON error body: `{"message": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

pub(crate) fn reply_error(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorBody>) {
    (
        status,
        Json(ErrorBody {
            message: message.to_string(),
        }),
    )
}

/// Shorthand for the 500 every store failure collapses into.
pub(crate) fn store_failure(context: &str) -> (StatusCode, Json<ErrorBody>) {
    reply_error(StatusCode::INTERNAL_SERVER_ERROR, context)
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    page: Option<u64>,
    limit: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    region: Option<String>,
    timeframe: Option<String>,
    sentiment: Option<String>,
}

/// The body accepted by `POST /api/opinions`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOpinionRequest {
    #[schema(value_type = String, example = "film")]
    pub category: OpinionCategory,
    pub question: String,
    pub answer: String,
    pub user_id: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub demographics: Demographics,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Pagination {
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}

#[derive(Debug, Serialize)]
pub struct OpinionPage {
    pub opinions: Vec<Opinion>,
    pub pagination: Pagination,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// List opinions, newest first, one page at a time.
#[utoipa::path(
    get,
    path = "/api/opinions",
    params(
        ("page" = Option<u64>, Query, description = "1-based page number, defaults to 1"),
        ("limit" = Option<u64>, Query, description = "Page size, defaults to 20")
    ),
    responses(
        (status = 200, description = "One page of opinions with a pagination envelope"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_opinions_handler(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let page = query.page.filter(|n| *n > 0).unwrap_or(1);
    let limit = query.limit.filter(|n| *n > 0).unwrap_or(20);

    let (opinions, total) = app_state.opinions.list(page, limit).await.map_err(|e| {
        error!("Failed to list opinions: {:?}", e);
        store_failure("Failed to list opinions")
    })?;

    Ok(Json(OpinionPage {
        opinions,
        pagination: Pagination {
            total,
            page,
            pages: total.div_ceil(limit),
        },
    }))
}

/// List one category's opinions, narrowed by the optional filters.
///
/// An unrecognised timeframe leaves the time filter unset. An unknown
/// category or sentiment value matches no stored rows, so it yields an
/// empty array rather than an error.
pub async fn list_by_category_handler(
    State(app_state): State<Arc<AppState>>,
    Path(category): Path<String>,
    Query(query): Query<CategoryQuery>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let Some(category) = OpinionCategory::parse(&category) else {
        return Ok(Json(Vec::new()));
    };
    let sentiment = match query.sentiment.as_deref() {
        Some(raw) => match Sentiment::parse(raw) {
            Some(sentiment) => Some(sentiment),
            None => return Ok(Json(Vec::new())),
        },
        None => None,
    };

    let filter = OpinionFilter {
        region: query.region.as_deref(),
        timeframe: query.timeframe.as_deref().and_then(Timeframe::parse),
        sentiment,
    };
    let opinions = app_state
        .opinions
        .list_by_category(category, filter, Utc::now())
        .await
        .map_err(|e| {
            error!("Failed to list opinions by category: {:?}", e);
            store_failure("Failed to list opinions")
        })?;
    Ok(Json(opinions))
}

/// Create a new opinion, tagging its sentiment at write time.
#[utoipa::path(
    post,
    path = "/api/opinions",
    request_body = CreateOpinionRequest,
    responses(
        (status = 201, description = "Opinion created"),
        (status = 400, description = "Missing or empty required fields"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create_opinion_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<CreateOpinionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    // A missing or malformed field is a validation failure, reported as 400
    // before any write.
    let Json(body) =
        payload.map_err(|rejection| reply_error(StatusCode::BAD_REQUEST, &rejection.body_text()))?;
    for (field, value) in [
        ("question", &body.question),
        ("answer", &body.answer),
        ("userId", &body.user_id),
    ] {
        if value.trim().is_empty() {
            return Err(reply_error(
                StatusCode::BAD_REQUEST,
                &format!("{field} is required"),
            ));
        }
    }

    let opinion = Opinion {
        id: Uuid::new_v4(),
        category: body.category,
        question: body.question,
        answer: body.answer.clone(),
        user_id: body.user_id,
        demographics: body.demographics,
        sentiment: app_state.classifier.classify(&body.answer),
        impact: 1,
        created_at: Utc::now(),
        tags: body.tags,
    };

    let created = app_state.opinions.insert(opinion).await.map_err(|e| {
        error!("Failed to create opinion: {:?}", e);
        store_failure("Failed to create opinion")
    })?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// The full analytics roll-up: totals, breakdowns and 30-day trends.
#[utoipa::path(
    get,
    path = "/api/opinions/analytics",
    responses(
        (status = 200, description = "Aggregated analytics report"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn analytics_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let report = app_state.opinions.analytics(Utc::now()).await.map_err(|e| {
        error!("Failed to compute analytics: {:?}", e);
        store_failure("Failed to compute analytics")
    })?;
    Ok(Json(report))
}

/// Top-10 tags by frequency.
#[utoipa::path(
    get,
    path = "/api/opinions/trending",
    responses(
        (status = 200, description = "Trending tag rows, descending by count"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn trending_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let tags = app_state.opinions.trending().await.map_err(|e| {
        error!("Failed to compute trending tags: {:?}", e);
        store_failure("Failed to compute trending tags")
    })?;
    Ok(Json(tags))
}

/// Liveness probe.
pub async fn health_handler(State(app_state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "OK",
        "message": "MoviePulse API is running",
        "environment": app_state.config.environment,
        "timestamp": Utc::now(),
    }))
}

/// Every unmatched route lands here.
pub async fn not_found_handler() -> impl IntoResponse {
    reply_error(StatusCode::NOT_FOUND, "Resource not found")
}
