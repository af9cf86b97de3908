pub mod rest;
pub mod state;
pub mod votes;

use axum::{
    routing::{get, post},
    Router,
};
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

// Re-export the handlers the binaries and tests reach for most often.
pub use rest::{health_handler, not_found_handler, ApiDoc};

/// Builds the full application router over a prepared state. The binaries
/// and the integration tests share this, so both exercise the same routing
/// table, CORS policy and 404 fallback.
pub fn router(app_state: Arc<AppState>) -> Router {
    let opinion_routes = Router::new()
        .route(
            "/api/opinions",
            get(rest::list_opinions_handler).post(rest::create_opinion_handler),
        )
        .route("/api/opinions/analytics", get(rest::analytics_handler))
        .route("/api/opinions/trending", get(rest::trending_handler))
        .route(
            "/api/opinions/category/{category}",
            get(rest::list_by_category_handler),
        );

    let vote_routes = Router::new()
        .route("/api/votes", post(votes::submit_vote_handler))
        .route(
            "/api/votes/eligibility/{projectType}",
            get(votes::eligibility_handler),
        )
        .route("/api/votes/combinations", get(votes::combinations_handler))
        .route(
            "/api/votes/period",
            get(votes::get_period_handler).put(votes::update_period_handler),
        )
        .route("/api/votes/period/toggle", post(votes::toggle_period_handler))
        .route("/api/votes/notes", get(votes::notes_handler))
        .route("/api/votes/stats/genres", get(votes::genre_totals_handler))
        .route(
            "/api/votes/stats/industry/{industry}",
            get(votes::counts_by_industry_handler),
        )
        .route(
            "/api/votes/stats/project-type/{projectType}",
            get(votes::counts_by_project_type_handler),
        )
        .route(
            "/api/votes/stats/country/{country}",
            get(votes::counts_by_country_handler),
        )
        .route(
            "/api/votes/stats/ott/{platform}",
            get(votes::counts_by_ott_handler),
        )
        .route(
            "/api/votes/stats/television/{channel}",
            get(votes::counts_by_channel_handler),
        )
        .route(
            "/api/votes/stats/youtube/{section}",
            get(votes::counts_by_youtube_section_handler),
        );

    Router::new()
        .merge(opinion_routes)
        .merge(vote_routes)
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
