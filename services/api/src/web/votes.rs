//! services/api/src/web/votes.rs
//!
//! Axum handlers for the voting flow: the eligibility gate, vote submission,
//! the voting-period record and the counts-by-dimension stats views. The
//! service process is the sole owner of the ledger these routes read and
//! append to.

use crate::web::rest::{reply_error, store_failure, ErrorBody};
use crate::web::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use moviepulse_core::domain::{
    Country, FilmIndustry, OttPlatform, ProjectType, VotingPeriod,
};
use moviepulse_core::service::SubmitError;
use moviepulse_core::submission::VoteSubmission;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

//=========================================================================================
// Response Shapes
//=========================================================================================

/// One row of a counts-by-dimension table. Rows arrive in the target label
/// set's declared order, zero counts included.
#[derive(Debug, Serialize)]
pub struct LabelCount<T> {
    pub label: T,
    pub count: u64,
}

fn table<T: Serialize>(rows: Vec<(T, u64)>) -> Json<Vec<LabelCount<T>>> {
    Json(
        rows.into_iter()
            .map(|(label, count)| LabelCount { label, count })
            .collect(),
    )
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResponse {
    pub project_type: ProjectType,
    pub eligible: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodResponse {
    #[serde(flatten)]
    pub period: VotingPeriod,
    pub is_open: bool,
    pub remaining_days: i64,
}

#[derive(Debug, Deserialize)]
pub struct NotesQuery {
    sections: Option<String>,
}

fn port_failure(context: &str, e: moviepulse_core::ports::PortError) -> (StatusCode, Json<ErrorBody>) {
    error!("{context}: {e:?}");
    store_failure(context)
}

//=========================================================================================
// Submission and Eligibility
//=========================================================================================

/// Cast a vote.
///
/// The handler runs the eligibility gate before the submission itself, since
/// submission deliberately does not: a denial is a normal negative outcome
/// (409), never an internal error.
#[utoipa::path(
    post,
    path = "/api/votes",
    request_body(content_type = "application/json", description = "The vote submission."),
    responses(
        (status = 201, description = "Vote appended to the ledger"),
        (status = 400, description = "Required fields missing for the project type"),
        (status = 409, description = "Voting closed, or already voted in this category this period"),
        (status = 500, description = "Ledger failure")
    )
)]
pub async fn submit_vote_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<VoteSubmission>, JsonRejection>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let Json(submission) =
        payload.map_err(|rejection| reply_error(StatusCode::BAD_REQUEST, &rejection.body_text()))?;
    let now = Utc::now();
    let voting = &app_state.voting;

    let period = voting
        .current_period(now)
        .map_err(|e| port_failure("Failed to load voting period", e))?;
    if !period.is_open(now) {
        return Err(reply_error(
            StatusCode::CONFLICT,
            "Voting is currently closed",
        ));
    }

    let eligible = voting
        .eligible(submission.project_type, now)
        .map_err(|e| port_failure("Failed to check eligibility", e))?;
    if !eligible {
        return Err(reply_error(
            StatusCode::CONFLICT,
            "A vote was already cast in this category during the current voting period",
        ));
    }

    match voting.submit(submission, now) {
        Ok(vote) => Ok((StatusCode::CREATED, Json(vote))),
        Err(SubmitError::Invalid(reason)) => {
            Err(reply_error(StatusCode::BAD_REQUEST, &reason.to_string()))
        }
        Err(SubmitError::Port(e)) => Err(port_failure("Failed to append vote", e)),
    }
}

/// Whether a vote may currently be cast for the given project type.
#[utoipa::path(
    get,
    path = "/api/votes/eligibility/{projectType}",
    params(("projectType" = String, Path, description = "Project type label, e.g. Television")),
    responses(
        (status = 200, description = "Eligibility verdict"),
        (status = 500, description = "Ledger failure")
    )
)]
pub async fn eligibility_handler(
    State(app_state): State<Arc<AppState>>,
    Path(project_type): Path<ProjectType>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let eligible = app_state
        .voting
        .eligible(project_type, Utc::now())
        .map_err(|e| port_failure("Failed to check eligibility", e))?;
    Ok(Json(EligibilityResponse {
        project_type,
        eligible,
    }))
}

/// The (country, industry, genre, projectType) combinations already voted
/// during the active period.
pub async fn combinations_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let combos = app_state
        .voting
        .voted_combinations(Utc::now())
        .map_err(|e| port_failure("Failed to load voted combinations", e))?;
    Ok(Json(combos))
}

//=========================================================================================
// Voting Period
//=========================================================================================

pub async fn get_period_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let now = Utc::now();
    let period = app_state
        .voting
        .current_period(now)
        .map_err(|e| port_failure("Failed to load voting period", e))?;
    Ok(Json(PeriodResponse {
        is_open: period.is_open(now),
        remaining_days: period.remaining_days(now),
        period,
    }))
}

/// Replace the stored period wholesale. No access control is modelled, as
/// before.
pub async fn update_period_handler(
    State(app_state): State<Arc<AppState>>,
    Json(period): Json<VotingPeriod>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let saved = app_state
        .voting
        .update_period(period)
        .map_err(|e| port_failure("Failed to store voting period", e))?;
    Ok(Json(saved))
}

pub async fn toggle_period_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let toggled = app_state
        .voting
        .toggle_active(Utc::now())
        .map_err(|e| port_failure("Failed to toggle voting period", e))?;
    Ok(Json(toggled))
}

//=========================================================================================
// Stats Views
//=========================================================================================

pub async fn genre_totals_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let rows = app_state
        .voting
        .genre_totals()
        .map_err(|e| port_failure("Failed to aggregate votes", e))?;
    Ok(table(rows))
}

pub async fn counts_by_industry_handler(
    State(app_state): State<Arc<AppState>>,
    Path(industry): Path<FilmIndustry>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let rows = app_state
        .voting
        .genre_counts_by_industry(industry)
        .map_err(|e| port_failure("Failed to aggregate votes", e))?;
    Ok(table(rows))
}

pub async fn counts_by_project_type_handler(
    State(app_state): State<Arc<AppState>>,
    Path(project_type): Path<ProjectType>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let rows = app_state
        .voting
        .genre_counts_by_project_type(project_type)
        .map_err(|e| port_failure("Failed to aggregate votes", e))?;
    Ok(table(rows))
}

pub async fn counts_by_country_handler(
    State(app_state): State<Arc<AppState>>,
    Path(country): Path<Country>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let rows = app_state
        .voting
        .genre_counts_by_country(country)
        .map_err(|e| port_failure("Failed to aggregate votes", e))?;
    Ok(table(rows))
}

pub async fn counts_by_ott_handler(
    State(app_state): State<Arc<AppState>>,
    Path(platform): Path<OttPlatform>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let rows = app_state
        .voting
        .genre_counts_by_ott_platform(platform)
        .map_err(|e| port_failure("Failed to aggregate votes", e))?;
    Ok(table(rows))
}

pub async fn counts_by_channel_handler(
    State(app_state): State<Arc<AppState>>,
    Path(channel): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let rows = app_state
        .voting
        .content_type_counts_by_channel(&channel)
        .map_err(|e| port_failure("Failed to aggregate votes", e))?;
    Ok(table(rows))
}

/// Counts for one named YouTube section. An unknown section yields an
/// empty table.
pub async fn counts_by_youtube_section_handler(
    State(app_state): State<Arc<AppState>>,
    Path(section): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let rows = app_state
        .voting
        .category_counts_by_youtube_section(&section)
        .map_err(|e| port_failure("Failed to aggregate votes", e))?;
    Ok(table(rows))
}

/// Notes from votes in the requested sections, newest first. `sections` is a
/// comma-separated list of project type labels; unrecognised labels are
/// skipped the way unrecognised query filters are elsewhere.
pub async fn notes_handler(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<NotesQuery>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let sections: Vec<ProjectType> = match query.sections.as_deref() {
        Some(raw) => raw.split(',').filter_map(parse_project_type).collect(),
        None => ProjectType::ALL.to_vec(),
    };
    let notes = app_state
        .voting
        .notes_by_sections(&sections)
        .map_err(|e| port_failure("Failed to load notes", e))?;
    Ok(Json(notes))
}

fn parse_project_type(raw: &str) -> Option<ProjectType> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_owned())).ok()
}
