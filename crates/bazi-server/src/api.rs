//! JSON API routes.

use std::collections::HashMap;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazi_core::input::parse_birth_datetime;
use bazi_core::{Chart, compute_chart};
use bazi_oracle::{FutureFortune, PastReview, conclude, generate_questions};

use crate::error::ApiError;
use crate::server::SharedState;
use crate::session::{BirthInput, Session, SessionMeta};

// ----------------------------------------------------------------------------
// Wire types
// ----------------------------------------------------------------------------

/// Body of `POST /api/chart`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequest {
    /// `YYYY-MM-DD`.
    pub birth_date: String,
    /// `HH` or `HH:MM`, 24-hour.
    pub birth_time: String,
    /// Free-form gender label.
    pub gender: String,
    /// Birth city, display only.
    #[serde(default)]
    pub city: String,
}

/// A question as shown to the user, without its expected answer.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    /// Question id to answer under.
    pub id: String,
    /// Question text.
    pub text: String,
}

/// A chart with the display metadata merged in.
#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    /// The chart fields.
    #[serde(flatten)]
    pub chart: Chart,
    /// Display metadata.
    pub meta: SessionMeta,
}

/// Response of `POST /api/chart`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse {
    /// Id to pass to `/api/result`.
    pub session_id: String,
    /// The chart.
    pub chart: ChartView,
    /// The questions to answer.
    pub verification_questions: Vec<QuestionView>,
}

/// Body of `POST /api/result`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRequest {
    /// Id returned by `/api/chart`.
    pub session_id: String,
    /// Answers keyed by question id.
    #[serde(default)]
    pub answers: HashMap<String, bool>,
}

/// Response of `POST /api/result`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultResponse {
    /// The session's chart.
    pub chart: Chart,
    /// Answer review.
    pub past_review: PastReview,
    /// Fortune report.
    pub future: FutureFortune,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Number of stored sessions.
    pub sessions: usize,
}

// ----------------------------------------------------------------------------
// Routes
// ----------------------------------------------------------------------------

/// Chart and result routes.
pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/chart", post(create_chart))
        .route("/api/result", post(submit_result))
}

/// Liveness route.
pub fn health_routes() -> Router<SharedState> {
    Router::new().route("/health", get(health))
}

async fn create_chart(
    State(state): State<SharedState>,
    payload: Result<Json<ChartRequest>, JsonRejection>,
) -> Result<Json<ChartResponse>, ApiError> {
    let Json(req) = payload?;
    let at = parse_birth_datetime(&req.birth_date, &req.birth_time)?;
    let chart = compute_chart(state.calendar.as_ref(), at);
    let today = state.today();
    let questions = generate_questions(&chart, today);

    let meta = SessionMeta {
        gender: req.gender,
        city: req.city,
        birth: BirthInput {
            date: req.birth_date,
            time: req.birth_time,
        },
    };
    let session = state
        .store
        .insert(Session::new(chart, questions, meta));
    tracing::info!(session = %session.id, chart = session.chart.key(), "chart created");

    Ok(Json(ChartResponse {
        session_id: session.id.to_string(),
        chart: ChartView {
            chart: session.chart.clone(),
            meta: session.meta.clone(),
        },
        verification_questions: session
            .questions
            .iter()
            .map(|q| QuestionView {
                id: q.id.clone(),
                text: q.text.clone(),
            })
            .collect(),
    }))
}

async fn submit_result(
    State(state): State<SharedState>,
    payload: Result<Json<ResultRequest>, JsonRejection>,
) -> Result<Json<ResultResponse>, ApiError> {
    let Json(req) = payload?;
    let id = Uuid::parse_str(req.session_id.trim()).map_err(|_| ApiError::SessionNotFound)?;
    let session = state.store.get(&id).ok_or(ApiError::SessionNotFound)?;

    let outcome = conclude(
        &session.chart,
        &session.questions,
        &req.answers,
        state.calendar.as_ref(),
        &state.config.reading,
        state.today(),
    );

    Ok(Json(ResultResponse {
        chart: session.chart.clone(),
        past_review: outcome.past_review,
        future: outcome.future,
    }))
}

async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        sessions: state.store.len(),
    })
}
