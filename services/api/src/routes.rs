use crate::infra::{AppState, UsageEvent};
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use toolhub::engine::{self, Category, UnitDescriptor};
use toolhub::error::AppError;
use toolhub::scoring::{
    aggregate, classify, compatibility, personality, AggregationMode, ClassificationBand,
};

pub(crate) fn tool_router() -> axum::Router {
    axum::Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/categories", get(categories_endpoint))
        .route("/api/v1/units/:category", get(units_endpoint))
        .route("/api/v1/convert", post(convert_endpoint))
        .route("/api/v1/scores/aggregate", post(aggregate_endpoint))
        .route(
            "/api/v1/compatibility/report",
            post(compatibility_endpoint),
        )
        .route("/api/v1/personality/profile", post(personality_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Serialize)]
pub(crate) struct CategoryView {
    pub(crate) key: &'static str,
    pub(crate) label: &'static str,
    pub(crate) affine: bool,
}

pub(crate) async fn categories_endpoint() -> Json<Vec<CategoryView>> {
    let categories = Category::ordered()
        .into_iter()
        .map(|category| CategoryView {
            key: category.key(),
            label: category.label(),
            affine: category.is_affine(),
        })
        .collect();
    Json(categories)
}

pub(crate) async fn units_endpoint(
    Path(category): Path<String>,
) -> Result<Json<Vec<UnitDescriptor>>, AppError> {
    let category = Category::parse(&category)?;
    Ok(Json(engine::units(category).to_vec()))
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConvertRequest {
    pub(crate) value: f64,
    pub(crate) category: String,
    pub(crate) from: String,
    pub(crate) to: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ConvertResponse {
    pub(crate) value: f64,
    pub(crate) category: Category,
    pub(crate) from: String,
    pub(crate) to: String,
    pub(crate) result: f64,
    pub(crate) formatted: String,
}

pub(crate) async fn convert_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, AppError> {
    let category = Category::parse(&payload.category)?;
    let result = engine::convert(payload.value, category, &payload.from, &payload.to)?;

    record_usage(
        &state,
        "unit_converter",
        json!({ "category": category.key(), "from": payload.from, "to": payload.to }),
    );

    Ok(Json(ConvertResponse {
        value: payload.value,
        category,
        from: payload.from,
        to: payload.to,
        result,
        formatted: engine::format_number(result),
    }))
}

#[derive(Debug, Deserialize)]
pub(crate) struct AggregateRequest {
    pub(crate) scores: BTreeMap<String, f64>,
    #[serde(flatten)]
    pub(crate) mode: AggregationMode,
    #[serde(default)]
    pub(crate) bands: Option<Vec<ClassificationBand<String>>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AggregateResponse {
    pub(crate) composite: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) label: Option<String>,
}

pub(crate) async fn aggregate_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AggregateRequest>,
) -> Result<Json<AggregateResponse>, AppError> {
    let composite = aggregate(&payload.scores, &payload.mode)?;
    let label = payload
        .bands
        .as_deref()
        .and_then(|bands| classify(composite, bands))
        .map(str::to_string);

    record_usage(
        &state,
        "score_aggregator",
        json!({ "inputs": payload.scores.len() }),
    );

    Ok(Json(AggregateResponse { composite, label }))
}

pub(crate) async fn compatibility_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<compatibility::CompatibilityInputs>,
) -> Result<Json<compatibility::CompatibilityReport>, AppError> {
    let report = compatibility::compatibility_report(&payload)?;

    record_usage(
        &state,
        "compatibility_calculator",
        json!({ "overall": report.overall, "verdict": report.verdict }),
    );

    Ok(Json(report))
}

pub(crate) async fn personality_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<personality::QuizAnswers>,
) -> Result<Json<personality::PersonalityProfile>, AppError> {
    let profile = personality::personality_profile(&payload)?;

    record_usage(
        &state,
        "personality_quiz",
        json!({ "dominant": profile.dominant }),
    );

    Ok(Json(profile))
}

fn record_usage(state: &AppState, tool: &'static str, detail: serde_json::Value) {
    let event = UsageEvent {
        tool,
        recorded_at: Utc::now(),
        detail,
    };
    if let Err(err) = state.usage.record(event) {
        tracing::warn!(%err, tool, "failed to record usage event");
    }
}
