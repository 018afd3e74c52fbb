//! Request handlers

use super::{pages, AppState, ProjectionForm};
use crate::chart;
use crate::error::{Error, Result};
use crate::projection::{ProjectionInput, ProjectionResult};
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use serde_json::json;
use std::sync::Arc;

pub async fn index() -> Html<&'static str> {
    Html(pages::index())
}

pub async fn calculate(
    State(state): State<Arc<AppState>>,
    form: std::result::Result<Form<ProjectionForm>, FormRejection>,
) -> Result<Html<String>> {
    let Form(form) = form.map_err(|rejection| Error::MalformedRequest(rejection.body_text()))?;
    let input = ProjectionInput::try_from(form)?;

    let result = run(&state, &input)?;
    let plot = chart::render_base64(&result.yearly_series, state.chart)?;

    Ok(Html(pages::result(result.final_amount, result.difference, &plot)))
}

pub async fn project_json(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<ProjectionInput>, JsonRejection>,
) -> std::result::Result<Json<ProjectionResult>, ApiError> {
    let Json(input) = payload.map_err(|rejection| Error::MalformedRequest(rejection.body_text()))?;
    Ok(Json(run(&state, &input)?))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn run(state: &AppState, input: &ProjectionInput) -> Result<ProjectionResult> {
    let result = state.engine.project(input)?;
    log::info!(
        "projected {} years ({:?}): final {:.2}, without interest {:.2}",
        input.time_period_years,
        input.compounding_frequency,
        result.final_amount,
        result.final_amount_without_interest
    );
    Ok(result)
}

/// Faults on the JSON surface become `400 {"error": ...}`
pub struct ApiError(Error);

impl<E: Into<Error>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::warn!("rejecting api request: {}", self.0);
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}
