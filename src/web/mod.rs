//! HTTP surface
//!
//! - `GET /` input form
//! - `POST /` form submission, HTML results with the embedded chart
//! - `POST /api/projection` JSON in, JSON out
//! - `GET /health` liveness
//!
//! The router is built from [`Settings`] and handed to whichever listener
//! hosts it (a TCP socket locally, the Lambda runtime in AWS).

mod form;
mod handlers;
mod pages;

pub use form::ProjectionForm;

use crate::chart::ChartStyle;
use crate::config::Settings;
use crate::error::Error;
use crate::projection::ProjectionEngine;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Read-only state shared by every request
#[derive(Debug)]
pub struct AppState {
    pub engine: ProjectionEngine,
    pub chart: ChartStyle,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            engine: ProjectionEngine::new(settings.projection_config()),
            chart: settings.chart_style(),
        }
    }
}

/// Build the application router
pub fn router(settings: &Settings) -> Router {
    let state = Arc::new(AppState::new(settings));

    Router::new()
        .route("/", get(handlers::index).post(handlers::calculate))
        .route("/api/projection", post(handlers::project_json))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Faults on the form surface become a plain-text 400
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        log::warn!("rejecting request: {}", self);
        (StatusCode::BAD_REQUEST, format!("An error occurred: {}", self)).into_response()
    }
}
