//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::TripRequest;
use crate::entur::JourneyPlanner;
use crate::lookup::{ErrorKind, LookupError};
use crate::summary::TravelSummary;

use super::dto::ErrorResponse;
use super::state::AppState;

/// Create the application router.
pub fn create_router<P>(state: AppState<P>) -> Router
where
    P: JourneyPlanner + 'static,
{
    Router::new()
        .route("/", post(home_time::<P>))
        .route("/home", post(home_time::<P>))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Summarize the trips home for a JSON trip request.
async fn home_time<P>(
    State(state): State<AppState<P>>,
    body: Result<Json<TripRequest>, JsonRejection>,
) -> Result<Json<TravelSummary>, AppError>
where
    P: JourneyPlanner + 'static,
{
    let Json(request) = body.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;

    let summary = state.home.lookup(&request).await?;
    Ok(Json(summary))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<LookupError> for AppError {
    fn from(e: LookupError) -> Self {
        let message = e.to_string();
        match e.kind() {
            ErrorKind::InvalidCoordinate => AppError::BadRequest { message },
            ErrorKind::NoTripsFound => AppError::NotFound { message },
            ErrorKind::TransportFailure | ErrorKind::ResponseDecodeFailed => {
                AppError::BadGateway { message }
            }
            ErrorKind::TimezoneUnavailable | ErrorKind::RequestConstructionFailed => {
                AppError::Internal { message }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(status = status.as_u16(), %message, "request failed");
        } else {
            warn!(status = status.as_u16(), %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
