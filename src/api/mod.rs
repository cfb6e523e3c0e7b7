//! HTTP interface - the storefront's read-only JSON API.
//!
//! Responses use the same envelope as the storefront pages expect:
//! `{ "data": ... }` on success and `{ "error": "..." }` on failure.
//! All routes are reads; there is no write endpoint.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

use crate::errors::Error;

/// Product listing and EMI plan endpoints
pub mod products;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Live database connection; `DatabaseConnection` is cheaply cloneable
    pub db: DatabaseConnection,
}

/// Success envelope: `{ "data": ... }`.
#[derive(Debug, Serialize)]
pub struct Data<T> {
    /// The payload of a successful response
    pub data: T,
}

/// Error envelope: `{ "error": "..." }`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Builds the full application router with CORS enabled for the storefront.
pub fn router(db: DatabaseConnection) -> Router {
    Router::new()
        .nest("/api", products::routes())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .with_state(AppState { db })
}

impl Error {
    /// HTTP status the error maps to at the API boundary.
    const fn status_code(&self) -> StatusCode {
        match self {
            Self::ProductNotFound { .. } | Self::PlanNotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidTenure { .. } | Self::InvalidPrice { .. } => StatusCode::BAD_REQUEST,
            Self::Config { .. } | Self::Database(_) | Self::Io(_) | Self::EnvVar(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Infrastructure failures are logged in full but not leaked to clients
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "Request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
