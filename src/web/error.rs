//! Page-level errors. Every variant becomes a generic 500 page.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::db::DatabaseError;
use crate::views;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Database unavailable: {0}")]
    Unavailable(#[source] DatabaseError),
    #[error("Query failed: {0}")]
    Query(#[source] DatabaseError),
}

impl From<DatabaseError> for PageError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Connectivity { .. } => PageError::Unavailable(err),
            other => PageError::Query(other),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        // Details go to the log only, never to the client.
        match &self {
            PageError::Unavailable(e) => tracing::error!(error = %e, "Store unreachable"),
            PageError::Query(e) => tracing::error!(error = %e, "Page query failed"),
        }
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(views::render_error_page()),
        )
            .into_response()
    }
}
