//! Inbox endpoints:
//! - `GET /messages`: newest first
//! - `GET /mark_read/:index`: mark by position in the current list
//! - `GET /messages/:id/read`: mark by message id
//!
//! Both mark routes redirect to `/messages` with 302 whether or not a
//! message matched.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::db::repository;
use crate::messages::{self, MarkReadOutcome};
use crate::views;
use crate::web::context::AppContext;
use crate::web::error::PageError;

pub const MESSAGES_PATH: &str = "/messages";

pub async fn list(State(ctx): State<AppContext>) -> Result<Html<String>, PageError> {
    let conn = ctx.db.acquire()?;
    let patient_name = repository::fetch_patient_name(&conn, ctx.patient_id)?;
    let messages = repository::list_messages(&conn, ctx.patient_id)?;
    drop(conn);

    Ok(Html(views::render_messages(&patient_name, &messages)))
}

pub async fn mark_read_at_position(
    State(ctx): State<AppContext>,
    Path(index): Path<usize>,
) -> Result<Response, PageError> {
    let mut conn = ctx.db.acquire()?;
    let outcome = messages::mark_read_at_position(&mut conn, ctx.patient_id, index)?;
    drop(conn);

    log_outcome(outcome);
    Ok(redirect_to_messages())
}

pub async fn mark_read_by_id(
    State(ctx): State<AppContext>,
    Path(message_id): Path<i64>,
) -> Result<Response, PageError> {
    let conn = ctx.db.acquire()?;
    let outcome = messages::mark_read_by_id(&conn, ctx.patient_id, message_id)?;
    drop(conn);

    log_outcome(outcome);
    Ok(redirect_to_messages())
}

fn log_outcome(outcome: MarkReadOutcome) {
    match outcome {
        MarkReadOutcome::Marked { message_id } => {
            tracing::info!(message_id, "Message marked as read")
        }
        MarkReadOutcome::NoMatch => tracing::debug!("Mark-read matched no message"),
    }
}

/// 302 Found, as browsers expect after following a plain link.
fn redirect_to_messages() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, MESSAGES_PATH)]).into_response()
}
