//! `GET /`: summary bundle.

use axum::extract::State;
use axum::response::Html;

use crate::dashboard;
use crate::views;
use crate::web::context::AppContext;
use crate::web::error::PageError;

pub async fn home(State(ctx): State<AppContext>) -> Result<Html<String>, PageError> {
    let mut conn = ctx.db.acquire()?;
    let now = chrono::Local::now().naive_local();
    let summary = dashboard::fetch_summary(&mut conn, ctx.patient_id, now)?;
    drop(conn);

    Ok(Html(views::render_dashboard(&summary)))
}
