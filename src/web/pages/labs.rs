//! `GET /labs`

use axum::extract::State;
use axum::response::Html;

use crate::db::repository;
use crate::views;
use crate::web::context::AppContext;
use crate::web::error::PageError;

pub async fn list(State(ctx): State<AppContext>) -> Result<Html<String>, PageError> {
    let conn = ctx.db.acquire()?;
    let patient_name = repository::fetch_patient_name(&conn, ctx.patient_id)?;
    let labs = repository::list_lab_results(&conn, ctx.patient_id)?;
    drop(conn);

    Ok(Html(views::render_labs(&patient_name, &labs)))
}
