//! `GET /vitals`: table plus chart series from the same query result.

use axum::extract::State;
use axum::response::Html;

use crate::db::repository;
use crate::views;
use crate::vitals::chart_series;
use crate::web::context::AppContext;
use crate::web::error::PageError;

pub async fn list(State(ctx): State<AppContext>) -> Result<Html<String>, PageError> {
    let conn = ctx.db.acquire()?;
    let patient_name = repository::fetch_patient_name(&conn, ctx.patient_id)?;
    let readings = repository::list_vitals(&conn, ctx.patient_id)?;
    drop(conn);

    let chart = chart_series(&readings);
    Ok(Html(views::render_vitals(&patient_name, &readings, &chart)))
}
