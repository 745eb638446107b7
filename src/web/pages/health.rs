//! `GET /health`: liveness and store reachability.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::web::context::AppContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// Always 200; `database` reports whether a connection could be opened.
pub async fn check(State(ctx): State<AppContext>) -> Json<HealthResponse> {
    let database = match ctx.db.acquire() {
        Ok(_) => "reachable",
        Err(_) => "unreachable",
    };

    Json(HealthResponse {
        status: "ok",
        version: crate::config::APP_VERSION,
        database,
    })
}
