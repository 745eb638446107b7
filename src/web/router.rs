//! Dashboard router.
//!
//! Layers (outermost first): no-store cache header, access log.

use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::web::context::AppContext;
use crate::web::middleware;
use crate::web::pages;

/// Build the dashboard router with all pages mounted at the root.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn dashboard_router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(pages::dashboard::home))
        .route("/appointments", get(pages::appointments::list))
        .route("/vitals", get(pages::vitals::list))
        .route("/medications", get(pages::medications::list))
        .route("/labs", get(pages::labs::list))
        .route("/history", get(pages::history::list))
        .route("/messages", get(pages::messages::list))
        .route(
            "/mark_read/:index",
            get(pages::messages::mark_read_at_position),
        )
        .route("/messages/:id/read", get(pages::messages::mark_read_by_id))
        .route("/health", get(pages::health::check))
        .with_state(ctx)
        .layer(axum::middleware::from_fn(middleware::access_log))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}
