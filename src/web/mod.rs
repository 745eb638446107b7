//! HTTP surface: router, page handlers, error mapping, server lifecycle.
//!
//! Every handler acquires its own connection from the shared
//! [`AppContext`] and drops it before the response is returned.

pub mod context;
pub mod error;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod server;

pub use context::AppContext;
pub use router::dashboard_router;
pub use server::{start_server_on, DashboardServer, ServerError};
