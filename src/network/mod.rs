//! Network Module
//!
//! HTTP routing and serving.
//!
//! ## Architecture
//! - axum router over a shared `Arc<CustomerStore>`
//! - Store errors mapped to status codes in `handlers`
//! - Paths outside the API served from the static directory

mod handlers;
mod routes;
mod server;

pub use handlers::{ApiError, AppState};
pub use routes::create_router;
pub use server::Server;
