//! Route table

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;

use super::handlers::{self, AppState};

/// Build the application router
///
/// Customer routes live under `config.base_path`; anything else falls
/// through to the static directory.
pub fn create_router(state: Arc<AppState>, config: &Config) -> Router {
    let collection = config.base_path.as_str();
    let item = format!("{}/{{id}}", collection);

    Router::new()
        .route(
            collection,
            get(handlers::list_customers).post(handlers::add_customer),
        )
        .route(
            &item,
            get(handlers::get_customer)
                .patch(handlers::update_customer)
                .put(handlers::update_customer)
                .delete(handlers::delete_customer),
        )
        .route("/load-test-data", post(handlers::load_test_data))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
