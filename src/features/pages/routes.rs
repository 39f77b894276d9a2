use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::pages::handlers;
use crate::features::resorts::ResortService;

/// Create routes for the HTML pages
pub fn routes(service: Arc<ResortService>) -> Router {
    Router::new()
        .route("/", get(handlers::listing_page))
        .route("/resort/{slug}", get(handlers::resort_page))
        .with_state(service)
}
