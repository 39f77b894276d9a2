use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::cities::handlers;
use crate::features::cities::services::CityService;

/// Create routes for the cities feature
pub fn routes(service: Arc<CityService>) -> Router {
    Router::new()
        .route("/api/cities", get(handlers::list_cities))
        .route("/api/cities/{slug}", get(handlers::get_city))
        .with_state(service)
}
