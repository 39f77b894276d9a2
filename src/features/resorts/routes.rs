use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::resorts::handlers;
use crate::features::resorts::services::ResortService;

/// Create routes for the resorts feature
pub fn routes(service: Arc<ResortService>) -> Router {
    Router::new()
        .route("/api/resorts", get(handlers::list_resorts))
        .route("/api/resorts/{slug}", get(handlers::get_resort))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::core::config::ListingConfig;
    use crate::shared::constants::RESORTS_UNAVAILABLE_MESSAGE;
    use crate::shared::test_helpers::{sample_loader, test_router, InMemoryCatalogLoader};

    fn server(loader: InMemoryCatalogLoader) -> TestServer {
        TestServer::new(test_router(loader, ListingConfig::default())).unwrap()
    }

    fn slugs(body: &Value) -> Vec<String> {
        body["data"]["resorts"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["slug"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_list_resorts_applies_query_criteria() {
        let server = server(sample_loader());
        let response = server
            .get("/api/resorts")
            .add_query_param("city", "moscow")
            .add_query_param("maxHours", "2")
            .add_query_param("onlyComfortLifts", "true")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(slugs(&body), vec!["sorochany", "volen"]);
        assert_eq!(body["meta"]["total"], 2);
        assert_eq!(body["data"]["selectedCity"]["slug"], "moscow");
        assert_eq!(body["data"]["hoursBound"], "min");
        assert_eq!(body["data"]["resorts"][0]["travel"]["hoursLabel"], "1–1.5 h");
    }

    #[tokio::test]
    async fn test_list_resorts_form_style_empty_values_are_neutral() {
        let server = server(sample_loader());
        let response = server
            .get("/api/resorts?city=&maxHours=&minRuns=&minRunLength=&minVerticalDrop=")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body["data"]["selectedCity"].is_null());
        assert_eq!(slugs(&body), vec!["big-wood", "gubakha", "sorochany", "volen"]);
    }

    #[tokio::test]
    async fn test_list_resorts_unknown_city_reports_inline() {
        let server = server(sample_loader());
        let response = server.get("/api/resorts").add_query_param("city", "atlantis").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "City 'atlantis' not found");
        assert_eq!(body["data"]["resorts"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_list_resorts_store_down_reports_inline() {
        let server = server(InMemoryCatalogLoader::unavailable());
        let response = server.get("/api/resorts").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["error"], RESORTS_UNAVAILABLE_MESSAGE);
    }

    #[tokio::test]
    async fn test_list_resorts_rejects_malformed_criteria() {
        let server = server(sample_loader());

        let response = server.get("/api/resorts").add_query_param("maxHours", "soon").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);

        let response = server.get("/api/resorts").add_query_param("maxHours", "-3").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server.get("/api/resorts").add_query_param("minRuns", "-1").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_resort_detail() {
        let server = server(sample_loader());
        let response = server.get("/api/resorts/volen").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["name"], "Volen");
        assert_eq!(body["data"]["season"]["startMonthName"], "December");
        assert_eq!(body["data"]["badges"].as_array().unwrap().len(), 5);
        assert_eq!(body["data"]["routes"][0]["city"]["slug"], "moscow");
        assert_eq!(body["data"]["routes"][1]["city"]["slug"], "nizhny-novgorod");
    }

    #[tokio::test]
    async fn test_get_resort_errors() {
        let server = server(sample_loader());
        server
            .get("/api/resorts/atlantis")
            .await
            .assert_status(StatusCode::NOT_FOUND);

        let server = self::server(InMemoryCatalogLoader::unavailable());
        server
            .get("/api/resorts/volen")
            .await
            .assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }
}
