use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::cities::dtos::CityResponseDto;
use crate::features::cities::services::CityService;
use crate::shared::types::{ApiResponse, Meta};

/// List departure cities
#[utoipa::path(
    get,
    path = "/api/cities",
    responses(
        (status = 200, description = "Cities ordered by name", body = ApiResponse<Vec<CityResponseDto>>),
        (status = 503, description = "Catalog store unavailable")
    ),
    tag = "cities"
)]
pub async fn list_cities(
    State(service): State<Arc<CityService>>,
) -> Result<Json<ApiResponse<Vec<CityResponseDto>>>> {
    let cities = service.list().await?;
    let meta = Meta::with_total(cities.len());
    Ok(Json(ApiResponse::success(Some(cities), None, Some(meta))))
}

/// Get a city by slug
#[utoipa::path(
    get,
    path = "/api/cities/{slug}",
    params(
        ("slug" = String, Path, description = "City slug")
    ),
    responses(
        (status = 200, description = "City found", body = ApiResponse<CityResponseDto>),
        (status = 400, description = "Malformed slug"),
        (status = 404, description = "City not found"),
        (status = 503, description = "Catalog store unavailable")
    ),
    tag = "cities"
)]
pub async fn get_city(
    State(service): State<Arc<CityService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<CityResponseDto>>> {
    let city = service.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(Some(city), None, None)))
}
