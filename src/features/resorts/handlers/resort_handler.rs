use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::resorts::dtos::{ResortDetailDto, ResortListingDto, ResortListingQuery};
use crate::features::resorts::services::ResortService;
use crate::shared::types::{ApiResponse, Meta};

/// List resorts matching the filter criteria
///
/// Data that cannot be loaded (unknown city, unavailable store) is reported in
/// `data.error` next to an empty list rather than as an HTTP error.
#[utoipa::path(
    get,
    path = "/api/resorts",
    params(ResortListingQuery),
    responses(
        (status = 200, description = "Listing view", body = ApiResponse<ResortListingDto>),
        (status = 400, description = "Invalid filter criteria")
    ),
    tag = "resorts"
)]
pub async fn list_resorts(
    State(service): State<Arc<ResortService>>,
    AppQuery(query): AppQuery<ResortListingQuery>,
) -> Result<Json<ApiResponse<ResortListingDto>>> {
    let listing = service.listing(&query).await?;
    let meta = Meta::with_total(listing.matched);
    let message = listing.error.clone();
    Ok(Json(ApiResponse::success(Some(listing), message, Some(meta))))
}

/// Get a resort by slug
#[utoipa::path(
    get,
    path = "/api/resorts/{slug}",
    params(
        ("slug" = String, Path, description = "Resort slug")
    ),
    responses(
        (status = 200, description = "Resort details", body = ApiResponse<ResortDetailDto>),
        (status = 404, description = "Resort not found"),
        (status = 503, description = "Catalog store unavailable")
    ),
    tag = "resorts"
)]
pub async fn get_resort(
    State(service): State<Arc<ResortService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<ResortDetailDto>>> {
    let resort = service.detail(&slug).await?;
    Ok(Json(ApiResponse::success(Some(resort), None, None)))
}
