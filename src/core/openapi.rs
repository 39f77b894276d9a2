use utoipa::{Modify, OpenApi};

use crate::features::cities::{dtos as cities_dtos, handlers as cities_handlers};
use crate::features::resorts::{
    dtos as resorts_dtos, handlers as resorts_handlers, services as resorts_services,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Cities
        cities_handlers::list_cities,
        cities_handlers::get_city,
        // Resorts
        resorts_handlers::list_resorts,
        resorts_handlers::get_resort,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Cities
            cities_dtos::CityResponseDto,
            ApiResponse<Vec<cities_dtos::CityResponseDto>>,
            ApiResponse<cities_dtos::CityResponseDto>,
            // Resorts
            resorts_services::HoursBound,
            resorts_services::FilterCriteria,
            resorts_dtos::Amenity,
            resorts_dtos::AmenityBadgeDto,
            resorts_dtos::TravelSummaryDto,
            resorts_dtos::ResortCardDto,
            resorts_dtos::ResortListingDto,
            resorts_dtos::SeasonDto,
            resorts_dtos::RouteDto,
            resorts_dtos::ResortDetailDto,
            ApiResponse<resorts_dtos::ResortListingDto>,
            ApiResponse<resorts_dtos::ResortDetailDto>,
        )
    ),
    tags(
        (name = "cities", description = "Departure cities"),
        (name = "resorts", description = "Ski resorts with travel times from departure cities"),
    ),
    info(
        title = "SkiTrip API",
        version = "0.1.0",
        description = "API documentation for SkiTrip",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
