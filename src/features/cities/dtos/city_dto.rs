use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::cities::models::City;

/// Response DTO for city data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityResponseDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<City> for CityResponseDto {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            name: city.name,
            slug: city.slug,
        }
    }
}
