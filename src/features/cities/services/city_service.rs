use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::cities::dtos::CityResponseDto;
use crate::modules::catalog_store::CatalogLoader;
use crate::shared::validation::is_valid_slug;

/// Service for departure city lookups
pub struct CityService {
    loader: Arc<dyn CatalogLoader>,
}

impl CityService {
    pub fn new(loader: Arc<dyn CatalogLoader>) -> Self {
        Self { loader }
    }

    /// List all cities ordered by name
    pub async fn list(&self) -> Result<Vec<CityResponseDto>> {
        let cities = self.loader.list_cities().await?;
        Ok(cities.into_iter().map(Into::into).collect())
    }

    /// Get city by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<CityResponseDto> {
        if !is_valid_slug(slug) {
            return Err(AppError::BadRequest(format!("Invalid city slug '{}'", slug)));
        }

        let city = self.loader.find_city_by_slug(slug).await?;
        Ok(city.into())
    }
}
