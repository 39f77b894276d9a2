use std::sync::Arc;

use validator::Validate;

use crate::core::config::ListingConfig;
use crate::core::error::{AppError, Result};
use crate::features::cities::dtos::CityResponseDto;
use crate::features::cities::models::City;
use crate::features::resorts::dtos::{
    ResortCardDto, ResortDetailDto, ResortListingDto, ResortListingQuery,
};
use crate::features::resorts::models::ResortEntry;
use crate::features::resorts::services::FilterEngine;
use crate::modules::catalog_store::{CatalogLoader, LoaderError};
use crate::shared::constants::{CITIES_UNAVAILABLE_MESSAGE, NO_CITY, RESORTS_UNAVAILABLE_MESSAGE};
use crate::shared::validation::is_valid_slug;

/// Service behind the resort listing and detail views
pub struct ResortService {
    loader: Arc<dyn CatalogLoader>,
    engine: FilterEngine,
    config: ListingConfig,
}

impl ResortService {
    pub fn new(loader: Arc<dyn CatalogLoader>, config: ListingConfig) -> Self {
        Self {
            loader,
            engine: FilterEngine::new(config.hours_bound),
            config,
        }
    }

    /// Build the listing view.
    ///
    /// Only malformed criteria are errors. Data that cannot be loaded yields an
    /// empty resort list with an inline notice.
    pub async fn listing(&self, query: &ResortListingQuery) -> Result<ResortListingDto> {
        self.validate_query(query)?;
        let criteria = query.criteria();
        let selection = self.city_selection(query.city.as_deref());

        let (cities, resorts) =
            futures::join!(self.loader.list_cities(), self.load_resorts(selection.as_deref()));

        let (cities, cities_error) = match cities {
            Ok(cities) => (cities, None),
            Err(e) => {
                tracing::warn!("City list unavailable for listing: {}", e);
                (Vec::new(), Some(CITIES_UNAVAILABLE_MESSAGE.to_string()))
            }
        };

        let (selected_city, entries, resorts_error) = match resorts {
            Ok((city, entries)) => (city, entries, None),
            Err(e) => {
                tracing::warn!("Resorts unavailable for listing: {}", e);
                (None, Vec::new(), Some(notice_for(&e)))
            }
        };

        let city_id = selected_city.as_ref().map(|c| c.id);
        let matched = self.engine.apply(&entries, city_id, &criteria);

        let cards: Vec<ResortCardDto> = matched
            .iter()
            .map(|entry| {
                let travel = city_id.and_then(|id| FilterEngine::matching_profile(entry, id));
                ResortCardDto::from_entry(entry, travel)
            })
            .collect();

        Ok(ResortListingDto {
            cities: cities.into_iter().map(Into::into).collect(),
            selected_city: selected_city.map(CityResponseDto::from),
            criteria,
            hours_bound: self.engine.bound(),
            total: entries.len(),
            matched: cards.len(),
            resorts: cards,
            error: resorts_error.or(cities_error),
        })
    }

    /// Get the detail view of a resort by slug
    pub async fn detail(&self, slug: &str) -> Result<ResortDetailDto> {
        if !is_valid_slug(slug) {
            return Err(AppError::NotFound(format!("Resort '{}' not found", slug)));
        }

        let detail = self.loader.find_resort_by_slug(slug).await?;
        Ok(ResortDetailDto::new(detail.resort, detail.routes))
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    fn validate_query(&self, query: &ResortListingQuery) -> Result<()> {
        query
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if let Some(max_hours) = query.max_hours {
            if !max_hours.is_finite() || max_hours > self.config.max_hours_limit {
                return Err(AppError::Validation(format!(
                    "maxHours must be a number between 0 and {}",
                    self.config.max_hours_limit
                )));
            }
        }

        Ok(())
    }

    /// Absent `city` falls back to the configured default; an empty one clears the selection
    fn city_selection(&self, requested: Option<&str>) -> Option<String> {
        match requested.map(str::trim) {
            None => self.config.default_city_slug.clone(),
            Some(NO_CITY) => None,
            Some(slug) => Some(slug.to_string()),
        }
    }

    async fn load_resorts(
        &self,
        city_slug: Option<&str>,
    ) -> std::result::Result<(Option<City>, Vec<ResortEntry>), LoaderError> {
        match city_slug {
            Some(slug) if !is_valid_slug(slug) => {
                Err(LoaderError::NotFound(format!("City '{}' not found", slug)))
            }
            Some(slug) => {
                let (city, entries) = self.loader.list_resorts_for_city(slug).await?;
                Ok((Some(city), entries))
            }
            None => Ok((None, self.loader.list_resorts_with_profiles().await?)),
        }
    }
}

fn notice_for(err: &LoaderError) -> String {
    match err {
        LoaderError::NotFound(msg) => msg.clone(),
        LoaderError::DataUnavailable(_) => RESORTS_UNAVAILABLE_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::resorts::services::HoursBound;
    use crate::shared::test_helpers::{sample_loader, InMemoryCatalogLoader, MOSCOW_ID};

    fn service(loader: InMemoryCatalogLoader, config: ListingConfig) -> ResortService {
        ResortService::new(Arc::new(loader), config)
    }

    fn slugs(listing: &ResortListingDto) -> Vec<&str> {
        listing.resorts.iter().map(|r| r.slug.as_str()).collect()
    }

    #[tokio::test]
    async fn test_listing_uses_default_city() {
        let svc = service(sample_loader(), ListingConfig::default());
        let listing = svc.listing(&ResortListingQuery::default()).await.unwrap();

        assert_eq!(listing.selected_city.as_ref().map(|c| c.id), Some(MOSCOW_ID));
        assert_eq!(listing.error, None);
        assert!(listing.resorts.iter().all(|r| r.travel.is_some()));
        assert_eq!(listing.matched, listing.resorts.len());
    }

    #[tokio::test]
    async fn test_listing_empty_city_disables_city_stage() {
        let svc = service(sample_loader(), ListingConfig::default());
        let query = ResortListingQuery {
            city: Some(String::new()),
            max_hours: Some(1.0),
            ..Default::default()
        };
        let listing = svc.listing(&query).await.unwrap();

        assert!(listing.selected_city.is_none());
        assert_eq!(listing.total, listing.matched);
        assert!(listing.resorts.iter().all(|r| r.travel.is_none()));
    }

    #[tokio::test]
    async fn test_listing_filters_by_travel_time() {
        let svc = service(sample_loader(), ListingConfig::default());
        let query = ResortListingQuery {
            city: Some("moscow".to_string()),
            max_hours: Some(2.0),
            ..Default::default()
        };
        let listing = svc.listing(&query).await.unwrap();

        assert_eq!(slugs(&listing), vec!["sorochany", "volen"]);
        assert!(listing.total > listing.matched);
    }

    #[tokio::test]
    async fn test_listing_bound_comes_from_config() {
        let config = ListingConfig {
            hours_bound: HoursBound::Max,
            ..ListingConfig::default()
        };
        let svc = service(sample_loader(), config);
        let query = ResortListingQuery {
            city: Some("moscow".to_string()),
            max_hours: Some(2.0),
            ..Default::default()
        };
        let listing = svc.listing(&query).await.unwrap();

        assert_eq!(listing.hours_bound, HoursBound::Max);
        assert_eq!(slugs(&listing), vec!["sorochany"]);
    }

    #[tokio::test]
    async fn test_listing_unknown_city_is_inline_error() {
        let svc = service(sample_loader(), ListingConfig::default());
        let query = ResortListingQuery {
            city: Some("atlantis".to_string()),
            ..Default::default()
        };
        let listing = svc.listing(&query).await.unwrap();

        assert!(listing.resorts.is_empty());
        assert_eq!(listing.error.as_deref(), Some("City 'atlantis' not found"));
        assert!(!listing.cities.is_empty());
    }

    #[tokio::test]
    async fn test_listing_malformed_city_slug_never_reaches_store() {
        let svc = service(sample_loader(), ListingConfig::default());
        let query = ResortListingQuery {
            city: Some("../Moscow".to_string()),
            ..Default::default()
        };
        let listing = svc.listing(&query).await.unwrap();

        assert!(listing.resorts.is_empty());
        assert!(listing.error.is_some());
    }

    #[tokio::test]
    async fn test_listing_store_down_is_inline_error() {
        let svc = service(InMemoryCatalogLoader::unavailable(), ListingConfig::default());
        let listing = svc.listing(&ResortListingQuery::default()).await.unwrap();

        assert!(listing.resorts.is_empty());
        assert!(listing.cities.is_empty());
        assert_eq!(listing.error.as_deref(), Some(RESORTS_UNAVAILABLE_MESSAGE));
    }

    #[tokio::test]
    async fn test_listing_rejects_out_of_range_hours() {
        let svc = service(sample_loader(), ListingConfig::default());

        for max_hours in [0.0, -1.0, 31.0, f64::NAN] {
            let query = ResortListingQuery {
                max_hours: Some(max_hours),
                ..Default::default()
            };
            let err = svc.listing(&query).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn test_detail_found_and_missing() {
        let svc = service(sample_loader(), ListingConfig::default());

        let detail = svc.detail("volen").await.unwrap();
        assert_eq!(detail.name, "Volen");
        assert_eq!(detail.routes.len(), 2);
        assert_eq!(detail.routes[0].city.slug, "moscow");

        let err = svc.detail("atlantis").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = svc.detail("Not A Slug").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_detail_store_down_is_unavailable() {
        let svc = service(InMemoryCatalogLoader::unavailable(), ListingConfig::default());
        let err = svc.detail("volen").await.unwrap_err();
        assert!(matches!(err, AppError::ServiceUnavailable(_)));
    }
}
