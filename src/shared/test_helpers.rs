use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;

use crate::core::config::ListingConfig;
use crate::features::cities::models::City;
use crate::features::resorts::models::{
    CityRoute, Resort, ResortDetail, ResortEntry, TravelProfile,
};
use crate::modules::catalog_store::{CatalogLoader, LoaderError, LoaderResult};

pub const MOSCOW_ID: i64 = 5;
pub const NIZHNY_ID: i64 = 6;
pub const KAZAN_ID: i64 = 7;

/// [`CatalogLoader`] over fixed in-memory data, mirroring the Postgres ordering rules
pub struct InMemoryCatalogLoader {
    cities: Vec<City>,
    entries: Vec<ResortEntry>,
    available: bool,
}

impl InMemoryCatalogLoader {
    pub fn new(cities: Vec<City>, entries: Vec<ResortEntry>) -> Self {
        Self {
            cities,
            entries,
            available: true,
        }
    }

    /// Loader whose every call fails as an unreachable store would
    pub fn unavailable() -> Self {
        Self {
            cities: Vec::new(),
            entries: Vec::new(),
            available: false,
        }
    }

    fn check(&self) -> LoaderResult<()> {
        if self.available {
            Ok(())
        } else {
            Err(LoaderError::DataUnavailable("connection refused".to_string()))
        }
    }
}

#[async_trait]
impl CatalogLoader for InMemoryCatalogLoader {
    async fn list_cities(&self) -> LoaderResult<Vec<City>> {
        self.check()?;
        let mut cities = self.cities.clone();
        cities.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cities)
    }

    async fn find_city_by_slug(&self, slug: &str) -> LoaderResult<City> {
        self.check()?;
        self.cities
            .iter()
            .find(|c| c.slug == slug)
            .cloned()
            .ok_or_else(|| LoaderError::NotFound(format!("City '{}' not found", slug)))
    }

    async fn list_resorts_with_profiles(&self) -> LoaderResult<Vec<ResortEntry>> {
        self.check()?;
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| a.resort.name.cmp(&b.resort.name));
        Ok(entries)
    }

    async fn list_resorts_for_city(&self, slug: &str) -> LoaderResult<(City, Vec<ResortEntry>)> {
        let city = self.find_city_by_slug(slug).await?;
        let entries = self
            .list_resorts_with_profiles()
            .await?
            .into_iter()
            .filter_map(|entry| {
                let profiles: Vec<TravelProfile> = entry
                    .profiles
                    .into_iter()
                    .filter(|p| p.city_id == city.id)
                    .collect();
                (!profiles.is_empty()).then(|| ResortEntry::new(entry.resort, profiles))
            })
            .collect();
        Ok((city, entries))
    }

    async fn find_resort_by_slug(&self, slug: &str) -> LoaderResult<ResortDetail> {
        self.check()?;
        let entry = self
            .entries
            .iter()
            .find(|e| e.resort.slug == slug)
            .cloned()
            .ok_or_else(|| LoaderError::NotFound(format!("Resort '{}' not found", slug)))?;

        let mut routes: Vec<CityRoute> = entry
            .profiles
            .into_iter()
            .filter_map(|profile| {
                let city = self.cities.iter().find(|c| c.id == profile.city_id)?.clone();
                Some(CityRoute { city, profile })
            })
            .collect();
        routes.sort_by(|a, b| a.city.name.cmp(&b.city.name));

        Ok(ResortDetail {
            resort: entry.resort,
            routes,
        })
    }
}

pub fn city(id: i64, name: &str, slug: &str) -> City {
    City {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
    }
}

pub fn resort(id: i64, name: &str, slug: &str) -> Resort {
    Resort {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        region: Some("Moscow Oblast".to_string()),
        runs_count: Some(8),
        max_run_length_m: Some(700),
        vertical_drop_m: Some(90),
        has_chairlift: true,
        has_gondola: false,
        has_draglift: true,
        kids_friendly: true,
        night_skiing: true,
        season_start_month: Some(12),
        season_end_month: Some(3),
        skipass_from_rub: None,
    }
}

pub fn profile(resort_id: i64, city_id: i64, min: f64, max: f64) -> TravelProfile {
    TravelProfile {
        resort_id,
        city_id,
        car_distance_km: Some((min * 80.0) as u32),
        car_hours_min: Some(min),
        car_hours_max: Some(max),
        notes: None,
    }
}

/// Three cities and four resorts; "gubakha" has no Moscow profile
pub fn sample_loader() -> InMemoryCatalogLoader {
    let cities = vec![
        city(MOSCOW_ID, "Moscow", "moscow"),
        city(NIZHNY_ID, "Nizhny Novgorod", "nizhny-novgorod"),
        city(KAZAN_ID, "Kazan", "kazan"),
    ];

    let mut big_wood = resort(3, "Big Wood", "big-wood");
    big_wood.region = Some("Murmansk Oblast".to_string());
    big_wood.has_gondola = true;
    big_wood.has_draglift = false;
    big_wood.runs_count = Some(30);
    big_wood.max_run_length_m = Some(3000);
    big_wood.vertical_drop_m = Some(650);

    let mut gubakha = resort(4, "Gubakha", "gubakha");
    gubakha.region = Some("Perm Krai".to_string());
    gubakha.night_skiing = false;

    let sorochany = resort(1, "Sorochany", "sorochany");

    let mut volen = resort(2, "Volen", "volen");
    volen.kids_friendly = false;
    volen.max_run_length_m = None;

    let entries = vec![
        ResortEntry::new(
            volen,
            vec![profile(2, MOSCOW_ID, 1.5, 2.5), profile(2, NIZHNY_ID, 6.5, 7.5)],
        ),
        ResortEntry::new(
            sorochany,
            vec![profile(1, MOSCOW_ID, 1.0, 1.5), profile(1, NIZHNY_ID, 6.0, 7.0)],
        ),
        ResortEntry::new(big_wood, vec![profile(3, MOSCOW_ID, 3.0, 5.0)]),
        ResortEntry::new(gubakha, vec![profile(4, KAZAN_ID, 8.0, 9.0)]),
    ];

    InMemoryCatalogLoader::new(cities, entries)
}

/// Application router over `loader`, without the HTTP middleware stack
pub fn test_router(loader: InMemoryCatalogLoader, listing: ListingConfig) -> Router {
    crate::build_router(Arc::new(loader), listing)
}
