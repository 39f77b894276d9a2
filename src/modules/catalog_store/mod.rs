//! Read-only access to the catalog store (cities, resorts, travel profiles).
//!
//! The store is managed out of band; this module only reads from it and
//! validates every row before it reaches the rest of the service.

mod postgres_loader;
mod rows;

pub use postgres_loader::PgCatalogLoader;

use async_trait::async_trait;
use thiserror::Error;

use crate::features::cities::models::City;
use crate::features::resorts::models::{ResortDetail, ResortEntry};

/// Failures surfaced by a [`CatalogLoader`]. Both kinds are recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoaderError {
    #[error("Catalog data unavailable: {0}")]
    DataUnavailable(String),

    #[error("{0}")]
    NotFound(String),
}

impl From<sqlx::Error> for LoaderError {
    fn from(err: sqlx::Error) -> Self {
        LoaderError::DataUnavailable(err.to_string())
    }
}

pub type LoaderResult<T> = std::result::Result<T, LoaderError>;

#[async_trait]
pub trait CatalogLoader: Send + Sync {
    /// All cities, ordered by name
    async fn list_cities(&self) -> LoaderResult<Vec<City>>;

    async fn find_city_by_slug(&self, slug: &str) -> LoaderResult<City>;

    /// Every resort (ordered by name) with all of its travel profiles, whatever the city
    async fn list_resorts_with_profiles(&self) -> LoaderResult<Vec<ResortEntry>>;

    /// Resolves the city first, then returns only the resorts it has profiles for.
    /// Each entry carries just that city's profile.
    async fn list_resorts_for_city(&self, slug: &str) -> LoaderResult<(City, Vec<ResortEntry>)>;

    async fn find_resort_by_slug(&self, slug: &str) -> LoaderResult<ResortDetail>;
}
