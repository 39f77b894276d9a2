use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::{
    attach_profiles, split_city_rows, CityResortRow, ResortRow, RouteRow, TravelProfileRow,
};
use super::{CatalogLoader, LoaderError, LoaderResult};
use crate::features::cities::models::City;
use crate::features::resorts::models::{CityRoute, Resort, ResortDetail, ResortEntry, TravelProfile};

const RESORT_COLUMNS: &str = r#"
    r.id::int8 AS id,
    r.name,
    r.slug,
    r.region,
    r.runs_count::int4 AS runs_count,
    r.max_run_length_m::int4 AS max_run_length_m,
    r.vertical_drop_m::int4 AS vertical_drop_m,
    r.has_chairlift,
    r.has_gondola,
    r.has_draglift,
    r.kids_friendly,
    r.night_skiing,
    r.season_start_month::int4 AS season_start_month,
    r.season_end_month::int4 AS season_end_month,
    r.skipass_from_rub::numeric AS skipass_from_rub
"#;

const PROFILE_COLUMNS: &str = r#"
    tp.resort_id::int8 AS resort_id,
    tp.city_id::int8 AS city_id,
    tp.car_distance_km::int4 AS car_distance_km,
    tp.car_hours_min::float8 AS car_hours_min,
    tp.car_hours_max::float8 AS car_hours_max,
    tp.notes
"#;

/// [`CatalogLoader`] backed by the Postgres catalog tables
pub struct PgCatalogLoader {
    pool: PgPool,
}

impl PgCatalogLoader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogLoader for PgCatalogLoader {
    async fn list_cities(&self) -> LoaderResult<Vec<City>> {
        let cities = sqlx::query_as::<_, City>(
            r#"
            SELECT id::int8 AS id, name, slug
            FROM cities
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list cities: {:?}", e);
            LoaderError::from(e)
        })?;

        Ok(cities)
    }

    async fn find_city_by_slug(&self, slug: &str) -> LoaderResult<City> {
        sqlx::query_as::<_, City>(
            r#"
            SELECT id::int8 AS id, name, slug
            FROM cities
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch city by slug {}: {:?}", slug, e);
            LoaderError::from(e)
        })?
        .ok_or_else(|| LoaderError::NotFound(format!("City '{}' not found", slug)))
    }

    async fn list_resorts_with_profiles(&self) -> LoaderResult<Vec<ResortEntry>> {
        let resort_sql = format!("SELECT {} FROM resorts r ORDER BY r.name ASC", RESORT_COLUMNS);
        let profile_sql = format!(
            "SELECT {} FROM travel_profiles tp ORDER BY tp.resort_id, tp.city_id",
            PROFILE_COLUMNS
        );

        let resorts_query = sqlx::query_as::<_, ResortRow>(&resort_sql).fetch_all(&self.pool);
        let profiles_query =
            sqlx::query_as::<_, TravelProfileRow>(&profile_sql).fetch_all(&self.pool);

        let (resort_rows, profile_rows) = futures::try_join!(resorts_query, profiles_query)
            .map_err(|e| {
                tracing::error!("Failed to list resorts with travel profiles: {:?}", e);
                LoaderError::from(e)
            })?;

        let resorts: Vec<Resort> = resort_rows.into_iter().map(Resort::from).collect();
        let profiles: Vec<TravelProfile> =
            profile_rows.into_iter().map(TravelProfile::from).collect();

        Ok(attach_profiles(resorts, profiles))
    }

    async fn list_resorts_for_city(&self, slug: &str) -> LoaderResult<(City, Vec<ResortEntry>)> {
        let city = self.find_city_by_slug(slug).await?;

        let sql = format!(
            r#"
            SELECT {}, {}
            FROM travel_profiles tp
            JOIN resorts r ON r.id = tp.resort_id
            WHERE tp.city_id = $1
            ORDER BY r.name ASC
            "#,
            RESORT_COLUMNS, PROFILE_COLUMNS
        );

        let rows = sqlx::query_as::<_, CityResortRow>(&sql)
            .bind(city.id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list resorts for city {}: {:?}", slug, e);
                LoaderError::from(e)
            })?;

        let (resorts, profiles) = split_city_rows(rows);
        Ok((city, attach_profiles(resorts, profiles)))
    }

    async fn find_resort_by_slug(&self, slug: &str) -> LoaderResult<ResortDetail> {
        let resort_sql = format!("SELECT {} FROM resorts r WHERE r.slug = $1", RESORT_COLUMNS);

        let resort = sqlx::query_as::<_, ResortRow>(&resort_sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch resort by slug {}: {:?}", slug, e);
                LoaderError::from(e)
            })?
            .map(Resort::from)
            .ok_or_else(|| LoaderError::NotFound(format!("Resort '{}' not found", slug)))?;

        let routes_sql = format!(
            r#"
            SELECT {}, c.name AS city_name, c.slug AS city_slug
            FROM travel_profiles tp
            JOIN cities c ON c.id = tp.city_id
            WHERE tp.resort_id = $1
            ORDER BY c.name ASC
            "#,
            PROFILE_COLUMNS
        );

        let routes: Vec<CityRoute> = sqlx::query_as::<_, RouteRow>(&routes_sql)
            .bind(resort.id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch travel profiles for resort {}: {:?}", slug, e);
                LoaderError::from(e)
            })?
            .into_iter()
            .map(CityRoute::from)
            .collect();

        Ok(ResortDetail { resort, routes })
    }
}
