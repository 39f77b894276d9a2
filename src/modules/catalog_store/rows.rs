//! Raw row shapes and their conversion into validated domain types.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::features::cities::models::City;
use crate::features::resorts::models::{CityRoute, Resort, ResortEntry, TravelProfile};

#[derive(Debug, Clone, FromRow)]
pub struct ResortRow {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub region: Option<String>,
    pub runs_count: Option<i32>,
    pub max_run_length_m: Option<i32>,
    pub vertical_drop_m: Option<i32>,
    pub has_chairlift: Option<bool>,
    pub has_gondola: Option<bool>,
    pub has_draglift: Option<bool>,
    pub kids_friendly: Option<bool>,
    pub night_skiing: Option<bool>,
    pub season_start_month: Option<i32>,
    pub season_end_month: Option<i32>,
    pub skipass_from_rub: Option<Decimal>,
}

#[derive(Debug, Clone, FromRow)]
pub struct TravelProfileRow {
    pub resort_id: i64,
    pub city_id: i64,
    pub car_distance_km: Option<i32>,
    pub car_hours_min: Option<f64>,
    pub car_hours_max: Option<f64>,
    pub notes: Option<String>,
}

/// Shape (b): one travel profile of the selected city joined to its resort
#[derive(Debug, Clone, FromRow)]
pub struct CityResortRow {
    #[sqlx(flatten)]
    pub resort: ResortRow,
    #[sqlx(flatten)]
    pub profile: TravelProfileRow,
}

/// Detail page: one travel profile joined to its origin city
#[derive(Debug, Clone, FromRow)]
pub struct RouteRow {
    #[sqlx(flatten)]
    pub profile: TravelProfileRow,
    pub city_name: String,
    pub city_slug: String,
}

impl From<ResortRow> for Resort {
    fn from(row: ResortRow) -> Self {
        let slug = row.slug;
        Resort {
            id: row.id,
            runs_count: non_negative(&slug, "runs_count", row.runs_count),
            max_run_length_m: non_negative(&slug, "max_run_length_m", row.max_run_length_m),
            vertical_drop_m: non_negative(&slug, "vertical_drop_m", row.vertical_drop_m),
            has_chairlift: row.has_chairlift.unwrap_or(false),
            has_gondola: row.has_gondola.unwrap_or(false),
            has_draglift: row.has_draglift.unwrap_or(false),
            kids_friendly: row.kids_friendly.unwrap_or(false),
            night_skiing: row.night_skiing.unwrap_or(false),
            season_start_month: month(&slug, "season_start_month", row.season_start_month),
            season_end_month: month(&slug, "season_end_month", row.season_end_month),
            skipass_from_rub: row.skipass_from_rub.filter(|price| {
                let valid = !price.is_sign_negative();
                if !valid {
                    tracing::warn!("Resort '{}': ignoring negative skipass_from_rub {}", slug, price);
                }
                valid
            }),
            name: row.name,
            region: row.region.filter(|r| !r.trim().is_empty()),
            slug,
        }
    }
}

impl From<TravelProfileRow> for TravelProfile {
    fn from(row: TravelProfileRow) -> Self {
        let context = format!("profile resort={} city={}", row.resort_id, row.city_id);
        let car_hours_min = hours(&context, "car_hours_min", row.car_hours_min);
        let car_hours_max = hours(&context, "car_hours_max", row.car_hours_max);

        if let (Some(min), Some(max)) = (car_hours_min, car_hours_max) {
            if min > max {
                tracing::debug!("{}: car_hours_min {} exceeds car_hours_max {}", context, min, max);
            }
        }

        TravelProfile {
            resort_id: row.resort_id,
            city_id: row.city_id,
            car_distance_km: non_negative(&context, "car_distance_km", row.car_distance_km),
            car_hours_min,
            car_hours_max,
            notes: row.notes.filter(|n| !n.trim().is_empty()),
        }
    }
}

impl From<RouteRow> for CityRoute {
    fn from(row: RouteRow) -> Self {
        let profile = TravelProfile::from(row.profile);
        CityRoute {
            city: City {
                id: profile.city_id,
                name: row.city_name,
                slug: row.city_slug,
            },
            profile,
        }
    }
}

/// Groups profiles under their resorts, preserving resort order.
///
/// A second profile for an already seen (resort, city) pair is dropped.
/// Profiles pointing at resorts not in `resorts` are ignored.
pub fn attach_profiles(resorts: Vec<Resort>, profiles: Vec<TravelProfile>) -> Vec<ResortEntry> {
    let mut by_resort: HashMap<i64, Vec<TravelProfile>> = HashMap::new();
    let mut seen: HashSet<(i64, i64)> = HashSet::new();

    for profile in profiles {
        if !seen.insert((profile.resort_id, profile.city_id)) {
            tracing::warn!(
                "Duplicate travel profile for resort={} city={}, keeping the first",
                profile.resort_id,
                profile.city_id
            );
            continue;
        }
        by_resort.entry(profile.resort_id).or_default().push(profile);
    }

    resorts
        .into_iter()
        .map(|resort| {
            let profiles = by_resort.remove(&resort.id).unwrap_or_default();
            ResortEntry::new(resort, profiles)
        })
        .collect()
}

/// Splits shape (b) rows into distinct resorts (first occurrence order) and their profiles
pub fn split_city_rows(rows: Vec<CityResortRow>) -> (Vec<Resort>, Vec<TravelProfile>) {
    let mut seen = HashSet::new();
    let mut resorts = Vec::new();
    let mut profiles = Vec::with_capacity(rows.len());

    for row in rows {
        if seen.insert(row.resort.id) {
            resorts.push(Resort::from(row.resort));
        }
        profiles.push(TravelProfile::from(row.profile));
    }

    (resorts, profiles)
}

fn non_negative(context: &str, field: &str, value: Option<i32>) -> Option<u32> {
    let value = value?;
    match u32::try_from(value) {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("{}: ignoring negative {} ({})", context, field, value);
            None
        }
    }
}

fn month(context: &str, field: &str, value: Option<i32>) -> Option<u8> {
    let value = value?;
    match u8::try_from(value) {
        Ok(m) if (1..=12).contains(&m) => Some(m),
        _ => {
            tracing::warn!("{}: ignoring out-of-range {} ({})", context, field, value);
            None
        }
    }
}

fn hours(context: &str, field: &str, value: Option<f64>) -> Option<f64> {
    let value = value?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        tracing::warn!("{}: ignoring invalid {} ({})", context, field, value);
        None
    }
}
