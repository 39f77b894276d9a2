use chrono::Month;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::cities::dtos::CityResponseDto;
use crate::features::resorts::models::{CityRoute, Resort, ResortEntry, TravelProfile};
use crate::features::resorts::services::{FilterCriteria, HoursBound};
use crate::shared::types::empty_string_as_none;

// ============================================================================
// Listing query
// ============================================================================

/// Query parameters of the resort listing.
///
/// Absent numbers and unchecked toggles are neutral.
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ResortListingQuery {
    /// Departure city slug. Omit to use the configured default, pass an empty value for no city.
    #[param(example = "moscow")]
    pub city: Option<String>,

    /// Travel-time budget in hours
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(exclusive_min = 0.0, message = "maxHours must be greater than 0"))]
    #[param(value_type = Option<f64>, example = 6)]
    pub max_hours: Option<f64>,

    /// Only resorts with a chairlift or a gondola
    #[serde(default)]
    pub only_comfort_lifts: bool,

    /// Hide resorts that have drag lifts
    #[serde(default)]
    pub exclude_draglift: bool,

    #[serde(default)]
    pub kids_only: bool,

    #[serde(default)]
    pub night_only: bool,

    /// Minimum length of the longest trail, meters
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[param(value_type = Option<u32>)]
    pub min_run_length: Option<u32>,

    /// Minimum vertical drop, meters
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[param(value_type = Option<u32>)]
    pub min_vertical_drop: Option<u32>,

    /// Minimum number of trails
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[param(value_type = Option<u32>)]
    pub min_runs: Option<u32>,
}

impl ResortListingQuery {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            max_hours: self.max_hours,
            only_comfort_lifts: self.only_comfort_lifts,
            exclude_draglift: self.exclude_draglift,
            kids_only: self.kids_only,
            night_only: self.night_only,
            min_run_length: self.min_run_length.unwrap_or(0),
            min_vertical_drop: self.min_vertical_drop.unwrap_or(0),
            min_runs: self.min_runs.unwrap_or(0),
        }
    }
}

// ============================================================================
// Amenities
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Amenity {
    Chairlift,
    Gondola,
    Draglift,
    KidsFriendly,
    NightSkiing,
}

impl Amenity {
    /// Display order of the badges
    pub const ALL: [Amenity; 5] = [
        Amenity::Chairlift,
        Amenity::Gondola,
        Amenity::Draglift,
        Amenity::KidsFriendly,
        Amenity::NightSkiing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Amenity::Chairlift => "chairlifts",
            Amenity::Gondola => "gondola",
            Amenity::Draglift => "drag lifts",
            Amenity::KidsFriendly => "kid-friendly",
            Amenity::NightSkiing => "night skiing",
        }
    }

    pub fn present_at(self, resort: &Resort) -> bool {
        match self {
            Amenity::Chairlift => resort.has_chairlift,
            Amenity::Gondola => resort.has_gondola,
            Amenity::Draglift => resort.has_draglift,
            Amenity::KidsFriendly => resort.kids_friendly,
            Amenity::NightSkiing => resort.night_skiing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AmenityBadgeDto {
    pub amenity: Amenity,
    pub label: String,
    pub active: bool,
}

impl AmenityBadgeDto {
    /// Every amenity, flagged with whether the resort has it
    pub fn all_for(resort: &Resort) -> Vec<Self> {
        Amenity::ALL
            .into_iter()
            .map(|amenity| Self {
                amenity,
                label: amenity.label().to_string(),
                active: amenity.present_at(resort),
            })
            .collect()
    }

    /// Only the amenities the resort has
    pub fn present_for(resort: &Resort) -> Vec<Self> {
        Self::all_for(resort).into_iter().filter(|b| b.active).collect()
    }
}

// ============================================================================
// Travel
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TravelSummaryDto {
    pub city_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_max: Option<f64>,
    /// Human readable range, e.g. "3–5 h"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&TravelProfile> for TravelSummaryDto {
    fn from(profile: &TravelProfile) -> Self {
        Self {
            city_id: profile.city_id,
            distance_km: profile.car_distance_km,
            hours_min: profile.car_hours_min,
            hours_max: profile.car_hours_max,
            hours_label: hours_label(profile.car_hours_min, profile.car_hours_max),
            notes: profile.notes.clone(),
        }
    }
}

/// Formats a travel-time range, dropping trailing ".0"
pub fn hours_label(min: Option<f64>, max: Option<f64>) -> Option<String> {
    match (min, max) {
        (Some(min), Some(max)) if min == max => Some(format!("{} h", format_hours(min))),
        (Some(min), Some(max)) => Some(format!("{}–{} h", format_hours(min), format_hours(max))),
        (Some(min), None) => Some(format!("from {} h", format_hours(min))),
        (None, Some(max)) => Some(format!("up to {} h", format_hours(max))),
        (None, None) => None,
    }
}

fn format_hours(hours: f64) -> String {
    let rounded = (hours * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

// ============================================================================
// Listing response
// ============================================================================

/// Resort card in the listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResortCardDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_run_length_m: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_drop_m: Option<u32>,
    /// Amenities the resort has
    pub badges: Vec<AmenityBadgeDto>,
    /// Trip from the selected city, absent when no city is selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel: Option<TravelSummaryDto>,
}

impl ResortCardDto {
    pub fn from_entry(entry: &ResortEntry, travel: Option<&TravelProfile>) -> Self {
        let resort = &entry.resort;
        Self {
            id: resort.id,
            name: resort.name.clone(),
            slug: resort.slug.clone(),
            region: resort.region.clone(),
            runs_count: resort.runs_count,
            max_run_length_m: resort.max_run_length_m,
            vertical_drop_m: resort.vertical_drop_m,
            badges: AmenityBadgeDto::present_for(resort),
            travel: travel.map(TravelSummaryDto::from),
        }
    }
}

/// The listing view: selector data, echoed criteria and the matched resorts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResortListingDto {
    pub cities: Vec<CityResponseDto>,
    pub selected_city: Option<CityResponseDto>,
    pub criteria: FilterCriteria,
    pub hours_bound: HoursBound,
    /// Resorts loaded before filtering
    pub total: usize,
    pub matched: usize,
    pub resorts: Vec<ResortCardDto>,
    /// Inline notice when data could not be loaded; the list is empty in that case
    pub error: Option<String>,
}

// ============================================================================
// Detail response
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeasonDto {
    pub start_month: u8,
    pub end_month: u8,
    pub start_month_name: String,
    pub end_month_name: String,
}

impl SeasonDto {
    /// Both months are required to describe a season
    pub fn from_months(start: Option<u8>, end: Option<u8>) -> Option<Self> {
        let (start_month, end_month) = (start?, end?);
        Some(Self {
            start_month,
            end_month,
            start_month_name: Month::try_from(start_month).ok()?.name().to_string(),
            end_month_name: Month::try_from(end_month).ok()?.name().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteDto {
    pub city: CityResponseDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<CityRoute> for RouteDto {
    fn from(route: CityRoute) -> Self {
        let profile = route.profile;
        Self {
            city: route.city.into(),
            distance_km: profile.car_distance_km,
            hours_label: hours_label(profile.car_hours_min, profile.car_hours_max),
            hours_min: profile.car_hours_min,
            hours_max: profile.car_hours_max,
            notes: profile.notes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResortDetailDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_run_length_m: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_drop_m: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<SeasonDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipass_from_rub: Option<Decimal>,
    /// Every amenity with its presence flag
    pub badges: Vec<AmenityBadgeDto>,
    /// Travel profiles from every known city, ordered by city name
    pub routes: Vec<RouteDto>,
}

impl ResortDetailDto {
    pub fn new(resort: Resort, routes: Vec<CityRoute>) -> Self {
        Self {
            badges: AmenityBadgeDto::all_for(&resort),
            season: SeasonDto::from_months(resort.season_start_month, resort.season_end_month),
            id: resort.id,
            name: resort.name,
            slug: resort.slug,
            region: resort.region,
            runs_count: resort.runs_count,
            max_run_length_m: resort.max_run_length_m,
            vertical_drop_m: resort.vertical_drop_m,
            skipass_from_rub: resort.skipass_from_rub,
            routes: routes.into_iter().map(RouteDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resort() -> Resort {
        Resort {
            id: 1,
            name: "Volen".to_string(),
            slug: "volen".to_string(),
            region: Some("Moscow Oblast".to_string()),
            runs_count: Some(13),
            max_run_length_m: Some(1100),
            vertical_drop_m: Some(80),
            has_chairlift: true,
            has_gondola: false,
            has_draglift: true,
            kids_friendly: true,
            night_skiing: false,
            season_start_month: Some(12),
            season_end_month: Some(3),
            skipass_from_rub: None,
        }
    }

    #[test]
    fn test_hours_label_formats() {
        assert_eq!(hours_label(Some(3.0), Some(5.0)).as_deref(), Some("3–5 h"));
        assert_eq!(hours_label(Some(1.5), Some(2.0)).as_deref(), Some("1.5–2 h"));
        assert_eq!(hours_label(Some(4.0), Some(4.0)).as_deref(), Some("4 h"));
        assert_eq!(hours_label(Some(2.0), None).as_deref(), Some("from 2 h"));
        assert_eq!(hours_label(None, Some(6.5)).as_deref(), Some("up to 6.5 h"));
        assert_eq!(hours_label(None, None), None);
    }

    #[test]
    fn test_badges_keep_display_order() {
        let r = resort();
        let present: Vec<Amenity> = AmenityBadgeDto::present_for(&r)
            .into_iter()
            .map(|b| b.amenity)
            .collect();
        assert_eq!(
            present,
            vec![Amenity::Chairlift, Amenity::Draglift, Amenity::KidsFriendly]
        );

        let all = AmenityBadgeDto::all_for(&r);
        assert_eq!(all.len(), 5);
        assert!(!all[1].active);
        assert_eq!(all[4].label, "night skiing");
    }

    #[test]
    fn test_season_requires_both_months() {
        let season = SeasonDto::from_months(Some(12), Some(3)).unwrap();
        assert_eq!(season.start_month_name, "December");
        assert_eq!(season.end_month_name, "March");
        assert!(SeasonDto::from_months(Some(12), None).is_none());
        assert!(SeasonDto::from_months(None, Some(3)).is_none());
    }

    #[test]
    fn test_query_maps_to_criteria() {
        let query = ResortListingQuery {
            max_hours: Some(4.5),
            kids_only: true,
            min_runs: Some(3),
            ..Default::default()
        };
        let criteria = query.criteria();
        assert_eq!(criteria.max_hours, Some(4.5));
        assert!(criteria.kids_only);
        assert_eq!(criteria.min_runs, 3);
        assert_eq!(criteria.min_run_length, 0);
        assert!(ResortListingQuery::default().criteria().is_neutral());
    }

    #[test]
    fn test_query_validation_rejects_non_positive_hours() {
        let query = ResortListingQuery {
            max_hours: Some(0.0),
            ..Default::default()
        };
        assert!(query.validate().is_err());

        let query = ResortListingQuery {
            max_hours: Some(0.5),
            ..Default::default()
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_detail_dto_from_resort() {
        let dto = ResortDetailDto::new(resort(), vec![]);
        assert_eq!(dto.slug, "volen");
        assert_eq!(dto.season.as_ref().map(|s| s.start_month), Some(12));
        assert_eq!(dto.badges.iter().filter(|b| b.active).count(), 3);
        assert!(dto.routes.is_empty());
    }
}
