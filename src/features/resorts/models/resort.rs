use rust_decimal::Decimal;
use serde::Serialize;

use crate::features::cities::models::City;
use crate::features::resorts::models::TravelProfile;

/// Ski area as validated at the loader boundary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resort {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub region: Option<String>,
    pub runs_count: Option<u32>,
    /// Longest trail, meters
    pub max_run_length_m: Option<u32>,
    /// Meters
    pub vertical_drop_m: Option<u32>,
    pub has_chairlift: bool,
    pub has_gondola: bool,
    pub has_draglift: bool,
    pub kids_friendly: bool,
    pub night_skiing: bool,
    /// Month number, 1..=12
    pub season_start_month: Option<u8>,
    /// Month number, 1..=12
    pub season_end_month: Option<u8>,
    pub skipass_from_rub: Option<Decimal>,
}

impl Resort {
    pub fn has_comfort_lift(&self) -> bool {
        self.has_chairlift || self.has_gondola
    }
}

/// A resort together with the travel profiles loaded for it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResortEntry {
    pub resort: Resort,
    pub profiles: Vec<TravelProfile>,
}

impl ResortEntry {
    pub fn new(resort: Resort, profiles: Vec<TravelProfile>) -> Self {
        Self { resort, profiles }
    }
}

/// Travel profile joined with its origin city, as shown on the detail page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityRoute {
    pub city: City,
    pub profile: TravelProfile,
}

/// A single resort with every route that reaches it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResortDetail {
    pub resort: Resort,
    pub routes: Vec<CityRoute>,
}
