//! Resort filtering and travel-profile matching.
//!
//! The engine is a pure function of (entries, selected city, criteria): it never
//! performs I/O, never fails, and keeps the input order of the entries it retains.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::resorts::models::{ResortEntry, TravelProfile};

/// Which end of a travel profile's hours range is compared against `max_hours`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HoursBound {
    /// Optimistic: keep the resort if the best case fits the budget
    #[default]
    Min,
    /// Pessimistic: keep the resort only if the worst case fits the budget
    Max,
}

impl HoursBound {
    /// Hours of `profile` under this bound. Absent hours count as 0.
    pub fn hours_of(self, profile: &TravelProfile) -> f64 {
        let hours = match self {
            HoursBound::Min => profile.car_hours_min,
            HoursBound::Max => profile.car_hours_max,
        };
        hours.unwrap_or(0.0)
    }
}

impl FromStr for HoursBound {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(HoursBound::Min),
            "max" => Ok(HoursBound::Max),
            other => Err(format!("expected 'min' or 'max', got '{}'", other)),
        }
    }
}

impl fmt::Display for HoursBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoursBound::Min => f.write_str("min"),
            HoursBound::Max => f.write_str("max"),
        }
    }
}

/// Predicate parameters applied to every resort.
///
/// The default value is fully neutral: it excludes nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Travel-time budget in hours; only evaluated when a city is selected
    pub max_hours: Option<f64>,
    /// Require a chairlift or a gondola
    pub only_comfort_lifts: bool,
    pub exclude_draglift: bool,
    pub kids_only: bool,
    pub night_only: bool,
    /// Meters; 0 disables the check
    pub min_run_length: u32,
    /// Meters; 0 disables the check
    pub min_vertical_drop: u32,
    /// 0 disables the check
    pub min_runs: u32,
}

impl FilterCriteria {
    pub fn is_neutral(&self) -> bool {
        *self == FilterCriteria::default()
    }

    fn amenities_match(&self, entry: &ResortEntry) -> bool {
        let resort = &entry.resort;

        if self.only_comfort_lifts && !resort.has_comfort_lift() {
            return false;
        }
        if self.exclude_draglift && resort.has_draglift {
            return false;
        }
        if self.kids_only && !resort.kids_friendly {
            return false;
        }
        if self.night_only && !resort.night_skiing {
            return false;
        }

        at_least(resort.max_run_length_m, self.min_run_length)
            && at_least(resort.vertical_drop_m, self.min_vertical_drop)
            && at_least(resort.runs_count, self.min_runs)
    }
}

/// Absent values count as 0, so they fail any active threshold
fn at_least(value: Option<u32>, threshold: u32) -> bool {
    threshold == 0 || value.unwrap_or(0) >= threshold
}

/// Applies [`FilterCriteria`] with a travel-hours bound fixed at construction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterEngine {
    bound: HoursBound,
}

impl FilterEngine {
    pub fn new(bound: HoursBound) -> Self {
        Self { bound }
    }

    pub fn bound(&self) -> HoursBound {
        self.bound
    }

    /// The entry's travel profile for `city_id`, if any
    pub fn matching_profile(entry: &ResortEntry, city_id: i64) -> Option<&TravelProfile> {
        entry.profiles.iter().find(|p| p.city_id == city_id)
    }

    /// Whether `entry` passes every active criterion.
    ///
    /// With a city selected, an entry without a profile for that city never matches.
    pub fn matches(&self, entry: &ResortEntry, city_id: Option<i64>, criteria: &FilterCriteria) -> bool {
        if let Some(city_id) = city_id {
            let Some(profile) = Self::matching_profile(entry, city_id) else {
                return false;
            };
            if let Some(max_hours) = criteria.max_hours {
                if self.bound.hours_of(profile) > max_hours {
                    return false;
                }
            }
        }

        criteria.amenities_match(entry)
    }

    /// Entries passing [`Self::matches`], in input order
    pub fn apply<'a>(
        &self,
        entries: &'a [ResortEntry],
        city_id: Option<i64>,
        criteria: &FilterCriteria,
    ) -> Vec<&'a ResortEntry> {
        let matched: Vec<&ResortEntry> = entries
            .iter()
            .filter(|entry| self.matches(entry, city_id, criteria))
            .collect();

        tracing::debug!(
            bound = %self.bound,
            city_id = ?city_id,
            total = entries.len(),
            matched = matched.len(),
            "Applied resort filter"
        );

        matched
    }
}
