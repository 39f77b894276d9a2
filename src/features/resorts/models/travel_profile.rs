use serde::Serialize;

/// Estimated road trip from one city to one resort.
///
/// At most one profile exists per (resort, city) pair. `car_hours_min <= car_hours_max`
/// is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelProfile {
    pub resort_id: i64,
    pub city_id: i64,
    pub car_distance_km: Option<u32>,
    pub car_hours_min: Option<f64>,
    pub car_hours_max: Option<f64>,
    pub notes: Option<String>,
}
