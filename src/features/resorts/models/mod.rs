mod resort;
mod travel_profile;

pub use resort::{CityRoute, Resort, ResortDetail, ResortEntry};
pub use travel_profile::TravelProfile;
