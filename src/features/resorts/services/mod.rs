pub mod filter_engine;
mod resort_service;

pub use filter_engine::{FilterCriteria, FilterEngine, HoursBound};
pub use resort_service::ResortService;
