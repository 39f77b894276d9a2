//! Departure cities.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/cities` | List cities ordered by name |
//! | GET | `/api/cities/{slug}` | Get city by slug |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CityService;
