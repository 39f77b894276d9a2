//! Ski resorts: filtered listing and detail views.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/resorts` | Resorts matching the criteria, for the selected city |
//! | GET | `/api/resorts/{slug}` | Resort details with travel profiles from every city |
//!
//! ## Listing criteria
//!
//! `city`, `maxHours`, `onlyComfortLifts`, `excludeDraglift`, `kidsOnly`, `nightOnly`,
//! `minRunLength`, `minVerticalDrop`, `minRuns`. See [`services::FilterCriteria`].

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ResortService;
