//! Server-rendered HTML pages over the resort services.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | Listing page with the filter form |
//! | GET | `/resort/{slug}` | Resort detail page |
//!
//! The filter form submits the same query parameters as `GET /api/resorts`.

pub mod handlers;
pub mod routes;
