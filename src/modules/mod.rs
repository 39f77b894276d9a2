//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for the stores the application reads from.

pub mod catalog_store;
