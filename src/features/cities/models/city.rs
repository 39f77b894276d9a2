use serde::Serialize;
use sqlx::FromRow;

/// Departure city travel times are estimated from
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub slug: String,
}
