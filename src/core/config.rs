use std::env;

use crate::features::resorts::services::HoursBound;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub listing: ListingConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
    /// The catalog schema is managed out of band, so migrations are opt-in
    pub run_migrations: bool,
}

/// Settings for the resort listing view
#[derive(Debug, Clone)]
pub struct ListingConfig {
    /// City preselected when the request does not name one (`None` = no city constraint)
    pub default_city_slug: Option<String>,
    /// Which end of a travel profile's hours range is compared against `maxHours`
    pub hours_bound: HoursBound,
    /// Upper limit accepted for the `maxHours` criterion
    pub max_hours_limit: f64,
    /// Travel-time budget prefilled on the first view of the listing page (`None` = no budget)
    pub default_max_hours: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            listing: ListingConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        let run_migrations = parse_flag(
            "DB_RUN_MIGRATIONS",
            env::var("DB_RUN_MIGRATIONS").ok().as_deref(),
        )?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
            run_migrations,
        })
    }
}

impl ListingConfig {
    const DEFAULT_CITY_SLUG: &'static str = "moscow";
    const DEFAULT_MAX_HOURS_LIMIT: f64 = 30.0;
    const DEFAULT_MAX_HOURS: f64 = 6.0;

    pub fn from_env() -> Result<Self, String> {
        Self::from_values(
            env::var("DEFAULT_CITY_SLUG").ok().as_deref(),
            env::var("TRAVEL_HOURS_BOUND").ok().as_deref(),
            env::var("LISTING_MAX_HOURS_LIMIT").ok().as_deref(),
            env::var("DEFAULT_MAX_HOURS").ok().as_deref(),
        )
    }

    fn from_values(
        default_city_slug: Option<&str>,
        hours_bound: Option<&str>,
        max_hours_limit: Option<&str>,
        default_max_hours: Option<&str>,
    ) -> Result<Self, String> {
        // An explicitly empty DEFAULT_CITY_SLUG disables the default selection
        let default_city_slug = match default_city_slug {
            Some(slug) => Some(slug.trim().to_string()).filter(|s| !s.is_empty()),
            None => Some(Self::DEFAULT_CITY_SLUG.to_string()),
        };

        let hours_bound = match hours_bound {
            Some(raw) => raw
                .parse::<HoursBound>()
                .map_err(|e| format!("Invalid TRAVEL_HOURS_BOUND: {}", e))?,
            None => HoursBound::default(),
        };

        let max_hours_limit = match max_hours_limit {
            Some(raw) => raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v > 0.0)
                .ok_or_else(|| "LISTING_MAX_HOURS_LIMIT must be a positive number".to_string())?,
            None => Self::DEFAULT_MAX_HOURS_LIMIT,
        };

        // Same rule as the city: empty disables the prefilled budget
        let default_max_hours = match default_max_hours.map(str::trim) {
            Some("") => None,
            Some(raw) => Some(
                raw.parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite() && *v > 0.0 && *v <= max_hours_limit)
                    .ok_or_else(|| {
                        format!(
                            "DEFAULT_MAX_HOURS must be a number between 0 and {}",
                            max_hours_limit
                        )
                    })?,
            ),
            None => Some(Self::DEFAULT_MAX_HOURS.min(max_hours_limit)),
        };

        Ok(Self {
            default_city_slug,
            hours_bound,
            max_hours_limit,
            default_max_hours,
        })
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_city_slug: Some(Self::DEFAULT_CITY_SLUG.to_string()),
            hours_bound: HoursBound::default(),
            max_hours_limit: Self::DEFAULT_MAX_HOURS_LIMIT,
            default_max_hours: Some(Self::DEFAULT_MAX_HOURS),
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Skitrip API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Ski resorts reachable by car from your city".to_string());

        Ok(Self {
            title,
            version,
            description,
        })
    }
}

fn parse_flag(name: &str, value: Option<&str>) -> Result<bool, String> {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(false),
        Some(v) if v.is_empty() => Ok(false),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(format!("{} must be a boolean", name)),
        },
    }
}
