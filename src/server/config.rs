use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_COFFEE_BRANDS: &str = "buddy brew,nescafe";

pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    pub coffee_brands: Vec<String>,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// - `DATABASE_URL` (required) - SeaORM connection string, `postgres://` or `sqlite:`
    /// - `SERVER_ADDR` (optional) - Listen address, defaults to `0.0.0.0:3000`
    /// - `COFFEE_BRANDS` (optional) - Comma-separated known brands
    pub fn from_env() -> Result<Self, AppError> {
        let coffee_brands = parse_brands(
            &std::env::var("COFFEE_BRANDS").unwrap_or_else(|_| DEFAULT_COFFEE_BRANDS.to_string()),
        );
        if coffee_brands.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                name: "COFFEE_BRANDS".to_string(),
                reason: "must list at least one brand".to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            server_addr: std::env::var("SERVER_ADDR")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string()),
            coffee_brands,
        })
    }
}

/// Splits a comma-separated brand list, trimming entries and dropping blanks.
fn parse_brands(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|brand| !brand.is_empty())
        .map(str::to_string)
        .collect()
}
