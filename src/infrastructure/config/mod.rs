use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::YELP_SEARCH_URL;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Value shipped in templates; treated the same as no key at all
const YELP_KEY_PLACEHOLDER: &str = "YOUR_YELP_API_KEY_HERE";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub yelp_api_key: Option<String>,
    pub yelp_base_url: String,
    pub http_timeout_secs: u64,
    pub favorites_dir: PathBuf,
    pub default_radius_miles: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub environment: Environment,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            yelp_api_key: env::var("YELP_API_KEY").ok(),
            yelp_base_url: env::var("YELP_BASE_URL")
                .unwrap_or_else(|_| YELP_SEARCH_URL.to_string()),
            http_timeout_secs: parse_var("HTTP_TIMEOUT_SECS", 10)?,
            favorites_dir: env::var("FAVORITES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".restaurant-swipe")),
            default_radius_miles: parse_var("DEFAULT_RADIUS_MILES", 5.0)?,
            latitude: parse_optional_var("LATITUDE")?,
            longitude: parse_optional_var("LONGITUDE")?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        Ok(config)
    }

    /// The Yelp key, if one is usable for live search
    pub fn yelp_key(&self) -> Option<&str> {
        self.yelp_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && !key.contains(YELP_KEY_PLACEHOLDER))
    }

    pub fn is_yelp_configured(&self) -> bool {
        self.yelp_key().is_some()
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> AppResult<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} is invalid: {}", name, e))),
        Err(_) => Ok(default),
    }
}

fn parse_optional_var<T: FromStr>(name: &str) -> AppResult<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{} is invalid: {}", name, e))),
        _ => Ok(None),
    }
}
