// ABOUTME: Environment configuration for the map view, the activity client and the page server
// ABOUTME: Reads ACTIVITY_MAP_* variables with typed parsing and constant defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::{map, network};
use crate::models::LatLng;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Initial map view and base tile layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Center of the initial view
    pub center: LatLng,
    /// Zoom level of the initial view
    pub zoom: u8,
    /// Tile URL template with `{z}`, `{x}` and `{y}` placeholders
    pub tile_url_template: String,
    /// Maximum zoom the tile provider serves
    pub tile_max_zoom: u8,
    /// Attribution the tile provider requires
    pub tile_attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(map::DEFAULT_CENTER_LAT, map::DEFAULT_CENTER_LON),
            zoom: map::DEFAULT_ZOOM,
            tile_url_template: map::TILE_URL_TEMPLATE.to_owned(),
            tile_max_zoom: map::TILE_MAX_ZOOM,
            tile_attribution: map::TILE_ATTRIBUTION.to_owned(),
        }
    }
}

/// Activity API client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the server exposing `/api/all_activities`
    pub base_url: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: format!(
                "http://{}:{}",
                network::DEFAULT_HOST,
                network::DEFAULT_HTTP_PORT
            ),
            timeout_secs: network::DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: network::DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Page server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// JSON snapshot of the activity collection
    pub data_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: network::DEFAULT_HOST.to_owned(),
            http_port: network::DEFAULT_HTTP_PORT,
            data_file: PathBuf::from("./data/activities.json"),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Map view and tiles
    pub map: MapConfig,
    /// Activity API client
    pub client: ClientConfig,
    /// Page server
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        let defaults = Self::default();

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            map: MapConfig {
                center: LatLng::new(
                    parse_env_or("ACTIVITY_MAP_CENTER_LAT", defaults.map.center.lat)?,
                    parse_env_or("ACTIVITY_MAP_CENTER_LON", defaults.map.center.lng)?,
                ),
                zoom: parse_env_or("ACTIVITY_MAP_ZOOM", defaults.map.zoom)?,
                tile_url_template: env_var_or(
                    "ACTIVITY_MAP_TILE_URL",
                    &defaults.map.tile_url_template,
                ),
                tile_max_zoom: parse_env_or("ACTIVITY_MAP_TILE_MAX_ZOOM", defaults.map.tile_max_zoom)?,
                tile_attribution: defaults.map.tile_attribution,
            },
            client: ClientConfig {
                base_url: env_var_or("ACTIVITY_MAP_BASE_URL", &defaults.client.base_url),
                timeout_secs: parse_env_or(
                    "ACTIVITY_MAP_HTTP_TIMEOUT_SECS",
                    defaults.client.timeout_secs,
                )?,
                connect_timeout_secs: parse_env_or(
                    "ACTIVITY_MAP_CONNECT_TIMEOUT_SECS",
                    defaults.client.connect_timeout_secs,
                )?,
            },
            server: ServerConfig {
                host: env_var_or("ACTIVITY_MAP_HOST", &defaults.server.host),
                http_port: parse_env_or("ACTIVITY_MAP_HTTP_PORT", defaults.server.http_port)?,
                data_file: PathBuf::from(env_var_or(
                    "ACTIVITY_MAP_DATA_FILE",
                    &defaults.server.data_file.to_string_lossy(),
                )),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the view center is off the globe, the initial zoom
    /// exceeds what the tile provider serves, or the tile template lacks a
    /// placeholder
    pub fn validate(&self) -> Result<()> {
        let center = self.map.center;
        if !(-90.0..=90.0).contains(&center.lat) || !(-180.0..=180.0).contains(&center.lng) {
            return Err(anyhow::anyhow!(
                "Map center ({}, {}) is not a valid coordinate",
                center.lat,
                center.lng
            ));
        }

        if self.map.zoom > self.map.tile_max_zoom {
            return Err(anyhow::anyhow!(
                "Initial zoom {} exceeds tile max zoom {}",
                self.map.zoom,
                self.map.tile_max_zoom
            ));
        }

        for placeholder in ["{z}", "{x}", "{y}"] {
            if !self.map.tile_url_template.contains(placeholder) {
                return Err(anyhow::anyhow!(
                    "Tile URL template is missing the {placeholder} placeholder"
                ));
            }
        }

        Ok(())
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Activity Map Configuration:\n\
             - Environment: {}\n\
             - Map Center: ({}, {}) @ zoom {}\n\
             - Tiles: {} (max zoom {})\n\
             - Activity API: {}\n\
             - HTTP: {}:{}\n\
             - Snapshot: {}",
            self.environment,
            self.map.center.lat,
            self.map.center.lng,
            self.map.zoom,
            self.map.tile_url_template,
            self.map.tile_max_zoom,
            self.client.base_url,
            self.server.host,
            self.server.http_port,
            self.server.data_file.display(),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw}")),
        Err(_) => Ok(default),
    }
}
