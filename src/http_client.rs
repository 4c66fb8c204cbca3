// ABOUTME: Builds the HTTP client used to call the activity API from the client configuration
// ABOUTME: Applies request and connect timeouts and identifies the caller with a User-Agent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ClientConfig;
use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// `User-Agent` sent with every activity API request
#[must_use]
pub fn user_agent() -> String {
    format!(
        "{}/{}",
        service_names::ACTIVITY_MAP,
        env!("CARGO_PKG_VERSION")
    )
}

/// Client with the configured timeouts
///
/// Clones of the returned client share one connection pool.
///
/// # Errors
///
/// Returns a configuration error if a timeout is zero or the TLS backend
/// cannot be initialized
pub fn build_client(config: &ClientConfig) -> AppResult<Client> {
    if config.timeout_secs == 0 || config.connect_timeout_secs == 0 {
        return Err(AppError::config(
            "HTTP client timeouts must be at least one second",
        ));
    }

    let client = Client::builder()
        .user_agent(user_agent())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .build()
        .map_err(|e| AppError::config("Failed to build HTTP client").with_source(e))?;

    debug!(
        timeout_secs = config.timeout_secs,
        connect_timeout_secs = config.connect_timeout_secs,
        "Built activity API client"
    );
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_names_service() {
        let agent = user_agent();
        assert!(agent.starts_with("activity-map/"));
        assert!(agent.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_default_config_builds() {
        assert!(build_client(&ClientConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ClientConfig {
            timeout_secs: 0,
            ..ClientConfig::default()
        };
        let error = build_client(&config).unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::ConfigError);
    }
}
