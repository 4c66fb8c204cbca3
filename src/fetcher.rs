// ABOUTME: One-shot fetch of the activity collection and the load-then-render error boundary
// ABOUTME: A failed fetch is logged and swallowed so the map stays usable with tiles only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Activity Fetching
//!
//! [`ActivityFetcher::fetch_all`] issues a single `GET {base}/api/all_activities`
//! with no retry. [`load_and_render`] wraps it with the renderer and is the
//! only place fetch errors are handled: they are logged and reported as
//! [`LoadOutcome::FetchFailed`], never propagated.
//!
//! A body that is a JSON array but holds some elements that are not
//! activities still renders; those elements show up as skipped in the
//! [`RenderReport`].

use crate::collection::ActivityCollection;
use crate::config::ClientConfig;
use crate::constants::endpoints;
use crate::errors::{AppError, AppResult};
use crate::http_client::build_client;
use crate::models::Activity;
use crate::render::{MapRenderer, MapSurface, RenderReport};
use reqwest::Client;
use tracing::{error, info, instrument};
use url::Url;

/// Name used for the activity API in error messages
const ACTIVITY_API: &str = "activity API";

/// Client for the all-activities endpoint
#[derive(Debug, Clone)]
pub struct ActivityFetcher {
    client: Client,
    endpoint: Url,
}

impl ActivityFetcher {
    /// Fetcher for `config.base_url` with a client built from `config`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the client cannot be built or the
    /// base URL is not an absolute `http`/`https` URL
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        Self::with_client(build_client(config)?, &config.base_url)
    }

    /// Fetcher using a caller-supplied client
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `base_url` is not an absolute
    /// `http`/`https` URL
    pub fn with_client(client: Client, base_url: &str) -> AppResult<Self> {
        let raw = format!(
            "{}{}",
            base_url.trim_end_matches('/'),
            endpoints::ALL_ACTIVITIES
        );
        let endpoint = Url::parse(&raw).map_err(|e| {
            AppError::config(format!("Invalid activity API base URL: {base_url}")).with_source(e)
        })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(AppError::config(format!(
                "Activity API base URL must use http or https: {base_url}"
            )));
        }

        Ok(Self { client, endpoint })
    }

    /// Full URL of the all-activities endpoint
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the whole activity collection
    ///
    /// # Errors
    ///
    /// Returns a service-unavailable error when the server cannot be reached
    /// or times out, an external service error for a non-success status, and
    /// a serialization error when the body is not a JSON array
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch_all(&self) -> AppResult<ActivityCollection> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    AppError::service_unavailable(ACTIVITY_API, "unreachable").with_source(e)
                } else {
                    AppError::external_service(ACTIVITY_API, "request failed").with_source(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                ACTIVITY_API,
                format!("unexpected status {status}"),
            ));
        }

        let body = response.bytes().await.map_err(|e| {
            AppError::external_service(ACTIVITY_API, "failed to read response body").with_source(e)
        })?;

        let collection = ActivityCollection::from_json(&body).map_err(|e| {
            AppError::serialization(format!("{ACTIVITY_API} returned invalid activity JSON"))
                .with_source(e)
        })?;

        info!(
            count = collection.activities().len(),
            rejected = collection.rejected().len(),
            "Fetched activities"
        );
        Ok(collection)
    }
}

/// Result of [`load_and_render`]
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The collection was fetched and handed to the renderer
    Rendered {
        /// The well-formed activities of the fetched collection
        activities: Vec<Activity>,
        /// What the renderer drew and skipped
        report: RenderReport,
    },
    /// The fetch failed; the renderer was not invoked
    FetchFailed,
}

impl LoadOutcome {
    /// Whether the renderer ran
    #[must_use]
    pub const fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }
}

/// Fetch the collection once and render it
///
/// Fetch failures are logged and swallowed: the renderer is left untouched
/// and [`LoadOutcome::FetchFailed`] is returned.
pub async fn load_and_render<S: MapSurface>(
    fetcher: &ActivityFetcher,
    renderer: &mut MapRenderer<S>,
) -> LoadOutcome {
    match fetcher.fetch_all().await {
        Ok(collection) => {
            let report = renderer.render_collection(&collection);
            LoadOutcome::Rendered {
                activities: collection.into_activities(),
                report,
            }
        }
        Err(e) => {
            error!(
                endpoint = %fetcher.endpoint(),
                error = %e,
                "Failed to load activities"
            );
            LoadOutcome::FetchFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let fetcher = ActivityFetcher::with_client(Client::new(), "http://localhost:5000/").unwrap();
        assert_eq!(
            fetcher.endpoint().as_str(),
            "http://localhost:5000/api/all_activities"
        );
    }

    #[test]
    fn test_base_url_must_be_http() {
        assert!(ActivityFetcher::with_client(Client::new(), "not a url").is_err());
        assert!(ActivityFetcher::with_client(Client::new(), "ftp://example.com").is_err());
    }
}
