//! [`Geocoder`] backed by the OSM Nominatim search API.
//!
//! The [`Geocoder`] trait is synchronous so planning stays a plain function
//! call. This implementation drives an async `reqwest` client on a Tokio
//! runtime it owns, one request at a time.
//!
//! Called from inside a multi-threaded Tokio runtime, the request runs on
//! that runtime through `block_in_place`. A `current_thread` runtime cannot
//! be blocked, so lookups from one fail with [`GeocodeError::Transport`].

use std::time::Duration;

use log::debug;
use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::Client;
use serde::Deserialize;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use crate::error::GeocodeError;
use crate::problem::Coordinate;
use crate::resolver::Geocoder;

/// Default user agent for Nominatim requests. The public instance rejects
/// anonymous clients.
pub const DEFAULT_USER_AGENT: &str = concat!("route-sequencer/", env!("CARGO_PKG_VERSION"));

/// Public Nominatim instance.
pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error building a [`NominatimGeocoder`].
#[derive(Debug, thiserror::Error)]
pub enum GeocoderBuildError {
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Configuration for [`NominatimGeocoder`].
#[derive(Debug, Clone)]
pub struct NominatimGeocoderConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Value of the `Accept-Language` header.
    pub accept_language: String,
}

impl Default for NominatimGeocoderConfig {
    fn default() -> Self {
        NominatimGeocoderConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: "cs".to_string(),
        }
    }
}

impl NominatimGeocoderConfig {
    /// Create a configuration for the given instance.
    pub fn new(base_url: impl Into<String>) -> Self {
        NominatimGeocoderConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the preferred result language.
    pub fn with_accept_language(mut self, language: impl Into<String>) -> Self {
        self.accept_language = language.into();
        self
    }
}

/// One entry of a `format=jsonv2` search response.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

/// Geocoder querying a Nominatim instance over HTTP.
pub struct NominatimGeocoder {
    client: Client,
    config: NominatimGeocoderConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for NominatimGeocoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NominatimGeocoder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl NominatimGeocoder {
    /// Create a geocoder for the public instance.
    pub fn new() -> Result<Self, GeocoderBuildError> {
        Self::with_config(NominatimGeocoderConfig::default())
    }

    /// Create a geocoder with explicit configuration.
    pub fn with_config(config: NominatimGeocoderConfig) -> Result<Self, GeocoderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(GeocoderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(GeocoderBuildError::Runtime)?;

        Ok(NominatimGeocoder {
            client,
            config,
            runtime,
        })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }

    async fn search(&self, query: &str) -> Result<Vec<Place>, GeocodeError> {
        let url = self.search_url();
        let response = self
            .client
            .get(&url)
            .query(&[("format", "jsonv2"), ("limit", "1"), ("q", query)])
            .header(ACCEPT_LANGUAGE, &self.config.accept_language)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| self.convert_reqwest_error(&err))?;

        response
            .json()
            .await
            .map_err(|err| GeocodeError::InvalidResponse {
                message: err.to_string(),
            })
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error) -> GeocodeError {
        let message = if error.is_timeout() {
            format!("timed out after {}s", self.config.timeout.as_secs())
        } else if let Some(status) = error.status() {
            format!("HTTP {status}")
        } else {
            error.to_string()
        };

        GeocodeError::Transport { message }
    }
}

/// Pick the first place of a search response.
fn convert_response(query: &str, places: Vec<Place>) -> Result<Coordinate, GeocodeError> {
    let place = places
        .into_iter()
        .next()
        .ok_or_else(|| GeocodeError::NotFound {
            query: query.to_string(),
        })?;

    let parse = |value: &str| {
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| GeocodeError::InvalidResponse {
                message: format!("`{value}` is not a coordinate"),
            })
    };

    Ok(Coordinate::new(parse(&place.lat)?, parse(&place.lon)?))
}

impl Geocoder for NominatimGeocoder {
    fn resolve(&self, query: &str) -> Result<Coordinate, GeocodeError> {
        debug!("nominatim search for `{query}`");
        let future = self.search(query);
        let places = match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            Ok(_) => Err(GeocodeError::Transport {
                message: "cannot block inside a current_thread Tokio runtime".to_string(),
            }),
            Err(_) => self.runtime.block_on(future),
        }?;
        convert_response(query, places)
    }
}
