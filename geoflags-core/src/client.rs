use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::fmt::Debug;
use thiserror::Error;

use crate::{
    Config,
    model::{Flags, Query, RESERVED_KEYS},
};

/// Failures that are not a plain rejection by the remote API.
///
/// A reachable server answering with a non-200 status is not an error; see
/// [`FlagSource::fetch_flags`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to send request to quality API ({url})")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse quality API JSON ({url})")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait FlagSource: Send + Sync + Debug {
    /// Look up quality flags for a query.
    ///
    /// Returns `Ok(None)` when the server answers with anything but 200.
    async fn fetch_flags(&self, query: &Query) -> Result<Option<Flags>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct QualityApiClient {
    base_url: String,
    http: Client,
}

impl QualityApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, Client::new())
    }

    /// Use a caller-built `reqwest::Client`, e.g. one with timeouts or a proxy.
    pub fn with_http(base_url: impl Into<String>, http: Client) -> Self {
        Self { base_url: base_url.into(), http }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.effective_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl FlagSource for QualityApiClient {
    async fn fetch_flags(&self, query: &Query) -> Result<Option<Flags>, FetchError> {
        let url = request_url(&self.base_url, query);
        tracing::debug!(%url, "requesting geospatial flags");

        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Request { url: url.clone(), source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| FetchError::Request { url: url.clone(), source })?;

        if status != StatusCode::OK {
            tracing::warn!("Something went wrong. Status code: {}", status.as_u16());
            tracing::warn!("Content of the request: {}", body);
            return Ok(None);
        }

        let content: Flags =
            serde_json::from_str(&body).map_err(|source| FetchError::Decode { url, source })?;

        let flags = strip_reserved(content);
        tracing::debug!(count = flags.len(), "received geospatial flags");

        Ok(Some(flags))
    }
}

/// Join the base URL and the query segments with `/`.
///
/// Segments are not percent-encoded here; a `/` inside a country or binomial
/// ends up as an extra path level.
pub fn request_url(base_url: &str, query: &Query) -> String {
    let mut url = base_url.to_owned();
    for segment in query.path_segments() {
        url.push('/');
        url.push_str(&segment);
    }
    url
}

/// Copy of `content` without the envelope keys.
pub fn strip_reserved(content: Flags) -> Flags {
    content.into_iter().filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str())).collect()
}
