//! Origin HTTP Client
//!
//! Fetches Fibonacci values from the origin service over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::Origin;
use crate::error::OriginError;
use crate::fibonacci::{FibValue, Variant};
use crate::models::FibonacciResponse;

/// [`Origin`] backed by the origin service's HTTP API.
///
/// Every request is bounded by the client's timeout; a timeout is reported
/// like any other failure and never leaves partial state behind.
#[derive(Debug, Clone)]
pub struct HttpOrigin {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOrigin {
    /// Creates a client for the origin at `base_url` (e.g. `http://fibonacci-api:8080`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, OriginError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| OriginError::Client(err.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, variant: Variant) -> String {
        format!("{}{}", self.base_url, variant.route())
    }
}

#[async_trait]
impl Origin for HttpOrigin {
    async fn fetch(&self, order: u64, variant: Variant) -> Result<FibValue, OriginError> {
        let url = self.url_for(variant);
        debug!("Fetching order {} from {}", order, url);

        let response = self
            .client
            .get(&url)
            .query(&[("order", order)])
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(OriginError::Status(status.as_u16()));
        }

        let body: FibonacciResponse = response
            .json()
            .await
            .map_err(|err| match classify(err) {
                OriginError::Transport(msg) => OriginError::Payload(msg),
                other => other,
            })?;

        if body.order != order {
            return Err(OriginError::Payload(format!(
                "requested order {} but origin answered for {}",
                order, body.order
            )));
        }

        Ok(body.value)
    }
}

fn classify(err: reqwest::Error) -> OriginError {
    if err.is_timeout() {
        OriginError::Timeout
    } else {
        OriginError::Transport(err.to_string())
    }
}
