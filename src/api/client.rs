// src/api/client.rs

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde_json::json;

use crate::api::models::{AddReceipt, NewProperty, PropertyList, PropertyStats, RemoteComparison};
use crate::api::PropertyService;
use crate::errors::ServerError;

/// Blocking HTTP client for the remote Property Comparison API.
/// Clone is cheap: reqwest's Client is an Arc around its pool.
#[derive(Clone)]
pub struct PropertyApi {
    client: Client,
    base_url: String,
}

impl PropertyApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ServerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ServerError::RemoteUnavailable(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps a non-success status to a typed error, pulling the API's
    /// `detail` message out of the body when there is one.
    fn check(resp: Response) -> Result<Response, ServerError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let detail = resp
            .json::<serde_json::Value>()
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str().map(String::from)))
            .unwrap_or_else(|| status.to_string());

        Err(match status.as_u16() {
            404 => ServerError::NotFound,
            400 | 422 => ServerError::BadRequest(detail),
            _ => ServerError::RemoteUnavailable(detail),
        })
    }
}

fn network_err(e: reqwest::Error) -> ServerError {
    ServerError::RemoteUnavailable(e.to_string())
}

impl PropertyService for PropertyApi {
    fn list_properties(&self) -> Result<PropertyList, ServerError> {
        let resp = self
            .client
            .get(self.url("/properties"))
            .send()
            .map_err(network_err)?;
        Self::check(resp)?.json().map_err(network_err)
    }

    fn search_properties(&self, query: &str) -> Result<PropertyList, ServerError> {
        let resp = self
            .client
            .get(self.url("/properties/search"))
            .query(&[("query", query)])
            .send()
            .map_err(network_err)?;
        Self::check(resp)?.json().map_err(network_err)
    }

    fn add_property(&self, property: &NewProperty) -> Result<AddReceipt, ServerError> {
        let resp = self
            .client
            .post(self.url("/properties"))
            .json(property)
            .send()
            .map_err(network_err)?;
        Self::check(resp)?.json().map_err(network_err)
    }

    fn compare_properties(
        &self,
        address1: &str,
        address2: &str,
    ) -> Result<RemoteComparison, ServerError> {
        let resp = self
            .client
            .post(self.url("/compare-properties"))
            .json(&json!({ "address1": address1, "address2": address2 }))
            .send()
            .map_err(network_err)?;
        Self::check(resp)?.json().map_err(network_err)
    }

    fn property_stats(&self) -> Result<PropertyStats, ServerError> {
        let resp = self
            .client
            .get(self.url("/properties/stats/summary"))
            .send()
            .map_err(network_err)?;
        Self::check(resp)?.json().map_err(network_err)
    }
}
