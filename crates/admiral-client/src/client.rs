//! HTTP transport for the control-plane REST API.

use std::time::Duration;

use admiral_common::config::AdmiralConfig;
use admiral_common::constants::AUTH_TOKEN_HEADER;
use admiral_common::error::{AdmiralError, Result};
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Blocking client bound to one control-plane endpoint.
#[derive(Debug, Clone)]
pub struct AdmiralClient {
    base_url: String,
    token: Option<String>,
    http: Client,
}

impl AdmiralClient {
    /// Builds a client from the resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is empty or the HTTP client cannot be built.
    pub fn new(config: &AdmiralConfig) -> Result<Self> {
        let base_url = config.url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(AdmiralError::Config {
                message: "control-plane URL is empty".into(),
            });
        }
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AdmiralError::Config {
                message: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            base_url,
            token: config.token.clone(),
            http,
        })
    }

    /// Returns the absolute URL for a service-relative path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Fetches and decodes a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `AdmiralError::NotFound` on 404, `AdmiralError::Http` on any
    /// other non-success status, and a serialization error if the body is
    /// not the expected JSON.
    pub fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.url(path);
        let request = self.http.get(&url).query(query);
        let response = self.send("GET", &url, request)?;
        let body = response.text().map_err(|e| AdmiralError::Request {
            url: url.clone(),
            message: e.to_string(),
        })?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Replaces a document with the given JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not a success.
    pub fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.url(path);
        let request = self.http.put(&url).json(body);
        let _ = self.send("PUT", &url, request)?;
        Ok(())
    }

    /// Deletes a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not a success.
    pub fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        let request = self.http.delete(&url);
        let _ = self.send("DELETE", &url, request)?;
        Ok(())
    }

    fn send(&self, method: &'static str, url: &str, request: RequestBuilder) -> Result<Response> {
        let request = match &self.token {
            Some(token) => request.header(AUTH_TOKEN_HEADER, token),
            None => request,
        };
        tracing::debug!(method, url, "sending request");
        let response = request.send().map_err(|e| AdmiralError::Request {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        let status = response.status();
        tracing::debug!(method, url, status = status.as_u16(), "received response");
        if status == StatusCode::NOT_FOUND {
            return Err(AdmiralError::NotFound {
                kind: "document",
                id: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(AdmiralError::Http {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

/// Joins a base URL and a service-relative path with exactly one slash.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
