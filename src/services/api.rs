// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Low-level client for the directory REST API.
//!
//! Handles:
//! - Base URL joining
//! - Optional `x-api-key` header
//! - Request timeout
//! - Mapping non-200 statuses to protocol errors

use crate::config::Config;
use crate::error::{ClientError, Result};
use reqwest::StatusCode;
use serde::Serialize;

const API_KEY_HEADER: &str = "x-api-key";

/// Shared HTTP client. Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for the configured service.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_api_key(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        }
    }

    /// GET a path and return the body text of a 200 response.
    pub async fn get_text(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let url = self.url(path);
        tracing::debug!(url = %url, "GET");

        let response = self
            .with_api_key(self.http.get(&url).query(query))
            .send()
            .await?;

        Self::read_ok_body(response).await
    }

    /// POST a JSON body and return the body text of a 200 response.
    ///
    /// `reqwest` sets `Content-Type: application/json` for JSON bodies.
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<String> {
        let url = self.url(path);
        tracing::debug!(url = %url, "POST");

        let response = self
            .with_api_key(self.http.post(&url).json(body))
            .send()
            .await?;

        Self::read_ok_body(response).await
    }

    /// Only an exact 200 counts as success; the body is read only in that case.
    async fn read_ok_body(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!(status = status.as_u16(), "Non-200 response");
            return Err(ClientError::Protocol(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
