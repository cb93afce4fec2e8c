// src/core/portal_client.rs
//! HTTP client for the positions API - one request per call, no retries

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tracing::{error, info};

use crate::core::config_manager::ApiConfig;
use crate::types::{ChatRequest, ChatResponse, Job, PositionBundle, PositionDetails};

const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");
const CHAT_REQUEST_ENDPOINT: &str = "/v1/chatrequest";

/// Non-2xx answer from the API
#[derive(Debug)]
pub struct ApiStatusError {
    pub status: StatusCode,
    pub path: String,
    pub body: String,
}

impl fmt::Display for ApiStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "API returned error status {} for {}: {}",
            self.status, self.path, self.body
        )
    }
}

impl std::error::Error for ApiStatusError {}

/// Whether `err` is the API answering 404
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ApiStatusError>()
        .is_some_and(|e| e.status == StatusCode::NOT_FOUND)
}

pub struct PortalClient {
    client: reqwest::Client,
    base_url: String,
}

impl PortalClient {
    /// Build the client once at startup; views borrow it
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut api_key = HeaderValue::from_str(&config.api_key)
            .context("API key contains characters not allowed in a header")?;
        api_key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, api_key);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Every position bundle of a company
    pub async fn list_company_positions(&self, company_id: i64) -> Result<Vec<PositionBundle>> {
        self.get(&format!("/v1/company/{}/positions", company_id))
            .await
            .context("Failed to get company positions")
    }

    /// Ready-made job rows; not every deployment serves this endpoint
    pub async fn list_company_jobs(&self, company_id: i64) -> Result<Vec<Job>> {
        self.get(&format!("/v1/company/{}/jobs", company_id))
            .await
            .context("Failed to get company jobs")
    }

    /// All stored revisions of a position bundle, unreduced
    pub async fn get_position_versions(&self, position_id: i64) -> Result<PositionBundle> {
        self.get(&format!("/v1/position/{}/versions", position_id))
            .await
            .context("Failed to get position versions")
    }

    /// Submit a full replacement bundle. The acknowledgement body is passed through as-is.
    pub async fn update_position_details(
        &self,
        position_id: i64,
        details: &PositionDetails,
    ) -> Result<serde_json::Value> {
        let path = format!("/v1/position/{}/details", position_id);
        let response = self
            .execute(Method::PUT, &path, Some(details))
            .await
            .context("Failed to update position details")?;

        let text = response
            .text()
            .await
            .context("Failed to read update acknowledgement")?;

        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }

        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse update acknowledgement: {}", text))
    }

    pub async fn send_chat_request(&self, question: &str, position_id: i64) -> Result<ChatResponse> {
        let payload = ChatRequest {
            question: question.to_string(),
            position_id,
        };

        self.post_json(CHAT_REQUEST_ENDPOINT, &payload)
            .await
            .context("Failed to send chat request")
    }

    /// Generic GET request
    pub async fn get<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let response = self.execute::<()>(Method::GET, path, None).await?;
        response
            .json::<R>()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", path))
    }

    /// Generic POST request with JSON
    pub async fn post_json<T, R>(&self, path: &str, payload: &T) -> Result<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let response = self.execute(Method::POST, path, Some(payload)).await?;
        response
            .json::<R>()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", path))
    }

    async fn execute<T>(&self, method: Method, path: &str, body: Option<&T>) -> Result<Response>
    where
        T: Serialize,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request: RequestBuilder = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        info!("API Request: {} {}", method, path);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("API Request Error: {} {}: {}", method, path, e);
                return Err(
                    anyhow::Error::new(e).context(format!("HTTP {} {} failed", method, path))
                );
            }
        };

        let status = response.status();
        if status.is_success() {
            info!("API Response: {} {}", status.as_u16(), path);
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        error!("API Response Error: {} {}: {}", status.as_u16(), path, body);

        Err(ApiStatusError {
            status,
            path: path.to_string(),
            body,
        }
        .into())
    }
}
