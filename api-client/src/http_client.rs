// HTTP client for the CodeHawk API

use crate::errors::ApiError;
use codehawk_core::{AnalysisRequest, AnalyzeOptions, ClientConfig};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;

const API_KEY_HEADER: &str = "x-api-key";

/// CodeHawk API client
///
/// Owns one connection pool that every call reuses. Each method sends a
/// single request and returns the decoded JSON body unchanged.
pub struct CodeHawkClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl CodeHawkClient {
    /// Create a new client
    ///
    /// Fails only if the API key cannot be sent as a header value or the
    /// TLS backend cannot be initialised.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let mut api_key = HeaderValue::from_str(config.api_key()).map_err(ApiError::unexpected)?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(ApiError::unexpected)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit code for analysis
    ///
    /// # Arguments
    /// * `code` - Source text to analyze
    /// * `language` - Language tag, e.g. "python"
    /// * `opts` - Optional context and engine options
    pub async fn analyze_code(
        &self,
        code: &str,
        language: &str,
        opts: AnalyzeOptions,
    ) -> Result<Value, ApiError> {
        let request = AnalysisRequest::new(code, language, opts);
        let body = serde_json::to_value(&request).map_err(ApiError::unexpected)?;

        self.request(Method::POST, "/analyze", &[], Some(body)).await
    }

    /// Get analysis by ID
    pub async fn get_analysis(&self, analysis_id: &str) -> Result<Value, ApiError> {
        self.request(Method::GET, &format!("/analysis/{}", analysis_id), &[], None)
            .await
    }

    /// Get issues for an analysis
    ///
    /// `severity` is sent as-is; `None` or an empty string sends no filter.
    pub async fn get_issues(
        &self,
        analysis_id: &str,
        severity: Option<&str>,
    ) -> Result<Value, ApiError> {
        let query: Vec<(&str, &str)> = severity
            .filter(|s| !s.is_empty())
            .map(|s| vec![("severity", s)])
            .unwrap_or_default();

        self.request(
            Method::GET,
            &format!("/analysis/{}/issues", analysis_id),
            &query,
            None,
        )
        .await
    }

    /// Get suggestions for an analysis
    pub async fn get_suggestions(&self, analysis_id: &str) -> Result<Value, ApiError> {
        self.request(
            Method::GET,
            &format!("/analysis/{}/suggestions", analysis_id),
            &[],
            None,
        )
        .await
    }

    /// Get supported languages
    pub async fn get_languages(&self) -> Result<Value, ApiError> {
        self.request(Method::GET, "/languages", &[], None).await
    }

    /// Get rules for a language
    pub async fn get_rules(&self, language: &str) -> Result<Value, ApiError> {
        self.request(Method::GET, &format!("/rules/{}", language), &[], None)
            .await
    }

    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.config.base_url(), endpoint);
        tracing::debug!(%method, %url, "Sending CodeHawk API request");

        let mut builder = self.client.request(method, &url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            let err = ApiError::from_reqwest(&e);
            tracing::warn!(%url, error = %e, "CodeHawk API request failed: {}", err);
            err
        })?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), %url, "CodeHawk API responded");

        let http_error = response.error_for_status_ref().err().map(|e| e.to_string());
        if let Some(http_error) = http_error {
            // An unreadable error body falls back to the status description
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(%url, error = %e, "Could not read CodeHawk API error body");
                    String::new()
                }
            };
            let err = ApiError::from_status(status, &body, &http_error);
            tracing::warn!(status = status.as_u16(), %url, "CodeHawk API error: {}", err);
            return Err(err);
        }

        response.json::<Value>().await.map_err(|e| {
            let err = ApiError::from_reqwest(&e);
            tracing::warn!(%url, error = %e, "Failed to read CodeHawk API response: {}", err);
            err
        })
    }
}
