// File: crates/dashboard-client/src/api.rs
// Summary: Chart backend seam (`ChartApi`) and its reqwest implementation.

use std::sync::Arc;

use async_trait::async_trait;
use dashboard_core::{generate_chart_path, ChartEnvelope, ChartRequest, ChartSpec, ErrorEnvelope};
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// No HTTP response (connection refused, reset, timeout, ...).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// A body that is not JSON, or a success body that is not a chart.
    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("invalid backend URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Text shown to the user for this failure.
    pub fn notice_text(&self) -> String {
        match self {
            ApiError::Server { message, .. } => format!("Error: {message}"),
            other => format!("Network error: {other}"),
        }
    }
}

/// Chart generation backend.
#[async_trait]
pub trait ChartApi: Send + Sync {
    /// Ask the backend to build a chart for `file_name`.
    async fn generate_chart(&self, file_name: &str, req: &ChartRequest) -> Result<ChartSpec, ApiError>;
}

#[async_trait]
impl<T: ChartApi + ?Sized> ChartApi for Arc<T> {
    async fn generate_chart(&self, file_name: &str, req: &ChartRequest) -> Result<ChartSpec, ApiError> {
        (**self).generate_chart(file_name, req).await
    }
}

/// `POST {base}/api/generate_chart/{file_name}` over reqwest.
#[derive(Clone, Debug)]
pub struct HttpChartApi {
    http: Client,
    base_url: Url,
}

impl HttpChartApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(config.base_url.clone()));
        }
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self { http: builder.build()?, base_url })
    }

    /// Endpoint URL for `file_name`.
    ///
    /// `file_name` is taken as it appears in a page URL: existing `%XX`
    /// escapes are kept, other characters are encoded as needed.
    pub fn endpoint(&self, file_name: &str) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}{}", url.path().trim_end_matches('/'), generate_chart_path(file_name));
        url.set_path(&path);
        url
    }

    async fn handle_response(response: Response) -> Result<ChartSpec, ApiError> {
        let status = response.status();
        if status.is_success() {
            let envelope: ChartEnvelope = response.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            return envelope.into_spec().map_err(|e| ApiError::Decode(e.to_string()));
        }

        // failure bodies must still be JSON; anything else is a decode error
        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
        let message = match ErrorEnvelope::deserialize(&body) {
            Ok(envelope) => envelope.error,
            Err(_) => status.canonical_reason().unwrap_or("request failed").to_string(),
        };
        Err(ApiError::Server { status: status.as_u16(), message })
    }
}

#[async_trait]
impl ChartApi for HttpChartApi {
    async fn generate_chart(&self, file_name: &str, req: &ChartRequest) -> Result<ChartSpec, ApiError> {
        let url = self.endpoint(file_name);
        debug!(%url, chart_type = %req.chart_type, "posting chart request");
        let response = self.http.post(url).json(req).send().await?;
        Self::handle_response(response).await
    }
}
