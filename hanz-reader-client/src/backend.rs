//! reqwest-backed analysis backend

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::{AnalysisError, Result};
use crate::http_client::HttpUtils;
use crate::traits::AnalysisBackend;
use crate::types::{AnalysisRequest, AnalysisResult};
use crate::utils::log_preview::describe_request;

/// Talks to the analysis service over HTTP.
pub struct HttpAnalysisBackend {
    client: Client,
    config: ClientConfig,
}

impl HttpAnalysisBackend {
    /// Build a backend with its own connection pool and the configured timeout.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AnalysisError::transport(format!("HTTP client initialization failed: {e}")))?;
        Ok(Self { client, config })
    }

    /// Reuse an existing client. The client's own timeout applies.
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl AnalysisBackend for HttpAnalysisBackend {
    fn id(&self) -> &'static str {
        "http"
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let url = self.config.endpoint(request.path());
        log::debug!("[analysis] Request: {}", describe_request(request));

        // json() 会设置 Content-Type: application/json
        let builder = self.client.post(&url).json(request);

        let (status, body) = HttpUtils::execute_request(builder, "POST", &url).await?;
        HttpUtils::interpret_response(status, &body)
    }
}
