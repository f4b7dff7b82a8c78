//! HTTP client for the local analysis service
//!
//! The analysis service is an opaque collaborator reachable over local
//! HTTP; this client is the only place that knows its transport. It maps
//! HTTP failures to [`ServiceError`] and performs no retries: the core
//! treats boundary errors as the caller's concern.

use super::models::{
    AnalyzeRequest, AnalyzeResponse, AnonymizeRequest, EntitiesResponse, EntityInfo,
    ErrorResponse, HealthResponse,
};
use super::AnalyzerService;
use crate::config::{DetectionConfig, ServiceConfig};
use crate::domain::{
    AnonymizationStyle, DetectedEntity, DetectionResult, Result, ServiceError,
};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Analysis-service client over HTTP
///
/// # Example
///
/// ```no_run
/// use anonymize::adapters::analyzer::{AnalyzerService, HttpAnalyzerClient};
/// use anonymize::config::{DetectionConfig, ServiceConfig};
/// use anonymize::domain::AnonymizationStyle;
///
/// # async fn example() -> anonymize::domain::Result<()> {
/// let client = HttpAnalyzerClient::new(&ServiceConfig::default())?;
/// let detection = DetectionConfig::default();
///
/// let result = client
///     .anonymize("Hans wohnt in Zürich", &detection, AnonymizationStyle::Replace)
///     .await?;
/// println!("Detected {} entities", result.entities.len());
/// # Ok(())
/// # }
/// ```
pub struct HttpAnalyzerClient {
    base_url: String,
    client: Client,
}

impl HttpAnalyzerClient {
    /// Create a new client from service configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| ServiceError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn map_request_error(e: reqwest::Error) -> ServiceError {
        if e.is_timeout() {
            ServiceError::Timeout(e.to_string())
        } else if e.is_connect() {
            ServiceError::ConnectionFailed(e.to_string())
        } else {
            ServiceError::InvalidResponse(e.to_string())
        }
    }

    /// Decode a response, turning non-2xx statuses into service errors
    ///
    /// The service reports failures as FastAPI-style `{"detail": "..."}`
    /// bodies; fall back to the raw body when that shape is absent.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ServiceError::InvalidResponse(e.to_string()).into());
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.detail)
            .unwrap_or(body);

        let error = if status.is_server_error() {
            ServiceError::ServerError {
                status: status.as_u16(),
                message: detail,
            }
        } else {
            ServiceError::ClientError {
                status: status.as_u16(),
                message: detail,
            }
        };
        Err(error.into())
    }
}

#[async_trait]
impl AnalyzerService for HttpAnalyzerClient {
    async fn health(&self) -> Result<HealthResponse> {
        let response = self
            .client
            .get(self.endpoint("/health"))
            .send()
            .await
            .map_err(Self::map_request_error)?;

        let health: HealthResponse = Self::decode(response).await?;
        if !health.is_healthy() {
            tracing::warn!(
                status = %health.status,
                model_loaded = health.model_loaded,
                "Analysis service is not ready"
            );
        }
        Ok(health)
    }

    async fn supported_entities(&self) -> Result<Vec<EntityInfo>> {
        let response = self
            .client
            .get(self.endpoint("/entities"))
            .send()
            .await
            .map_err(Self::map_request_error)?;

        let entities: EntitiesResponse = Self::decode(response).await?;
        Ok(entities.entities)
    }

    async fn analyze(
        &self,
        text: &str,
        detection: &DetectionConfig,
    ) -> Result<Vec<DetectedEntity>> {
        let request = AnalyzeRequest {
            text: text.to_string(),
            enabled_entities: detection.enabled_entities.clone(),
            score_threshold: detection.score_threshold,
        };

        let response = self
            .client
            .post(self.endpoint("/analyze"))
            .json(&request)
            .send()
            .await
            .map_err(Self::map_request_error)?;

        let analyzed: AnalyzeResponse = Self::decode(response).await?;
        tracing::debug!(
            entity_count = analyzed.entities.len(),
            "Analysis completed"
        );
        Ok(analyzed.entities)
    }

    async fn anonymize(
        &self,
        text: &str,
        detection: &DetectionConfig,
        style: AnonymizationStyle,
    ) -> Result<DetectionResult> {
        let request = AnonymizeRequest {
            text: text.to_string(),
            enabled_entities: detection.enabled_entities.clone(),
            anonymization_style: style.to_string(),
            score_threshold: detection.score_threshold,
        };

        let response = self
            .client
            .post(self.endpoint("/anonymize"))
            .json(&request)
            .send()
            .await
            .map_err(Self::map_request_error)?;

        let result: DetectionResult = Self::decode(response).await?;
        tracing::debug!(
            entity_count = result.entities.len(),
            style = %style,
            "Anonymization completed"
        );
        Ok(result)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
