//! Analysis-service adapter
//!
//! The entity detection itself (NLP models, Swiss regex recognizers) lives
//! in an external service reached over local HTTP. This module owns that
//! boundary: an [`AnalyzerService`] trait the rest of the application
//! programs against, the [`HttpAnalyzerClient`] implementation, and the
//! wire models.

pub mod client;
pub mod models;

use crate::config::DetectionConfig;
use crate::domain::{AnonymizationStyle, DetectedEntity, DetectionResult, Result};
use async_trait::async_trait;

pub use client::HttpAnalyzerClient;
pub use models::{EntityInfo, HealthResponse};

/// Interface to the analysis service
///
/// Abstracts the transport so tests can substitute a mock. Implementations
/// perform no internal retries; every method maps failures to
/// [`crate::domain::ServiceError`].
#[async_trait]
pub trait AnalyzerService: Send + Sync {
    /// Check service health and model readiness
    async fn health(&self) -> Result<HealthResponse>;

    /// List the entity types the service can detect
    async fn supported_entities(&self) -> Result<Vec<EntityInfo>>;

    /// Detect entities in `text` without anonymizing
    async fn analyze(
        &self,
        text: &str,
        detection: &DetectionConfig,
    ) -> Result<Vec<DetectedEntity>>;

    /// Detect entities and return the full detection result
    ///
    /// The result's `anonymized_text` is the server-side rendering; the
    /// review core recomputes its own from the entity list.
    async fn anonymize(
        &self,
        text: &str,
        detection: &DetectionConfig,
        style: AnonymizationStyle,
    ) -> Result<DetectionResult>;

    /// Base URL of the service, for diagnostics
    fn base_url(&self) -> &str;
}
