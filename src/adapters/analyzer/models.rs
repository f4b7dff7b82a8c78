//! Wire models for the analysis-service API
//!
//! Request and response shapes for the local sidecar's REST endpoints.
//! The anonymize response maps directly onto
//! [`crate::domain::DetectionResult`].

use crate::domain::DetectedEntity;
use serde::{Deserialize, Serialize};

/// Request body for `POST /analyze`
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    /// Text to analyze
    pub text: String,
    /// Entity types to detect
    pub enabled_entities: Vec<String>,
    /// Minimum confidence score for detections
    pub score_threshold: f32,
}

/// Response body for `POST /analyze`
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    /// The analyzed text, echoed back
    pub text: String,
    /// Detected entities
    #[serde(default)]
    pub entities: Vec<DetectedEntity>,
}

/// Request body for `POST /anonymize`
#[derive(Debug, Clone, Serialize)]
pub struct AnonymizeRequest {
    /// Text to anonymize
    pub text: String,
    /// Entity types to detect
    pub enabled_entities: Vec<String>,
    /// Style for the server-side rendering
    pub anonymization_style: String,
    /// Minimum confidence score for detections
    pub score_threshold: f32,
}

/// One supported entity type, from `GET /entities`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityInfo {
    /// Entity type identifier
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Human-readable description
    pub description: String,
    /// Whether this is a Swiss-specific recognizer
    pub is_swiss: bool,
}

/// Response body for `GET /entities`
#[derive(Debug, Clone, Deserialize)]
pub struct EntitiesResponse {
    /// Available entity types
    pub entities: Vec<EntityInfo>,
}

/// Response body for `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status ("healthy" or "unhealthy")
    pub status: String,
    /// Whether the NLP model finished loading
    pub model_loaded: bool,
    /// Service version
    pub version: String,
}

impl HealthResponse {
    /// Whether the service reports itself ready for requests
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy" && self.model_loaded
    }
}

/// Error body the service returns on failures
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure detail
    pub detail: String,
}
