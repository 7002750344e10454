//! Recommendation generator response model

use serde::{Deserialize, Serialize};

/// Structured advice returned by the recommendation generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryResponse {
    pub answer: String,
    pub recommendations: Vec<String>,
    pub urgent_alerts: Vec<String>,
    /// Generator self-reported confidence in [0, 1]
    pub confidence: f32,
    /// Which data sources informed the advice
    pub sources: Vec<String>,
}
