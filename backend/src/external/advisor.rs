//! Recommendation generator client
//!
//! The generator is an opaque service: aggregated farmer context in,
//! structured advice out. Its model and prompting are not this
//! application's concern.

use reqwest::Client;
use serde::Serialize;

use shared::{AdvisoryResponse, AggregatedFarmerContext};

use crate::error::{AppError, AppResult};

/// Client for the recommendation generator service
#[derive(Clone)]
pub struct AdvisorClient {
    endpoint: String,
    api_key: String,
    http_client: Client,
}

/// Request to generate advice for a farmer
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    context: &'a AggregatedFarmerContext,
    question: &'a str,
}

impl AdvisorClient {
    /// Create a new AdvisorClient
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            endpoint,
            api_key,
            http_client: Client::new(),
        }
    }

    /// Generate advice from an aggregated context and a farmer question.
    ///
    /// The generator is expected to inspect `data_completeness` and degrade
    /// its answer rather than fail when sources are missing.
    pub async fn generate(
        &self,
        context: &AggregatedFarmerContext,
        question: &str,
    ) -> AppResult<AdvisoryResponse> {
        let url = format!("{}/v1/advice", self.endpoint);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&GenerateRequest { context, question })
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Advisor request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Advisor returned {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("Failed to parse advisor response: {}", e)))
    }
}
