use std::time::Duration;

use tracing::{info, warn};
use url::Url;

use super::types::JournalSummary;
use crate::error::DashboardError;

const USER_AGENT: &str = "TherapistDashboard/0.1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the journal summarization service.
/// Built once at startup and shared through Tauri managed state.
pub struct JournalClient {
    client: reqwest::Client,
}

impl JournalClient {
    pub fn new() -> Result<Self, DashboardError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DashboardError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Issue one GET to `url` and parse the summary.
    /// Non-success statuses and malformed bodies are errors; nothing is retried.
    pub async fn fetch_summary(&self, url: &Url) -> Result<JournalSummary, DashboardError> {
        info!("Requesting journal summary from {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| DashboardError::Fetch(format!("Failed to reach '{}': {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "Journal service returned {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
            return Err(DashboardError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::Fetch(format!("Failed to read response body: {}", e)))?;

        let summary = JournalSummary::from_json(&body)?;
        info!(
            "Journal summary parsed: {} sessions, {} summaries",
            summary.chart_data.len(),
            summary.summaries.len()
        );
        Ok(summary)
    }
}
