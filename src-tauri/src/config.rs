//! Dashboard configuration.
//!
//! Values come from three layers, highest priority first: environment
//! variables, the `preferences.json` store, then built-in defaults.

use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use crate::error::DashboardError;

pub const PREFERENCES_STORE: &str = "preferences.json";
pub const SOURCE_KEY: &str = "patient_source";
pub const API_BASE_URL_KEY: &str = "api_base_url";

pub const SOURCE_ENV: &str = "THERAPIST_DASHBOARD_SOURCE";
pub const API_BASE_URL_ENV: &str = "THERAPIST_DASHBOARD_API_URL";

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const SUMMARIZE_JOURNAL_PATH: &str = "summarize_journal";

/// Where the dashboard gets its patients from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientSource {
    /// Built-in sample roster.
    Roster,
    /// Single patient synthesized from the journal summary endpoint.
    #[default]
    Journal,
}

impl PatientSource {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "roster" => Some(PatientSource::Roster),
            "journal" => Some(PatientSource::Journal),
            _ => None,
        }
    }
}

/// Raw values from one configuration layer. Empty strings count as unset.
#[derive(Debug, Clone, Default)]
pub struct ConfigLayer {
    pub source: Option<String>,
    pub api_base_url: Option<String>,
}

impl ConfigLayer {
    pub fn from_env() -> Self {
        Self {
            source: std::env::var(SOURCE_ENV).ok(),
            api_base_url: std::env::var(API_BASE_URL_ENV).ok(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardConfig {
    pub source: PatientSource,
    pub api_base_url: String,
}

impl DashboardConfig {
    pub fn resolve(env: ConfigLayer, stored: ConfigLayer) -> Result<Self, DashboardError> {
        let source = match first_set(env.source, stored.source) {
            Some(raw) => PatientSource::parse(&raw).unwrap_or_else(|| {
                warn!("Unknown patient source '{}', using default", raw);
                PatientSource::default()
            }),
            None => PatientSource::default(),
        };

        let raw_url = first_set(env.api_base_url, stored.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = normalize_base_url(&raw_url)?;

        Ok(Self {
            source,
            api_base_url,
        })
    }

    /// Full URL of the journal summarization endpoint.
    pub fn summarize_journal_url(&self) -> Result<Url, DashboardError> {
        let joined = format!("{}/{}", self.api_base_url, SUMMARIZE_JOURNAL_PATH);
        Url::parse(&joined)
            .map_err(|e| DashboardError::Config(format!("Invalid endpoint URL '{}': {}", joined, e)))
    }
}

fn first_set(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    primary
        .filter(|s| !s.trim().is_empty())
        .or_else(|| fallback.filter(|s| !s.trim().is_empty()))
}

/// Check the base URL is absolute http(s) and strip trailing slashes.
fn normalize_base_url(raw: &str) -> Result<String, DashboardError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed)
        .map_err(|e| DashboardError::Config(format!("Invalid API base URL '{}': {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(DashboardError::Config(format!(
            "Unsupported scheme '{}' in API base URL '{}'",
            other, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(source: Option<&str>, url: Option<&str>) -> ConfigLayer {
        ConfigLayer {
            source: source.map(String::from),
            api_base_url: url.map(String::from),
        }
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = DashboardConfig::resolve(ConfigLayer::default(), ConfigLayer::default()).unwrap();
        assert_eq!(config.source, PatientSource::Journal);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_env_beats_store() {
        let config = DashboardConfig::resolve(
            layer(Some("roster"), Some("https://notes.example.org")),
            layer(Some("journal"), Some("http://10.0.0.2:5000")),
        )
        .unwrap();
        assert_eq!(config.source, PatientSource::Roster);
        assert_eq!(config.api_base_url, "https://notes.example.org");
    }

    #[test]
    fn test_store_used_when_env_empty() {
        let config = DashboardConfig::resolve(
            layer(Some(""), Some("  ")),
            layer(Some("Roster"), Some("http://10.0.0.2:5000")),
        )
        .unwrap();
        assert_eq!(config.source, PatientSource::Roster);
        assert_eq!(config.api_base_url, "http://10.0.0.2:5000");
    }

    #[test]
    fn test_unknown_source_falls_back_to_default() {
        let config =
            DashboardConfig::resolve(layer(Some("spreadsheet"), None), ConfigLayer::default())
                .unwrap();
        assert_eq!(config.source, PatientSource::Journal);
    }

    #[test]
    fn test_trailing_slash_does_not_double_up() {
        let config = DashboardConfig::resolve(
            layer(None, Some("http://localhost:5000/api/")),
            ConfigLayer::default(),
        )
        .unwrap();
        assert_eq!(
            config.summarize_journal_url().unwrap().as_str(),
            "http://localhost:5000/api/summarize_journal"
        );
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let err = DashboardConfig::resolve(layer(None, Some("ftp://files.local")), ConfigLayer::default())
            .unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));

        let err = DashboardConfig::resolve(layer(None, Some("not a url")), ConfigLayer::default())
            .unwrap_err();
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[test]
    fn test_source_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PatientSource::Roster).unwrap(), "\"roster\"");
    }
}
