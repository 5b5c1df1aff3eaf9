//! Patient data providers.
//!
//! The dashboard asks a [`PatientProvider`] for its patients once per mount.
//! [`StaticRoster`] serves a fixed list; [`JournalProvider`] asks the desktop
//! host to fetch and summarize the patient's journal.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::commands;
use crate::patient::{Patient, PatientRecord, PatientStatus, SessionMetrics};

/// Prefix the host puts on errors caused by a malformed response body.
const PARSE_ERROR_PREFIX: &str = "Parse error:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The request failed or the endpoint answered with a non-success status.
    Fetch(String),
    /// A response arrived but did not have the expected shape.
    Parse(String),
}

impl ProviderError {
    /// Classify an error string returned by a host command.
    pub fn from_invoke(message: String) -> Self {
        if message.starts_with(PARSE_ERROR_PREFIX) {
            ProviderError::Parse(message)
        } else {
            ProviderError::Fetch(message)
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Fetch(cause) => write!(f, "fetch failed: {}", cause),
            ProviderError::Parse(cause) => write!(f, "unexpected response: {}", cause),
        }
    }
}

pub trait PatientProvider {
    async fn get_patients(&self) -> Result<Vec<Patient>, ProviderError>;
}

/// Fixed two-patient roster used when no journal service is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRoster;

impl StaticRoster {
    pub fn patients() -> Vec<Patient> {
        vec![
            Patient {
                id: "1".to_string(),
                name: "Emily Johnson".to_string(),
                last_session: "2024-05-15".to_string(),
                next_appointment: "2024-06-01".to_string(),
                status: PatientStatus::Active,
                summary_text: "Emily has shown consistent progress in managing anxiety through \
                               cognitive behavioral techniques. Recent sessions focus on stress \
                               management and building resilience."
                    .to_string(),
                metrics: SessionMetrics::from_arrays(
                    [3.0, 4.0, 2.0, 5.0, 3.0, 2.0],
                    [7.0, 6.0, 8.0, 5.0, 7.0, 6.0],
                ),
                scores: None,
            },
            Patient {
                id: "2".to_string(),
                name: "Michael Rodriguez".to_string(),
                last_session: "2024-05-10".to_string(),
                next_appointment: "2024-05-25".to_string(),
                status: PatientStatus::Active,
                summary_text: "Michael is working through workplace-related stress and \
                               developing coping mechanisms. Progress has been steady with \
                               focus on mindfulness and emotional regulation."
                    .to_string(),
                metrics: SessionMetrics::from_arrays(
                    [7.0, 6.0, 6.0, 5.0, 3.0, 3.0],
                    [3.0, 2.0, 5.0, 5.0, 6.0, 8.0],
                ),
                scores: None,
            },
        ]
    }
}

impl PatientProvider for StaticRoster {
    async fn get_patients(&self) -> Result<Vec<Patient>, ProviderError> {
        Ok(Self::patients())
    }
}

/// Single patient synthesized by the host from the journal summary endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct JournalProvider;

impl PatientProvider for JournalProvider {
    async fn get_patients(&self) -> Result<Vec<Patient>, ProviderError> {
        let record = commands::fetch_journal_patient()
            .await
            .map_err(ProviderError::from_invoke)?;
        Ok(vec![patient_from_record(record)?])
    }
}

/// A record the host sent that cannot become a [`Patient`] is a parse failure.
pub fn patient_from_record(record: PatientRecord) -> Result<Patient, ProviderError> {
    Patient::try_from(record).map_err(|e| ProviderError::Parse(e.to_string()))
}

/// Which provider backs the dashboard, as chosen in the host configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientSource {
    Roster,
    Journal,
}

impl PatientSource {
    /// The journal view has a single patient and skips the selection step.
    pub fn auto_selects(&self) -> bool {
        matches!(self, PatientSource::Journal)
    }
}

impl PatientProvider for PatientSource {
    async fn get_patients(&self) -> Result<Vec<Patient>, ProviderError> {
        match self {
            PatientSource::Roster => StaticRoster.get_patients().await,
            PatientSource::Journal => JournalProvider.get_patients().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_is_fixed() {
        let first = StaticRoster::patients();
        let second = StaticRoster::patients();
        assert_eq!(first, second);
        let names: Vec<_> = first.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Emily Johnson", "Michael Rodriguez"]);
    }

    #[test]
    fn test_roster_series_have_six_sessions() {
        for patient in StaticRoster::patients() {
            assert_eq!(patient.metrics.len(), 6, "{} should have 6 sessions", patient.name);
            assert!(patient.scores.is_none());
        }
    }

    #[test]
    fn test_invoke_errors_are_classified() {
        assert_eq!(
            ProviderError::from_invoke("Parse error: missing field `scores`".to_string()),
            ProviderError::Parse("Parse error: missing field `scores`".to_string())
        );
        assert!(matches!(
            ProviderError::from_invoke("HTTP status 502".to_string()),
            ProviderError::Fetch(_)
        ));
        assert!(matches!(
            ProviderError::from_invoke("Fetch error: connection refused".to_string()),
            ProviderError::Fetch(_)
        ));
    }

    #[test]
    fn test_source_parses_from_config() {
        let source: PatientSource = serde_json::from_str("\"journal\"").unwrap();
        assert_eq!(source, PatientSource::Journal);
        assert!(source.auto_selects());
        assert!(!PatientSource::Roster.auto_selects());
        assert!(serde_json::from_str::<PatientSource>("\"spreadsheet\"").is_err());
    }
}
