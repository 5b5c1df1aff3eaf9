//! Patient record handed to the frontend.
//!
//! The journal endpoint carries no identity fields, so the record built from
//! it always uses the same id and display name.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{JournalScores, JournalSummary};

pub const JOURNAL_PATIENT_ID: &str = "journal";
pub const JOURNAL_PATIENT_NAME: &str = "Journal Patient";
pub const UNSCHEDULED: &str = "Not scheduled";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub anxiety: Vec<f64>,
    pub stability: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub id: String,
    pub name: String,
    pub last_session: String,
    pub next_appointment: String,
    pub status: PatientStatus,
    pub summary_text: String,
    pub mental_health_metrics: MetricSeries,
    pub scores: Option<JournalScores>,
}

impl PatientRecord {
    /// Shape a journal summary into a record. Happiness readings fill the
    /// stability series; `fetched_on` becomes the last session date.
    pub fn from_journal(summary: JournalSummary, fetched_on: NaiveDate) -> Self {
        let (anxiety, stability) = summary
            .chart_data
            .iter()
            .map(|entry| (entry.anxiety, entry.happiness))
            .unzip();

        Self {
            id: JOURNAL_PATIENT_ID.to_string(),
            name: JOURNAL_PATIENT_NAME.to_string(),
            last_session: fetched_on.format("%Y-%m-%d").to_string(),
            next_appointment: UNSCHEDULED.to_string(),
            status: PatientStatus::Active,
            summary_text: summary.summaries.join(" "),
            mental_health_metrics: MetricSeries { anxiety, stability },
            scores: Some(summary.scores),
        }
    }
}
