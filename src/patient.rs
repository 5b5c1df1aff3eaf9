//! Patient records shown on the dashboard.
//!
//! Session readings are stored as pairs so the anxiety and stability series
//! can never drift apart once a [`Patient`] exists. Records arriving from the
//! desktop host still use two parallel arrays and are checked on conversion.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientStatus {
    Active,
    Inactive,
}

impl PatientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Active => "Active",
            PatientStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One session's pair of readings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionReading {
    pub anxiety: f64,
    pub stability: f64,
}

/// Raised when two parallel metric series have different lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnequalSeriesLength {
    pub anxiety: usize,
    pub stability: usize,
}

impl fmt::Display for UnequalSeriesLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "metric series differ in length: {} anxiety readings, {} stability readings",
            self.anxiety, self.stability
        )
    }
}

impl std::error::Error for UnequalSeriesLength {}

/// Ordered per-session readings for one patient.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionMetrics {
    readings: Vec<SessionReading>,
}

impl SessionMetrics {
    /// Build from two fixed-size series. Equal length is checked at compile time.
    pub fn from_arrays<const N: usize>(anxiety: [f64; N], stability: [f64; N]) -> Self {
        let readings = anxiety
            .into_iter()
            .zip(stability)
            .map(|(anxiety, stability)| SessionReading { anxiety, stability })
            .collect();
        Self { readings }
    }

    /// Build from two runtime series, rejecting a length mismatch instead of truncating.
    pub fn from_series(
        anxiety: Vec<f64>,
        stability: Vec<f64>,
    ) -> Result<Self, UnequalSeriesLength> {
        if anxiety.len() != stability.len() {
            return Err(UnequalSeriesLength {
                anxiety: anxiety.len(),
                stability: stability.len(),
            });
        }
        let readings = anxiety
            .into_iter()
            .zip(stability)
            .map(|(anxiety, stability)| SessionReading { anxiety, stability })
            .collect();
        Ok(Self { readings })
    }

    pub fn readings(&self) -> &[SessionReading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// Headline scores returned alongside a journal summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub anxiety: f64,
    pub happiness: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub last_session: String,
    pub next_appointment: String,
    pub status: PatientStatus,
    pub summary_text: String,
    pub metrics: SessionMetrics,
    pub scores: Option<Scores>,
}

/// A labelled line in the "Key Observations" list.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub label: &'static str,
    pub value: String,
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

impl Patient {
    /// Observations for the detail pane. Scores are listed only when present.
    pub fn observations(&self) -> Vec<Observation> {
        let mut observations = vec![
            Observation {
                label: "Next Appointment",
                value: self.next_appointment.clone(),
            },
            Observation {
                label: "Current Status",
                value: self.status.to_string(),
            },
        ];
        if let Some(scores) = self.scores {
            observations.push(Observation {
                label: "Anxiety Score",
                value: scores.anxiety.to_string(),
            });
            observations.push(Observation {
                label: "Happiness Score",
                value: scores.happiness.to_string(),
            });
        }
        observations
    }
}

// -- Wire shape matching the host's PatientRecord --

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricSeries {
    pub anxiety: Vec<f64>,
    pub stability: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub id: String,
    pub name: String,
    pub last_session: String,
    pub next_appointment: String,
    pub status: PatientStatus,
    pub summary_text: String,
    pub mental_health_metrics: MetricSeries,
    #[serde(default)]
    pub scores: Option<Scores>,
}

impl TryFrom<PatientRecord> for Patient {
    type Error = UnequalSeriesLength;

    fn try_from(record: PatientRecord) -> Result<Self, Self::Error> {
        let metrics = SessionMetrics::from_series(
            record.mental_health_metrics.anxiety,
            record.mental_health_metrics.stability,
        )?;
        Ok(Patient {
            id: record.id,
            name: record.name,
            last_session: record.last_session,
            next_appointment: record.next_appointment,
            status: record.status,
            summary_text: record.summary_text,
            metrics,
            scores: record.scores,
        })
    }
}
