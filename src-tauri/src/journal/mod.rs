pub mod client;
pub mod record;
pub mod types;

pub use client::JournalClient;
pub use record::{MetricSeries, PatientRecord, PatientStatus};
pub use types::{ChartEntry, JournalScores, JournalSummary};
