use chrono::Local;
use tauri::{AppHandle, State};
use tracing::{info, warn};

use super::config::load_config;
use crate::journal::{JournalClient, PatientRecord};

#[tauri::command]
pub async fn fetch_journal_patient(
    app: AppHandle,
    client: State<'_, JournalClient>,
) -> Result<PatientRecord, String> {
    info!("Fetching journal patient");
    let config = load_config(&app)?;
    let url = config.summarize_journal_url()?;

    let summary = client.fetch_summary(&url).await.map_err(|e| {
        warn!("Journal fetch failed: {}", e);
        e
    })?;

    let record = PatientRecord::from_journal(summary, Local::now().date_naive());
    info!(
        "Built journal patient with {} sessions",
        record.mental_health_metrics.anxiety.len()
    );
    Ok(record)
}
