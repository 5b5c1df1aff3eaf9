mod commands;
pub mod config;
pub mod error;
pub mod journal;

pub use config::{ConfigLayer, DashboardConfig, PatientSource};
pub use error::DashboardError;
pub use journal::{JournalClient, JournalSummary, PatientRecord};

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let journal_client = match JournalClient::new() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Cannot start: {}", e);
            return;
        }
    };

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .manage(journal_client)
        .invoke_handler(tauri::generate_handler![
            commands::config::get_dashboard_config,
            commands::journal::fetch_journal_patient,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
