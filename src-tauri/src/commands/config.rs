use tauri::AppHandle;
use tauri_plugin_store::StoreExt;
use tracing::{info, warn};

use crate::config::{
    ConfigLayer, DashboardConfig, API_BASE_URL_KEY, PREFERENCES_STORE, SOURCE_KEY,
};
use crate::error::DashboardError;

#[tauri::command]
pub fn get_dashboard_config(app: AppHandle) -> Result<DashboardConfig, String> {
    let config = load_config(&app).map_err(|e| {
        warn!("Failed to load dashboard config: {}", e);
        e
    })?;
    info!(
        "Dashboard config: source={:?}, api_base_url={}",
        config.source, config.api_base_url
    );
    Ok(config)
}

/// Resolve the config from the environment and the preferences store.
pub(crate) fn load_config(app: &AppHandle) -> Result<DashboardConfig, DashboardError> {
    let store = app
        .store(PREFERENCES_STORE)
        .map_err(|e| DashboardError::Store(e.to_string()))?;
    let read = |key: &str| store.get(key).and_then(|v| v.as_str().map(|s| s.to_string()));
    let stored = ConfigLayer {
        source: read(SOURCE_KEY),
        api_base_url: read(API_BASE_URL_KEY),
    };
    DashboardConfig::resolve(ConfigLayer::from_env(), stored)
}
