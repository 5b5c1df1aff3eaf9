use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::patient::PatientRecord;
use crate::provider::PatientSource;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// -- Dashboard config matching backend struct --

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    pub source: PatientSource,
    pub api_base_url: String,
}

// -- Typed invoke helpers --

pub async fn get_dashboard_config() -> Result<DashboardConfig, String> {
    let args = serde_wasm_bindgen::to_value(&serde_json::json!({}))
        .map_err(|e| e.to_string())?;

    let result = invoke("get_dashboard_config", args)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| "Unknown error".to_string()))?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Ask the host to fetch the journal summary and shape it into a patient record.
/// A record that does not deserialize is reported as a parse error.
pub async fn fetch_journal_patient() -> Result<PatientRecord, String> {
    let args = serde_wasm_bindgen::to_value(&serde_json::json!({}))
        .map_err(|e| e.to_string())?;

    let result = invoke("fetch_journal_patient", args)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| "Unknown error".to_string()))?;

    serde_wasm_bindgen::from_value(result).map_err(|e| format!("Parse error: {}", e))
}
