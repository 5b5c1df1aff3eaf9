pub mod metrics_chart;
pub mod patient_detail;
pub mod patient_list;
pub mod status_badge;
