use std::path::PathBuf;

use chrono::NaiveDate;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

use therapist_dashboard_tauri::journal::record::{JOURNAL_PATIENT_ID, JOURNAL_PATIENT_NAME};
use therapist_dashboard_tauri::journal::PatientStatus;
use therapist_dashboard_tauri::{DashboardError, JournalClient, JournalSummary, PatientRecord};

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).expect("Failed to read fixture")
}

fn fetched_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

fn test_client() -> JournalClient {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build test client");
    JournalClient::from_client(client)
}

/// Serve a single canned HTTP response on a random local port.
async fn serve_once(status_line: &'static str, body: String) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 2048];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });
    Url::parse(&format!("http://{}/summarize_journal", addr)).unwrap()
}

#[test]
fn test_record_from_six_session_summary() {
    let summary = JournalSummary::from_json(&fixture("summarize_journal.json")).unwrap();
    assert_eq!(summary.summaries.len(), 2);

    let record = PatientRecord::from_journal(summary.clone(), fetched_on());

    assert_eq!(record.id, JOURNAL_PATIENT_ID);
    assert_eq!(record.name, JOURNAL_PATIENT_NAME);
    assert_eq!(record.status, PatientStatus::Active);
    assert_eq!(record.last_session, "2024-06-03");
    assert_eq!(
        record.summary_text,
        format!("{} {}", summary.summaries[0], summary.summaries[1])
    );
    assert_eq!(record.mental_health_metrics.anxiety.len(), 6);
    assert_eq!(record.mental_health_metrics.stability.len(), 6);
    assert_eq!(record.mental_health_metrics.anxiety[0], 7.0);
    assert_eq!(record.mental_health_metrics.stability[5], 7.0);
    assert_eq!(record.scores, Some(summary.scores));
}

#[test]
fn test_record_serializes_in_frontend_shape() {
    let summary = JournalSummary::from_json(&fixture("summarize_journal.json")).unwrap();
    let record = PatientRecord::from_journal(summary, fetched_on());
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["lastSession"], "2024-06-03");
    assert_eq!(value["nextAppointment"], "Not scheduled");
    assert_eq!(value["status"], "Active");
    assert!(value["mentalHealthMetrics"]["anxiety"].is_array());
    assert!(value["mentalHealthMetrics"]["stability"].is_array());
    assert_eq!(value["scores"]["happiness"], 5.0);
}

#[test]
fn test_empty_summary_yields_empty_series() {
    let summary = JournalSummary::from_json(
        r#"{"chartData": [], "summaries": [], "scores": {"anxiety": 0, "happiness": 0}}"#,
    )
    .unwrap();
    let record = PatientRecord::from_journal(summary, fetched_on());
    assert!(record.mental_health_metrics.anxiety.is_empty());
    assert_eq!(record.summary_text, "");
}

#[test]
fn test_missing_scores_fixture_is_parse_error() {
    let err = JournalSummary::from_json(&fixture("missing_scores.json")).unwrap_err();
    assert!(matches!(err, DashboardError::Parse(_)));
    assert!(String::from(err).starts_with("Parse error:"));
}

#[tokio::test]
async fn test_fetch_summary_success() {
    let url = serve_once("HTTP/1.1 200 OK", fixture("summarize_journal.json")).await;
    let summary = test_client().fetch_summary(&url).await.unwrap();
    assert_eq!(summary.chart_data.len(), 6);
    assert_eq!(summary.scores.anxiety, 5.0);
}

#[tokio::test]
async fn test_fetch_summary_server_error_is_status_error() {
    let url = serve_once(
        "HTTP/1.1 500 Internal Server Error",
        r#"{"error": "model unavailable"}"#.to_string(),
    )
    .await;
    let err = test_client().fetch_summary(&url).await.unwrap_err();
    assert!(matches!(err, DashboardError::Status(500)), "got: {:?}", err);
}

#[tokio::test]
async fn test_fetch_summary_bad_body_is_parse_error() {
    let url = serve_once("HTTP/1.1 200 OK", fixture("missing_scores.json")).await;
    let err = test_client().fetch_summary(&url).await.unwrap_err();
    assert!(matches!(err, DashboardError::Parse(_)), "got: {:?}", err);
}

#[tokio::test]
async fn test_fetch_summary_refused_connection_is_fetch_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = Url::parse(&format!("http://{}/summarize_journal", addr)).unwrap();
    let err = test_client().fetch_summary(&url).await.unwrap_err();
    assert!(matches!(err, DashboardError::Fetch(_)), "got: {:?}", err);
    assert!(err.to_string().starts_with("Fetch error:"));
}
