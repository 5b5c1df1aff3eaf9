use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// One session's readings as returned by `/summarize_journal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    #[serde(rename = "Anxiety")]
    pub anxiety: f64,
    #[serde(rename = "Happiness")]
    pub happiness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JournalScores {
    pub anxiety: f64,
    pub happiness: f64,
}

/// Response body of the journal summarization endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalSummary {
    pub chart_data: Vec<ChartEntry>,
    pub summaries: Vec<String>,
    pub scores: JournalScores,
}

impl JournalSummary {
    pub fn from_json(body: &str) -> Result<Self, DashboardError> {
        serde_json::from_str(body).map_err(|e| DashboardError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_expected_shape() {
        let body = r#"{
            "chartData": [{"Anxiety": 6, "Happiness": 3}, {"Anxiety": 4.5, "Happiness": 5}],
            "summaries": ["Work stress peaked midweek.", "Weekend was calmer."],
            "scores": {"anxiety": 5, "happiness": 4}
        }"#;
        let summary = JournalSummary::from_json(body).unwrap();
        assert_eq!(summary.chart_data.len(), 2);
        assert_eq!(summary.chart_data[1].anxiety, 4.5);
        assert_eq!(summary.scores.happiness, 4.0);
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let body = r#"{"chartData": [], "summaries": []}"#;
        let err = JournalSummary::from_json(body).unwrap_err();
        assert!(matches!(err, DashboardError::Parse(_)));
        assert!(err.to_string().contains("scores"), "got: {}", err);
    }

    #[test]
    fn test_entry_missing_metric_is_parse_error() {
        let body = r#"{
            "chartData": [{"Anxiety": 6}],
            "summaries": [],
            "scores": {"anxiety": 5, "happiness": 4}
        }"#;
        assert!(matches!(
            JournalSummary::from_json(body),
            Err(DashboardError::Parse(_))
        ));
    }

    #[test]
    fn test_non_json_body_is_parse_error() {
        assert!(matches!(
            JournalSummary::from_json("<html>502 Bad Gateway</html>"),
            Err(DashboardError::Parse(_))
        ));
    }
}
