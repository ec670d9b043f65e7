//! Analysis Service Client
//!
//! `POST {base}/timeline/analyze/` with a timeline document. The service
//! answers `{ status, message?, data }` where `data` is a markdown narrative.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::config::AppConfig;
use crate::timeline::TimelineDocument;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Server responded with status: {0}")]
    Rejected(String),
}

/// Body returned by the analysis service
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
}

impl AnalysisResponse {
    pub fn is_success(&self) -> bool {
        matches!(self.status, Some(200) | Some(201)) || self.message.as_deref() == Some("OK")
    }

    /// The markdown narrative, or the reason the service gave for not
    /// producing one
    pub fn into_narrative(self) -> Result<String, AnalysisError> {
        if self.is_success() {
            return Ok(self.data.unwrap_or_default());
        }
        let reason = match (self.status, self.message) {
            (Some(status), Some(message)) => format!("{} ({})", status, message),
            (Some(status), None) => status.to_string(),
            (None, Some(message)) => message,
            (None, None) => "unknown".to_string(),
        };
        Err(AnalysisError::Rejected(reason))
    }
}

/// Anything that can submit a timeline and return the service's answer
#[allow(async_fn_in_trait)]
pub trait AnalysisTransport {
    async fn analyze(&self, document: &TimelineDocument) -> Result<AnalysisResponse, AnalysisError>;
}

/// HTTP client for the analysis service
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    endpoint: String,
    client: Client,
}

impl AnalysisClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.analyze_url())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AnalysisTransport for AnalysisClient {
    async fn analyze(&self, document: &TimelineDocument) -> Result<AnalysisResponse, AnalysisError> {
        log::debug!("[ANALYSIS] POST {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(document).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Server(format!("{}: {}", status, body)));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> AnalysisResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_success_by_status_or_message() {
        assert!(parse(r#"{"status": 200, "data": "ok"}"#).is_success());
        assert!(parse(r#"{"status": 201, "data": "ok"}"#).is_success());
        assert!(parse(r#"{"status": 500, "message": "OK"}"#).is_success());
        assert!(!parse(r#"{"status": 422, "data": "bad"}"#).is_success());
        assert!(!parse(r#"{}"#).is_success());
    }

    #[test]
    fn test_into_narrative() {
        let narrative = parse(r###"{"status": 200, "data": "## Bilan"}"###).into_narrative().unwrap();
        assert_eq!(narrative, "## Bilan");

        let missing_data = parse(r#"{"message": "OK"}"#).into_narrative().unwrap();
        assert_eq!(missing_data, "");

        let err = parse(r#"{"status": 503, "message": "busy"}"#).into_narrative().unwrap_err();
        assert_eq!(err.to_string(), "Server responded with status: 503 (busy)");
    }

    #[test]
    fn test_client_endpoint_from_config() {
        let config = AppConfig::new(Some("http://analysis.local/api/"), None);
        let client = AnalysisClient::from_config(&config);
        assert_eq!(client.endpoint(), "http://analysis.local/api/timeline/analyze/");
    }
}
