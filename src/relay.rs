//! Form relay: forwards site form submissions to an automation webhook.
//!
//! One POST per submission, JSON body `{ type, data, timestamp }`. No retries;
//! the caller decides what to tell the visitor on failure.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use planwell_core::config::PlanwellConfig;
use serde::Serialize;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Contact,
    Webinar,
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormKind::Contact => f.write_str("contact"),
            FormKind::Webinar => f.write_str("webinar"),
        }
    }
}

/// The payload the webhook receives.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    #[serde(rename = "type")]
    pub kind: FormKind,
    pub data: BTreeMap<String, String>,
    /// RFC 3339 with milliseconds, e.g. `2025-12-30T16:00:00.000Z`
    pub timestamp: String,
}

impl Submission {
    pub fn new(kind: FormKind, data: BTreeMap<String, String>, at: DateTime<Utc>) -> Self {
        Submission {
            kind,
            data,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("No webhook configured for {0} submissions")]
    NotConfigured(FormKind),

    #[error("Webhook responded with HTTP {0}")]
    Status(u16),

    #[error("Webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub struct WebhookRelay {
    client: reqwest::Client,
    contact: Option<Url>,
    webinar: Option<Url>,
}

impl WebhookRelay {
    pub fn new(contact: Option<Url>, webinar: Option<Url>) -> Self {
        WebhookRelay {
            client: reqwest::Client::new(),
            contact,
            webinar,
        }
    }

    pub fn from_config(config: &PlanwellConfig) -> Self {
        Self::new(config.contact_webhook.clone(), config.webinar_webhook.clone())
    }

    pub fn endpoint(&self, kind: FormKind) -> Result<&Url, RelayError> {
        match kind {
            FormKind::Contact => self.contact.as_ref(),
            FormKind::Webinar => self.webinar.as_ref(),
        }
        .ok_or(RelayError::NotConfigured(kind))
    }

    pub async fn submit(&self, submission: &Submission) -> Result<(), RelayError> {
        let url = self.endpoint(submission.kind)?;
        tracing::info!(
            kind = %submission.kind,
            fields = submission.data.len(),
            "relaying form submission"
        );

        let response = self
            .client
            .post(url.clone())
            .json(submission)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "webhook submission error"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "webhook submission failed");
            return Err(RelayError::Status(status.as_u16()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn submission(kind: FormKind) -> Submission {
        let data = BTreeMap::from([
            ("email".to_string(), "jane@example.com".to_string()),
            ("webinar_id".to_string(), "dec-30-2025".to_string()),
        ]);
        Submission::new(kind, data, Utc.with_ymd_and_hms(2025, 12, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_submission_json_shape() {
        let json = serde_json::to_value(submission(FormKind::Webinar)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "webinar",
                "data": { "email": "jane@example.com", "webinar_id": "dec-30-2025" },
                "timestamp": "2025-12-01T12:00:00.000Z",
            })
        );
    }

    #[tokio::test]
    async fn test_submit_posts_json() {
        let server = MockServer::start().await;
        let expected = serde_json::to_value(submission(FormKind::Contact)).unwrap();

        Mock::given(method("POST"))
            .and(path("/webhook/contact"))
            .and(header("content-type", "application/json"))
            .and(body_json(expected))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/webhook/contact", server.uri())).unwrap();
        let relay = WebhookRelay::new(Some(url), None);
        relay.submit(&submission(FormKind::Contact)).await.unwrap();
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/webhook/webinar"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/webhook/webinar", server.uri())).unwrap();
        let relay = WebhookRelay::new(None, Some(url));
        let err = relay.submit(&submission(FormKind::Webinar)).await.unwrap_err();
        assert!(matches!(err, RelayError::Status(502)));
        assert_eq!(err.to_string(), "Webhook responded with HTTP 502");
    }

    #[tokio::test]
    async fn test_missing_endpoint() {
        let relay = WebhookRelay::new(None, None);
        let err = relay.submit(&submission(FormKind::Contact)).await.unwrap_err();
        assert!(matches!(err, RelayError::NotConfigured(FormKind::Contact)));
    }

    #[tokio::test]
    async fn test_unreachable_webhook_is_transport_error() {
        let url = Url::parse("http://127.0.0.1:1/webhook/contact").unwrap();
        let relay = WebhookRelay::new(Some(url), None);
        let err = relay.submit(&submission(FormKind::Contact)).await.unwrap_err();
        assert!(matches!(err, RelayError::Transport(_)));
    }
}
