//! Side-effecting boundaries: posting feedback and opening the review page.
//!
//! Both are traits so the session and the app can be driven without a
//! network or a browser.

mod error;
mod http;
mod navigator;

use async_trait::async_trait;
use serde_json::Value;

use crate::model::FeedbackPayload;

pub use error::SubmitError;
pub use http::HttpSink;
pub use navigator::{BrowserNavigator, Navigator};

/// Somewhere feedback can be submitted.
#[async_trait]
pub trait FeedbackSink: Send + Sync {
    /// Sends one payload and returns the parsed response body.
    async fn submit(&self, payload: &FeedbackPayload) -> Result<Value, SubmitError>;
}

/// Runs a single submission, logging the outcome.
pub async fn deliver(sink: &dyn FeedbackSink, payload: &FeedbackPayload) -> Result<(), SubmitError> {
    match sink.submit(payload).await {
        Ok(response) => {
            tracing::info!(reason = %payload.reason, %response, "feedback submitted");
            Ok(())
        }
        Err(err) => {
            tracing::error!(reason = %payload.reason, error = %err, "feedback submission failed");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use reqwest::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::model::Reason;

    struct Fixed(Option<StatusCode>);

    #[async_trait]
    impl FeedbackSink for Fixed {
        async fn submit(&self, _payload: &FeedbackPayload) -> Result<Value, SubmitError> {
            match self.0 {
                None => Ok(json!({})),
                Some(status) => Err(SubmitError::Status(status)),
            }
        }
    }

    fn payload() -> FeedbackPayload {
        FeedbackPayload::new(
            Reason::Quality,
            "",
            Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn deliver_passes_success_through() {
        assert!(deliver(&Fixed(None), &payload()).await.is_ok());
    }

    #[tokio::test]
    async fn deliver_passes_failure_through() {
        let err = deliver(&Fixed(Some(StatusCode::BAD_GATEWAY)), &payload())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "endpoint returned 502 Bad Gateway");
    }
}
