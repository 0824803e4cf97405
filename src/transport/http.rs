use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use super::error::SubmitError;
use super::FeedbackSink;
use crate::model::FeedbackPayload;

/// Posts feedback as JSON to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpSink {
    http: Client,
    endpoint: Url,
}

impl HttpSink {
    /// Creates a sink posting to `endpoint`.
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(concat!("feedbox/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, endpoint })
    }

    /// Returns the endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl FeedbackSink for HttpSink {
    async fn submit(&self, payload: &FeedbackPayload) -> Result<Value, SubmitError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(SubmitError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status));
        }

        response.json::<Value>().await.map_err(SubmitError::Body)
    }
}
