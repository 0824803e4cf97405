use reqwest::StatusCode;

/// Why a feedback submission failed.
///
/// The user sees a single "submission failed" notice; the variants only feed the log.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned {0}")]
    Status(StatusCode),

    /// The response body was not valid JSON.
    #[error("invalid response body: {0}")]
    Body(#[source] reqwest::Error),
}
