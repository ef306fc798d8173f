//! Departures client error types.

/// Errors from the departures HTTP client.
///
/// These are surfaced to the aggregation layer, which maps every variant
/// to "no departures for this stop" for display while keeping the
/// distinction available to callers.
#[derive(Debug, thiserror::Error)]
pub enum ZtmError {
    /// HTTP request failed (connection error, timeout, etc.)
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned a non-success status code
    #[error("api error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not valid JSON for the expected shape
    #[error("json parse error: {message}")]
    Json {
        message: String,
        /// Truncated body echo for debugging
        body: Option<String>,
    },
}
