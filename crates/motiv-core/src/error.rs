use thiserror::Error;

/// Application-wide error types for motiv.
///
/// Every stage of the pipeline fails with exactly one of these kinds. None of
/// them is retried: the driver reports the error and the run ends.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed configuration (API key, endpoint settings).
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Retrieving the page failed (transport fault or non-2xx status).
    #[error("Failed to fetch the website: {0}")]
    FetchError(String),

    /// The fetched HTML could not be turned into title and body text.
    #[error("Failed to parse the website: {0}")]
    ParseError(String),

    /// The chat-completion endpoint could not be reached or returned an error.
    #[error("Failed to generate response from the completion API: {0}")]
    CompletionError(String),
}

impl AppError {
    /// Render the error as a single line, collapsing any embedded newlines
    /// (provider error bodies are often pretty-printed JSON).
    pub fn one_line(&self) -> String {
        self.to_string().split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
