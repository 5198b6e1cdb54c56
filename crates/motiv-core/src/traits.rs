use std::future::Future;

use crate::error::AppError;
use crate::models::{Conversation, ExtractedContent, FetchedPage, GeneratedLetter};

/// Fetches raw HTML content from a URL.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchedPage, AppError>> + Send;
}

/// Turns raw HTML into a page title and its visible body text.
pub trait ContentExtractor: Send + Sync + Clone {
    fn extract(&self, page: &FetchedPage) -> Result<ExtractedContent, AppError>;
}

/// Sends a conversation to a chat-completion endpoint.
pub trait Completer: Send + Sync + Clone {
    /// Returns the content of the first choice in the reply.
    fn complete(
        &self,
        model: &str,
        conversation: &Conversation,
    ) -> impl Future<Output = Result<GeneratedLetter, AppError>> + Send;
}
