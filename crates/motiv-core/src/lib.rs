pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod prompt;
pub mod traits;


pub use config::CompletionConfig;
pub use error::AppError;
pub use models::{ChatMessage, Conversation, ExtractedContent, FetchedPage, GeneratedLetter, Role};
pub use pipeline::{LetterService, fetch_and_extract, report};
pub use traits::{Completer, ContentExtractor, Fetcher};
