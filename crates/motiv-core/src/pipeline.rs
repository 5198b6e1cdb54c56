use std::io::{self, Write};

use crate::error::AppError;
use crate::models::{ExtractedContent, GeneratedLetter};
use crate::prompt::{SYSTEM_PROMPT, build_conversation_with};
use crate::traits::{Completer, ContentExtractor, Fetcher};

/// Orchestrates the letter pipeline: fetch → extract → build prompt → complete.
///
/// Generic over all external dependencies via traits, enabling dependency injection
/// and testability without real HTTP or LLM calls.
pub struct LetterService<F, X, C>
where
    F: Fetcher,
    X: ContentExtractor,
    C: Completer,
{
    fetcher: F,
    extractor: X,
    completer: C,
    model_name: String,
    system_prompt: String,
}

impl<F, X, C> LetterService<F, X, C>
where
    F: Fetcher,
    X: ContentExtractor,
    C: Completer,
{
    pub fn new(fetcher: F, extractor: X, completer: C, model_name: String) -> Self {
        Self {
            fetcher,
            extractor,
            completer,
            model_name,
            system_prompt: SYSTEM_PROMPT.to_string(),
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Fetch a page and pull out its title and visible text.
    pub async fn extract(&self, url: &str) -> Result<ExtractedContent, AppError> {
        fetch_and_extract(&self.fetcher, &self.extractor, url).await
    }

    /// Run the full pipeline for one URL.
    ///
    /// The first failing stage ends the run; later stages never execute.
    pub async fn write_letter(&self, url: &str) -> Result<GeneratedLetter, AppError> {
        let content = self.extract(url).await?;
        let conversation = build_conversation_with(&self.system_prompt, &content);

        tracing::info!("Generating letter with model {} ...", self.model_name);
        let letter = self
            .completer
            .complete(&self.model_name, &conversation)
            .await?;
        tracing::info!("Received {} bytes of letter text", letter.as_str().len());

        Ok(letter)
    }
}

/// The fetch and extract stages on their own; needs no completer or key.
pub async fn fetch_and_extract<F, X>(
    fetcher: &F,
    extractor: &X,
    url: &str,
) -> Result<ExtractedContent, AppError>
where
    F: Fetcher,
    X: ContentExtractor,
{
    tracing::info!("Fetching {}", url);
    let page = fetcher.fetch(url).await?;
    tracing::info!("Fetched {} bytes of HTML", page.raw_html.len());

    let content = extractor.extract(&page)?;
    tracing::info!(
        title = %content.title,
        "Extracted {} bytes of text",
        content.body_text.len()
    );
    Ok(content)
}

/// Print the outcome of a run: the full letter to `out`, or exactly one
/// error line to `err`. Returns whether the run succeeded.
pub fn report<T: std::fmt::Display>(
    result: &Result<T, AppError>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    match result {
        Ok(value) => {
            writeln!(out, "{value}")?;
            Ok(true)
        }
        Err(e) => {
            writeln!(err, "An error occurred: {}", e.one_line())?;
            Ok(false)
        }
    }
}
