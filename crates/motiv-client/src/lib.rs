pub mod extractor;
pub mod fetcher;
pub mod llm;

pub use extractor::ScraperExtractor;
pub use fetcher::ReqwestFetcher;
pub use llm::OpenAiCompleter;
