use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Key prefix used by OpenAI project keys.
pub const DEFAULT_KEY_PREFIX: &str = "sk-proj-";

/// Settings for the chat-completion client.
#[derive(Clone)]
pub struct CompletionConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Prefix every valid key for the configured provider starts with.
    pub key_prefix: String,
}

impl CompletionConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Check the API key and return it.
    ///
    /// - empty or absent → "No API key was found."
    /// - leading/trailing whitespace → dirty key
    /// - wrong prefix → malformed key
    ///
    /// Whitespace is checked before the prefix so `" sk-proj-..."` is
    /// reported as a whitespace problem.
    pub fn validated_api_key(&self) -> Result<&str, AppError> {
        let key = match self.api_key.as_deref() {
            Some(k) if !k.is_empty() => k,
            _ => return Err(AppError::ConfigError("No API key was found.".into())),
        };

        if key.trim() != key {
            return Err(AppError::ConfigError(
                "API key has leading/trailing whitespace. Please clean it.".into(),
            ));
        }

        if !key.starts_with(&self.key_prefix) {
            return Err(AppError::ConfigError(format!(
                "API key doesn't start with '{}'. Check your key.",
                self.key_prefix
            )));
        }

        Ok(key)
    }
}

impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("key_prefix", &self.key_prefix)
            .finish()
    }
}
