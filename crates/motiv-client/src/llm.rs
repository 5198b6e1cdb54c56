use motiv_core::config::CompletionConfig;
use motiv_core::error::AppError;
use motiv_core::models::{ChatMessage, Conversation, GeneratedLetter};
use motiv_core::traits::Completer;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat-completion client.
///
/// Works with any OpenAI-compatible API, including:
/// - OpenAI directly (`https://api.openai.com/v1`)
/// - Gemini via compatibility layer (`https://generativelanguage.googleapis.com/v1beta/openai`)
///
/// The API key is validated when the client is built, so a bad key never
/// reaches the network.
#[derive(Clone)]
pub struct OpenAiCompleter {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiCompleter {
    pub fn new(config: &CompletionConfig) -> Result<Self, AppError> {
        let api_key = config.validated_api_key()?.to_string();

        let client = Client::builder().build().map_err(|e| {
            AppError::CompletionError(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

// ---- OpenAI API types ----

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl Completer for OpenAiCompleter {
    async fn complete(
        &self,
        model: &str,
        conversation: &Conversation,
    ) -> Result<GeneratedLetter, AppError> {
        let url = self.endpoint();
        let request = ChatRequest {
            model,
            messages: conversation.messages(),
        };

        tracing::debug!(%url, model, "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    AppError::CompletionError(format!("Connection failed: {e}"))
                } else {
                    AppError::CompletionError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let body = response.text().await.unwrap_or_default();

            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);

            return Err(AppError::CompletionError(format!(
                "HTTP {status_code}: {message}"
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            AppError::CompletionError(format!("Failed to parse completion response: {e}"))
        })?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(GeneratedLetter)
            .ok_or_else(|| AppError::CompletionError("Empty response from the model".into()))
    }
}
