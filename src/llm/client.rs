//! Chat completion client for OpenAI-compatible APIs.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::provider::ProviderConfig;

/// Sampling defaults applied when a [`ChatRequest`] leaves a field unset.
pub const DEFAULT_TEMPERATURE: f32 = 1.0;
pub const DEFAULT_MAX_TOKENS: u32 = 512;
pub const DEFAULT_TOP_P: f32 = 1.0;

/// A single-use chat completion request.
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    pub user_prompt: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub top_p: Option<f32>,
    pub stop: Option<Vec<String>>,
}

/// Token accounting reported by the API, when present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Normalized chat completion result.
///
/// `content` being `None` signals an empty completion, not a failure.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub content: Option<String>,
    pub usage: Option<TokenUsage>,
}

/// A failed chat completion call.
///
/// Carries a display message plus the raw cause (underlying error text or the
/// response body) so the debug inspector can show both.
#[derive(Debug, Clone)]
pub struct ChatError {
    message: String,
    raw: Option<String>,
}

impl ChatError {
    fn new(message: impl Into<String>, raw: Option<String>) -> Self {
        Self {
            message: message.into(),
            raw,
        }
    }

    /// The human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The preserved raw cause, if any.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ChatError {}

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<&'a [String]>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// A client bound to one endpoint and API key.
pub struct ChatClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ChatClient {
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Sends exactly one chat completion request: a system message from
    /// `config.system_prompt` and a user message from `request.user_prompt`.
    ///
    /// Never retries. Fields left unset on the request fall back to
    /// [`DEFAULT_TEMPERATURE`], [`DEFAULT_MAX_TOKENS`] and [`DEFAULT_TOP_P`].
    pub async fn send_chat_completion(
        &self,
        config: &ProviderConfig,
        request: &ChatRequest,
    ) -> Result<ChatResponse, ChatError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let chat_request = build_wire_request(config, request);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                ChatError::new(
                    format!("Failed to connect to API endpoint: {url}"),
                    Some(e.to_string()),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::new(
                format!("API request failed with status {status}"),
                Some(body),
            ));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            ChatError::new("Failed to parse API response", Some(e.to_string()))
        })?;

        Ok(normalize_response(parsed))
    }
}

fn build_wire_request<'a>(
    config: &'a ProviderConfig,
    request: &'a ChatRequest,
) -> ChatCompletionRequest<'a> {
    ChatCompletionRequest {
        model: &config.model,
        messages: vec![
            Message {
                role: "system",
                content: Cow::Borrowed(&config.system_prompt),
            },
            Message {
                role: "user",
                content: Cow::Borrowed(&request.user_prompt),
            },
        ],
        temperature: request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        max_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        top_p: request.top_p.unwrap_or(DEFAULT_TOP_P),
        stop: request.stop.as_deref(),
    }
}

fn normalize_response(response: ChatCompletionResponse) -> ChatResponse {
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|c| !c.is_empty());

    ChatResponse {
        content,
        usage: response.usage,
    }
}
