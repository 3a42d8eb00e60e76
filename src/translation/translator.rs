//! Translation orchestrator.
//!
//! Looks up the target and its system prompt, issues exactly one chat
//! completion call, and packages the result together with a debug trace of
//! the request and response.

use crate::llm::{ChatClient, ChatRequest, ProviderConfig};

use super::prompt::system_prompt_for;
use super::target::find_target;

/// Sampling parameters tuned for translation consistency. Always supplied
/// explicitly; the client-side defaults never apply here.
pub const TRANSLATION_TEMPERATURE: f32 = 0.3;
pub const TRANSLATION_MAX_TOKENS: u32 = 1024;
pub const TRANSLATION_TOP_P: f32 = 0.9;

/// Snapshot of an outbound request.
#[derive(Debug, Clone)]
pub struct RequestTrace {
    pub system_prompt: String,
    pub user_prompt: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

/// Snapshot of the outcome. Exactly one of `content` / `error` is set.
#[derive(Debug, Clone, Default)]
pub struct ResponseTrace {
    pub content: Option<String>,
    pub error: Option<String>,
    /// The original raw error (response body or underlying error text).
    pub raw_error: Option<String>,
}

/// A captured request/outcome pair for user-facing diagnostics.
///
/// Created per translation attempt; the caller holds it for inspection and
/// discards it on the next request.
#[derive(Debug, Clone)]
pub struct DebugTrace {
    pub request: RequestTrace,
    pub response: ResponseTrace,
}

impl DebugTrace {
    /// Renders the trace as indented plain text for terminal display.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("Request\n");
        out.push_str(&format!("  model:       {}\n", self.request.model));
        out.push_str(&format!("  temperature: {}\n", self.request.temperature));
        out.push_str(&format!("  max_tokens:  {}\n", self.request.max_tokens));
        out.push_str(&format!("  top_p:       {}\n", self.request.top_p));
        out.push_str(&format!("  system:      {}\n", self.request.system_prompt));
        out.push_str(&format!("  user:        {}\n", self.request.user_prompt));
        out.push_str("Response\n");
        if let Some(error) = &self.response.error {
            out.push_str(&format!("  error:       {error}\n"));
            if let Some(raw) = &self.response.raw_error {
                out.push_str(&format!("  raw:         {raw}\n"));
            }
        } else {
            out.push_str(&format!(
                "  content:     {}\n",
                self.response.content.as_deref().unwrap_or("(No content)")
            ));
        }
        out
    }
}

/// A successful translation and its debug trace.
#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub debug: DebugTrace,
}

/// Translation failures.
#[derive(Debug)]
pub enum TranslateError {
    /// The input text was empty after trimming. No request was sent.
    EmptyInput,
    /// The target identifier is not in the catalog. No request was sent.
    TargetNotFound(String),
    /// The chat completion call failed. Carries the debug trace so the
    /// caller can render both a message and a full request/response view.
    Api {
        message: String,
        debug: Box<DebugTrace>,
    },
}

impl TranslateError {
    /// The debug trace attached to this failure, if one exists.
    pub fn debug(&self) -> Option<&DebugTrace> {
        match self {
            Self::Api { debug, .. } => Some(debug),
            _ => None,
        }
    }
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input text cannot be empty"),
            Self::TargetNotFound(id) => {
                write!(f, "Translation target '{id}' not found")
            }
            Self::Api { message, .. } => f.write_str(message),
        }
    }
}

impl std::error::Error for TranslateError {}

/// Builds the chat request for one translation attempt with the fixed
/// sampling parameters.
pub fn build_request(input_text: &str) -> ChatRequest {
    ChatRequest {
        user_prompt: input_text.to_string(),
        temperature: Some(TRANSLATION_TEMPERATURE),
        max_tokens: Some(TRANSLATION_MAX_TOKENS),
        top_p: Some(TRANSLATION_TOP_P),
        stop: None,
    }
}

fn request_trace(config: &ProviderConfig, request: &ChatRequest) -> RequestTrace {
    RequestTrace {
        system_prompt: config.system_prompt.clone(),
        user_prompt: request.user_prompt.clone(),
        model: config.model.clone(),
        temperature: TRANSLATION_TEMPERATURE,
        max_tokens: TRANSLATION_MAX_TOKENS,
        top_p: TRANSLATION_TOP_P,
    }
}

/// Translates `input_text` into the style named by `target_identifier`.
///
/// Exactly one network call per invocation; no retries, no partial results.
/// Empty input and unknown targets fail before any request is sent. The
/// system prompt on `config` is replaced with the registered prompt for the
/// target (or the generic fallback).
pub async fn translate_text(
    input_text: &str,
    target_identifier: &str,
    config: &ProviderConfig,
) -> Result<Translation, TranslateError> {
    if input_text.trim().is_empty() {
        return Err(TranslateError::EmptyInput);
    }

    let target = find_target(target_identifier)
        .ok_or_else(|| TranslateError::TargetNotFound(target_identifier.to_string()))?;

    let config = ProviderConfig {
        system_prompt: system_prompt_for(target.identifier).to_string(),
        ..config.clone()
    };

    let request = build_request(input_text);
    let trace = request_trace(&config, &request);

    let client = ChatClient::new(&config);
    match client.send_chat_completion(&config, &request).await {
        Ok(response) => {
            let text = response.content.clone().unwrap_or_default();
            Ok(Translation {
                text,
                debug: DebugTrace {
                    request: trace,
                    response: ResponseTrace {
                        content: response.content,
                        error: None,
                        raw_error: None,
                    },
                },
            })
        }
        Err(e) => Err(TranslateError::Api {
            message: format!("Failed to get response from LLM: {}", e.message()),
            debug: Box::new(DebugTrace {
                request: trace,
                response: ResponseTrace {
                    content: None,
                    error: Some(e.message().to_string()),
                    raw_error: e.raw().map(String::from),
                },
            }),
        }),
    }
}
