//! Provider profiles and configuration validation.
//!
//! Three provider profiles (OpenAI, OpenRouter, custom OpenAI-compatible
//! endpoints) are normalized into a single request contract via
//! [`ProviderConfig`].

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The backend service profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// The OpenAI API.
    #[value(name = "openai")]
    OpenAi,
    /// The OpenRouter API.
    #[value(name = "openrouter")]
    OpenRouter,
    /// A user-specified OpenAI-compatible endpoint.
    #[value(name = "custom")]
    Custom,
}

impl Provider {
    /// Returns the well-known default base URL for this provider.
    ///
    /// `Custom` has no default; the stored custom URL is resolved by the
    /// settings layer instead.
    pub const fn default_base_url(self) -> Option<&'static str> {
        match self {
            Self::OpenAi => Some("https://api.openai.com/v1"),
            Self::OpenRouter => Some("https://openrouter.ai/api/v1"),
            Self::Custom => None,
        }
    }

    /// Returns the lowercase name used in config files and CLI flags.
    pub const fn name(self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::OpenRouter => "openrouter",
            Self::Custom => "custom",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully resolved provider configuration.
///
/// Constructed fresh per completion call from persisted settings; never held
/// as a singleton.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub provider: Provider,
    /// Base URL of the OpenAI-compatible API (including any `/v1` prefix).
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    /// Instruction text sent as the "system" message.
    pub system_prompt: String,
}

/// Validates a provider configuration.
///
/// Returns a list of human-readable error messages; an empty list means the
/// configuration is usable. Pure, no side effects.
pub fn validate_config(config: &ProviderConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if config.api_key.trim().is_empty() {
        errors.push("API key is required".to_string());
    }

    if config.model.trim().is_empty() {
        errors.push("Model identifier is required".to_string());
    }

    if config.provider == Provider::Custom && config.base_url.trim().is_empty() {
        errors.push("Base URL is required for custom provider".to_string());
    }

    errors
}
