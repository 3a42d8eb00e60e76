use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::llm::{Provider, ProviderConfig};
use crate::paths;

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "RESTYLE_API_KEY";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Persisted settings in the `[llm]` section of config.toml.
///
/// The API key is stored in plain text; prefer the `RESTYLE_API_KEY`
/// environment variable for shared machines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Provider profile ("openai", "openrouter" or "custom").
    pub provider: Option<Provider>,
    /// Base URL override. Required for the custom provider.
    pub base_url: Option<String>,
    /// API key stored directly in config.
    pub api_key: Option<String>,
    /// Model identifier.
    pub model: Option<String>,
    /// Default translation target identifier.
    pub target: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/restyle/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub llm: LlmSettings,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub provider: Option<Provider>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub target: Option<String>,
}

/// Settings after merging CLI arguments, the config file and built-in
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    pub provider: Provider,
    /// Effective base URL: the CLI override, the provider default, or the
    /// stored custom URL. Empty only for a custom provider with no URL
    /// configured.
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    /// Target identifier, when one was supplied or configured.
    pub target: Option<String>,
}

impl ResolvedSettings {
    /// Builds a fresh provider configuration for one completion call.
    ///
    /// The system prompt is left empty; the orchestrator fills it in from
    /// the prompt registry.
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            provider: self.provider,
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            system_prompt: String::new(),
        }
    }
}

/// Merges CLI options with config file settings.
///
/// Priority for every field: CLI option, then config file, then built-in
/// default (provider `openai`, model `gpt-4o-mini`). `RESTYLE_API_KEY` takes
/// priority over the stored key. The base URL is special: the config file
/// value only applies to the custom provider; OpenAI and OpenRouter always
/// use their fixed endpoint unless `--base-url` is passed explicitly.
pub fn resolve_settings(options: &ResolveOptions, config_file: &ConfigFile) -> ResolvedSettings {
    let provider = options
        .provider
        .or(config_file.llm.provider)
        .unwrap_or(Provider::OpenAi);

    let base_url = options.base_url.clone().unwrap_or_else(|| {
        match provider.default_base_url() {
            // Known providers always use their fixed endpoint. A custom URL
            // left in the file must not receive their traffic (or the API
            // key) after a provider switch.
            Some(default) => default.to_string(),
            None => config_file.llm.base_url.clone().unwrap_or_default(),
        }
    });

    let api_key = std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.is_empty())
        .or_else(|| config_file.llm.api_key.clone())
        .unwrap_or_default();

    let model = options
        .model
        .clone()
        .or_else(|| config_file.llm.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let target = options
        .target
        .clone()
        .or_else(|| config_file.llm.target.clone());

    ResolvedSettings {
        provider,
        base_url,
        api_key,
        model,
        target,
    }
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/restyle/config.toml`
    /// or `~/.config/restyle/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
