//! Settings resolution contract tests.
//!
//! CLI options take priority over config file settings, which take priority
//! over built-in defaults (provider `openai`, model `gpt-4o-mini`, base URL
//! the provider default).

use serial_test::serial;

use restyle_cli::config::{
    API_KEY_ENV, ConfigFile, DEFAULT_MODEL, LlmSettings, ResolveOptions, resolve_settings,
};
use restyle_cli::llm::{Provider, validate_config};

fn config_with_defaults() -> ConfigFile {
    ConfigFile {
        llm: LlmSettings {
            provider: Some(Provider::OpenRouter),
            base_url: None,
            api_key: Some("file-key".to_string()),
            model: Some("file-model".to_string()),
            target: Some("ja_kind".to_string()),
        },
    }
}

fn clear_env_key() {
    // SAFETY: tests touching the key env var are serialized
    unsafe { std::env::remove_var(API_KEY_ENV) };
}

#[test]
#[serial]
fn test_cli_options_override_file() {
    clear_env_key();
    let options = ResolveOptions {
        provider: Some(Provider::OpenAi),
        base_url: None,
        model: Some("cli-model".to_string()),
        target: Some("en_formal".to_string()),
    };

    let resolved = resolve_settings(&options, &config_with_defaults());

    assert_eq!(resolved.provider, Provider::OpenAi);
    assert_eq!(resolved.model, "cli-model");
    assert_eq!(resolved.target.as_deref(), Some("en_formal"));
    // Provider changed on the CLI, so the base URL follows the new provider.
    assert_eq!(resolved.base_url, "https://api.openai.com/v1");
}

#[test]
#[serial]
fn test_file_overrides_builtin_defaults() {
    clear_env_key();
    let resolved = resolve_settings(&ResolveOptions::default(), &config_with_defaults());

    assert_eq!(resolved.provider, Provider::OpenRouter);
    assert_eq!(resolved.base_url, "https://openrouter.ai/api/v1");
    assert_eq!(resolved.api_key, "file-key");
    assert_eq!(resolved.model, "file-model");
    assert_eq!(resolved.target.as_deref(), Some("ja_kind"));
}

#[test]
#[serial]
fn test_builtin_defaults() {
    clear_env_key();
    let resolved = resolve_settings(&ResolveOptions::default(), &ConfigFile::default());

    assert_eq!(resolved.provider, Provider::OpenAi);
    assert_eq!(resolved.base_url, "https://api.openai.com/v1");
    assert_eq!(resolved.model, DEFAULT_MODEL);
    assert!(resolved.api_key.is_empty());
    assert!(resolved.target.is_none());
}

#[test]
#[serial]
fn test_cli_base_url_overrides_provider_default() {
    clear_env_key();
    let options = ResolveOptions {
        base_url: Some("http://localhost:11434/v1".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_settings(&options, &config_with_defaults());

    assert_eq!(resolved.base_url, "http://localhost:11434/v1");
}

#[test]
#[serial]
fn test_stored_custom_url_ignored_for_known_provider() {
    clear_env_key();
    // A custom endpoint left in the file from an earlier setup. Switching
    // provider on the CLI must route to the provider's fixed endpoint, not
    // the leftover URL.
    let config = ConfigFile {
        llm: LlmSettings {
            provider: Some(Provider::Custom),
            base_url: Some("http://localhost:11434/v1".to_string()),
            api_key: Some("key".to_string()),
            model: Some("model".to_string()),
            target: None,
        },
    };

    let options = ResolveOptions {
        provider: Some(Provider::OpenAi),
        ..ResolveOptions::default()
    };

    let resolved = resolve_settings(&options, &config);

    assert_eq!(resolved.base_url, "https://api.openai.com/v1");
}

#[test]
#[serial]
fn test_stored_url_still_applies_to_custom_provider() {
    clear_env_key();
    let config = ConfigFile {
        llm: LlmSettings {
            provider: Some(Provider::Custom),
            base_url: Some("http://localhost:11434/v1".to_string()),
            api_key: Some("key".to_string()),
            model: Some("model".to_string()),
            target: None,
        },
    };

    let resolved = resolve_settings(&ResolveOptions::default(), &config);

    assert_eq!(resolved.base_url, "http://localhost:11434/v1");
}

#[test]
#[serial]
fn test_env_api_key_overrides_file_key() {
    // SAFETY: serialized test, var removed below
    unsafe { std::env::set_var(API_KEY_ENV, "env-key") };

    let resolved = resolve_settings(&ResolveOptions::default(), &config_with_defaults());

    unsafe { std::env::remove_var(API_KEY_ENV) };

    assert_eq!(resolved.api_key, "env-key");
}

#[test]
#[serial]
fn test_resolved_custom_without_url_fails_validation() {
    clear_env_key();
    let config = ConfigFile {
        llm: LlmSettings {
            provider: Some(Provider::Custom),
            base_url: None,
            api_key: Some("key".to_string()),
            model: Some("model".to_string()),
            target: None,
        },
    };

    let resolved = resolve_settings(&ResolveOptions::default(), &config);
    let errors = validate_config(&resolved.provider_config());

    assert!(errors.iter().any(|e| e.contains("Base URL is required")));
}

#[test]
#[serial]
fn test_resolved_complete_config_passes_validation() {
    clear_env_key();
    let resolved = resolve_settings(&ResolveOptions::default(), &config_with_defaults());

    assert!(validate_config(&resolved.provider_config()).is_empty());
}
