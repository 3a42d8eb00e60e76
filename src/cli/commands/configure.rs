//! Configure command handler for editing persisted settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{API_KEY_ENV, ConfigFile, ConfigManager, LlmSettings};
use crate::llm::{Provider, fetch_models};
use crate::status;
use crate::translation::TARGETS;
use crate::ui::{Spinner, Style, handle_prompt_cancellation_async};

const PROVIDERS: &[Provider] = &[Provider::OpenAi, Provider::OpenRouter, Provider::Custom];

/// Runs the configure command.
///
/// With `--show`, prints the current settings; otherwise walks through an
/// interactive setup for provider, base URL, API key, model, and default
/// target.
pub async fn run_configure(show: bool) -> Result<()> {
    if show {
        return show_settings();
    }

    handle_prompt_cancellation_async(run_configure_inner()).await
}

fn show_settings() -> Result<()> {
    let manager = ConfigManager::new();
    let config = manager.load_or_default();

    print_current_settings(&config);
    println!(
        "{} {}",
        Style::label("Config file:"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

async fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new();
    let mut config = manager.load_or_default();

    print_current_settings(&config);

    let provider = select_provider(config.llm.provider)?;

    let base_url = if provider == Provider::Custom {
        Some(input_base_url(config.llm.base_url.as_deref())?)
    } else {
        None
    };

    let api_key = input_api_key(config.llm.api_key.as_deref())?;

    let model = select_model(provider, &api_key, config.llm.model.as_deref()).await?;

    let target = select_target(config.llm.target.as_deref())?;

    config.llm = LlmSettings {
        provider: Some(provider),
        base_url,
        api_key: (!api_key.is_empty()).then_some(api_key),
        model: Some(model),
        target: Some(target),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_settings(config: &ConfigFile) {
    let not_set = || Style::secondary("(not set)");

    println!("{}", Style::header("Current settings"));
    println!(
        "  {}  {}",
        Style::label("provider"),
        config
            .llm
            .provider
            .map_or_else(not_set, |p| Style::value(p.to_string()))
    );
    println!(
        "  {}  {}",
        Style::label("base_url"),
        config.llm.base_url.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}   {}",
        Style::label("api_key"),
        if config.llm.api_key.is_some() {
            Style::value("(set)")
        } else {
            not_set()
        }
    );
    println!(
        "  {}     {}",
        Style::label("model"),
        config.llm.model.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}    {}",
        Style::label("target"),
        config.llm.target.as_deref().map_or_else(not_set, Style::value)
    );
    println!();
}

fn select_provider(default: Option<Provider>) -> Result<Provider> {
    let options: Vec<String> = PROVIDERS.iter().map(ToString::to_string).collect();
    let default_index = default
        .and_then(|d| PROVIDERS.iter().position(|p| *p == d))
        .unwrap_or(0);

    let selection = Select::new("Provider:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    PROVIDERS
        .iter()
        .copied()
        .find(|p| p.name() == selection)
        .ok_or_else(|| anyhow::anyhow!("Unknown provider '{selection}'"))
}

fn input_base_url(default: Option<&str>) -> Result<String> {
    let mut prompt = Text::new("Base URL:")
        .with_help_message("OpenAI-compatible endpoint, e.g. http://localhost:11434/v1");

    if let Some(d) = default {
        prompt = prompt.with_default(d);
    }

    let url = prompt.prompt()?;
    let url = url.trim().to_string();

    if url.is_empty() {
        bail!("Base URL is required for custom provider");
    }

    Ok(url)
}

fn input_api_key(default: Option<&str>) -> Result<String> {
    let help = format!("Stored in plain text in the config file; {API_KEY_ENV} overrides it");
    let mut prompt = Text::new("API key:").with_help_message(&help);

    if let Some(d) = default {
        prompt = prompt.with_default(d);
    }

    let key = prompt.prompt()?;

    Ok(key.trim().to_string())
}

/// Offers discovered models as a selection, falling back to manual entry
/// when discovery is unavailable.
async fn select_model(provider: Provider, api_key: &str, default: Option<&str>) -> Result<String> {
    let spinner = Spinner::new("Fetching models...");
    let list = fetch_models(provider, Some(api_key)).await;
    spinner.stop();

    if let Some(error) = &list.error {
        status!("{} {error}", Style::warning("Warning:"));
    }

    if list.models.is_empty() {
        let mut prompt = Text::new("Model:").with_help_message("Enter the model identifier");

        if let Some(d) = default {
            prompt = prompt.with_default(d);
        }

        let model = prompt.prompt()?;

        if model.trim().is_empty() {
            bail!("Model identifier cannot be empty");
        }

        return Ok(model.trim().to_string());
    }

    let ids: Vec<String> = list.models.iter().map(|m| m.id.clone()).collect();
    let default_index = default
        .and_then(|d| ids.iter().position(|id| id == d))
        .unwrap_or(0);

    let selection = Select::new("Model:", ids)
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}

fn select_target(default: Option<&str>) -> Result<String> {
    let options: Vec<String> = TARGETS
        .iter()
        .map(|t| format!("{} - {}", t.identifier, t.disp_en))
        .collect();

    let default_index = default
        .and_then(|d| TARGETS.iter().position(|t| t.identifier == d))
        .unwrap_or(0);

    let selection = Select::new("Default target:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // Extract identifier from "identifier - Display Name" format
    let identifier = selection.split(" - ").next().unwrap_or(&selection);

    Ok(identifier.to_string())
}
