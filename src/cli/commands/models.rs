//! Model discovery command handler.

use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, resolve_settings};
use crate::llm::{ModelInfo, Provider, fetch_models};
use crate::ui::{Spinner, Style};

/// Fetches and prints the model list for the given (or configured) provider.
///
/// Discovery failures are reported inline and do not fail the command, so
/// manual `--model` entry stays usable.
pub async fn run_models(provider_override: Option<Provider>) -> Result<()> {
    let manager = ConfigManager::new();
    let config_file = manager.load_or_default();
    let resolved = resolve_settings(
        &ResolveOptions {
            provider: provider_override,
            ..ResolveOptions::default()
        },
        &config_file,
    );

    let spinner = Spinner::new(&format!("Fetching models from {}...", resolved.provider));
    let list = fetch_models(resolved.provider, Some(&resolved.api_key)).await;
    spinner.stop();

    if let Some(error) = &list.error {
        eprintln!("{} {error}", Style::error("Error:"));
        eprintln!(
            "{}",
            Style::hint("Model discovery failed; pass --model <id> to enter a model manually.")
        );
        return Ok(());
    }

    println!(
        "{}",
        Style::header(format!("Models available from {}", resolved.provider))
    );
    for model in &list.models {
        println!("  {}", format_model_line(model));
    }
    println!();
    println!("{}", Style::secondary(format!("{} models", list.models.len())));

    Ok(())
}

fn format_model_line(model: &ModelInfo) -> String {
    let mut line = Style::value(&model.id);

    if let Some(name) = &model.name
        && name != &model.id
    {
        line.push_str(&format!("  {}", Style::secondary(name)));
    }

    if let Some(context_length) = model.context_length {
        line.push_str(&format!("  {}", Style::secondary(format!("({context_length} ctx)"))));
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(id: &str, name: Option<&str>, context_length: Option<u32>) -> ModelInfo {
        ModelInfo {
            id: id.to_string(),
            name: name.map(String::from),
            description: None,
            owned_by: None,
            created: None,
            context_length,
            pricing: None,
        }
    }

    #[test]
    fn test_format_model_line_includes_name_and_context() {
        let line = format_model_line(&model(
            "anthropic/claude-3.5-sonnet",
            Some("Claude 3.5 Sonnet"),
            Some(200_000),
        ));

        assert!(line.contains("anthropic/claude-3.5-sonnet"));
        assert!(line.contains("Claude 3.5 Sonnet"));
        assert!(line.contains("200000 ctx"));
    }

    #[test]
    fn test_format_model_line_skips_redundant_name() {
        let line = format_model_line(&model("gpt-4o", Some("gpt-4o"), None));

        // The id already shows the name; no duplicate suffix.
        assert_eq!(line.matches("gpt-4o").count(), 1);
    }
}
