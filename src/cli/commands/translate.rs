use anyhow::{Result, bail};
use std::io::{self, Write};

use crate::config::{ConfigManager, ResolveOptions, resolve_settings};
use crate::input::InputReader;
use crate::llm::{Provider, validate_config};
use crate::status;
use crate::translation::translate_text;
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub file: Option<String>,
    pub target: Option<String>,
    pub provider: Option<Provider>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub debug: bool,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let source_text = InputReader::read(options.file.as_deref())?;

    if source_text.trim().is_empty() {
        bail!("Input is empty");
    }

    let manager = ConfigManager::new();
    let config_file = manager.load_or_default();
    let resolved = resolve_settings(
        &ResolveOptions {
            provider: options.provider,
            base_url: options.base_url.clone(),
            model: options.model.clone(),
            target: options.target.clone(),
        },
        &config_file,
    );

    let Some(target) = resolved.target.clone() else {
        bail!(
            "Missing required configuration: 'target'\n\n\
             Please provide it via:\n  \
             - CLI option: restyle --target <id>\n  \
             - Config file: Run 'restyle configure' to set a default\n\n\
             Run 'restyle targets' to see available targets."
        );
    };

    let provider_config = resolved.provider_config();

    let errors = validate_config(&provider_config);
    if !errors.is_empty() {
        bail!(
            "Configuration is incomplete:\n  - {}\n\n\
             Run 'restyle configure' to set up configuration.",
            errors.join("\n  - ")
        );
    }

    let spinner = Spinner::new("Translating...");
    let result = translate_text(&source_text, &target, &provider_config).await;
    spinner.stop();

    match result {
        Ok(translation) => {
            print!("{}", translation.text);
            io::stdout().flush()?;
            if !translation.text.is_empty() && !translation.text.ends_with('\n') {
                println!();
            }

            if options.debug {
                eprint!("{}", translation.debug.render());
            }

            Ok(())
        }
        Err(e) => {
            if let Some(debug) = e.debug() {
                if options.debug {
                    eprint!("{}", debug.render());
                } else {
                    status!(
                        "{}",
                        Style::hint("Run again with --debug to inspect the request.")
                    );
                }
            }

            bail!("{e}")
        }
    }
}
