use anyhow::Result;
use clap::Parser;

use restyle_cli::cli::commands::{configure, models, targets, translate};
use restyle_cli::cli::{Args, Command};
use restyle_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig { quiet: args.quiet });

    match args.command {
        Some(Command::Configure { show }) => {
            configure::run_configure(show).await?;
        }
        Some(Command::Targets { lang }) => {
            targets::run_targets(lang.as_deref())?;
        }
        Some(Command::Models { provider }) => {
            models::run_models(provider).await?;
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                target: args.target,
                provider: args.provider,
                model: args.model,
                base_url: args.base_url,
                debug: args.debug,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
