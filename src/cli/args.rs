use clap::{Parser, Subcommand};

use crate::llm::Provider;

#[derive(Parser, Debug)]
#[command(name = "restyle")]
#[command(about = "AI-powered text style transformation CLI")]
#[command(version)]
pub struct Args {
    /// File to translate (reads from stdin if not provided)
    pub file: Option<String>,

    /// Target style identifier (e.g., ja_kind, en_formal)
    #[arg(short = 't', long)]
    pub target: Option<String>,

    /// Provider profile
    #[arg(short = 'p', long, value_enum)]
    pub provider: Option<Provider>,

    /// Model identifier
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Base URL of an OpenAI-compatible API
    #[arg(long)]
    pub base_url: Option<String>,

    /// Print the request/response debug trace to stderr
    #[arg(long)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure restyle settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List available translation targets
    Targets {
        /// Filter by base language (ja or en)
        #[arg(short = 'l', long)]
        lang: Option<String>,
    },
    /// List models available from a provider
    Models {
        /// Provider to query (defaults to the configured provider)
        #[arg(short = 'p', long, value_enum)]
        provider: Option<Provider>,
    },
}
