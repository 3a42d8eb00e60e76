//! # restyle - Style-Transforming Translation CLI
//!
//! `restyle` rewrites text into a target style (a language/tone preset such
//! as `ja_kind` or `en_formal`) using OpenAI-compatible chat completion
//! endpoints. It supports the OpenAI and OpenRouter APIs as well as custom
//! OpenAI-compatible endpoints.
//!
//! ## Quick Start
//!
//! ```bash
//! # Rewrite a file into kind Japanese
//! restyle -t ja_kind ./draft.md
//!
//! # Rewrite from stdin
//! echo "that is wrong" | restyle -t en_formal
//!
//! # List available targets and models
//! restyle targets
//! restyle models
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/restyle/config.toml`:
//!
//! ```toml
//! [llm]
//! provider = "openrouter"
//! model = "anthropic/claude-3.5-sonnet"
//! target = "ja_kind"
//! ```
//!
//! Run `restyle configure` for interactive setup. The API key can also be
//! supplied via the `RESTYLE_API_KEY` environment variable.

/// Command-line interface definitions and handlers.
pub mod cli;

/// Persisted settings and CLI/file/default resolution.
pub mod config;

/// Input reading from files and stdin.
pub mod input;

/// LLM provider abstraction: providers, chat completions, model discovery.
pub mod llm;

/// Global output configuration (quiet mode, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation targets, prompts, and the translation orchestrator.
pub mod translation;

#[cfg(test)]
mod test_support;

/// Terminal UI components (spinner, colors, prompt helpers).
pub mod ui;
