//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Model discovery command handler.
pub mod models;

/// Target listing command handler.
pub mod targets;

/// Translation command handler.
pub mod translate;
