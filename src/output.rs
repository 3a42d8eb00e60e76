//! Global output configuration.
//!
//! - Translated text goes to stdout (for piping)
//! - Status messages, progress, and errors go to stderr
//! - Quiet mode suppresses non-essential output

use std::sync::OnceLock;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Initialize the global output configuration.
///
/// This should be called once at startup with the CLI flags.
/// If called multiple times, subsequent calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Check if quiet mode is enabled.
pub fn is_quiet() -> bool {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default).quiet
}

/// Print a status message to stderr (respects quiet mode).
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}
