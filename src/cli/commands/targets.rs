//! Target listing command handler.

use anyhow::Result;

use crate::translation::{BaseLang, print_targets};

/// Prints the translation target catalog, optionally filtered by base
/// language.
pub fn run_targets(lang: Option<&str>) -> Result<()> {
    let filter = match lang {
        Some(code) => Some(code.parse::<BaseLang>().map_err(|e| anyhow::anyhow!(e))?),
        None => None,
    };

    print_targets(filter);

    Ok(())
}
