// Rust guideline compliant 2026-10-16

//! Implementation of the `patitas config` commands.

use anyhow::Result;
use patitas_app::AppError;
use patitas_core::Config;

use super::Context;

/// Prints the effective configuration.
pub fn show(ctx: &Context) {
    println!("{}", ctx.formatter.format_config(&ctx.config));
}

/// Writes a configuration file with default values.
///
/// # Errors
///
/// Returns an error if the file already exists or cannot be written.
pub fn init(ctx: &Context) -> Result<()> {
    if ctx.config_path.exists() {
        anyhow::bail!(
            "Configuration file already exists: {}",
            ctx.config_path.display()
        );
    }

    Config::default()
        .save(&ctx.config_path)
        .map_err(AppError::from)?;

    let message = format!("Wrote {}", ctx.config_path.display());
    println!("{}", ctx.formatter.format_success(&message, None));
    Ok(())
}
