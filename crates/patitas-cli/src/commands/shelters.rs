// Rust guideline compliant 2026-10-16

//! Implementation of the `patitas shelters` command.

use anyhow::Result;
use patitas_app::shelter_codes_or_empty;

use super::Context;

/// Lists the shelter codes the store accepts.
///
/// A failed fetch is logged and an empty list printed.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub async fn execute(ctx: &Context) -> Result<()> {
    let store = ctx.store()?;
    let codes = shelter_codes_or_empty(&store).await;
    println!("{}", ctx.formatter.format_shelters(&codes));
    Ok(())
}
