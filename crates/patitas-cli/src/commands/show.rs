// Rust guideline compliant 2026-10-16

//! Implementation of the `patitas show` command.

use anyhow::Result;
use patitas_app::AdoptionStore;
use patitas_core::RecordId;

use super::Context;

/// Shows the detail view of one record.
///
/// # Errors
///
/// Returns an error if the record cannot be fetched or decoded.
pub async fn execute(ctx: &Context, id: String) -> Result<()> {
    let store = ctx.store()?;
    let record = store.fetch_record(&RecordId::new(id)).await?;
    println!("{}", ctx.formatter.format_record(&record));
    Ok(())
}
