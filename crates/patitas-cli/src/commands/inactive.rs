// Rust guideline compliant 2026-10-16

//! Implementation of the `patitas inactive` command.

use anyhow::Result;
use patitas_app::{Snapshot, View};
use patitas_core::query;

use super::Context;

/// Lists deactivated records, optionally for one shelter.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub async fn execute(ctx: &Context, shelter: Option<String>) -> Result<()> {
    let store = ctx.store()?;
    let snapshot = Snapshot::load(&store, View::Inactive).await;

    let records = query::by_shelter_code(snapshot.records(), shelter.as_deref());
    ctx.print_records(&snapshot, &records);
    Ok(())
}
