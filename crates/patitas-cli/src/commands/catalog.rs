// Rust guideline compliant 2026-10-16

//! Implementation of the `patitas catalog` command.

use anyhow::Result;
use patitas_app::{Snapshot, View};
use patitas_core::query;

use super::Context;

/// Lists the public catalog, optionally narrowed to one `species_sex` type.
///
/// # Arguments
///
/// * `ctx` - Command context
/// * `kind` - Type key such as `canina_macho`; `todos` or none lists all
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created. A failed fetch is
/// reported and an empty list printed.
pub async fn execute(ctx: &Context, kind: Option<String>) -> Result<()> {
    let store = ctx.store()?;
    let snapshot = Snapshot::load(&store, View::Catalog).await;

    let records = query::by_type_filter(snapshot.records(), kind.as_deref());
    ctx.print_records(&snapshot, &records);
    Ok(())
}
