// Rust guideline compliant 2026-10-16

//! Implementation of the `patitas recent` command.

use anyhow::Result;
use patitas_app::{Snapshot, View};
use patitas_core::{query, AnimalRecord};

use super::Context;

/// Prints one window of the recently listed records.
///
/// An offset past the end prints an empty list.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub async fn execute(ctx: &Context, offset: usize, window: Option<usize>) -> Result<()> {
    let window = window.unwrap_or(ctx.config.carousel_window);
    let store = ctx.store()?;
    let snapshot = Snapshot::load(&store, View::Recent).await;

    let visible: Vec<&AnimalRecord> = query::recent_window(snapshot.records(), window, offset)
        .iter()
        .collect();
    ctx.print_records(&snapshot, &visible);
    Ok(())
}
