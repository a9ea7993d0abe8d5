// Rust guideline compliant 2026-10-16

//! Implementation of `patitas adopt`, `deactivate` and `reactivate`.

use anyhow::Result;
use patitas_app::{LifecycleManager, Snapshot, View};
use patitas_core::{RecordId, Transition};

use super::Context;

/// Runs one lifecycle transition on record `id`.
///
/// The record's current status is read from the status report, so a
/// transition that is not legal fails before anything is sent.
///
/// # Errors
///
/// Returns `InvalidTransition` for an illegal transition, `InvalidInput` if
/// the record is unknown, or the store's error if the request fails.
pub async fn execute(ctx: &Context, id: String, transition: Transition) -> Result<()> {
    let id = RecordId::new(id);
    let manager = LifecycleManager::new(ctx.store()?);
    let mut snapshot = Snapshot::load(manager.store(), View::StatusReport).await;
    if let Some(err) = snapshot.take_error() {
        return Err(err.into());
    }

    let record = manager.transition(&mut snapshot, &id, transition).await?;

    let message = format!("{} ({}) is now {}", record.name, record.id, record.status);
    println!("{}", ctx.formatter.format_success(&message, Some(&record)));
    Ok(())
}
