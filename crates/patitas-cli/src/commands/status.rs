// Rust guideline compliant 2026-10-16

//! Implementation of the `patitas status` command.
//!
//! The status dashboard: every record, narrowed by status and shelter.

use anyhow::Result;
use patitas_app::{AppError, Snapshot, View};
use patitas_core::{query, CatalogQuery, StatusFilter, TypeKey};

use super::Context;

/// Prints the status dashboard.
///
/// # Arguments
///
/// * `ctx` - Command context
/// * `status` - Status label or `all`
/// * `shelter` - Shelter code or `all`
/// * `options` - Print the status choices present in the data instead
///
/// # Errors
///
/// Returns an error if the status label is unknown.
pub async fn execute(
    ctx: &Context,
    status: Option<String>,
    shelter: Option<String>,
    options: bool,
) -> Result<()> {
    let status: StatusFilter = status
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(AppError::from)?;

    let store = ctx.store()?;
    let snapshot = Snapshot::load(&store, View::StatusReport).await;

    if options {
        ctx.report_load_error(&snapshot);
        let choices = query::status_options(snapshot.records());
        println!("{}", ctx.formatter.format_status_options(&choices));
        return Ok(());
    }

    let query = CatalogQuery {
        status,
        shelter,
        kind: TypeKey::All,
    };
    let records = query.apply(snapshot.records());
    ctx.print_records(&snapshot, &records);
    Ok(())
}
