// Rust guideline compliant 2026-10-16

//! Implementation of the `patitas carousel` command.
//!
//! Prints the recent-records carousel as it auto-advances.

use anyhow::Result;
use patitas_app::{CarouselHandle, Snapshot, View};
use std::time::Duration;

use super::Context;

/// Runs the carousel for `ticks` advances, printing every frame.
///
/// With more records than fit in one window the carousel rotates every
/// interval; otherwise the single frame is printed once.
///
/// # Arguments
///
/// * `ctx` - Command context
/// * `ticks` - Number of advances to print after the first frame
/// * `interval_secs` - Seconds between advances, overriding the config
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created or the interval
/// is zero.
pub async fn execute(ctx: &Context, ticks: usize, interval_secs: Option<u64>) -> Result<()> {
    let interval = Duration::from_secs(interval_secs.unwrap_or(ctx.config.carousel_interval_secs));
    let store = ctx.store()?;
    let snapshot = Snapshot::load(&store, View::Recent).await;
    ctx.report_load_error(&snapshot);

    let total = snapshot.records().len();
    let handle = CarouselHandle::spawn(
        snapshot.records().to_vec(),
        ctx.config.carousel_window,
        interval,
    )?;
    let mut frames = handle.subscribe();
    println!("{}", ctx.formatter.format_frame(&handle.current(), total));

    if !handle.is_running() {
        return Ok(());
    }

    for _ in 0..ticks {
        if frames.changed().await.is_err() {
            break;
        }
        let frame = frames.borrow_and_update().clone();
        println!("{}", ctx.formatter.format_frame(&frame, total));
    }

    handle.stop();
    Ok(())
}
