// Rust guideline compliant 2026-10-16

//! Date helpers for Patitas.

use chrono::{Local, NaiveDate};

/// Returns today's date in the local time zone.
///
/// Adoption and reactivation dates are calendar dates as staff see them,
/// so the local zone is used rather than UTC.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
