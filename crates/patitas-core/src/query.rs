// Rust guideline compliant 2026-10-16

//! Catalog queries shared by every view.
//!
//! All functions borrow their input, never reorder it, and compose freely:
//! the status dashboard is `by_status ∘ by_shelter_code`, the public catalog
//! is `by_type_filter`, the admin and inactive lists are `by_shelter_code`.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::{AnimalRecord, Error, Result, Status};

/// Key that selects every record in the type filter.
pub const ALL_TYPES: &str = "todos";

/// Sentinel that selects every record in status and shelter selectors.
pub const ALL: &str = "all";

/// Returns up to `window` items starting at `offset`.
///
/// An offset past the end yields an empty slice rather than an error.
#[must_use]
pub fn recent_window<T>(records: &[T], window: usize, offset: usize) -> &[T] {
    if offset >= records.len() {
        return &[];
    }
    let end = offset.saturating_add(window).min(records.len());
    &records[offset..end]
}

/// Rotating window position for the recent-records carousel.
///
/// When the collection fits in one window the position never moves, so
/// the wrap-around arithmetic is only reached with at least one spare slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Carousel {
    len: usize,
    window: usize,
    offset: usize,
}

impl Carousel {
    /// Creates a carousel at offset 0.
    #[must_use]
    pub fn new(len: usize, window: usize) -> Self {
        Self {
            len,
            window,
            offset: 0,
        }
    }

    /// Current offset.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Window size.
    #[must_use]
    pub fn window(&self) -> usize {
        self.window
    }

    /// Whether there are more records than fit in one window.
    #[must_use]
    pub fn can_rotate(&self) -> bool {
        self.len > self.window
    }

    fn positions(&self) -> usize {
        self.len - self.window + 1
    }

    /// Moves one record forward, wrapping to the start.
    pub fn advance(&mut self) {
        if !self.can_rotate() {
            return;
        }
        self.offset = (self.offset + 1) % self.positions();
    }

    /// Moves one record back, wrapping to the last position.
    pub fn retreat(&mut self) {
        if !self.can_rotate() {
            return;
        }
        let positions = self.positions();
        self.offset = (self.offset + positions - 1) % positions;
    }

    /// Returns the slice of `records` visible at the current offset.
    #[must_use]
    pub fn visible<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        recent_window(records, self.window, self.offset)
    }
}

/// Composite `species_sex` selector for the public catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeKey {
    /// No filtering.
    #[default]
    All,
    /// Lowercased `species_sex` key, e.g. `canina_macho`.
    Key(String),
}

impl TypeKey {
    /// Parses a selector; empty or `todos` means all records.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let key = value.trim().to_lowercase();
        if key.is_empty() || key == ALL_TYPES {
            TypeKey::All
        } else {
            TypeKey::Key(key)
        }
    }

    /// Returns `true` if the record passes the selector.
    #[must_use]
    pub fn matches(&self, record: &AnimalRecord) -> bool {
        match self {
            TypeKey::All => true,
            TypeKey::Key(key) => record.type_key() == *key,
        }
    }
}

/// Status selector for the status dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// No filtering.
    #[default]
    All,
    /// Only records in the given status.
    Only(Status),
}

impl StatusFilter {
    /// Returns `true` if the record passes the selector.
    #[must_use]
    pub fn matches(&self, record: &AnimalRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => record.status == *status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str(ALL),
            StatusFilter::Only(status) => write!(f, "{status}"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
            return Ok(StatusFilter::All);
        }
        Ok(StatusFilter::Only(trimmed.parse()?))
    }
}

fn shelter_selects_all(code: Option<&str>) -> Option<&str> {
    match code.map(str::trim) {
        None | Some("") | Some(ALL) => None,
        Some(code) => Some(code),
    }
}

/// Filters by composite `species_sex` key, case-insensitively.
///
/// `None`, an empty key or `todos` returns every record.
pub fn by_type_filter<'a, I>(records: I, key: Option<&str>) -> Vec<&'a AnimalRecord>
where
    I: IntoIterator<Item = &'a AnimalRecord>,
{
    let key = key.map(TypeKey::parse).unwrap_or_default();
    records.into_iter().filter(|r| key.matches(r)).collect()
}

/// Filters by exact shelter code; `None`, empty or `all` returns every record.
pub fn by_shelter_code<'a, I>(records: I, code: Option<&str>) -> Vec<&'a AnimalRecord>
where
    I: IntoIterator<Item = &'a AnimalRecord>,
{
    match shelter_selects_all(code) {
        None => records.into_iter().collect(),
        Some(code) => records
            .into_iter()
            .filter(|r| r.shelter_code == code)
            .collect(),
    }
}

/// Filters by exact status.
pub fn by_status<'a, I>(records: I, status: StatusFilter) -> Vec<&'a AnimalRecord>
where
    I: IntoIterator<Item = &'a AnimalRecord>,
{
    records.into_iter().filter(|r| status.matches(r)).collect()
}

/// Returns the status selector options for a collection.
///
/// `All` always comes first, followed by the distinct statuses present in
/// order of first appearance.
#[must_use]
pub fn status_options(records: &[AnimalRecord]) -> Vec<StatusFilter> {
    let mut options = vec![StatusFilter::All];
    for record in records {
        let option = StatusFilter::Only(record.status);
        if !options.contains(&option) {
            options.push(option);
        }
    }
    options
}

/// Combined filter applied by a view.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Status selector.
    pub status: StatusFilter,
    /// Shelter code; `None`, empty or `all` disables the filter.
    pub shelter: Option<String>,
    /// Species/sex selector.
    pub kind: TypeKey,
}

impl CatalogQuery {
    /// Applies type, shelter and status filters in a single pass.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [AnimalRecord]) -> Vec<&'a AnimalRecord> {
        let shelter = shelter_selects_all(self.shelter.as_deref());
        records
            .iter()
            .filter(|r| self.kind.matches(r))
            .filter(|r| shelter.map_or(true, |code| r.shelter_code == code))
            .filter(|r| self.status.matches(r))
            .collect()
    }
}
