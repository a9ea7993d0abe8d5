// Rust guideline compliant 2026-10-16

//! Point-in-time copies of a view's collection.
//!
//! Loading never fails: a failed fetch leaves an empty collection and keeps
//! the error for display, so every view renders something.

use patitas_core::{AnimalRecord, RecordId, Status};
use serde::Serialize;
use std::fmt;

use crate::error::AppError;
use crate::store::AdoptionStore;

/// A remote collection the client can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Admin list of available records.
    Available,
    /// Public catalog.
    Catalog,
    /// Recently listed records, shown in the carousel.
    Recent,
    /// Status dashboard covering every status.
    StatusReport,
    /// Deactivated records awaiting reactivation.
    Inactive,
}

impl View {
    /// Path of the collection, relative to the API base.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            View::Available | View::Catalog => "mascotas",
            View::Recent => "mascotas/recientes",
            View::StatusReport => "mascotas/estado",
            View::Inactive => "mascotas/desactivar",
        }
    }

    /// Query parameters sent with the collection request.
    #[must_use]
    pub fn query(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            View::Available => &[("estado", "disponible")],
            _ => &[],
        }
    }

    /// Status assumed for elements that carry none.
    ///
    /// Only views that list a single status imply one.
    #[must_use]
    pub fn implied_status(&self) -> Option<Status> {
        match self {
            View::Available | View::Recent => Some(Status::Available),
            View::Inactive => Some(Status::Inactive),
            View::Catalog | View::StatusReport => None,
        }
    }

    /// Whether the response may wrap its array in an object.
    #[must_use]
    pub fn accepts_wrapper(&self) -> bool {
        matches!(self, View::Recent)
    }

    /// Whether a 404 answer means an empty collection.
    #[must_use]
    pub fn not_found_is_empty(&self) -> bool {
        matches!(self, View::Inactive)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::Available => "available",
            View::Catalog => "catalog",
            View::Recent => "recent",
            View::StatusReport => "status report",
            View::Inactive => "inactive",
        };
        f.write_str(name)
    }
}

/// The records of one view as last fetched.
#[derive(Debug)]
pub struct Snapshot {
    view: View,
    records: Vec<AnimalRecord>,
    error: Option<AppError>,
}

impl Snapshot {
    /// Fetches `view` from the store.
    ///
    /// On failure the snapshot is empty and [`Snapshot::error`] holds the
    /// cause. Elements the store sent but that could not be decoded are
    /// skipped with a warning.
    pub async fn load<S>(store: &S, view: View) -> Self
    where
        S: AdoptionStore + ?Sized,
    {
        let mut snapshot = Self::empty(view);
        snapshot.refresh(store).await;
        snapshot
    }

    /// Creates an empty snapshot that has not been fetched.
    #[must_use]
    pub fn empty(view: View) -> Self {
        Self {
            view,
            records: Vec::new(),
            error: None,
        }
    }

    /// Re-fetches the whole view, replacing the current records.
    pub async fn refresh<S>(&mut self, store: &S)
    where
        S: AdoptionStore + ?Sized,
    {
        match store.fetch_view(self.view).await {
            Ok(batch) => {
                for rejected in &batch.rejected {
                    tracing::warn!(view = %self.view, "Skipping record: {}", rejected);
                }
                self.records = batch.records;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(view = %self.view, error = %err, "Failed to load view");
                self.records.clear();
                self.error = Some(err);
            }
        }
    }

    /// The view this snapshot mirrors.
    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    /// Records in store order.
    #[must_use]
    pub fn records(&self) -> &[AnimalRecord] {
        &self.records
    }

    /// The error from the last fetch, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    /// Removes and returns the error from the last fetch.
    pub fn take_error(&mut self) -> Option<AppError> {
        self.error.take()
    }

    /// Finds a record by id.
    #[must_use]
    pub fn find(&self, id: &RecordId) -> Option<&AnimalRecord> {
        self.records.iter().find(|record| &record.id == id)
    }
}

/// Fetches shelter codes, falling back to an empty list on failure.
pub async fn shelter_codes_or_empty<S>(store: &S) -> Vec<String>
where
    S: AdoptionStore + ?Sized,
{
    match store.shelter_codes().await {
        Ok(codes) => codes,
        Err(err) => {
            tracing::warn!(error = %err, "Failed to load shelter codes");
            Vec::new()
        }
    }
}
