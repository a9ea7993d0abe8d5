// Rust guideline compliant 2026-10-16

//! Two-phase lifecycle orchestration.
//!
//! Every mutation is checked locally, sent to the store, and only after the
//! store confirms it is the local snapshot refreshed. A rejected request
//! leaves the snapshot exactly as it was.

use chrono::NaiveDate;
use patitas_core::{AnimalRecord, RecordDraft, RecordId, Transition};

use crate::error::{AppError, Result};
use crate::snapshot::Snapshot;
use crate::store::AdoptionStore;
use crate::time;

/// Drives record transitions and admin form submissions against a store.
pub struct LifecycleManager<S> {
    store: S,
    clock: fn() -> NaiveDate,
}

impl<S: AdoptionStore> LifecycleManager<S> {
    /// Creates a manager that dates transitions with the local calendar day.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, time::today)
    }

    /// Creates a manager with a custom source for "today".
    pub fn with_clock(store: S, clock: fn() -> NaiveDate) -> Self {
        Self { store, clock }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Marks an available record as adopted.
    ///
    /// # Errors
    ///
    /// See [`LifecycleManager::transition`].
    pub async fn mark_adopted(
        &self,
        snapshot: &mut Snapshot,
        id: &RecordId,
    ) -> Result<AnimalRecord> {
        self.transition(snapshot, id, Transition::MarkAdopted).await
    }

    /// Deactivates an available record.
    ///
    /// # Errors
    ///
    /// See [`LifecycleManager::transition`].
    pub async fn deactivate(&self, snapshot: &mut Snapshot, id: &RecordId) -> Result<AnimalRecord> {
        self.transition(snapshot, id, Transition::Deactivate).await
    }

    /// Reactivates an inactive record, resetting its upload date.
    ///
    /// # Errors
    ///
    /// See [`LifecycleManager::transition`].
    pub async fn reactivate(&self, snapshot: &mut Snapshot, id: &RecordId) -> Result<AnimalRecord> {
        self.transition(snapshot, id, Transition::Reactivate).await
    }

    /// Runs one transition against the record `id` in `snapshot`.
    ///
    /// On success the returned record reflects the transition and the
    /// snapshot has been re-fetched in full. A failed refresh still reports
    /// success; the snapshot then carries the refresh error.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the record is not in the snapshot
    /// - `InvalidTransition` if the record's status does not allow it; the
    ///   store is not contacted. Also returned when the store rejects the
    ///   request because the record had already moved on
    /// - Transport errors from the store; the snapshot is untouched
    pub async fn transition(
        &self,
        snapshot: &mut Snapshot,
        id: &RecordId,
        transition: Transition,
    ) -> Result<AnimalRecord> {
        let mut record = snapshot
            .find(id)
            .cloned()
            .ok_or_else(|| AppError::InvalidInput(format!("Record {id} is not in this view")))?;
        transition.check(&record)?;

        let today = (self.clock)();
        if let Err(err) = self.store.apply_transition(id, transition, today).await {
            return Err(self.explain_rejection(id, transition, err).await);
        }

        transition.apply(&mut record, today)?;
        tracing::info!(record = %id, status = %record.status, "Applied {}", transition);

        snapshot.refresh(&self.store).await;
        Ok(record)
    }

    /// Re-reads a record the store refused to move.
    ///
    /// If the store's copy no longer allows `transition` the rejection becomes
    /// `InvalidTransition`; otherwise the original error is kept.
    async fn explain_rejection(
        &self,
        id: &RecordId,
        transition: Transition,
        err: AppError,
    ) -> AppError {
        if !matches!(err, AppError::RemoteRejected { .. }) {
            return err;
        }
        match self.store.fetch_record(id).await {
            Ok(current) => match transition.check(&current) {
                Err(moved) => {
                    tracing::warn!(
                        record = %id,
                        status = %current.status,
                        "Record already moved, {} refused",
                        transition
                    );
                    moved.into()
                }
                Ok(()) => err,
            },
            Err(fetch_err) => {
                tracing::debug!(
                    record = %id,
                    error = %fetch_err,
                    "Could not re-read rejected record"
                );
                err
            }
        }
    }

    /// Validates and creates a new available record.
    ///
    /// Shelter codes are fetched fresh so the draft is checked against the
    /// codes the store currently knows.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if validation fails, before any mutation is
    /// sent, or the store's error if fetching codes or creating fails.
    pub async fn register(&self, snapshot: &mut Snapshot, draft: &RecordDraft) -> Result<()> {
        let codes = self.store.shelter_codes().await?;
        let validated = draft.validate(&codes)?;

        self.store.create(&validated).await?;
        tracing::info!(name = %validated.name, shelter = %validated.shelter_code, "Registered record");

        snapshot.refresh(&self.store).await;
        Ok(())
    }

    /// Validates and replaces the editable fields of record `id`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if validation fails, before any mutation is
    /// sent, or the store's error if fetching codes or updating fails.
    pub async fn edit(
        &self,
        snapshot: &mut Snapshot,
        id: &RecordId,
        draft: &RecordDraft,
    ) -> Result<()> {
        let codes = self.store.shelter_codes().await?;
        let validated = draft.validate(&codes)?;

        self.store.update(id, &validated).await?;
        tracing::info!(record = %id, "Updated record");

        snapshot.refresh(&self.store).await;
        Ok(())
    }
}
