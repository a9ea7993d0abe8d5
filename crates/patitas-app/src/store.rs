// Rust guideline compliant 2026-10-16

//! The seam between application services and the remote adoption store.

use async_trait::async_trait;
use chrono::NaiveDate;
use patitas_core::wire::RecordBatch;
use patitas_core::{AnimalRecord, RecordId, Transition, ValidatedDraft};

use crate::error::Result;
use crate::snapshot::View;

/// Operations the adoption API exposes to this client.
///
/// Every method is a single request. Implementations must not report
/// success before the store has confirmed it.
#[async_trait]
pub trait AdoptionStore: Send + Sync {
    /// Fetches the collection backing a view.
    async fn fetch_view(&self, view: View) -> Result<RecordBatch>;

    /// Fetches a single record.
    async fn fetch_record(&self, id: &RecordId) -> Result<AnimalRecord>;

    /// Fetches the known shelter codes.
    async fn shelter_codes(&self) -> Result<Vec<String>>;

    /// Creates a record in the available status.
    async fn create(&self, draft: &ValidatedDraft) -> Result<()>;

    /// Replaces the editable fields of a record.
    async fn update(&self, id: &RecordId, draft: &ValidatedDraft) -> Result<()>;

    /// Requests a lifecycle transition issued on `today`.
    async fn apply_transition(
        &self,
        id: &RecordId,
        transition: Transition,
        today: NaiveDate,
    ) -> Result<()>;
}
