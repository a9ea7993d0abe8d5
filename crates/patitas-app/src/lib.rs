// Rust guideline compliant 2026-10-16

//! Shared application services for Patitas.
//!
//! This crate provides the non-CLI-specific pieces every surface needs: the
//! store seam and its HTTP implementation, view snapshots with their
//! fail-to-empty policy, the two-phase lifecycle manager, the auto-advancing
//! carousel, and standardized error codes and response envelopes.

pub mod carousel;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod response;
pub mod snapshot;
pub mod store;
pub mod time;

pub use carousel::{CarouselHandle, Frame, Navigation};
pub use error::{AppError, ErrorCode, Result};
pub use http::HttpStore;
pub use lifecycle::LifecycleManager;
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use snapshot::{shelter_codes_or_empty, Snapshot, View};
pub use store::AdoptionStore;
pub use time::today;
