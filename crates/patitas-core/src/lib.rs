// Rust guideline compliant 2026-10-16

//! Patitas Core Library
//!
//! This crate provides the foundational components for the Patitas adoption client:
//! - Data models (AnimalRecord, Species, Sex, Status, Age)
//! - Description codec (vaccinated/neutered markers inside free text)
//! - FSM logic (lifecycle transitions and their side effects)
//! - Catalog queries (carousel windows, type/shelter/status filters)
//! - Wire translation for the remote adoption API
//! - Configuration and error types

pub mod codec;
pub mod config;
pub mod error;
pub mod fsm;
pub mod models;
pub mod query;
pub mod wire;

pub use codec::{decode, encode, DecodedDescription};
pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use fsm::Transition;
pub use models::{Age, AnimalRecord, RecordDraft, RecordId, Sex, Species, Status, ValidatedDraft};
pub use query::{CatalogQuery, Carousel, StatusFilter, TypeKey};
