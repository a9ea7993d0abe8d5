// Rust guideline compliant 2026-10-16

//! Finite State Machine module for lifecycle transitions.
//!
//! This client drives only three transitions:
//!
//! - Available → Adopted (mark adopted)
//! - Available → Inactive (deactivate)
//! - Inactive → Available (reactivate)
//!
//! Reserved, Returned and InTransit are set by the remote store and have no
//! outgoing transitions here.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::{AnimalRecord, Error, Result, Status};

impl Status {
    /// Checks if a transition to the target status is valid.
    ///
    /// # Arguments
    ///
    /// * `target` - The target status to transition to
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` if the pair is not one of the driven transitions.
    pub fn can_transition_to(&self, target: Status) -> Result<()> {
        match (self, target) {
            (Status::Available, Status::Adopted)
            | (Status::Available, Status::Inactive)
            | (Status::Inactive, Status::Available) => Ok(()),
            _ => Err(Error::InvalidTransition(format!(
                "Cannot transition from {} to {}",
                self, target
            ))),
        }
    }

    /// Returns the list of valid target states for the current status.
    #[must_use]
    pub fn valid_transitions(&self) -> Vec<Status> {
        match self {
            Status::Available => vec![Status::Adopted, Status::Inactive],
            Status::Inactive => vec![Status::Available],
            _ => Vec::new(),
        }
    }
}

/// A lifecycle operation an administrator can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Available → Adopted; records the adoption date.
    MarkAdopted,
    /// Available → Inactive.
    Deactivate,
    /// Inactive → Available; resets the upload date.
    Reactivate,
}

impl Transition {
    /// Status the record must hold for the transition to be legal.
    #[must_use]
    pub fn source(&self) -> Status {
        match self {
            Transition::MarkAdopted | Transition::Deactivate => Status::Available,
            Transition::Reactivate => Status::Inactive,
        }
    }

    /// Status the record holds after the transition.
    #[must_use]
    pub fn target(&self) -> Status {
        match self {
            Transition::MarkAdopted => Status::Adopted,
            Transition::Deactivate => Status::Inactive,
            Transition::Reactivate => Status::Available,
        }
    }

    /// Numeric `id_estado` sent with the transition request.
    #[must_use]
    pub fn wire_code(&self) -> u8 {
        match self {
            Transition::Reactivate => 1,
            Transition::Deactivate => 2,
            Transition::MarkAdopted => 3,
        }
    }

    /// Validates the transition for a record's current status.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` if the record is not in the source status.
    pub fn check(&self, record: &AnimalRecord) -> Result<()> {
        record
            .status
            .can_transition_to(self.target())
            .map_err(|_| {
                Error::InvalidTransition(format!(
                    "Cannot {} record {}: status is {}, expected {}",
                    self,
                    record.id,
                    record.status,
                    self.source()
                ))
            })
    }

    /// Validates and applies the transition and its side effects.
    ///
    /// # Arguments
    ///
    /// * `record` - The record to transition
    /// * `today` - Date recorded as the adoption or reactivation date
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` and leaves the record untouched if the
    /// transition is not legal from its current status.
    pub fn apply(&self, record: &mut AnimalRecord, today: NaiveDate) -> Result<()> {
        self.check(record)?;

        record.status = self.target();
        match self {
            Transition::MarkAdopted => record.adopted_on = Some(today),
            Transition::Reactivate => record.uploaded_on = Some(today),
            Transition::Deactivate => {}
        }

        Ok(())
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Transition::MarkAdopted => "mark adopted",
            Transition::Deactivate => "deactivate",
            Transition::Reactivate => "reactivate",
        };
        f.write_str(verb)
    }
}
