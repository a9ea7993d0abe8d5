// Rust guideline compliant 2026-10-16

//! Command implementations for the Patitas CLI.

pub mod admin;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod inactive;
pub mod recent;
pub mod shelters;
pub mod show;
pub mod status;
pub mod transition;

use anyhow::Result;
use patitas_app::{ErrorEnvelope, HttpStore, Snapshot};
use patitas_core::{AnimalRecord, Config};
use std::path::PathBuf;

use crate::OutputFormatter;

/// Everything a command needs from startup.
pub struct Context {
    /// Effective configuration after file, environment and flag overrides.
    pub config: Config,
    /// Path the configuration was read from.
    pub config_path: PathBuf,
    /// Formatter for stdout and stderr output.
    pub formatter: Box<dyn OutputFormatter>,
}

impl Context {
    /// Builds an HTTP store for the configured API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn store(&self) -> Result<HttpStore> {
        Ok(HttpStore::new(&self.config)?)
    }

    /// Prints a list of records, preceded on stderr by the load error if any.
    pub fn print_records(&self, snapshot: &Snapshot, records: &[&AnimalRecord]) {
        self.report_load_error(snapshot);
        println!("{}", self.formatter.format_list(records));
    }

    /// Reports a failed view load on stderr.
    pub fn report_load_error(&self, snapshot: &Snapshot) {
        if let Some(err) = snapshot.error() {
            eprintln!(
                "{}",
                self.formatter.format_error(&ErrorEnvelope::from_error(err))
            );
        }
    }
}
