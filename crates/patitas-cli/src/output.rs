// Rust guideline compliant 2026-10-16

//! Output formatting module for the Patitas CLI.
//!
//! This module provides functionality for formatting animal records
//! in various output formats (JSON, table, plain text).

use chrono::NaiveDate;
use patitas_app::{ErrorEnvelope, Frame, SuccessEnvelope};
use patitas_core::{AnimalRecord, Config, OutputFormat, StatusFilter};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::terminal::wrap_text;

/// Column where detail values start.
const LABEL_WIDTH: usize = 13;

/// Output formatter trait.
///
/// Defines the interface for formatting Patitas data in different output formats.
pub trait OutputFormatter {
    /// Formats a single record for the detail view.
    fn format_record(&self, record: &AnimalRecord) -> String;

    /// Formats a list of records.
    fn format_list(&self, records: &[&AnimalRecord]) -> String;

    /// Formats one carousel frame.
    ///
    /// # Arguments
    /// * `frame` - The visible window
    /// * `total` - Number of records in the whole collection
    fn format_frame(&self, frame: &Frame, total: usize) -> String;

    /// Formats the known shelter codes.
    fn format_shelters(&self, codes: &[String]) -> String;

    /// Formats the choices offered by the status selector.
    fn format_status_options(&self, options: &[StatusFilter]) -> String;

    /// Formats the effective configuration.
    fn format_config(&self, config: &Config) -> String;

    /// Formats the confirmation of a completed mutation.
    fn format_success(&self, message: &str, record: Option<&AnimalRecord>) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &ErrorEnvelope) -> String;
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
}

fn date_or_dash(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn shelter_display(record: &AnimalRecord) -> String {
    match &record.shelter_name {
        Some(name) => format!("{} ({})", record.shelter_code, name),
        None => record.shelter_code.clone(),
    }
}

fn frame_range(frame: &Frame) -> (usize, usize) {
    if frame.records.is_empty() {
        (0, 0)
    } else {
        (frame.offset + 1, frame.offset + frame.records.len())
    }
}

/// JSON output formatter.
///
/// Formats records and envelopes as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_record(&self, record: &AnimalRecord) -> String {
        to_json(record)
    }

    fn format_list(&self, records: &[&AnimalRecord]) -> String {
        to_json(&json!({
            "records": records,
            "total": records.len(),
        }))
    }

    fn format_frame(&self, frame: &Frame, total: usize) -> String {
        to_json(&json!({
            "offset": frame.offset,
            "records": frame.records,
            "total": total,
        }))
    }

    fn format_shelters(&self, codes: &[String]) -> String {
        to_json(&json!({ "shelters": codes }))
    }

    fn format_status_options(&self, options: &[StatusFilter]) -> String {
        let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
        to_json(&json!({ "statuses": labels }))
    }

    fn format_config(&self, config: &Config) -> String {
        to_json(config)
    }

    fn format_success(&self, message: &str, record: Option<&AnimalRecord>) -> String {
        to_json(&SuccessEnvelope::new(record).with_message(message))
    }

    fn format_error(&self, error: &ErrorEnvelope) -> String {
        serde_json::to_string(error)
            .unwrap_or_else(|_| json!({ "error": error.message }).to_string())
    }
}

/// Table output formatter.
///
/// Formats records as human-readable tables with colors and alignment.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn colored(&self, prefix: &str, color: Color, message: &str) -> String {
        if !self.use_color {
            return format!("{prefix}{message}");
        }
        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(buffer, "{prefix}");
        let _ = buffer.reset();
        let _ = write!(buffer, "{message}");
        String::from_utf8_lossy(buffer.as_slice()).to_string()
    }

    fn table(records: &[&AnimalRecord]) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec![
            "ID", "Name", "Species", "Sex", "Age", "Shelter", "Status", "Listed",
        ]);

        for record in records {
            builder.push_record(vec![
                record.id.to_string(),
                record.name.clone(),
                record.species.to_string(),
                record.sex.to_string(),
                record.age.to_string(),
                shelter_display(record),
                record.status.to_string(),
                date_or_dash(record.uploaded_on),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }
}

impl OutputFormatter for TableFormatter {
    fn format_record(&self, record: &AnimalRecord) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:          {}\n", record.id));
        output.push_str(&format!("Name:        {}\n", record.name));
        output.push_str(&format!("Species:     {}\n", record.species));
        output.push_str(&format!("Sex:         {}\n", record.sex));
        output.push_str(&format!("Age:         {}\n", record.age));
        output.push_str(&format!("Status:      {}\n", record.status));
        output.push_str(&format!("Shelter:     {}\n", shelter_display(record)));

        if let Some(phone) = &record.contact_phone {
            output.push_str(&format!("Phone:       {}\n", phone));
        }

        for (index, marker) in record.markers.iter().enumerate() {
            let label = if index == 0 { "Health:" } else { "" };
            output.push_str(&format!("{label:<LABEL_WIDTH$}{marker}\n"));
        }

        if record.uploaded_on.is_some() {
            output.push_str(&format!("Listed:      {}\n", date_or_dash(record.uploaded_on)));
        }
        if record.adopted_on.is_some() {
            output.push_str(&format!("Adopted:     {}\n", date_or_dash(record.adopted_on)));
        }
        if record.returned_on.is_some() {
            output.push_str(&format!("Returned:    {}\n", date_or_dash(record.returned_on)));
        }
        if let Some(reason) = &record.return_reason {
            output.push_str(&format!("Reason:      {}\n", reason));
        }
        if let Some(url) = &record.image_url {
            output.push_str(&format!("Image:       {}\n", url));
        }

        if !record.description.is_empty() {
            output.push_str(&format!(
                "Description: {}\n",
                wrap_text(&record.description, LABEL_WIDTH)
            ));
        }

        output
    }

    fn format_list(&self, records: &[&AnimalRecord]) -> String {
        if records.is_empty() {
            return "No animals found.".to_string();
        }
        Self::table(records)
    }

    fn format_frame(&self, frame: &Frame, total: usize) -> String {
        if frame.records.is_empty() {
            return "No recent animals.".to_string();
        }
        let (from, to) = frame_range(frame);
        let records: Vec<&AnimalRecord> = frame.records.iter().collect();
        format!("Recent {from}-{to} of {total}\n{}", Self::table(&records))
    }

    fn format_shelters(&self, codes: &[String]) -> String {
        if codes.is_empty() {
            return "No shelters found.".to_string();
        }
        let mut builder = Builder::default();
        builder.push_record(vec!["Shelter code"]);
        for code in codes {
            builder.push_record(vec![code.clone()]);
        }
        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_status_options(&self, options: &[StatusFilter]) -> String {
        let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
        format!("Statuses:    {}", labels.join(", "))
    }

    fn format_config(&self, config: &Config) -> String {
        let mut output = String::new();
        output.push_str(&format!("api_base_url:           {}\n", config.api_base_url));
        output.push_str(&format!(
            "request_timeout_secs:   {}\n",
            config.request_timeout_secs
        ));
        output.push_str(&format!("carousel_window:        {}\n", config.carousel_window));
        output.push_str(&format!(
            "carousel_interval_secs: {}\n",
            config.carousel_interval_secs
        ));
        output.push_str(&format!("output_format:          {:?}\n", config.output_format));
        output.push_str(&format!("log_level:              {}\n", config.log_level));
        output
    }

    fn format_success(&self, message: &str, _record: Option<&AnimalRecord>) -> String {
        self.colored("✓ ", Color::Green, message)
    }

    fn format_error(&self, error: &ErrorEnvelope) -> String {
        let mut message = error.message.clone();
        if error.retryable {
            message.push_str(" (try again)");
        }
        self.colored("Error: ", Color::Red, &message)
    }
}

/// Plain text output formatter.
///
/// Formats records as simple plain text without colors or tables.
pub struct PlainFormatter;

impl PlainFormatter {
    fn line(record: &AnimalRecord) -> String {
        format!(
            "{} {} {} {} {} {} {}\n",
            record.id,
            record.name,
            record.type_key(),
            record.age,
            record.shelter_code,
            record.status,
            date_or_dash(record.uploaded_on)
        )
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_record(&self, record: &AnimalRecord) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", record.id));
        output.push_str(&format!("{}\n", record.name));
        output.push_str(&format!("{} {}\n", record.species, record.sex));
        output.push_str(&format!("{}\n", record.age));
        output.push_str(&format!("{}\n", record.status));
        output.push_str(&format!("{}\n", record.shelter_code));
        for marker in &record.markers {
            output.push_str(&format!("{marker}\n"));
        }

        if !record.description.is_empty() {
            output.push_str(&format!("{}\n", record.description));
        }

        output
    }

    fn format_list(&self, records: &[&AnimalRecord]) -> String {
        if records.is_empty() {
            return "No animals found.".to_string();
        }
        records.iter().map(|record| Self::line(record)).collect()
    }

    fn format_frame(&self, frame: &Frame, total: usize) -> String {
        let (from, to) = frame_range(frame);
        let mut output = format!("{from}-{to}/{total}\n");
        for record in &frame.records {
            output.push_str(&Self::line(record));
        }
        output
    }

    fn format_shelters(&self, codes: &[String]) -> String {
        codes.iter().map(|code| format!("{code}\n")).collect()
    }

    fn format_status_options(&self, options: &[StatusFilter]) -> String {
        options.iter().map(|option| format!("{option}\n")).collect()
    }

    fn format_config(&self, config: &Config) -> String {
        TableFormatter::new(false).format_config(config)
    }

    fn format_success(&self, message: &str, _record: Option<&AnimalRecord>) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &ErrorEnvelope) -> String {
        format!("Error: {}", error.message)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
