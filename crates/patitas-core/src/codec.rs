// Rust guideline compliant 2026-10-16

//! Description codec.
//!
//! The adoption API has no structured fields for vaccination or neutering, so
//! both facts travel inside the free-text description as Spanish question
//! phrases answered `Sí` or `No`:
//!
//! ```text
//! {text} ¿Tengo mis vacunas al día? Sí ¿Estoy castrado/a? No
//! ```
//!
//! Decoding only treats an explicit `Sí` as true. A missing marker decodes
//! as false, which makes "not recorded" and "explicitly no" indistinguishable.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Marker phrase for the vaccinated flag.
pub const VACCINATED_MARKER: &str = "¿Tengo mis vacunas al día?";

/// Marker phrase for the neutered flag.
pub const NEUTERED_MARKER: &str = "¿Estoy castrado/a?";

const YES: &str = "Sí";
const NO: &str = "No";

/// Structured view of an encoded description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedDescription {
    /// Description prose with markers removed and whitespace trimmed.
    pub text: String,
    /// Whether the vaccinated marker was answered `Sí`.
    pub vaccinated: bool,
    /// Whether the neutered marker was answered `Sí`.
    pub neutered: bool,
}

fn answer(flag: bool) -> &'static str {
    if flag {
        YES
    } else {
        NO
    }
}

fn vaccinated_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"¿Tengo mis vacunas al día\? (Sí|No)").expect("vaccinated marker pattern is valid")
    })
}

fn neutered_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"¿Estoy castrado/a\? (Sí|No)").expect("neutered marker pattern is valid")
    })
}

/// Appends both markers to `text`, vaccinated first.
#[must_use]
pub fn encode(text: &str, vaccinated: bool, neutered: bool) -> String {
    format!(
        "{text} {VACCINATED_MARKER} {} {NEUTERED_MARKER} {}",
        answer(vaccinated),
        answer(neutered)
    )
}

/// Extracts both flags from a description and strips every marker.
///
/// Works on descriptions with zero, one or both markers.
#[must_use]
pub fn decode(description: &str) -> DecodedDescription {
    let vaccinated = description.contains(&format!("{VACCINATED_MARKER} {YES}"));
    let neutered = description.contains(&format!("{NEUTERED_MARKER} {YES}"));

    let without_vaccinated = vaccinated_pattern().replace_all(description, "");
    let text = neutered_pattern()
        .replace_all(&without_vaccinated, "")
        .trim()
        .to_string();

    DecodedDescription {
        text,
        vaccinated,
        neutered,
    }
}

/// Returns the answered marker phrases present in a description.
///
/// Vaccinated comes before neutered; absent markers are omitted.
#[must_use]
pub fn decode_markers(description: &str) -> Vec<String> {
    [vaccinated_pattern(), neutered_pattern()]
        .into_iter()
        .filter_map(|pattern| pattern.find(description))
        .map(|found| found.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        assert_eq!(
            encode("Juguetón", true, false),
            "Juguetón ¿Tengo mis vacunas al día? Sí ¿Estoy castrado/a? No"
        );
    }

    #[test]
    fn test_decode_markers_only_present_ones() {
        let markers = decode_markers("Tranquila ¿Estoy castrado/a? No");
        assert_eq!(markers, vec!["¿Estoy castrado/a? No".to_string()]);
        assert!(decode_markers("Sin marcas").is_empty());
    }
}
