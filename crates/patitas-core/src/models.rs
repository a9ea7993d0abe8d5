// Rust guideline compliant 2026-10-16

//! Core data models for Patitas.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::{Error, Result};

/// Opaque record identifier assigned by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates an identifier from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Species of an adoptable animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    /// Dogs.
    Canine,
    /// Cats.
    Feline,
}

impl Species {
    /// Returns the label the adoption API uses for this species.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Species::Canine => "Canina",
            Species::Feline => "Felina",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Species {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "canina" | "canino" | "canine" => Ok(Species::Canine),
            "felina" | "felino" | "feline" => Ok(Species::Feline),
            other => Err(Error::InvalidInput(format!("Unknown species: {other}"))),
        }
    }
}

/// Sex of an adoptable animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Female.
    Female,
    /// Male.
    Male,
}

impl Sex {
    /// Returns the label the adoption API uses for this sex.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Female => "Hembra",
            Sex::Male => "Macho",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sex {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "hembra" | "female" => Ok(Sex::Female),
            "macho" | "male" => Ok(Sex::Male),
            other => Err(Error::InvalidInput(format!("Unknown sex: {other}"))),
        }
    }
}

/// Status of a record in the adoption lifecycle.
///
/// Only `Available`, `Adopted` and `Inactive` are driven by this client.
/// The remaining states are reporting states set by the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Listed in the catalog and open for adoption.
    Available,
    /// Adopted; no longer listed.
    Adopted,
    /// Withdrawn from the catalog by staff.
    Inactive,
    /// Held for a prospective adopter.
    Reserved,
    /// Returned after an adoption.
    Returned,
    /// Being moved between shelters.
    InTransit,
}

impl Status {
    /// Every status, in declaration order.
    pub const ALL: [Status; 6] = [
        Status::Available,
        Status::Adopted,
        Status::Inactive,
        Status::Reserved,
        Status::Returned,
        Status::InTransit,
    ];

    /// Returns the label the adoption API uses for this status.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Status::Available => "disponible",
            Status::Adopted => "adoptado",
            Status::Inactive => "inactivo",
            Status::Reserved => "reservado",
            Status::Returned => "devuelto",
            Status::InTransit => "en tránsito",
        }
    }

    /// Parses an API status label, case-insensitively.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Status> {
        match label.trim().to_lowercase().as_str() {
            "disponible" => Some(Status::Available),
            "adoptado" => Some(Status::Adopted),
            "inactivo" => Some(Status::Inactive),
            "reservado" => Some(Status::Reserved),
            "devuelto" => Some(Status::Returned),
            "en tránsito" | "en transito" | "en_transito" | "en-transito" => {
                Some(Status::InTransit)
            }
            _ => None,
        }
    }

    /// Returns the numeric `id_estado` code, for the states that have one.
    #[must_use]
    pub fn wire_code(&self) -> Option<u8> {
        match self {
            Status::Available => Some(1),
            Status::Inactive => Some(2),
            Status::Adopted => Some(3),
            _ => None,
        }
    }

    /// Maps a numeric `id_estado` code back to a status.
    #[must_use]
    pub fn from_wire_code(code: u8) -> Option<Status> {
        match code {
            1 => Some(Status::Available),
            2 => Some(Status::Inactive),
            3 => Some(Status::Adopted),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        Status::from_label(value)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown status: {}", value.trim())))
    }
}

fn age_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^([0-9]+)\s*(años?|meses?|días?)$").expect("age pattern is valid")
    })
}

/// An age such as `"2 años"`, `"9 meses"` or `"1 día"`.
///
/// Construction validates the `<integer> <unit>` grammar, so every `Age`
/// value is well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Age(String);

impl Age {
    /// Parses and validates an age string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the value does not match the age grammar.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if age_pattern().is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(Error::InvalidInput(format!(
                "Invalid age format '{value}'. Use for example \"2 años\" or \"9 meses\""
            )))
        }
    }

    /// Returns `true` if the value satisfies the age grammar.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        age_pattern().is_match(value.trim())
    }

    /// Returns the age text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Age {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Age::parse(&value)
    }
}

impl From<Age> for String {
    fn from(age: Age) -> Self {
        age.0
    }
}

/// An adoptable animal as seen by this client.
///
/// The vaccinated/neutered facts are first-class fields here; they only
/// become description markers at the wire boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    /// Identifier assigned by the store.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Species.
    pub species: Species,
    /// Sex.
    pub sex: Sex,
    /// Validated age.
    pub age: Age,
    /// Code of the shelter or foster home holding the animal.
    pub shelter_code: String,
    /// Shelter display name, when the store provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelter_name: Option<String>,
    /// Contact phone for adoption enquiries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    /// Hosted image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Free-text description with markers removed.
    #[serde(default)]
    pub description: String,
    /// Whether vaccinations are up to date.
    #[serde(default)]
    pub vaccinated: bool,
    /// Whether the animal is neutered.
    #[serde(default)]
    pub neutered: bool,
    /// Answered marker phrases found in the stored description, in
    /// vaccinated-then-neutered order. Empty when none were recorded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<String>,
    /// Current lifecycle status.
    pub status: Status,
    /// Date the record was listed, or last reactivated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_on: Option<NaiveDate>,
    /// Date of adoption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adopted_on: Option<NaiveDate>,
    /// Date of return after adoption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returned_on: Option<NaiveDate>,
    /// Reason given on return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_reason: Option<String>,
}

impl AnimalRecord {
    /// Returns the composite `species_sex` key used by the catalog type filter.
    #[must_use]
    pub fn type_key(&self) -> String {
        format!(
            "{}_{}",
            self.species.label().to_lowercase(),
            self.sex.label().to_lowercase()
        )
    }

    /// Returns the description with both markers appended.
    #[must_use]
    pub fn encoded_description(&self) -> String {
        crate::codec::encode(&self.description, self.vaccinated, self.neutered)
    }
}

/// The admin form for creating or editing a record, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    /// Display name.
    pub name: String,
    /// Species selection.
    pub species: Option<Species>,
    /// Sex selection.
    pub sex: Option<Sex>,
    /// Age as typed.
    pub age: String,
    /// Description prose, without markers.
    pub description: String,
    /// Vaccinations up to date.
    pub vaccinated: bool,
    /// Neutered.
    pub neutered: bool,
    /// Contact phone; empty means none.
    pub contact_phone: String,
    /// Shelter code selection.
    pub shelter_code: String,
    /// Hosted image URL; empty means none.
    pub image_url: String,
}

/// A draft that passed validation and may be submitted to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDraft {
    /// Display name.
    pub name: String,
    /// Species.
    pub species: Species,
    /// Sex.
    pub sex: Sex,
    /// Validated age.
    pub age: Age,
    /// Description prose, without markers.
    pub description: String,
    /// Vaccinations up to date.
    pub vaccinated: bool,
    /// Neutered.
    pub neutered: bool,
    /// Contact phone.
    pub contact_phone: Option<String>,
    /// Known shelter code.
    pub shelter_code: String,
    /// Hosted image URL.
    pub image_url: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl RecordDraft {
    /// Fills a draft from an existing record, for editing.
    #[must_use]
    pub fn from_record(record: &AnimalRecord) -> Self {
        Self {
            name: record.name.clone(),
            species: Some(record.species),
            sex: Some(record.sex),
            age: record.age.to_string(),
            description: record.description.clone(),
            vaccinated: record.vaccinated,
            neutered: record.neutered,
            contact_phone: record.contact_phone.clone().unwrap_or_default(),
            shelter_code: record.shelter_code.clone(),
            image_url: record.image_url.clone().unwrap_or_default(),
        }
    }

    /// Validates the draft against the currently known shelter codes.
    ///
    /// # Arguments
    ///
    /// * `shelter_codes` - Codes published by the store
    ///
    /// # Returns
    ///
    /// A `ValidatedDraft` ready for submission.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if:
    /// - A required field (name, species, sex, age, description, shelter) is missing
    /// - The age does not match the age grammar
    /// - The shelter code is not in `shelter_codes`
    pub fn validate(&self, shelter_codes: &[String]) -> Result<ValidatedDraft> {
        let shelter_code = non_empty(&self.shelter_code)
            .ok_or_else(|| Error::InvalidInput("Shelter code is required".to_string()))?;
        let name = non_empty(&self.name)
            .ok_or_else(|| Error::InvalidInput("Name is required".to_string()))?;
        let species = self
            .species
            .ok_or_else(|| Error::InvalidInput("Species is required".to_string()))?;
        let sex = self
            .sex
            .ok_or_else(|| Error::InvalidInput("Sex is required".to_string()))?;
        if self.age.trim().is_empty() {
            return Err(Error::InvalidInput("Age is required".to_string()));
        }
        let age = Age::parse(&self.age)?;
        let description = non_empty(&self.description)
            .ok_or_else(|| Error::InvalidInput("Description is required".to_string()))?;

        if !shelter_codes.iter().any(|code| *code == shelter_code) {
            return Err(Error::InvalidInput(format!(
                "Unknown shelter code: {shelter_code}"
            )));
        }

        Ok(ValidatedDraft {
            name,
            species,
            sex,
            age,
            description,
            vaccinated: self.vaccinated,
            neutered: self.neutered,
            contact_phone: non_empty(&self.contact_phone),
            shelter_code,
            image_url: non_empty(&self.image_url),
        })
    }
}
