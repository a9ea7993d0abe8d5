// Rust guideline compliant 2026-10-16

//! Translation between `AnimalRecord` and the adoption API's JSON shapes.
//!
//! This is the only place that knows the Spanish field names, the numeric
//! `id_estado` codes and the description marker format.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec;
use crate::fsm::Transition;
use crate::{Age, AnimalRecord, Error, RecordId, Result, Status, ValidatedDraft};

/// A scalar that the API may send either as a string or as a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(text) => text,
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireRecord {
    id: Scalar,
    #[serde(default)]
    nombre: Option<String>,
    especie: String,
    sexo: String,
    edad: String,
    #[serde(default)]
    descripcion: Option<String>,
    #[serde(default)]
    numero_contacto: Option<Scalar>,
    #[serde(default)]
    cod_refugio: Option<Scalar>,
    #[serde(default)]
    nombre_refugio: Option<String>,
    #[serde(default)]
    imagen_url: Option<String>,
    #[serde(default)]
    estado: Option<String>,
    #[serde(default)]
    id_estado: Option<u8>,
    #[serde(default)]
    fecha_subida: Option<String>,
    #[serde(default)]
    fecha_adopcion: Option<String>,
    #[serde(default)]
    fecha_devolucion: Option<String>,
    #[serde(default)]
    motivo_devolucion: Option<String>,
}

/// Records decoded from a list response.
#[derive(Debug, Clone, Default)]
pub struct RecordBatch {
    /// Records that decoded cleanly, in response order.
    pub records: Vec<AnimalRecord>,
    /// One message per element that could not be decoded.
    pub rejected: Vec<String>,
}

/// Body of `POST /mascotas` and `PUT /mascotas/:id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordPayload {
    /// Name.
    pub nombre: String,
    /// Species label.
    pub especie: String,
    /// Age text.
    pub edad: String,
    /// Sex label.
    pub sexo: String,
    /// Description with both markers appended.
    pub descripcion: String,
    /// Contact phone, empty when none.
    pub numero_contacto: String,
    /// Shelter code.
    pub cod_refugio: String,
    /// Image URL or null.
    pub imagen_url: Option<String>,
    /// Always `disponible`.
    pub estado: String,
}

impl From<&ValidatedDraft> for RecordPayload {
    fn from(draft: &ValidatedDraft) -> Self {
        Self {
            nombre: draft.name.clone(),
            especie: draft.species.label().to_string(),
            edad: draft.age.to_string(),
            sexo: draft.sex.label().to_string(),
            descripcion: codec::encode(&draft.description, draft.vaccinated, draft.neutered),
            numero_contacto: draft.contact_phone.clone().unwrap_or_default(),
            cod_refugio: draft.shelter_code.clone(),
            imagen_url: draft.image_url.clone(),
            estado: Status::Available.label().to_string(),
        }
    }
}

/// Body of the lifecycle transition endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionPayload {
    /// Numeric status code of the target state.
    pub id_estado: u8,
    /// New upload date, sent only on reactivation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_subida: Option<String>,
}

impl TransitionPayload {
    /// Builds the request body for a transition issued on `today`.
    #[must_use]
    pub fn new(transition: Transition, today: NaiveDate) -> Self {
        let fecha_subida = match transition {
            Transition::Reactivate => Some(format_date(today)),
            _ => None,
        };
        Self {
            id_estado: transition.wire_code(),
            fecha_subida,
        }
    }
}

/// Formats a date the way the API expects it (`YYYY-MM-DD`).
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses an API date, accepting plain dates and timestamps.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return Some(stamp.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|stamp| stamp.date())
}

fn optional_date(field: &str, value: Option<String>) -> Result<Option<NaiveDate>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_date(text)
            .map(Some)
            .ok_or_else(|| Error::InvalidInput(format!("Invalid {field}: {text}"))),
    }
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn resolve_status(wire: &WireRecord, implied: Option<Status>) -> Result<Status> {
    if let Some(label) = wire.estado.as_deref() {
        return Status::from_label(label)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown status: {label}")));
    }
    if let Some(code) = wire.id_estado {
        return Status::from_wire_code(code)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown status code: {code}")));
    }
    implied.ok_or_else(|| Error::InvalidInput("Record has no status".to_string()))
}

/// Decodes one API record.
///
/// # Arguments
///
/// * `value` - The JSON object for a single record
/// * `implied` - Status assumed when the payload carries none, for endpoints
///   that only ever return one status
///
/// # Errors
///
/// Returns an error if required fields are missing, the age fails the age
/// grammar, or the species, sex, status or a date is unrecognised.
pub fn record_from_value(value: Value, implied: Option<Status>) -> Result<AnimalRecord> {
    let wire: WireRecord = serde_json::from_value(value)?;
    let status = resolve_status(&wire, implied)?;
    let raw_description = wire.descripcion.clone().unwrap_or_default();
    let decoded = codec::decode(&raw_description);

    Ok(AnimalRecord {
        id: RecordId::new(wire.id.into_text()),
        name: wire.nombre.unwrap_or_default(),
        species: wire.especie.parse()?,
        sex: wire.sexo.parse()?,
        age: Age::parse(&wire.edad)?,
        shelter_code: wire
            .cod_refugio
            .map(Scalar::into_text)
            .unwrap_or_default(),
        shelter_name: optional_text(wire.nombre_refugio),
        contact_phone: optional_text(wire.numero_contacto.map(Scalar::into_text)),
        image_url: optional_text(wire.imagen_url),
        description: decoded.text,
        vaccinated: decoded.vaccinated,
        neutered: decoded.neutered,
        markers: codec::decode_markers(&raw_description),
        status,
        uploaded_on: optional_date("fecha_subida", wire.fecha_subida)?,
        adopted_on: optional_date("fecha_adopcion", wire.fecha_adopcion)?,
        returned_on: optional_date("fecha_devolucion", wire.fecha_devolucion)?,
        return_reason: optional_text(wire.motivo_devolucion),
    })
}

/// Finds the record array in a list response.
///
/// The value itself if it is an array, otherwise the first array-valued
/// member of a top-level object, in the order the members were sent.
#[must_use]
pub fn extract_array(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => map.into_iter().find_map(|(_, member)| match member {
            Value::Array(items) => Some(items),
            _ => None,
        }),
        _ => None,
    }
}

/// Decodes every element of an already extracted array.
///
/// Elements that fail to decode are reported in `rejected` and skipped.
#[must_use]
pub fn records_from_values(items: Vec<Value>, implied: Option<Status>) -> RecordBatch {
    let mut batch = RecordBatch::default();
    for (index, item) in items.into_iter().enumerate() {
        match record_from_value(item, implied) {
            Ok(record) => batch.records.push(record),
            Err(err) => batch.rejected.push(format!("element {index}: {err}")),
        }
    }
    batch
}

/// Decodes the shelter code list.
///
/// # Errors
///
/// Returns an error if the value is not an array of strings or numbers.
pub fn shelter_codes_from_value(value: Value) -> Result<Vec<String>> {
    let codes: Vec<Scalar> = serde_json::from_value(value)?;
    Ok(codes.into_iter().map(Scalar::into_text).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sex, Species};
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "id": 12,
            "nombre": "Luna",
            "especie": "Felina",
            "sexo": "Hembra",
            "edad": "2 años",
            "descripcion": "Dormilona ¿Tengo mis vacunas al día? Sí ¿Estoy castrado/a? No",
            "numero_contacto": 5491100000000_i64,
            "cod_refugio": "REF1",
            "imagen_url": "",
            "estado": "disponible",
            "fecha_subida": "2024-05-01T03:00:00.000Z"
        })
    }

    #[test]
    fn test_record_from_value_maps_fields() {
        let record = record_from_value(sample(), None).unwrap();
        assert_eq!(record.id.as_str(), "12");
        assert_eq!(record.species, Species::Feline);
        assert_eq!(record.sex, Sex::Female);
        assert_eq!(record.description, "Dormilona");
        assert!(record.vaccinated);
        assert!(!record.neutered);
        assert_eq!(
            record.markers,
            vec![
                "¿Tengo mis vacunas al día? Sí".to_string(),
                "¿Estoy castrado/a? No".to_string()
            ]
        );
        assert_eq!(record.contact_phone.as_deref(), Some("5491100000000"));
        assert_eq!(record.image_url, None);
        assert_eq!(record.uploaded_on, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(record.type_key(), "felina_hembra");
    }

    #[test]
    fn test_record_without_markers_has_none() {
        let mut value = sample();
        value["descripcion"] = json!("Sin datos de salud");
        let record = record_from_value(value, None).unwrap();
        assert!(record.markers.is_empty());
        assert!(!record.vaccinated);
    }

    #[test]
    fn test_status_falls_back_to_code_then_implied() {
        let mut value = sample();
        value.as_object_mut().unwrap().remove("estado");
        value["id_estado"] = json!(2);
        assert_eq!(record_from_value(value.clone(), None).unwrap().status, Status::Inactive);

        value.as_object_mut().unwrap().remove("id_estado");
        assert!(record_from_value(value.clone(), None).is_err());
        assert_eq!(
            record_from_value(value, Some(Status::Available)).unwrap().status,
            Status::Available
        );
    }

    #[test]
    fn test_extract_array_from_wrapper() {
        let wrapped = json!({ "total": 1, "mascotas": [sample()] });
        assert_eq!(extract_array(wrapped).map(|items| items.len()), Some(1));
        assert!(extract_array(json!({ "total": 1 })).is_none());
        assert!(extract_array(json!("nope")).is_none());
    }

    #[test]
    fn test_extract_array_takes_first_member_in_response_order() {
        let wrapped: Value =
            serde_json::from_str(r#"{"mascotas":[{"id":1}],"errores":[]}"#).unwrap();
        let items = extract_array(wrapped).unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_bad_elements_are_rejected_not_fatal() {
        let mut bad = sample();
        bad["edad"] = json!("dos años");
        let batch = records_from_values(vec![sample(), bad], None);
        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.rejected.len(), 1);
        assert!(batch.rejected[0].starts_with("element 1"));
    }

    #[test]
    fn test_transition_payloads() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(
            serde_json::to_value(TransitionPayload::new(Transition::MarkAdopted, today)).unwrap(),
            json!({ "id_estado": 3 })
        );
        assert_eq!(
            serde_json::to_value(TransitionPayload::new(Transition::Reactivate, today)).unwrap(),
            json!({ "id_estado": 1, "fecha_subida": "2026-03-09" })
        );
    }

    #[test]
    fn test_shelter_codes_accept_numbers() {
        let codes = shelter_codes_from_value(json!(["A1", 7])).unwrap();
        assert_eq!(codes, vec!["A1".to_string(), "7".to_string()]);
    }
}
