// Rust guideline compliant 2026-10-16

//! Unit tests for the description codec.

use patitas_core::codec::{decode, decode_markers, encode};

#[test]
fn test_decode_both_yes() {
    let decoded = decode("Muy cariñoso ¿Tengo mis vacunas al día? Sí ¿Estoy castrado/a? Sí");
    assert_eq!(decoded.text, "Muy cariñoso");
    assert!(decoded.vaccinated);
    assert!(decoded.neutered);
}

#[test]
fn test_decode_explicit_no() {
    let decoded = decode("Asustadizo ¿Tengo mis vacunas al día? No ¿Estoy castrado/a? No");
    assert_eq!(decoded.text, "Asustadizo");
    assert!(!decoded.vaccinated);
    assert!(!decoded.neutered);
}

#[test]
fn test_decode_legacy_description_without_markers() {
    let decoded = decode("  Descripción cargada antes de las casillas  ");
    assert_eq!(decoded.text, "Descripción cargada antes de las casillas");
    assert!(!decoded.vaccinated);
    assert!(!decoded.neutered);
}

#[test]
fn test_decode_single_marker_in_any_position() {
    let decoded = decode("¿Estoy castrado/a? Sí Le gusta correr");
    assert_eq!(decoded.text, "Le gusta correr");
    assert!(!decoded.vaccinated);
    assert!(decoded.neutered);
}

#[test]
fn test_decode_strips_repeated_markers() {
    let decoded = decode(
        "Hola ¿Tengo mis vacunas al día? No ¿Tengo mis vacunas al día? Sí ¿Estoy castrado/a? No",
    );
    assert_eq!(decoded.text, "Hola");
    assert!(decoded.vaccinated);
}

/// Known ambiguity: a missing marker and an explicit `No` decode the same,
/// so a record that never recorded vaccination reads as "not vaccinated".
#[test]
fn test_known_ambiguity_absent_marker_equals_no() {
    let absent = decode("Cachorro juguetón");
    let explicit_no = decode(&encode("Cachorro juguetón", false, false));
    assert_eq!(absent, explicit_no);
}

/// Only the exact `Sí` answer flips a flag; lookalike answers do not.
#[test]
fn test_only_exact_yes_counts() {
    assert!(!decode("¿Tengo mis vacunas al día? Si").vaccinated);
    assert!(!decode("¿Tengo mis vacunas al día? sí").vaccinated);
    assert!(!decode("¿Tengo mis vacunas al día?Sí").vaccinated);
    assert!(decode("¿Tengo mis vacunas al día? Sí, todas").vaccinated);
}

#[test]
fn test_unrecognised_answers_are_left_in_text() {
    let decoded = decode("Gatita ¿Tengo mis vacunas al día? Quizás");
    assert_eq!(decoded.text, "Gatita ¿Tengo mis vacunas al día? Quizás");
}

#[test]
fn test_empty_text_encodes_with_leading_space() {
    let encoded = encode("", true, true);
    assert_eq!(encoded, " ¿Tengo mis vacunas al día? Sí ¿Estoy castrado/a? Sí");
    assert_eq!(decode(&encoded).text, "");
}

#[test]
fn test_decode_markers_in_fixed_order() {
    let markers = decode_markers("x ¿Estoy castrado/a? Sí ¿Tengo mis vacunas al día? No");
    assert_eq!(
        markers,
        vec![
            "¿Tengo mis vacunas al día? No".to_string(),
            "¿Estoy castrado/a? Sí".to_string(),
        ]
    );
}
