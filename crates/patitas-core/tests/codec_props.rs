// Rust guideline compliant 2026-10-16

//! Property-based tests for the description codec.
//!
//! The marker format has no schema behind it on the server side, so these
//! properties are the only guard against drift.

use patitas_core::codec::{decode, encode, NEUTERED_MARKER, VACCINATED_MARKER};
use proptest::prelude::*;

/// Generates free text that cannot contain a marker phrase (no `¿`).
fn arb_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9áéíóúñÁÉÍÓÚÑ .,;:!¡()\n-]{0,120}").unwrap()
}

proptest! {
    /// Decoding an encoded description returns the trimmed text and both flags.
    #[test]
    fn prop_round_trip(text in arb_text(), vaccinated in any::<bool>(), neutered in any::<bool>()) {
        let decoded = decode(&encode(&text, vaccinated, neutered));
        prop_assert_eq!(decoded.text, text.trim());
        prop_assert_eq!(decoded.vaccinated, vaccinated);
        prop_assert_eq!(decoded.neutered, neutered);
    }

    /// Encoding always writes each marker exactly once.
    #[test]
    fn prop_encode_writes_each_marker_once(text in arb_text(), vaccinated in any::<bool>(), neutered in any::<bool>()) {
        let encoded = encode(&text, vaccinated, neutered);
        prop_assert_eq!(encoded.matches(VACCINATED_MARKER).count(), 1);
        prop_assert_eq!(encoded.matches(NEUTERED_MARKER).count(), 1);
        let vaccinated_at = encoded.find(VACCINATED_MARKER).unwrap();
        let neutered_at = encoded.find(NEUTERED_MARKER).unwrap();
        prop_assert!(vaccinated_at < neutered_at);
    }

    /// Text without markers decodes both flags as false and is only trimmed.
    #[test]
    fn prop_marker_free_text_decodes_false(text in arb_text()) {
        let decoded = decode(&text);
        prop_assert!(!decoded.vaccinated);
        prop_assert!(!decoded.neutered);
        prop_assert_eq!(decoded.text, text.trim());
    }

    /// Re-encoding a decoded description is stable.
    #[test]
    fn prop_decode_encode_is_idempotent(text in arb_text(), vaccinated in any::<bool>(), neutered in any::<bool>()) {
        let first = encode(&text, vaccinated, neutered);
        let decoded = decode(&first);
        let second = encode(&decoded.text, decoded.vaccinated, decoded.neutered);
        prop_assert_eq!(decode(&second), decoded);
    }
}
