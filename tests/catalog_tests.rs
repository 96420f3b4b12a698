//! Catalog decoding integration tests.
//!
//! These tests decode a Scryfall-shaped dataset and verify:
//! - Required and optional field handling
//! - Rejection of malformed or incomplete data
//! - Encode/decode round trips, including a `proptest` property

use proptest::prelude::*;

use mtg_catalog::cards::{Card, CardCatalog, CardId, ImageKind, ImageUris, Legalities};
use mtg_catalog::error::DecodeError;

const SAMPLE: &[u8] = include_bytes!("fixtures/sample_cards.json");

// =============================================================================
// Decoding
// =============================================================================

/// Test that the sample dataset decodes with every card in file order.
#[test]
fn test_decode_sample_dataset() {
    let catalog = CardCatalog::decode(SAMPLE).expect("sample should decode");

    let names: Vec<_> = catalog.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Sol Ring", "Lightning Bolt", "Forest", "Æther Vial"]);

    assert_eq!(catalog.metadata().object.as_deref(), Some("list"));
    assert_eq!(catalog.metadata().total_cards, Some(4));
    assert_eq!(catalog.metadata().has_more, Some(false));
}

/// Test that optional fields resolve to their absent values.
#[test]
fn test_decode_optional_fields() {
    let catalog = CardCatalog::decode(SAMPLE).unwrap();

    let forest = catalog
        .get(&CardId::new("77c6fa74-5543-42ac-9ead-0e890b188e99"))
        .unwrap();
    assert_eq!(forest.collector_number, None);
    assert_eq!(forest.image_uris, None);
    // Empty legalities map is treated as absent.
    assert_eq!(forest.legalities, None);

    let vial = catalog
        .get(&CardId::new("5d1e2a44-8f3c-4b8e-b5a3-7c4d2f1e0a9b"))
        .unwrap();
    assert_eq!(vial.image_uris, None);
    assert_eq!(vial.collector_number.as_deref(), Some("41a"));

    let bolt = catalog
        .get(&CardId::new("1f0d3e9b-9a8e-4f0a-8a62-0b8c8cbbd0a2"))
        .unwrap();
    assert!(bolt.image_url(ImageKind::Large).is_some());
    assert!(bolt.image_url(ImageKind::ArtCrop).is_none());
}

/// Test that image renditions the model doesn't know about are ignored.
#[test]
fn test_decode_ignores_extra_fields() {
    let catalog = CardCatalog::decode(SAMPLE).unwrap();
    let sol_ring = catalog.iter().next().unwrap();

    let uris = sol_ring.image_uris.as_ref().unwrap();
    assert_eq!(uris.available().len(), 4);
    assert_eq!(sol_ring.sorted_legalities().len(), 5);
}

/// Test that missing header fields are tolerated.
#[test]
fn test_decode_without_header() {
    let json = br#"{"data":[{"id":"x","name":"Island","type_line":"Basic Land","oracle_text":""}]}"#;
    let catalog = CardCatalog::decode(json).unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.metadata().total_cards, None);
}

// =============================================================================
// Failures
// =============================================================================

/// Test that malformed bytes fail with a JSON error.
#[test]
fn test_decode_malformed() {
    let inputs: [&[u8]; 4] = [b"", b"{", b"[1, 2, 3]", b"\xff\xfe"];
    for bytes in inputs {
        let result = CardCatalog::decode(bytes);
        assert!(matches!(result, Err(DecodeError::Json(_))), "{:?}", bytes);
    }
}

/// Test that each required field is enforced.
#[test]
fn test_decode_missing_required_fields() {
    let full = serde_json::json!({
        "id": "x", "name": "Island", "type_line": "Basic Land", "oracle_text": ""
    });

    for field in ["id", "name", "type_line", "oracle_text"] {
        let mut card = full.clone();
        card.as_object_mut().unwrap().remove(field);
        let bytes = serde_json::to_vec(&serde_json::json!({ "data": [card] })).unwrap();

        let result = CardCatalog::decode(&bytes);
        assert!(matches!(result, Err(DecodeError::Json(_))), "missing {field} should fail");
    }
}

/// Test that a required field with the wrong type fails.
#[test]
fn test_decode_wrong_type() {
    let json = br#"{"data":[{"id":"x","name":42,"type_line":"","oracle_text":""}]}"#;
    assert!(matches!(CardCatalog::decode(json), Err(DecodeError::Json(_))));
}

/// Test that a repeated id is rejected.
#[test]
fn test_decode_duplicate_id() {
    let json = br#"{"data":[
        {"id":"x","name":"Island","type_line":"","oracle_text":""},
        {"id":"x","name":"Swamp","type_line":"","oracle_text":""}
    ]}"#;

    match CardCatalog::decode(json) {
        Err(DecodeError::DuplicateId { id }) => assert_eq!(id, CardId::new("x")),
        other => panic!("expected duplicate id error, got {:?}", other),
    }
}

/// Test that an empty name is rejected.
#[test]
fn test_decode_empty_name() {
    let json = br#"{"data":[{"id":"x","name":"","type_line":"","oracle_text":""}]}"#;
    assert!(matches!(CardCatalog::decode(json), Err(DecodeError::EmptyName { .. })));
}

/// Test that an unusable dataset becomes an empty catalog.
#[test]
fn test_decode_or_empty() {
    assert!(CardCatalog::decode_or_empty(b"{\"data\": 5}").is_empty());
    assert_eq!(CardCatalog::decode_or_empty(SAMPLE).len(), 4);
}

/// Test error messages name the offending card.
#[test]
fn test_error_display() {
    let err = DecodeError::DuplicateId { id: CardId::new("abc") };
    assert_eq!(err.to_string(), "duplicate card id abc");
}

// =============================================================================
// Round trip
// =============================================================================

/// Test that encoding then decoding yields an equal catalog.
#[test]
fn test_round_trip_sample() {
    let catalog = CardCatalog::decode(SAMPLE).unwrap();
    let bytes = catalog.encode().unwrap();
    let decoded = CardCatalog::decode(&bytes).unwrap();

    assert_eq!(catalog, decoded);
}

/// Test that optional-field presence survives a round trip.
#[test]
fn test_round_trip_optional_presence() {
    let catalog = CardCatalog::from_cards(vec![
        Card::new(CardId::new("1"), "Bare", "", ""),
        Card::new(CardId::new("2"), "Dressed", "Creature", "Flying")
            .with_collector_number("007")
            .with_image_uris(ImageUris::default().with(ImageKind::Normal, "https://n"))
            .with_legality("modern", "legal"),
    ])
    .unwrap();

    let decoded = CardCatalog::decode(&catalog.encode().unwrap()).unwrap();
    assert_eq!(catalog, decoded);

    let bare = decoded.get(&CardId::new("1")).unwrap();
    assert!(bare.collector_number.is_none());
    assert!(bare.image_uris.is_none());
    assert!(bare.legalities.is_none());

    let dressed = decoded.get(&CardId::new("2")).unwrap();
    assert_eq!(dressed.image_url(ImageKind::Normal), Some("https://n"));
    assert_eq!(dressed.image_url(ImageKind::Small), None);
}

fn arb_image_uris() -> impl Strategy<Value = ImageUris> {
    let url = || proptest::option::of("https://img/[a-z]{1,6}");
    (url(), url(), url(), url()).prop_map(|(small, normal, large, art_crop)| ImageUris {
        small,
        normal,
        large,
        art_crop,
    })
}

fn arb_legalities() -> impl Strategy<Value = Legalities> {
    proptest::collection::vec(
        ("[a-z]{1,8}", prop_oneof![Just("legal"), Just("not_legal"), Just("banned"), Just("")]),
        0..4,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(format, status)| (format, status.to_string()))
            .collect()
    })
}

fn arb_cards() -> impl Strategy<Value = Vec<Card>> {
    proptest::collection::vec(
        (
            "[A-Za-z ]{1,8}",
            "[A-Za-z ]{0,8}",
            proptest::option::of("[0-9a-z★]{0,4}"),
            proptest::option::of(arb_image_uris()),
            // Empty maps included on purpose: they must come back as absent.
            proptest::option::of(arb_legalities()),
        ),
        0..12,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (name, text, number, image_uris, legalities))| Card {
                id: CardId::new(format!("id-{i}")),
                name,
                type_line: text.clone(),
                oracle_text: text,
                collector_number: number,
                image_uris,
                legalities,
            })
            .collect()
    })
}

proptest! {
    /// Any catalog survives encode then decode unchanged.
    #[test]
    fn prop_encode_decode_round_trip(cards in arb_cards()) {
        let catalog = CardCatalog::from_cards(cards).unwrap();
        let decoded = CardCatalog::decode(&catalog.encode().unwrap()).unwrap();

        prop_assert_eq!(&catalog, &decoded);
        for card in catalog.iter() {
            prop_assert!(card.legalities.as_ref().map_or(true, |map| !map.is_empty()));
        }
    }
}
