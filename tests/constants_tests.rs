// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_distinct() {
    let ids = [REGION_ID, RING_ID, HEADER_ID, MASK_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.starts_with('#'), "ids are bare, got {a}");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn attributes_are_data_attributes() {
    for attr in [
        ATTR_SECTIONS,
        ATTR_INITIAL_ROTATION,
        ATTR_ENGAGED,
        ATTR_MASK,
        ATTR_ACTIVE_INDEX,
        ATTR_FREQUENCY,
        ATTR_LIT,
    ] {
        assert!(attr.starts_with("data-"), "{attr}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn snap_transition_is_reasonable() {
    assert!(SNAP_TRANSITION_MS > 0);
    assert!(SNAP_TRANSITION_MS <= 1000);
    assert!(!SNAP_EASING.is_empty());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_constants_are_consistent() {
    assert_eq!(dial_core::FULL_TURN_DEGREES, 360.0);
    assert!(dial_core::DEFAULT_SECTION_COUNT > 0);
    assert_eq!(dial_core::DEFAULT_SECTION_COUNT, dial_core::CIRCLE_OF_FIFTHS.len());
    assert_eq!(dial_core::PITCH_CLASSES, 12);
}
