// Host-side tests for pure view formatting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod view {
    include!("../src/view.rs");
}

use dial_core::{note_for_index, DEFAULT_MASKS};
use view::*;

#[test]
fn rotation_transform_formats_degrees() {
    assert_eq!(rotation_transform(30.0), "rotate(30.000deg)");
    assert_eq!(rotation_transform(-44.25), "rotate(-44.250deg)");
    assert_eq!(rotation_transform(750.0), "rotate(750.000deg)");
}

#[test]
fn transition_is_off_while_engaged() {
    assert_eq!(snap_transition(true), "none");
    let rest = snap_transition(false);
    assert!(rest.starts_with("transform "), "{rest}");
    assert!(rest.contains(&format!("{}ms", constants::SNAP_TRANSITION_MS)));
}

#[test]
fn selection_text_names_note_and_mask() {
    assert_eq!(selection_text(note_for_index(0), DEFAULT_MASKS[0]), "C Major");
    assert_eq!(selection_text(note_for_index(11), DEFAULT_MASKS[1]), "F Minor");
}
