// Host-side tests for event kinds and listener options of the binding layer.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn touch_cancel_ends_a_drag_like_touch_end() {
    assert!(END_EVENTS.contains(&"touchcancel"));
    assert!(END_EVENTS.contains(&"touchend"));
    assert!(END_EVENTS.contains(&"mouseup"));
}

#[test]
fn start_and_move_cover_mouse_and_touch() {
    assert_eq!(START_EVENTS, ["mousedown", "touchstart"]);
    assert_eq!(MOVE_EVENTS, ["mousemove", "touchmove"]);
    for kind in START_EVENTS.iter().chain(&MOVE_EVENTS) {
        assert!(!END_EVENTS.contains(kind), "{kind}");
    }
}

#[test]
fn touch_start_and_move_cancel_their_default() {
    assert!(cancels_default("touchstart"));
    assert!(cancels_default("touchmove"));
    assert!(cancels_default("mousedown"));
    for kind in ["mousemove", "mouseup", "touchend", "touchcancel", "click"] {
        assert!(!cancels_default(kind), "{kind}");
    }
}

#[test]
fn listeners_that_cancel_are_not_passive() {
    for kind in START_EVENTS.iter().chain(&MOVE_EVENTS).chain(&END_EVENTS) {
        let options = listener_options(kind);
        assert_eq!(options.passive, !cancels_default(kind), "{kind}");
    }
    assert!(!listener_options("touchstart").passive);
    assert!(!listener_options("touchmove").passive);
    assert!(listener_options("mouseup").passive);
}

#[test]
fn only_the_primary_button_engages() {
    assert!(is_primary_button(PRIMARY_BUTTON));
    assert!(is_primary_button(0));
    assert!(!is_primary_button(1));
    assert!(!is_primary_button(2));
    assert!(!is_primary_button(-1));
}
