use crate::constants::{
    ATTR_ACTIVE_INDEX, ATTR_ENGAGED, ATTR_FREQUENCY, ATTR_LIT, ATTR_MASK, HEADER_ID, MASK_ID,
    SNAP_EASING, SNAP_TRANSITION_MS,
};
use dial_core::{Note, PatternMask};
use web_sys as web;

#[inline]
pub fn rotation_transform(degrees: f64) -> String {
    format!("rotate({degrees:.3}deg)")
}

#[inline]
pub fn snap_transition(engaged: bool) -> String {
    if engaged {
        "none".to_string()
    } else {
        format!("transform {SNAP_TRANSITION_MS}ms {SNAP_EASING}")
    }
}

/// Rotate the ring. The transition is off while dragging so the ring tracks
/// the pointer, and on at rest so the snap animates.
pub fn apply_rotation(ring: &web::HtmlElement, degrees: f64, engaged: bool) {
    let style = ring.style();
    _ = style.set_property("transition", &snap_transition(engaged));
    _ = style.set_property("transform", &rotation_transform(degrees));
    _ = ring.set_attribute(ATTR_ENGAGED, if engaged { "1" } else { "0" });
}

#[inline]
pub fn selection_text(note: Note, mask: PatternMask) -> String {
    format!("{} {}", note.name, mask.name)
}

/// Update the header and overlay to the current selection and mask.
pub fn render_selection(document: &web::Document, index: usize, note: Note, mask: PatternMask) {
    if let Some(el) = document.get_element_by_id(HEADER_ID) {
        el.set_text_content(Some(&selection_text(note, mask)));
        _ = el.set_attribute(ATTR_ACTIVE_INDEX, &index.to_string());
        _ = el.set_attribute(ATTR_FREQUENCY, &format!("{:.2}", note.frequency_hz()));
    }
    if let Some(el) = document.get_element_by_id(MASK_ID) {
        _ = el.set_attribute(ATTR_MASK, &mask.name.to_lowercase());
        let lit = mask.highlights(note.pitch_class);
        let positions: Vec<String> = lit
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| i.to_string())
            .collect();
        _ = el.set_attribute(ATTR_LIT, &positions.join(" "));
    }
}
