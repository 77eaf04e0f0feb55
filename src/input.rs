use dial_core::Bounds;
use gloo::events::{EventListenerOptions, EventListenerPhase};
use glam::DVec2;
use web_sys as web;

// Start events bind to the region; move/end events bind to the window while engaged.
pub const START_EVENTS: [&str; 2] = ["mousedown", "touchstart"];
pub const MOVE_EVENTS: [&str; 2] = ["mousemove", "touchmove"];
pub const END_EVENTS: [&str; 3] = ["mouseup", "touchend", "touchcancel"];

pub const PRIMARY_BUTTON: i16 = 0;

/// Events whose default action is suppressed once the dial handles them:
/// text selection on `mousedown`, page scroll and the emulated mouse events
/// that follow a touch.
#[inline]
pub fn cancels_default(kind: &str) -> bool {
    matches!(kind, "mousedown" | "touchstart" | "touchmove")
}

/// Listeners that cancel defaults must not be passive.
#[inline]
pub fn listener_options(kind: &str) -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: !cancels_default(kind),
    }
}

#[inline]
pub fn is_primary_button(button: i16) -> bool {
    button == PRIMARY_BUTTON
}

/// Anything that can report a pointer position in client pixels.
///
/// Mouse and touch events go through this one capability before reaching the
/// geometry code.
pub trait PointerInput {
    fn pointer_position(&self) -> Option<DVec2>;
}

impl PointerInput for web::MouseEvent {
    #[inline]
    fn pointer_position(&self) -> Option<DVec2> {
        Some(DVec2::new(self.client_x() as f64, self.client_y() as f64))
    }
}

impl PointerInput for web::TouchEvent {
    // Only the first active touch is tracked.
    #[inline]
    fn pointer_position(&self) -> Option<DVec2> {
        let touch = self.touches().item(0)?;
        Some(DVec2::new(touch.client_x() as f64, touch.client_y() as f64))
    }
}

/// Normalize a raw DOM event, trying mouse first, then touch.
pub fn pointer_from_event(ev: &web::Event) -> Option<DVec2> {
    use wasm_bindgen::JsCast;
    if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
        return mouse.pointer_position();
    }
    ev.dyn_ref::<web::TouchEvent>()
        .and_then(PointerInput::pointer_position)
}

/// Like [`pointer_from_event`], but a mouse press only engages with the
/// primary button.
pub fn start_pointer_from_event(ev: &web::Event) -> Option<DVec2> {
    use wasm_bindgen::JsCast;
    if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
        if !is_primary_button(mouse.button()) {
            return None;
        }
    }
    pointer_from_event(ev)
}

/// Measure the region. A detached region has no meaningful rectangle.
#[inline]
pub fn region_bounds(region: &web::Element) -> Option<Bounds> {
    if !region.is_connected() {
        return None;
    }
    let rect = region.get_bounding_client_rect();
    Some(Bounds::new(rect.left(), rect.top(), rect.width(), rect.height()))
}
