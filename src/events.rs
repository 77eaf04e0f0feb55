use crate::input::{self, END_EVENTS, MOVE_EVENTS, START_EVENTS};
use crate::view;
use crate::widget::{self, DialShared};
use dial_core::DialInput;
use gloo::events::EventListener;
use glam::DVec2;
use std::rc::{Rc, Weak};
use web_sys as web;

/// Window-level move/end listeners held for the duration of one drag.
///
/// Dropping the guard removes all of them, so every exit from the engaged
/// state (release, re-mount, widget teardown) unsubscribes.
pub(crate) struct DragListeners {
    _listeners: Vec<EventListener>,
}

impl DragListeners {
    fn attach(shared: Weak<DialShared>) -> Option<Self> {
        let window = web::window()?;
        let mut listeners = Vec::with_capacity(MOVE_EVENTS.len() + END_EVENTS.len());
        for kind in MOVE_EVENTS {
            let shared = shared.clone();
            listeners.push(EventListener::new_with_options(
                &window,
                kind,
                input::listener_options(kind),
                move |ev: &web::Event| {
                    let Some(shared) = shared.upgrade() else {
                        return;
                    };
                    if let Some(pointer) = input::pointer_from_event(ev) {
                        on_move(&shared, pointer);
                        if input::cancels_default(kind) {
                            ev.prevent_default();
                        }
                    }
                },
            ));
        }
        for kind in END_EVENTS {
            let shared = shared.clone();
            listeners.push(EventListener::new_with_options(
                &window,
                kind,
                input::listener_options(kind),
                move |_ev: &web::Event| {
                    if let Some(shared) = shared.upgrade() {
                        on_end(&shared);
                    }
                },
            ));
        }
        log::debug!("[events] window drag listeners attached");
        Some(Self {
            _listeners: listeners,
        })
    }
}

impl Drop for DragListeners {
    fn drop(&mut self) {
        log::debug!("[events] window drag listeners removed");
    }
}

/// Bind mouse and touch start events to the region for the widget's lifetime.
pub(crate) fn wire_start_handlers(
    region: &web::Element,
    shared: &Rc<DialShared>,
) -> Vec<EventListener> {
    START_EVENTS
        .into_iter()
        .map(|kind| {
            let weak = Rc::downgrade(shared);
            EventListener::new_with_options(
                region,
                kind,
                input::listener_options(kind),
                move |ev: &web::Event| {
                    let Some(shared) = weak.upgrade() else {
                        return;
                    };
                    if let Some(pointer) = input::start_pointer_from_event(ev) {
                        on_start(&shared, pointer);
                        // Suppresses the emulated mouse events that follow a touch.
                        ev.prevent_default();
                    }
                },
            )
        })
        .collect()
}

pub(crate) fn wire_mask_click(mask_el: &web::Element, shared: &Rc<DialShared>) -> EventListener {
    let weak = Rc::downgrade(shared);
    EventListener::new(mask_el, "click", move |_ev: &web::Event| {
        if let Some(shared) = weak.upgrade() {
            let name = widget::cycle_mask(&shared);
            log::info!("[click] mask -> {}", name);
        }
    })
}

pub(crate) fn on_start(shared: &Rc<DialShared>, pointer: DVec2) {
    let mut st = shared.state.borrow_mut();
    let bounds = input::region_bounds(&st.region);
    st.dial.handle(DialInput::Start(pointer), bounds);
    if st.drag_listeners.is_none() {
        st.drag_listeners = DragListeners::attach(Rc::downgrade(shared));
    }
    view::apply_rotation(&st.ring, st.dial.rotation_degrees(), true);
}

pub(crate) fn on_move(shared: &DialShared, pointer: DVec2) {
    let mut st = shared.state.borrow_mut();
    let bounds = input::region_bounds(&st.region);
    if !st.dial.is_engaged() {
        return;
    }
    st.dial.handle(DialInput::Move(pointer), bounds);
    view::apply_rotation(&st.ring, st.dial.rotation_degrees(), true);
}

pub(crate) fn on_end(shared: &DialShared) {
    let released = {
        let mut st = shared.state.borrow_mut();
        let bounds = input::region_bounds(&st.region);
        if let Some(snap) = st.dial.handle(DialInput::End, bounds) {
            view::apply_rotation(&st.ring, snap.degrees, false);
            st.render();
        }
        st.drag_listeners.take()
    };
    drop(released);
    shared.flush_selection();
}
