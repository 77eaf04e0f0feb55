use crate::config::DialOptions;
use crate::constants::{MASK_ID, RING_ID};
use crate::events::{self, DragListeners};
use crate::view;
use anyhow::Context;
use dial_core::{note_for_index, MaskCycle, RotaryConfig, RotaryDial};
use gloo::events::EventListener;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(crate) struct DialState {
    pub dial: RotaryDial,
    pub masks: MaskCycle,
    pub document: web::Document,
    pub region: web::Element,
    pub ring: web::HtmlElement,
    /// Window listeners, present only while the dial is engaged.
    pub drag_listeners: Option<DragListeners>,
}

impl DialState {
    pub fn render(&self) {
        let index = self.dial.active_index();
        view::render_selection(
            &self.document,
            index,
            note_for_index(index),
            self.masks.current(),
        );
    }
}

/// State shared with the event closures, which only hold `Weak` references.
pub(crate) struct DialShared {
    pub state: RefCell<DialState>,
    pending_selection: Rc<Cell<Option<usize>>>,
    on_selection: Box<dyn Fn(usize)>,
}

impl DialShared {
    /// Deliver a selection recorded during a release. Runs with `state`
    /// unborrowed so the callback may query the widget.
    pub fn flush_selection(&self) {
        if let Some(index) = self.pending_selection.take() {
            (self.on_selection)(index);
        }
    }
}

/// A dial bound to a DOM region. Dropping it removes every listener.
pub struct DialWidget {
    shared: Rc<DialShared>,
    _listeners: Vec<EventListener>,
}

impl DialWidget {
    pub fn mount(
        document: &web::Document,
        region: web::Element,
        options: DialOptions,
        on_selection: impl Fn(usize) + 'static,
    ) -> anyhow::Result<Self> {
        let ring = find_ring(&region)?;
        let pending_selection = Rc::new(Cell::new(None));
        let sink = pending_selection.clone();
        let config = RotaryConfig::new(options.section_count)?
            .with_initial_rotation(options.initial_rotation_degrees)
            .on_snap(move |index| sink.set(Some(index)));
        let dial = RotaryDial::new(config);

        view::apply_rotation(&ring, dial.rotation_degrees(), false);
        let state = DialState {
            dial,
            masks: MaskCycle::default(),
            document: document.clone(),
            region: region.clone(),
            ring,
            drag_listeners: None,
        };
        state.render();

        let shared = Rc::new(DialShared {
            state: RefCell::new(state),
            pending_selection,
            on_selection: Box::new(on_selection),
        });

        let mut listeners = events::wire_start_handlers(&region, &shared);
        if let Some(mask_el) = document.get_element_by_id(MASK_ID) {
            listeners.push(events::wire_mask_click(&mask_el, &shared));
        }
        log::info!(
            "[dial] mounted on #{} with {} sections",
            region.id(),
            options.section_count
        );
        Ok(Self {
            shared,
            _listeners: listeners,
        })
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.shared.state.borrow().dial.rotation_degrees()
    }

    pub fn is_engaged(&self) -> bool {
        self.shared.state.borrow().dial.is_engaged()
    }

    pub fn active_index(&self) -> usize {
        self.shared.state.borrow().dial.active_index()
    }

    pub fn cycle_mask(&self) -> &'static str {
        cycle_mask(&self.shared)
    }
}

impl Drop for DialWidget {
    fn drop(&mut self) {
        // Window listeners go now, even if a handler still holds `shared`.
        if let Ok(mut st) = self.shared.state.try_borrow_mut() {
            st.drag_listeners.take();
        }
        log::debug!("[dial] unmounted");
    }
}

pub(crate) fn cycle_mask(shared: &DialShared) -> &'static str {
    let mut st = shared.state.borrow_mut();
    let mask = st.masks.advance();
    st.render();
    mask.name
}

fn find_ring(region: &web::Element) -> anyhow::Result<web::HtmlElement> {
    let ring = region
        .query_selector(&format!("#{RING_ID}"))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .unwrap_or_else(|| region.clone());
    ring.dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("dial ring is not an HTML element"))
        .context("locating the dial ring")
}
