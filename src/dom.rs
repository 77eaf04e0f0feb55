use crate::config::DialOptions;
use crate::constants::{ATTR_INITIAL_ROTATION, ATTR_SECTIONS};
use anyhow::Context;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .with_context(|| format!("missing #{id}"))
}

/// Read mount options from the region's data attributes.
pub fn read_options(region: &web::Element) -> anyhow::Result<DialOptions> {
    let sections = region.get_attribute(ATTR_SECTIONS);
    let initial = region.get_attribute(ATTR_INITIAL_ROTATION);
    DialOptions::from_attributes(sections.as_deref(), initial.as_deref())
        .with_context(|| format!("reading dial options from #{}", region.id()))
}
