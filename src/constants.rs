/// DOM contract and presentation tuning for the dial widget.
///
/// Element ids and attribute names live here so the host page and the
/// binding code agree on one set of names.
// Element ids
pub const REGION_ID: &str = "dial-region";
pub const RING_ID: &str = "dial-ring";
pub const HEADER_ID: &str = "dial-header";
pub const MASK_ID: &str = "dial-mask";

// Region data attributes read at mount time
pub const ATTR_SECTIONS: &str = "data-sections";
pub const ATTR_INITIAL_ROTATION: &str = "data-initial-rotation";

// Attributes written by the view
pub const ATTR_ENGAGED: &str = "data-engaged";
pub const ATTR_MASK: &str = "data-mask";
pub const ATTR_ACTIVE_INDEX: &str = "data-active-index";
pub const ATTR_FREQUENCY: &str = "data-frequency";
pub const ATTR_LIT: &str = "data-lit"; // ring positions lit by the current mask

// Snap interpolation applied while the dial is at rest
pub const SNAP_TRANSITION_MS: u32 = 300;
pub const SNAP_EASING: &str = "cubic-bezier(0.25, 0.8, 0.25, 1)";
