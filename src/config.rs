use anyhow::{bail, Context};
use dial_core::{DEFAULT_INITIAL_ROTATION_DEGREES, DEFAULT_SECTION_COUNT};

/// Mount-time options, usually read from the region's data attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialOptions {
    pub section_count: usize,
    pub initial_rotation_degrees: f64,
}

impl Default for DialOptions {
    fn default() -> Self {
        Self {
            section_count: DEFAULT_SECTION_COUNT,
            initial_rotation_degrees: DEFAULT_INITIAL_ROTATION_DEGREES,
        }
    }
}

impl DialOptions {
    /// Missing attributes fall back to defaults; present ones must parse.
    pub fn from_attributes(
        sections: Option<&str>,
        initial_rotation: Option<&str>,
    ) -> anyhow::Result<Self> {
        let mut opts = Self::default();
        if let Some(raw) = sections.map(str::trim).filter(|s| !s.is_empty()) {
            opts.section_count = raw
                .parse::<usize>()
                .with_context(|| format!("invalid section count {raw:?}"))?;
            if opts.section_count == 0 {
                bail!("section count must be greater than zero");
            }
        }
        if let Some(raw) = initial_rotation.map(str::trim).filter(|s| !s.is_empty()) {
            let degrees = raw
                .parse::<f64>()
                .with_context(|| format!("invalid initial rotation {raw:?}"))?;
            if !degrees.is_finite() {
                bail!("initial rotation must be finite, got {raw:?}");
            }
            opts.initial_rotation_degrees = degrees;
        }
        Ok(opts)
    }
}
