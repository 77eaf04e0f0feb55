//! Pointer-to-angle geometry.
//!
//! Coordinates are client-space pixels (x right, y down), so a positive angle
//! runs clockwise on screen. Nothing here touches platform APIs; the web
//! frontend measures the region and hands the result in as [`Bounds`].

use glam::DVec2;

/// Measured rectangle of the interactive region in client pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Angle in degrees of the vector from the region center to `pointer`.
///
/// Returns `0.0` when the region has not been measured yet.
#[inline]
pub fn pointer_angle_degrees(pointer: DVec2, bounds: Option<Bounds>) -> f64 {
    let Some(bounds) = bounds else {
        log::warn!("[geometry] region not measured, using angle 0");
        return 0.0;
    };
    let delta = pointer - bounds.center();
    delta.y.atan2(delta.x).to_degrees()
}
