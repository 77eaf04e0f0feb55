//! Snapping and section-index mapping.
//!
//! The ring's labels run clockwise, but a clockwise turn carries the labels
//! counter-clockwise past the fixed top indicator. The emitted index is
//! therefore the complement of the raw section offset.

use crate::constants::FULL_TURN_DEGREES;

#[inline]
pub fn angle_per_section(section_count: usize) -> f64 {
    FULL_TURN_DEGREES / section_count as f64
}

/// Rounds half toward positive infinity, like the browser's `Math.round`.
///
/// `value - floor(value)` is exact, so values just below a half never round up.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Nearest section boundary to `degrees`.
#[inline]
pub fn snap_degrees(degrees: f64, section_count: usize) -> f64 {
    let per = angle_per_section(section_count);
    round_half_up(degrees / per) * per
}

/// Folds any rotation into `[0, 360)`.
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    ((degrees % FULL_TURN_DEGREES) + FULL_TURN_DEGREES) % FULL_TURN_DEGREES
}

/// Section index selected by a snapped rotation, always in `[0, section_count)`.
pub fn section_index(snapped_degrees: f64, section_count: usize) -> usize {
    let n = section_count as i64;
    let normalized = normalize_degrees(snapped_degrees);
    let k = (round_half_up(normalized / angle_per_section(section_count)) as i64).rem_euclid(n);
    ((n - k).rem_euclid(n)) as usize
}
