//! Drag state machine for the rotary dial.
//!
//! A [`RotaryDial`] is `Idle` until a start event engages it. While engaged,
//! each move recomputes the rotation relative to the angle captured at
//! engagement, so successive drags compose instead of resetting. Releasing
//! snaps to the nearest section and always reports the selected index, even
//! when it did not change.

use crate::constants::DEFAULT_INITIAL_ROTATION_DEGREES;
use crate::error::DialError;
use crate::geometry::{pointer_angle_degrees, Bounds};
use crate::selection::{section_index, snap_degrees};
use glam::DVec2;
use std::fmt;

/// Callback invoked with the selected section index on every release.
pub type SnapCallback = Box<dyn FnMut(usize)>;

/// Immutable dial configuration.
pub struct RotaryConfig {
    section_count: usize,
    initial_rotation_degrees: f64,
    on_snap: SnapCallback,
}

impl RotaryConfig {
    pub fn new(section_count: usize) -> Result<Self, DialError> {
        if section_count == 0 {
            return Err(DialError::NoSections);
        }
        Ok(Self {
            section_count,
            initial_rotation_degrees: DEFAULT_INITIAL_ROTATION_DEGREES,
            on_snap: Box::new(|_| {}),
        })
    }

    pub fn with_initial_rotation(mut self, degrees: f64) -> Self {
        self.initial_rotation_degrees = degrees;
        self
    }

    pub fn on_snap(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_snap = Box::new(callback);
        self
    }

    pub fn section_count(&self) -> usize {
        self.section_count
    }

    pub fn initial_rotation_degrees(&self) -> f64 {
        self.initial_rotation_degrees
    }
}

impl fmt::Debug for RotaryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotaryConfig")
            .field("section_count", &self.section_count)
            .field("initial_rotation_degrees", &self.initial_rotation_degrees)
            .finish_non_exhaustive()
    }
}

/// Bookkeeping that only exists while a drag is in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer angle minus rotation at engagement.
    pub reference_angle_degrees: f64,
}

/// Render-relevant rotation state. `current_degrees` is unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationState {
    pub current_degrees: f64,
    pub is_engaged: bool,
}

/// Result of releasing a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snap {
    pub degrees: f64,
    pub index: usize,
}

/// Normalized input delivered by the event layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DialInput {
    Start(DVec2),
    Move(DVec2),
    End,
}

pub struct RotaryDial {
    config: RotaryConfig,
    rotation: RotationState,
    session: Option<DragSession>,
    active_index: usize,
}

impl RotaryDial {
    pub fn new(config: RotaryConfig) -> Self {
        let rotation = RotationState {
            current_degrees: config.initial_rotation_degrees,
            is_engaged: false,
        };
        let active_index = section_index(
            snap_degrees(config.initial_rotation_degrees, config.section_count),
            config.section_count,
        );
        Self {
            config,
            rotation,
            session: None,
            active_index,
        }
    }

    pub fn section_count(&self) -> usize {
        self.config.section_count
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.current_degrees
    }

    pub fn is_engaged(&self) -> bool {
        self.rotation.is_engaged
    }

    /// Index emitted by the most recent release.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    /// Engage the dial at `pointer`. Re-engaging overwrites the reference angle.
    pub fn begin(&mut self, pointer: DVec2, bounds: Option<Bounds>) {
        let angle = pointer_angle_degrees(pointer, bounds);
        let session = DragSession {
            reference_angle_degrees: angle - self.rotation.current_degrees,
        };
        self.session = Some(session);
        self.rotation.is_engaged = true;
        log::debug!(
            "[dial] engage at {:.2}deg (reference {:.2}deg)",
            angle,
            session.reference_angle_degrees
        );
    }

    /// Follow the pointer while engaged; returns the new rotation.
    pub fn drag(&mut self, pointer: DVec2, bounds: Option<Bounds>) -> Option<f64> {
        let session = self.session?;
        let angle = pointer_angle_degrees(pointer, bounds);
        self.rotation.current_degrees = angle - session.reference_angle_degrees;
        Some(self.rotation.current_degrees)
    }

    /// Disengage, snap to the nearest section and emit its index.
    pub fn release(&mut self) -> Option<Snap> {
        self.session.take()?;
        let n = self.config.section_count;
        let degrees = snap_degrees(self.rotation.current_degrees, n);
        self.rotation.current_degrees = degrees;
        self.rotation.is_engaged = false;
        let index = section_index(degrees, n);
        self.active_index = index;
        log::info!("[dial] snap to {:.2}deg -> section {}", degrees, index);
        (self.config.on_snap)(index);
        Some(Snap { degrees, index })
    }

    /// Dispatch a normalized input. Returns the snap produced by an `End`.
    pub fn handle(&mut self, input: DialInput, bounds: Option<Bounds>) -> Option<Snap> {
        match input {
            DialInput::Start(pointer) => {
                self.begin(pointer, bounds);
                None
            }
            DialInput::Move(pointer) => {
                self.drag(pointer, bounds);
                None
            }
            DialInput::End => self.release(),
        }
    }
}

impl fmt::Debug for RotaryDial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotaryDial")
            .field("config", &self.config)
            .field("rotation", &self.rotation)
            .field("session", &self.session)
            .field("active_index", &self.active_index)
            .finish()
    }
}
