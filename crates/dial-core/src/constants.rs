// Shared dial tuning constants used by the core and the web frontend.

// Geometry
pub const FULL_TURN_DEGREES: f64 = 360.0;

// Ring layout
pub const DEFAULT_SECTION_COUNT: usize = 12; // one section per note on the circle of fifths
pub const DEFAULT_INITIAL_ROTATION_DEGREES: f64 = 0.0;

// Pitch classes per octave
pub const PITCH_CLASSES: usize = 12;
pub const FIFTH_SEMITONES: usize = 7;

// Reference tuning
pub const A4_MIDI: f32 = 69.0;
pub const A4_HZ: f32 = 440.0;
pub const MIDDLE_C_MIDI: i32 = 60;
