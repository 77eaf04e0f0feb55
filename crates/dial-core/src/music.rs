use crate::constants::{A4_HZ, A4_MIDI, FIFTH_SEMITONES, MIDDLE_C_MIDI, PITCH_CLASSES};

/// A labeled position on the note ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Note {
    pub name: &'static str,
    pub pitch_class: u8,
}

impl Note {
    pub const fn new(name: &'static str, pitch_class: u8) -> Self {
        Self { name, pitch_class }
    }

    /// Frequency of this note in the octave starting at middle C.
    pub fn frequency_hz(&self) -> f32 {
        midi_to_hz((MIDDLE_C_MIDI + self.pitch_class as i32) as f32)
    }
}

/// The twelve notes in fifths order, starting at C.
pub const CIRCLE_OF_FIFTHS: [Note; 12] = [
    Note::new("C", 0),
    Note::new("G", 7),
    Note::new("D", 2),
    Note::new("A", 9),
    Note::new("E", 4),
    Note::new("B", 11),
    Note::new("F#", 6),
    Note::new("Db", 1),
    Note::new("Ab", 8),
    Note::new("Eb", 3),
    Note::new("Bb", 10),
    Note::new("F", 5),
];

/// Note under the indicator for a selected section (wraps).
#[inline]
pub fn note_for_index(index: usize) -> Note {
    CIRCLE_OF_FIFTHS[index % CIRCLE_OF_FIFTHS.len()]
}

/// Ring position of a pitch class on the circle of fifths.
#[inline]
pub fn fifths_position(pitch_class: u8) -> usize {
    (pitch_class as usize * FIFTH_SEMITONES) % PITCH_CLASSES
}

pub fn midi_to_hz(midi: f32) -> f32 {
    A4_HZ * (2.0_f32).powf((midi - A4_MIDI) / 12.0)
}

/// Semitone sets (relative to the root) shown by the overlay.
pub const MAJOR: &[u8] = &[0, 2, 4, 5, 7, 9, 11];
pub const NATURAL_MINOR: &[u8] = &[0, 2, 3, 5, 7, 8, 10];
pub const MAJOR_PENTATONIC: &[u8] = &[0, 2, 4, 7, 9];
pub const MAJOR_TRIAD: &[u8] = &[0, 4, 7];

/// An overlay that lights a subset of the ring relative to the selected root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternMask {
    pub name: &'static str,
    pub intervals: &'static [u8],
}

impl PatternMask {
    pub const fn new(name: &'static str, intervals: &'static [u8]) -> Self {
        Self { name, intervals }
    }

    /// Which ring positions (fifths order) the mask lights for `root_pitch_class`.
    pub fn highlights(&self, root_pitch_class: u8) -> [bool; 12] {
        let mut lit = [false; 12];
        for interval in self.intervals {
            let pc = (root_pitch_class as usize + *interval as usize) % PITCH_CLASSES;
            lit[fifths_position(pc as u8)] = true;
        }
        lit
    }
}

pub const DEFAULT_MASKS: [PatternMask; 4] = [
    PatternMask::new("Major", MAJOR),
    PatternMask::new("Minor", NATURAL_MINOR),
    PatternMask::new("Pentatonic", MAJOR_PENTATONIC),
    PatternMask::new("Triad", MAJOR_TRIAD),
];

/// Cycles through a fixed list of masks.
#[derive(Clone, Debug)]
pub struct MaskCycle {
    masks: Vec<PatternMask>,
    current: usize,
}

impl Default for MaskCycle {
    fn default() -> Self {
        Self::new(DEFAULT_MASKS.to_vec())
    }
}

impl MaskCycle {
    /// An empty list falls back to the default masks.
    pub fn new(masks: Vec<PatternMask>) -> Self {
        let masks = if masks.is_empty() {
            DEFAULT_MASKS.to_vec()
        } else {
            masks
        };
        Self { masks, current: 0 }
    }

    pub fn current(&self) -> PatternMask {
        self.masks[self.current]
    }

    pub fn position(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    pub fn advance(&mut self) -> PatternMask {
        self.current = (self.current + 1) % self.masks.len();
        self.current()
    }
}
