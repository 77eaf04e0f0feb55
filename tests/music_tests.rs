// Host-side tests for the note ring and pattern masks.

use dial_core::*;

#[test]
fn circle_of_fifths_steps_by_seven_semitones() {
    for (i, note) in CIRCLE_OF_FIFTHS.iter().enumerate() {
        assert_eq!(note.pitch_class as usize, (i * 7) % 12, "at {}", note.name);
    }
    assert_eq!(CIRCLE_OF_FIFTHS[0].name, "C");
    assert_eq!(CIRCLE_OF_FIFTHS[1].name, "G");
    assert_eq!(CIRCLE_OF_FIFTHS[11].name, "F");
}

#[test]
fn circle_of_fifths_covers_every_pitch_class_once() {
    let mut seen = [false; 12];
    for note in CIRCLE_OF_FIFTHS {
        assert!(!seen[note.pitch_class as usize], "duplicate {}", note.name);
        seen[note.pitch_class as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn note_for_index_wraps() {
    assert_eq!(note_for_index(0).name, "C");
    assert_eq!(note_for_index(11).name, "F");
    assert_eq!(note_for_index(12).name, "C");
    assert_eq!(note_for_index(25).name, "G");
}

#[test]
fn fifths_position_inverts_the_ring() {
    for (i, note) in CIRCLE_OF_FIFTHS.iter().enumerate() {
        assert_eq!(fifths_position(note.pitch_class), i);
    }
}

#[test]
fn clockwise_drag_from_c_lands_on_f() {
    // One section clockwise selects the previous ring element.
    let index = section_index(snap_degrees(30.0, 12), 12);
    assert_eq!(note_for_index(index).name, "F");
    let index = section_index(snap_degrees(-30.0, 12), 12);
    assert_eq!(note_for_index(index).name, "G");
}

#[test]
fn major_mask_lights_seven_adjacent_positions() {
    let mask = DEFAULT_MASKS[0];
    assert_eq!(mask.name, "Major");
    // C major on the circle: F C G D A E B
    let lit = mask.highlights(0);
    let expected = [0, 1, 2, 3, 4, 5, 11];
    for (pos, on) in lit.iter().enumerate() {
        assert_eq!(*on, expected.contains(&pos), "position {pos}");
    }
}

#[test]
fn mask_highlights_follow_the_root() {
    let triad = PatternMask {
        name: "Triad",
        intervals: MAJOR_TRIAD,
    };
    // G major triad: G B D
    let lit = triad.highlights(7);
    let on: Vec<usize> = lit
        .iter()
        .enumerate()
        .filter(|(_, v)| **v)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(on, vec![1, 2, 5]);
}

#[test]
fn mask_cycle_advances_and_wraps() {
    let mut cycle = MaskCycle::default();
    assert_eq!(cycle.len(), DEFAULT_MASKS.len());
    assert_eq!(cycle.current().name, "Major");
    assert_eq!(cycle.advance().name, "Minor");
    assert_eq!(cycle.advance().name, "Pentatonic");
    assert_eq!(cycle.advance().name, "Triad");
    assert_eq!(cycle.advance().name, "Major");
    assert_eq!(cycle.position(), 0);
}

#[test]
fn empty_mask_list_falls_back_to_defaults() {
    let cycle = MaskCycle::new(Vec::new());
    assert!(!cycle.is_empty());
    assert_eq!(cycle.current(), DEFAULT_MASKS[0]);
}

#[test]
fn single_mask_cycle_stays_put() {
    let mut cycle = MaskCycle::new(vec![DEFAULT_MASKS[3]]);
    assert_eq!(cycle.advance().name, "Triad");
    assert_eq!(cycle.position(), 0);
}

#[test]
fn midi_to_hz_matches_a4_and_octave() {
    let a4 = midi_to_hz(69.0);
    assert!((a4 - 440.0).abs() < 1e-4);
    let a5 = midi_to_hz(81.0);
    assert!((a5 / a4 - 2.0).abs() < 1e-4);
}

#[test]
fn note_frequency_sits_in_the_middle_c_octave() {
    let c = note_for_index(0).frequency_hz();
    assert!((c - 261.6256).abs() < 1e-2);
    let a = CIRCLE_OF_FIFTHS[3];
    assert_eq!(a.name, "A");
    assert!((a.frequency_hz() - 440.0).abs() < 1e-3);
}

#[test]
fn midi_to_hz_is_monotonic_over_range() {
    let mut prev = midi_to_hz(20.0);
    for m in 21..=100 {
        let f = midi_to_hz(m as f32);
        assert!(f > prev, "frequency not increasing at midi {m}");
        prev = f;
    }
}
