//! Tests the properties that must hold for every note, pitch, interval, and scale.
//!
//! The unit tests in each module check hand-picked examples. The tests in this file instead go
//! through every note and a wide range of pitches and intervals, so they catch the edge cases
//! around the octave boundaries and the double accidentals that are easy to miss by hand.

use anyhow::Result;
use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

use scale_trainer::music::{
    intervals::Interval,
    modes::DiatonicMode,
    notes::{Accidental, NaturalNote, Note},
    pitches::Pitch,
    scales::{ChromaticScale, DEFAULT_OCTAVE, DiatonicScale, Scale},
};

/// Returns all the notes that can be spelled with at most a double accidental.
fn all_notes() -> Vec<Note> {
    NaturalNote::iter()
        .flat_map(|natural_note| {
            Accidental::iter().map(move |accidental| Note::new(natural_note, accidental))
        })
        .collect()
}

/// Returns a range of pitches spanning a few octaves around middle C.
fn all_pitches() -> Vec<Pitch> {
    (1..=6)
        .flat_map(|octave| all_notes().into_iter().map(move |note| Pitch::new(note, octave)))
        .collect()
}

/// Returns ascending and descending intervals of up to two octaves.
fn all_intervals() -> Vec<Interval> {
    (0..=14)
        .flat_map(|steps| {
            // The number of semitones between C and the natural note the steps lead to.
            let natural = NaturalNote::from_index_wrapping(steps).number() + 12 * (steps / 7);
            (-2..=2).flat_map(move |offset| {
                let interval = Interval::new(natural + offset, steps);
                [interval, -interval]
            })
        })
        .collect()
}

/// Verifies that inverting a note twice keeps its pitch class and that natural notes invert to
/// themselves.
#[test]
fn double_inversion() -> Result<()> {
    for note in all_notes() {
        let inverted = note.invert()?;
        assert_eq!(inverted.invert()?.number(), note.number(), "{note}");
        if note.accidental() == Accidental::Natural {
            assert_eq!(inverted, note);
        }
    }
    assert_eq!(Note::C_SHARP.invert()?, Note::D_FLAT);
    assert_eq!(Note::G_FLAT.invert()?, Note::F_SHARP);
    Ok(())
}

/// Verifies that the pitch class of every note is within a single octave.
#[test]
fn pitch_class_range() {
    for note in all_notes() {
        assert!((0..12).contains(&note.number()), "{note}");
    }
}

/// Verifies that moving a pitch by an interval and back returns the same pitch, and that the
/// difference between both pitches is the interval.
#[test]
fn round_trip() -> Result<()> {
    let mut representable = 0;
    for pitch in all_pitches() {
        for interval in all_intervals() {
            let Ok(moved) = pitch + interval else {
                continue;
            };
            representable += 1;
            assert_eq!((moved - interval)?, pitch, "{pitch} {interval}");
            assert_eq!(moved - pitch, interval, "{pitch} {interval}");
        }
    }
    assert!(representable > 0);
    Ok(())
}

/// Verifies that results outside of the double accidentals are rejected instead of respelled.
#[test]
fn unrepresentable_results() {
    let pitch = Pitch::new(Note::new(NaturalNote::B, Accidental::DoubleSharp), 3);
    assert!((pitch + Interval::AUGMENTED_UNISON).is_err());
    assert!((pitch + Interval::MAJOR_SECOND).is_err());
    assert!((pitch + Interval::MINOR_SECOND).is_ok());
}

/// Verifies the first octave of the chromatic scale.
#[test]
fn chromatic_first_octave() {
    let pitches: Vec<Pitch> = ChromaticScale::new(Note::C)
        .pitches_ascending(DEFAULT_OCTAVE)
        .take(13)
        .collect();
    let expected: Vec<Pitch> = [
        Note::C,
        Note::C_SHARP,
        Note::D,
        Note::D_SHARP,
        Note::E,
        Note::F,
        Note::F_SHARP,
        Note::G,
        Note::G_SHARP,
        Note::A,
        Note::A_SHARP,
        Note::B,
    ]
    .into_iter()
    .map(|note| Pitch::new(note, 4))
    .chain(std::iter::once(Pitch::new(Note::C, 5)))
    .collect();
    assert_eq!(pitches, expected);
}

/// Verifies that consecutive pitches of every scale differ by the interval at the same position.
#[test]
fn pitches_follow_intervals() -> Result<()> {
    for key in all_notes() {
        let chromatic = ChromaticScale::new(key);
        let pitches: Vec<Pitch> = chromatic.pitches_descending(2).take(30).collect();
        let intervals: Vec<Interval> = chromatic.intervals_descending().take(29).collect();
        for (pair, interval) in pitches.windows(2).zip(intervals) {
            assert_eq!(pair[1] - pair[0], interval);
        }

        for mode in DiatonicMode::iter() {
            let Ok(scale) = DiatonicScale::new(key, mode) else {
                continue;
            };
            let pitches: Vec<Pitch> = scale.pitches_ascending(0).take(22).collect();
            let intervals: Vec<Interval> = scale.intervals_ascending().take(21).collect();
            for (pair, interval) in pitches.windows(2).zip(intervals) {
                assert_eq!((pair[0] + interval)?, pair[1], "{scale}");
            }
            assert_eq!(pitches[7] - pitches[0], Interval::OCTAVE, "{scale}");
        }
    }
    Ok(())
}

/// Verifies that the scales that can be built use every letter once per octave.
#[test]
fn diatonic_letters() -> Result<()> {
    let mut built = 0;
    for key in all_notes() {
        for mode in DiatonicMode::iter() {
            let Ok(scale) = DiatonicScale::new(key, mode) else {
                continue;
            };
            built += 1;
            let mut letters: Vec<NaturalNote> = scale
                .notes()
                .iter()
                .take(7)
                .map(Note::natural_note)
                .collect();
            letters.sort();
            assert_eq!(letters, NaturalNote::iter().collect::<Vec<_>>(), "{scale}");
        }
    }

    // Every key with at most a single accidental works in every mode.
    assert!(built >= 21 * 7);
    Ok(())
}
