//! Defines the diatonic scales, that is, the major scale and its modes.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    iter,
    ops::Neg,
};

use crate::error::MusicError;
use crate::music::{
    intervals::Interval,
    modes::{DiatonicMode, NUMBER_OF_MODES},
    notes::Note,
    pitches::Pitch,
    scales::Scale,
};

/// The intervals between consecutive degrees of the major scale. Every mode uses the same pattern
/// starting at a different position.
const MAJOR_SCALE_INTERVALS: [Interval; NUMBER_OF_MODES] = [
    Interval::MAJOR_SECOND,
    Interval::MAJOR_SECOND,
    Interval::MINOR_SECOND,
    Interval::MAJOR_SECOND,
    Interval::MAJOR_SECOND,
    Interval::MAJOR_SECOND,
    Interval::MINOR_SECOND,
];

/// A seven-note scale built from a key note and a mode.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DiatonicScale {
    /// The note on which the scale starts.
    key: Note,

    /// The mode of the scale.
    mode: DiatonicMode,
}

impl DiatonicScale {
    /// Returns the scale of the given mode starting at the given note. Fails if any degree of the
    /// scale would need more than a double accidental.
    pub fn new(key: Note, mode: DiatonicMode) -> Result<DiatonicScale, MusicError> {
        let scale = DiatonicScale { key, mode };

        // Spelling one octave is enough since the following ones repeat the same notes.
        let mut pitch = Pitch::new(key, 0);
        for interval in scale.intervals_ascending().take(NUMBER_OF_MODES) {
            pitch = pitch
                .transpose(interval)
                .map_err(|_| MusicError::UnspellableScale(scale.name()))?;
        }
        Ok(scale)
    }

    /// Returns the mode of the scale.
    #[must_use]
    pub fn mode(&self) -> DiatonicMode {
        self.mode
    }

    /// Returns the pitches reached by applying the intervals one after the other, starting at the
    /// key note in the given octave.
    fn pitches<I: Iterator<Item = Interval>>(
        key: Note,
        octave: i32,
        mut intervals: I,
    ) -> impl Iterator<Item = Pitch> {
        iter::successors(Some(Pitch::new(key, octave)), move |pitch| {
            pitch.transpose(intervals.next()?).ok()
        })
    }
}

impl Scale for DiatonicScale {
    fn degree_count(&self) -> usize {
        NUMBER_OF_MODES
    }

    fn name(&self) -> String {
        format!("{} {}", self.key, self.mode.combined_name())
    }

    fn key_note(&self) -> Note {
        self.key
    }

    fn intervals_ascending(&self) -> impl Iterator<Item = Interval> {
        MAJOR_SCALE_INTERVALS
            .into_iter()
            .cycle()
            .skip(self.mode.index())
    }

    fn intervals_descending(&self) -> impl Iterator<Item = Interval> {
        MAJOR_SCALE_INTERVALS
            .into_iter()
            .rev()
            .cycle()
            .skip((NUMBER_OF_MODES - self.mode.index()) % NUMBER_OF_MODES)
            .map(Interval::neg)
    }

    fn pitches_ascending(&self, octave: i32) -> impl Iterator<Item = Pitch> {
        Self::pitches(self.key, octave, self.intervals_ascending())
    }

    fn pitches_descending(&self, octave: i32) -> impl Iterator<Item = Pitch> {
        Self::pitches(self.key, octave, self.intervals_descending())
    }
}

impl Display for DiatonicScale {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::error::ErrorKind;
    use crate::music::notes::{Accidental, NaturalNote};
    use crate::music::pitches::{MAX_OCTAVE, MIN_OCTAVE};

    fn note_names(scale: &DiatonicScale) -> Vec<String> {
        scale.notes().iter().map(Note::to_string).collect()
    }

    /// Verifies the pitches of the C major scale.
    #[test]
    fn c_major() {
        let scale = DiatonicScale::new(Note::C, DiatonicMode::MAJOR).unwrap();
        let pitches: Vec<String> = scale
            .pitches_ascending(4)
            .take(8)
            .map(|pitch| pitch.to_string())
            .collect();
        assert_eq!(
            pitches,
            vec!["C4", "D4", "E4", "F4", "G4", "A4", "B4", "C5"]
        );
    }

    /// Verifies the spelling of scales with accidentals.
    #[test]
    fn spelling() {
        let scale = DiatonicScale::new(Note::F_SHARP, DiatonicMode::Ionian).unwrap();
        assert_eq!(
            note_names(&scale),
            vec!["F#", "G#", "A#", "B", "C#", "D#", "E#", "F#"]
        );

        let scale = DiatonicScale::new(Note::E_FLAT, DiatonicMode::Dorian).unwrap();
        assert_eq!(
            note_names(&scale),
            vec!["Eb", "F", "Gb", "Ab", "Bb", "C", "Db", "Eb"]
        );

        let scale = DiatonicScale::new(Note::B, DiatonicMode::Locrian).unwrap();
        assert_eq!(
            note_names(&scale),
            vec!["B", "C", "D", "E", "F", "G", "A", "B"]
        );
    }

    /// Verifies that the modes rotate the interval pattern of the major scale.
    #[test]
    fn mode_rotation() {
        for mode in DiatonicMode::iter() {
            let scale = DiatonicScale::new(Note::D, mode).unwrap();
            let mut expected = MAJOR_SCALE_INTERVALS;
            expected.rotate_left(mode.index());
            let intervals: Vec<Interval> = scale.intervals_ascending().take(7).collect();
            assert_eq!(intervals, expected.to_vec(), "{mode}");
        }
    }

    /// Verifies the first descending intervals of some modes.
    #[test]
    fn intervals_descending() {
        let scale = DiatonicScale::new(Note::A, DiatonicMode::MINOR).unwrap();
        let intervals: Vec<Interval> = scale.intervals_descending().take(3).collect();
        assert_eq!(
            intervals,
            vec![
                -Interval::MAJOR_SECOND,
                -Interval::MAJOR_SECOND,
                -Interval::MINOR_SECOND
            ]
        );

        let scale = DiatonicScale::new(Note::C, DiatonicMode::MAJOR).unwrap();
        assert_eq!(
            scale.intervals_descending().next(),
            Some(-Interval::MINOR_SECOND)
        );
    }

    /// Verifies that moving down a scale retraces the pitches obtained by moving up.
    #[test]
    fn descending_retraces_ascending() {
        let keys = [Note::C, Note::G_FLAT, Note::A, Note::D_SHARP, Note::F];
        for key in keys {
            for mode in DiatonicMode::iter() {
                let Ok(scale) = DiatonicScale::new(key, mode) else {
                    continue;
                };
                let mut ascending: Vec<Pitch> = scale.pitches_ascending(3).take(8).collect();
                ascending.reverse();
                let descending: Vec<Pitch> = scale.pitches_descending(4).take(8).collect();
                assert_eq!(descending, ascending, "{scale}");
            }
        }
    }

    /// Verifies that the descending pitches cross the octave boundary.
    #[test]
    fn a_minor_descending() {
        let scale = DiatonicScale::new(Note::A, DiatonicMode::MINOR).unwrap();
        let pitches: Vec<String> = scale
            .pitches_descending(4)
            .take(8)
            .map(|pitch| pitch.to_string())
            .collect();
        assert_eq!(
            pitches,
            vec!["A4", "G4", "F4", "E4", "D4", "C4", "B3", "A3"]
        );
    }

    /// Verifies that every call returns a new sequence starting again at the key.
    #[test]
    fn restartable() {
        let scale = DiatonicScale::new(Note::E_FLAT, DiatonicMode::Dorian).unwrap();

        let mut first = scale.pitches_ascending(3);
        first.nth(9);
        let mut second = scale.pitches_ascending(3);
        assert_eq!(second.next(), Some(Pitch::new(Note::E_FLAT, 3)));
        assert_eq!(first.next(), Some(Pitch::new(Note::A_FLAT, 4)));
        assert_eq!(second.next(), Some(Pitch::new(Note::F, 3)));

        let mut first = scale.pitches_descending(4);
        first.nth(2);
        let mut second = scale.pitches_descending(4);
        assert_eq!(second.next(), Some(Pitch::new(Note::E_FLAT, 4)));
        assert_eq!(first.next(), Some(Pitch::new(Note::B_FLAT, 3)));

        let mut first = scale.intervals_ascending();
        first.nth(3);
        let mut second = scale.intervals_ascending();
        assert_eq!(second.next(), Some(Interval::MAJOR_SECOND));
        assert_eq!(second.next(), Some(Interval::MINOR_SECOND));
        assert_eq!(first.next(), Some(Interval::MAJOR_SECOND));
        assert_eq!(first.next(), Some(Interval::MINOR_SECOND));
    }

    /// Verifies that the pitches stop at the edges of the supported octaves.
    #[test]
    fn extreme_octaves() {
        let scale = DiatonicScale::new(Note::C, DiatonicMode::MAJOR).unwrap();
        assert_eq!(scale.pitches_ascending(MAX_OCTAVE).take(10).count(), 7);
        assert_eq!(scale.pitches_descending(MIN_OCTAVE).take(10).count(), 1);
        assert_eq!(scale.pitches_ascending(i32::MAX).take(10).count(), 1);
    }

    /// Verifies that scales which cannot be spelled are rejected.
    #[test]
    fn unspellable() {
        let key = Note::new(NaturalNote::D, Accidental::DoubleSharp);
        let error = DiatonicScale::new(key, DiatonicMode::Ionian).unwrap_err();
        assert_eq!(
            error,
            MusicError::UnspellableScale("D## Ionian (Major)".to_string())
        );
        assert_eq!(error.kind(), ErrorKind::Range);
    }

    /// Verifies the names and textual representation of the scales.
    #[test]
    fn names() {
        let scale = DiatonicScale::new(Note::C, DiatonicMode::MAJOR).unwrap();
        assert_eq!(scale.name(), "C Ionian (Major)");
        assert_eq!(scale.to_string(), "C Ionian (Major) (C, D, E, F, G, A, B, C)");
        assert_eq!(scale.key_note(), Note::C);
        assert_eq!(scale.degree_count(), 7);

        let scale = DiatonicScale::new(Note::D, DiatonicMode::Dorian).unwrap();
        assert_eq!(scale.name(), "D Dorian");
        assert_eq!(scale.mode(), DiatonicMode::Dorian);
    }
}
