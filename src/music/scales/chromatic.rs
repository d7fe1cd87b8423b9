//! Defines the chromatic scale.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    iter,
};

use crate::music::{
    intervals::{Interval, SEMITONES_PER_OCTAVE},
    notes::Note,
    pitches::{MAX_OCTAVE, MIN_OCTAVE, Pitch},
    scales::{Intervals, Scale},
};

/// The number of degrees of the chromatic scale.
pub const NUMBER_OF_DEGREES: usize = SEMITONES_PER_OCTAVE as usize;

/// The spelling of each pitch class when moving up the scale.
const NOTES_ASCENDING: [Note; NUMBER_OF_DEGREES] = [
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
];

/// The spelling of each pitch class when moving down the scale.
const NOTES_DESCENDING: [Note; NUMBER_OF_DEGREES] = [
    Note::C,
    Note::D_FLAT,
    Note::D,
    Note::E_FLAT,
    Note::E,
    Note::F,
    Note::G_FLAT,
    Note::G,
    Note::A_FLAT,
    Note::A,
    Note::B_FLAT,
    Note::B,
];

/// The scale made of all twelve semitones. Regardless of the key, it's spelled with sharps when
/// moving up and with flats when moving down.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChromaticScale {
    /// The pitch class of the key note.
    key_index: usize,
}

impl ChromaticScale {
    /// Returns the chromatic scale starting at the given note. Only the pitch class of the note is
    /// kept, so the scales of C♯ and D♭ are the same.
    #[must_use]
    pub fn new(key_note: Note) -> ChromaticScale {
        ChromaticScale {
            key_index: key_note.number() as usize,
        }
    }

    /// Returns the pitches obtained by walking the given spelling table one semitone at a time.
    /// The sequence ends when it would leave the supported octaves.
    fn pitches(
        notes: &'static [Note; NUMBER_OF_DEGREES],
        key_index: usize,
        octave: i32,
        ascending: bool,
    ) -> impl Iterator<Item = Pitch> + use<> {
        iter::successors(Some((key_index, octave)), move |&(index, octave)| {
            match (ascending, index) {
                (true, i) if i + 1 == NUMBER_OF_DEGREES => octave
                    .checked_add(1)
                    .filter(|octave| *octave <= MAX_OCTAVE)
                    .map(|octave| (0, octave)),
                (true, i) => Some((i + 1, octave)),
                (false, 0) => octave
                    .checked_sub(1)
                    .filter(|octave| *octave >= MIN_OCTAVE)
                    .map(|octave| (NUMBER_OF_DEGREES - 1, octave)),
                (false, i) => Some((i - 1, octave)),
            }
        })
        .map(move |(index, octave)| Pitch::new(notes[index], octave))
    }
}

impl Scale for ChromaticScale {
    fn degree_count(&self) -> usize {
        NUMBER_OF_DEGREES
    }

    fn name(&self) -> String {
        format!("{} Chromatic", self.key_note().chromatic_name())
    }

    fn key_note(&self) -> Note {
        NOTES_ASCENDING[self.key_index]
    }

    fn intervals_ascending(&self) -> impl Iterator<Item = Interval> {
        Intervals::new(self.pitches_ascending(0))
    }

    fn intervals_descending(&self) -> impl Iterator<Item = Interval> {
        Intervals::new(self.pitches_descending(0))
    }

    fn pitches_ascending(&self, octave: i32) -> impl Iterator<Item = Pitch> {
        Self::pitches(&NOTES_ASCENDING, self.key_index, octave, true)
    }

    fn pitches_descending(&self, octave: i32) -> impl Iterator<Item = Pitch> {
        Self::pitches(&NOTES_DESCENDING, self.key_index, octave, false)
    }
}

impl Display for ChromaticScale {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.describe())
    }
}
