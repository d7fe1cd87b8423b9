//! Defines pitches, that is, notes bound to an octave, and the arithmetic between pitches and
//! intervals.
//!
//! Octaves follow scientific pitch notation and change between B and C regardless of the
//! accidentals, so B♯3 sounds the same as C4 but still belongs to octave 3. A pitch can therefore
//! be located in two ways:
//!
//! - Its absolute number, the number of semitones above C0, which decides how the pitch sounds.
//! - Its diatonic position, the number of letters above C0, which decides how the pitch is spelled.
//!
//! Moving a pitch by an interval moves both numbers by the corresponding measure of the interval,
//! and the accidental of the result is whatever is needed to reconcile them.

use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{Add, Sub},
};

use crate::error::MusicError;
use crate::music::{
    intervals::{Interval, SEMITONES_PER_OCTAVE, STEPS_PER_OCTAVE},
    notes::{Accidental, NaturalNote, Note},
};

/// The highest octave in which pitches can be numbered and compared.
pub const MAX_OCTAVE: i32 = i32::MAX / (2 * SEMITONES_PER_OCTAVE) - 1;

/// The lowest octave in which pitches can be numbered and compared.
pub const MIN_OCTAVE: i32 = -MAX_OCTAVE;

/// A note in a specific octave.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Pitch {
    /// The note of the pitch.
    note: Note,

    /// The octave of the pitch. Octave 4 starts at middle C.
    octave: i32,
}

impl Pitch {
    /// Returns a new pitch from a note and an octave. The octave should be within
    /// [`MIN_OCTAVE`, `MAX_OCTAVE`], which keeps the numbers of the pitch and the intervals between
    /// any two such pitches within an `i32`.
    #[must_use]
    pub const fn new(note: Note, octave: i32) -> Pitch {
        Pitch { note, octave }
    }

    /// Returns the note of the pitch.
    #[must_use]
    pub fn note(&self) -> Note {
        self.note
    }

    /// Returns the octave of the pitch.
    #[must_use]
    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// Returns the number of semitones between C0 and this pitch.
    #[must_use]
    pub fn absolute_number(&self) -> i32 {
        self.note.absolute_number() + SEMITONES_PER_OCTAVE * self.octave
    }

    /// Returns the number of natural notes between C0 and the natural note of this pitch.
    #[must_use]
    pub fn diatonic_position(&self) -> i32 {
        self.note.natural_note().index() + STEPS_PER_OCTAVE * self.octave
    }

    /// Returns whether both pitches sound the same regardless of their spelling.
    #[must_use]
    pub fn is_enharmonic(&self, other: &Pitch) -> bool {
        self.absolute_number() == other.absolute_number()
    }

    /// Returns the pitch reached by moving this pitch by the given interval. The natural note of
    /// the result is found by moving as many letters as the interval has steps, so a minor third
    /// above C4 is E♭4 and not D♯4. Fails if the result would need more than a double accidental.
    pub fn transpose(&self, interval: Interval) -> Result<Pitch, MusicError> {
        let unspellable = || MusicError::UnspellablePitch(*self, interval);
        let steps_per_octave = i64::from(STEPS_PER_OCTAVE);
        let semitones_per_octave = i64::from(SEMITONES_PER_OCTAVE);

        // Computed in i64 so that no octave and interval can overflow.
        let position = i64::from(self.note.natural_note().index())
            + steps_per_octave * i64::from(self.octave)
            + i64::from(interval.steps());
        let natural_note =
            NaturalNote::from_index_wrapping(position.rem_euclid(steps_per_octave) as i32);
        let octave = position.div_euclid(steps_per_octave);

        let natural_number = i64::from(natural_note.number()) + semitones_per_octave * octave;
        let target_number = i64::from(self.note.absolute_number())
            + semitones_per_octave * i64::from(self.octave)
            + i64::from(interval.semitones());
        let accidental = i32::try_from(target_number - natural_number)
            .ok()
            .and_then(|offset| Accidental::try_from(offset).ok())
            .ok_or_else(unspellable)?;
        let octave = i32::try_from(octave)
            .ok()
            .filter(|octave| (MIN_OCTAVE..=MAX_OCTAVE).contains(octave))
            .ok_or_else(unspellable)?;

        Ok(Pitch::new(Note::new(natural_note, accidental), octave))
    }
}

impl Add<Interval> for Pitch {
    type Output = Result<Pitch, MusicError>;

    fn add(self, interval: Interval) -> Self::Output {
        self.transpose(interval)
    }
}

impl Sub<Interval> for Pitch {
    type Output = Result<Pitch, MusicError>;

    fn sub(self, interval: Interval) -> Self::Output {
        self.transpose(-interval)
    }
}

impl Sub for Pitch {
    type Output = Interval;

    /// Returns the interval that leads from `other` to `self`.
    fn sub(self, other: Pitch) -> Interval {
        Interval::new(
            self.absolute_number() - other.absolute_number(),
            self.diatonic_position() - other.diatonic_position(),
        )
    }
}

impl Display for Pitch {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{}", self.note, self.octave)
    }
}
