//! Defines the contract shared by all musical scales.
//!
//! A scale is described by its key note and produces four infinite sequences: the intervals and
//! the pitches obtained by moving up or down from the key. The sequences are lazy iterators, so
//! they are computed as they are consumed and each call returns a new iterator starting again at
//! the key.

pub mod chromatic;
pub mod diatonic;

pub use chromatic::ChromaticScale;
pub use diatonic::DiatonicScale;

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::music::{intervals::Interval, notes::Note, pitches::Pitch};

/// The octave in which the pitch sequences start unless told otherwise.
pub const DEFAULT_OCTAVE: i32 = 4;

/// A musical scale starting at a key note. The sequences are returned as `impl Iterator`, so the
/// trait is dispatched statically. Use [`AnyScale`] when the kind of scale is chosen at runtime.
pub trait Scale {
    /// Returns the number of degrees in one octave of the scale.
    fn degree_count(&self) -> usize;

    /// Returns the name of the scale. For example, "D Dorian".
    fn name(&self) -> String;

    /// Returns the note on which the scale starts.
    fn key_note(&self) -> Note;

    /// Returns the infinite sequence of intervals between consecutive pitches when moving up the
    /// scale from the key note.
    fn intervals_ascending(&self) -> impl Iterator<Item = Interval>;

    /// Returns the infinite sequence of intervals between consecutive pitches when moving down the
    /// scale from the key note.
    fn intervals_descending(&self) -> impl Iterator<Item = Interval>;

    /// Returns the infinite sequence of pitches obtained by moving up the scale, starting with the
    /// key note in the given octave.
    fn pitches_ascending(&self, octave: i32) -> impl Iterator<Item = Pitch>;

    /// Returns the infinite sequence of pitches obtained by moving down the scale, starting with the
    /// key note in the given octave.
    fn pitches_descending(&self, octave: i32) -> impl Iterator<Item = Pitch>;

    /// Returns the notes of one octave of the scale, including the key note at both ends.
    fn notes(&self) -> Vec<Note> {
        self.pitches_ascending(DEFAULT_OCTAVE)
            .take(self.degree_count() + 1)
            .map(|pitch| pitch.note())
            .collect()
    }

    /// Returns the name of the scale followed by its notes. For example,
    /// "C Ionian (Major) (C, D, E, F, G, A, B, C)".
    fn describe(&self) -> String {
        let notes: Vec<String> = self.notes().iter().map(Note::to_string).collect();
        format!("{} ({})", self.name(), notes.join(", "))
    }
}

/// A scale of any of the supported kinds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnyScale {
    Chromatic(ChromaticScale),
    Diatonic(DiatonicScale),
}

impl From<ChromaticScale> for AnyScale {
    fn from(scale: ChromaticScale) -> Self {
        AnyScale::Chromatic(scale)
    }
}

impl From<DiatonicScale> for AnyScale {
    fn from(scale: DiatonicScale) -> Self {
        AnyScale::Diatonic(scale)
    }
}

impl Scale for AnyScale {
    fn degree_count(&self) -> usize {
        match self {
            AnyScale::Chromatic(scale) => scale.degree_count(),
            AnyScale::Diatonic(scale) => scale.degree_count(),
        }
    }

    fn name(&self) -> String {
        match self {
            AnyScale::Chromatic(scale) => scale.name(),
            AnyScale::Diatonic(scale) => scale.name(),
        }
    }

    fn key_note(&self) -> Note {
        match self {
            AnyScale::Chromatic(scale) => scale.key_note(),
            AnyScale::Diatonic(scale) => scale.key_note(),
        }
    }

    fn intervals_ascending(&self) -> impl Iterator<Item = Interval> {
        let intervals: Box<dyn Iterator<Item = Interval> + '_> = match self {
            AnyScale::Chromatic(scale) => Box::new(scale.intervals_ascending()),
            AnyScale::Diatonic(scale) => Box::new(scale.intervals_ascending()),
        };
        intervals
    }

    fn intervals_descending(&self) -> impl Iterator<Item = Interval> {
        let intervals: Box<dyn Iterator<Item = Interval> + '_> = match self {
            AnyScale::Chromatic(scale) => Box::new(scale.intervals_descending()),
            AnyScale::Diatonic(scale) => Box::new(scale.intervals_descending()),
        };
        intervals
    }

    fn pitches_ascending(&self, octave: i32) -> impl Iterator<Item = Pitch> {
        let pitches: Box<dyn Iterator<Item = Pitch> + '_> = match self {
            AnyScale::Chromatic(scale) => Box::new(scale.pitches_ascending(octave)),
            AnyScale::Diatonic(scale) => Box::new(scale.pitches_ascending(octave)),
        };
        pitches
    }

    fn pitches_descending(&self, octave: i32) -> impl Iterator<Item = Pitch> {
        let pitches: Box<dyn Iterator<Item = Pitch> + '_> = match self {
            AnyScale::Chromatic(scale) => Box::new(scale.pitches_descending(octave)),
            AnyScale::Diatonic(scale) => Box::new(scale.pitches_descending(octave)),
        };
        pitches
    }
}

impl Display for AnyScale {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.describe())
    }
}

/// An iterator over the intervals between consecutive pitches of another iterator.
pub struct Intervals<I> {
    /// The iterator producing the pitches.
    pitches: I,

    /// The last pitch taken from `pitches`, or `None` if no pitch has been taken yet.
    previous: Option<Pitch>,
}

impl<I: Iterator<Item = Pitch>> Intervals<I> {
    /// Returns an iterator over the intervals between the given pitches.
    pub fn new(pitches: I) -> Self {
        Intervals {
            pitches,
            previous: None,
        }
    }
}

impl<I: Iterator<Item = Pitch>> Iterator for Intervals<I> {
    type Item = Interval;

    fn next(&mut self) -> Option<Interval> {
        let previous = match self.previous {
            Some(pitch) => pitch,
            None => self.pitches.next()?,
        };
        let pitch = self.pitches.next()?;
        self.previous = Some(pitch);
        Some(pitch - previous)
    }
}
