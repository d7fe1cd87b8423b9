//! Contains the errors returned by the scale trainer.

use thiserror::Error;

use crate::music::{intervals::Interval, notes::Note, pitches::Pitch};

/// The broad category of a [`MusicError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument or a computed value is outside of its valid closed range.
    Range,

    /// An operation could not find a valid result for an otherwise valid input.
    InvalidState,

    /// A textual representation could not be parsed.
    Parse,
}

/// An error returned when dealing with notes, intervals, pitches, and scales.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum MusicError {
    #[error("accidental offset {0} is outside the range of a double flat to a double sharp")]
    AccidentalOutOfRange(i32),

    #[error("natural note index {0} is outside the range of C to B")]
    NaturalNoteOutOfRange(i32),

    #[error("diatonic mode index {0} is outside the range of Ionian to Locrian")]
    ModeOutOfRange(i32),

    #[error("cannot flatten {0} past a double flat")]
    CannotFlatten(Note),

    #[error("cannot sharpen {0} past a double sharp")]
    CannotSharpen(Note),

    #[error(
        "cannot spell the result of moving {0} by {1} with at most a double accidental within the \
         supported octaves"
    )]
    UnspellablePitch(Pitch, Interval),

    #[error("cannot spell every degree of the {0} scale with at most a double accidental")]
    UnspellableScale(String),

    #[error("cannot find an enharmonic respelling of {0}")]
    NoRespelling(Note),

    #[error("cannot parse {0:?} as a note")]
    ParseNote(String),
}

impl MusicError {
    /// Returns the category of the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            MusicError::NoRespelling(_) => ErrorKind::InvalidState,
            MusicError::ParseNote(_) => ErrorKind::Parse,
            _ => ErrorKind::Range,
        }
    }
}

/// An error returned when dealing with the guitar fretboard.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum GuitarError {
    #[error("a guitar needs at least one interval between two strings")]
    NoStringIntervals,

    #[error("string {0} does not exist on a guitar with {1} strings")]
    StringOutOfRange(usize, usize),

    #[error("fret {0} does not exist on a guitar with {1} frets")]
    FretOutOfRange(usize, usize),

    #[error("cannot tune string {0}: {1}")]
    Tuning(usize, #[source] MusicError),
}
