//! Scale trainer models the notes, intervals, pitches, and scales of Western tonal music, and uses
//! them to quiz guitar players on the scales laid out on the fretboard.
//!
//! The core of the library is the algebra of notes, intervals, and pitches. A note is a natural
//! note and an accidental, and it can be respelled enharmonically. An interval is measured both in
//! semitones and in diatonic steps, so that moving a pitch by an interval always spells the result
//! with the right letter. Scales build on top of this algebra and expose their pitches and
//! intervals as infinite lazy sequences moving up or down from the key in any octave.
//!
//! On top of the core, the library models a guitar fretboard, generates practice exercises that
//! lay out a scale on it and ask about its degrees or its name, and keeps track of the answers
//! given during a practice session. Reading from the terminal is left to the caller, so all the
//! state of a session is an explicit value owned by whoever drives it.

pub mod error;
pub mod guitar;
pub mod music;
pub mod practice;
pub mod practice_stats;
