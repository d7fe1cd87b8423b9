//! Defines the natural notes, the accidentals, and the notes built from them.

use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::EnumIter;

use crate::error::MusicError;
use crate::music::{
    intervals::{Interval, SEMITONES_PER_OCTAVE},
    pitches::Pitch,
};

/// The number of natural notes in an octave.
pub const NATURAL_NOTES_PER_OCTAVE: i32 = 7;

/// The natural notes in letter order, used to convert indices back into notes.
const NATURAL_NOTES: [NaturalNote; 7] = [
    NaturalNote::C,
    NaturalNote::D,
    NaturalNote::E,
    NaturalNote::F,
    NaturalNote::G,
    NaturalNote::A,
    NaturalNote::B,
];

/// The number of semitones between C and each natural note, in letter order.
const NATURAL_NOTE_NUMBERS: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// The names of the twelve pitch classes, listing both spellings of the black keys.
const CHROMATIC_NAMES: [&str; 12] = [
    "C", "C#/Db", "D", "D#/Eb", "E", "F", "F#/Gb", "G", "G#/Ab", "A", "A#/Bb", "B",
];

/// Defines the names of the natural notes.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    EnumIter,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    strum::Display,
)]
#[allow(missing_docs)]
pub enum NaturalNote {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NaturalNote {
    /// Returns the position of the note in the sequence C to B, starting at zero.
    #[must_use]
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Returns the natural note at the given index, wrapping around in both directions so that
    /// index 7 is C again and index -1 is B.
    #[must_use]
    pub fn from_index_wrapping(index: i32) -> NaturalNote {
        NATURAL_NOTES[index.rem_euclid(NATURAL_NOTES_PER_OCTAVE) as usize]
    }

    /// Returns the number of semitones between C and this note.
    #[must_use]
    pub fn number(self) -> i32 {
        NATURAL_NOTE_NUMBERS[self as usize]
    }

    /// Returns the next natural note. B is followed by C.
    #[must_use]
    pub fn next(self) -> NaturalNote {
        Self::from_index_wrapping(self.index() + 1)
    }

    /// Returns the previous natural note. C is preceded by B.
    #[must_use]
    pub fn previous(self) -> NaturalNote {
        Self::from_index_wrapping(self.index() - 1)
    }
}

impl TryFrom<i32> for NaturalNote {
    type Error = MusicError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        if (0..NATURAL_NOTES_PER_OCTAVE).contains(&index) {
            Ok(Self::from_index_wrapping(index))
        } else {
            Err(MusicError::NaturalNoteOutOfRange(index))
        }
    }
}

/// Returns the number of semitones covered when moving up from one natural note to the other. The
/// result is always in the range `[0, 12)`, so moving from B to C covers one semitone and moving
/// from C to B covers eleven.
#[must_use]
pub fn semitones_between(from: NaturalNote, to: NaturalNote) -> i32 {
    (to.number() - from.number()).rem_euclid(SEMITONES_PER_OCTAVE)
}

/// Defines the pitch accidentals that can be applied to a note, ordered from the lowest to the
/// highest.
#[derive(
    Clone, Copy, Debug, Deserialize, EnumIter, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[allow(missing_docs)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Returns the number of semitones by which the accidental alters a natural note.
    #[must_use]
    pub fn offset(self) -> i32 {
        self as i32 - 2
    }

    /// Returns the ASCII sign of the accidental.
    #[must_use]
    pub fn sign(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        }
    }

    /// Returns the sign of the accidental using the Unicode music symbols.
    #[must_use]
    pub fn unicode_sign(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "𝄫",
            Accidental::Flat => "♭",
            Accidental::Natural => "",
            Accidental::Sharp => "♯",
            Accidental::DoubleSharp => "𝄪",
        }
    }
}

impl TryFrom<i32> for Accidental {
    type Error = MusicError;

    fn try_from(offset: i32) -> Result<Self, Self::Error> {
        match offset {
            -2 => Ok(Accidental::DoubleFlat),
            -1 => Ok(Accidental::Flat),
            0 => Ok(Accidental::Natural),
            1 => Ok(Accidental::Sharp),
            2 => Ok(Accidental::DoubleSharp),
            _ => Err(MusicError::AccidentalOutOfRange(offset)),
        }
    }
}

impl Display for Accidental {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.sign())
    }
}

/// Defines the union of a natural note and an accidental that describes a note.
///
/// Notes are compared by their spelling. Two notes which sound the same but are spelled
/// differently, such as C♯ and D♭, are different values. Use [`Note::is_enharmonic`] to compare
/// them by their sound.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Note(pub NaturalNote, pub Accidental);

#[allow(missing_docs)]
impl Note {
    pub const A: Note = Note(NaturalNote::A, Accidental::Natural);
    pub const A_FLAT: Note = Note(NaturalNote::A, Accidental::Flat);
    pub const A_SHARP: Note = Note(NaturalNote::A, Accidental::Sharp);
    pub const B: Note = Note(NaturalNote::B, Accidental::Natural);
    pub const B_FLAT: Note = Note(NaturalNote::B, Accidental::Flat);
    pub const B_SHARP: Note = Note(NaturalNote::B, Accidental::Sharp);
    pub const C: Note = Note(NaturalNote::C, Accidental::Natural);
    pub const C_FLAT: Note = Note(NaturalNote::C, Accidental::Flat);
    pub const C_SHARP: Note = Note(NaturalNote::C, Accidental::Sharp);
    pub const D: Note = Note(NaturalNote::D, Accidental::Natural);
    pub const D_FLAT: Note = Note(NaturalNote::D, Accidental::Flat);
    pub const D_SHARP: Note = Note(NaturalNote::D, Accidental::Sharp);
    pub const E: Note = Note(NaturalNote::E, Accidental::Natural);
    pub const E_FLAT: Note = Note(NaturalNote::E, Accidental::Flat);
    pub const E_SHARP: Note = Note(NaturalNote::E, Accidental::Sharp);
    pub const F: Note = Note(NaturalNote::F, Accidental::Natural);
    pub const F_FLAT: Note = Note(NaturalNote::F, Accidental::Flat);
    pub const F_SHARP: Note = Note(NaturalNote::F, Accidental::Sharp);
    pub const G: Note = Note(NaturalNote::G, Accidental::Natural);
    pub const G_FLAT: Note = Note(NaturalNote::G, Accidental::Flat);
    pub const G_SHARP: Note = Note(NaturalNote::G, Accidental::Sharp);

    /// Returns a new note from a natural note and an accidental.
    #[must_use]
    pub const fn new(natural_note: NaturalNote, accidental: Accidental) -> Note {
        Note(natural_note, accidental)
    }

    #[must_use]
    pub fn natural_note(&self) -> NaturalNote {
        self.0
    }

    #[must_use]
    pub fn accidental(&self) -> Accidental {
        self.1
    }

    /// Returns the number of semitones between C and this note without reducing it to a single
    /// octave. For example, C♭ is -1 and B♯ is 12.
    #[must_use]
    pub fn absolute_number(&self) -> i32 {
        self.0.number() + self.1.offset()
    }

    /// Returns the pitch class of the note as a number in the range `[0, 12)`, with C being zero.
    #[must_use]
    pub fn number(&self) -> i32 {
        self.absolute_number().rem_euclid(SEMITONES_PER_OCTAVE)
    }

    /// Returns the name of the pitch class of the note, listing both spellings for the black keys
    /// (e.g., "C#/Db" for both C♯ and D♭).
    #[must_use]
    pub fn chromatic_name(&self) -> &'static str {
        CHROMATIC_NAMES[self.number() as usize]
    }

    /// Returns whether both notes sound the same regardless of their spelling.
    #[must_use]
    pub fn is_enharmonic(&self, other: &Note) -> bool {
        self.number() == other.number()
    }

    /// Returns the note lowered by one semitone while keeping its natural note.
    pub fn flatten(&self) -> Result<Note, MusicError> {
        Accidental::try_from(self.1.offset() - 1)
            .map(|accidental| Note(self.0, accidental))
            .map_err(|_| MusicError::CannotFlatten(*self))
    }

    /// Returns the note raised by one semitone while keeping its natural note.
    pub fn sharpen(&self) -> Result<Note, MusicError> {
        Accidental::try_from(self.1.offset() + 1)
            .map(|accidental| Note(self.0, accidental))
            .map_err(|_| MusicError::CannotSharpen(*self))
    }

    /// Returns the enharmonic spelling of the note on the other side of the natural accidental.
    /// Sharp notes are respelled with flats and flat notes with sharps (e.g., C♯ becomes D♭, G♭
    /// becomes F♯, and E♯ becomes G𝄫). Natural notes are returned unchanged.
    pub fn invert(&self) -> Result<Note, MusicError> {
        let offset = self.1.offset();
        if offset == 0 {
            return Ok(*self);
        }

        // Walk one letter at a time in the direction of the accidental, removing the semitones
        // covered by each step, until the remaining offset changes sides.
        let mut natural_note = self.0;
        let mut remaining = offset;
        for _ in 0..NATURAL_NOTES_PER_OCTAVE {
            let next_note = if offset > 0 {
                let next_note = natural_note.next();
                remaining -= semitones_between(natural_note, next_note);
                next_note
            } else {
                let next_note = natural_note.previous();
                remaining += semitones_between(next_note, natural_note);
                next_note
            };

            if remaining.signum() == -offset.signum() {
                return Accidental::try_from(remaining)
                    .map(|accidental| Note(next_note, accidental))
                    .map_err(|_| MusicError::NoRespelling(*self));
            }
            natural_note = next_note;
        }
        Err(MusicError::NoRespelling(*self))
    }

    /// Returns the note reached by moving this note by the given interval.
    pub fn transpose(&self, interval: Interval) -> Result<Note, MusicError> {
        Pitch::new(*self, 0)
            .transpose(interval)
            .map(|pitch| pitch.note())
    }

    /// Returns a representation of the note using the Unicode symbols for the accidentals.
    #[must_use]
    pub fn to_unicode_string(&self) -> String {
        format!("{}{}", self.0, self.1.unicode_sign())
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{}", self.0, self.1)
    }
}

impl FromStr for Note {
    type Err = MusicError;

    /// Parses a note written as a letter followed by an optional accidental, such as "C", "f#",
    /// "Bb", "E♭", "Gbb", or "Fx".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let natural_note = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('C') => NaturalNote::C,
            Some('D') => NaturalNote::D,
            Some('E') => NaturalNote::E,
            Some('F') => NaturalNote::F,
            Some('G') => NaturalNote::G,
            Some('A') => NaturalNote::A,
            Some('B') => NaturalNote::B,
            _ => return Err(MusicError::ParseNote(s.to_string())),
        };
        let accidental = match chars.as_str() {
            "bb" | "♭♭" | "𝄫" => Accidental::DoubleFlat,
            "b" | "♭" => Accidental::Flat,
            "" | "♮" => Accidental::Natural,
            "#" | "♯" => Accidental::Sharp,
            "##" | "♯♯" | "x" | "𝄪" => Accidental::DoubleSharp,
            _ => return Err(MusicError::ParseNote(s.to_string())),
        };
        Ok(Note(natural_note, accidental))
    }
}
