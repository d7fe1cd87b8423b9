//! Defines the seven diatonic modes.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use strum::{EnumIter, EnumString};

use crate::error::MusicError;

/// The number of diatonic modes, which is also the number of degrees of a diatonic scale.
pub const NUMBER_OF_MODES: usize = 7;

/// The modes in order, used to convert indices back into modes.
const MODES: [DiatonicMode; NUMBER_OF_MODES] = [
    DiatonicMode::Ionian,
    DiatonicMode::Dorian,
    DiatonicMode::Phrygian,
    DiatonicMode::Lydian,
    DiatonicMode::Mixolydian,
    DiatonicMode::Aeolian,
    DiatonicMode::Locrian,
];

/// One of the seven musical modes. Each mode starts the interval pattern of the major scale on a
/// different degree, so the modes are also used to name the degrees of a diatonic scale.
/// Major and Minor correspond to the Ionian and Aeolian modes, respectively.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[strum(ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum DiatonicMode {
    #[strum(serialize = "Ionian", serialize = "Major")]
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    #[strum(serialize = "Aeolian", serialize = "Minor")]
    Aeolian,
    Locrian,
}

impl DiatonicMode {
    /// The mode of the major scale.
    pub const MAJOR: DiatonicMode = DiatonicMode::Ionian;

    /// The mode of the natural minor scale.
    pub const MINOR: DiatonicMode = DiatonicMode::Aeolian;

    /// Returns the offset of the mode from the Ionian mode.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the canonical name of the mode.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            DiatonicMode::Ionian => "Ionian",
            DiatonicMode::Dorian => "Dorian",
            DiatonicMode::Phrygian => "Phrygian",
            DiatonicMode::Lydian => "Lydian",
            DiatonicMode::Mixolydian => "Mixolydian",
            DiatonicMode::Aeolian => "Aeolian",
            DiatonicMode::Locrian => "Locrian",
        }
    }

    /// Returns the alternative name of the mode, or the canonical one if there's none.
    #[must_use]
    pub fn alternative_name(self) -> &'static str {
        match self {
            DiatonicMode::Ionian => "Major",
            DiatonicMode::Aeolian => "Minor",
            _ => self.name(),
        }
    }

    /// Returns the canonical name followed by the alternative one in parentheses, if any. For
    /// example, "Ionian (Major)" or "Dorian".
    #[must_use]
    pub fn combined_name(self) -> String {
        let name = self.name();
        let alternative_name = self.alternative_name();
        if name == alternative_name {
            name.to_string()
        } else {
            format!("{name} ({alternative_name})")
        }
    }

    /// Returns the solfège syllable of the major scale degree on which the mode starts.
    #[must_use]
    pub fn solfege(self) -> &'static str {
        match self {
            DiatonicMode::Ionian => "do",
            DiatonicMode::Dorian => "re",
            DiatonicMode::Phrygian => "mi",
            DiatonicMode::Lydian => "fa",
            DiatonicMode::Mixolydian => "sol",
            DiatonicMode::Aeolian => "la",
            DiatonicMode::Locrian => "ti",
        }
    }

    /// Returns the mode starting the given number of degrees after this one, wrapping from
    /// Locrian back to Ionian.
    #[must_use]
    pub fn advance(self, degrees: usize) -> DiatonicMode {
        MODES[(self.index() + degrees) % NUMBER_OF_MODES]
    }
}

impl TryFrom<i32> for DiatonicMode {
    type Error = MusicError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(|i| MODES.get(i).copied())
            .ok_or(MusicError::ModeOutOfRange(index))
    }
}

impl Display for DiatonicMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::error::ErrorKind;

    /// Verifies the names of the modes.
    #[test]
    fn names() {
        assert_eq!(DiatonicMode::Ionian.name(), "Ionian");
        assert_eq!(DiatonicMode::MAJOR.alternative_name(), "Major");
        assert_eq!(DiatonicMode::MINOR.alternative_name(), "Minor");
        assert_eq!(DiatonicMode::Dorian.alternative_name(), "Dorian");
        assert_eq!(DiatonicMode::Ionian.combined_name(), "Ionian (Major)");
        assert_eq!(DiatonicMode::Aeolian.combined_name(), "Aeolian (Minor)");
        assert_eq!(DiatonicMode::Locrian.combined_name(), "Locrian");
        assert_eq!(DiatonicMode::Mixolydian.to_string(), "Mixolydian");
    }

    /// Verifies converting integers into modes.
    #[test]
    fn try_from_index() {
        for (index, mode) in DiatonicMode::iter().enumerate() {
            assert_eq!(DiatonicMode::try_from(index as i32).unwrap(), mode);
            assert_eq!(mode.index(), index);
        }

        let error = DiatonicMode::try_from(99).unwrap_err();
        assert_eq!(error, MusicError::ModeOutOfRange(99));
        assert_eq!(error.kind(), ErrorKind::Range);
        assert!(DiatonicMode::try_from(-1).is_err());
        assert!(DiatonicMode::try_from(7).is_err());
    }

    /// Verifies parsing modes from their names and aliases regardless of case.
    #[test]
    fn parse() {
        assert_eq!("dorian".parse::<DiatonicMode>().unwrap(), DiatonicMode::Dorian);
        assert_eq!("LYDIAN".parse::<DiatonicMode>().unwrap(), DiatonicMode::Lydian);
        assert_eq!("major".parse::<DiatonicMode>().unwrap(), DiatonicMode::Ionian);
        assert_eq!("Minor".parse::<DiatonicMode>().unwrap(), DiatonicMode::Aeolian);
        assert!("blues".parse::<DiatonicMode>().is_err());
    }

    /// Verifies advancing through the modes.
    #[test]
    fn advance() {
        assert_eq!(DiatonicMode::Ionian.advance(0), DiatonicMode::Ionian);
        assert_eq!(DiatonicMode::Ionian.advance(1), DiatonicMode::Dorian);
        assert_eq!(DiatonicMode::Locrian.advance(1), DiatonicMode::Ionian);
        assert_eq!(DiatonicMode::Aeolian.advance(9), DiatonicMode::Ionian);
    }

    /// Verifies the solfège syllables of the modes.
    #[test]
    fn solfege() {
        let syllables: Vec<&str> = DiatonicMode::iter().map(DiatonicMode::solfege).collect();
        assert_eq!(syllables, vec!["do", "re", "mi", "fa", "sol", "la", "ti"]);
    }
}
