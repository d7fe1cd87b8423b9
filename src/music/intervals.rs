//! Defines the musical intervals.

use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result},
    ops::Neg,
};

use crate::music::notes::NATURAL_NOTES_PER_OCTAVE;

/// The number of semitones in an octave.
pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// The number of diatonic steps in an octave.
pub const STEPS_PER_OCTAVE: i32 = NATURAL_NOTES_PER_OCTAVE;

/// The distance between two pitches.
///
/// An interval is measured both in semitones and in diatonic steps, that is, in the number of
/// letters the spelling moves. The steps decide how the destination of an interval is spelled: a
/// minor third and an augmented second both span three semitones, but the first one moves two
/// letters up (C to E♭) and the second only one (C to D♯). Both measures are signed, and
/// descending intervals are negative.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Interval {
    /// The number of semitones covered by the interval.
    semitones: i32,

    /// The number of letters covered by the interval. Zero is a unison, one a second, and so on.
    steps: i32,
}

/// The common simple intervals and their names, used to display them.
const INTERVAL_NAMES: [(Interval, &str); 15] = [
    (Interval::UNISON, "Unison"),
    (Interval::AUGMENTED_UNISON, "Augmented Unison"),
    (Interval::MINOR_SECOND, "Minor Second"),
    (Interval::MAJOR_SECOND, "Major Second"),
    (Interval::MINOR_THIRD, "Minor Third"),
    (Interval::MAJOR_THIRD, "Major Third"),
    (Interval::PERFECT_FOURTH, "Perfect Fourth"),
    (Interval::AUGMENTED_FOURTH, "Augmented Fourth"),
    (Interval::DIMINISHED_FIFTH, "Diminished Fifth"),
    (Interval::PERFECT_FIFTH, "Perfect Fifth"),
    (Interval::MINOR_SIXTH, "Minor Sixth"),
    (Interval::MAJOR_SIXTH, "Major Sixth"),
    (Interval::MINOR_SEVENTH, "Minor Seventh"),
    (Interval::MAJOR_SEVENTH, "Major Seventh"),
    (Interval::OCTAVE, "Octave"),
];

#[allow(missing_docs)]
impl Interval {
    pub const UNISON: Interval = Interval::new(0, 0);
    pub const AUGMENTED_UNISON: Interval = Interval::new(1, 0);
    pub const MINOR_SECOND: Interval = Interval::new(1, 1);
    pub const MAJOR_SECOND: Interval = Interval::new(2, 1);
    pub const MINOR_THIRD: Interval = Interval::new(3, 2);
    pub const MAJOR_THIRD: Interval = Interval::new(4, 2);
    pub const PERFECT_FOURTH: Interval = Interval::new(5, 3);
    pub const AUGMENTED_FOURTH: Interval = Interval::new(6, 3);
    pub const DIMINISHED_FIFTH: Interval = Interval::new(6, 4);
    pub const PERFECT_FIFTH: Interval = Interval::new(7, 4);
    pub const MINOR_SIXTH: Interval = Interval::new(8, 5);
    pub const MAJOR_SIXTH: Interval = Interval::new(9, 5);
    pub const MINOR_SEVENTH: Interval = Interval::new(10, 6);
    pub const MAJOR_SEVENTH: Interval = Interval::new(11, 6);
    pub const OCTAVE: Interval = Interval::new(SEMITONES_PER_OCTAVE, STEPS_PER_OCTAVE);

    /// Returns a new interval covering the given number of semitones and diatonic steps.
    #[must_use]
    pub const fn new(semitones: i32, steps: i32) -> Interval {
        Interval { semitones, steps }
    }

    #[must_use]
    pub fn semitones(&self) -> i32 {
        self.semitones
    }

    #[must_use]
    pub fn steps(&self) -> i32 {
        self.steps
    }

    /// Returns the diatonic number of the interval as musicians count it: a unison is 1, a second
    /// is 2, an octave is 8, and a descending third is -3.
    #[must_use]
    pub fn number(&self) -> i32 {
        if self.steps >= 0 {
            self.steps + 1
        } else {
            self.steps - 1
        }
    }

    /// Returns whether the interval moves down.
    #[must_use]
    pub fn is_descending(&self) -> bool {
        self.steps < 0 || (self.steps == 0 && self.semitones < 0)
    }

    /// Returns the name of the interval if it is one of the common simple intervals, ignoring its
    /// direction.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        let ascending = if self.is_descending() { -*self } else { *self };
        INTERVAL_NAMES
            .iter()
            .find(|(interval, _)| *interval == ascending)
            .map(|(_, name)| *name)
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        Interval::new(-self.semitones, -self.steps)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match (self.name(), self.is_descending()) {
            (Some(name), false) => write!(f, "{name}"),
            (Some(name), true) => write!(f, "Descending {name}"),
            (None, _) => write!(f, "{} steps, {} semitones", self.steps, self.semitones),
        }
    }
}
