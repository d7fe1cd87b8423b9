//! Models the fretboard of a guitar as one chromatic scale per string.

use anyhow::{Context, Result};
use derive_builder::Builder;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::GuitarError;
use crate::music::{
    intervals::{Interval, SEMITONES_PER_OCTAVE},
    notes::Note,
    pitches::Pitch,
    scales::{ChromaticScale, Scale},
};

/// The options used to build a guitar.
#[derive(Builder, Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuitarConfig {
    /// The pitch of the lowest open string.
    #[builder(default = "Guitar::DEFAULT_TUNING_PITCH")]
    pub tuning_pitch: Pitch,

    /// The intervals between each string and the one below it, starting from the lowest string.
    /// The guitar has one more string than intervals.
    #[builder(default = "Guitar::DEFAULT_STRING_INTERVALS.to_vec()")]
    pub string_intervals: Vec<Interval>,

    /// The number of frets. Fret zero is the open string and is not counted.
    #[builder(default = "Guitar::DEFAULT_NUMBER_OF_FRETS")]
    pub number_of_frets: usize,
}

impl Default for GuitarConfig {
    /// Returns the configuration of a six-string guitar in standard tuning with 24 frets.
    fn default() -> Self {
        GuitarConfig {
            tuning_pitch: Guitar::DEFAULT_TUNING_PITCH,
            string_intervals: Guitar::DEFAULT_STRING_INTERVALS.to_vec(),
            number_of_frets: Guitar::DEFAULT_NUMBER_OF_FRETS,
        }
    }
}

impl GuitarConfig {
    /// Reads the configuration from its JSON representation. Missing fields take their default
    /// values.
    pub fn from_json(json: &str) -> Result<GuitarConfig> {
        serde_json::from_str(json).context("failed to parse the guitar configuration")
    }
}

/// A guitar with a given tuning and number of frets. String zero is the lowest string.
#[derive(Clone, Debug)]
pub struct Guitar {
    /// The configuration used to build the guitar.
    config: GuitarConfig,

    /// The chromatic scale of each string, starting at its open note, and the octave in which the
    /// scale starts.
    strings: Vec<(ChromaticScale, i32)>,
}

impl Guitar {
    /// The number of frets of a guitar unless configured otherwise.
    pub const DEFAULT_NUMBER_OF_FRETS: usize = 24;

    /// The pitch of the lowest string in standard tuning.
    pub const DEFAULT_TUNING_PITCH: Pitch = Pitch::new(Note::E, 2);

    /// The intervals between the strings in standard tuning.
    pub const DEFAULT_STRING_INTERVALS: [Interval; 5] = [
        Interval::PERFECT_FOURTH,
        Interval::PERFECT_FOURTH,
        Interval::PERFECT_FOURTH,
        Interval::MAJOR_THIRD,
        Interval::PERFECT_FOURTH,
    ];

    /// Returns a new guitar with the given configuration. Fails if there are no string intervals
    /// or if the pitch of a string cannot be spelled.
    pub fn new(config: GuitarConfig) -> Result<Guitar, GuitarError> {
        if config.string_intervals.is_empty() {
            return Err(GuitarError::NoStringIntervals);
        }

        let mut open_pitch = config.tuning_pitch;
        let mut open_pitches = vec![open_pitch];
        for (index, interval) in config.string_intervals.iter().enumerate() {
            open_pitch = open_pitch
                .transpose(*interval)
                .map_err(|e| GuitarError::Tuning(index + 1, e))?;
            open_pitches.push(open_pitch);
        }

        // The chromatic scale respells the open note, so its octave is recomputed from the
        // absolute number to keep B♯ and C♭ strings in the right octave.
        let strings = open_pitches
            .iter()
            .map(|pitch| {
                (
                    ChromaticScale::new(pitch.note()),
                    pitch.absolute_number().div_euclid(SEMITONES_PER_OCTAVE),
                )
            })
            .collect();
        debug!(
            "tuned guitar to {} with {} frets",
            open_pitches
                .iter()
                .map(Pitch::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            config.number_of_frets
        );

        Ok(Guitar { config, strings })
    }

    /// Returns the pitch played at the given fret of the given string.
    pub fn pitch(&self, string: usize, fret: usize) -> Result<Pitch, GuitarError> {
        let (scale, octave) = self
            .strings
            .get(string)
            .ok_or(GuitarError::StringOutOfRange(string, self.number_of_strings()))?;
        if fret > self.config.number_of_frets {
            return Err(GuitarError::FretOutOfRange(fret, self.config.number_of_frets));
        }
        scale
            .pitches_ascending(*octave)
            .nth(fret)
            .ok_or(GuitarError::FretOutOfRange(fret, self.config.number_of_frets))
    }

    #[must_use]
    pub fn number_of_strings(&self) -> usize {
        self.strings.len()
    }

    #[must_use]
    pub fn number_of_frets(&self) -> usize {
        self.config.number_of_frets
    }

    #[must_use]
    pub fn tuning_pitch(&self) -> Pitch {
        self.config.tuning_pitch
    }

    #[must_use]
    pub fn string_intervals(&self) -> &[Interval] {
        &self.config.string_intervals
    }
}
