//! Generates scale exercises on the guitar fretboard and evaluates the answers to them.
//!
//! Each exercise lays out one octave of a diatonic scale following one of a few fingering patterns
//! and asks either for the degree of one of the notes or for the name of the scale. The scale
//! always uses the same key note, so the actual key is decided by the position of the pattern on
//! the fretboard.

use anyhow::{Context, Result, bail};
use derive_builder::Builder;
use log::debug;
use rand::{Rng, seq::IteratorRandom};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    guitar::Guitar,
    music::{
        modes::{DiatonicMode, NUMBER_OF_MODES},
        notes::Note,
        pitches::Pitch,
        scales::{DiatonicScale, Scale},
    },
    practice_stats::PracticeStats,
};

/// The shape in which the notes of one octave of a scale are laid out on the fretboard.
#[derive(Clone, Copy, Debug, Deserialize, Display, EnumIter, Eq, Hash, PartialEq, Serialize)]
pub enum Pattern {
    /// All seven notes on one string.
    SingleString,

    /// Three notes on a string and four on the next one.
    TwoStringsA,

    /// Four notes on a string and three on the next one.
    TwoStringsB,

    /// Three notes on each of three consecutive strings. The eighth note is the octave of the first
    /// and the last one is the degree above it.
    ThreeStrings,
}

impl Pattern {
    /// Returns the number of notes played on each string, starting from the lowest string.
    #[must_use]
    pub fn notes_per_string(self) -> &'static [usize] {
        match self {
            Pattern::SingleString => &[7],
            Pattern::TwoStringsA => &[3, 4],
            Pattern::TwoStringsB => &[4, 3],
            Pattern::ThreeStrings => &[3, 3, 3],
        }
    }

    #[must_use]
    pub fn number_of_strings(self) -> usize {
        self.notes_per_string().len()
    }
}

/// Returns the frets at which the notes of the pattern are played on each string when the pattern
/// starts on the given string, along with the highest fret. The frets are relative to the position
/// of the pattern, so the lowest one is always zero.
#[must_use]
pub fn fret_numbers(
    pattern: Pattern,
    guitar: &Guitar,
    string_number: usize,
    scale: &DiatonicScale,
) -> (Vec<Vec<usize>>, usize) {
    let mut intervals = scale.intervals_ascending();
    let mut fret: i32 = 0;
    let mut frets: Vec<Vec<i32>> = Vec::with_capacity(pattern.number_of_strings());
    for (offset, notes) in pattern.notes_per_string().iter().enumerate() {
        let mut string_frets = Vec::with_capacity(*notes);
        for interval in intervals.by_ref().take(*notes) {
            string_frets.push(fret);
            fret += interval.semitones();
        }
        frets.push(string_frets);

        // The next string starts higher, so the same pitch sits on a lower fret.
        if let Some(interval) = guitar.string_intervals().get(string_number + offset) {
            fret -= interval.semitones();
        }
    }

    let lowest_fret = frets.iter().flatten().copied().min().unwrap_or(0).min(0);
    let frets: Vec<Vec<usize>> = frets
        .iter()
        .map(|string_frets| {
            string_frets
                .iter()
                .map(|fret| (fret - lowest_fret).unsigned_abs() as usize)
                .collect()
        })
        .collect();
    let max_fret = frets.iter().flatten().copied().max().unwrap_or(0);
    (frets, max_fret)
}

/// The question asked by an exercise.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Question {
    /// Asks for the scale degree of the note at the given indices of the pattern.
    Degree {
        /// The index of the string among the strings of the pattern.
        string_index: usize,

        /// The index of the note among the notes on that string.
        note_index: usize,
    },

    /// Asks for the key and mode of the scale.
    ScaleName,
}

impl Question {
    /// Returns the text shown to ask the question.
    #[must_use]
    pub fn prompt(&self) -> &'static str {
        match self {
            Question::Degree { .. } => "Enter scale degree: ",
            Question::ScaleName => "Enter scale name: ",
        }
    }
}

/// The options used to generate exercises.
#[derive(Builder, Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PracticeOptions {
    /// The probability that an exercise asks for a scale degree instead of the scale name.
    #[builder(default = "0.9")]
    pub degree_question_probability: f64,

    /// The key note of the generated scales.
    #[builder(default = "Note::C")]
    pub key_note: Note,
}

impl Default for PracticeOptions {
    fn default() -> Self {
        PracticeOptions {
            degree_question_probability: 0.9,
            key_note: Note::C,
        }
    }
}

impl PracticeOptions {
    /// Reads the options from their JSON representation. Missing fields take their default
    /// values.
    pub fn from_json(json: &str) -> Result<PracticeOptions> {
        serde_json::from_str(json).context("failed to parse the practice options")
    }
}

/// Normalizes an answer so that it can be compared regardless of case and spacing.
fn normalize_answer(answer: &str) -> String {
    answer
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// A scale laid out on the fretboard along with a question about it.
#[derive(Clone, Debug, PartialEq)]
pub struct Exercise {
    /// The scale whose notes are laid out.
    pub scale: DiatonicScale,

    /// The pattern used to lay out the notes.
    pub pattern: Pattern,

    /// The lowest string used by the pattern.
    pub string_number: usize,

    /// The frets of the notes on each string of the pattern, relative to the position.
    pub fret_numbers: Vec<Vec<usize>>,

    /// The question asked about the scale.
    pub question: Question,

    /// The fret on which the pattern starts.
    pub position: usize,
}

impl Exercise {
    /// Returns a new exercise after checking that the pattern fits on the fretboard and that the
    /// question refers to a note of the pattern.
    pub fn new(
        guitar: &Guitar,
        scale: DiatonicScale,
        pattern: Pattern,
        string_number: usize,
        question: Question,
        position: usize,
    ) -> Result<Exercise> {
        if string_number + pattern.number_of_strings() > guitar.number_of_strings() {
            bail!(
                "pattern {pattern} starting on string {string_number} does not fit on a guitar \
                 with {} strings",
                guitar.number_of_strings()
            );
        }

        let (fret_numbers, max_fret) = fret_numbers(pattern, guitar, string_number, &scale);
        if position + max_fret > guitar.number_of_frets() {
            bail!(
                "pattern {pattern} at position {position} does not fit on a guitar with {} frets",
                guitar.number_of_frets()
            );
        }

        if let Question::Degree {
            string_index,
            note_index,
        } = question
        {
            let notes = pattern.notes_per_string();
            if string_index >= notes.len() || note_index >= notes[string_index] {
                bail!("pattern {pattern} has no note at ({string_index}, {note_index})");
            }
        }

        Ok(Exercise {
            scale,
            pattern,
            string_number,
            fret_numbers,
            question,
            position,
        })
    }

    /// Returns a random exercise for the given guitar.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        guitar: &Guitar,
        options: &PracticeOptions,
    ) -> Result<Exercise> {
        let probability = options.degree_question_probability;
        if !(0.0..=1.0).contains(&probability) {
            bail!("degree question probability {probability} is not between 0 and 1");
        }

        let mode = DiatonicMode::try_from(rng.random_range(0..NUMBER_OF_MODES as i32))?;
        let scale = DiatonicScale::new(options.key_note, mode)
            .with_context(|| format!("cannot practice scales with key {}", options.key_note))?;

        let pattern = Pattern::iter()
            .filter(|pattern| pattern.number_of_strings() <= guitar.number_of_strings())
            .choose(rng)
            .context("no pattern fits on the guitar")?;
        let string_number =
            rng.random_range(0..=guitar.number_of_strings() - pattern.number_of_strings());

        let (fret_numbers, max_fret) = fret_numbers(pattern, guitar, string_number, &scale);
        if max_fret > guitar.number_of_frets() {
            bail!(
                "pattern {pattern} spans {max_fret} frets but the guitar only has {}",
                guitar.number_of_frets()
            );
        }

        let question = if rng.random_bool(probability) {
            let string_index = rng.random_range(0..fret_numbers.len());
            let note_index = rng.random_range(0..fret_numbers[string_index].len());
            Question::Degree {
                string_index,
                note_index,
            }
        } else {
            Question::ScaleName
        };
        let position = rng.random_range(0..=guitar.number_of_frets() - max_fret);

        debug!(
            "generated exercise: {} with pattern {pattern} on string {string_number} at position \
             {position}, question {question:?}",
            scale.name()
        );
        Ok(Exercise {
            scale,
            pattern,
            string_number,
            fret_numbers,
            question,
            position,
        })
    }

    /// Returns the highest fret used by the pattern, relative to the position.
    #[must_use]
    pub fn max_fret(&self) -> usize {
        self.fret_numbers
            .iter()
            .flatten()
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Returns the scale degree of the questioned note, named after the mode which starts on it,
    /// or `None` if the exercise asks for the scale name.
    #[must_use]
    pub fn expected_degree(&self) -> Option<DiatonicMode> {
        match self.question {
            Question::Degree {
                string_index,
                note_index,
            } => {
                let notes_before: usize = self
                    .fret_numbers
                    .iter()
                    .take(string_index)
                    .map(Vec::len)
                    .sum();
                Some(self.scale.mode().advance(notes_before + note_index))
            }
            Question::ScaleName => None,
        }
    }

    /// Returns the pitch of the first note of the pattern, which is the key of the scale as played.
    pub fn key_pitch(&self, guitar: &Guitar) -> Result<Pitch> {
        let first_fret = self
            .fret_numbers
            .first()
            .and_then(|frets| frets.first())
            .context("the exercise has no notes")?;
        guitar
            .pitch(self.string_number, self.position + first_fret)
            .context("the exercise does not fit on the guitar")
    }

    /// Returns the fretboard diagram of the exercise, drawing the highest string at the top.
    pub fn render(&self, guitar: &Guitar) -> Result<String> {
        let max_fret = self.max_fret();
        let mut output = String::new();
        for string in (0..guitar.number_of_strings()).rev() {
            let open_note = guitar.pitch(string, 0)?.note().to_string();
            output.push_str(&format!("{open_note:<3}-|"));

            let pattern_string = string
                .checked_sub(self.string_number)
                .filter(|index| *index < self.fret_numbers.len());
            let frets = pattern_string.map_or(&[][..], |index| &self.fret_numbers[index][..]);
            let question_fret = match (self.question, pattern_string) {
                (
                    Question::Degree {
                        string_index,
                        note_index,
                    },
                    Some(index),
                ) if string_index == index => frets.get(note_index).copied(),
                _ => None,
            };

            for fret in 0..=max_fret {
                let mark = if question_fret == Some(fret) {
                    '?'
                } else if frets.contains(&fret) {
                    'O'
                } else {
                    '-'
                };
                output.push('-');
                output.push(mark);
                output.push_str("-|");
            }
            output.push_str("-\n");
        }
        output.push_str(&format!("{}{:>2}\n", " ".repeat(5), self.position));
        Ok(output)
    }

    /// Returns whether the answer is correct. Degree questions are answered with the solfège
    /// syllable of the degree or its first letter. Scale name questions are answered with the key
    /// and the mode, such as "Eb Dorian" or "d# minor". Case and extra spaces are ignored.
    pub fn evaluate(&self, guitar: &Guitar, answer: &str) -> Result<bool> {
        let answer = normalize_answer(answer);
        match self.expected_degree() {
            Some(degree) => {
                let syllable = degree.solfege();
                Ok(answer == syllable || answer == syllable[..1])
            }
            None => {
                let key = self.key_pitch(guitar)?.note();
                let mode = self.scale.mode();
                let keys = [key, key.invert()?];
                let modes = [mode.name(), mode.alternative_name()];
                Ok(keys.iter().any(|key| {
                    modes
                        .iter()
                        .any(|mode| answer == normalize_answer(&format!("{key} {mode}")))
                }))
            }
        }
    }
}

/// A sequence of exercises along with the statistics of the answers given to them.
pub struct PracticeSession<R: Rng> {
    /// The guitar on which the exercises are played.
    guitar: Guitar,

    /// The options used to generate the exercises.
    options: PracticeOptions,

    /// The source of randomness used to generate the exercises.
    rng: R,

    /// The statistics of the session.
    stats: PracticeStats,

    /// The exercise being answered, if any.
    exercise: Option<Exercise>,
}

impl<R: Rng> PracticeSession<R> {
    /// Returns a new session starting now.
    pub fn new(guitar: Guitar, options: PracticeOptions, rng: R) -> PracticeSession<R> {
        PracticeSession {
            guitar,
            options,
            rng,
            stats: PracticeStats::new(),
            exercise: None,
        }
    }

    /// Generates the next exercise and makes it the current one.
    pub fn next_exercise(&mut self) -> Result<&Exercise> {
        let exercise = Exercise::generate(&mut self.rng, &self.guitar, &self.options)?;
        Ok(&*self.exercise.insert(exercise))
    }

    /// Evaluates an answer to the current exercise and records the result. The exercise stays the
    /// current one until the next one is generated, so it can be answered again after a mistake.
    pub fn answer(&mut self, answer: &str) -> Result<bool> {
        let exercise = self
            .exercise
            .as_ref()
            .context("there is no exercise to answer")?;
        let correct = exercise.evaluate(&self.guitar, answer)?;
        self.stats.record_answer(correct);
        Ok(correct)
    }

    #[must_use]
    pub fn exercise(&self) -> Option<&Exercise> {
        self.exercise.as_ref()
    }

    #[must_use]
    pub fn guitar(&self) -> &Guitar {
        &self.guitar
    }

    #[must_use]
    pub fn stats(&self) -> &PracticeStats {
        &self.stats
    }
}
