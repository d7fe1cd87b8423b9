//! Walks the circle of fifths and lists the diatonic scales of a mode for every key signature from
//! six flats to six sharps.

use anyhow::{Context, Result};

use crate::error::MusicError;
use crate::music::{
    intervals::Interval,
    modes::DiatonicMode,
    notes::Note,
    scales::{DEFAULT_OCTAVE, DiatonicScale, Scale},
};

/// The largest number of sharps or flats included in the circle.
const MAX_ACCIDENTALS: i32 = 6;

/// The width of the column taken by each note when rendering the circle.
const NOTE_COLUMN_WIDTH: usize = 3;

impl Note {
    /// Returns the note obtained by moving clockwise through the circle of fifths, that is, the
    /// note a perfect fifth above.
    pub fn clockwise(&self) -> Result<Note, MusicError> {
        self.transpose(Interval::PERFECT_FIFTH)
    }

    /// Returns the note obtained by moving counter-clockwise through the circle of fifths, that
    /// is, the note a perfect fifth below.
    pub fn counter_clockwise(&self) -> Result<Note, MusicError> {
        self.transpose(-Interval::PERFECT_FIFTH)
    }
}

/// Returns the scales of the given mode for each key signature, from six flats to six sharps. Each
/// scale is paired with its signature, which is negative for flats.
pub fn circle_of_fifths(mode: DiatonicMode) -> Result<Vec<(i32, DiatonicScale)>> {
    // The key with six flats is the degree of G♭ major on which the mode starts.
    let g_flat_major = DiatonicScale::new(Note::G_FLAT, DiatonicMode::MAJOR)?;
    let mut key = g_flat_major
        .pitches_ascending(DEFAULT_OCTAVE)
        .nth(mode.index())
        .map(|pitch| pitch.note())
        .context("missing degree of the G♭ major scale")?;

    let mut scales = Vec::new();
    for signature in -MAX_ACCIDENTALS..=MAX_ACCIDENTALS {
        let scale = DiatonicScale::new(key, mode)
            .with_context(|| format!("cannot build the {mode} scale with key {key}"))?;
        scales.push((signature, scale));
        key = key.clockwise()?;
    }
    Ok(scales)
}

/// Returns the label shown before the scale with the given key signature.
fn signature_label(signature: i32) -> String {
    match signature {
        0 => " ".repeat(5),
        s if s < 0 => format!("[{}b] ", -s),
        s => format!("[{s}#] "),
    }
}

/// Returns the circle of fifths of the given mode as a text table with one scale per line.
pub fn render_circle_of_fifths(mode: DiatonicMode) -> Result<String> {
    let title = format!("Circle of {} scales", mode.combined_name());
    let mut output = format!("{title}\n{}\n\n", "-".repeat(title.chars().count()));

    for (signature, scale) in circle_of_fifths(mode)? {
        let notes: Vec<String> = scale.notes().iter().map(Note::to_string).collect();
        output.push_str(&signature_label(signature));
        for (index, note) in notes.iter().enumerate() {
            output.push_str(note);
            if index + 1 < notes.len() {
                output.push(',');
                output.push_str(&" ".repeat(NOTE_COLUMN_WIDTH.saturating_sub(note.len())));
            }
        }
        output.push('\n');
    }
    Ok(output)
}
