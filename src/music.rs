//! Contains the types and functions that model Western tonal music: notes, intervals, pitches,
//! modes, and scales.

pub mod circle_fifths;
pub mod intervals;
pub mod modes;
pub mod notes;
pub mod pitches;
pub mod scales;
