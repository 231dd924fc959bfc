// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch substrate: pitch classes, intervals and their modular arithmetic.
//!
//! Everything here lives in the cyclic group of 12 semitones. Octaves are
//! not modelled and enharmonic spellings are not distinguished.

pub mod direction;
pub mod interval;
pub mod note;

pub use direction::Direction;
pub use interval::{interval_distance, intervals_to_string, Interval};
pub use note::{chromatic_notes, notes_from_string, notes_to_string, transpose, PitchClass};

/// Number of pitch classes in an octave.
pub const SEMITONES: i32 = 12;

/// Reduce any integer to the range 0-11 with true modulo semantics.
pub(crate) fn wrap_index(index: i32) -> usize {
    index.rem_euclid(SEMITONES) as usize
}
