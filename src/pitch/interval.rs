// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Intervals: the twelve semitone distances inside an octave.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{wrap_index, Direction, PitchClass};
use crate::error::{TheoryError, TheoryResult};

/// Numeric degree labels, indexed by semitone count
pub const NUMERICS: [&str; 12] = [
    "1", "b2", "2", "b3", "3", "4", "b5", "5", "b6", "6", "b7", "7",
];

/// Descriptive labels, indexed by semitone count
pub const LABELS: [&str; 12] = [
    "Unison",
    "Minor 2nd",
    "Major 2nd",
    "Minor 3rd",
    "Major 3rd",
    "Perfect 4th",
    "Diminished 5th",
    "Perfect 5th",
    "Minor 6th",
    "Major 6th",
    "Minor 7th",
    "Major 7th",
];

/// Distance between two pitch classes, in semitones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Interval {
    Unison,
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    DiminishedFifth,
    PerfectFifth,
    MinorSixth,
    MajorSixth,
    MinorSeventh,
    MajorSeventh,
}

impl Interval {
    /// All intervals from unison to major 7th
    pub const ALL: [Interval; 12] = [
        Interval::Unison,
        Interval::MinorSecond,
        Interval::MajorSecond,
        Interval::MinorThird,
        Interval::MajorThird,
        Interval::PerfectFourth,
        Interval::DiminishedFifth,
        Interval::PerfectFifth,
        Interval::MinorSixth,
        Interval::MajorSixth,
        Interval::MinorSeventh,
        Interval::MajorSeventh,
    ];

    /// Number of semitones (0-11)
    pub fn semitones(self) -> u8 {
        self as u8
    }

    /// Interval from any integer, reduced modulo 12
    pub fn from_index(index: i32) -> Self {
        Interval::ALL[wrap_index(index)]
    }

    /// Interval from a numeric degree such as "b3" or "5"
    pub fn from_numeric(numeric: &str) -> TheoryResult<Self> {
        NUMERICS
            .iter()
            .position(|&n| n == numeric)
            .map(|i| Interval::ALL[i])
            .ok_or_else(|| TheoryError::UnknownNumeric(numeric.to_string()))
    }

    /// Numeric degree, with "b" for flattened degrees
    pub fn to_numeric(self) -> &'static str {
        NUMERICS[self as usize]
    }

    /// Descriptive label, e.g. "Perfect 5th"
    pub fn label(self) -> &'static str {
        LABELS[self as usize]
    }

    /// All descriptive labels in semitone order
    pub fn labels() -> &'static [&'static str; 12] {
        &LABELS
    }

    /// Short name, e.g. "m3", "P5", "dim5"
    pub fn short_name(self) -> &'static str {
        match self {
            Interval::Unison => "Unison",
            Interval::MinorSecond => "m2",
            Interval::MajorSecond => "M2",
            Interval::MinorThird => "m3",
            Interval::MajorThird => "M3",
            Interval::PerfectFourth => "P4",
            Interval::DiminishedFifth => "dim5",
            Interval::PerfectFifth => "P5",
            Interval::MinorSixth => "m6",
            Interval::MajorSixth => "M6",
            Interval::MinorSeventh => "m7",
            Interval::MajorSeventh => "M7",
        }
    }

    /// The interval that completes this one to an octave
    pub fn inversion(self) -> Self {
        Interval::from_index(-(self.semitones() as i32))
    }

    /// A random interval drawn from `rng`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Interval::ALL[rng.gen_range(0..Interval::ALL.len())]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Join interval short names with ", "
pub fn intervals_to_string(intervals: &[Interval]) -> String {
    intervals
        .iter()
        .map(|i| i.short_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Forward distance from `first` to `second` moving in `direction`.
///
/// A perfect 5th up is a perfect 4th down, so for distinct notes the up and
/// down distances always add to an octave.
pub fn interval_distance(first: PitchClass, second: PitchClass, direction: Direction) -> Interval {
    match direction {
        Direction::Up => Interval::from_index(second.index() as i32 - first.index() as i32),
        Direction::Down => interval_distance(first, second, direction.reverse()).inversion(),
    }
}
