// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale kinds and the three formula tables they are defined in.
//!
//! Every built-in kind appears in exactly one table. The tables are
//! consulted in a fixed order (intervals, then steps, then numerics) by
//! [`ScaleFormula::for_kind`](super::ScaleFormula::for_kind).

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Step;
use crate::error::TheoryError;
use crate::pitch::Interval;

use Interval::*;
use Step::{Half as H, Whole as W};

/// Scale types supported by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleKind {
    Major,
    Minor,

    // Pentatonic scales
    MajorPentatonic,
    MinorPentatonic,

    // Modes
    Ionian,     // Major
    Dorian,     // Minor with raised 6th
    Phrygian,   // Minor with lowered 2nd
    Lydian,     // Major with raised 4th
    Mixolydian, // Major with lowered 7th
    Aeolian,    // Minor
    Locrian,

    Blues,
    HarmonicMinor,
    MelodicMinor, // Ascending form

    // Built from a caller-supplied formula; has no table entry
    Custom,
}

impl ScaleKind {
    /// Every kind that has a built-in formula
    pub const ALL: [ScaleKind; 14] = [
        ScaleKind::Major,
        ScaleKind::Minor,
        ScaleKind::MajorPentatonic,
        ScaleKind::MinorPentatonic,
        ScaleKind::Ionian,
        ScaleKind::Dorian,
        ScaleKind::Phrygian,
        ScaleKind::Lydian,
        ScaleKind::Mixolydian,
        ScaleKind::Aeolian,
        ScaleKind::Locrian,
        ScaleKind::Blues,
        ScaleKind::HarmonicMinor,
        ScaleKind::MelodicMinor,
    ];

    /// Interval-formula table
    pub fn interval_formula(self) -> Option<&'static [Interval]> {
        match self {
            ScaleKind::MajorPentatonic => Some(&[Unison, MajorSecond, MajorThird, PerfectFifth, MajorSixth]),
            ScaleKind::MinorPentatonic => Some(&[Unison, MinorThird, PerfectFourth, PerfectFifth, MinorSeventh]),
            _ => None,
        }
    }

    /// Step-formula table; the last step always closes the octave
    pub fn step_formula(self) -> Option<&'static [Step]> {
        match self {
            ScaleKind::Major | ScaleKind::Ionian => Some(&[W, W, H, W, W, W, H]),
            ScaleKind::Minor | ScaleKind::Aeolian => Some(&[W, H, W, W, H, W, W]),
            ScaleKind::Dorian => Some(&[W, H, W, W, W, H, W]),
            ScaleKind::Phrygian => Some(&[H, W, W, W, H, W, W]),
            ScaleKind::Lydian => Some(&[W, W, W, H, W, W, H]),
            ScaleKind::Mixolydian => Some(&[W, W, H, W, W, H, W]),
            ScaleKind::Locrian => Some(&[H, W, W, H, W, W, W]),
            _ => None,
        }
    }

    /// Numeric-formula table
    pub fn numeric_formula(self) -> Option<&'static [&'static str]> {
        match self {
            ScaleKind::Blues => Some(&["1", "b3", "4", "b5", "5", "b7"]),
            ScaleKind::HarmonicMinor => Some(&["1", "2", "b3", "4", "5", "b6", "7"]),
            ScaleKind::MelodicMinor => Some(&["1", "2", "b3", "4", "5", "6", "7"]),
            _ => None,
        }
    }

    /// Get a human-readable name for this scale type
    pub fn name(self) -> &'static str {
        match self {
            ScaleKind::Major => "Major",
            ScaleKind::Minor => "Minor",
            ScaleKind::MajorPentatonic => "Major Pentatonic",
            ScaleKind::MinorPentatonic => "Minor Pentatonic",
            ScaleKind::Ionian => "Ionian",
            ScaleKind::Dorian => "Dorian",
            ScaleKind::Phrygian => "Phrygian",
            ScaleKind::Lydian => "Lydian",
            ScaleKind::Mixolydian => "Mixolydian",
            ScaleKind::Aeolian => "Aeolian",
            ScaleKind::Locrian => "Locrian",
            ScaleKind::Blues => "Blues",
            ScaleKind::HarmonicMinor => "Harmonic Minor",
            ScaleKind::MelodicMinor => "Melodic Minor",
            ScaleKind::Custom => "Custom",
        }
    }

    /// A random built-in kind drawn from `rng`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        ScaleKind::ALL[rng.gen_range(0..ScaleKind::ALL.len())]
    }
}

impl FromStr for ScaleKind {
    type Err = TheoryError;

    /// Parse a scale kind, ignoring case, spaces, dashes and underscores
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "major" => Ok(ScaleKind::Major),
            "minor" | "naturalminor" => Ok(ScaleKind::Minor),
            "majorpentatonic" | "pentatonicmajor" => Ok(ScaleKind::MajorPentatonic),
            "minorpentatonic" | "pentatonicminor" | "pentatonic" => Ok(ScaleKind::MinorPentatonic),
            "ionian" => Ok(ScaleKind::Ionian),
            "dorian" => Ok(ScaleKind::Dorian),
            "phrygian" => Ok(ScaleKind::Phrygian),
            "lydian" => Ok(ScaleKind::Lydian),
            "mixolydian" => Ok(ScaleKind::Mixolydian),
            "aeolian" => Ok(ScaleKind::Aeolian),
            "locrian" => Ok(ScaleKind::Locrian),
            "blues" | "minorblues" => Ok(ScaleKind::Blues),
            "harmonicminor" => Ok(ScaleKind::HarmonicMinor),
            "melodicminor" => Ok(ScaleKind::MelodicMinor),
            _ => Err(TheoryError::UnknownScaleKind(s.to_string())),
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
