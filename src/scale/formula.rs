// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale formulas and their reduction to interval form.
//!
//! A scale can be written as explicit intervals (Unison M2 M3 P5 M6), as
//! whole/half steps (w w h w w w h) or as numeric degrees (1 b3 4 b5 5 b7).
//! All three reduce to an ordered interval list starting at the root.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ScaleKind;
use crate::error::{TheoryError, TheoryResult};
use crate::pitch::{intervals_to_string, Interval};

/// A half or whole step between adjacent scale notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[serde(alias = "h")]
    Half,
    #[serde(alias = "w")]
    Whole,
}

impl Step {
    /// Semitones covered by this step
    pub fn semitones(self) -> u8 {
        match self {
            Step::Half => 1,
            Step::Whole => 2,
        }
    }
}

impl FromStr for Step {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "h" | "half" => Ok(Step::Half),
            "w" | "whole" => Ok(Step::Whole),
            _ => Err(TheoryError::UnknownStep(s.to_string())),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Half => write!(f, "h"),
            Step::Whole => write!(f, "w"),
        }
    }
}

/// The formula a scale is created from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleFormula {
    /// Explicit intervals from the root
    Intervals(Vec<Interval>),
    /// Whole/half steps; the last one closes the octave
    Steps(Vec<Step>),
    /// Numeric degrees such as "1", "b3", "5"
    Numerics(Vec<String>),
}

impl ScaleFormula {
    /// Look up the built-in formula for `kind`.
    ///
    /// Tables are checked in priority order: intervals, steps, numerics.
    /// Returns `None` for kinds in none of them.
    pub fn for_kind(kind: ScaleKind) -> Option<Self> {
        if let Some(intervals) = kind.interval_formula() {
            Some(ScaleFormula::Intervals(intervals.to_vec()))
        } else if let Some(steps) = kind.step_formula() {
            Some(ScaleFormula::Steps(steps.to_vec()))
        } else {
            kind.numeric_formula()
                .map(|numerics| ScaleFormula::Numerics(numerics.iter().map(|n| n.to_string()).collect()))
        }
    }

    /// Name of the encoding, for logs
    pub fn encoding(&self) -> &'static str {
        match self {
            ScaleFormula::Intervals(_) => "intervals",
            ScaleFormula::Steps(_) => "steps",
            ScaleFormula::Numerics(_) => "numerics",
        }
    }

    /// Reduce to an interval formula, root (unison) first
    pub fn to_intervals(&self) -> TheoryResult<Vec<Interval>> {
        match self {
            ScaleFormula::Intervals(intervals) => Ok(intervals.clone()),
            ScaleFormula::Steps(steps) => Ok(intervals_from_steps(steps)),
            ScaleFormula::Numerics(numerics) => numerics
                .iter()
                .map(|n| Interval::from_numeric(n))
                .collect(),
        }
    }
}

impl fmt::Display for ScaleFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleFormula::Intervals(intervals) => write!(f, "{}", intervals_to_string(intervals)),
            ScaleFormula::Steps(steps) => {
                let steps: Vec<String> = steps.iter().map(|s| s.to_string()).collect();
                write!(f, "{}", steps.join(" "))
            }
            ScaleFormula::Numerics(numerics) => write!(f, "{}", numerics.join(" ")),
        }
    }
}

/// Convert a step formula into intervals from the root.
///
/// The final step returns to the root an octave up, so only the first
/// N-1 steps produce notes.
fn intervals_from_steps(steps: &[Step]) -> Vec<Interval> {
    let mut intervals = vec![Interval::Unison];

    if let Some((_, leading)) = steps.split_last() {
        let mut position = 0i32;
        for step in leading {
            position += step.semitones() as i32;
            intervals.push(Interval::from_index(position));
        }
    }

    intervals
}
