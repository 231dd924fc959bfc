// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Seven-note scales with named functional degrees.
//!
//! The 7th degree is classified by its distance up to the tonic: a minor
//! 2nd makes it the leading tone, a major 2nd the subtonic.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Scale, ScaleFormula, ScaleKind};
use crate::error::{TheoryError, TheoryResult};
use crate::pitch::{interval_distance, Direction, Interval, PitchClass};

/// Functional name of a diatonic scale degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleDegree {
    Tonic,
    Supertonic,
    Mediant,
    Subdominant,
    Dominant,
    Submediant,
    LeadingTone,
    Subtonic,
}

impl ScaleDegree {
    /// Degrees 1-6, which are the same for every diatonic scale
    pub const FIXED: [ScaleDegree; 6] = [
        ScaleDegree::Tonic,
        ScaleDegree::Supertonic,
        ScaleDegree::Mediant,
        ScaleDegree::Subdominant,
        ScaleDegree::Dominant,
        ScaleDegree::Submediant,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScaleDegree::Tonic => "tonic",
            ScaleDegree::Supertonic => "supertonic",
            ScaleDegree::Mediant => "mediant",
            ScaleDegree::Subdominant => "subdominant",
            ScaleDegree::Dominant => "dominant",
            ScaleDegree::Submediant => "submediant",
            ScaleDegree::LeadingTone => "leading tone",
            ScaleDegree::Subtonic => "subtonic",
        }
    }
}

impl fmt::Display for ScaleDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A scale with exactly seven notes
#[derive(Clone, PartialEq, Eq)]
pub struct DiatonicScale {
    scale: Scale,
}

impl DiatonicScale {
    /// Build a built-in scale and check it has seven notes
    pub fn new(root: PitchClass, kind: ScaleKind) -> TheoryResult<Self> {
        Self::from_scale(Scale::new(root, kind)?)
    }

    /// Build a named scale from a formula and check it has seven notes
    pub fn custom(root: PitchClass, name: impl Into<String>, formula: ScaleFormula) -> TheoryResult<Self> {
        Self::from_scale(Scale::custom(root, name, formula)?)
    }

    /// Wrap an existing scale
    pub fn from_scale(scale: Scale) -> TheoryResult<Self> {
        if scale.len() != 7 {
            return Err(TheoryError::NotDiatonic {
                scale: scale.name(),
                count: scale.len(),
            });
        }
        Ok(Self { scale })
    }

    /// The underlying scale
    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    pub fn notes(&self) -> &[PitchClass] {
        self.scale.notes()
    }

    pub fn tonic(&self) -> PitchClass {
        self.notes()[0]
    }

    pub fn supertonic(&self) -> PitchClass {
        self.notes()[1]
    }

    pub fn mediant(&self) -> PitchClass {
        self.notes()[2]
    }

    pub fn subdominant(&self) -> PitchClass {
        self.notes()[3]
    }

    pub fn dominant(&self) -> PitchClass {
        self.notes()[4]
    }

    pub fn submediant(&self) -> PitchClass {
        self.notes()[5]
    }

    /// Classify the 7th degree as leading tone or subtonic
    pub fn seventh(&self) -> TheoryResult<ScaleDegree> {
        let interval = interval_distance(self.notes()[6], self.tonic(), Direction::Up);
        match interval {
            Interval::MinorSecond => Ok(ScaleDegree::LeadingTone),
            Interval::MajorSecond => Ok(ScaleDegree::Subtonic),
            _ => Err(TheoryError::IrregularSeventh {
                scale: self.scale.name(),
                interval,
            }),
        }
    }

    /// The 7th degree, if it sits a minor 2nd below the tonic
    pub fn leading_tone(&self) -> TheoryResult<PitchClass> {
        self.seventh_as(ScaleDegree::LeadingTone)
    }

    /// The 7th degree, if it sits a major 2nd below the tonic
    pub fn subtonic(&self) -> TheoryResult<PitchClass> {
        self.seventh_as(ScaleDegree::Subtonic)
    }

    fn seventh_as(&self, degree: ScaleDegree) -> TheoryResult<PitchClass> {
        if self.seventh()? == degree {
            Ok(self.notes()[6])
        } else {
            Err(TheoryError::DegreeNotApplicable {
                scale: self.scale.name(),
                degree,
            })
        }
    }

    /// All seven degrees with their notes, the 7th classified
    pub fn degrees(&self) -> TheoryResult<Vec<(ScaleDegree, PitchClass)>> {
        let mut degrees: Vec<(ScaleDegree, PitchClass)> = ScaleDegree::FIXED
            .iter()
            .copied()
            .zip(self.notes().iter().copied())
            .collect();
        degrees.push((self.seventh()?, self.notes()[6]));
        Ok(degrees)
    }
}

impl fmt::Display for DiatonicScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scale)
    }
}

impl fmt::Debug for DiatonicScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiatonicScale({}, {:?})", self.scale.root(), self.scale.kind())
    }
}
