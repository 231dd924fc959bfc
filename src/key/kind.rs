// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Major and minor key kinds

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::chord::ChordKind;
use crate::error::TheoryError;
use crate::scale::ScaleKind;

/// Key mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    #[default]
    Major,
    Minor,
}

impl KeyKind {
    pub const ALL: [KeyKind; 2] = [KeyKind::Major, KeyKind::Minor];

    /// The opposite kind
    pub fn parallel(self) -> Self {
        match self {
            KeyKind::Major => KeyKind::Minor,
            KeyKind::Minor => KeyKind::Major,
        }
    }

    /// Scale the key's chords are rooted on
    pub fn scale_kind(self) -> ScaleKind {
        match self {
            KeyKind::Major => ScaleKind::Major,
            KeyKind::Minor => ScaleKind::Minor,
        }
    }

    /// Roman numerals of the diatonic chords. Upper case is major,
    /// lower case minor, ° diminished.
    pub fn numerals(self) -> [&'static str; 7] {
        match self {
            KeyKind::Major => ["I", "ii", "iii", "IV", "V", "vi", "vii°"],
            KeyKind::Minor => ["i", "ii°", "III", "iv", "v", "VI", "VII"],
        }
    }

    /// Chord quality on each scale degree
    pub fn chord_kinds(self) -> [ChordKind; 7] {
        use ChordKind::{Diminished as Dim, Major as Maj, Minor as Min};

        match self {
            KeyKind::Major => [Maj, Min, Min, Maj, Maj, Min, Dim],
            KeyKind::Minor => [Min, Dim, Maj, Min, Min, Maj, Maj],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            KeyKind::Major => "Major",
            KeyKind::Minor => "Minor",
        }
    }

    /// A random key kind drawn from `rng`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        KeyKind::ALL[rng.gen_range(0..KeyKind::ALL.len())]
    }
}

impl FromStr for KeyKind {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "major" | "maj" | "ionian" => Ok(KeyKind::Major),
            "minor" | "min" | "aeolian" => Ok(KeyKind::Minor),
            _ => Err(TheoryError::UnknownKeyKind(s.to_string())),
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
