// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes and the operations that move between them.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{wrap_index, Direction, Interval};
use crate::error::TheoryError;

/// Pitch classes, spelled with flats (Db, not C#)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    Db, // C# / Db
    D,
    Eb, // D# / Eb
    E,
    F,
    Gb, // F# / Gb
    G,
    Ab, // G# / Ab
    A,
    Bb, // A# / Bb
    B,
}

impl PitchClass {
    /// All pitch classes in chromatic order, starting at C
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Db,
        PitchClass::D,
        PitchClass::Eb,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Gb,
        PitchClass::G,
        PitchClass::Ab,
        PitchClass::A,
        PitchClass::Bb,
        PitchClass::B,
    ];

    /// Position in the octave (0-11)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class from any integer, reduced modulo 12
    pub fn from_index(index: i32) -> Self {
        PitchClass::ALL[wrap_index(index)]
    }

    /// Canonical (flat) name
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Db => "Db",
            PitchClass::D => "D",
            PitchClass::Eb => "Eb",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Gb => "Gb",
            PitchClass::G => "G",
            PitchClass::Ab => "Ab",
            PitchClass::A => "A",
            PitchClass::Bb => "Bb",
            PitchClass::B => "B",
        }
    }

    /// Whether the canonical name carries a flat
    pub fn is_flat(self) -> bool {
        self.name().len() == 2
    }

    /// Sharp spelling of a flat note ("Eb" -> "D#"); naturals are unchanged
    pub fn to_sharp(self) -> String {
        if self.is_flat() {
            format!("{}#", self.previous().name())
        } else {
            self.name().to_string()
        }
    }

    /// The note a semitone below
    pub fn previous(self) -> Self {
        PitchClass::from_index(self.index() as i32 - 1)
    }

    /// The note a semitone above
    pub fn next(self) -> Self {
        PitchClass::from_index(self.index() as i32 + 1)
    }

    /// Transpose by an interval
    pub fn transpose(self, interval: Interval, direction: Direction) -> Self {
        transpose(self, interval, direction)
    }

    /// Every note from this one up to (not including) its octave
    pub fn chromatics(self, direction: Direction) -> Vec<Self> {
        chromatic_notes(self, direction)
    }

    /// A random pitch class drawn from `rng`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        PitchClass::ALL[rng.gen_range(0..PitchClass::ALL.len())]
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    /// Parse a letter A-G (any case) followed by up to two sharps or flats,
    /// e.g. "C", "f#", "Ebb". Accidentals may not be mixed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TheoryError::InvalidNote(s.to_string());

        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        let natural = match letter.to_ascii_uppercase() {
            'C' => PitchClass::C,
            'D' => PitchClass::D,
            'E' => PitchClass::E,
            'F' => PitchClass::F,
            'G' => PitchClass::G,
            'A' => PitchClass::A,
            'B' => PitchClass::B,
            _ => return Err(invalid()),
        };

        let accidentals: Vec<char> = chars.collect();
        if accidentals.len() > 2 {
            return Err(invalid());
        }

        let mut offset = 0i32;
        for (i, &acc) in accidentals.iter().enumerate() {
            let step = match acc {
                '#' => 1,
                'b' => -1,
                _ => return Err(invalid()),
            };
            if i > 0 && accidentals[0] != acc {
                return Err(invalid());
            }
            offset += step;
        }

        Ok(PitchClass::from_index(natural.index() as i32 + offset))
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Move `note` by `interval` in `direction`, wrapping at the octave
pub fn transpose(note: PitchClass, interval: Interval, direction: Direction) -> PitchClass {
    let offset = direction.sign() * interval.semitones() as i32;
    PitchClass::from_index(note.index() as i32 + offset)
}

/// The 12 notes from `note` to its octave, stepping a semitone at a time
pub fn chromatic_notes(note: PitchClass, direction: Direction) -> Vec<PitchClass> {
    (0..12)
        .map(|step| PitchClass::from_index(note.index() as i32 + direction.sign() * step))
        .collect()
}

/// Join note names with ", "
pub fn notes_to_string(notes: &[PitchClass]) -> String {
    notes
        .iter()
        .map(|n| n.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse whitespace-separated note names.
///
/// Each token becomes `Some(note)` or `None` if it is not a valid name.
/// With `allow_duplicates` false, repeats are dropped keeping first order.
pub fn notes_from_string(notes: &str, allow_duplicates: bool) -> Vec<Option<PitchClass>> {
    let mut parsed: Vec<Option<PitchClass>> = Vec::new();

    for token in notes.split_whitespace() {
        let note = token.parse::<PitchClass>().ok();
        if allow_duplicates || !parsed.contains(&note) {
            parsed.push(note);
        }
    }

    parsed
}
