// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord kinds and their interval stacks

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::pitch::Interval;

use Interval::*;

/// Chord qualities supported by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordKind {
    Major,
    Minor,
    Diminished,
    Dominant7,
    Major7,
    Minor7,
    Diminished7,
    Sus2,
    Sus4,
}

impl ChordKind {
    pub const ALL: [ChordKind; 9] = [
        ChordKind::Major,
        ChordKind::Minor,
        ChordKind::Diminished,
        ChordKind::Dominant7,
        ChordKind::Major7,
        ChordKind::Minor7,
        ChordKind::Diminished7,
        ChordKind::Sus2,
        ChordKind::Sus4,
    ];

    /// Intervals stacked on the root, unison first.
    /// Diminished7 uses M6 for its top note (pitch-class equal to a dim7).
    pub fn intervals(self) -> &'static [Interval] {
        match self {
            ChordKind::Major => &[Unison, MajorThird, PerfectFifth],
            ChordKind::Minor => &[Unison, MinorThird, PerfectFifth],
            ChordKind::Diminished => &[Unison, MinorThird, DiminishedFifth],
            ChordKind::Dominant7 => &[Unison, MajorThird, PerfectFifth, MinorSeventh],
            ChordKind::Major7 => &[Unison, MajorThird, PerfectFifth, MajorSeventh],
            ChordKind::Minor7 => &[Unison, MinorThird, PerfectFifth, MinorSeventh],
            ChordKind::Diminished7 => &[Unison, MinorThird, DiminishedFifth, MajorSixth],
            ChordKind::Sus2 => &[Unison, MajorSecond, PerfectFifth],
            ChordKind::Sus4 => &[Unison, PerfectFourth, PerfectFifth],
        }
    }

    /// Symbol written after the root, e.g. "m7"
    pub fn notation(self) -> &'static str {
        match self {
            ChordKind::Major => "M",
            ChordKind::Minor => "m",
            ChordKind::Diminished => "°",
            ChordKind::Dominant7 => "7",
            ChordKind::Major7 => "Δ7",
            ChordKind::Minor7 => "m7",
            ChordKind::Diminished7 => "°7",
            ChordKind::Sus2 => "sus2",
            ChordKind::Sus4 => "sus4",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChordKind::Major => "Major",
            ChordKind::Minor => "Minor",
            ChordKind::Diminished => "Diminished",
            ChordKind::Dominant7 => "Dominant7",
            ChordKind::Major7 => "Major7",
            ChordKind::Minor7 => "Minor7",
            ChordKind::Diminished7 => "Diminished7",
            ChordKind::Sus2 => "Sus2",
            ChordKind::Sus4 => "Sus4",
        }
    }

    /// Match a notation symbol; case matters ("M" vs "m")
    pub fn from_notation(symbol: &str) -> Option<Self> {
        match symbol {
            "M" | "maj" => Some(ChordKind::Major),
            "m" | "min" => Some(ChordKind::Minor),
            "°" | "dim" => Some(ChordKind::Diminished),
            "7" => Some(ChordKind::Dominant7),
            "Δ7" | "maj7" | "M7" => Some(ChordKind::Major7),
            "m7" | "min7" => Some(ChordKind::Minor7),
            "°7" | "dim7" => Some(ChordKind::Diminished7),
            "sus2" => Some(ChordKind::Sus2),
            "sus4" => Some(ChordKind::Sus4),
            _ => None,
        }
    }

    /// A random chord kind drawn from `rng`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        ChordKind::ALL[rng.gen_range(0..ChordKind::ALL.len())]
    }
}

impl FromStr for ChordKind {
    type Err = TheoryError;

    /// Parse a notation symbol ("m7", "°") or a kind name ("dominant7")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(kind) = ChordKind::from_notation(s) {
            return Ok(kind);
        }

        let normalized = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "major" => Ok(ChordKind::Major),
            "minor" => Ok(ChordKind::Minor),
            "diminished" => Ok(ChordKind::Diminished),
            "dominant7" | "dominantseventh" => Ok(ChordKind::Dominant7),
            "major7" | "majorseventh" => Ok(ChordKind::Major7),
            "minor7" | "minorseventh" => Ok(ChordKind::Minor7),
            "diminished7" | "diminishedseventh" => Ok(ChordKind::Diminished7),
            "sus2" => Ok(ChordKind::Sus2),
            "sus4" => Ok(ChordKind::Sus4),
            _ => Err(TheoryError::UnknownChordKind(s.to_string())),
        }
    }
}

impl fmt::Display for ChordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_sizes() {
        for kind in ChordKind::ALL {
            let expected = match kind {
                ChordKind::Dominant7 | ChordKind::Major7 | ChordKind::Minor7 | ChordKind::Diminished7 => 4,
                _ => 3,
            };
            assert_eq!(kind.intervals().len(), expected, "{:?}", kind);
            assert_eq!(kind.intervals()[0], Interval::Unison);
        }
    }

    #[test]
    fn test_notation_round_trip() {
        for kind in ChordKind::ALL {
            assert_eq!(kind.notation().parse::<ChordKind>(), Ok(kind));
            assert_eq!(kind.name().parse::<ChordKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("dim".parse::<ChordKind>(), Ok(ChordKind::Diminished));
        assert_eq!("maj7".parse::<ChordKind>(), Ok(ChordKind::Major7));
        assert_eq!("minor_7".parse::<ChordKind>(), Ok(ChordKind::Minor7));
        assert_eq!(
            "add6".parse::<ChordKind>(),
            Err(TheoryError::UnknownChordKind("add6".to_string()))
        );
    }
}
