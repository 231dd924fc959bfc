// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chords built by stacking intervals on a root

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::ChordKind;
use crate::error::{TheoryError, TheoryResult};
use crate::pitch::{transpose, Direction, Interval, PitchClass};

/// A chord: root, kind and the notes they produce
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Chord {
    root: PitchClass,
    kind: ChordKind,
    notes: Vec<PitchClass>,
}

impl Chord {
    pub fn new(root: PitchClass, kind: ChordKind) -> Self {
        let notes = kind
            .intervals()
            .iter()
            .map(|&interval| transpose(root, interval, Direction::Up))
            .collect();

        Self { root, kind, notes }
    }

    /// A chord of random root and kind
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let root = PitchClass::random(rng);
        let kind = ChordKind::random(rng);
        Self::new(root, kind)
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn kind(&self) -> ChordKind {
        self.kind
    }

    /// Chord tones, root first
    pub fn notes(&self) -> &[PitchClass] {
        &self.notes
    }

    pub fn notation(&self) -> &'static str {
        self.kind.notation()
    }

    pub fn contains(&self, note: PitchClass) -> bool {
        self.notes.contains(&note)
    }

    /// Chord tones plus the 9th (M2 above the root)
    pub fn add9(&self) -> Vec<PitchClass> {
        self.with_extension(Interval::MajorSecond)
    }

    /// Chord tones plus the 11th (P4 above the root)
    pub fn add11(&self) -> Vec<PitchClass> {
        self.with_extension(Interval::PerfectFourth)
    }

    /// Chord tones plus the 13th (M6 above the root)
    pub fn add13(&self) -> Vec<PitchClass> {
        self.with_extension(Interval::MajorSixth)
    }

    fn with_extension(&self, interval: Interval) -> Vec<PitchClass> {
        let mut notes = self.notes.clone();
        notes.push(transpose(self.root, interval, Direction::Up));
        notes
    }
}

impl FromStr for Chord {
    type Err = TheoryError;

    /// Parse a chord symbol: a note name then an optional notation,
    /// e.g. "C", "Ebm7", "F#°", "Bbsus4". A bare note is a major chord.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s
            .char_indices()
            .skip(1)
            .take(2)
            .take_while(|&(_, c)| c == '#' || c == 'b')
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or_else(|| s.chars().next().map(char::len_utf8).unwrap_or(0));

        let (root, symbol) = s.split_at(split);
        let root: PitchClass = root.parse()?;
        let kind = if symbol.is_empty() {
            ChordKind::Major
        } else {
            symbol.parse()?
        };

        Ok(Chord::new(root, kind))
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.notation())
    }
}

impl fmt::Debug for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chord({}, {:?})", self.root, self.kind)
    }
}

/// Every note used by `chords`, first occurrence order
pub fn unique_notes_in_chords(chords: &[Chord]) -> Vec<PitchClass> {
    let mut notes: Vec<PitchClass> = Vec::new();
    for note in chords.iter().flat_map(|chord| chord.notes()) {
        if !notes.contains(note) {
            notes.push(*note);
        }
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use PitchClass::*;

    #[test]
    fn test_triads() {
        assert_eq!(Chord::new(C, ChordKind::Major).notes(), &[C, E, G]);
        assert_eq!(Chord::new(A, ChordKind::Minor).notes(), &[A, C, E]);
        assert_eq!(Chord::new(B, ChordKind::Diminished).notes(), &[B, D, F]);
        assert_eq!(Chord::new(D, ChordKind::Sus2).notes(), &[D, E, A]);
        assert_eq!(Chord::new(D, ChordKind::Sus4).notes(), &[D, G, A]);
    }

    #[test]
    fn test_sevenths() {
        assert_eq!(Chord::new(G, ChordKind::Dominant7).notes(), &[G, B, D, F]);
        assert_eq!(Chord::new(C, ChordKind::Major7).notes(), &[C, E, G, B]);
        assert_eq!(Chord::new(D, ChordKind::Minor7).notes(), &[D, F, A, C]);
        assert_eq!(Chord::new(A, ChordKind::Diminished7).notes(), &[A, C, Eb, Gb]);
    }

    #[test]
    fn test_minor_third_symmetry() {
        for root in PitchClass::ALL {
            let chord = Chord::new(root, ChordKind::Minor);
            assert_eq!(chord.notes()[1], transpose(root, Interval::MinorThird, Direction::Up));
        }
    }

    #[test]
    fn test_extensions() {
        let chord = Chord::new(A, ChordKind::Major);
        assert_eq!(chord.add9(), vec![A, Db, E, B]);
        assert_eq!(chord.add11(), vec![A, Db, E, D]);
        assert_eq!(chord.add13(), vec![A, Db, E, Gb]);

        // Sus2 already holds the 9th; it is appended again
        let sus = Chord::new(C, ChordKind::Sus2);
        assert_eq!(sus.add9(), vec![C, D, G, D]);
    }

    #[test]
    fn test_display_and_debug() {
        let chord = Chord::new(E, ChordKind::Dominant7);
        assert_eq!(chord.to_string(), "E7");
        assert_eq!(format!("{:?}", chord), "Chord(E, Dominant7)");
        assert_eq!(Chord::new(F, ChordKind::Diminished).to_string(), "F°");
        assert_eq!(Chord::new(Gb, ChordKind::Minor).to_string(), "Gbm");
        assert_eq!(Chord::new(Eb, ChordKind::Major).to_string(), "EbM");
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!("C".parse::<Chord>(), Ok(Chord::new(C, ChordKind::Major)));
        assert_eq!("Ebm7".parse::<Chord>(), Ok(Chord::new(Eb, ChordKind::Minor7)));
        assert_eq!("F#°".parse::<Chord>(), Ok(Chord::new(Gb, ChordKind::Diminished)));
        assert_eq!("BbΔ7".parse::<Chord>(), Ok(Chord::new(Bb, ChordKind::Major7)));
        assert_eq!("Dsus4".parse::<Chord>(), Ok(Chord::new(D, ChordKind::Sus4)));
        assert_eq!("bm".parse::<Chord>(), Ok(Chord::new(B, ChordKind::Minor)));
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(
            "Cadd6".parse::<Chord>(),
            Err(TheoryError::UnknownChordKind("add6".to_string()))
        );
        assert_eq!(
            "Hm".parse::<Chord>(),
            Err(TheoryError::InvalidNote("H".to_string()))
        );
        assert!("".parse::<Chord>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for root in PitchClass::ALL {
            for kind in ChordKind::ALL {
                let chord = Chord::new(root, kind);
                assert_eq!(chord.to_string().parse::<Chord>(), Ok(chord));
            }
        }
    }

    #[test]
    fn test_unique_notes() {
        let chords = [Chord::new(C, ChordKind::Major), Chord::new(A, ChordKind::Minor)];
        assert_eq!(unique_notes_in_chords(&chords), vec![C, E, G, A]);
        assert!(unique_notes_in_chords(&[]).is_empty());
    }

    #[test]
    fn test_random_is_seeded() {
        let a = Chord::random(&mut StdRng::seed_from_u64(11));
        let b = Chord::random(&mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }
}
