// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Keys and their circle-of-fifths properties.
//!
//! Sharps are added in the order F C G D A E B and flats in the reverse,
//! B E A D G C F. Every derived value is recomputed from (root, kind).

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{ChordTable, KeyKind};
use crate::chord::{Chord, ChordKind};
use crate::error::TheoryResult;
use crate::pitch::{transpose, Direction, Interval, PitchClass};
use crate::progression::normalize_numeral;
use crate::scale::Scale;

use PitchClass::{A, B, C, D, E, F, G};

/// Order sharps are added to key signatures
pub const ORDER_OF_SHARPS: [PitchClass; 7] = [F, C, G, D, A, E, B];

/// Order flats are added to key signatures
pub const ORDER_OF_FLATS: [PitchClass; 7] = [B, E, A, D, G, C, F];

/// A musical key with root and mode
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    pub root: PitchClass,
    pub kind: KeyKind,
}

impl Key {
    pub fn new(root: PitchClass, kind: KeyKind) -> Self {
        Self { root, kind }
    }

    /// A key of random root and kind
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let root = PitchClass::random(rng);
        let kind = KeyKind::random(rng);
        Self::new(root, kind)
    }

    /// Root and kind, e.g. "G Major"
    pub fn name(&self) -> String {
        format!("{} {}", self.root, self.kind)
    }

    /// Same root, opposite kind
    pub fn parallel(&self) -> Key {
        Key::new(self.root, self.kind.parallel())
    }

    /// Major keys: a minor 3rd down, minor. Minor keys: a minor 3rd up, major.
    pub fn relative(&self) -> Key {
        match self.kind {
            KeyKind::Major => Key::new(
                transpose(self.root, Interval::MinorThird, Direction::Down),
                KeyKind::Minor,
            ),
            KeyKind::Minor => Key::new(
                transpose(self.root, Interval::MinorThird, Direction::Up),
                KeyKind::Major,
            ),
        }
    }

    /// Number of sharps in the key signature
    pub fn sharp_count(&self) -> usize {
        self.fifths_from_c(Direction::Up)
    }

    /// Number of flats in the key signature
    pub fn flat_count(&self) -> usize {
        self.fifths_from_c(Direction::Down)
    }

    /// Walk the circle of fifths from C for up to 7 steps; the step that
    /// lands on the root is the count. Minor keys use their relative major.
    fn fifths_from_c(&self, direction: Direction) -> usize {
        if self.kind == KeyKind::Minor {
            return self.relative().fifths_from_c(direction);
        }

        let mut note = PitchClass::C;
        for step in 0..=7 {
            if note == self.root {
                return step;
            }
            note = transpose(note, Interval::PerfectFifth, direction);
        }
        0
    }

    /// Sharpened notes, in signature order
    pub fn sharps(&self) -> Vec<PitchClass> {
        ORDER_OF_SHARPS[..self.sharp_count()].to_vec()
    }

    /// Flattened notes, in signature order
    pub fn flats(&self) -> Vec<PitchClass> {
        ORDER_OF_FLATS[..self.flat_count()].to_vec()
    }

    /// The major or minor scale on the root
    pub fn scale(&self) -> TheoryResult<Scale> {
        Scale::new(self.root, self.kind.scale_kind())
    }

    /// The seven diatonic chords keyed by numeral
    pub fn chords(&self) -> TheoryResult<ChordTable> {
        let scale = self.scale()?;
        Ok(self
            .kind
            .numerals()
            .iter()
            .zip(scale.notes())
            .zip(self.kind.chord_kinds())
            .map(|((numeral, &root), kind)| (numeral.to_string(), Chord::new(root, kind)))
            .collect())
    }

    /// Diatonic chords of the parallel key
    pub fn parallel_chords(&self) -> TheoryResult<ChordTable> {
        self.parallel().chords()
    }

    /// Secondary dominants: a dominant 7th a fifth above each diatonic
    /// chord, keyed "V7/<numeral>"
    pub fn dominant_chords(&self) -> TheoryResult<ChordTable> {
        Ok(self
            .chords()?
            .iter()
            .map(|(numeral, chord)| {
                let root = transpose(chord.root(), Interval::PerfectFifth, Direction::Up);
                (format!("V7/{}", numeral), Chord::new(root, ChordKind::Dominant7))
            })
            .collect())
    }

    /// Look up a numeral among the diatonic chords, then the parallel ones.
    /// "dim" is accepted for "°".
    pub fn chord(&self, numeral: &str) -> TheoryResult<Option<Chord>> {
        let numeral = normalize_numeral(numeral);
        if let Some(chord) = self.chords()?.get(&numeral) {
            return Ok(Some(chord.clone()));
        }
        Ok(self.parallel_chords()?.get(&numeral).cloned())
    }
}

impl Default for Key {
    fn default() -> Self {
        Key::new(PitchClass::C, KeyKind::Major)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.kind)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({} {})", self.root, self.kind)
    }
}
