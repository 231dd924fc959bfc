// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Ordered numeral-to-chord tables

use std::ops::Index;

use crate::chord::Chord;

/// Chords keyed by Roman numeral, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChordTable {
    entries: Vec<(String, Chord)>,
}

impl ChordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a chord. A replaced numeral keeps its position.
    pub fn insert(&mut self, numeral: impl Into<String>, chord: Chord) {
        let numeral = numeral.into();
        match self.entries.iter_mut().find(|(n, _)| *n == numeral) {
            Some(entry) => entry.1 = chord,
            None => self.entries.push((numeral, chord)),
        }
    }

    pub fn get(&self, numeral: &str) -> Option<&Chord> {
        self.entries
            .iter()
            .find(|(n, _)| n == numeral)
            .map(|(_, chord)| chord)
    }

    pub fn contains(&self, numeral: &str) -> bool {
        self.get(numeral).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Chord)> {
        self.entries.iter().map(|(n, chord)| (n.as_str(), chord))
    }

    pub fn numerals(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn chords(&self) -> impl Iterator<Item = &Chord> {
        self.entries.iter().map(|(_, chord)| chord)
    }

    /// Merge two tables; entries from `other` win on shared numerals
    pub fn union(&self, other: &ChordTable) -> ChordTable {
        let mut merged = self.clone();
        merged.extend(other.entries.iter().cloned());
        merged
    }
}

impl Extend<(String, Chord)> for ChordTable {
    fn extend<I: IntoIterator<Item = (String, Chord)>>(&mut self, iter: I) {
        for (numeral, chord) in iter {
            self.insert(numeral, chord);
        }
    }
}

impl FromIterator<(String, Chord)> for ChordTable {
    fn from_iter<I: IntoIterator<Item = (String, Chord)>>(iter: I) -> Self {
        let mut table = ChordTable::new();
        table.extend(iter);
        table
    }
}

impl Index<&str> for ChordTable {
    type Output = Chord;

    /// Panics if the numeral is missing, like `HashMap`
    fn index(&self, numeral: &str) -> &Chord {
        match self.get(numeral) {
            Some(chord) => chord,
            None => panic!("no chord for numeral '{}'", numeral),
        }
    }
}
