// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Resolving Roman numerals to chords within a key.
//!
//! Numerals are looked up in the union of the key's diatonic and parallel
//! chord tables, so "iv" in a major key finds the borrowed minor chord.
//! Anything not found becomes a placeholder; that is never an error.

use std::fmt;

use crate::chord::Chord;
use crate::error::TheoryResult;
use crate::key::Key;

/// Placeholder used for numerals that are not in the key
pub const DEFAULT_PLACEHOLDER: &str = "X";

/// Accept "dim" as a spelling of "°" ("viidim" -> "vii°")
pub fn normalize_numeral(numeral: &str) -> String {
    numeral.replace("dim", "°")
}

/// One resolved position in a progression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressionChord {
    Chord(Chord),
    Placeholder(String),
}

impl ProgressionChord {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ProgressionChord::Chord(_))
    }

    pub fn chord(&self) -> Option<&Chord> {
        match self {
            ProgressionChord::Chord(chord) => Some(chord),
            ProgressionChord::Placeholder(_) => None,
        }
    }
}

impl fmt::Display for ProgressionChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressionChord::Chord(chord) => write!(f, "{}", chord),
            ProgressionChord::Placeholder(placeholder) => write!(f, "{}", placeholder),
        }
    }
}

/// Resolve each numeral to a chord of `key`, or to `placeholder`.
/// Output has the same length and order as `numerals`.
pub fn chords_from_progression<S: AsRef<str>>(
    key: &Key,
    numerals: &[S],
    placeholder: &str,
) -> TheoryResult<Vec<ProgressionChord>> {
    let table = key.chords()?.union(&key.parallel_chords()?);

    Ok(numerals
        .iter()
        .map(|numeral| {
            let numeral = normalize_numeral(numeral.as_ref());
            match table.get(&numeral) {
                Some(chord) => ProgressionChord::Chord(chord.clone()),
                None => {
                    tracing::debug!(%key, numeral = %numeral, placeholder, "numeral not in key");
                    ProgressionChord::Placeholder(placeholder.to_string())
                }
            }
        })
        .collect())
}

/// A numeral progression resolved in a key
#[derive(Clone, PartialEq, Eq)]
pub struct Progression {
    key: Key,
    numerals: Vec<String>,
    placeholder: String,
    chords: Vec<ProgressionChord>,
}

impl Progression {
    /// Resolve `numerals` in `key` with the default placeholder
    pub fn new<I, S>(key: Key, numerals: I) -> TheoryResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_placeholder(key, numerals, DEFAULT_PLACEHOLDER)
    }

    /// Resolve `numerals` in `key`, using `placeholder` for unknown numerals
    pub fn with_placeholder<I, S>(key: Key, numerals: I, placeholder: impl Into<String>) -> TheoryResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let numerals: Vec<String> = numerals.into_iter().map(Into::into).collect();
        let placeholder = placeholder.into();
        let chords = chords_from_progression(&key, &numerals, &placeholder)?;

        Ok(Self {
            key,
            numerals,
            placeholder,
            chords,
        })
    }

    pub fn key(&self) -> Key {
        self.key
    }

    /// Numerals as given, before "dim" normalization
    pub fn numerals(&self) -> &[String] {
        &self.numerals
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn chords(&self) -> &[ProgressionChord] {
        &self.chords
    }

    /// Only the chords that resolved, in order
    pub fn resolved_chords(&self) -> Vec<&Chord> {
        self.chords.iter().filter_map(|c| c.chord()).collect()
    }

    /// Number of numerals that fell back to the placeholder
    pub fn unresolved_count(&self) -> usize {
        self.chords.iter().filter(|c| !c.is_resolved()).count()
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }
}

impl fmt::Display for Progression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chords: Vec<String> = self.chords.iter().map(|c| c.to_string()).collect();
        write!(f, "{}: {}", self.key, chords.join(" "))
    }
}

impl fmt::Debug for Progression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Progression({}, {:?})", self.key, self.numerals)
    }
}
