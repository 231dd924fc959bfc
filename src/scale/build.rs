// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale construction

use std::fmt;

use rand::Rng;

use super::{ScaleFormula, ScaleKind};
use crate::error::{TheoryError, TheoryResult};
use crate::pitch::{notes_to_string, transpose, Direction, Interval, PitchClass};

/// A complete scale with root and type
#[derive(Clone, PartialEq, Eq)]
pub struct Scale {
    root: PitchClass,
    kind: ScaleKind,
    label: String,
    formula: ScaleFormula,
    intervals: Vec<Interval>,
    notes: Vec<PitchClass>,
}

impl Scale {
    /// Create a new scale from root and a built-in kind
    pub fn new(root: PitchClass, kind: ScaleKind) -> TheoryResult<Self> {
        let formula = ScaleFormula::for_kind(kind)
            .ok_or_else(|| TheoryError::UnknownScaleKind(format!("{:?}", kind)))?;
        Self::build(root, kind, kind.name().to_string(), formula)
    }

    /// Create a named scale from a caller-supplied formula
    pub fn custom(root: PitchClass, name: impl Into<String>, formula: ScaleFormula) -> TheoryResult<Self> {
        Self::build(root, ScaleKind::Custom, name.into(), formula)
    }

    fn build(root: PitchClass, kind: ScaleKind, label: String, formula: ScaleFormula) -> TheoryResult<Self> {
        let intervals = formula.to_intervals()?;
        match intervals.first() {
            Some(Interval::Unison) => {}
            first => {
                return Err(TheoryError::FormulaWithoutRoot {
                    scale: format!("{} {}", root, label),
                    first: first.map(|i| i.to_string()).unwrap_or_default(),
                })
            }
        }

        let notes: Vec<PitchClass> = intervals
            .iter()
            .map(|&interval| transpose(root, interval, Direction::Up))
            .collect();

        tracing::trace!(
            root = %root,
            scale = %label,
            encoding = formula.encoding(),
            notes = notes.len(),
            "built scale"
        );

        Ok(Self {
            root,
            kind,
            label,
            formula,
            intervals,
            notes,
        })
    }

    /// A scale of random root and built-in kind
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> TheoryResult<Self> {
        let root = PitchClass::random(rng);
        let kind = ScaleKind::random(rng);
        Self::new(root, kind)
    }

    /// Get the root note
    pub fn root(&self) -> PitchClass {
        self.root
    }

    /// Get the scale kind
    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    /// Kind name, or the caller's name for custom scales
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Root and label, e.g. "C Major"
    pub fn name(&self) -> String {
        format!("{} {}", self.root, self.label)
    }

    /// Get the notes in this scale, root first
    pub fn notes(&self) -> &[PitchClass] {
        &self.notes
    }

    /// Intervals from the root, unison first
    pub fn interval_formula(&self) -> &[Interval] {
        &self.intervals
    }

    /// The interval formula as numeric degrees ("1", "b3", ...)
    pub fn numeric_formula(&self) -> Vec<&'static str> {
        self.intervals.iter().map(|i| i.to_numeric()).collect()
    }

    /// The formula this scale was created from
    pub fn creation_formula(&self) -> &ScaleFormula {
        &self.formula
    }

    /// Number of notes in the scale
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check if scale is empty
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Number of notes spelled with a flat
    pub fn flat_count(&self) -> usize {
        self.notes.iter().filter(|n| n.is_flat()).count()
    }

    /// Check if a note is in this scale
    pub fn contains(&self, note: PitchClass) -> bool {
        self.notes.contains(&note)
    }

    /// Get the scale degree (1-based) for a note, if it's in the scale
    pub fn degree_of(&self, note: PitchClass) -> Option<usize> {
        self.notes.iter().position(|&n| n == note).map(|i| i + 1)
    }

    /// Get the note at a given scale degree (1-based)
    pub fn note_at_degree(&self, degree: usize) -> Option<PitchClass> {
        if degree == 0 || degree > self.len() {
            return None;
        }
        Some(self.notes[degree - 1])
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), notes_to_string(&self.notes))
    }
}

impl fmt::Debug for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scale({}, {:?})", self.root, self.kind)
    }
}

/// The seven church modes starting on successive degrees of the
/// Ionian scale on `note`
pub fn modes_from_note(note: PitchClass) -> TheoryResult<Vec<Scale>> {
    const MODES: [ScaleKind; 7] = [
        ScaleKind::Ionian,
        ScaleKind::Dorian,
        ScaleKind::Phrygian,
        ScaleKind::Lydian,
        ScaleKind::Mixolydian,
        ScaleKind::Aeolian,
        ScaleKind::Locrian,
    ];

    let ionian = Scale::new(note, ScaleKind::Ionian)?;
    ionian
        .notes()
        .iter()
        .zip(MODES)
        .map(|(&root, kind)| Scale::new(root, kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use PitchClass::*;

    #[test]
    fn test_c_major() {
        let scale = Scale::new(C, ScaleKind::Major).unwrap();
        assert_eq!(scale.notes(), &[C, D, E, F, G, A, B]);
        assert_eq!(scale.flat_count(), 0);
        assert_eq!(scale.name(), "C Major");
    }

    #[test]
    fn test_a_minor_pentatonic() {
        let scale = Scale::new(A, ScaleKind::MinorPentatonic).unwrap();
        assert_eq!(scale.notes(), &[A, C, D, E, G]);
    }

    #[test]
    fn test_numeric_kinds() {
        let blues = Scale::new(C, ScaleKind::Blues).unwrap();
        assert_eq!(blues.notes(), &[C, Eb, F, Gb, G, Bb]);

        let harmonic = Scale::new(A, ScaleKind::HarmonicMinor).unwrap();
        assert_eq!(harmonic.notes(), &[A, B, C, D, E, F, Ab]);
    }

    #[test]
    fn test_cardinality() {
        for root in PitchClass::ALL {
            for kind in ScaleKind::ALL {
                let scale = Scale::new(root, kind).unwrap();
                let expected = match kind {
                    ScaleKind::MajorPentatonic | ScaleKind::MinorPentatonic => 5,
                    ScaleKind::Blues => 6,
                    _ => 7,
                };
                assert_eq!(scale.len(), expected, "{:?}", scale);
                assert_eq!(scale.notes()[0], root);
            }
        }
    }

    #[test]
    fn test_custom_kind_has_no_formula() {
        assert_eq!(
            Scale::new(C, ScaleKind::Custom),
            Err(TheoryError::UnknownScaleKind("Custom".to_string()))
        );
    }

    #[test]
    fn test_custom_scale() {
        let formula = ScaleFormula::Numerics(
            ["1", "b2", "b3", "3", "b5", "b6", "b7"].iter().map(|s| s.to_string()).collect(),
        );
        let scale = Scale::custom(C, "Super Locrian", formula).unwrap();
        assert_eq!(scale.kind(), ScaleKind::Custom);
        assert_eq!(scale.notes(), &[C, Db, Eb, E, Gb, Ab, Bb]);
        assert_eq!(scale.name(), "C Super Locrian");
        assert_eq!(scale.flat_count(), 5);
    }

    #[test]
    fn test_custom_formula_must_start_on_root() {
        let formula = ScaleFormula::Intervals(vec![
            Interval::MajorSecond,
            Interval::MajorThird,
            Interval::PerfectFifth,
        ]);
        assert_eq!(
            Scale::custom(C, "Odd", formula),
            Err(TheoryError::FormulaWithoutRoot {
                scale: "C Odd".to_string(),
                first: Interval::MajorSecond.to_string(),
            })
        );

        let numerics = ScaleFormula::Numerics(vec!["3".to_string(), "5".to_string()]);
        assert!(matches!(
            Scale::custom(D, "Shell", numerics),
            Err(TheoryError::FormulaWithoutRoot { .. })
        ));

        assert!(matches!(
            Scale::custom(C, "Empty", ScaleFormula::Intervals(Vec::new())),
            Err(TheoryError::FormulaWithoutRoot { .. })
        ));

        // Steps always start on the root
        let steps = ScaleFormula::Steps(Vec::new());
        let scale = Scale::custom(E, "Drone", steps).unwrap();
        assert_eq!(scale.notes(), &[E]);
    }

    #[test]
    fn test_formulas() {
        let scale = Scale::new(D, ScaleKind::Dorian).unwrap();
        assert_eq!(scale.numeric_formula(), vec!["1", "2", "b3", "4", "5", "6", "b7"]);
        assert_eq!(scale.creation_formula().encoding(), "steps");
        assert_eq!(scale.interval_formula()[2], Interval::MinorThird);
    }

    #[test]
    fn test_degrees() {
        let scale = Scale::new(G, ScaleKind::Major).unwrap();
        assert!(scale.contains(Gb));
        assert!(!scale.contains(F));
        assert_eq!(scale.degree_of(G), Some(1));
        assert_eq!(scale.degree_of(D), Some(5));
        assert_eq!(scale.note_at_degree(7), Some(Gb));
        assert_eq!(scale.note_at_degree(0), None);
        assert_eq!(scale.note_at_degree(8), None);
    }

    #[test]
    fn test_display_and_debug() {
        let scale = Scale::new(C, ScaleKind::Major).unwrap();
        assert_eq!(format!("{:?}", scale), "Scale(C, Major)");
        assert_eq!(scale.to_string(), "C Major: C, D, E, F, G, A, B");
    }

    #[test]
    fn test_modes_from_note() {
        let modes = modes_from_note(C).unwrap();
        assert_eq!(modes.len(), 7);
        assert_eq!(modes[1].root(), D);
        assert_eq!(modes[1].kind(), ScaleKind::Dorian);
        assert_eq!(modes[6].root(), B);
        assert_eq!(modes[6].kind(), ScaleKind::Locrian);

        // Every mode of C Ionian uses the same seven notes
        for mode in &modes {
            for note in mode.notes() {
                assert!(modes[0].contains(*note));
            }
        }
    }

    #[test]
    fn test_random_scale() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let scale = Scale::random(&mut rng).unwrap();
            assert!(scale.len() >= 5);
        }
    }
}
