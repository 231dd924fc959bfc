// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tonality - pitch arithmetic and harmonic derivation for Western tonal
//! music theory.
//!
//! Modules build on each other in this order:
//!
//! - [`pitch`]: pitch classes, intervals, transposition
//! - [`scale`]: scales from interval, step or numeric formulas; diatonic degrees
//! - [`chord`]: chords by interval stacking
//! - [`key`]: key signatures, relative/parallel keys, diatonic and secondary dominant chords
//! - [`progression`]: Roman-numeral progressions resolved in a key
//! - [`config`]: YAML/TOML theory files
//!
//! ```
//! use tonality::{Key, KeyKind, PitchClass, Progression};
//!
//! let key = Key::new(PitchClass::C, KeyKind::Major);
//! let progression = Progression::new(key, ["I", "IV", "V", "Q"]).unwrap();
//! assert_eq!(progression.to_string(), "C Major: CM FM GM X");
//! ```

pub mod chord;
pub mod config;
pub mod error;
pub mod key;
pub mod pitch;
pub mod progression;
pub mod scale;

pub use chord::{unique_notes_in_chords, Chord, ChordKind};
pub use config::TheoryFile;
pub use error::{TheoryError, TheoryResult};
pub use key::{ChordTable, Key, KeyKind};
pub use pitch::{
    chromatic_notes, interval_distance, notes_from_string, notes_to_string, transpose, Direction,
    Interval, PitchClass,
};
pub use progression::{chords_from_progression, Progression, ProgressionChord};
pub use scale::{
    modes_from_note, DiatonicScale, Scale, ScaleDegree, ScaleFormula, ScaleKind, ScaleRegistry,
};
