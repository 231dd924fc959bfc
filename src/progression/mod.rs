// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Progression resolver and named presets

pub mod presets;
pub mod resolve;

pub use presets::PresetGroup;
pub use resolve::{
    chords_from_progression, normalize_numeral, Progression, ProgressionChord, DEFAULT_PLACEHOLDER,
};
