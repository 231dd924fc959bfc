// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord engine

pub mod build;
pub mod kind;

pub use build::{unique_notes_in_chords, Chord};
pub use kind::ChordKind;
