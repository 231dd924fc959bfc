// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale engine: formulas, scale construction and diatonic degrees

pub mod build;
pub mod diatonic;
pub mod formula;
pub mod kind;
pub mod registry;

pub use build::{modes_from_note, Scale};
pub use diatonic::{DiatonicScale, ScaleDegree};
pub use formula::{ScaleFormula, Step};
pub use kind::ScaleKind;
pub use registry::{CustomScaleDefinition, ScaleRegistry};
