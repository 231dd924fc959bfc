// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Key engine: signatures, relative/parallel keys and chord tables

pub mod build;
pub mod kind;
pub mod table;

pub use build::{Key, ORDER_OF_FLATS, ORDER_OF_SHARPS};
pub use kind::KeyKind;
pub use table::ChordTable;
