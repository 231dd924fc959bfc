// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for theory derivations.

use thiserror::Error;

use crate::pitch::Interval;
use crate::scale::ScaleDegree;

/// Result type for theory operations.
pub type TheoryResult<T> = Result<T, TheoryError>;

/// Errors that can occur while building or querying theory values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Direction token is not one of the up/down aliases.
    #[error("direction not recognized: '{0}'")]
    InvalidDirection(String),

    /// Note name could not be parsed.
    #[error("invalid note name: '{0}'")]
    InvalidNote(String),

    /// Scale kind has no formula, or the name is unknown.
    #[error("scale kind is not in any formula table: '{0}'")]
    UnknownScaleKind(String),

    /// Chord kind name or notation is unknown.
    #[error("unknown chord kind: '{0}'")]
    UnknownChordKind(String),

    /// Key kind name is unknown.
    #[error("unknown key kind: '{0}'")]
    UnknownKeyKind(String),

    /// Numeric formula token is not one of "1", "b2" .. "7".
    #[error("unknown numeric interval: '{0}'")]
    UnknownNumeric(String),

    /// Step formula token is not a whole or half step.
    #[error("unknown step: '{0}'")]
    UnknownStep(String),

    /// A custom formula does not start on the root.
    #[error("formula for {scale} must start on the root, found {first}")]
    FormulaWithoutRoot {
        /// Name of the offending scale.
        scale: String,
        /// First interval of the formula, empty if there was none.
        first: String,
    },

    /// A diatonic scale was built from a formula without 7 notes.
    #[error("diatonic scales must contain 7 notes, {scale} has {count}")]
    NotDiatonic {
        /// Name of the offending scale.
        scale: String,
        /// Number of notes it produced.
        count: usize,
    },

    /// The requested 7th-degree accessor does not apply to this scale.
    #[error("{scale} scales don't have a {degree}")]
    DegreeNotApplicable {
        /// Name of the scale.
        scale: String,
        /// The degree that was asked for.
        degree: ScaleDegree,
    },

    /// The 7th degree is neither a minor nor a major 2nd below the tonic.
    #[error("{scale} has a 7th degree a {interval} below the tonic")]
    IrregularSeventh {
        /// Name of the scale.
        scale: String,
        /// Distance from the 7th degree up to the tonic.
        interval: Interval,
    },
}
