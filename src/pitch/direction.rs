// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Direction of movement in pitch space.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// Aliases accepted for upward movement
pub const UP_DIRECTIONS: [&str; 3] = ["u", "up", "above"];

/// Aliases accepted for downward movement
pub const DOWN_DIRECTIONS: [&str; 3] = ["d", "down", "below"];

/// Up or down in pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    /// The opposite direction
    pub fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// +1 for up, -1 for down
    pub fn sign(self) -> i32 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }
}

impl FromStr for Direction {
    type Err = TheoryError;

    /// Parse one of "u", "up", "above", "d", "down", "below" in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        if UP_DIRECTIONS.contains(&lowered.as_str()) {
            Ok(Direction::Up)
        } else if DOWN_DIRECTIONS.contains(&lowered.as_str()) {
            Ok(Direction::Down)
        } else {
            Err(TheoryError::InvalidDirection(s.to_string()))
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}
