// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wirebridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::grid::GridPoint;

/// One of the four compass directions a wire cell can connect through.
///
/// The ordinal order (`N=0, E=1, S=2, W=3`) is the clockwise order used by cell rotations.
/// Grid `y` grows southwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    N,
    E,
    S,
    W,
}

impl Face {
    pub const ALL: [Face; 4] = [Face::N, Face::E, Face::S, Face::W];

    pub fn ordinal(self) -> u8 {
        match self {
            Self::N => 0,
            Self::E => 1,
            Self::S => 2,
            Self::W => 3,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Self {
        match ordinal % 4 {
            0 => Self::N,
            1 => Self::E,
            2 => Self::S,
            _ => Self::W,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::N => Self::S,
            Self::E => Self::W,
            Self::S => Self::N,
            Self::W => Self::E,
        }
    }

    /// Turns the face clockwise by `steps` quarter turns.
    pub fn rotate_cw(self, steps: u8) -> Self {
        Self::from_ordinal(self.ordinal().wrapping_add(steps % 4))
    }

    /// Unit step `(dx, dy)` when leaving a cell through this face.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::N => (0, -1),
            Self::E => (1, 0),
            Self::S => (0, 1),
            Self::W => (-1, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::E => "E",
            Self::S => "S",
            Self::W => "W",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFaceError {
    value: String,
}

impl fmt::Display for ParseFaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown face {:?} (expected one of N, E, S, W)", self.value)
    }
}

impl std::error::Error for ParseFaceError {}

impl FromStr for Face {
    type Err = ParseFaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "N" | "n" => Ok(Self::N),
            "E" | "e" => Ok(Self::E),
            "S" | "s" => Ok(Self::S),
            "W" | "w" => Ok(Self::W),
            other => Err(ParseFaceError { value: other.to_owned() }),
        }
    }
}

/// Returns the face of `from` that leads to `to`.
///
/// `to` must be exactly one orthogonal step away from `from`; anything else (same point,
/// diagonal, farther away) yields `None`.
pub fn direction_between(from: GridPoint, to: GridPoint) -> Option<Face> {
    match (to.x() - from.x(), to.y() - from.y()) {
        (0, -1) => Some(Face::N),
        (1, 0) => Some(Face::E),
        (0, 1) => Some(Face::S),
        (-1, 0) => Some(Face::W),
        _ => None,
    }
}
