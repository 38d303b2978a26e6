// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wirebridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Cell, CellKind, Grid, GridError, GridPoint};

/// One building in a blueprint.
///
/// Field names follow the game's single-letter keys. The game leaves out zero coordinates and
/// rotations, so `X`, `Y` and `R` default to `0`. Keys this crate does not interpret are kept in
/// `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementEntry {
    #[serde(rename = "X", default)]
    pub x: i32,
    #[serde(rename = "Y", default)]
    pub y: i32,
    #[serde(rename = "R", default)]
    pub rotation: u8,
    #[serde(rename = "T")]
    pub tag: String,
    /// Constant signal value, stored by the game as base64 of 8 big-endian bytes.
    #[serde(
        rename = "C",
        default,
        skip_serializing_if = "Option::is_none",
        with = "constant_signal"
    )]
    pub constant: Option<u64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl PlacementEntry {
    pub fn new(x: i32, y: i32, rotation: u8, tag: impl Into<String>) -> Self {
        Self { x, y, rotation, tag: tag.into(), constant: None, extra: BTreeMap::new() }
    }

    pub fn point(&self) -> GridPoint {
        GridPoint::new(self.x, self.y)
    }

    /// The cell this entry places, treating every non-wire building as blocking.
    pub fn cell(&self) -> Cell {
        match CellKind::from_tag(&self.tag) {
            Some(kind) => Cell::new(kind, self.rotation),
            None => Cell::blocking(),
        }
    }
}

mod constant_signal {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_str(&STANDARD.encode(value.to_be_bytes())),
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let bytes = STANDARD.decode(raw.as_bytes()).map_err(serde::de::Error::custom)?;
        if bytes.len() > 8 {
            return Err(serde::de::Error::custom(format!(
                "constant signal has {} bytes, expected at most 8",
                bytes.len()
            )));
        }
        Ok(Some(bytes.iter().fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte))))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    OutOfBounds { index: usize, source: GridError },
    InvalidRotation { index: usize, rotation: u8 },
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, source } => write!(f, "entry #{index}: {source}"),
            Self::InvalidRotation { index, rotation } => {
                write!(f, "entry #{index}: rotation {rotation} is not in 0..=3")
            }
        }
    }
}

impl std::error::Error for EntryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutOfBounds { source, .. } => Some(source),
            Self::InvalidRotation { .. } => None,
        }
    }
}

/// Lists one entry per wire cell of `grid`, in `(x, y)` order.
///
/// Empty and blocking cells are not part of a wiring blueprint and are skipped.
pub fn grid_to_entries(grid: &Grid) -> Vec<PlacementEntry> {
    grid.occupied()
        .filter_map(|(point, cell)| {
            let tag = cell.kind().tag()?;
            Some(PlacementEntry::new(point.x(), point.y(), cell.rotation(), tag))
        })
        .collect()
}

/// Builds a `width`×`height` grid from blueprint entries.
///
/// Wire entries become wire cells; any other building becomes a blocking cell.
pub fn entries_to_grid(
    entries: &[PlacementEntry],
    width: u32,
    height: u32,
) -> Result<Grid, EntryError> {
    let mut grid = Grid::new(width, height);
    for (index, entry) in entries.iter().enumerate() {
        if entry.rotation > 3 {
            return Err(EntryError::InvalidRotation { index, rotation: entry.rotation });
        }
        grid.set(entry.point(), entry.cell())
            .map_err(|source| EntryError::OutOfBounds { index, source })?;
    }
    Ok(grid)
}
