// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wirebridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use super::cell::Cell;
use super::face::Face;

/// An integer point in grid coordinates (`y` grows southwards).
///
/// Points may lie outside any particular grid; terminals usually do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPoint {
    x: i32,
    y: i32,
}

impl GridPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Returns `None` if either coordinate leaves the `i32` range.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self { x: self.x.checked_add(dx)?, y: self.y.checked_add(dy)? })
    }

    /// The neighbouring point reached by leaving through `face`, if it is representable.
    pub fn step(self, face: Face) -> Option<Self> {
        let (dx, dy) = face.delta();
        self.offset(dx, dy)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    OutOfBounds { x: i32, y: i32, width: u32, height: u32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { x, y, width, height } => {
                write!(f, "out of bounds: ({x},{y}) for {width}x{height} grid")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A fixed-size sparse grid of cells.
///
/// Only non-empty cells are stored; a missing entry reads as [`Cell::empty`]. Cloning is deep,
/// so a clone can be mutated without affecting the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: BTreeMap<GridPoint, Cell>,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, cells: BTreeMap::new() }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, point: GridPoint) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    fn check_bounds(&self, point: GridPoint) -> Result<(), GridError> {
        if self.in_bounds(point) {
            return Ok(());
        }
        Err(GridError::OutOfBounds {
            x: point.x,
            y: point.y,
            width: self.width,
            height: self.height,
        })
    }

    /// Returns the cell at `point`, or an empty cell if nothing is stored there.
    pub fn get(&self, point: GridPoint) -> Result<Cell, GridError> {
        self.check_bounds(point)?;
        Ok(self.cells.get(&point).copied().unwrap_or_default())
    }

    /// Stores `cell` at `point`, replacing whatever was there.
    pub fn set(&mut self, point: GridPoint, cell: Cell) -> Result<(), GridError> {
        self.check_bounds(point)?;
        if cell.is_empty() {
            self.cells.remove(&point);
        } else {
            self.cells.insert(point, cell);
        }
        Ok(())
    }

    /// Non-empty cells in `(x, y)` order.
    pub fn occupied(&self) -> impl Iterator<Item = (GridPoint, Cell)> + '_ {
        self.cells.iter().map(|(point, cell)| (*point, *cell))
    }

    pub fn occupied_len(&self) -> usize {
        self.cells.len()
    }
}
