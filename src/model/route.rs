// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wirebridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::cell::CellKind;
use super::face::{direction_between, Face};
use super::grid::{Grid, GridPoint};

/// An ordered, self-avoiding sequence of grid cells occupied by one wire.
///
/// `start_face` is the face through which the first cell is entered. `end_face` is only set once
/// the route has been completed, and names the direction the route exits into its destination
/// terminal.
///
/// Consecutive points are always one orthogonal step apart and no point repeats; both are
/// enforced by only growing a route through [`Route::extend`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    points: Vec<GridPoint>,
    start_face: Face,
    end_face: Option<Face>,
}

impl Route {
    pub fn new(start: GridPoint, start_face: Face) -> Self {
        Self { points: vec![start], start_face, end_face: None }
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn start_face(&self) -> Face {
        self.start_face
    }

    pub fn end_face(&self) -> Option<Face> {
        self.end_face
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> GridPoint {
        self.points[0]
    }

    pub fn last(&self) -> GridPoint {
        self.points[self.points.len() - 1]
    }

    pub fn contains(&self, point: GridPoint) -> bool {
        self.points.contains(&point)
    }

    /// The face through which the wire enters the cell at `index`.
    ///
    /// For the first cell this is `start_face`; for later cells it is the face pointing back at
    /// the previous cell.
    pub fn entry_face_at(&self, index: usize) -> Face {
        if index == 0 {
            return self.start_face;
        }
        direction_between(self.points[index], self.points[index - 1])
            .expect("consecutive route points are adjacent")
    }

    /// The face through which the wire enters its last cell.
    pub fn entry_face(&self) -> Face {
        self.entry_face_at(self.points.len() - 1)
    }

    /// Appends the neighbour of the last cell in `direction`.
    ///
    /// Returns `false` and leaves the route untouched if that neighbour is outside `grid`, is
    /// already part of the route, or holds anything other than an empty cell or a straight wire.
    pub fn extend(&mut self, direction: Face, grid: &Grid) -> bool {
        let Some(candidate) = self.last().step(direction) else {
            return false;
        };
        if self.contains(candidate) {
            return false;
        }

        let Ok(cell) = grid.get(candidate) else {
            return false;
        };
        if !matches!(cell.kind(), CellKind::Empty | CellKind::StraightWire) {
            return false;
        }

        self.points.push(candidate);
        true
    }

    /// Returns the last `n` cells as a route of their own.
    ///
    /// The suffix's `start_face` is the face of its first cell that points back at the cell
    /// preceding it, so the suffix describes its own entry. `end_face` is carried over. Asking
    /// for at least as many cells as the route has returns a copy of the whole route.
    pub fn suffix(&self, n: usize) -> Route {
        let n = n.max(1);
        if n >= self.points.len() {
            return self.clone();
        }

        let boundary = self.points.len() - n;
        Route {
            points: self.points[boundary..].to_vec(),
            start_face: self.entry_face_at(boundary),
            end_face: self.end_face,
        }
    }

    pub(crate) fn finish(&mut self, end_face: Face) {
        self.end_face = Some(end_face);
    }
}
