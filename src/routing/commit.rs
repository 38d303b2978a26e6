// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wirebridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::cell::{shape_for_faces, Cell, CellKind};
use crate::model::face::{direction_between, Face};
use crate::model::grid::{Grid, GridError, GridPoint};
use crate::model::route::Route;

/// Validates the newest edge of `route` and writes the cell it implies into `grid`.
///
/// Only the last edge is evaluated: every earlier cell was committed when the route grew to
/// include it. The edge's first cell must be empty, or hold a straight wire that the new wire
/// crosses at a right angle (it then becomes a bridge). A single-cell route has no direction
/// yet and is always accepted.
///
/// Returns `Ok(false)` for an illegal edge, leaving `grid` untouched. Errors are reserved for
/// route cells outside the grid.
pub fn commit_step(route: &Route, grid: &mut Grid) -> Result<bool, GridError> {
    let len = route.len();
    if len < 2 {
        return Ok(true);
    }

    let from = route.points()[len - 2];
    let to = route.points()[len - 1];
    let outgoing = direction_between(from, to).expect("consecutive route points are adjacent");
    place_wire(grid, from, route.entry_face_at(len - 2), outgoing)
}

/// Writes the wire connecting `entry` and `exit` at `point` if the cell there allows it.
pub(crate) fn place_wire(
    grid: &mut Grid,
    point: GridPoint,
    entry: Face,
    exit: Face,
) -> Result<bool, GridError> {
    let existing = grid.get(point)?;
    if !matches!(existing.kind(), CellKind::Empty | CellKind::StraightWire) {
        return Ok(false);
    }

    let Ok(required) = shape_for_faces(entry, exit) else {
        log::trace!("wire at {point} would turn back through face {entry}");
        return Ok(false);
    };

    if existing.is_empty() {
        grid.set(point, required)?;
        return Ok(true);
    }

    if crosses_perpendicular(existing, required) {
        grid.set(point, Cell::bridge())?;
        return Ok(true);
    }

    log::trace!("wire at {point} would overlap the existing straight wire");
    Ok(false)
}

fn crosses_perpendicular(existing: Cell, required: Cell) -> bool {
    required.kind() == CellKind::StraightWire && required.rotation() != existing.rotation()
}
