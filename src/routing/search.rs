// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wirebridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::VecDeque;
use std::fmt;

use super::commit::{commit_step, place_wire};
use crate::model::face::Face;
use crate::model::grid::{Grid, GridPoint};
use crate::model::route::Route;

/// Tuning knobs for [`find_routes_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    /// Drop partial routes once they occupy this many cells. `None` searches exhaustively.
    pub max_route_len: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEnd {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// The cell a terminal faces lies outside the grid (or past the coordinate range).
    TerminalOutOfBounds {
        terminal: TerminalEnd,
        point: GridPoint,
        face: Face,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TerminalOutOfBounds { terminal, point, face, width, height } => {
                let terminal = match terminal {
                    TerminalEnd::Start => "start",
                    TerminalEnd::End => "end",
                };
                write!(
                    f,
                    "{terminal} terminal at {point} facing {face} does not face into the \
                     {width}x{height} grid"
                )
            }
        }
    }
}

impl std::error::Error for RoutingError {}

/// A completed route together with the grid it was committed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedLayout {
    route: Route,
    grid: Grid,
}

impl RoutedLayout {
    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_parts(self) -> (Route, Grid) {
        (self.route, self.grid)
    }
}

/// One frontier entry: a partial route and the grid holding its committed cells.
///
/// Nodes never share a grid, so speculative writes of one branch stay invisible to the others.
#[derive(Debug, Clone)]
struct SearchNode {
    route: Route,
    grid: Grid,
}

/// Lazy breadth-first enumeration of every legal route between two terminals.
///
/// Routes come out in non-decreasing length. The iterator is finite: routes never revisit a
/// cell, so the number of partial routes is bounded by the grid size.
#[derive(Debug)]
pub struct RouteSearch {
    target: GridPoint,
    end_face: Face,
    options: SearchOptions,
    frontier: VecDeque<SearchNode>,
    expanded: usize,
    found: usize,
    exhausted: bool,
}

/// Enumerates routes from the terminal at `start` (facing `start_face`) to the terminal at
/// `end` (facing `end_face`) through `grid`.
///
/// Terminals are not part of the route: the first route cell is the neighbour of `start` in
/// `start_face`'s direction and the last one is the neighbour of `end` in `end_face`'s
/// direction. Both of those cells must lie inside `grid`.
pub fn find_routes(
    start: GridPoint,
    start_face: Face,
    end: GridPoint,
    end_face: Face,
    grid: Grid,
) -> Result<RouteSearch, RoutingError> {
    find_routes_with_options(start, start_face, end, end_face, grid, SearchOptions::default())
}

pub fn find_routes_with_options(
    start: GridPoint,
    start_face: Face,
    end: GridPoint,
    end_face: Face,
    grid: Grid,
    options: SearchOptions,
) -> Result<RouteSearch, RoutingError> {
    let first = facing_cell(&grid, TerminalEnd::Start, start, start_face)?;
    let target = facing_cell(&grid, TerminalEnd::End, end, end_face)?;

    log::debug!(
        "routing {start}/{start_face} -> {end}/{end_face} on {}x{} grid ({} occupied cells)",
        grid.width(),
        grid.height(),
        grid.occupied_len()
    );

    let mut frontier = VecDeque::new();
    frontier.push_back(SearchNode { route: Route::new(first, start_face.opposite()), grid });

    Ok(RouteSearch {
        target,
        end_face,
        options,
        frontier,
        expanded: 0,
        found: 0,
        exhausted: false,
    })
}

/// The in-bounds cell `point` faces through `face`.
fn facing_cell(
    grid: &Grid,
    terminal: TerminalEnd,
    point: GridPoint,
    face: Face,
) -> Result<GridPoint, RoutingError> {
    match point.step(face) {
        Some(cell) if grid.in_bounds(cell) => Ok(cell),
        _ => Err(RoutingError::TerminalOutOfBounds {
            terminal,
            point,
            face,
            width: grid.width(),
            height: grid.height(),
        }),
    }
}

impl RouteSearch {
    /// Number of partial routes taken off the frontier so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of completed routes yielded so far.
    pub fn found(&self) -> usize {
        self.found
    }

    fn complete(&self, node: &SearchNode) -> Option<RoutedLayout> {
        let mut route = node.route.clone();
        let mut grid = node.grid.clone();
        route.finish(self.end_face);

        let exit = self.end_face.opposite();
        if !matches!(place_wire(&mut grid, route.last(), route.entry_face(), exit), Ok(true)) {
            log::trace!("route reaching {} cannot connect to the end terminal", self.target);
            return None;
        }

        Some(RoutedLayout { route, grid })
    }

    fn expand(&mut self, node: &SearchNode) {
        if self.options.max_route_len.is_some_and(|max| node.route.len() >= max) {
            return;
        }

        for direction in Face::ALL {
            let mut route = node.route.clone();
            if !route.extend(direction, &node.grid) {
                continue;
            }

            // An out-of-bounds commit counts as a rejection.
            let mut grid = node.grid.clone();
            if matches!(commit_step(&route, &mut grid), Ok(true)) {
                self.frontier.push_back(SearchNode { route, grid });
            }
        }
    }

    fn step(&mut self, node: SearchNode) -> Option<RoutedLayout> {
        self.expanded += 1;

        let completed = if node.route.last() == self.target { self.complete(&node) } else { None };

        // Reaching the target does not end this branch.
        self.expand(&node);
        completed
    }
}

impl Iterator for RouteSearch {
    type Item = RoutedLayout;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.frontier.pop_front() {
            if let Some(layout) = self.step(node) {
                self.found += 1;
                return Some(layout);
            }
        }

        if !self.exhausted {
            self.exhausted = true;
            log::debug!("search exhausted: {} routes from {} nodes", self.found, self.expanded);
        }
        None
    }
}
