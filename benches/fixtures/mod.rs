// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wirebridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic routing fixtures (no RNG).

use wirebridge::model::{Cell, CellKind, Face, Grid, GridPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// 3x3 board with components in opposite corners.
    TwoComponents,
    /// Open 4x4 board, terminals on opposite sides.
    Open4,
    /// Open 5x5 board, terminals on opposite sides.
    Open5,
    /// 6x5 board split by an earlier vertical wire that has to be bridged.
    BridgedWall,
}

pub struct Board {
    pub grid: Grid,
    pub start: (GridPoint, Face),
    pub end: (GridPoint, Face),
}

fn gp(x: i32, y: i32) -> GridPoint {
    GridPoint::new(x, y)
}

fn open(width: u32, height: u32) -> Board {
    Board {
        grid: Grid::new(width, height),
        start: (gp(-1, 0), Face::E),
        end: (gp(width as i32, height as i32 - 1), Face::W),
    }
}

pub fn board(case: Case) -> Board {
    match case {
        Case::TwoComponents => {
            let mut grid = Grid::new(3, 3);
            grid.set(gp(0, 0), Cell::blocking()).expect("in bounds");
            grid.set(gp(2, 2), Cell::blocking()).expect("in bounds");
            Board { grid, start: (gp(0, 0), Face::S), end: (gp(2, 2), Face::N) }
        }
        Case::Open4 => open(4, 4),
        Case::Open5 => open(5, 5),
        Case::BridgedWall => {
            let mut board = open(6, 5);
            for y in 0..4 {
                board
                    .grid
                    .set(gp(3, y), Cell::new(CellKind::StraightWire, 1))
                    .expect("in bounds");
            }
            board.grid.set(gp(3, 4), Cell::blocking()).expect("in bounds");
            board
        }
    }
}
