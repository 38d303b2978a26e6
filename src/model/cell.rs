// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wirebridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::SmallVec;

use super::face::Face;

/// What occupies a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellKind {
    Empty,
    /// Part of existing non-wire equipment; never carries a wire.
    Blocking,
    StraightWire,
    JunctionWire,
    CornerWire,
    CrossWire,
    /// Two independent perpendicular wires crossing in one cell.
    BridgeWire,
}

impl CellKind {
    pub const WIRES: [CellKind; 5] = [
        CellKind::StraightWire,
        CellKind::JunctionWire,
        CellKind::CornerWire,
        CellKind::CrossWire,
        CellKind::BridgeWire,
    ];

    pub fn is_wire(self) -> bool {
        !matches!(self, Self::Empty | Self::Blocking)
    }

    /// Whether the rotation changes which faces the cell connects.
    pub fn is_rotation_sensitive(self) -> bool {
        matches!(self, Self::StraightWire | Self::JunctionWire | Self::CornerWire)
    }

    /// Building identifier used for this wire shape in blueprint entries.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            Self::Empty | Self::Blocking => None,
            Self::StraightWire => Some("WireDefaultInternalVariant"),
            Self::JunctionWire => Some("WireDefaultJunctionInternalVariant"),
            Self::CornerWire => Some("WireDefaultLeftInternalVariant"),
            Self::CrossWire => Some("WireDefaultCrossInternalVariant"),
            Self::BridgeWire => Some("WireDefaultBridgeInternalVariant"),
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::WIRES.into_iter().find(|kind| kind.tag() == Some(tag))
    }

    fn base_faces(self) -> &'static [Face] {
        match self {
            Self::Empty | Self::Blocking => &[],
            Self::StraightWire => &[Face::E, Face::W],
            Self::JunctionWire => &[Face::N, Face::E, Face::S],
            Self::CornerWire => &[Face::N, Face::W],
            Self::CrossWire | Self::BridgeWire => &[Face::N, Face::E, Face::S, Face::W],
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Blocking => "blocking",
            Self::StraightWire => "straight",
            Self::JunctionWire => "junction",
            Self::CornerWire => "corner",
            Self::CrossWire => "cross",
            Self::BridgeWire => "bridge",
        };
        f.write_str(name)
    }
}

/// A grid cell: a shape plus a clockwise rotation in quarter turns (`0..=3`).
///
/// Rotation only matters for straight, junction and corner wires; the other kinds are kept at
/// rotation 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    kind: CellKind,
    rotation: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

impl Cell {
    pub fn new(kind: CellKind, rotation: u8) -> Self {
        let rotation = if kind.is_rotation_sensitive() { rotation % 4 } else { 0 };
        Self { kind, rotation }
    }

    pub const fn empty() -> Self {
        Self { kind: CellKind::Empty, rotation: 0 }
    }

    pub const fn blocking() -> Self {
        Self { kind: CellKind::Blocking, rotation: 0 }
    }

    pub const fn bridge() -> Self {
        Self { kind: CellKind::BridgeWire, rotation: 0 }
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn is_empty(&self) -> bool {
        self.kind == CellKind::Empty
    }

    /// Faces this cell connects to, in clockwise order starting from the lowest ordinal.
    pub fn faces(&self) -> SmallVec<[Face; 4]> {
        let mut faces = self
            .kind
            .base_faces()
            .iter()
            .map(|face| face.rotate_cw(self.rotation))
            .collect::<SmallVec<[Face; 4]>>();
        faces.sort();
        faces
    }

    pub fn connects(&self, face: Face) -> bool {
        self.faces().contains(&face)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A wire cannot connect a face to itself.
    InvalidFacePair { face: Face },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFacePair { face } => {
                write!(f, "no wire connects face {face} to itself")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Returns the wire cell that connects faces `a` and `b`.
///
/// Opposite faces give a straight wire (rotation 1 vertical, 2 horizontal); adjacent faces give
/// a corner whose rotation is fixed per unordered pair.
pub fn shape_for_faces(a: Face, b: Face) -> Result<Cell, GeometryError> {
    use Face::{E, N, S, W};

    let (kind, rotation) = match (a.min(b), a.max(b)) {
        (N, S) => (CellKind::StraightWire, 1),
        (E, W) => (CellKind::StraightWire, 2),
        (N, W) => (CellKind::CornerWire, 0),
        (N, E) => (CellKind::CornerWire, 1),
        (E, S) => (CellKind::CornerWire, 2),
        (S, W) => (CellKind::CornerWire, 3),
        _ => return Err(GeometryError::InvalidFacePair { face: a }),
    };

    Ok(Cell::new(kind, rotation))
}
