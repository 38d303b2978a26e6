// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wirebridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Grid and wire geometry.
//!
//! A [`Grid`] holds [`Cell`]s; wire cells connect a set of compass [`Face`]s determined by their
//! kind and rotation. A [`Route`] is the self-avoiding chain of cells a single wire occupies.

pub mod cell;
pub mod face;
pub mod grid;
pub mod route;

pub use cell::{shape_for_faces, Cell, CellKind, GeometryError};
pub use face::{direction_between, Face, ParseFaceError};
pub use grid::{Grid, GridError, GridPoint};
pub use route::Route;
