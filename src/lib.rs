// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wirebridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wirebridge: wire routing for Shapez 2 blueprints.
//!
//! Given two terminals (a point plus the face they connect through) and a grid that already holds
//! buildings and earlier wires, [`routing::find_routes`] enumerates every legal wire route between
//! them, crossing existing straight wires with bridges where needed. Each result carries its own
//! grid, which [`format`] turns into a pasteable blueprint code.

pub mod format;
pub mod model;
pub mod render;
pub mod routing;

pub use model::{Cell, CellKind, Face, Grid, GridPoint, Route};
pub use routing::{find_routes, RouteSearch, RoutedLayout, RoutingError, SearchOptions};
