// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wirebridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire routing between two terminals.
//!
//! [`find_routes`] enumerates routes breadth-first. Every partial route owns a private copy of
//! the grid into which [`commit_step`] writes the cells it has settled so far, so a branch only
//! ever sees its own wires plus whatever the grid held initially.

pub mod commit;
pub mod search;

pub use commit::commit_step;
pub use search::{
    find_routes, find_routes_with_options, RouteSearch, RoutedLayout, RoutingError,
    SearchOptions, TerminalEnd,
};

#[cfg(test)]
mod tests;
