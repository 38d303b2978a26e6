// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wirebridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Blueprint import/export.
//!
//! Grids are exchanged with the game as lists of placement entries, which are in turn wrapped
//! into the game's `SHAPEZ2-1-…$` blueprint codes.

pub mod blueprint;
pub mod entries;

pub use blueprint::{
    decode_blueprint, decode_blueprint_entries, encode_blueprint, Blueprint, BlueprintDocument,
    BlueprintError, BlueprintIcon, BlueprintOptions,
};
pub use entries::{entries_to_grid, grid_to_entries, EntryError, PlacementEntry};
