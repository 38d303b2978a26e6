// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wirebridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plain-text views of grids and blueprints for inspection on a terminal.

mod table;

pub use table::{render_entries_table, render_grid_table, TableError, MAX_TABLE_CELLS};
