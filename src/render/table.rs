// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wirebridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use crate::format::entries::{grid_to_entries, PlacementEntry};
use crate::model::{CellKind, Grid, GridPoint};

const COLUMN_GAP: &str = "  ";
const BLOCKING_LABEL: &str = "#";

/// Largest table (columns times rows) either renderer will lay out.
pub const MAX_TABLE_CELLS: u64 = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    TooLarge { columns: u64, rows: u64 },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge { columns, rows } => write!(
                f,
                "table of {columns}x{rows} cells exceeds the limit of {MAX_TABLE_CELLS} cells"
            ),
        }
    }
}

impl std::error::Error for TableError {}

fn check_size(columns: u64, rows: u64) -> Result<(), TableError> {
    if columns.saturating_mul(rows) > MAX_TABLE_CELLS {
        return Err(TableError::TooLarge { columns, rows });
    }
    Ok(())
}

/// Assigns small numeric ids to building tags in first-seen order.
#[derive(Debug, Default)]
struct Legend {
    tags: Vec<String>,
}

impl Legend {
    fn id_of(&mut self, tag: &str) -> usize {
        if let Some(idx) = self.tags.iter().position(|known| known == tag) {
            return idx + 1;
        }
        self.tags.push(tag.to_owned());
        self.tags.len()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let mut buffer = itoa::Buffer::new();
        self.tags
            .iter()
            .enumerate()
            .map(|(idx, tag)| vec![tag.clone(), buffer.format(idx + 1).to_owned()])
            .collect()
    }
}

fn cell_label(legend: &mut Legend, entry: &PlacementEntry) -> String {
    let mut buffer = itoa::Buffer::new();
    let mut label = buffer.format(legend.id_of(&entry.tag)).to_owned();
    label.push(',');
    label.push_str(buffer.format(entry.rotation));
    label
}

/// Lays out rows as left-aligned, space-padded columns with trailing blanks removed.
fn format_rows(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (col, value) in row.iter().enumerate() {
            widths[col] = widths[col].max(value.chars().count());
        }
    }

    let mut lines = Vec::<String>::with_capacity(rows.len());
    for row in rows {
        let mut line = String::new();
        for (col, value) in row.iter().enumerate() {
            if col > 0 {
                line.push_str(COLUMN_GAP);
            }
            line.push_str(value);
            let pad = widths[col] - value.chars().count();
            line.extend(std::iter::repeat(' ').take(pad));
        }
        lines.push(line.trim_end_matches(' ').to_owned());
    }

    lines.join("\n")
}

fn render_with_legend(rows: &[Vec<String>], legend: &Legend) -> String {
    let mut out = format_rows(rows);
    let legend_rows = legend.rows();
    if !legend_rows.is_empty() {
        out.push('\n');
        out.push_str(&format_rows(&legend_rows));
    }
    out
}

/// Prints blueprint entries as a table of `<building id>,<rotation>` cells.
///
/// The table spans the bounding box of the entries. Building ids are numbered in the order the
/// tags first appear and listed in a legend below the table. Returns an empty string when there
/// are no entries, and [`TableError::TooLarge`] when the bounding box spans more than
/// [`MAX_TABLE_CELLS`] cells.
pub fn render_entries_table(entries: &[PlacementEntry]) -> Result<String, TableError> {
    let (Some(min_x), Some(max_x)) =
        (entries.iter().map(|e| e.x).min(), entries.iter().map(|e| e.x).max())
    else {
        return Ok(String::new());
    };
    let min_y = entries.iter().map(|e| e.y).min().unwrap_or(0);
    let max_y = entries.iter().map(|e| e.y).max().unwrap_or(0);

    let span = |min: i32, max: i32| (i64::from(max) - i64::from(min) + 1).unsigned_abs();
    check_size(span(min_x, max_x), span(min_y, max_y))?;

    let mut legend = Legend::default();
    let mut labels = BTreeMap::<GridPoint, String>::new();
    for entry in entries {
        labels.insert(entry.point(), cell_label(&mut legend, entry));
    }

    let rows = (min_y..=max_y)
        .map(|y| {
            (min_x..=max_x)
                .map(|x| labels.get(&GridPoint::new(x, y)).cloned().unwrap_or_default())
                .collect()
        })
        .collect::<Vec<Vec<String>>>();

    Ok(render_with_legend(&rows, &legend))
}

/// Prints the whole grid in the same layout, marking blocking cells with `#`.
pub fn render_grid_table(grid: &Grid) -> Result<String, TableError> {
    let too_large =
        TableError::TooLarge { columns: u64::from(grid.width()), rows: u64::from(grid.height()) };
    check_size(u64::from(grid.width()), u64::from(grid.height()))?;
    let width = i32::try_from(grid.width()).map_err(|_| too_large)?;
    let height = i32::try_from(grid.height()).map_err(|_| too_large)?;

    let mut legend = Legend::default();
    let mut labels = BTreeMap::<GridPoint, String>::new();
    for entry in grid_to_entries(grid) {
        labels.insert(entry.point(), cell_label(&mut legend, &entry));
    }
    for (point, cell) in grid.occupied() {
        if cell.kind() == CellKind::Blocking {
            labels.insert(point, BLOCKING_LABEL.to_owned());
        }
    }

    let rows = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| labels.get(&GridPoint::new(x, y)).cloned().unwrap_or_default())
                .collect()
        })
        .collect::<Vec<Vec<String>>>();

    Ok(render_with_legend(&rows, &legend))
}
