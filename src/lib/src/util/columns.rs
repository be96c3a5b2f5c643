//! Lays out display entries in fixed width columns across the terminal
//!

use colored::Colorize;
use std::io::Write;

use crate::constants::{COLUMN_PADDING, DEFAULT_TERMINAL_WIDTH};
use crate::error::RtfsError;
use crate::model::{DisplayEntry, EntryType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub column_width: usize,
    pub columns_per_row: usize,
}

impl ColumnLayout {
    pub fn new(max_path_length: usize, terminal_width: usize) -> ColumnLayout {
        let column_width = max_path_length + COLUMN_PADDING;
        // Narrow terminals still get one entry per row
        let columns_per_row = (terminal_width / column_width).max(1);
        ColumnLayout {
            column_width,
            columns_per_row,
        }
    }

    /// Whether a line break goes before the entry at `idx`
    pub fn breaks_before(&self, idx: usize) -> bool {
        idx > 0 && idx % self.columns_per_row == 0
    }
}

/// Writes the entries left justified in columns, folders in blue.
///
/// The entries are written in the order given and output always ends with a
/// line break.
pub fn render(
    out: &mut impl Write,
    entries: &[DisplayEntry],
    max_path_length: usize,
    terminal_width: usize,
) -> Result<(), RtfsError> {
    let layout = ColumnLayout::new(max_path_length, terminal_width);
    log::debug!(
        "render {} entries with {:?} for width {terminal_width}",
        entries.len(),
        layout
    );

    for (idx, entry) in entries.iter().enumerate() {
        if layout.breaks_before(idx) {
            writeln!(out)?;
        }
        // Pad before coloring so escape codes do not count towards the width
        let cell = format!("{:<width$}", entry.path, width = layout.column_width);
        let cell = match entry.entry_type {
            EntryType::Folder => cell.blue(),
            EntryType::File => cell.normal(),
        };
        write!(out, "{cell}")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Width of the controlling terminal, then `$COLUMNS`, then 80
pub fn terminal_width() -> usize {
    if let Some((terminal_size::Width(width), _)) = terminal_size::terminal_size() {
        if width > 0 {
            return width as usize;
        }
    }

    std::env::var("COLUMNS")
        .ok()
        .and_then(|columns| columns.trim().parse::<usize>().ok())
        .filter(|columns| *columns > 0)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}
