//! Core value types for table configuration and row storage.
//!
//! This module defines the small enums callers use to configure a table
//! (alignment, trim policy, separator kinds, footer modes) and the
//! crate-internal physical-row storage produced by wrap-expansion.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Text alignment within a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides; odd remainder goes right).
    Center,
}

/// Whitespace trimming applied to each line of a cell after wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrimMode {
    /// Trim leading and trailing whitespace (the default).
    #[default]
    Both,
    /// Trim leading whitespace only.
    Start,
    /// Trim trailing whitespace only.
    End,
    /// Keep lines exactly as wrapped.
    None,
}

impl TrimMode {
    /// Apply this trim policy to a single line.
    pub fn apply<'a>(&self, line: &'a str) -> &'a str {
        match self {
            TrimMode::Both => line.trim(),
            TrimMode::Start => line.trim_start(),
            TrimMode::End => line.trim_end(),
            TrimMode::None => line,
        }
    }
}

/// The kind of a separator marker inserted between rows.
///
/// `Row` is a light rule between adjacent rows; `Section` marks a break
/// between groups of rows. Both kinds currently draw the same rule; they
/// stay distinct so callers can record intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorKind {
    /// Separator between adjacent rows.
    Row,
    /// Separator between sections of rows.
    Section,
}

/// A table footer: either one string spanning the full table width, or one
/// cell per column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Footer {
    /// A single string padded across the full inner table width.
    Text(String),
    /// One footer cell per column, rendered like a header row.
    Columns(Vec<String>),
}

impl From<String> for Footer {
    fn from(text: String) -> Self {
        Footer::Text(text)
    }
}

impl From<&str> for Footer {
    fn from(text: &str) -> Self {
        Footer::Text(text.to_string())
    }
}

impl From<Vec<String>> for Footer {
    fn from(cells: Vec<String>) -> Self {
        Footer::Columns(cells)
    }
}

impl From<Vec<&str>> for Footer {
    fn from(cells: Vec<&str>) -> Self {
        Footer::Columns(cells.into_iter().map(|s| s.to_string()).collect())
    }
}

impl From<&[&str]> for Footer {
    fn from(cells: &[&str]) -> Self {
        Footer::Columns(cells.iter().map(|s| s.to_string()).collect())
    }
}

/// One physical row of cell text, keyed sparsely by column index.
///
/// Wrap-expansion can leave continuation rows populated only in the columns
/// whose content spilled over, so storage is a sparse map rather than a
/// dense vector. `logical_start` records whether a caller-supplied row began
/// at this slot; rendering draws a light separator before every logical
/// start after the first entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct CellRow {
    cells: BTreeMap<usize, String>,
    logical_start: bool,
}

impl CellRow {
    /// A fresh slot beginning a logical row.
    pub(crate) fn start() -> Self {
        CellRow {
            cells: BTreeMap::new(),
            logical_start: true,
        }
    }

    /// A continuation slot holding overflow lines from wrapping.
    pub(crate) fn continuation() -> Self {
        CellRow::default()
    }

    pub(crate) fn is_logical_start(&self) -> bool {
        self.logical_start
    }

    pub(crate) fn set_cell(&mut self, column: usize, text: String) {
        self.cells.insert(column, text);
    }

    pub(crate) fn cell(&self, column: usize) -> Option<&str> {
        self.cells.get(&column).map(String::as_str)
    }

    /// Highest populated column index + 1, or 0 for an empty slot.
    pub(crate) fn span(&self) -> usize {
        self.cells
            .last_key_value()
            .map(|(column, _)| column + 1)
            .unwrap_or(0)
    }
}

/// One slot in the table's row stream: cell data or a separator marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum RowEntry {
    Cells(CellRow),
    Rule(SeparatorKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Align tests ---

    #[test]
    fn align_default_is_left() {
        assert_eq!(Align::default(), Align::Left);
    }

    #[test]
    fn align_serde_roundtrip() {
        let values = [Align::Left, Align::Right, Align::Center];
        for align in values {
            let json = serde_json::to_string(&align).unwrap();
            let parsed: Align = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, align);
        }
    }

    // --- TrimMode tests ---

    #[test]
    fn trim_mode_default_is_both() {
        assert_eq!(TrimMode::default(), TrimMode::Both);
    }

    #[test]
    fn trim_mode_apply() {
        let line = "  x  ";
        assert_eq!(TrimMode::Both.apply(line), "x");
        assert_eq!(TrimMode::Start.apply(line), "x  ");
        assert_eq!(TrimMode::End.apply(line), "  x");
        assert_eq!(TrimMode::None.apply(line), "  x  ");
    }

    #[test]
    fn trim_mode_serde_lowercase() {
        assert_eq!(serde_json::to_string(&TrimMode::Both).unwrap(), "\"both\"");
        let parsed: TrimMode = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(parsed, TrimMode::None);
    }

    // --- Footer tests ---

    #[test]
    fn footer_from_str_is_text() {
        let footer: Footer = "Total: 2".into();
        assert_eq!(footer, Footer::Text("Total: 2".to_string()));
    }

    #[test]
    fn footer_from_vec_is_columns() {
        let footer: Footer = vec!["a", "b"].into();
        assert_eq!(
            footer,
            Footer::Columns(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn footer_from_slice_is_columns() {
        let cells: &[&str] = &["a", "b"];
        let footer: Footer = cells.into();
        assert_eq!(
            footer,
            Footer::Columns(vec!["a".to_string(), "b".to_string()])
        );
    }

    // --- CellRow tests ---

    #[test]
    fn cell_row_span_is_highest_index_plus_one() {
        let mut row = CellRow::start();
        assert_eq!(row.span(), 0);
        row.set_cell(0, "a".to_string());
        assert_eq!(row.span(), 1);
        row.set_cell(4, "b".to_string());
        assert_eq!(row.span(), 5);
    }

    #[test]
    fn cell_row_start_flags() {
        assert!(CellRow::start().is_logical_start());
        assert!(!CellRow::continuation().is_logical_start());
    }

    #[test]
    fn cell_row_sparse_lookup() {
        let mut row = CellRow::continuation();
        row.set_cell(1, "spill".to_string());
        assert_eq!(row.cell(0), None);
        assert_eq!(row.cell(1), Some("spill"));
    }
}
