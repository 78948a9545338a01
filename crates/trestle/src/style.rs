//! Visual styles controlling border characters, junctions, and padding.
//!
//! A [`TableStyle`] is a plain value: swap it wholesale on a table, pick a
//! built-in preset by name, or build a custom one from literal fields. Every
//! character the rendering algorithm touches is a typed field, so a style can
//! never be missing a character at render time.

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// The characters and flags used to draw a table.
///
/// # Example
///
/// ```rust
/// use trestle::TableStyle;
///
/// let style = TableStyle {
///     horizontal: '=',
///     ..TableStyle::default()
/// };
/// assert_eq!(style.vertical, '|');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStyle {
    /// Vertical border character between cells.
    pub vertical: char,
    /// Horizontal rule character.
    pub horizontal: char,
    /// Character filling the fixed padding gutters inside each cell.
    pub pad_char: char,
    /// Number of padding characters on each side of a cell.
    pub padding: usize,
    /// Leftmost junction of a horizontal rule.
    pub left_t: char,
    /// Interior junction of a horizontal rule.
    pub cross: char,
    /// Rightmost junction of a horizontal rule.
    pub right_t: char,
    /// Interior junction variant for the rules framing the header block.
    pub header_cross: char,
    /// Whether outer border rules (top border, closing borders) are drawn.
    pub outer_border: bool,
}

impl Default for TableStyle {
    /// The plain box style: `+`, `-`, and `|` with one space of padding.
    fn default() -> Self {
        TableStyle {
            vertical: '|',
            horizontal: '-',
            pad_char: ' ',
            padding: 1,
            left_t: '+',
            cross: '+',
            right_t: '+',
            header_cross: '+',
            outer_border: true,
        }
    }
}

impl TableStyle {
    /// The markdown-compatible style.
    ///
    /// Junctions are `|` so the header underline reads as a markdown
    /// delimiter row, and no outer border rules are drawn. Tables rendered
    /// with this style emit nothing after the last body row — no footer
    /// block and no closing rule.
    pub fn markdown() -> Self {
        TableStyle {
            vertical: '|',
            horizontal: '-',
            pad_char: ' ',
            padding: 1,
            left_t: '|',
            cross: '|',
            right_t: '|',
            header_cross: '|',
            outer_border: false,
        }
    }

    /// Look up a built-in style by registry name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trestle::{TableError, TableStyle};
    ///
    /// let style = TableStyle::from_name("markdown").unwrap();
    /// assert!(!style.outer_border);
    ///
    /// let err = TableStyle::from_name("nosuch").unwrap_err();
    /// assert_eq!(err, TableError::UnknownStyle("nosuch".to_string()));
    /// ```
    pub fn from_name(name: &str) -> Result<TableStyle, TableError> {
        match name {
            "default" => Ok(TableStyle::default()),
            "markdown" => Ok(TableStyle::markdown()),
            _ => Err(TableError::UnknownStyle(name.to_string())),
        }
    }

    /// Names accepted by [`TableStyle::from_name`].
    pub fn names() -> &'static [&'static str] {
        &["default", "markdown"]
    }

    /// Whether this style is the markdown preset.
    ///
    /// This is a field-wise comparison against [`TableStyle::markdown`]; a
    /// modified copy of the preset is treated as a custom style.
    pub fn is_markdown(&self) -> bool {
        *self == TableStyle::markdown()
    }
}
