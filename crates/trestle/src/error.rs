//! Error types for table configuration and layout.

use thiserror::Error;

/// Errors surfaced by table configuration and layout computation.
///
/// Rendering is pure string computation, so every failure is synchronous and
/// reported to the immediate caller; a failed [`render`](crate::Table::render)
/// produces no partial output.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A style name that is not in the built-in registry.
    ///
    /// Raised by [`TableStyle::from_name`](crate::TableStyle::from_name) and
    /// [`Table::set_style_name`](crate::Table::set_style_name); the table's
    /// active style is left unchanged.
    #[error("unknown table style '{0}'")]
    UnknownStyle(String),

    /// A column width was requested for a column that no header, row, or
    /// footer cell populates.
    ///
    /// The maximum over an empty set is undefined, so this is reported
    /// explicitly instead of being coerced to zero.
    #[error("column {0} has no content to measure")]
    EmptyColumn(usize),
}
