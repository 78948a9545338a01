//! Fixed-width text tables for terminal output.
//!
//! `trestle` renders tabular data as monospace text with configurable
//! borders, cell padding, auto-sized columns, and word-wrapping of long
//! cells. It is a presentation-layer building block for CLIs: populate a
//! [`Table`], call [`Table::render`], and print the returned string wherever
//! output goes.
//!
//! # Example
//!
//! ```rust
//! use trestle::Table;
//!
//! let mut table = Table::new();
//! table
//!     .set_headers(["Name", "Age"])
//!     .add_row(["Alice", "30"])
//!     .add_row(["Bob", "7"])
//!     .set_footer("Total: 2");
//!
//! print!("{}", table.render().unwrap());
//! ```
//!
//! Column widths follow the widest cell in each column, counting display
//! columns rather than bytes so multi-byte and CJK text stays aligned. A
//! cell longer than the wrap width (50 columns by default) is greedily
//! word-wrapped and spills into continuation rows below its own.
//!
//! # Styles
//!
//! The default style draws `+`/`-`/`|` box borders. The built-in
//! `markdown` style produces pipe tables that render in any markdown
//! viewer:
//!
//! ```rust
//! use trestle::Table;
//!
//! let mut table = Table::new();
//! table
//!     .set_headers(["Name", "Age"])
//!     .add_row(["Alice", "30"]);
//! table.set_style_name("markdown").unwrap();
//!
//! assert_eq!(
//!     table.render().unwrap(),
//!     "| Name  | Age |\n\
//!      |-------|-----|\n\
//!      | Alice | 30  |\n",
//! );
//! ```
//!
//! Custom styles are plain [`TableStyle`] values with public fields.

mod error;
mod style;
mod table;
pub mod text;
mod types;

pub use error::TableError;
pub use style::TableStyle;
pub use table::Table;
pub use types::{Align, Footer, SeparatorKind, TrimMode};
