//! The table engine: row ingestion, lazy layout, and rendering.
//!
//! A [`Table`] is configured and populated through chained `&mut self` calls,
//! then rendered any number of times. Rows are wrap-expanded into physical
//! rows the moment they are appended; column widths are computed lazily at
//! render time and memoized until the next mutation.

use once_cell::unsync::OnceCell;

use crate::error::TableError;
use crate::style::TableStyle;
use crate::text::{display_width, pad_to_width, wrap_cell};
use crate::types::{Align, CellRow, Footer, RowEntry, SeparatorKind, TrimMode};

/// Default wrap width in display columns.
const DEFAULT_WRAP_WIDTH: usize = 50;

/// Derived layout: the column count and one width per column.
#[derive(Clone, Debug)]
struct Layout {
    columns: usize,
    widths: Vec<usize>,
}

/// Which junction set a horizontal rule uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RuleKind {
    /// Rules framing the header block.
    Header,
    /// Every other rule: row separators, markers, closing rules.
    Body,
}

/// A text table with auto-sized columns, cell wrapping, and pluggable styles.
///
/// # Example
///
/// ```rust
/// use trestle::Table;
///
/// let mut table = Table::new();
/// table
///     .set_headers(["Name", "Age"])
///     .add_row(["Alice", "30"])
///     .add_row(["Bob", "7"]);
///
/// let text = table.render().unwrap();
/// assert!(text.starts_with("+-------+-----+\n| Name  | Age |\n"));
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    headers: Vec<String>,
    entries: Vec<RowEntry>,
    footer: Option<Footer>,
    style: TableStyle,
    wrap_width: usize,
    trim: TrimMode,
    layout: OnceCell<Layout>,
}

impl Default for Table {
    fn default() -> Self {
        Table::new()
    }
}

impl Table {
    /// Create an empty table with the default style, wrap width 50, and
    /// whitespace trimming enabled.
    pub fn new() -> Self {
        Table {
            headers: Vec::new(),
            entries: Vec::new(),
            footer: None,
            style: TableStyle::default(),
            wrap_width: DEFAULT_WRAP_WIDTH,
            trim: TrimMode::default(),
            layout: OnceCell::new(),
        }
    }

    /// Set the column titles, replacing any previous headers.
    ///
    /// Header cells participate in column sizing, so a title wider than its
    /// column's data widens the column.
    pub fn set_headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.layout.take();
        self.headers = headers.into_iter().map(|cell| cell.into()).collect();
        self
    }

    /// Set the footer.
    ///
    /// A `&str`/`String` becomes a [`Footer::Text`] spanning the whole table
    /// width (and is rendered as-is, without truncation, if wider than the
    /// table); a `Vec` of cells becomes a per-column [`Footer::Columns`],
    /// whose cells participate in column sizing.
    pub fn set_footer(&mut self, footer: impl Into<Footer>) -> &mut Self {
        self.layout.take();
        self.footer = Some(footer.into());
        self
    }

    /// Set the active style by value.
    ///
    /// The markdown preset is special-cased at render time: nothing is
    /// emitted after the last body row. A modified copy of the preset is
    /// treated as an ordinary custom style.
    pub fn set_style(&mut self, style: TableStyle) -> &mut Self {
        self.style = style;
        self
    }

    /// Set the active style by registry name.
    ///
    /// Fails with [`TableError::UnknownStyle`] for an unregistered name; the
    /// previously active style stays in effect.
    pub fn set_style_name(&mut self, name: &str) -> Result<&mut Self, TableError> {
        self.style = TableStyle::from_name(name)?;
        Ok(self)
    }

    /// Set the wrap width applied to rows appended after this call.
    ///
    /// Already-appended rows keep the expansion they were stored with.
    pub fn set_wrap_width(&mut self, width: usize) -> &mut Self {
        self.wrap_width = width;
        self
    }

    /// Set the trim policy applied to rows appended after this call.
    pub fn set_trim_mode(&mut self, trim: TrimMode) -> &mut Self {
        self.trim = trim;
        self
    }

    /// Append one row of cells.
    ///
    /// Each cell is split on embedded newlines and word-wrapped at the wrap
    /// width; every line after the first spills into a continuation row
    /// directly below, so one appended row can occupy several physical rows.
    /// Appending an empty row stores one blank physical row.
    pub fn add_row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.layout.take();
        let base = self.entries.len();
        self.entries.push(RowEntry::Cells(CellRow::start()));

        for (column, cell) in cells.into_iter().enumerate() {
            let cell = cell.into();
            for (offset, line) in wrap_cell(&cell, self.wrap_width).iter().enumerate() {
                let line = self.trim.apply(line).to_string();
                let slot = base + offset;
                if slot == self.entries.len() {
                    self.entries.push(RowEntry::Cells(CellRow::continuation()));
                }
                if let RowEntry::Cells(row) = &mut self.entries[slot] {
                    row.set_cell(column, line);
                }
            }
        }
        self
    }

    /// Append a row separator marker.
    ///
    /// Markers occupy a slot in the row stream but carry no cells and never
    /// influence column sizing.
    pub fn add_row_separator(&mut self) -> &mut Self {
        self.entries.push(RowEntry::Rule(SeparatorKind::Row));
        self
    }

    /// Append a section separator marker.
    pub fn add_section_separator(&mut self) -> &mut Self {
        self.entries.push(RowEntry::Rule(SeparatorKind::Section));
        self
    }

    /// Number of columns: the longest of the header row and every physical
    /// row's populated span.
    pub fn column_count(&self) -> usize {
        let mut columns = self.headers.len();
        for entry in &self.entries {
            if let RowEntry::Cells(row) = entry {
                columns = columns.max(row.span());
            }
        }
        columns
    }

    /// Display width of column `column`: the widest header, row, or footer
    /// cell stored at that index.
    ///
    /// Fails with [`TableError::EmptyColumn`] when nothing populates the
    /// column.
    pub fn column_width(&self, column: usize) -> Result<usize, TableError> {
        let layout = self.layout()?;
        layout
            .widths
            .get(column)
            .copied()
            .ok_or(TableError::EmptyColumn(column))
    }

    /// Render the whole table to a single string, one trailing newline per
    /// line.
    ///
    /// Rendering is a pure read: repeated calls return identical text, and
    /// on error no partial output is produced.
    pub fn render(&self) -> Result<String, TableError> {
        let layout = self.layout()?;
        let mut out = String::new();

        if self.headers.is_empty() {
            out.push_str(&self.rule(layout, RuleKind::Body));
        } else {
            out.push_str(&self.header_block(layout));
        }

        for (index, entry) in self.entries.iter().enumerate() {
            match entry {
                RowEntry::Rule(_) => out.push_str(&self.rule(layout, RuleKind::Body)),
                RowEntry::Cells(row) => {
                    if index > 0 && row.is_logical_start() {
                        out.push_str(&self.rule(layout, RuleKind::Body));
                    }
                    out.push_str(&self.row_line(layout, |column| row.cell(column)));
                }
            }
        }

        if !self.style.is_markdown() {
            match &self.footer {
                Some(footer) => out.push_str(&self.footer_block(layout, footer)),
                None => out.push_str(&self.rule(layout, RuleKind::Body)),
            }
        }

        Ok(out)
    }

    fn layout(&self) -> Result<&Layout, TableError> {
        self.layout.get_or_try_init(|| self.compute_layout())
    }

    fn compute_layout(&self) -> Result<Layout, TableError> {
        let columns = self.column_count();
        let widths = (0..columns)
            .map(|column| self.measure_column(column))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layout { columns, widths })
    }

    fn measure_column(&self, column: usize) -> Result<usize, TableError> {
        let from_header = self.headers.get(column).map(|cell| display_width(cell));
        let from_rows = self.entries.iter().filter_map(|entry| match entry {
            RowEntry::Cells(row) => row.cell(column).map(display_width),
            RowEntry::Rule(_) => None,
        });
        let from_footer = match &self.footer {
            Some(Footer::Columns(cells)) => cells.get(column).map(|cell| display_width(cell)),
            _ => None,
        };

        from_header
            .into_iter()
            .chain(from_rows)
            .chain(from_footer)
            .max()
            .ok_or(TableError::EmptyColumn(column))
    }

    /// Format one cell: padding gutters around the aligned text.
    ///
    /// Alignment fill is always spaces; `pad_char` only fills the fixed
    /// gutters.
    fn format_cell(&self, width: usize, text: &str, align: Align) -> String {
        let gutter: String = std::iter::repeat_n(self.style.pad_char, self.style.padding).collect();
        format!("{}{}{}", gutter, pad_to_width(text, width, align), gutter)
    }

    /// One line of cells bordered by verticals; `cell_at` supplies the text
    /// per column, missing cells render empty.
    fn row_line<'a, F>(&self, layout: &Layout, cell_at: F) -> String
    where
        F: Fn(usize) -> Option<&'a str>,
    {
        let mut line = String::new();
        line.push(self.style.vertical);
        for column in 0..layout.columns {
            let text = cell_at(column).unwrap_or("");
            line.push_str(&self.format_cell(layout.widths[column], text, Align::Left));
            line.push(self.style.vertical);
        }
        line.push('\n');
        line
    }

    /// A full-width horizontal rule with junctions at every column boundary.
    fn rule(&self, layout: &Layout, kind: RuleKind) -> String {
        let junction = match kind {
            RuleKind::Header => self.style.header_cross,
            RuleKind::Body => self.style.cross,
        };

        let mut line = String::new();
        line.push(self.style.left_t);
        for (column, &width) in layout.widths.iter().enumerate() {
            let span = width + 2 * self.style.padding;
            line.extend(std::iter::repeat_n(self.style.horizontal, span));
            if column + 1 < layout.columns {
                line.push(junction);
            } else {
                line.push(self.style.right_t);
            }
        }
        line.push('\n');
        line
    }

    fn header_block(&self, layout: &Layout) -> String {
        let mut out = String::new();
        if self.style.outer_border {
            out.push_str(&self.rule(layout, RuleKind::Header));
        }
        out.push_str(&self.row_line(layout, |column| {
            self.headers.get(column).map(String::as_str)
        }));
        out.push_str(&self.rule(layout, RuleKind::Header));
        out
    }

    fn footer_block(&self, layout: &Layout, footer: &Footer) -> String {
        match footer {
            Footer::Text(text) => {
                let inner = self.inner_width(layout);
                let mut out = self.rule(layout, RuleKind::Body);

                out.push(self.style.vertical);
                out.extend(std::iter::repeat_n(self.style.pad_char, self.style.padding));
                out.push_str(&pad_to_width(
                    text,
                    inner.saturating_sub(2 * self.style.padding),
                    Align::Left,
                ));
                out.extend(std::iter::repeat_n(self.style.pad_char, self.style.padding));
                out.push(self.style.vertical);
                out.push('\n');

                if self.style.outer_border {
                    out.push(self.style.left_t);
                    out.extend(std::iter::repeat_n(self.style.horizontal, inner));
                    out.push(self.style.right_t);
                    out.push('\n');
                }
                out
            }
            Footer::Columns(cells) => {
                let mut out =
                    self.row_line(layout, |column| cells.get(column).map(String::as_str));
                if self.style.outer_border {
                    out.push_str(&self.rule(layout, RuleKind::Body));
                }
                out
            }
        }
    }

    /// Width between the outer vertical borders: every column plus its
    /// padding and interior junction, minus the shared final border.
    fn inner_width(&self, layout: &Layout) -> usize {
        layout
            .widths
            .iter()
            .map(|width| width + 2 * self.style.padding + 1)
            .sum::<usize>()
            .saturating_sub(1)
    }
}
