//! The table aggregate: configuration, rows and rendering.
//!
//! # Example
//!
//! ```rust
//! use gridwriter::Table;
//!
//! let mut table = Table::new(Vec::new());
//! table.set_header(["Name", "Sign", "Rating"]);
//! table.append(["A", "The Good", "500"]);
//! table.append(["B", "The Very very Bad Man", "288"]);
//! table.render().unwrap();
//!
//! let output = String::from_utf8(table.into_inner()).unwrap();
//! assert_eq!(output, "\
//! +------+-----------------------+--------+
//! | NAME |         SIGN          | RATING |
//! +------+-----------------------+--------+
//! | A    | The Good              |    500 |
//! | B    | The Very very Bad Man |    288 |
//! +------+-----------------------+--------+
//! ");
//! ```

use std::io::{self, Write};
use std::sync::Arc;

use log::{debug, trace};

use crate::cell::{format_label, Align, CellClassifier, NumericClassifier};
use crate::dimension::Dimensions;
use crate::options::TableOptions;
use crate::render::GridRenderer;
use crate::style::{Border, BorderStyle};
use crate::width::display_width;
use crate::wrap::{split_lines, wrap};

/// A body row after layout: every cell split into display lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WrappedRow {
    cells: Vec<Vec<String>>,
}

impl WrappedRow {
    /// The wrapped lines of each cell, in column order.
    pub fn cells(&self) -> &[Vec<String>] {
        &self.cells
    }

    /// Number of lines in the tallest cell.
    pub fn height(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Line `line` of the cell in `column`, or `""` past the end of either.
    pub fn line(&self, column: usize, line: usize) -> &str {
        self.cells
            .get(column)
            .and_then(|cell| cell.get(line))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// A text table that renders to an [`io::Write`] sink.
///
/// Rows are laid out as they are appended: each cell is measured and wrapped
/// immediately and the shared column widths and row heights grow to fit.
/// [`render`](Table::render) then writes the grid using the final dimensions.
/// Rendering does not consume the table; appending more rows and rendering
/// again reuses the grown dimensions.
#[derive(Clone, Debug)]
pub struct Table<W> {
    out: W,
    options: TableOptions,
    classifier: Arc<dyn CellClassifier>,
    header: Vec<String>,
    footer: Vec<String>,
    rows: Vec<WrappedRow>,
    dims: Dimensions,
}

impl<W: Write> Table<W> {
    /// Creates a table with default options writing to `out`.
    pub fn new(out: W) -> Self {
        Self::with_options(out, TableOptions::default())
    }

    /// Creates a table with the given options writing to `out`.
    pub fn with_options(out: W, options: TableOptions) -> Self {
        Table {
            out,
            options,
            classifier: Arc::new(NumericClassifier),
            header: Vec::new(),
            footer: Vec::new(),
            rows: Vec::new(),
            dims: Dimensions::new(),
        }
    }

    /// Writes the table to the sink and flushes it.
    ///
    /// Sink errors are returned as-is; a failed render may have written a
    /// partial table.
    pub fn render(&mut self) -> io::Result<()> {
        let renderer = GridRenderer {
            options: &self.options,
            dims: &self.dims,
            header: &self.header,
            footer: &self.footer,
            rows: &self.rows,
            classifier: self.classifier.as_ref(),
        };
        renderer.write_to(&mut self.out)
    }
}

impl<W> Table<W> {
    /// Sets the header labels, replacing any previous ones.
    pub fn set_header<I, S>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = labels.into_iter().map(Into::into).collect();
        for (column, label) in self.header.iter().enumerate() {
            observe_label(&mut self.dims, column, label);
        }
        self
    }

    /// Sets the footer labels, replacing any previous ones.
    ///
    /// Empty labels leave their cells open, which is how a totals row that
    /// only boxes its last columns is built.
    pub fn set_footer<I, S>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.footer = labels.into_iter().map(Into::into).collect();
        for (column, label) in self.footer.iter().enumerate() {
            observe_label(&mut self.dims, column, label);
        }
        self
    }

    /// Turns the caption on or off, optionally replacing its text.
    pub fn set_caption(&mut self, enabled: bool, text: Option<&str>) -> &mut Self {
        self.options.caption.enabled = enabled;
        if let Some(text) = text {
            self.options.caption.text = text.to_string();
        }
        self
    }

    /// Appends a body row.
    ///
    /// Rows may have fewer cells than the table has columns (the rest render
    /// blank) or more (the extra cells add columns).
    pub fn append<I, S>(&mut self, row: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = self.rows.len();
        let cells: Vec<Vec<String>> = row
            .into_iter()
            .enumerate()
            .map(|(column, text)| self.layout_cell(column, text.as_ref()))
            .collect();
        let row = WrappedRow { cells };

        let height = self.dims.observe_row(index, row.height());
        trace!("appended row {index} with height {height}");
        self.rows.push(row);
        self
    }

    /// Appends several body rows in order.
    pub fn append_bulk<R, I, S>(&mut self, rows: R) -> &mut Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for row in rows {
            self.append(row);
        }
        self
    }

    /// Measures and wraps one cell, growing the column to fit the result.
    fn layout_cell(&mut self, column: usize, text: &str) -> Vec<String> {
        let cap = self.options.max_column_width;
        let limit = self.dims.observe_capped(column, display_width(text), cap);

        let lines = if self.options.auto_wrap {
            wrap(text, limit)
        } else {
            split_lines(text)
        };

        let widest = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
        if widest > limit {
            debug!("column {column} widened from {limit} to {widest} by an unbreakable line");
        }
        self.dims.observe_column(column, widest);
        lines
    }

    /// Turns all four outer edges on or off.
    pub fn set_border(&mut self, enabled: bool) -> &mut Self {
        self.set_borders(Border::all(enabled))
    }

    /// Sets each outer edge individually.
    pub fn set_borders(&mut self, border: Border) -> &mut Self {
        self.options.border = border;
        self
    }

    /// Uses one of the ready-made glyph sets. Keeps the current pad character.
    pub fn set_border_style(&mut self, style: BorderStyle) -> &mut Self {
        let pad = self.options.glyphs.pad;
        self.options.glyphs = style.glyphs();
        self.options.glyphs.pad = pad;
        self
    }

    /// Alignment of body lines.
    pub fn set_alignment(&mut self, align: Align) -> &mut Self {
        self.options.align = align;
        self
    }

    /// Alignment of header labels.
    pub fn set_header_alignment(&mut self, align: Align) -> &mut Self {
        self.options.header_align = align;
        self
    }

    /// Alignment of footer labels.
    pub fn set_footer_alignment(&mut self, align: Align) -> &mut Self {
        self.options.footer_align = align;
        self
    }

    /// Replaces the classifier consulted for [`Align::Default`] body lines.
    pub fn set_classifier<C: CellClassifier + 'static>(&mut self, classifier: C) -> &mut Self {
        self.classifier = Arc::new(classifier);
        self
    }

    /// Uppercase header and footer labels (on by default).
    pub fn set_auto_format_headers(&mut self, enabled: bool) -> &mut Self {
        self.options.auto_format = enabled;
        self
    }

    /// Reflow body text to column widths (on by default). Affects rows appended afterwards.
    pub fn set_auto_wrap_text(&mut self, enabled: bool) -> &mut Self {
        self.options.auto_wrap = enabled;
        self
    }

    /// Width at which body text wraps. Affects rows appended afterwards.
    pub fn set_column_width(&mut self, width: usize) -> &mut Self {
        self.options.max_column_width = width;
        self
    }

    /// Glyph between columns and on enabled left and right edges.
    pub fn set_column_separator(&mut self, glyph: impl Into<String>) -> &mut Self {
        self.options.glyphs.column = glyph.into();
        self
    }

    /// Glyph repeated along horizontal rules.
    pub fn set_row_separator(&mut self, glyph: impl Into<String>) -> &mut Self {
        self.options.glyphs.row = glyph.into();
        self
    }

    /// Glyph where horizontal rules cross column boundaries.
    pub fn set_center_separator(&mut self, glyph: impl Into<String>) -> &mut Self {
        self.options.glyphs.center = glyph.into();
        self
    }

    /// Character used for cell padding and blanked-out edges.
    ///
    /// Only single-column characters line up; anything else pads with spaces.
    pub fn set_pad_char(&mut self, pad: char) -> &mut Self {
        self.options.glyphs.pad = pad;
        self
    }

    /// Line terminator written after each line.
    pub fn set_newline(&mut self, newline: impl Into<String>) -> &mut Self {
        self.options.newline = newline.into();
        self
    }

    /// Draw a rule after every body row.
    pub fn set_row_line(&mut self, enabled: bool) -> &mut Self {
        self.options.row_line = enabled;
        self
    }

    /// Draw a rule under the header (on by default).
    pub fn set_header_line(&mut self, enabled: bool) -> &mut Self {
        self.options.header_line = enabled;
        self
    }

    /// A renderer over the current state.
    pub fn renderer(&self) -> GridRenderer<'_> {
        GridRenderer {
            options: &self.options,
            dims: &self.dims,
            header: &self.header,
            footer: &self.footer,
            rows: &self.rows,
            classifier: self.classifier.as_ref(),
        }
    }

    /// The rendered lines, without terminators and without touching the sink.
    pub fn lines(&self) -> Vec<String> {
        self.renderer().lines()
    }

    /// The current rendering configuration.
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Header labels as given, before auto-formatting.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Footer labels as given, before auto-formatting.
    pub fn footer(&self) -> &[String] {
        &self.footer
    }

    /// Body rows after wrapping.
    pub fn rows(&self) -> &[WrappedRow] {
        &self.rows
    }

    /// Resolved width of every column.
    pub fn column_widths(&self) -> &[usize] {
        self.dims.widths()
    }

    /// Resolved height of every body row.
    pub fn row_heights(&self) -> &[usize] {
        self.dims.heights()
    }

    /// Number of columns seen in headers, footers and rows.
    pub fn num_columns(&self) -> usize {
        self.dims.column_count()
    }

    /// Number of appended body rows, including empty ones.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// The output sink.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// The output sink, mutably.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consumes the table, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Labels never wrap, so their full width counts whether or not auto-format
/// is on when the table renders.
fn observe_label(dims: &mut Dimensions, column: usize, label: &str) {
    let width = display_width(label).max(display_width(&format_label(label)));
    dims.observe_column(column, width);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(table: &mut Table<Vec<u8>>) -> String {
        table.get_mut().clear();
        table.render().unwrap();
        String::from_utf8(table.get_ref().clone()).unwrap()
    }

    #[test]
    fn empty_table_renders_nothing() {
        let mut table = Table::new(Vec::new());
        assert_eq!(rendered(&mut table), "");
        assert!(table.lines().is_empty());
    }

    #[test]
    fn header_establishes_columns() {
        let mut table = Table::new(Vec::new());
        table.set_header(["Name", "Sign", "Rating"]);
        assert_eq!(table.num_columns(), 3);
        assert_eq!(table.column_widths(), &[4, 4, 6]);
    }

    #[test]
    fn append_wraps_to_capped_width() {
        let mut table = Table::new(Vec::new());
        table.append(["Learn East has computers with adapted keyboards with enlarged print etc"]);
        assert_eq!(table.column_widths(), &[30]);
        assert_eq!(table.row_heights(), &[3]);
        assert_eq!(
            table.rows()[0].cells()[0],
            vec![
                "Learn East has computers with",
                "adapted keyboards with",
                "enlarged print etc"
            ]
        );
    }

    #[test]
    fn earlier_rows_keep_their_wrapping() {
        let mut table = Table::new(Vec::new());
        table.set_column_width(10);
        table.append(["aaa bbb ccc"]);
        table.set_column_width(30);
        table.append(["a much longer single line"]);
        assert_eq!(table.column_widths(), &[25]);
        assert_eq!(table.rows()[0].cells()[0], vec!["aaa bbb", "ccc"]);
        assert_eq!(table.row_heights(), &[2, 1]);
    }

    #[test]
    fn wrap_limit_uses_known_column_width() {
        let mut table = Table::new(Vec::new());
        table.set_column_width(20);
        table.set_header(["a header wider than text"]);
        table.append(["short words fit in line"]);
        assert_eq!(table.row_heights(), &[1]);
        assert_eq!(table.column_widths(), &[24]);
    }

    #[test]
    fn unwrapped_text_grows_column_past_cap() {
        let mut table = Table::new(Vec::new());
        table.set_auto_wrap_text(false);
        table.append(["A multiline\nstring with some lines being really long."]);
        assert_eq!(table.column_widths(), &[41]);
        assert_eq!(table.row_heights(), &[2]);
    }

    #[test]
    fn labels_are_not_capped() {
        let mut table = Table::new(Vec::new());
        table.set_column_width(5);
        table.set_header(["a_long_header"]);
        assert_eq!(table.column_widths(), &[13]);
    }

    #[test]
    fn uneven_rows_extend_and_blank() {
        let mut table = Table::new(Vec::new());
        table.set_header(["a", "b"]);
        table.append(["1", "2", "three"]);
        table.append(["x"]);
        assert_eq!(table.num_columns(), 3);
        assert_eq!(table.rows()[1].line(1, 0), "");
        assert_eq!(
            table.lines(),
            vec![
                "+---+---+-------+",
                "| A | B |       |",
                "+---+---+-------+",
                "| 1 | 2 | three |",
                "| x |   |       |",
                "+---+---+-------+",
            ]
        );
    }

    #[test]
    fn empty_row_has_zero_height_and_is_skipped() {
        let mut table = Table::new(Vec::new());
        table.append(["a"]);
        table.append(Vec::<String>::new());
        table.append(["b"]);
        assert_eq!(table.row_heights(), &[1, 0, 1]);
        assert_eq!(
            table.lines(),
            vec!["+---+", "| a |", "| b |", "+---+"]
        );
    }

    #[test]
    fn shorter_cells_pad_to_row_height() {
        let mut table = Table::new(Vec::new());
        table.set_column_width(5);
        table.append(["one two", "x"]);
        assert_eq!(
            table.lines(),
            vec![
                "+-------+---+",
                "| one   | x |",
                "| two   |   |",
                "+-------+---+",
            ]
        );
    }

    #[test]
    fn row_lines_replace_bottom_border() {
        let mut table = Table::new(Vec::new());
        table.set_row_line(true);
        table.append_bulk([["a", "1"], ["b", "2"]]);
        assert_eq!(
            table.lines(),
            vec![
                "+---+---+",
                "| a | 1 |",
                "+---+---+",
                "| b | 2 |",
                "+---+---+",
            ]
        );
    }

    #[test]
    fn header_line_can_be_disabled() {
        let mut table = Table::new(Vec::new());
        table.set_header_line(false);
        table.set_header(["k"]);
        table.append(["v"]);
        assert_eq!(table.lines(), vec!["+---+", "| K |", "| v |", "+---+"]);
    }

    #[test]
    fn explicit_alignments() {
        let mut table = Table::new(Vec::new());
        table.set_header(["left", "right"]);
        table.set_header_alignment(Align::Left);
        table.set_alignment(Align::Center);
        table.append(["a", "12"]);
        assert_eq!(
            table.lines(),
            vec![
                "+------+-------+",
                "| LEFT | RIGHT |",
                "+------+-------+",
                "|  a   |  12   |",
                "+------+-------+",
            ]
        );
    }

    #[test]
    fn footer_alignment() {
        let mut table = Table::new(Vec::new());
        table.append(["value", "10"]);
        table.set_footer(["sum", "10"]);
        table.set_footer_alignment(Align::Right);
        assert_eq!(
            table.lines(),
            vec![
                "+-------+----+",
                "| value | 10 |",
                "+-------+----+",
                "|   SUM | 10 |",
                "+-------+----+",
            ]
        );
    }

    #[test]
    fn custom_classifier() {
        fn everything_right(_: &str) -> Align {
            Align::Right
        }
        let mut table = Table::new(Vec::new());
        table.set_classifier(everything_right as fn(&str) -> Align);
        table.set_header(["label"]);
        table.append(["ab"]);
        assert_eq!(table.lines()[3], "|    ab |");
    }

    #[test]
    fn custom_newline() {
        let mut table = Table::new(Vec::new());
        table.set_newline("\r\n");
        table.append(["x"]);
        assert_eq!(rendered(&mut table), "+---+\r\n| x |\r\n+---+\r\n");
    }

    #[test]
    fn border_style_keeps_pad() {
        let mut table = Table::new(Vec::new());
        table.set_pad_char('.');
        table.set_border_style(BorderStyle::Light);
        table.append(["ab", "c"]);
        table.append(["d", "ef"]);
        assert_eq!(
            table.lines(),
            vec!["┼────┼────┼", "│.ab.│.c..│", "│.d..│.ef.│", "┼────┼────┼"]
        );
    }

    #[test]
    fn wide_pad_char_falls_back_to_space() {
        let mut table = Table::new(Vec::new());
        table.set_pad_char('日');
        table.set_border(false);
        table.append(["ab", "c"]);
        table.append(["d", "ef"]);
        assert_eq!(table.lines(), vec!["  ab | c   ", "  d  | ef  "]);
    }

    #[test]
    fn render_twice_is_identical() {
        let mut table = Table::new(Vec::new());
        table.set_header(["a", "b"]);
        table.set_footer(["", "total"]);
        table.set_caption(true, Some("caption"));
        table.append(["1", "2"]);
        let first = rendered(&mut table);
        let second = rendered(&mut table);
        assert_eq!(first, second);
    }

    #[test]
    fn rerender_after_append_uses_grown_widths() {
        let mut table = Table::new(Vec::new());
        table.append(["a"]);
        assert_eq!(rendered(&mut table), "+---+\n| a |\n+---+\n");
        table.append(["wider"]);
        assert_eq!(
            rendered(&mut table),
            "+-------+\n| a     |\n| wider |\n+-------+\n"
        );
    }

    #[test]
    fn caption_toggle_keeps_text() {
        let mut table = Table::new(Vec::new());
        table.set_caption(true, None);
        assert_eq!(table.options().caption.text, "Table caption.");
        table.set_caption(false, Some("kept"));
        assert!(!table.options().caption.enabled);
        assert_eq!(table.options().caption.text, "kept");
    }

    #[test]
    fn sink_errors_propagate() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut table = Table::new(Broken);
        table.append(["x"]);
        let err = table.render().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
