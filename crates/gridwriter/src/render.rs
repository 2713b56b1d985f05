//! Grid composition.
//!
//! [`GridRenderer`] walks the table regions in a fixed order (see
//! [`Region::SEQUENCE`]) and turns frozen dimensions plus wrapped cells into
//! finished text lines. Every region may produce zero lines depending on
//! configuration.

use std::io::{self, Write};

use log::debug;

use crate::cell::{fill, format_label, pad_with, Align, CellClassifier};
use crate::dimension::Dimensions;
use crate::options::TableOptions;
use crate::table::WrappedRow;
use crate::width::display_width;
use crate::wrap::wrap;

/// The parts of a rendered table, in output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// Rule above everything, when the top edge is on.
    TopBorder,
    /// The header labels.
    Header,
    /// Rule under the header, when enabled.
    HeaderRule,
    /// Body rows line by line, each optionally followed by a row rule.
    BodyRows,
    /// Rule closing the body, when the bottom edge is on and row rules are off.
    BottomRule,
    /// Footer labels and the rule that boxes the populated ones.
    Footer,
    /// Word-wrapped caption text.
    Caption,
}

impl Region {
    /// All regions in the order they are rendered.
    pub const SEQUENCE: [Region; 7] = [
        Region::TopBorder,
        Region::Header,
        Region::HeaderRule,
        Region::BodyRows,
        Region::BottomRule,
        Region::Footer,
        Region::Caption,
    ];
}

/// Lays out a table's cells into text lines.
///
/// Borrowed from a [`Table`](crate::Table) via
/// [`Table::renderer`](crate::Table::renderer); it never changes dimensions.
#[derive(Clone, Copy, Debug)]
pub struct GridRenderer<'a> {
    pub(crate) options: &'a TableOptions,
    pub(crate) dims: &'a Dimensions,
    pub(crate) header: &'a [String],
    pub(crate) footer: &'a [String],
    pub(crate) rows: &'a [WrappedRow],
    pub(crate) classifier: &'a dyn CellClassifier,
}

impl<'a> GridRenderer<'a> {
    /// All lines of the table, without line terminators.
    ///
    /// A table without any columns renders no lines at all.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.dims.column_count() == 0 {
            return out;
        }
        for region in Region::SEQUENCE {
            self.render_region(region, &mut out);
        }
        out
    }

    /// Writes every line followed by the configured newline, then flushes.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        debug!(
            "rendering table: {} columns, {} rows, widths {:?}",
            self.dims.column_count(),
            self.rows.len(),
            self.dims.widths()
        );
        let newline = self.options.newline.as_bytes();
        for line in self.lines() {
            out.write_all(line.as_bytes())?;
            out.write_all(newline)?;
        }
        out.flush()
    }

    /// Appends the lines of a single region to `out`.
    pub fn render_region(&self, region: Region, out: &mut Vec<String>) {
        let options = self.options;
        match region {
            Region::TopBorder => {
                if options.border.top {
                    out.push(self.border_line());
                }
            }
            Region::Header => {
                if !self.header.is_empty() {
                    out.push(self.label_line(self.header, options.header_align, false));
                }
            }
            Region::HeaderRule => {
                if !self.header.is_empty() && options.header_line {
                    out.push(self.border_line());
                }
            }
            Region::BodyRows => {
                for (index, row) in self.rows.iter().enumerate() {
                    let height = self.dims.row_height(index);
                    if height == 0 {
                        continue;
                    }
                    out.extend((0..height).map(|line| self.body_line(row, line)));
                    if options.row_line {
                        out.push(self.border_line());
                    }
                }
            }
            Region::BottomRule => {
                if !options.row_line && options.border.bottom {
                    out.push(self.border_line());
                }
            }
            Region::Footer => {
                if self.footer.is_empty() {
                    return;
                }
                // Without a bottom edge the footer still needs separating from the body.
                if !options.border.bottom {
                    out.push(self.border_line());
                }
                out.push(self.label_line(self.footer, options.footer_align, true));
                out.push(self.footer_rule());
            }
            Region::Caption => {
                if options.caption.enabled {
                    out.extend(wrap(&options.caption.text, self.total_width()));
                }
            }
        }
    }

    /// A full horizontal rule: junctions at every column boundary.
    pub fn border_line(&self) -> String {
        let glyphs = &self.options.glyphs;
        let mut line = glyphs.center.clone();
        for &width in self.dims.widths() {
            line.push_str(&glyphs.row.repeat(width + 2));
            line.push_str(&glyphs.center);
        }
        line
    }

    /// Display width of a rendered header or body line.
    pub fn total_width(&self) -> usize {
        let columns = self.dims.column_count();
        let separator = display_width(&self.options.glyphs.column);
        separator * (columns + 1) + self.dims.content_width() + 2 * columns
    }

    fn body_line(&self, row: &WrappedRow, line: usize) -> String {
        let options = self.options;
        let mut out = self.edge(options.border.left);
        let last = self.dims.column_count() - 1;

        for (column, &width) in self.dims.widths().iter().enumerate() {
            let text = row.line(column, line);
            self.push_cell(&mut out, text, width, options.align);
            out.push_str(&self.separator_after(column, last));
        }
        out
    }

    /// Header or footer labels on one line.
    ///
    /// In the footer an empty label drops the separator after it, so the
    /// labels float without walls around the empty cells.
    fn label_line(&self, labels: &[String], align: Align, footer: bool) -> String {
        let options = self.options;
        let align = match align {
            Align::Default => Align::Center,
            explicit => explicit,
        };
        let mut out = self.edge(options.border.left);
        let last = self.dims.column_count() - 1;

        for (column, &width) in self.dims.widths().iter().enumerate() {
            let raw = labels.get(column).map(String::as_str).unwrap_or("");
            let label = if options.auto_format {
                format_label(raw)
            } else {
                raw.to_string()
            };
            self.push_cell(&mut out, &label, width, align);

            if footer && raw.is_empty() {
                out.push_str(&self.blank(&options.glyphs.column));
            } else {
                out.push_str(&self.separator_after(column, last));
            }
        }
        out
    }

    /// The rule under the footer labels.
    ///
    /// With the left edge on this is a full border line. Otherwise the rule
    /// stays blank until the first populated footer cell, with the junction
    /// just before that cell drawn so the rule hugs the populated cells.
    fn footer_rule(&self) -> String {
        let options = self.options;
        let glyphs = &options.glyphs;
        let last = self.dims.column_count() - 1;
        let populated = |column: usize| self.footer.get(column).is_some_and(|f| !f.is_empty());

        let mut out = String::new();
        let mut started = false;

        for (column, &width) in self.dims.widths().iter().enumerate() {
            let filled = populated(column);
            started |= filled;

            let mut blank_junction = !filled && !options.border.right;
            if column == 0 {
                if blank_junction {
                    out.push_str(&self.blank(&glyphs.center));
                } else {
                    out.push_str(&glyphs.center);
                }
            }

            let mut blank_fill = !filled;
            if started || options.border.left {
                blank_fill = false;
                blank_junction = false;
            }
            if blank_junction && column < last && populated(column + 1) {
                blank_junction = false;
            }

            if blank_fill {
                out.push_str(&fill("", width + 2, Align::Left, glyphs.pad_char()));
            } else {
                out.push_str(&glyphs.row.repeat(width + 2));
            }
            if blank_junction {
                out.push_str(&self.blank(&glyphs.center));
            } else {
                out.push_str(&glyphs.center);
            }
        }
        out
    }

    fn push_cell(&self, out: &mut String, text: &str, width: usize, align: Align) {
        let pad = self.options.glyphs.pad_char();
        out.push(pad);
        out.push_str(&pad_with(text, width, align, self.classifier, pad));
        out.push(pad);
    }

    fn separator_after(&self, column: usize, last: usize) -> String {
        if column == last {
            self.edge(self.options.border.right)
        } else {
            self.options.glyphs.column.clone()
        }
    }

    /// The column separator when the edge is on, same-width blank otherwise.
    fn edge(&self, enabled: bool) -> String {
        let column = &self.options.glyphs.column;
        if enabled {
            column.clone()
        } else {
            self.blank(column)
        }
    }

    fn blank(&self, glyph: &str) -> String {
        fill("", display_width(glyph), Align::Left, self.options.glyphs.pad_char())
    }
}
