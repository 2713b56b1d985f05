//! # gridwriter - Fixed-Width Text Tables
//!
//! `gridwriter` renders rows of text as aligned, bordered grids for terminals,
//! logs and plain-text reports. Cells may hold long or multi-line text: column
//! widths and row heights are computed from the content, long text is wrapped
//! at word boundaries, and ANSI color codes are ignored when measuring.
//!
//! ## Core Concepts
//!
//! - [`Table`]: the aggregate you append rows to and render
//! - [`TableOptions`]: every rendering knob, loadable from YAML or JSON
//! - [`Border`] / [`Glyphs`] / [`BorderStyle`]: which edges are drawn and with what
//! - [`Align`] and [`CellClassifier`]: how cells are padded
//! - [`wrap`], [`display_width`], [`pad`]: the text primitives underneath
//!
//! ## Quick Start
//!
//! ```rust
//! use gridwriter::Table;
//!
//! let mut table = Table::new(std::io::stdout());
//! table.set_header(["Date", "Description", "CV2", "Amount"]);
//! table.append(["1/1/2014", "Domain name", "2233", "$10.98"]);
//! table.append(["1/1/2014", "January Hosting", "2233", "$54.95"]);
//! table.set_footer(["", "", "Total", "$65.93"]);
//! table.render().unwrap();
//! ```
//!
//! ## Footers and Open Borders
//!
//! Empty footer labels leave their cells open, so a totals line boxes only
//! the populated columns. With the outer border turned off the rule under the
//! footer floats beneath those columns:
//!
//! ```rust
//! use gridwriter::Table;
//!
//! let mut table = Table::new(Vec::new());
//! table.set_header(["Item", "Qty", "Price"]);
//! table.append(["Widget", "2", "3.50"]);
//! table.set_footer(["", "Total", "7.00"]);
//! table.set_border(false);
//!
//! let lines = table.lines();
//! assert_eq!(lines[lines.len() - 2], "           TOTAL | 7 00   ");
//! assert_eq!(lines[lines.len() - 1], "         +-------+-------+");
//! ```
//!
//! ## Configuration Files
//!
//! ```rust
//! use gridwriter::{Table, TableOptions};
//!
//! let options = TableOptions::from_yaml("border: { top: false, bottom: false }\nglyphs: { center: '|' }").unwrap();
//! let mut table = Table::with_options(Vec::new(), options);
//! table.set_header(["key", "value"]);
//! table.append(["a", "1"]);
//!
//! assert_eq!(table.lines(), vec![
//!     "| KEY | VALUE |",
//!     "|-----|-------|",
//!     "| a   |     1 |",
//! ]);
//! ```

pub mod cell;
pub mod dimension;
mod error;
pub mod options;
pub mod render;
pub mod style;
mod table;
pub mod width;
pub mod wrap;

pub use cell::{
    format_label, looks_numeric, pad, pad_center, pad_left, pad_right, Align, CellClassifier,
    NumericClassifier,
};
pub use dimension::Dimensions;
pub use error::ConfigError;
pub use options::{Caption, TableOptions, DEFAULT_MAX_COLUMN_WIDTH};
pub use render::{GridRenderer, Region};
pub use style::{Border, BorderStyle, Glyphs};
pub use table::{Table, WrappedRow};
pub use width::{display_width, strip_ansi};
pub use wrap::{split_lines, wrap};
