//! Monotonic column width and row height tracking.

/// Per-column widths and per-row heights observed while rows are appended.
///
/// Values only ever grow. The [`Table`](crate::Table) owns one of these and
/// feeds it every header, footer and body cell; the renderer reads the final
/// values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dimensions {
    widths: Vec<usize>,
    heights: Vec<usize>,
}

impl Dimensions {
    /// Creates an empty tracker with no columns and no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grows the width of `column` to at least `width`, returning the resolved width.
    ///
    /// Observing a column past the current count adds it (and any columns in
    /// between) with width 0 first.
    pub fn observe_column(&mut self, column: usize, width: usize) -> usize {
        grow(&mut self.widths, column, width)
    }

    /// Grows the width of `column` to at least `min(width, cap)`.
    ///
    /// The cap only limits this observation: a column that is already wider
    /// than `cap` keeps its width.
    pub fn observe_capped(&mut self, column: usize, width: usize, cap: usize) -> usize {
        self.observe_column(column, width.min(cap))
    }

    /// Grows the height of `row` to at least `height`, returning the resolved height.
    pub fn observe_row(&mut self, row: usize, height: usize) -> usize {
        grow(&mut self.heights, row, height)
    }

    /// Resolved width of `column`, or 0 when it has never been observed.
    pub fn column_width(&self, column: usize) -> usize {
        self.widths.get(column).copied().unwrap_or(0)
    }

    /// Resolved height of `row`, or 0 when it has never been observed.
    pub fn row_height(&self, row: usize) -> usize {
        self.heights.get(row).copied().unwrap_or(0)
    }

    /// All column widths, in column order.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// All row heights, in row order.
    pub fn heights(&self) -> &[usize] {
        &self.heights
    }

    /// Number of columns seen so far.
    pub fn column_count(&self) -> usize {
        self.widths.len()
    }

    /// Sum of all column widths, without padding or separators.
    pub fn content_width(&self) -> usize {
        self.widths.iter().sum()
    }
}

fn grow(values: &mut Vec<usize>, index: usize, value: usize) -> usize {
    if index >= values.len() {
        values.resize(index + 1, 0);
    }
    let slot = &mut values[index];
    *slot = (*slot).max(value);
    *slot
}
