//! Cell padding, alignment and label formatting.

use std::fmt;

use console::{measure_text_width, pad_str_with, Alignment};
use serde::{Deserialize, Serialize};

use crate::width::{display_width, segments, strip_ansi};

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Let the context decide: body lines ask the table's [`CellClassifier`]
    /// (numbers go right, text goes left), header and footer labels center.
    #[default]
    Default,
    /// Center text (pad on both sides, extra space on the right).
    Center,
    /// Right-align text (pad on the left).
    Right,
    /// Left-align text (pad on the right).
    Left,
}

/// Decides how a body line aligns when the column uses [`Align::Default`].
///
/// Implement this to plug in a different notion of "numeric", e.g. to
/// right-align currency amounts:
///
/// ```rust
/// use gridwriter::{Align, CellClassifier, NumericClassifier};
///
/// #[derive(Debug)]
/// struct Money;
///
/// impl CellClassifier for Money {
///     fn classify(&self, line: &str) -> Align {
///         let amount = line.trim().trim_start_matches('$');
///         NumericClassifier.classify(amount)
///     }
/// }
///
/// assert_eq!(Money.classify("$10.98"), Align::Right);
/// assert_eq!(Money.classify("Domain"), Align::Left);
/// ```
pub trait CellClassifier: fmt::Debug + Send + Sync {
    /// Returns the alignment for `line`. Returning [`Align::Default`] falls back to left.
    fn classify(&self, line: &str) -> Align;
}

/// Right-aligns numeric-looking text, left-aligns everything else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NumericClassifier;

impl CellClassifier for NumericClassifier {
    fn classify(&self, line: &str) -> Align {
        if looks_numeric(line) {
            Align::Right
        } else {
            Align::Left
        }
    }
}

impl CellClassifier for fn(&str) -> Align {
    fn classify(&self, line: &str) -> Align {
        self(line)
    }
}

/// Whether `text` reads as a plain number: optional `-`, digits with an
/// optional decimal point, optional trailing `%`.
///
/// Escape sequences and surrounding whitespace are ignored.
///
/// ```rust
/// use gridwriter::looks_numeric;
///
/// assert!(looks_numeric(" 2233 "));
/// assert!(looks_numeric("-12.5%"));
/// assert!(!looks_numeric("$10.98"));
/// assert!(!looks_numeric("1/1/2014"));
/// ```
pub fn looks_numeric(text: &str) -> bool {
    let plain = strip_ansi(text);
    let s = plain.trim();
    let s = s.strip_suffix('%').unwrap_or(s);
    let s = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = s.split_once('.').unwrap_or((s, ""));

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    !(int.is_empty() && frac.is_empty()) && all_digits(int) && all_digits(frac)
}

/// Pads `line` to exactly `width` display columns.
///
/// [`Align::Default`] uses [`NumericClassifier`]. Text already at or beyond
/// `width` is returned unchanged; nothing is ever truncated.
///
/// ```rust
/// use gridwriter::{pad, Align};
///
/// assert_eq!(pad("42", 5, Align::Default), "   42");
/// assert_eq!(pad("ab", 5, Align::Default), "ab   ");
/// assert_eq!(pad("ab", 5, Align::Center), " ab  ");
/// ```
pub fn pad(line: &str, width: usize, align: Align) -> String {
    pad_with(line, width, align, &NumericClassifier, ' ')
}

/// Pads a string on the left (right-aligns) to reach the target width.
pub fn pad_left(s: &str, width: usize) -> String {
    fill(s, width, Align::Right, ' ')
}

/// Pads a string on the right (left-aligns) to reach the target width.
pub fn pad_right(s: &str, width: usize) -> String {
    fill(s, width, Align::Left, ' ')
}

/// Pads a string on both sides (centers) to reach the target width.
///
/// When the remaining space is odd, the extra space goes on the right.
pub fn pad_center(s: &str, width: usize) -> String {
    fill(s, width, Align::Center, ' ')
}

/// Pads with a custom classifier and fill character.
pub(crate) fn pad_with(
    line: &str,
    width: usize,
    align: Align,
    classifier: &dyn CellClassifier,
    fill_char: char,
) -> String {
    let align = match align {
        Align::Default => classifier.classify(line),
        explicit => explicit,
    };
    fill(line, width, align, fill_char)
}

pub(crate) fn fill(s: &str, width: usize, align: Align, fill_char: char) -> String {
    let alignment = match align {
        Align::Right => Alignment::Right,
        Align::Center => Alignment::Center,
        Align::Left | Align::Default => Alignment::Left,
    };
    // Shift the target so the gap follows `display_width`, not console's own measure.
    let target = (width + measure_text_width(s)).saturating_sub(display_width(s));
    pad_str_with(s, target, alignment, None, fill_char).into_owned()
}

/// Formats a header or footer label for display.
///
/// Underscores and dots become spaces, surrounding whitespace is trimmed and
/// the visible text is uppercased. Escape sequences pass through untouched.
///
/// ```rust
/// use gridwriter::format_label;
///
/// assert_eq!(format_label("cv2"), "CV2");
/// assert_eq!(format_label("first_name"), "FIRST NAME");
/// assert_eq!(format_label("$146.93"), "$146 93");
/// ```
pub fn format_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for seg in segments(label) {
        if seg.escape {
            out.push_str(seg.text);
            continue;
        }
        for c in seg.text.chars() {
            match c {
                '_' | '.' => out.push(' '),
                c => out.extend(c.to_uppercase()),
            }
        }
    }
    out.trim().to_string()
}
