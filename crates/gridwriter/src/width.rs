//! ANSI-aware display width measurement.
//!
//! Terminal escape sequences (SGR colors, cursor controls, OSC hyperlinks) take
//! no space on screen. Everything in this crate that measures, pads or splits
//! text goes through [`segments`], which yields escape sequences as single
//! zero-width atoms so they are never counted and never cut in half.

use std::borrow::Cow;

use unicode_width::UnicodeWidthChar;

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// One indivisible piece of a string: a visible character or a whole escape sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The raw text of the segment.
    pub text: &'a str,
    /// Display columns occupied on screen. Always 0 for escape sequences.
    pub width: usize,
    /// Whether this segment is a terminal escape sequence.
    pub escape: bool,
}

/// Iterator over the [`Segment`]s of a string.
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    rest: &'a str,
}

/// Splits a string into visible characters and escape sequences.
///
/// # Example
///
/// ```rust
/// use gridwriter::width::segments;
///
/// let parts: Vec<_> = segments("\x1b[31mok\x1b[0m").map(|s| s.text).collect();
/// assert_eq!(parts, vec!["\x1b[31m", "o", "k", "\x1b[0m"]);
/// ```
pub fn segments(s: &str) -> Segments<'_> {
    Segments { rest: s }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let len = if first == ESC {
            escape_len(self.rest)
        } else {
            first.len_utf8()
        };
        let (text, rest) = self.rest.split_at(len);
        self.rest = rest;

        Some(if first == ESC {
            Segment {
                text,
                width: 0,
                escape: true,
            }
        } else {
            Segment {
                text,
                width: first.width().unwrap_or(0),
                escape: false,
            }
        })
    }
}

/// Scanner position inside an escape sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scan {
    /// Just consumed the ESC byte.
    Introducer,
    /// Inside `ESC [` parameters and intermediates.
    Csi,
    /// Inside an `ESC ]` operating system command.
    Osc,
    /// Saw ESC inside an OSC; expecting `\` to finish the string terminator.
    OscEscape(usize),
}

/// Byte length of the escape sequence at the start of `s` (which begins with ESC).
///
/// Unterminated sequences swallow the rest of the string.
fn escape_len(s: &str) -> usize {
    let mut state = Scan::Introducer;

    for (i, c) in s.char_indices().skip(1) {
        state = match (state, c) {
            (Scan::Introducer, '[') => Scan::Csi,
            (Scan::Introducer, ']') => Scan::Osc,
            (Scan::Introducer, '0'..='~') => return i + 1,
            (Scan::Introducer, _) => return i,
            (Scan::Csi, '\x20'..='\x3f') => Scan::Csi,
            (Scan::Csi, '@'..='~') => return i + 1,
            (Scan::Csi, _) => return i,
            (Scan::Osc, BEL) => return i + 1,
            (Scan::Osc, ESC) => Scan::OscEscape(i),
            (Scan::Osc, _) => Scan::Osc,
            (Scan::OscEscape(_), '\\') => return i + 1,
            (Scan::OscEscape(at), _) => return at,
        };
    }

    s.len()
}

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// Wide characters (CJK, most emoji) count as 2 columns, combining marks and
/// control characters as 0.
///
/// # Example
///
/// ```rust
/// use gridwriter::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    segments(s).map(|seg| seg.width).sum()
}

/// Removes all escape sequences, keeping only visible text.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains(ESC) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        segments(s)
            .filter(|seg| !seg.escape)
            .map(|seg| seg.text)
            .collect(),
    )
}


#[cfg(test)]
mod proptests {
    use super::*;
    use console::Style;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn styling_does_not_change_width(
            s in "[a-zA-Z0-9 ]{0,40}",
            color in 0u8..=255,
        ) {
            let styled = Style::new()
                .color256(color)
                .bold()
                .force_styling(true)
                .apply_to(&s)
                .to_string();
            prop_assert_eq!(display_width(&styled), display_width(&s));
            prop_assert_eq!(display_width(&styled), console::measure_text_width(&styled));
        }

        #[test]
        fn strip_ansi_matches_console(
            s in "[a-zA-Z0-9 ]{0,40}",
        ) {
            let styled = Style::new().red().underlined().force_styling(true).apply_to(&s).to_string();
            prop_assert_eq!(strip_ansi(&styled).into_owned(), console::strip_ansi_codes(&styled).into_owned());
        }
    }
}
