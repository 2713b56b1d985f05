//! Border flags and glyph sets.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

/// Which outer edges of the table are drawn.
///
/// A disabled edge is replaced by blank padding of the same width, so
/// columns stay aligned whichever edges are on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Border {
    /// Column separator before the first column.
    pub left: bool,
    /// Column separator after the last column.
    pub right: bool,
    /// Rule above the header.
    pub top: bool,
    /// Rule under the body.
    pub bottom: bool,
}

impl Default for Border {
    fn default() -> Self {
        Border::all(true)
    }
}

impl Border {
    /// All four edges on or off.
    pub fn all(enabled: bool) -> Self {
        Border {
            left: enabled,
            right: enabled,
            top: enabled,
            bottom: enabled,
        }
    }

    /// No outer edges.
    pub fn none() -> Self {
        Border::all(false)
    }
}

/// The characters used to draw the grid.
///
/// `center`, `row` and `column` may be any string, including the empty
/// string. `pad` fills cell padding and blanked-out edges; a character that
/// is not exactly one column wide is rendered as a space instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    /// Junction where a horizontal rule meets a column boundary.
    pub center: String,
    /// Horizontal rule segment.
    pub row: String,
    /// Vertical column separator.
    pub column: String,
    /// Cell padding.
    pub pad: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        BorderStyle::Ascii.glyphs()
    }
}

impl Glyphs {
    /// Glyphs with the given junction, rule and separator and a space pad.
    ///
    /// ```rust
    /// use gridwriter::Glyphs;
    ///
    /// let glyphs = Glyphs::new("*", "=", "!");
    /// assert_eq!(glyphs.row, "=");
    /// assert_eq!(glyphs.pad, ' ');
    /// ```
    pub fn new(center: impl Into<String>, row: impl Into<String>, column: impl Into<String>) -> Self {
        Glyphs {
            center: center.into(),
            row: row.into(),
            column: column.into(),
            pad: ' ',
        }
    }

    /// The pad character actually drawn.
    ///
    /// ```rust
    /// use gridwriter::Glyphs;
    ///
    /// let mut glyphs = Glyphs::default();
    /// glyphs.pad = '.';
    /// assert_eq!(glyphs.pad_char(), '.');
    /// glyphs.pad = '日';
    /// assert_eq!(glyphs.pad_char(), ' ');
    /// ```
    pub fn pad_char(&self) -> char {
        match self.pad.width() {
            Some(1) => self.pad,
            _ => ' ',
        }
    }
}

/// Ready-made glyph sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// ASCII borders: +, -, |
    #[default]
    Ascii,
    /// Pipe tables: |, -, | (pair with top and bottom edges off)
    Markdown,
    /// Light Unicode box-drawing characters: ┼, ─, │
    Light,
    /// Heavy Unicode box-drawing characters: ╋, ━, ┃
    Heavy,
    /// Double-line Unicode box-drawing: ╬, ═, ║
    Double,
    /// No visible glyphs; cells are separated by padding only.
    Blank,
}

impl BorderStyle {
    /// The glyph set for this style.
    pub fn glyphs(self) -> Glyphs {
        match self {
            BorderStyle::Ascii => Glyphs::new("+", "-", "|"),
            BorderStyle::Markdown => Glyphs::new("|", "-", "|"),
            BorderStyle::Light => Glyphs::new("┼", "─", "│"),
            BorderStyle::Heavy => Glyphs::new("╋", "━", "┃"),
            BorderStyle::Double => Glyphs::new("╬", "═", "║"),
            BorderStyle::Blank => Glyphs::new("", "", ""),
        }
    }
}

impl From<BorderStyle> for Glyphs {
    fn from(style: BorderStyle) -> Self {
        style.glyphs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_border_is_closed_box() {
        assert_eq!(Border::default(), Border::all(true));
        assert!(!Border::none().left);
    }

    #[test]
    fn default_glyphs_are_ascii() {
        let glyphs = Glyphs::default();
        assert_eq!(glyphs.center, "+");
        assert_eq!(glyphs.row, "-");
        assert_eq!(glyphs.column, "|");
        assert_eq!(glyphs.pad, ' ');
    }

    #[test]
    fn presets() {
        assert_eq!(Glyphs::from(BorderStyle::Light).column, "│");
        assert_eq!(BorderStyle::Heavy.glyphs().row, "━");
        assert_eq!(BorderStyle::Double.glyphs().center, "╬");
        assert_eq!(BorderStyle::Markdown.glyphs().center, "|");
        assert!(BorderStyle::Blank.glyphs().column.is_empty());
    }

    #[test]
    fn pad_char_must_be_single_column() {
        let mut glyphs = Glyphs::default();
        glyphs.pad = '\t';
        assert_eq!(glyphs.pad_char(), ' ');
        glyphs.pad = '·';
        assert_eq!(glyphs.pad_char(), '·');
    }

    #[test]
    fn border_partial_yaml() {
        let border: Border = serde_yaml::from_str("top: false\nbottom: false\n").unwrap();
        assert_eq!(
            border,
            Border {
                left: true,
                right: true,
                top: false,
                bottom: false
            }
        );
    }
}
