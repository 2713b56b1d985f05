//! Rendering configuration.
//!
//! [`TableOptions`] collects every knob a [`Table`](crate::Table) exposes
//! through its setters, so a table's look can be stored in a config file and
//! loaded in one go. Missing keys take their defaults.
//!
//! ```rust
//! use gridwriter::{Align, TableOptions};
//!
//! let options = TableOptions::from_yaml(r#"
//! border: { top: false, bottom: false }
//! glyphs: { center: "|" }
//! align: left
//! max_column_width: 20
//! "#).unwrap();
//!
//! assert!(!options.border.top);
//! assert!(options.border.left);
//! assert_eq!(options.glyphs.center, "|");
//! assert_eq!(options.glyphs.row, "-");
//! assert_eq!(options.align, Align::Left);
//! assert_eq!(options.max_column_width, 20);
//! ```

use serde::{Deserialize, Serialize};

use crate::cell::Align;
use crate::error::ConfigError;
use crate::style::{Border, Glyphs};

/// Column width above which body text starts wrapping, by default.
pub const DEFAULT_MAX_COLUMN_WIDTH: usize = 30;

/// Caption printed under the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Caption {
    pub enabled: bool,
    pub text: String,
}

impl Default for Caption {
    fn default() -> Self {
        Caption {
            enabled: false,
            text: "Table caption.".to_string(),
        }
    }
}

/// Complete rendering configuration for a [`Table`](crate::Table).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Which outer edges are drawn.
    pub border: Border,
    /// Characters used for rules, junctions, separators and padding.
    pub glyphs: Glyphs,
    /// Alignment of body lines.
    pub align: Align,
    /// Alignment of header labels.
    pub header_align: Align,
    /// Alignment of footer labels.
    pub footer_align: Align,
    /// Uppercase header and footer labels.
    pub auto_format: bool,
    /// Reflow body text to the column width. When off, only explicit
    /// newlines break lines and columns grow to fit.
    pub auto_wrap: bool,
    /// Width at which body text is wrapped. Unbreakable lines may still
    /// widen a column past it.
    pub max_column_width: usize,
    /// Line terminator written after every rendered line.
    pub newline: String,
    /// Draw a rule after every body row.
    pub row_line: bool,
    /// Draw a rule between the header and the body.
    pub header_line: bool,
    /// Caption settings.
    pub caption: Caption,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            border: Border::default(),
            glyphs: Glyphs::default(),
            align: Align::Default,
            header_align: Align::Default,
            footer_align: Align::Default,
            auto_format: true,
            auto_wrap: true,
            max_column_width: DEFAULT_MAX_COLUMN_WIDTH,
            newline: "\n".to_string(),
            row_line: false,
            header_line: true,
            caption: Caption::default(),
        }
    }
}

impl TableOptions {
    /// Parses options from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the options as YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::BorderStyle;

    #[test]
    fn defaults() {
        let options = TableOptions::default();
        assert!(options.auto_format);
        assert!(options.auto_wrap);
        assert!(options.header_line);
        assert!(!options.row_line);
        assert!(!options.caption.enabled);
        assert_eq!(options.max_column_width, 30);
        assert_eq!(options.newline, "\n");
        assert_eq!(options.glyphs, BorderStyle::Ascii.glyphs());
    }

    #[test]
    fn empty_documents_give_defaults() {
        assert_eq!(TableOptions::from_json("{}").unwrap(), TableOptions::default());
        assert_eq!(TableOptions::from_yaml("{}").unwrap(), TableOptions::default());
    }

    #[test]
    fn json_partial() {
        let options = TableOptions::from_json(
            r#"{"row_line": true, "caption": {"enabled": true}, "header_align": "right"}"#,
        )
        .unwrap();
        assert!(options.row_line);
        assert!(options.caption.enabled);
        assert_eq!(options.caption.text, "Table caption.");
        assert_eq!(options.header_align, Align::Right);
    }

    #[test]
    fn yaml_round_trip() {
        let mut options = TableOptions::default();
        options.glyphs = BorderStyle::Light.glyphs();
        options.newline = "\r\n".to_string();
        let yaml = options.to_yaml().unwrap();
        assert_eq!(TableOptions::from_yaml(&yaml).unwrap(), options);
    }

    #[test]
    fn bad_alignment_is_rejected() {
        let err = TableOptions::from_json(r#"{"align": "diagonal"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
