//! Error types.
//!
//! Rendering itself only fails when the output sink does, and reports that as
//! a plain [`std::io::Error`]. [`ConfigError`] covers loading [`TableOptions`]
//! from text.
//!
//! [`TableOptions`]: crate::TableOptions

use thiserror::Error;

/// Failure to parse a [`TableOptions`](crate::TableOptions) document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The YAML document is malformed or has values of the wrong type.
    #[error("invalid YAML table options: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document is malformed or has values of the wrong type.
    #[error("invalid JSON table options: {0}")]
    Json(#[from] serde_json::Error),
}
