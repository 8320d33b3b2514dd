//! Error type for the site library.

use std::path::PathBuf;

/// Everything that can go wrong outside the rendering core.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid layout setting `{field}`: {reason}")]
    InvalidLayout { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, SiteError>;
