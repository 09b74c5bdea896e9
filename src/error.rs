use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the content pipeline.
///
/// Parsers never surface [`DocsError::Read`] to their callers: a missing
/// source is logged and replaced by an empty or default result.
#[derive(Debug, Error)]
pub enum DocsError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write feed XML: {0}")]
    Xml(String),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("feed output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, DocsError>;

/// Read a whole source file as text.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD so the rest of
/// the file still parses.
pub(crate) fn read_source(path: &std::path::Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| DocsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!(
                "{} is not valid UTF-8 (first bad byte at {}), replacing invalid bytes",
                path.display(),
                e.utf8_error().valid_up_to()
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
