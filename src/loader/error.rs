//! Loader error types

use std::path::PathBuf;
use thiserror::Error;

use crate::page::PageError;

/// Everything that can stop the page from being populated.
///
/// All variants end up in the same top-level handler, which logs and leaves
/// the page as it was.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The server answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Fetch { status: u16 },

    /// The body is not a valid portfolio document
    #[error("Parse error: {0}")]
    Parse(String),

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Local document could not be read
    #[error("Failed to read {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// The host page does not match what the renderer expects
    #[error("Page error: {0}")]
    Page(#[from] PageError),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

impl LoadError {
    /// Line logged by the top-level handler when start-up stops
    pub fn report(&self) -> String {
        format!("Error fetching or processing portfolio data: {}", self)
    }
}

/// Result type alias for loader operations
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::Fetch { status: 404 };
        assert_eq!(err.to_string(), "HTTP error! status: 404");

        let err = LoadError::Page(PageError::MissingElement("#scroll-nav".into()));
        assert_eq!(err.to_string(), "Page error: Missing element: #scroll-nav");
    }

    #[test]
    fn test_report_line() {
        let err = LoadError::Fetch { status: 404 };
        assert_eq!(
            err.report(),
            "Error fetching or processing portfolio data: HTTP error! status: 404"
        );

        let err = LoadError::Parse("expected value at line 1 column 1".into());
        assert_eq!(
            err.report(),
            "Error fetching or processing portfolio data: Parse error: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LoadError = json_err.into();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
