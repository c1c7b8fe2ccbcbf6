use documentate_model::ParserError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for documentation runs
pub type Result<T> = std::result::Result<T, DocError>;

/// Errors that can occur during a documentation run
///
/// `Input`, `NoSourceFiles`, `UnknownTemplate` and `InvalidConfig` are fatal
/// and stop a run before any output is written. The others are isolated to one
/// source file or one output document.
#[derive(Error, Debug)]
pub enum DocError {
    /// Input directory missing or unreadable
    #[error("Input directory {path} is not usable: {reason}")]
    Input { path: PathBuf, reason: String },

    /// Input directory holds no source files
    #[error("No Python source files found in {0}")]
    NoSourceFiles(PathBuf),

    /// A source file could not be extracted
    #[error(transparent)]
    Parse(#[from] ParserError),

    /// A document could not be written
    #[error("Failed to write {path}: {source}")]
    Output { path: PathBuf, source: io::Error },

    /// Two documents resolve to the same output address
    #[error("Output address {address} of {second} is already taken by {first}")]
    NamingCollision {
        address: String,
        first: String,
        second: String,
    },

    /// An output address that would leave its place in the output directory
    #[error("Output address {address} of {owner} does not name a file inside the output directory")]
    InvalidAddress { address: String, owner: String },

    /// Unknown render profile
    #[error("Unknown template: {0}. Use markdown, html, site, or json")]
    UnknownTemplate(String),

    /// Invalid run configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A document could not be serialized
    #[error("Failed to serialize {address}: {source}")]
    Serialization {
        address: String,
        source: serde_json::Error,
    },
}

impl DocError {
    /// Create an Input error
    pub fn input(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        DocError::Input {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an Output error
    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DocError::Output {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DocError::input("/missing", "does not exist");
        assert_eq!(
            err.to_string(),
            "Input directory /missing is not usable: does not exist"
        );

        let err = DocError::NamingCollision {
            address: "shapes.html".to_string(),
            first: "src/shapes.py".to_string(),
            second: "src/Shapes.py".to_string(),
        };
        assert!(err.to_string().contains("shapes.html"));
        assert!(err.to_string().contains("src/Shapes.py"));
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let inner = ParserError::UnsupportedFile(PathBuf::from("a.txt"));
        let message = inner.to_string();
        let err = DocError::from(inner);
        assert_eq!(err.to_string(), message);
    }

    #[test]
    fn test_invalid_address_display() {
        let err = DocError::InvalidAddress {
            address: "../index.html".to_string(),
            owner: "src/...py".to_string(),
        };
        assert!(err.to_string().contains("../index.html"));
        assert!(err.to_string().contains("src/...py"));
    }
}
