use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while extracting one source file
#[derive(Error, Debug)]
pub enum ParserError {
    /// Failed to read file
    #[error("IO error reading {0}: {1}")]
    IoError(PathBuf, #[source] std::io::Error),

    /// Syntax error in source code (1-based line and column)
    #[error("Syntax error in {0}:{1}:{2}: {3}")]
    SyntaxError(PathBuf, usize, usize, String),

    /// File too large
    #[error("File {0} exceeds maximum size ({1} bytes)")]
    FileTooLarge(PathBuf, usize),

    /// File extension not handled by this extractor
    #[error("Unsupported source file {0}")]
    UnsupportedFile(PathBuf),

    /// Extraction was skipped after another file failed
    #[error("Extraction of {0} cancelled after an earlier failure")]
    Cancelled(PathBuf),
}

impl ParserError {
    /// Path of the file this error is about
    pub fn path(&self) -> &Path {
        match self {
            ParserError::IoError(path, _)
            | ParserError::SyntaxError(path, ..)
            | ParserError::FileTooLarge(path, _)
            | ParserError::UnsupportedFile(path)
            | ParserError::Cancelled(path) => path,
        }
    }

    /// Source location `(line, column)` for syntax errors
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            ParserError::SyntaxError(_, line, column, _) => Some((*line, *column)),
            _ => None,
        }
    }
}

/// Result type for extractor operations
pub type ParserResult<T> = Result<T, ParserError>;
