use crate::{
    config::ExtractorConfig,
    entities::Module,
    errors::{ParserError, ParserResult},
    metrics::ExtractorMetrics,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Core trait that every language extractor implements
///
/// An extractor turns one source file into one fully populated [`Module`].
/// Extraction of distinct files shares no mutable state, so implementations
/// must be `Send + Sync` and may process files in parallel.
///
/// # Example
/// ```rust,ignore
/// use documentate_model::{SourceExtractor, ExtractorConfig};
///
/// struct MyExtractor {
///     config: ExtractorConfig,
/// }
///
/// impl SourceExtractor for MyExtractor {
///     fn language(&self) -> &str {
///         "mylang"
///     }
///
///     fn file_extensions(&self) -> &[&str] {
///         &[".my"]
///     }
///
///     // ... implement other required methods
/// }
/// ```
pub trait SourceExtractor: Send + Sync {
    /// Returns the language identifier (lowercase, e.g., "python")
    fn language(&self) -> &str;

    /// Returns supported file extensions (e.g., [".py", ".pyw"])
    fn file_extensions(&self) -> &[&str];

    /// Extract a module from a source string
    ///
    /// The module is named after `file_path`. This method does NOT update
    /// extractor metrics; only `extract_file()` does.
    ///
    /// # Errors
    /// Returns `ParserError::SyntaxError` if the source does not parse.
    fn extract_source(&self, source: &str, file_path: &Path) -> ParserResult<Module>;

    /// Read and extract a single file
    ///
    /// # Errors
    /// Returns `ParserError` if:
    /// - File cannot be read
    /// - File is larger than `max_file_size`
    /// - Source code has syntax errors
    fn extract_file(&self, path: &Path) -> ParserResult<Module>;

    /// Extract multiple files, one result per path, in input order
    ///
    /// Default implementation extracts sequentially. Override this for
    /// parallel extraction.
    fn extract_files(&self, paths: &[PathBuf]) -> Vec<ParserResult<Module>> {
        let abort_on_error = self.config().abort_on_error;
        let mut failed = false;

        paths
            .iter()
            .map(|path| {
                if failed && abort_on_error {
                    return Err(ParserError::Cancelled(path.clone()));
                }
                let result = self.extract_file(path);
                if result.is_err() {
                    failed = true;
                }
                result
            })
            .collect()
    }

    /// Discover extractable files in a directory
    ///
    /// Walks one level, or the whole tree when `recursive` is set, skipping
    /// excluded directories. The result is sorted by path so that every run
    /// over the same tree sees the same order.
    fn discover_files(&self, dir: &Path) -> ParserResult<Vec<PathBuf>> {
        let config = self.config();
        let max_depth = if config.recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();

        let walker = WalkDir::new(dir)
            .max_depth(max_depth)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| {
                // Skip excluded directories, never the root itself
                if e.depth() > 0 && e.file_type().is_dir() {
                    if let Some(name) = e.file_name().to_str() {
                        return !config.should_exclude_dir(name);
                    }
                }
                true
            });

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() && self.can_parse(entry.path()) {
                        files.push(entry.path().to_path_buf());
                    }
                }
                Err(e) if e.depth() == 0 => {
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| dir.to_path_buf());
                    return Err(ParserError::IoError(path, io::Error::from(e)));
                }
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable directory entry");
                }
            }
        }

        files.sort();
        Ok(files)
    }

    /// Check if this extractor can handle the given file
    ///
    /// Default implementation checks file extension.
    fn can_parse(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension() {
            let ext_str = format!(".{}", ext.to_string_lossy());
            self.file_extensions().contains(&ext_str.as_str())
        } else {
            false
        }
    }

    /// Get extractor configuration
    fn config(&self) -> &ExtractorConfig;

    /// Get accumulated metrics
    fn metrics(&self) -> ExtractorMetrics;

    /// Reset metrics
    fn reset_metrics(&mut self);
}
