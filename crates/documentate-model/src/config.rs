use serde::{Deserialize, Serialize};

/// Configuration for extractor behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Include docstrings in entities
    pub include_docs: bool,

    /// Maximum file size to extract (in bytes)
    /// Files larger than this fail with `FileTooLarge`
    pub max_file_size: usize,

    /// Extract files on a worker pool (for `extract_files`)
    pub parallel: bool,

    /// Number of parallel workers (None = rayon default)
    pub parallel_workers: Option<usize>,

    /// Descend into subdirectories during discovery
    pub recursive: bool,

    /// Directory names skipped during recursive discovery
    pub exclude_dirs: Vec<String>,

    /// Stop starting new files once one file has failed
    pub abort_on_error: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            include_docs: true,
            max_file_size: 10 * 1024 * 1024, // 10 MB
            parallel: true,
            parallel_workers: None,
            recursive: false,
            exclude_dirs: vec![
                "__pycache__".to_string(),
                ".git".to_string(),
                ".venv".to_string(),
                "venv".to_string(),
                ".tox".to_string(),
                "build".to_string(),
                "dist".to_string(),
                "*.egg-info".to_string(),
            ],
            abort_on_error: false,
        }
    }
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(workers) = self.parallel_workers {
            if workers == 0 {
                return Err("parallel_workers must be greater than 0".to_string());
            }
        }

        if self.max_file_size == 0 {
            return Err("max_file_size must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Enable or disable parallel extraction
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the worker count used when extracting in parallel
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.parallel_workers = Some(workers);
        self
    }

    /// Set maximum file size
    pub fn with_max_file_size(mut self, size: usize) -> Self {
        self.max_file_size = size;
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_docs(mut self, include_docs: bool) -> Self {
        self.include_docs = include_docs;
        self
    }

    pub fn with_abort_on_error(mut self, abort: bool) -> Self {
        self.abort_on_error = abort;
        self
    }

    /// Check if a directory should be excluded
    pub fn should_exclude_dir(&self, dir_name: &str) -> bool {
        self.exclude_dirs.iter().any(|excluded| {
            // Handle glob patterns like *.egg-info
            if excluded.contains('*') {
                let pattern = excluded.replace('*', "");
                dir_name.contains(&pattern)
            } else {
                dir_name == excluded
            }
        })
    }
}
