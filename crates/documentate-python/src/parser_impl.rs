//! Implementation of the SourceExtractor trait for Python
//!
//! This module provides the PythonExtractor struct that implements the
//! documentate-model::SourceExtractor trait.

use documentate_model::{
    ExtractorConfig, ExtractorMetrics, Module, ParserError, ParserResult, SourceExtractor,
};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Python language extractor implementing the SourceExtractor trait
pub struct PythonExtractor {
    config: ExtractorConfig,
    metrics: Mutex<ExtractorMetrics>,
}

impl PythonExtractor {
    /// Create a new Python extractor with default configuration
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    /// Create a new Python extractor with custom configuration
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self {
            config,
            metrics: Mutex::new(ExtractorMetrics::default()),
        }
    }

    fn lock_metrics(&self) -> MutexGuard<'_, ExtractorMetrics> {
        // A panicking worker cannot leave the counters half-updated
        self.metrics.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update_metrics(&self, result: &ParserResult<Module>, duration: Duration) {
        let mut metrics = self.lock_metrics();
        match result {
            Ok(module) => {
                metrics.record_success(duration, module.classes.len(), module.method_count())
            }
            Err(_) => metrics.record_failure(duration),
        }
    }

    fn read_and_extract(&self, path: &Path) -> ParserResult<Module> {
        if !self.can_parse(path) {
            warn!("Unsupported file extension");
            return Err(ParserError::UnsupportedFile(path.to_path_buf()));
        }

        let metadata =
            fs::metadata(path).map_err(|e| ParserError::IoError(path.to_path_buf(), e))?;
        if metadata.len() > self.config.max_file_size as u64 {
            warn!("File too large: {} bytes", metadata.len());
            return Err(ParserError::FileTooLarge(
                path.to_path_buf(),
                metadata.len() as usize,
            ));
        }

        let source =
            fs::read_to_string(path).map_err(|e| ParserError::IoError(path.to_path_buf(), e))?;

        self.extract_source(&source, path)
    }
}

impl Default for PythonExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceExtractor for PythonExtractor {
    fn language(&self) -> &str {
        "python"
    }

    fn file_extensions(&self) -> &[&str] {
        &[".py", ".pyw"]
    }

    fn extract_source(&self, source: &str, file_path: &Path) -> ParserResult<Module> {
        crate::extractor::extract(source, file_path, &self.config)
    }

    #[instrument(skip(self), fields(file = %path.display()))]
    fn extract_file(&self, path: &Path) -> ParserResult<Module> {
        debug!("Starting file extraction");
        let start = Instant::now();

        let result = self.read_and_extract(path);
        let duration = start.elapsed();
        self.update_metrics(&result, duration);

        match &result {
            Ok(module) => debug!(
                classes = module.classes.len(),
                methods = module.method_count(),
                time_ms = duration.as_millis(),
                "File extracted"
            ),
            Err(e) => debug!(error = %e, "File extraction failed"),
        }

        result
    }

    /// Extract files in parallel when enabled, preserving input order.
    ///
    /// With `abort_on_error`, files not yet started when the first failure is
    /// observed come back as [`ParserError::Cancelled`].
    fn extract_files(&self, paths: &[PathBuf]) -> Vec<ParserResult<Module>> {
        let cancelled = AtomicBool::new(false);
        let abort_on_error = self.config.abort_on_error;

        let extract_one = |path: &PathBuf| {
            if cancelled.load(Ordering::Relaxed) {
                return Err(ParserError::Cancelled(path.clone()));
            }
            let result = self.extract_file(path);
            if abort_on_error && result.is_err() {
                cancelled.store(true, Ordering::Relaxed);
            }
            result
        };

        let results: Vec<_> = if !self.config.parallel || paths.len() < 2 {
            paths.iter().map(&extract_one).collect()
        } else if let Some(workers) = self.config.parallel_workers {
            match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
                Ok(pool) => {
                    pool.install(|| paths.par_iter().map(&extract_one).collect::<Vec<_>>())
                }
                Err(e) => {
                    warn!(error = %e, "Failed to create thread pool, extracting sequentially");
                    paths.iter().map(&extract_one).collect()
                }
            }
        } else {
            paths.par_iter().map(&extract_one).collect()
        };

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(
            files = paths.len(),
            succeeded = paths.len() - failed,
            failed,
            "Extraction finished"
        );

        results
    }

    fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    fn metrics(&self) -> ExtractorMetrics {
        self.lock_metrics().clone()
    }

    fn reset_metrics(&mut self) {
        *self.lock_metrics() = ExtractorMetrics::default();
    }
}
