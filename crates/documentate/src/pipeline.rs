//! Pipeline driver: discover, extract, render, write.

use crate::config::DocConfig;
use crate::error::{DocError, Result};
use crate::render::{create_renderer, render_all, Document, Renderer};
use documentate_model::{ExtractorMetrics, Module, SourceExtractor};
use documentate_python::PythonExtractor;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Outcome of a run that got as far as rendering
#[derive(Debug, Default)]
pub struct RunReport {
    /// Source files discovered
    pub files_discovered: usize,

    /// Modules that got a document
    pub modules_documented: usize,

    /// Paths of the documents written, in write order
    pub documents_written: Vec<PathBuf>,

    /// Isolated failures: files that did not extract, documents not written
    pub failures: Vec<DocError>,

    pub metrics: ExtractorMetrics,
}

impl RunReport {
    /// True when nothing failed
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One documentation run over an input directory
pub struct Pipeline {
    config: DocConfig,
    renderer: Box<dyn Renderer>,
    extractor: PythonExtractor,
}

impl Pipeline {
    /// Validate the configuration and resolve the render profile
    pub fn new(config: DocConfig) -> Result<Self> {
        config.validate()?;
        let renderer = create_renderer(&config.template)?;
        let extractor = PythonExtractor::with_config(config.extractor.clone());

        Ok(Self {
            config,
            renderer,
            extractor,
        })
    }

    pub fn config(&self) -> &DocConfig {
        &self.config
    }

    /// Run the whole pipeline.
    ///
    /// Returns `Err` only for fatal errors, before anything is written.
    /// Per-file and per-document failures are collected in the report.
    #[instrument(skip(self), fields(
        input = %self.config.input_dir.display(),
        output = %self.config.output_dir.display(),
        template = %self.config.template,
    ))]
    pub fn run(&self) -> Result<RunReport> {
        let input = &self.config.input_dir;
        check_input_dir(input)?;

        let files = self
            .extractor
            .discover_files(input)
            .map_err(|e| DocError::input(input, e.to_string()))?;
        if files.is_empty() {
            return Err(DocError::NoSourceFiles(input.clone()));
        }
        info!(files = files.len(), "Discovered source files");

        // Every module is collected before any page is rendered
        let (modules, mut failures) = self.extract(&files);

        let rendered = render_all(self.renderer.as_ref(), &modules);
        failures.extend(rendered.errors);

        let mut documents_written = Vec::with_capacity(rendered.documents.len());
        for document in &rendered.documents {
            match write_document(&self.config.output_dir, document) {
                Ok(path) => {
                    debug!(path = %path.display(), "Document written");
                    documents_written.push(path);
                }
                Err(e) => {
                    warn!(error = %e, "Document not written");
                    failures.push(e);
                }
            }
        }

        let metrics = self.extractor.metrics();
        info!(
            files = files.len(),
            modules = rendered.modules_rendered,
            documents = documents_written.len(),
            failures = failures.len(),
            classes = metrics.total_classes,
            functions = metrics.total_functions,
            success_rate = metrics.success_rate(),
            extract_ms = metrics.total_extract_time.as_millis(),
            avg_extract_us = metrics.avg_extract_time().as_micros(),
            "Documentation run finished"
        );

        Ok(RunReport {
            files_discovered: files.len(),
            modules_documented: rendered.modules_rendered,
            documents_written,
            failures,
            metrics,
        })
    }

    fn extract(&self, files: &[PathBuf]) -> (Vec<Module>, Vec<DocError>) {
        let mut modules = Vec::with_capacity(files.len());
        let mut failures = Vec::new();

        for result in self.extractor.extract_files(files) {
            match result {
                Ok(module) => modules.push(module),
                Err(e) => {
                    warn!(error = %e, "Skipping source file");
                    failures.push(DocError::Parse(e));
                }
            }
        }

        (modules, failures)
    }
}

fn check_input_dir(input: &Path) -> Result<()> {
    let metadata = fs::metadata(input).map_err(|e| DocError::input(input, e.to_string()))?;
    if !metadata.is_dir() {
        return Err(DocError::input(input, "not a directory"));
    }
    Ok(())
}

/// Write one document under `output_dir`, creating parent directories
pub fn write_document(output_dir: &Path, document: &Document) -> Result<PathBuf> {
    let path = document
        .address
        .split('/')
        .fold(output_dir.to_path_buf(), |path, part| path.join(part));

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| DocError::output(parent, e))?;
    }
    fs::write(&path, &document.content).map_err(|e| DocError::output(&path, e))?;

    Ok(path)
}
