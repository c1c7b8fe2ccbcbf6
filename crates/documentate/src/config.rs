use crate::error::{DocError, Result};
use documentate_model::ExtractorConfig;
use std::path::PathBuf;

/// Default render profile
pub const DEFAULT_TEMPLATE: &str = "html";

/// Configuration for one documentation run
#[derive(Debug, Clone)]
pub struct DocConfig {
    /// Directory holding the Python project
    pub input_dir: PathBuf,

    /// Directory the documents are written to
    pub output_dir: PathBuf,

    /// Render profile name (markdown, html, site, json)
    pub template: String,

    /// Extraction behavior
    pub extractor: ExtractorConfig,
}

impl DocConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            template: DEFAULT_TEMPLATE.to_string(),
            extractor: ExtractorConfig::default(),
        }
    }

    /// Set the render profile
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Set the extractor configuration
    pub fn with_extractor(mut self, extractor: ExtractorConfig) -> Self {
        self.extractor = extractor;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(DocError::InvalidConfig(
                "input directory cannot be empty".to_string(),
            ));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(DocError::InvalidConfig(
                "output directory cannot be empty".to_string(),
            ));
        }

        self.extractor.validate().map_err(DocError::InvalidConfig)
    }
}
