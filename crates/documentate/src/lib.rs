//! # documentate
//!
//! Generate navigable documentation from Python projects.
//!
//! A run discovers the `.py` files of an input directory, extracts one
//! documentation [`Module`](documentate_model::Module) per file, then renders
//! the whole collection into cross-linked documents plus an index.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use documentate::{DocConfig, Pipeline};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DocConfig::new("my_project", "docs").with_template("site");
//! let report = Pipeline::new(config)?.run()?;
//! println!("Wrote {} documents", report.documents_written.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod render;

pub use config::{DocConfig, DEFAULT_TEMPLATE};
pub use error::{DocError, Result};
pub use pipeline::{Pipeline, RunReport};
pub use render::{create_renderer, render_all, Document, Renderer};
