//! # documentate-python
//!
//! Python extractor for documentate - builds documentation models from
//! Python source files.
//!
//! ## Features
//!
//! - Top-level classes with bases, decorators and docstrings
//! - Methods (sync and async) with positional arguments and simple annotations
//! - Annotated class variables
//! - Parallel extraction over many files, results in input order
//! - Safe: No panics, per-file errors
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use documentate_python::PythonExtractor;
//! use documentate_model::SourceExtractor;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = PythonExtractor::new();
//!
//! let module = extractor.extract_file(Path::new("example.py"))?;
//! println!("Documented {} classes", module.classes.len());
//! # Ok(())
//! # }
//! ```

mod extractor;
mod parser_impl;
mod visitor;

pub use parser_impl::PythonExtractor;

// Re-export the model types for convenience
pub use documentate_model::{
    Argument, Class, ExtractorConfig, ExtractorMetrics, Function, Module, ParserError,
    ReturnType, SourceExtractor, Variable,
};
