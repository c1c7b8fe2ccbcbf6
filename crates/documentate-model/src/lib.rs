//! documentate model
//!
//! Shared trait and types for building documentate language extractors.
//!
//! This crate provides the language-agnostic documentation model and the
//! contract extractors implement:
//!
//! - **Entity types**: modules, classes, functions, arguments and typed variables
//! - **Fragment producer**: [`render_fragment`] turns any entity into text at a given heading depth
//! - **SourceExtractor trait**: the interface every language extractor implements
//! - **Configuration**: Customizable extractor behavior
//! - **Metrics**: Performance and success tracking
//! - **Error handling**: Per-file extraction errors
//!
//! # Example
//!
//! ```rust
//! use documentate_model::{render_fragment, Argument, Entity, Function, Markdown, ReturnType};
//!
//! let function = Function::new("area", 3)
//!     .with_arguments(vec![Argument::new("self")])
//!     .with_returns(ReturnType::Named("float".to_string()));
//!
//! let text = render_fragment(Entity::Function(&function), 3, &Markdown);
//! assert!(text.starts_with("### Function: `area`"));
//! assert!(text.contains("**Returns**: `float`"));
//! ```

pub mod config;
pub mod entities;
pub mod errors;
pub mod fragment;
pub mod metrics;
pub mod traits;

// Re-export commonly used types
pub use config::ExtractorConfig;
pub use entities::{module_name_for, Argument, Class, Function, Module, ReturnType, Variable};
pub use errors::{ParserError, ParserResult};
pub use fragment::{render_fragment, Entity, Markdown, Markup};
pub use metrics::ExtractorMetrics;
pub use traits::SourceExtractor;
