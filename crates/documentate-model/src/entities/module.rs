use super::class::{Class, Variable};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Represents one source file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Module name (filename without extension)
    pub name: String,

    /// Path of the source file the module was extracted from
    pub path: String,

    /// Module docstring
    pub docstring: Option<String>,

    /// Top-level classes in declaration order
    pub classes: Vec<Class>,

    /// Reserved for module-level declarations; never populated
    pub globals: Vec<Variable>,
}

impl Module {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            docstring: None,
            classes: Vec::new(),
            globals: Vec::new(),
        }
    }

    /// Create an empty module named after `path`
    pub fn from_path(path: &Path) -> Self {
        Self::new(module_name_for(path), path.display().to_string())
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.docstring = Some(doc.into());
        self
    }

    pub fn with_classes(mut self, classes: Vec<Class>) -> Self {
        self.classes = classes;
        self
    }

    pub fn add_class(&mut self, class: Class) {
        self.classes.push(class);
    }

    /// Total number of methods across all classes
    pub fn method_count(&self) -> usize {
        self.classes.iter().map(|c| c.methods.len()).sum()
    }
}

/// Derive a module name from a source path: `pkg/shapes.py` → `shapes`
pub fn module_name_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("module")
        .to_string()
}
