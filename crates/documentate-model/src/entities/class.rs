use super::function::Function;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed class-level variable (`x: int = 0`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    /// Variable name
    pub name: String,

    /// Type annotation, absent when it does not resolve to a simple name
    pub type_annotation: Option<String>,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_annotation: None,
        }
    }

    pub fn with_type(mut self, type_ann: impl Into<String>) -> Self {
        self.type_annotation = Some(type_ann.into());
        self
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.type_annotation {
            Some(ref ty) => write!(f, "{}: {}", self.name, ty),
            None => f.write_str(&self.name),
        }
    }
}

/// A class definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    /// Class name
    pub name: String,

    /// Starting line number (1-indexed)
    pub line: usize,

    /// Raw base expressions as written in source, unresolved
    pub bases: Vec<String>,

    /// Docstring, cleaned of indentation
    pub docstring: Option<String>,

    /// Methods in declaration order
    pub methods: Vec<Function>,

    /// Annotated class variables in declaration order
    pub class_variables: Vec<Variable>,

    /// Decorators, `@` prefixed
    pub decorators: Vec<String>,
}

impl Class {
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
            bases: Vec::new(),
            docstring: None,
            methods: Vec::new(),
            class_variables: Vec::new(),
            decorators: Vec::new(),
        }
    }

    pub fn with_bases(mut self, bases: Vec<String>) -> Self {
        self.bases = bases;
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.docstring = Some(doc.into());
        self
    }

    pub fn with_methods(mut self, methods: Vec<Function>) -> Self {
        self.methods = methods;
        self
    }

    pub fn with_class_variables(mut self, variables: Vec<Variable>) -> Self {
        self.class_variables = variables;
        self
    }

    pub fn with_decorators(mut self, decorators: Vec<String>) -> Self {
        self.decorators = decorators;
        self
    }

    pub fn add_method(&mut self, method: Function) {
        self.methods.push(method);
    }

    pub fn add_class_variable(&mut self, variable: Variable) {
        self.class_variables.push(variable);
    }
}
