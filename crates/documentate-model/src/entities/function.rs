use serde::{Deserialize, Serialize};
use std::fmt;

/// A positional function parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Argument {
    /// Parameter name
    pub name: String,

    /// Type annotation, present only when it resolves to a simple name
    pub type_annotation: Option<String>,
}

impl Argument {
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

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.type_annotation {
            Some(ref ty) => write!(f, "{}: {}", self.name, ty),
            None => f.write_str(&self.name),
        }
    }
}

/// Declared return type of a function.
///
/// `Unannotated` and `Constant("None")` are different statements about a
/// function and must never render the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ReturnType {
    /// No return annotation at all (or one too complex to resolve)
    #[default]
    Unannotated,

    /// Annotation resolving to an identifier or dotted path
    Named(String),

    /// Annotation that is a literal constant, e.g. `None`
    Constant(String),
}

impl ReturnType {
    /// Marker rendered for functions without a usable return annotation
    pub const UNKNOWN: &'static str = "unknown";

    /// Text shown to a reader for this return type
    pub fn display_text(&self) -> &str {
        match self {
            ReturnType::Unannotated => Self::UNKNOWN,
            ReturnType::Named(name) => name,
            ReturnType::Constant(value) => value,
        }
    }
}

/// A function or method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    /// Function name
    pub name: String,

    /// Starting line number (1-indexed)
    pub line: usize,

    /// Positional parameters in declaration order
    pub arguments: Vec<Argument>,

    /// Declared return type
    pub returns: ReturnType,

    /// Docstring, cleaned of indentation
    pub docstring: Option<String>,

    /// Is this an `async def`?
    pub is_async: bool,

    /// Decorators, `@` prefixed (e.g. `@staticmethod`)
    pub decorators: Vec<String>,
}

impl Function {
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
            arguments: Vec::new(),
            returns: ReturnType::Unannotated,
            docstring: None,
            is_async: false,
            decorators: Vec::new(),
        }
    }

    // Builder methods
    pub fn with_arguments(mut self, arguments: Vec<Argument>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn with_returns(mut self, returns: ReturnType) -> Self {
        self.returns = returns;
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.docstring = Some(doc.into());
        self
    }

    pub fn async_fn(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn with_decorators(mut self, decorators: Vec<String>) -> Self {
        self.decorators = decorators;
        self
    }

    /// Argument list as rendered in documentation: `(a, b: int)`
    pub fn argument_list(&self) -> String {
        let args: Vec<String> = self.arguments.iter().map(ToString::to_string).collect();
        format!("({})", args.join(", "))
    }
}
