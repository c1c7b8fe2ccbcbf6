//! AST helpers for extracting documentation from the Python syntax tree
//!
//! Docstring lookup, annotation resolution and source-text access shared by
//! the extractor. Nothing here holds state between files.

use documentate_model::ReturnType;
use rustpython_parser::ast::{self, Constant, Expr, Ranged, Stmt};

/// Byte offset to 1-based line/column lookup for one source file
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { line_starts }
    }

    /// 1-based `(line, column)` of a byte offset; column counts bytes
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        (line + 1, offset - self.line_starts[line] + 1)
    }
}

/// Read-only view of the file being extracted
pub struct SourceContext<'a> {
    source: &'a str,
    lines: LineIndex,

    /// Extract docstrings at all
    pub include_docs: bool,
}

impl<'a> SourceContext<'a> {
    pub fn new(source: &'a str, include_docs: bool) -> Self {
        Self {
            source,
            lines: LineIndex::new(source),
            include_docs,
        }
    }

    /// 1-based line of a byte offset
    pub fn line(&self, offset: usize) -> usize {
        self.lines.line_col(offset).0
    }

    /// Source text spanned by a node
    pub fn text<N: Ranged>(&self, node: &N) -> Option<&'a str> {
        let range = node.range();
        self.source
            .get(usize::from(range.start())..usize::from(range.end()))
    }

    /// Docstring of a body, honoring `include_docs`
    pub fn docstring(&self, body: &[Stmt]) -> Option<String> {
        if self.include_docs {
            extract_docstring(body)
        } else {
            None
        }
    }

    /// Decorator names, `@` prefixed, without call arguments
    pub fn decorators(&self, decorator_list: &[Expr]) -> Vec<String> {
        decorator_list
            .iter()
            .filter_map(|d| self.text(d))
            .map(|text| {
                // Handle @decorator and @decorator(args) patterns
                let name = text.split('(').next().unwrap_or(text);
                format!("@{}", name.trim())
            })
            .collect()
    }

    /// Resolve a return annotation
    pub fn return_type(&self, returns: Option<&Expr>) -> ReturnType {
        match returns {
            None => ReturnType::Unannotated,
            Some(expr @ Expr::Constant(constant)) => match constant.value {
                Constant::None => ReturnType::Constant("None".to_string()),
                Constant::Str(ref text) => ReturnType::Constant(text.clone()),
                _ => self
                    .text(expr)
                    .map(|text| ReturnType::Constant(text.to_string()))
                    .unwrap_or_default(),
            },
            Some(expr) => annotation_name(expr)
                .map(ReturnType::Named)
                .unwrap_or_default(),
        }
    }
}

/// Extract the docstring of a module, class or function body.
///
/// Only a first statement that is a plain string literal counts.
pub fn extract_docstring(body: &[Stmt]) -> Option<String> {
    let Stmt::Expr(ast::StmtExpr { value, .. }) = body.first()? else {
        return None;
    };
    match value.as_ref() {
        Expr::Constant(ast::ExprConstant {
            value: Constant::Str(text),
            ..
        }) => {
            let cleaned = clean_docstring(text);
            (!cleaned.is_empty()).then_some(cleaned)
        }
        _ => None,
    }
}

/// Resolve a simple annotation: a name or a dotted attribute chain.
///
/// Subscripts, unions, calls and string annotations resolve to `None`.
pub fn annotation_name(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Name(name) => Some(name.id.to_string()),
        Expr::Attribute(attr) => {
            annotation_name(&attr.value).map(|base| format!("{}.{}", base, attr.attr))
        }
        _ => None,
    }
}

/// Normalize docstring indentation the way Python's `inspect.cleandoc` does.
pub fn clean_docstring(raw: &str) -> String {
    let lines: Vec<String> = raw.split('\n').map(expand_tabs).collect();

    // Common indentation of every line after the first, in characters
    let margin = lines
        .iter()
        .skip(1)
        .filter(|l| !l.trim_start().is_empty())
        .map(|l| l.chars().count() - l.trim_start().chars().count())
        .min()
        .unwrap_or(0);

    let mut cleaned: Vec<&str> = Vec::with_capacity(lines.len());
    if let Some(first) = lines.first() {
        cleaned.push(first.trim_start());
    }
    for line in lines.iter().skip(1) {
        cleaned.push(skip_chars(line, margin).trim_end_matches('\r'));
    }

    while cleaned.last().is_some_and(|l| l.trim().is_empty()) {
        cleaned.pop();
    }
    let start = cleaned
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(cleaned.len());

    cleaned[start..].join("\n")
}

/// `line` without its first `n` characters
fn skip_chars(line: &str, n: usize) -> &str {
    line.char_indices()
        .nth(n)
        .map_or("", |(start, _)| &line[start..])
}

fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + 8);
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let pad = 8 - column % 8;
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            out.push(c);
            column += 1;
        }
    }
    out
}
