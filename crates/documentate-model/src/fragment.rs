//! Document-fragment producer for the entity model.
//!
//! A fragment is the rendered text of one entity and its children. Structure
//! is fixed here; notation (markdown, HTML, ...) comes from a [`Markup`].
//!
//! Children are rendered two levels below their parent: one level for the
//! parent's own heading and one for the members sub-heading (`Classes`,
//! `Methods`, `Class variables`).

use crate::entities::{Class, Function, Module, ReturnType};

/// Borrowed view over any documented entity
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Module(&'a Module),
    Class(&'a Class),
    Function(&'a Function),
}

impl<'a> Entity<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Entity::Module(m) => &m.name,
            Entity::Class(c) => &c.name,
            Entity::Function(f) => &f.name,
        }
    }
}

impl<'a> From<&'a Module> for Entity<'a> {
    fn from(module: &'a Module) -> Self {
        Entity::Module(module)
    }
}

impl<'a> From<&'a Class> for Entity<'a> {
    fn from(class: &'a Class) -> Self {
        Entity::Class(class)
    }
}

impl<'a> From<&'a Function> for Entity<'a> {
    fn from(function: &'a Function) -> Self {
        Entity::Function(function)
    }
}

/// Output notation used by [`render_fragment`].
///
/// Methods taking `raw` escape their input; methods taking `content` receive
/// text that is already marked up.
pub trait Markup {
    /// Inline code span
    fn code(&self, raw: &str) -> String;

    /// Emphasized plain text
    fn emphasis(&self, raw: &str) -> String;

    /// Heading at `depth` (1 = top level)
    fn heading(&self, depth: usize, content: &str) -> String;

    /// Free-text block, used for docstrings
    fn block(&self, raw: &str) -> String;

    /// Labelled single-line field
    fn field(&self, label: &str, content: &str) -> String;

    /// Bulleted list
    fn list(&self, items: &[String]) -> String;
}

/// GitHub-flavored markdown notation
#[derive(Debug, Clone, Copy, Default)]
pub struct Markdown;

impl Markup for Markdown {
    fn code(&self, raw: &str) -> String {
        if raw.contains('`') {
            format!("`` {} ``", raw)
        } else {
            format!("`{}`", raw)
        }
    }

    fn emphasis(&self, raw: &str) -> String {
        format!("*{}*", raw)
    }

    fn heading(&self, depth: usize, content: &str) -> String {
        format!("{} {}\n\n", "#".repeat(depth.max(1)), content)
    }

    fn block(&self, raw: &str) -> String {
        format!("{}\n\n", raw)
    }

    fn field(&self, label: &str, content: &str) -> String {
        format!("**{}**: {}\n\n", label, content)
    }

    fn list(&self, items: &[String]) -> String {
        let mut out = String::new();
        for item in items {
            out.push_str("- ");
            out.push_str(item);
            out.push('\n');
        }
        out.push('\n');
        out
    }
}

/// Render one entity and, recursively, its children.
///
/// Pure function of the entity and `depth`: missing docstrings emit nothing,
/// children appear in declaration order.
pub fn render_fragment(entity: Entity<'_>, depth: usize, markup: &dyn Markup) -> String {
    match entity {
        Entity::Module(module) => module_fragment(module, depth, markup),
        Entity::Class(class) => class_fragment(class, depth, markup),
        Entity::Function(function) => function_fragment(function, depth, markup),
    }
}

fn module_fragment(module: &Module, depth: usize, markup: &dyn Markup) -> String {
    let mut out = markup.heading(depth, &format!("Module {}", markup.code(&module.name)));

    if let Some(ref doc) = module.docstring {
        out.push_str(&markup.block(doc));
    }

    if !module.classes.is_empty() {
        out.push_str(&markup.heading(depth + 1, "Classes"));
        for class in &module.classes {
            out.push_str(&render_fragment(Entity::Class(class), depth + 2, markup));
        }
    }

    out
}

fn class_fragment(class: &Class, depth: usize, markup: &dyn Markup) -> String {
    let mut out = markup.heading(depth, &format!("Class {}", markup.code(&class.name)));

    if !class.decorators.is_empty() {
        out.push_str(&markup.field("Decorators", &code_list(&class.decorators, markup)));
    }

    if !class.bases.is_empty() {
        let bases = format!("({})", class.bases.join(", "));
        out.push_str(&markup.field("Bases", &markup.code(&bases)));
    }

    if let Some(ref doc) = class.docstring {
        out.push_str(&markup.block(doc));
    }

    if !class.class_variables.is_empty() {
        out.push_str(&markup.heading(depth + 1, "Class variables"));
        let items: Vec<String> = class
            .class_variables
            .iter()
            .map(|v| markup.code(&v.to_string()))
            .collect();
        out.push_str(&markup.list(&items));
    }

    if !class.methods.is_empty() {
        out.push_str(&markup.heading(depth + 1, "Methods"));
        for method in &class.methods {
            out.push_str(&render_fragment(Entity::Function(method), depth + 2, markup));
        }
    }

    out
}

fn function_fragment(function: &Function, depth: usize, markup: &dyn Markup) -> String {
    let kind = if function.is_async {
        "Async function"
    } else {
        "Function"
    };
    let mut out = markup.heading(depth, &format!("{}: {}", kind, markup.code(&function.name)));

    if !function.decorators.is_empty() {
        out.push_str(&markup.field("Decorators", &code_list(&function.decorators, markup)));
    }

    out.push_str(&markup.field("Arguments", &markup.code(&function.argument_list())));

    if let Some(ref doc) = function.docstring {
        out.push_str(&markup.block(doc));
    }

    let returns = match function.returns {
        ReturnType::Unannotated => markup.emphasis(ReturnType::UNKNOWN),
        ref annotated => markup.code(annotated.display_text()),
    };
    out.push_str(&markup.field("Returns", &returns));

    out
}

fn code_list(items: &[String], markup: &dyn Markup) -> String {
    items
        .iter()
        .map(|item| markup.code(item))
        .collect::<Vec<_>>()
        .join(", ")
}
