//! Renderer module: trait-based profile dispatch.
//!
//! Rendering always sees the whole module collection. Addresses are planned
//! for every document before any page is rendered, so each page's navigation
//! lists exactly the documents that will be written.

pub mod html;
pub mod json;
pub mod markdown;
pub mod site;

use crate::error::{DocError, Result};
use documentate_model::{Class, Module};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::HashMap;
use tracing::warn;

/// Owner label of the index address in collision reports
const INDEX_OWNER: &str = "the index document";

/// Bytes escaped in a link path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// One output document, addressed relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// `/` separated path relative to the output directory
    pub address: String,
    pub content: String,
}

/// A named link target in navigation lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub name: String,
    pub address: String,
}

/// Everything a page needs to build its links
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// Address of the page being rendered
    pub address: &'a str,

    /// Address of the index document
    pub index: &'a str,

    /// Every module that gets a document, in collection order
    pub modules: &'a [NavEntry],

    /// Class pages of the current module (multi-page profiles)
    pub classes: &'a [NavEntry],

    /// Module document of a class page
    pub parent: Option<&'a NavEntry>,
}

impl PageContext<'_> {
    /// Relative link from this page to `target`
    pub fn link(&self, target: &str) -> String {
        relative_link(self.address, target)
    }
}

/// Trait for rendering a module collection into one output profile.
pub trait Renderer: Send + Sync {
    /// Profile name
    fn name(&self) -> &str;

    /// Address of the run's entry point
    fn index_address(&self) -> String;

    /// Address of a module's document
    fn module_address(&self, module: &Module) -> String;

    /// Address of a class's own page; `None` when the profile has none
    fn class_address(&self, _module: &Module, _class: &Class) -> Option<String> {
        None
    }

    fn render_index(&self, page: &PageContext<'_>) -> Result<String>;

    fn render_module(&self, module: &Module, page: &PageContext<'_>) -> Result<String>;

    fn render_class(
        &self,
        _module: &Module,
        class: &Class,
        _page: &PageContext<'_>,
    ) -> Result<String> {
        Err(DocError::InvalidConfig(format!(
            "profile {} has no page for class {}",
            self.name(),
            class.name
        )))
    }
}

/// Create a renderer for the given profile name.
pub fn create_renderer(template: &str) -> Result<Box<dyn Renderer>> {
    match template {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "html" => Ok(Box::new(html::HtmlRenderer)),
        "site" => Ok(Box::new(site::SiteRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(DocError::UnknownTemplate(template.to_string())),
    }
}

/// Relative link between two document addresses.
///
/// Each path segment is percent-encoded, so the link is a valid URL
/// reference whatever the module and class names hold.
///
/// ```
/// use documentate::render::relative_link;
///
/// assert_eq!(relative_link("index.html", "geometry/index.html"), "geometry/index.html");
/// assert_eq!(relative_link("geometry/classes/Shape.html", "index.html"), "../../index.html");
/// assert_eq!(relative_link("index.md", "my mod.md"), "my%20mod.md");
/// ```
pub fn relative_link(from: &str, to: &str) -> String {
    let mut from_dirs: Vec<&str> = from.split('/').collect();
    from_dirs.pop();
    let to_parts: Vec<&str> = to.split('/').collect();
    let to_dirs = &to_parts[..to_parts.len() - 1];

    let common = from_dirs
        .iter()
        .zip(to_dirs)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts = vec!["..".to_string(); from_dirs.len() - common];
    parts.extend(
        to_parts[common..]
            .iter()
            .map(|part| utf8_percent_encode(part, SEGMENT).to_string()),
    );
    parts.join("/")
}

/// Whether every segment of `address` names a plain entry below the output
/// directory
fn is_contained(address: &str) -> bool {
    address.split('/').all(|part| {
        !matches!(part, "" | "." | "..") && !part.contains('\\')
    })
}

struct PlannedModule<'a> {
    module: &'a Module,
    entry: NavEntry,
    class_pages: Vec<(&'a Class, NavEntry)>,
}

/// Address plan for one run
struct Plan<'a> {
    index: String,
    modules: Vec<PlannedModule<'a>>,
    collisions: Vec<DocError>,
}

/// Case-insensitive address registry.
///
/// Addresses that would resolve outside their own place in the output
/// directory are refused.
#[derive(Default)]
struct AddressBook {
    owners: HashMap<String, String>,
}

impl AddressBook {
    /// Claim `address` for `owner`, or report who already holds it
    fn claim(&mut self, address: &str, owner: &str) -> std::result::Result<(), DocError> {
        if !is_contained(address) {
            return Err(DocError::InvalidAddress {
                address: address.to_string(),
                owner: owner.to_string(),
            });
        }
        let key = address.to_lowercase();
        if let Some(first) = self.owners.get(&key) {
            return Err(DocError::NamingCollision {
                address: address.to_string(),
                first: first.clone(),
                second: owner.to_string(),
            });
        }
        self.owners.insert(key, owner.to_string());
        Ok(())
    }
}

fn plan<'a>(renderer: &dyn Renderer, modules: &'a [Module]) -> Plan<'a> {
    let mut book = AddressBook::default();
    let index = renderer.index_address();
    let mut planned = Vec::with_capacity(modules.len());
    let mut collisions = Vec::new();

    // The index always gets its address
    let _ = book.claim(&index, INDEX_OWNER);

    for module in modules {
        let address = renderer.module_address(module);
        if let Err(e) = book.claim(&address, &module.path) {
            warn!(error = %e, "Module not rendered");
            collisions.push(e);
            continue;
        }

        let mut class_pages = Vec::new();
        for class in &module.classes {
            let Some(class_address) = renderer.class_address(module, class) else {
                continue;
            };
            let owner = format!("{}::{}", module.path, class.name);
            match book.claim(&class_address, &owner) {
                Ok(()) => class_pages.push((
                    class,
                    NavEntry {
                        name: class.name.clone(),
                        address: class_address,
                    },
                )),
                Err(e) => {
                    warn!(error = %e, "Class page not rendered");
                    collisions.push(e);
                }
            }
        }

        planned.push(PlannedModule {
            module,
            entry: NavEntry {
                name: module.name.clone(),
                address,
            },
            class_pages,
        });
    }

    Plan {
        index,
        modules: planned,
        collisions,
    }
}

/// Documents rendered for one run plus the documents that could not be
#[derive(Debug, Default)]
pub struct RenderOutput {
    /// Index first, then each module followed by its class pages
    pub documents: Vec<Document>,

    /// Number of modules that got a document
    pub modules_rendered: usize,

    pub errors: Vec<DocError>,
}

/// Render the whole module collection.
///
/// Colliding addresses and per-document render failures are collected in
/// [`RenderOutput::errors`]; every other document is still produced.
pub fn render_all(renderer: &dyn Renderer, modules: &[Module]) -> RenderOutput {
    let plan = plan(renderer, modules);
    let nav: Vec<NavEntry> = plan.modules.iter().map(|m| m.entry.clone()).collect();
    let mut output = RenderOutput {
        errors: plan.collisions,
        ..Default::default()
    };

    let index_page = PageContext {
        address: &plan.index,
        index: &plan.index,
        modules: &nav,
        classes: &[],
        parent: None,
    };
    push_document(&mut output, &plan.index, renderer.render_index(&index_page));

    for planned in &plan.modules {
        let classes: Vec<NavEntry> = planned.class_pages.iter().map(|(_, e)| e.clone()).collect();
        let module_page = PageContext {
            address: &planned.entry.address,
            index: &plan.index,
            modules: &nav,
            classes: &classes,
            parent: None,
        };
        push_document(
            &mut output,
            &planned.entry.address,
            renderer.render_module(planned.module, &module_page),
        );
        output.modules_rendered += 1;

        for (class, entry) in &planned.class_pages {
            let class_page = PageContext {
                address: &entry.address,
                index: &plan.index,
                modules: &nav,
                classes: &classes,
                parent: Some(&planned.entry),
            };
            push_document(
                &mut output,
                &entry.address,
                renderer.render_class(planned.module, class, &class_page),
            );
        }
    }

    output
}

fn push_document(output: &mut RenderOutput, address: &str, rendered: Result<String>) {
    match rendered {
        Ok(content) => output.documents.push(Document {
            address: address.to_string(),
            content,
        }),
        Err(e) => {
            warn!(address, error = %e, "Document not rendered");
            output.errors.push(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use documentate_model::{Class, Module};

    fn module(name: &str, classes: &[&str]) -> Module {
        Module::new(name, format!("src/{name}.py"))
            .with_classes(classes.iter().map(|c| Class::new(*c, 1)).collect())
    }

    #[test]
    fn test_create_renderer() {
        assert_eq!(create_renderer("markdown").unwrap().name(), "markdown");
        assert_eq!(create_renderer("md").unwrap().name(), "markdown");
        assert_eq!(create_renderer("html").unwrap().name(), "html");
        assert_eq!(create_renderer("site").unwrap().name(), "site");
        assert_eq!(create_renderer("json").unwrap().name(), "json");
        assert!(matches!(
            create_renderer("pdf"),
            Err(DocError::UnknownTemplate(name)) if name == "pdf"
        ));
    }

    #[test]
    fn test_relative_link() {
        assert_eq!(relative_link("a.html", "b.html"), "b.html");
        assert_eq!(relative_link("a.html", "a.html"), "a.html");
        assert_eq!(relative_link("geo/index.html", "index.html"), "../index.html");
        assert_eq!(relative_link("geo/index.html", "geo/classes/A.html"), "classes/A.html");
        assert_eq!(relative_link("geo/classes/A.html", "geo/index.html"), "../index.html");
        assert_eq!(relative_link("geo/classes/A.html", "io/index.html"), "../../io/index.html");
    }

    #[test]
    fn test_relative_link_encodes_segments() {
        assert_eq!(relative_link("index.html", "a#b.html"), "a%23b.html");
        assert_eq!(relative_link("index.md", "my mod.md"), "my%20mod.md");
        assert_eq!(relative_link("index.md", "f(x).md"), "f%28x%29.md");
        assert_eq!(
            relative_link("a b/classes/C.html", "a b/index.html"),
            "../index.html"
        );
        assert_eq!(relative_link("index.html", "caf\u{e9}.html"), "caf%C3%A9.html");
    }

    #[test]
    fn test_is_contained() {
        assert!(is_contained("index.html"));
        assert!(is_contained("..html"));
        assert!(is_contained("geo/classes/A.html"));
        assert!(!is_contained("./index.html"));
        assert!(!is_contained("../index.html"));
        assert!(!is_contained("/index.html"));
        assert!(!is_contained("geo//index.html"));
        assert!(!is_contained("a\\b.html"));
    }

    #[test]
    fn test_plan_refuses_dot_segments() {
        let renderer = site::SiteRenderer;
        let modules = vec![
            module(".", &["Dot"]),
            module("..", &["Escape"]),
            module("real", &["Kept"]),
        ];
        let plan = plan(&renderer, &modules);

        let names: Vec<&str> = plan.modules.iter().map(|m| m.entry.name.as_str()).collect();
        assert_eq!(names, vec!["real"]);
        assert_eq!(plan.modules[0].class_pages.len(), 1);

        let refused: Vec<&str> = plan
            .collisions
            .iter()
            .map(|e| match e {
                DocError::InvalidAddress { address, .. } => address.as_str(),
                other => panic!("expected invalid address, got {other:?}"),
            })
            .collect();
        assert_eq!(refused, vec!["./index.html", "../index.html"]);
    }

    #[test]
    fn test_plan_reserves_index_first() {
        let renderer = html::HtmlRenderer;
        let modules = vec![module("index", &[]), module("shapes", &[])];
        let plan = plan(&renderer, &modules);

        assert_eq!(plan.index, "index.html");
        let names: Vec<&str> = plan.modules.iter().map(|m| m.entry.name.as_str()).collect();
        assert_eq!(names, vec!["shapes"]);
        match &plan.collisions[..] {
            [DocError::NamingCollision { address, first, second }] => {
                assert_eq!(address, "index.html");
                assert_eq!(first, INDEX_OWNER);
                assert_eq!(second, "src/index.py");
            }
            other => panic!("expected one collision, got {other:?}"),
        }
    }

    #[test]
    fn test_plan_collision_is_case_insensitive() {
        let renderer = markdown::MarkdownRenderer;
        let modules = vec![module("Shapes", &[]), module("shapes", &[])];
        let plan = plan(&renderer, &modules);
        assert_eq!(plan.modules.len(), 1);
        assert_eq!(plan.modules[0].entry.address, "Shapes.md");
        assert_eq!(plan.collisions.len(), 1);
    }

    #[test]
    fn test_plan_class_pages() {
        let renderer = site::SiteRenderer;
        let modules = vec![module("geo", &["Point", "point", "Line"])];
        let plan = plan(&renderer, &modules);

        let pages: Vec<&str> = plan.modules[0]
            .class_pages
            .iter()
            .map(|(_, e)| e.address.as_str())
            .collect();
        assert_eq!(pages, vec!["geo/classes/Point.html", "geo/classes/Line.html"]);
        assert_eq!(plan.collisions.len(), 1);
    }

    #[test]
    fn test_render_all_excludes_colliding_module_from_navigation() {
        let renderer = markdown::MarkdownRenderer;
        let modules = vec![module("a", &[]), module("A", &[]), module("b", &[])];
        let output = render_all(&renderer, &modules);

        let addresses: Vec<&str> = output.documents.iter().map(|d| d.address.as_str()).collect();
        assert_eq!(addresses, vec!["index.md", "a.md", "b.md"]);
        assert_eq!(output.modules_rendered, 2);
        assert_eq!(output.errors.len(), 1);

        for doc in &output.documents {
            assert!(!doc.content.contains("[`A`]"));
        }
    }

    #[test]
    fn test_render_all_is_deterministic() {
        let renderer = site::SiteRenderer;
        let modules = vec![module("geo", &["Point"]), module("io", &["Reader"])];
        let first = render_all(&renderer, &modules);
        let second = render_all(&renderer, &modules);
        assert_eq!(first.documents, second.documents);
        assert_eq!(first.documents.len(), 5);
    }
}
