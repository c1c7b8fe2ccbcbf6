//! JSON renderer: structured output for tooling integration.
//!
//! Serializes the documentation model directly, next to the navigation
//! entries a page would show.

use crate::error::{DocError, Result};
use crate::render::{PageContext, Renderer};
use documentate_model::Module;
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct Link<'a> {
    name: &'a str,
    href: String,
}

#[derive(Serialize)]
struct IndexDocument<'a> {
    modules: Vec<Link<'a>>,
}

#[derive(Serialize)]
struct ModuleDocument<'a> {
    index: String,
    navigation: Vec<Link<'a>>,
    module: &'a Module,
}

fn navigation<'a>(page: &PageContext<'a>) -> Vec<Link<'a>> {
    page.modules
        .iter()
        .map(|entry| Link {
            name: &entry.name,
            href: page.link(&entry.address),
        })
        .collect()
}

fn to_json<T: Serialize>(value: &T, address: &str) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value).map_err(|source| DocError::Serialization {
        address: address.to_string(),
        source,
    })?;
    out.push('\n');
    Ok(out)
}

impl Renderer for JsonRenderer {
    fn name(&self) -> &str {
        "json"
    }

    fn index_address(&self) -> String {
        "index.json".to_string()
    }

    fn module_address(&self, module: &Module) -> String {
        format!("{}.json", module.name)
    }

    fn render_index(&self, page: &PageContext<'_>) -> Result<String> {
        let doc = IndexDocument {
            modules: navigation(page),
        };
        to_json(&doc, page.address)
    }

    fn render_module(&self, module: &Module, page: &PageContext<'_>) -> Result<String> {
        let doc = ModuleDocument {
            index: page.link(page.index),
            navigation: navigation(page),
            module,
        };
        to_json(&doc, page.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NavEntry;
    use documentate_model::{Class, Function};
    use serde_json::Value;

    #[test]
    fn test_module_document_shape() {
        let mut class = Class::new("Reader", 2);
        class.add_method(Function::new("read", 3));
        let module = Module::new("io", "src/io.py").with_classes(vec![class]);
        let modules = vec![NavEntry {
            name: "io".to_string(),
            address: "io.json".to_string(),
        }];
        let page = PageContext {
            address: "io.json",
            index: "index.json",
            modules: &modules,
            classes: &[],
            parent: None,
        };

        let text = JsonRenderer.render_module(&module, &page).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["index"], "index.json");
        assert_eq!(value["navigation"][0]["name"], "io");
        assert_eq!(value["navigation"][0]["href"], "io.json");
        assert_eq!(value["module"]["name"], "io");
        assert_eq!(value["module"]["classes"][0]["name"], "Reader");
        assert_eq!(
            value["module"]["classes"][0]["methods"][0]["returns"]["kind"],
            "unannotated"
        );

        let round_trip: Module = serde_json::from_value(value["module"].clone()).unwrap();
        assert_eq!(round_trip, module);
    }

    #[test]
    fn test_index_document_shape() {
        let modules = vec![NavEntry {
            name: "io".to_string(),
            address: "io.json".to_string(),
        }];
        let page = PageContext {
            address: "index.json",
            index: "index.json",
            modules: &modules,
            classes: &[],
            parent: None,
        };
        let text = JsonRenderer.render_index(&page).unwrap();
        assert!(text.ends_with("}\n"));
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["modules"][0]["href"], "io.json");
    }
}
