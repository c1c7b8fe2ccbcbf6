//! Markdown renderer: one GitHub-flavored markdown file per module.

use crate::error::Result;
use crate::render::{PageContext, Renderer};
use documentate_model::{render_fragment, Entity, Markdown, Markup, Module};

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn name(&self) -> &str {
        "markdown"
    }

    fn index_address(&self) -> String {
        "index.md".to_string()
    }

    fn module_address(&self, module: &Module) -> String {
        format!("{}.md", module.name)
    }

    fn render_index(&self, page: &PageContext<'_>) -> Result<String> {
        let mut out = Markdown.heading(1, "Modules");
        out.push_str(&modules_list(page));
        Ok(out)
    }

    fn render_module(&self, module: &Module, page: &PageContext<'_>) -> Result<String> {
        let mut out = format!("[Index]({})\n\n", page.link(page.index));
        out.push_str(&modules_list(page));
        out.push_str("---\n\n");
        out.push_str(&render_fragment(Entity::Module(module), 1, &Markdown));
        Ok(out)
    }
}

fn modules_list(page: &PageContext<'_>) -> String {
    let items: Vec<String> = page
        .modules
        .iter()
        .map(|entry| {
            format!(
                "[{}]({})",
                Markdown.code(&entry.name),
                page.link(&entry.address)
            )
        })
        .collect();
    Markdown.list(&items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NavEntry;
    use documentate_model::{Argument, Class, Function, ReturnType};

    #[test]
    fn test_module_document() {
        let method = Function::new("bar", 4)
            .with_arguments(vec![Argument::new("self"), Argument::new("y").with_type("int")])
            .with_returns(ReturnType::Named("bool".to_string()))
            .with_doc("doc");
        let mut foo = Class::new("Foo", 1).with_bases(vec!["Bar".to_string()]);
        foo.add_method(method);
        let module = Module::new("sample", "sample.py").with_classes(vec![foo]);

        let modules = vec![NavEntry {
            name: "sample".to_string(),
            address: "sample.md".to_string(),
        }];
        let page = PageContext {
            address: "sample.md",
            index: "index.md",
            modules: &modules,
            classes: &[],
            parent: None,
        };
        let text = MarkdownRenderer.render_module(&module, &page).unwrap();

        let expected = "[Index](index.md)\n\n\
- [`sample`](sample.md)\n\n\
---\n\n\
# Module `sample`\n\n\
## Classes\n\n\
### Class `Foo`\n\n\
**Bases**: `(Bar)`\n\n\
#### Methods\n\n\
##### Function: `bar`\n\n\
**Arguments**: `(self, y: int)`\n\n\
doc\n\n\
**Returns**: `bool`\n\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_index_document() {
        let modules = vec![
            NavEntry {
                name: "a_b".to_string(),
                address: "a_b.md".to_string(),
            },
            NavEntry {
                name: "c".to_string(),
                address: "c.md".to_string(),
            },
        ];
        let page = PageContext {
            address: "index.md",
            index: "index.md",
            modules: &modules,
            classes: &[],
            parent: None,
        };
        let text = MarkdownRenderer.render_index(&page).unwrap();
        assert_eq!(text, "# Modules\n\n- [`a_b`](a_b.md)\n- [`c`](c.md)\n\n");
    }
}
