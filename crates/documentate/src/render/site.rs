//! Site renderer: a folder per module with one page per class.
//!
//! Layout: `<module>/index.html` for the module, `<module>/classes/<Class>.html`
//! for each class and a top-level `index.html`.

use crate::error::Result;
use crate::render::html::{html_escape, index_page, module_nav, page_shell, Html};
use crate::render::{PageContext, Renderer};
use documentate_model::{render_fragment, Class, Entity, Module};

pub struct SiteRenderer;

impl Renderer for SiteRenderer {
    fn name(&self) -> &str {
        "site"
    }

    fn index_address(&self) -> String {
        "index.html".to_string()
    }

    fn module_address(&self, module: &Module) -> String {
        format!("{}/index.html", module.name)
    }

    fn class_address(&self, module: &Module, class: &Class) -> Option<String> {
        Some(format!("{}/classes/{}.html", module.name, class.name))
    }

    fn render_index(&self, page: &PageContext<'_>) -> Result<String> {
        Ok(index_page(page))
    }

    fn render_module(&self, module: &Module, page: &PageContext<'_>) -> Result<String> {
        let mut body = String::new();

        if !page.classes.is_empty() {
            body.push_str("<aside class=\"class-pages\">\n<h2>Class pages</h2>\n<ul>\n");
            for entry in page.classes {
                body.push_str(&format!(
                    "  <li><a href=\"{}\">{}</a></li>\n",
                    html_escape(&page.link(&entry.address)),
                    html_escape(&entry.name)
                ));
            }
            body.push_str("</ul>\n</aside>\n");
        }

        body.push_str(&render_fragment(Entity::Module(module), 1, &Html));
        Ok(page_shell(&module.name, &module_nav(page), &body))
    }

    fn render_class(
        &self,
        module: &Module,
        class: &Class,
        page: &PageContext<'_>,
    ) -> Result<String> {
        let mut body = String::new();

        if let Some(parent) = page.parent {
            body.push_str(&format!(
                "<p>Defined in module <a href=\"{}\">{}</a></p>\n",
                html_escape(&page.link(&parent.address)),
                html_escape(&parent.name)
            ));
        }

        body.push_str(&render_fragment(Entity::Class(class), 1, &Html));
        let title = format!("{}.{}", module.name, class.name);
        Ok(page_shell(&title, &module_nav(page), &body))
    }
}
