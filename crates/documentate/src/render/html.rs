//! HTML renderer: one standalone HTML page per module.

use crate::error::Result;
use crate::render::{PageContext, Renderer};
use documentate_model::{render_fragment, Entity, Markup, Module};

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn name(&self) -> &str {
        "html"
    }

    fn index_address(&self) -> String {
        "index.html".to_string()
    }

    fn module_address(&self, module: &Module) -> String {
        format!("{}.html", module.name)
    }

    fn render_index(&self, page: &PageContext<'_>) -> Result<String> {
        Ok(index_page(page))
    }

    fn render_module(&self, module: &Module, page: &PageContext<'_>) -> Result<String> {
        let body = render_fragment(Entity::Module(module), 1, &Html);
        Ok(page_shell(&module.name, &module_nav(page), &body))
    }
}

/// HTML notation for document fragments
#[derive(Debug, Clone, Copy, Default)]
pub struct Html;

impl Markup for Html {
    fn code(&self, raw: &str) -> String {
        format!("<code>{}</code>", html_escape(raw))
    }

    fn emphasis(&self, raw: &str) -> String {
        format!("<em>{}</em>", html_escape(raw))
    }

    fn heading(&self, depth: usize, content: &str) -> String {
        // HTML stops at h6; deeper levels keep their depth as an attribute
        if depth > 6 {
            format!("<h6 data-depth=\"{}\">{}</h6>\n", depth, content)
        } else {
            let level = depth.max(1);
            format!("<h{level}>{content}</h{level}>\n")
        }
    }

    fn block(&self, raw: &str) -> String {
        format!("<pre class=\"docstring\">{}</pre>\n", html_escape(raw))
    }

    fn field(&self, label: &str, content: &str) -> String {
        format!("<p><strong>{}</strong>: {}</p>\n", html_escape(label), content)
    }

    fn list(&self, items: &[String]) -> String {
        let mut out = String::from("<ul>\n");
        for item in items {
            out.push_str(&format!("  <li>{}</li>\n", item));
        }
        out.push_str("</ul>\n");
        out
    }
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Complete HTML page around a navigation block and a body
pub(crate) fn page_shell(title: &str, nav: &str, body: &str) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", html_escape(title)));
    out.push_str("<style>\n");
    out.push_str("body { font-family: system-ui, sans-serif; display: flex; gap: 2em; margin: 2em auto; max-width: 64em; padding: 0 1em; }\n");
    out.push_str("nav { min-width: 12em; }\n");
    out.push_str("main { flex: 1; }\n");
    out.push_str("code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }\n");
    out.push_str("pre.docstring { background: #f4f4f4; padding: 1em; border-radius: 5px; white-space: pre-wrap; }\n");
    out.push_str("li.current > a { font-weight: bold; }\n");
    out.push_str("</style>\n");
    out.push_str("</head>\n<body>\n");
    out.push_str(nav);
    out.push_str("<main>\n");
    out.push_str(body);
    out.push_str("</main>\n");
    out.push_str("</body>\n</html>\n");
    out
}

/// Navigation list of every module, marking the page's own module
pub(crate) fn modules_list(page: &PageContext<'_>, current: Option<&str>) -> String {
    let mut out = String::from("<ul>\n");
    for entry in page.modules {
        let class = if current == Some(entry.address.as_str()) {
            " class=\"current\""
        } else {
            ""
        };
        out.push_str(&format!(
            "  <li{}><a href=\"{}\">{}</a></li>\n",
            class,
            html_escape(&page.link(&entry.address)),
            html_escape(&entry.name)
        ));
    }
    out.push_str("</ul>\n");
    out
}

/// Sidebar of a module page
pub(crate) fn module_nav(page: &PageContext<'_>) -> String {
    format!(
        "<nav>\n<p><a href=\"{}\">Index</a></p>\n<h2>Modules</h2>\n{}</nav>\n",
        html_escape(&page.link(page.index)),
        modules_list(page, Some(page.address))
    )
}

pub(crate) fn index_page(page: &PageContext<'_>) -> String {
    let body = format!("<h1>Modules</h1>\n{}", modules_list(page, None));
    page_shell("Index", "", &body)
}
