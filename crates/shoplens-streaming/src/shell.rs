//! Page shell rendered before any chunk arrives.

use shoplens_core::sanitize::html_escape;

/// Head content for the page shell.
#[derive(Debug, Clone, Default)]
pub struct PageHead {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Inline style blocks.
    pub styles: Vec<String>,
}

impl PageHead {
    /// Create head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add an inline CSS block.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    /// Render the head content to HTML.
    ///
    /// The title and meta values may carry user text (e.g. the search
    /// query), so they are escaped here rather than trusting callers.
    pub fn render(&self) -> String {
        let mut html = String::new();
        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        }
        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                html_escape(name),
                html_escape(content)
            ));
            html.push('\n');
        }
        for css in &self.styles {
            html.push_str(&format!("<style>{}</style>\n", css));
        }
        html
    }
}

/// The shell is the HTML sent before the first chunk: doctype, head and the
/// opening body structure, with the closing tags held back until the stream
/// has been fully consumed.
#[derive(Debug, Clone)]
pub struct PageShell {
    /// Head content.
    pub head: PageHead,
    /// HTML before sections (opening body, wrapper divs).
    pub body_start: String,
    /// HTML after sections (closing tags).
    pub body_end: String,
}

impl PageShell {
    /// Create a shell with basic structure.
    pub fn new(head: PageHead) -> Self {
        Self {
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    /// Set custom body start HTML.
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Set custom body end HTML.
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Render the opening part of the shell.
    pub fn render_opening(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);
        html
    }

    /// Render the closing part of the shell.
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }
}
