//! Declarative presentation markup.
//!
//! Layers describe what to show; the shell turns [`Markup`] into DOM, a
//! terminal line or anything else.

use serde::Serialize;

/// A small tree of inline and block text nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum Markup {
    Text(String),
    Span(Vec<Markup>),
    Paragraph(Vec<Markup>),
}

impl Markup {
    pub fn text(text: impl Into<String>) -> Self {
        Markup::Text(text.into())
    }

    /// An inline span holding a single text node.
    pub fn span(text: impl Into<String>) -> Self {
        Markup::Span(vec![Markup::text(text)])
    }

    /// A paragraph holding a single text node.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Markup::Paragraph(vec![Markup::text(text)])
    }

    /// Render as escaped HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let (tag, children) = match self {
            Markup::Text(text) => {
                escape_html_into(text, out);
                return;
            }
            Markup::Span(children) => ("span", children),
            Markup::Paragraph(children) => ("p", children),
        };

        out.push('<');
        out.push_str(tag);
        out.push('>');
        for child in children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }

    /// Concatenated text content, without any tags.
    pub fn to_plain_text(&self) -> String {
        match self {
            Markup::Text(text) => text.clone(),
            Markup::Span(children) | Markup::Paragraph(children) => {
                children.iter().map(Markup::to_plain_text).collect()
            }
        }
    }
}

fn escape_html_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
