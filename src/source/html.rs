//! Readable-text extraction for fetched web pages.
//!
//! The document is parsed with html5ever (through `scraper`), narrowed to its
//! main content region, and flattened to text with non-content subtrees left
//! out. Entities and stray `<`/`&` in prose are handled by the parser.

use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose entire subtree is chrome or code, never prose.
const SKIPPED_ELEMENTS: &[&str] = &[
    "script", "style", "noscript", "nav", "header", "footer", "aside", "form", "svg", "head",
    "template", "iframe", "button", "select",
];

/// Elements that separate words when flattened.
const BLOCK_ELEMENTS: &[&str] = &[
    "p", "div", "br", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "tr", "td", "th",
    "table", "blockquote", "section", "article", "main", "pre", "hr", "figcaption", "figure", "dd",
    "dt", "dl", "body",
];

/// Plain text of the page's main content, whitespace-normalised.
pub fn extract_readable_text(document: &str) -> String {
    let html = Html::parse_document(document);
    let mut out = String::with_capacity(document.len() / 2);
    collect_text(content_region(&html), &mut out);
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Prefer `<article>`, then `<main>`, then `<body>`, else the whole document.
fn content_region(html: &Html) -> ElementRef<'_> {
    ["article", "main", "body"]
        .iter()
        .filter_map(|name| Selector::parse(name).ok())
        .find_map(|selector| html.select(&selector).next())
        .unwrap_or_else(|| html.root_element())
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let name = el.name();
                if SKIPPED_ELEMENTS.contains(&name) {
                    out.push(' ');
                    continue;
                }
                let block = BLOCK_ELEMENTS.contains(&name);
                if block {
                    out.push(' ');
                }
                if let Some(inner) = ElementRef::wrap(child) {
                    collect_text(inner, out);
                }
                if block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}
