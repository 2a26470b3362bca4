// src/utils/markup.rs

//! Plain-text rendering of API-supplied HTML.
//!
//! Recipe instructions arrive as HTML fragments. The terminal gets text only:
//! block elements become line breaks, list items get bullets or numbers, and
//! script/style content is dropped.

use scraper::{ElementRef, Html, Node};

/// Elements that start a new line.
const BLOCK_ELEMENTS: &[&str] = &[
    "p", "div", "br", "h1", "h2", "h3", "h4", "h5", "h6", "section", "tr",
];

/// Convert an HTML fragment to plain text lines.
pub fn markup_to_text(markup: &str) -> String {
    let fragment = Html::parse_fragment(markup);
    let mut out = String::new();
    let mut lists = Vec::new();
    walk(fragment.root_element(), &mut lists, &mut out);

    out.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Append the text of `element`'s subtree. `lists` holds one entry per open
/// list: `Some(count)` for `<ol>`, `None` for `<ul>`.
fn walk(element: ElementRef<'_>, lists: &mut Vec<Option<usize>>, out: &mut String) {
    let name = element.value().name();
    match name {
        "script" | "style" => return,
        "ol" | "ul" => {
            lists.push((name == "ol").then_some(0));
            out.push('\n');
        }
        "li" => {
            out.push('\n');
            match lists.last_mut() {
                Some(Some(n)) => {
                    *n += 1;
                    out.push_str(&format!("{n}. "));
                }
                _ => out.push_str("- "),
            }
        }
        name if BLOCK_ELEMENTS.contains(&name) => out.push('\n'),
        _ => {}
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    walk(child, lists, out);
                }
            }
            _ => {}
        }
    }

    if matches!(name, "ol" | "ul") {
        lists.pop();
        out.push('\n');
    }
}
