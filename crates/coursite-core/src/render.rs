//! Render a tag table as nested HTML spans.
//!
//! Spans from different rules must be disjoint or properly nested. Crossing
//! spans produce mismatched markup; the renderer cannot detect that.

use crate::segment::RuleSet;
use crate::tokenizer::{TagTable, tokenize};

/// Append the HTML-escaped form of `ch` to `out`.
///
/// Only `<`, `>`, `&` and `\` are escaped.
pub fn escape_html(ch: char, out: &mut String) {
    match ch {
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '&' => out.push_str("&amp;"),
        '\\' => out.push_str("&bsol;"),
        _ => out.push(ch),
    }
}

/// Escape a whole string with [`escape_html`].
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        escape_html(ch, &mut out);
    }
    out
}

/// Render `text` with `tags`, escaping characters with [`escape_html`].
pub fn render(text: &str, tags: &TagTable) -> String {
    render_with(text, tags, escape_html)
}

/// Render `text` with `tags`, escaping characters with `escape`.
pub fn render_with(text: &str, tags: &TagTable, escape: impl Fn(char, &mut String)) -> String {
    debug_assert_eq!(text.chars().count(), tags.len());

    let mut html = String::with_capacity(text.len() * 2);
    for (ch, entry) in text.chars().zip(tags.entries()) {
        for segment in &entry.starts {
            html.push_str("<span class=\"");
            html.push_str(segment.class);
            html.push_str("\">");
        }

        escape(ch, &mut html);

        for _ in 0..entry.ends {
            html.push_str("</span>");
        }
    }
    html
}

/// Tokenize and render in one step.
pub fn highlight(text: &str, rules: &RuleSet) -> String {
    render(text, &tokenize(text, rules))
}

/// Remove every tag from rendered HTML and decode the entities
/// [`escape_html`] produces.
pub fn strip_markup(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }

    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&bsol;", "\\")
        .replace("&amp;", "&")
}
