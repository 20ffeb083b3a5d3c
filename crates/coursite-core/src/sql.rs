//! SQL block highlighter.
//!
//! Renders a single query into a `<pre><code>` block. No line
//! classification applies; the whole snippet is tokenized at once.

use std::sync::LazyLock;

use eyre::Result;

use crate::render::highlight;
use crate::segment::{Category, RuleSet, WordCase};

/// SQL reserved words, matched case-insensitively.
pub const KEYWORDS: &[&str] = &[
    "ADD",
    "ALTER",
    "ALL",
    "AND",
    "ANY",
    "AS",
    "ASC",
    "BACKUP",
    "BETWEEN",
    "BY",
    "CASE",
    "CHECK",
    "COLUMN",
    "CONSTRAINT",
    "CREATE",
    "DATABASE",
    "DEFAULT",
    "DELETE",
    "DESC",
    "DISTINCT",
    "DROP",
    "ELSE",
    "END",
    "EXEC",
    "EXISTS",
    "FOREIGN",
    "FROM",
    "FULL",
    "GROUP",
    "HAVING",
    "IN",
    "INDEX",
    "INNER",
    "INSERT",
    "INTO",
    "IS",
    "JOIN",
    "KEY",
    "LEFT",
    "LIKE",
    "LIMIT",
    "NOT",
    "ON",
    "OR",
    "ORDER",
    "OUTER",
    "PRIMARY",
    "PROCEDURE",
    "REPLACE",
    "RIGHT",
    "ROWNUM",
    "SELECT",
    "SET",
    "TABLE",
    "THEN",
    "TOP",
    "TRUNCATE",
    "UNION",
    "UNIQUE",
    "UNKNOWN",
    "UPDATE",
    "VALUES",
    "VIEW",
    "WHEN",
    "WHERE",
];

/// Literal values, matched case-insensitively.
pub const LITERALS: &[&str] = &["NULL", "TRUE", "FALSE"];

static RULES: LazyLock<RuleSet> =
    LazyLock::new(|| rule_set().expect("built-in SQL rules are valid"));

/// Shared SQL rule set
pub fn rules() -> &'static RuleSet {
    &RULES
}

/// Build the SQL rule set.
pub fn rule_set() -> Result<RuleSet> {
    RuleSet::new()
        .pattern(Category::LineComment, r"(?m)--.*$")?
        .pattern(Category::BlockComment, r"(?s)/\*.*?\*/")?
        .pattern(Category::String, r"'([^']|'')*'")?
        .pattern(Category::Number, r"\b\d+(\.\d+)?\b")?
        .words(Category::Keyword, KEYWORDS, WordCase::Insensitive)?
        .words(Category::Literal, LITERALS, WordCase::Insensitive)
}

/// Render `code` as a highlighted block.
///
/// `block_class` scopes the block for styling (`<pre class="…">`).
pub fn to_html(code: &str, block_class: Option<&str>) -> String {
    let body = highlight(code, rules());
    match block_class {
        Some(class) => format!("<pre class=\"{}\"><code>{}</code></pre>", class, body),
        None => format!("<pre><code>{}</code></pre>", body),
    }
}
