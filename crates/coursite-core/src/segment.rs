//! Segment rules: ordered `(category, pattern, class)` records that drive
//! the tokenizer.
//!
//! A [`RuleSet`] is a sequence, not a map. The tokenizer applies rules front
//! to back and every rule masks the text it claims, so moving a rule changes
//! which spans later rules can still see. Reordering a rule set changes
//! output.

use eyre::{Result, WrapErr, bail};
use regex::bytes::{Regex, RegexBuilder};

/// Lexical class assigned to a span of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `// …` or `-- …` up to the end of the line
    LineComment,
    /// `/* … */`
    BlockComment,
    /// `#include`, `#define`, …
    Preprocessor,
    /// Double- or single-quoted string literal
    String,
    /// Numeric literal
    Number,
    /// Character literal
    Char,
    /// Reserved word from a fixed word list
    Keyword,
    /// Literal value from a fixed word list (NULL, TRUE, FALSE)
    Literal,
}

impl Category {
    /// CSS class emitted on spans of this category.
    pub fn css_class(&self) -> &'static str {
        match self {
            Category::LineComment | Category::BlockComment => "comment",
            Category::Preprocessor => "preprocessor",
            Category::String | Category::Number | Category::Char | Category::Literal => "data",
            Category::Keyword => "keyword",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::LineComment => "line-comment",
            Category::BlockComment => "block-comment",
            Category::Preprocessor => "preprocessor",
            Category::String => "string",
            Category::Number => "number",
            Category::Char => "char",
            Category::Keyword => "keyword",
            Category::Literal => "literal",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case handling for word-list rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCase {
    Sensitive,
    Insensitive,
}

/// One entry of a [`RuleSet`].
///
/// A pattern rule carries a single matcher. A word-list rule carries one
/// whole-word matcher per word, applied in list order.
#[derive(Debug, Clone)]
pub struct SegmentRule {
    category: Category,
    class: &'static str,
    matchers: Vec<Regex>,
}

impl SegmentRule {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn class(&self) -> &'static str {
        self.class
    }

    pub fn matchers(&self) -> &[Regex] {
        &self.matchers
    }
}

/// Ordered list of segment rules. Earlier rules claim text first.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<SegmentRule>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule matching `pattern`.
    ///
    /// Patterns are compiled in byte mode with Unicode classes disabled;
    /// use inline flags (`(?m)`, `(?s)`, `(?i)`) to adjust matching. A
    /// pattern that can match an empty span is rejected.
    pub fn pattern(mut self, category: Category, pattern: &str) -> Result<Self> {
        let matcher =
            compile(pattern).wrap_err_with(|| format!("invalid {} rule", category))?;
        self.rules.push(SegmentRule {
            category,
            class: category.css_class(),
            matchers: vec![matcher],
        });
        Ok(self)
    }

    /// Append a word-list rule. Each word matches as a whole word only.
    pub fn words(mut self, category: Category, words: &[&str], case: WordCase) -> Result<Self> {
        let flags = match case {
            WordCase::Sensitive => "",
            WordCase::Insensitive => "(?i)",
        };
        let matchers = words
            .iter()
            .map(|word| {
                compile(&format!(r"{flags}\b{}\b", regex::escape(word)))
                    .wrap_err_with(|| format!("invalid {} word {:?}", category, word))
            })
            .collect::<Result<Vec<_>>>()?;
        self.rules.push(SegmentRule {
            category,
            class: category.css_class(),
            matchers,
        });
        Ok(self)
    }

    pub fn rules(&self) -> &[SegmentRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    let hir = regex_syntax::ParserBuilder::new()
        .unicode(false)
        .utf8(false)
        .build()
        .parse(pattern)?;

    // The masking loop relies on every match consuming at least one byte.
    if hir.properties().minimum_len() == Some(0) {
        bail!("pattern {:?} can match an empty span", pattern);
    }

    Ok(RegexBuilder::new(pattern).unicode(false).build()?)
}
