//! C/C++ rule set.

use std::sync::LazyLock;

use eyre::Result;

use crate::segment::{Category, RuleSet, WordCase};

/// File extensions treated as C/C++ sources.
pub const EXTENSIONS: &[&str] = &["c", "h", "cc", "cpp", "cxx", "hh", "hpp", "hxx"];

/// Reserved words of C and C++, matched case-sensitively.
pub const KEYWORDS: &[&str] = &[
    "alignas",
    "alignof",
    "and",
    "and_eq",
    "asm",
    "atomic_cancel",
    "atomic_commit",
    "atomic_noexcept",
    "auto",
    "bitand",
    "bitor",
    "bool",
    "break",
    "case",
    "catch",
    "char",
    "char16_t",
    "char32_t",
    "class",
    "compl",
    "concept",
    "const",
    "constexpr",
    "const_cast",
    "continue",
    "decltype",
    "default",
    "delete",
    "do",
    "double",
    "dynamic_cast",
    "else",
    "enum",
    "explicit",
    "export",
    "extern",
    "false",
    "float",
    "for",
    "friend",
    "goto",
    "if",
    "inline",
    "int",
    "import",
    "long",
    "module",
    "mutable",
    "namespace",
    "new",
    "noexcept",
    "not",
    "not_eq",
    "nullptr",
    "operator",
    "or",
    "or_eq",
    "private",
    "protected",
    "public",
    "register",
    "reinterpret_cast",
    "requires",
    "return",
    "short",
    "signed",
    "sizeof",
    "static",
    "static_assert",
    "static_cast",
    "struct",
    "switch",
    "synchronized",
    "template",
    "this",
    "thread_local",
    "throw",
    "true",
    "try",
    "typedef",
    "typeid",
    "typename",
    "union",
    "unsigned",
    "using",
    "virtual",
    "void",
    "volatile",
    "wchar_t",
    "while",
    "xor",
    "xor_eq",
    "override",
    "final",
    "transaction_safe",
    "transaction_safe_dynamic",
];

static RULES: LazyLock<RuleSet> =
    LazyLock::new(|| rule_set().expect("built-in C/C++ rules are valid"));

/// Shared C/C++ rule set
pub fn rules() -> &'static RuleSet {
    &RULES
}

/// Build the C/C++ rule set.
///
/// Comments come first so nothing inside them is highlighted, then
/// preprocessor lines, then literals, and keywords last. Char literals
/// precede strings so `'"'` does not open a string.
pub fn rule_set() -> Result<RuleSet> {
    RuleSet::new()
        .pattern(Category::LineComment, r"(?m)//.*$")?
        .pattern(Category::BlockComment, r"(?s)/\*.*?\*/")?
        .pattern(Category::Preprocessor, r"(?m)^[ \t]*#.*$")?
        .pattern(Category::Char, r"'(\\.|[^'\\\n])*'")?
        .pattern(Category::String, r#""(\\.|[^"\\\n])*""#)?
        .pattern(Category::Number, r"\b[-+]?\d+(\.\d+[uUlLfF]?)?\b")?
        .words(Category::Keyword, KEYWORDS, WordCase::Sensitive)
}

/// Check whether `ext` names a C/C++ source
pub fn is_cpp_extension(ext: &str) -> bool {
    EXTENSIONS.contains(&ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::highlight;
    use crate::tokenizer::tokenize;

    #[test]
    fn test_rule_order() {
        let categories: Vec<Category> = rules().rules().iter().map(|r| r.category()).collect();
        assert_eq!(
            categories,
            vec![
                Category::LineComment,
                Category::BlockComment,
                Category::Preprocessor,
                Category::Char,
                Category::String,
                Category::Number,
                Category::Keyword,
            ]
        );
    }

    #[test]
    fn test_quote_char_before_string() {
        let html = highlight(r#"if (c == '"') puts("x");"#, rules());
        assert_eq!(
            html,
            r#"<span class="keyword">if</span> (c == <span class="data">'"'</span>) puts(<span class="data">"x"</span>);"#
        );
    }

    #[test]
    fn test_include_line() {
        assert_eq!(
            highlight("#include <stdio.h>", rules()),
            r#"<span class="preprocessor">#include &lt;stdio.h&gt;</span>"#
        );
    }

    #[test]
    fn test_keyword_in_string_not_highlighted() {
        let html = highlight(r#"return "return";"#, rules());
        assert_eq!(
            html,
            r#"<span class="keyword">return</span> <span class="data">"return"</span>;"#
        );
    }

    #[test]
    fn test_escaped_quote_inside_string() {
        let text = r#"puts("say \"int\""); int x;"#;
        let tags = tokenize(text, rules());
        assert_eq!(tags.spans(Category::String), vec![5..18]);
        assert_eq!(tags.spans(Category::Keyword), vec![21..24]);
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            highlight("x = 1; // if", rules()),
            r#"x = <span class="data">1</span>; <span class="comment">// if</span>"#
        );
        assert_eq!(
            highlight("/* int */ int", rules()),
            r#"<span class="comment">/* int */</span> <span class="keyword">int</span>"#
        );
    }

    #[test]
    fn test_numbers_and_chars() {
        let tags = tokenize("double d = 3.14; char c = 'a';", rules());
        assert_eq!(tags.spans(Category::Number), vec![11..15]);
        assert_eq!(tags.spans(Category::Char), vec![26..29]);
        assert_eq!(tags.spans(Category::Keyword), vec![0..6, 17..21]);
    }

    #[test]
    fn test_identifiers_containing_keywords() {
        let tags = tokenize("int integer = format;", rules());
        assert_eq!(tags.spans(Category::Keyword), vec![0..3]);
    }

    #[test]
    fn test_extensions() {
        assert!(is_cpp_extension("cpp"));
        assert!(is_cpp_extension("h"));
        assert!(!is_cpp_extension("md"));
    }
}
