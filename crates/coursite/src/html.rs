//! Hand-written HTML pages and their macros.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static LINK_MACRO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#A\((.*?)\)").expect("link macro pattern is valid"));

/// Expand page macros.
///
/// `#A(path)` links to a source file and to its highlighted `.html` view:
/// `<a href="path"> name </a> <a href="path.html"> (html) </a>`.
pub fn expand_macros(input: &str) -> String {
    LINK_MACRO
        .replace_all(input, |caps: &Captures| {
            let path = &caps[1];
            let name = path.rsplit('/').next().unwrap_or(path);
            format!("<a href=\"{path}\"> {name} </a> <a href=\"{path}.html\"> (html) </a>")
        })
        .into_owned()
}
