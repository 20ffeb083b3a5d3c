//! C/C++ listings: copies of the source plus highlighted pages.
//!
//! For `x.cpp` without variant markers:
//!
//! ```text
//! x.cpp                 source, unchanged
//! x.cpp.html            highlighted source
//! ```
//!
//! With markers, and the default `solution` suffix:
//!
//! ```text
//! x.cpp                 assignment
//! x.solution.cpp        solution
//! x.cpp.html            highlighted assignment
//! x.solution.cpp.html   interactive view toggling each exercise group
//! ```

use coursite_core::{Artifacts, Listing};

/// One file produced from a listing, named relative to the source's
/// output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CppPage {
    /// Plain text written as is
    Source { name: String, text: String },
    /// Fragment that still needs the page template
    Html {
        name: String,
        body: String,
        style: String,
    },
}

impl CppPage {
    pub fn name(&self) -> &str {
        match self {
            CppPage::Source { name, .. } | CppPage::Html { name, .. } => name,
        }
    }
}

/// `x.cpp` -> `x.<suffix>.cpp`; a name without extension gets the suffix
/// appended.
pub fn solution_name(file_name: &str, suffix: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}.{suffix}.{ext}"),
        _ => format!("{file_name}.{suffix}"),
    }
}

/// Pages for the listing `file_name` with content `source`
pub fn pages(file_name: &str, source: &str, suffix: &str, cpp_style: &str) -> Vec<CppPage> {
    match Listing::cpp(source).artifacts() {
        Artifacts::Shared { highlighted, .. } => vec![
            CppPage::Source {
                name: file_name.to_string(),
                text: source.to_string(),
            },
            CppPage::Html {
                name: format!("{file_name}.html"),
                body: highlighted,
                style: cpp_style.to_string(),
            },
        ],
        Artifacts::Forked {
            assignment,
            solution,
            highlighted_assignment,
            interactive,
            css,
        } => {
            let solution_file = solution_name(file_name, suffix);
            vec![
                CppPage::Source {
                    name: file_name.to_string(),
                    text: assignment,
                },
                CppPage::Html {
                    name: format!("{file_name}.html"),
                    body: highlighted_assignment,
                    style: cpp_style.to_string(),
                },
                CppPage::Html {
                    name: format!("{solution_file}.html"),
                    body: interactive,
                    style: format!("{cpp_style}\n{css}"),
                },
                CppPage::Source {
                    name: solution_file,
                    text: solution,
                },
            ]
        }
    }
}
