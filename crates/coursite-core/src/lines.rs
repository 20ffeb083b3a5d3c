//! Line classifier for C/C++ listings.
//!
//! A line may end with a control marker that assigns it to one variant of
//! an exercise:
//!
//! ```text
//! int answer = 0;   //#Z sum
//! int answer = a+b; //#R sum
//! ```
//!
//! `//#Z <group>` keeps the line in the assignment only, `//#R <group>` in
//! the solution only. Lines without a marker belong to both. The marker is
//! removed from the line content.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Trailing control marker: optional blanks, `//#<sentinel>`, blanks, group id.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([ \t]*//#(\w+)[ \t]+(\w+)[ \t]*)\r?$").expect("marker pattern is valid")
});

/// Which variant of an exercise a line belongs to exclusively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Present in the assignment only
    Assignment,
    /// Present in the solution only
    Solution,
}

impl Variant {
    /// Parse the sentinel that follows `//#`
    pub fn from_sentinel(sentinel: &str) -> Option<Self> {
        match sentinel {
            "Z" => Some(Variant::Assignment),
            "R" => Some(Variant::Solution),
            _ => None,
        }
    }

    pub fn sentinel(&self) -> &'static str {
        match self {
            Variant::Assignment => "Z",
            Variant::Solution => "R",
        }
    }

    /// CSS class prefix used for this variant's spans
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Assignment => "assignment",
            Variant::Solution => "solution",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exclusive ownership of a line by one variant of one exercise group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ownership {
    pub variant: Variant,
    pub group: String,
}

/// One classified physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    content: String,
    ownership: Option<Ownership>,
    group_start: bool,
}

impl Line {
    /// Line text with any control marker removed
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn ownership(&self) -> Option<&Ownership> {
        self.ownership.as_ref()
    }

    /// `None` when the line is common to both variants
    pub fn variant(&self) -> Option<Variant> {
        self.ownership.as_ref().map(|o| o.variant)
    }

    pub fn group(&self) -> Option<&str> {
        self.ownership.as_ref().map(|o| o.group.as_str())
    }

    /// True for the first marked line of its group
    pub fn is_group_start(&self) -> bool {
        self.group_start
    }

    /// Whether the line appears in the assignment variant
    pub fn in_assignment(&self) -> bool {
        self.variant() != Some(Variant::Solution)
    }

    /// Whether the line appears in the solution variant
    pub fn in_solution(&self) -> bool {
        self.variant() != Some(Variant::Assignment)
    }
}

/// Split `source` into lines and classify each one.
///
/// Lines are split on `\n` only, so joining the contents of an unmarked
/// source with `\n` reproduces it exactly. An unknown sentinel leaves the
/// line untouched and common to both variants.
pub fn classify(source: &str) -> Vec<Line> {
    let mut seen_groups: HashSet<String> = HashSet::new();

    source
        .split('\n')
        .map(|text| {
            let (content, ownership) = parse_marker(text);
            let group_start = match &ownership {
                Some(o) => seen_groups.insert(o.group.clone()),
                None => false,
            };
            Line {
                content,
                ownership,
                group_start,
            }
        })
        .collect()
}

fn parse_marker(text: &str) -> (String, Option<Ownership>) {
    let Some(caps) = MARKER.captures(text) else {
        return (text.to_string(), None);
    };

    let (Some(marker), Some(variant)) = (caps.get(1), Variant::from_sentinel(&caps[2])) else {
        return (text.to_string(), None);
    };

    let mut content = String::with_capacity(text.len());
    content.push_str(&text[..marker.start()]);
    content.push_str(&text[marker.end()..]);

    (
        content,
        Some(Ownership {
            variant,
            group: caps[3].to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmarked_lines() {
        let lines = classify("int a;\nint b;");
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.variant().is_none()));
        assert!(lines.iter().all(|l| !l.is_group_start()));
        assert_eq!(lines[1].content(), "int b;");
    }

    #[test]
    fn test_markers_are_stripped() {
        let lines = classify("A\nx=1; //#Z g1\ny=2;\t//#R g1\nB");

        assert_eq!(lines[1].content(), "x=1;");
        assert_eq!(lines[1].variant(), Some(Variant::Assignment));
        assert_eq!(lines[1].group(), Some("g1"));
        assert!(lines[1].is_group_start());

        assert_eq!(lines[2].content(), "y=2;");
        assert_eq!(lines[2].variant(), Some(Variant::Solution));
        assert!(!lines[2].is_group_start());

        assert_eq!(lines[3].variant(), None);
    }

    #[test]
    fn test_group_start_once_per_group() {
        let source = "a //#Z one\nb //#R two\nc //#R one\nd //#Z two\ne //#Z three";
        let starts: Vec<bool> = classify(source).iter().map(|l| l.is_group_start()).collect();
        assert_eq!(starts, vec![true, true, false, false, true]);
    }

    #[test]
    fn test_sentinel_round_trip() {
        for variant in [Variant::Assignment, Variant::Solution] {
            assert_eq!(Variant::from_sentinel(variant.sentinel()), Some(variant));
        }
        assert_eq!(Variant::from_sentinel("X"), None);
    }

    #[test]
    fn test_unknown_sentinel_is_common_line() {
        let lines = classify("x = 0; //#X g1");
        assert_eq!(lines[0].variant(), None);
        assert_eq!(lines[0].group(), None);
        assert_eq!(lines[0].content(), "x = 0; //#X g1");
        assert!(!lines[0].is_group_start());
    }

    #[test]
    fn test_marker_must_be_trailing() {
        let lines = classify("//#Z g1 then more code");
        assert_eq!(lines[0].variant(), None);
        assert_eq!(lines[0].content(), "//#Z g1 then more code");
    }

    #[test]
    fn test_marker_without_group_is_ignored() {
        let lines = classify("x = 0; //#Z");
        assert_eq!(lines[0].variant(), None);
        assert_eq!(lines[0].content(), "x = 0; //#Z");
    }

    #[test]
    fn test_crlf_is_preserved() {
        let lines = classify("int x; //#R g\r\nint y;\r");
        assert_eq!(lines[0].content(), "int x;\r");
        assert_eq!(lines[0].variant(), Some(Variant::Solution));
        assert_eq!(lines[1].content(), "int y;\r");
    }

    #[test]
    fn test_trailing_newline_yields_empty_last_line() {
        let lines = classify("a\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].content(), "");
    }

    #[test]
    fn test_variant_membership() {
        let lines = classify("a //#Z g\nb //#R g\nc");
        assert!(lines[0].in_assignment() && !lines[0].in_solution());
        assert!(!lines[1].in_assignment() && lines[1].in_solution());
        assert!(lines[2].in_assignment() && lines[2].in_solution());
    }
}
