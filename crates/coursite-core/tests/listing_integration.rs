//! Integration tests for listing classification and rendering

use std::path::Path;

use coursite_core::{Artifacts, Category, Listing, Variant, cpp, strip_markup, tokenize};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(Path::new(FIXTURES_DIR).join(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

fn code_body(html: &str) -> &str {
    html.strip_prefix("<pre><code>")
        .and_then(|s| s.strip_suffix("</code></pre>"))
        .expect("block is wrapped in <pre><code>")
}

#[test]
fn test_exercise_variants() {
    let source = read_fixture("exercise.cpp");
    let listing = Listing::cpp(&source);

    assert!(listing.is_fork_needed());

    let assignment = listing.plain_assignment();
    assert!(assignment.contains("    // TODO: add every value\n"));
    assert!(!assignment.contains("total += v;"));
    assert!(assignment.contains("\"TODO: print the sum\""));
    assert!(!assignment.contains("//#"));

    let solution = listing.plain_solution();
    assert!(solution.contains("        total += v;\n"));
    assert!(!solution.contains("TODO"));
    assert!(!solution.contains("//#"));

    // Common lines appear in both
    for common in ["int sum(const std::vector<int>& values) {", "    return total;"] {
        assert!(assignment.contains(common), "assignment lacks {:?}", common);
        assert!(solution.contains(common), "solution lacks {:?}", common);
    }
}

#[test]
fn test_exercise_group_starts() {
    let listing = Listing::cpp(&read_fixture("exercise.cpp"));

    let starts: Vec<(&str, Variant)> = listing
        .lines()
        .iter()
        .filter(|l| l.is_group_start())
        .map(|l| (l.group().unwrap(), l.variant().unwrap()))
        .collect();

    assert_eq!(
        starts,
        vec![("sum", Variant::Assignment), ("print", Variant::Solution)]
    );
}

#[test]
fn test_exercise_interactive_view() {
    let listing = Listing::cpp(&read_fixture("exercise.cpp"));
    let html = listing.highlighted_interactive();

    assert_eq!(html.matches("<input type=\"checkbox\"").count(), 2);
    assert_eq!(
        html.matches("<span class=\"solution solution_sum\">").count(),
        3
    );
    assert_eq!(
        html.matches("<span class=\"assignment assignment_print\">").count(),
        1
    );
    assert!(html.contains("<span class=\"preprocessor\">#include &lt;iostream&gt;</span>"));

    let css = listing.generated_css();
    assert!(css.contains("input.sum:checked ~ .solution_sum {"));
    assert!(css.contains("input.print ~ .assignment_print {"));
}

#[test]
fn test_highlighted_assignment_round_trip() {
    let listing = Listing::cpp(&read_fixture("exercise.cpp"));
    let html = listing.highlighted_assignment();
    assert_eq!(strip_markup(code_body(&html)), listing.plain_assignment());
}

#[test]
fn test_plain_file_is_shared() {
    let source = read_fixture("plain.cpp");
    let listing = Listing::cpp(&source);

    match listing.artifacts() {
        Artifacts::Shared {
            source: text,
            highlighted,
        } => {
            assert_eq!(text, source);
            assert_eq!(strip_markup(code_body(&highlighted)), source);
            // keywords inside the string literal stay plain
            assert!(highlighted.contains(
                "<span class=\"data\">\"if &bsol;\"for&bsol;\" while&bsol;n\"</span>"
            ));
        }
        other => panic!("expected shared artifacts, got {:?}", other),
    }
}

#[test]
fn test_tag_tables_are_balanced() {
    let samples = [
        read_fixture("exercise.cpp"),
        read_fixture("plain.cpp"),
        String::new(),
        "/* unterminated".to_string(),
        "\"open string".to_string(),
        "int \u{1F600} = 'x'; // ok".to_string(),
        "a = b /* c */ + \"d /* e */\" - 'f' // g".to_string(),
    ];

    for sample in &samples {
        for line in sample.split('\n') {
            let tags = tokenize(line, cpp::rules());
            assert_eq!(tags.len(), line.chars().count(), "length for {:?}", line);
            assert!(tags.is_balanced(), "balance for {:?}", line);
        }
    }
}

#[test]
fn test_comment_precedence_over_string() {
    let tags = tokenize("x = \"a /* b */ c\";", cpp::rules());
    // the block comment rule runs first and claims the inner span
    assert_eq!(tags.spans(Category::BlockComment), vec![7..14]);
    assert_eq!(tags.spans(Category::String), vec![4..17]);
}
