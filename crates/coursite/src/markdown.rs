//! Markdown pages.

use pulldown_cmark::{Options, Parser, html};

use crate::config::Mark;

/// Paragraph consisting only of the solution toggle mark
const SOLUTION_MARK: &str = "<p>#R</p>";

/// Render Markdown to an HTML fragment
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

/// Replace course marks in rendered HTML.
///
/// Every `<p>#R</p>` becomes a labelled checkbox with id `solution_N`,
/// numbered from 1 in document order. The literal replacements run after
/// that, in the order given.
pub fn apply_marks(html: &str, solution_label: &str, marks: &[Mark]) -> String {
    let mut output = String::with_capacity(html.len());
    let mut rest = html;
    let mut id = 0;

    while let Some(pos) = rest.find(SOLUTION_MARK) {
        id += 1;
        output.push_str(&rest[..pos]);
        output.push_str(&format!(
            "<label for=\"solution_{id}\">{}</label><input type=\"checkbox\" id=\"solution_{id}\"/>",
            coursite_core::escape(solution_label)
        ));
        rest = &rest[pos + SOLUTION_MARK.len()..];
    }
    output.push_str(rest);

    marks
        .iter()
        .filter(|mark| !mark.from.is_empty())
        .fold(output, |text, mark| text.replace(&mark.from, &mark.to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(from: &str, to: &str) -> Mark {
        Mark {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn test_render_extensions() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~old~~\n\n- [x] done\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>old</del>"));
        assert!(html.contains("type=\"checkbox\""));
    }

    #[test]
    fn test_solution_marks_are_numbered() {
        let html = render_markdown("Task one\n\n#R\n\n```sql\nSELECT 1;\n```\n\nTask two\n\n#R\n");
        let html = apply_marks(&html, "show solution", &[]);

        assert!(!html.contains("#R"));
        assert!(html.contains(
            "<label for=\"solution_1\">show solution</label><input type=\"checkbox\" id=\"solution_1\"/>"
        ));
        assert!(html.contains("id=\"solution_2\""));
        assert!(!html.contains("solution_3"));
    }

    #[test]
    fn test_inline_r_is_not_a_toggle() {
        let html = apply_marks("<p>See #R below</p>", "show", &[]);
        assert_eq!(html, "<p>See #R below</p>");
    }

    #[test]
    fn test_text_replacements() {
        let marks = [mark("#DU", "Homework"), mark("#sakila", "(database: sakila)")];
        let html = apply_marks("<h2>#DU</h2><p>Use #sakila.</p>", "show", &marks);
        assert_eq!(html, "<h2>Homework</h2><p>Use (database: sakila).</p>");
    }
}
