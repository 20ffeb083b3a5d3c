//! Assignment/solution views of a classified listing.
//!
//! A [`Listing`] combines the line classifier with a rule set and produces
//! the artifacts a course page needs: plain assignment and solution text,
//! the highlighted assignment, and an interactive view where each exercise
//! group toggles between its assignment and solution lines through a
//! checkbox and generated CSS.

use crate::cpp;
use crate::lines::{Line, Variant, classify};
use crate::render::highlight;
use crate::segment::RuleSet;

/// Output of a listing: one shared artifact or a forked set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifacts {
    /// No variant markers; the source serves as both assignment and solution.
    Shared { source: String, highlighted: String },
    /// At least one marked line.
    Forked {
        assignment: String,
        solution: String,
        highlighted_assignment: String,
        interactive: String,
        css: String,
    },
}

/// A classified source listing.
#[derive(Debug, Clone)]
pub struct Listing<'r> {
    lines: Vec<Line>,
    rules: &'r RuleSet,
}

impl Listing<'static> {
    /// Classify a C/C++ source with the built-in C/C++ rules
    pub fn cpp(source: &str) -> Self {
        Self::new(source, cpp::rules())
    }
}

impl<'r> Listing<'r> {
    pub fn new(source: &str, rules: &'r RuleSet) -> Self {
        Self {
            lines: classify(source),
            rules,
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Whether any line belongs to only one variant
    pub fn is_fork_needed(&self) -> bool {
        self.lines.iter().any(|line| line.variant().is_some())
    }

    /// Assignment text: every line not exclusive to the solution
    pub fn plain_assignment(&self) -> String {
        self.join_plain(Line::in_assignment)
    }

    /// Solution text: every line not exclusive to the assignment
    pub fn plain_solution(&self) -> String {
        self.join_plain(Line::in_solution)
    }

    /// Highlighted assignment in a `<pre><code>` block
    pub fn highlighted_assignment(&self) -> String {
        let body = self
            .lines
            .iter()
            .filter(|line| line.in_assignment())
            .map(|line| self.highlight_line(line))
            .collect::<Vec<_>>()
            .join("\n");
        format!("<pre><code>{}</code></pre>", body)
    }

    /// Every line, with a toggle in front of each exercise group and each
    /// marked line wrapped in a span that [`Self::generated_css`] shows or
    /// hides.
    pub fn highlighted_interactive(&self) -> String {
        let mut html = String::from("<pre><code>");

        for line in &self.lines {
            let group = line.group().unwrap_or_default();

            if line.is_group_start() {
                html.push_str(&format!(
                    "    <input type=\"checkbox\" style=\"display: none\" id=\"{group}\" class=\"{group}\">\
                     <label for=\"{group}\">// </label>\n"
                ));
            }

            if let Some(variant) = line.variant() {
                html.push_str(&format!("<span class=\"{variant} {variant}_{group}\">"));
            }

            html.push_str(&self.highlight_line(line));
            html.push('\n');

            if line.variant().is_some() {
                html.push_str("</span>");
            }
        }

        html.push_str("</code></pre>");
        html
    }

    /// Visibility rules for the interactive view, one block per group.
    ///
    /// Unchecked shows the assignment lines, checked shows the solution.
    pub fn generated_css(&self) -> String {
        self.lines
            .iter()
            .filter(|line| line.is_group_start())
            .filter_map(Line::group)
            .map(group_css)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Produce the artifact set for this listing.
    pub fn artifacts(&self) -> Artifacts {
        if self.is_fork_needed() {
            Artifacts::Forked {
                assignment: self.plain_assignment(),
                solution: self.plain_solution(),
                highlighted_assignment: self.highlighted_assignment(),
                interactive: self.highlighted_interactive(),
                css: self.generated_css(),
            }
        } else {
            Artifacts::Shared {
                source: self.plain_assignment(),
                highlighted: self.highlighted_assignment(),
            }
        }
    }

    fn join_plain(&self, keep: impl Fn(&Line) -> bool) -> String {
        self.lines
            .iter()
            .filter(|&line| keep(line))
            .map(Line::content)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn highlight_line(&self, line: &Line) -> String {
        highlight(line.content(), self.rules)
    }
}

fn group_css(group: &str) -> String {
    let solution = Variant::Solution.as_str();
    let assignment = Variant::Assignment.as_str();
    format!(
        "input.{group} ~ .{solution}_{group} {{\n    display: none;\n}}\n\
         input.{group}:checked ~ .{solution}_{group} {{\n    display: initial;\n}}\n\
         input.{group} ~ .{assignment}_{group} {{\n    display: initial;\n}}\n\
         input.{group}:checked ~ .{assignment}_{group} {{\n    display: none;\n}}"
    )
}
