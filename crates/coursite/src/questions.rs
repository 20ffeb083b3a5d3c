//! SQL question lists (`*.sql.yaml`).
//!
//! ```yaml
//! topic: "Joins"
//! instruction: "Write a query for each question."
//! questionList:
//!   - label: "1."
//!     db: "sakila"
//!     assignment: "List all actors."
//!     solution: "SELECT * FROM actor;"
//! ```
//!
//! Text fields are inserted as HTML fragments, so authors may use inline
//! markup. Solutions are highlighted and hidden behind a checkbox.

use eyre::{Result, WrapErr};
use facet::Facet;

/// Class shared by the question container, its toggle and its solution block
pub const QUESTION_CLASS: &str = "question-sql";

#[derive(Debug, Clone, Default, Facet)]
#[facet(rename_all = "camelCase")]
pub struct QuestionList {
    #[facet(default)]
    pub topic: String,

    #[facet(default)]
    pub instruction: String,

    #[facet(default)]
    pub question_list: Vec<Question>,
}

#[derive(Debug, Clone, Default, Facet)]
pub struct Question {
    #[facet(default)]
    pub label: String,

    /// Database the query runs against
    #[facet(default)]
    pub db: String,

    #[facet(default)]
    pub assignment: String,

    /// SQL text of the model answer
    #[facet(default)]
    pub solution: String,
}

pub fn parse(yaml: &str) -> Result<QuestionList> {
    facet_yaml::from_str(yaml).wrap_err("Failed to parse SQL question list")
}

impl QuestionList {
    /// Page body: site title, topic, instruction and one block per question.
    ///
    /// Checkbox ids are `question-1`, `question-2`, ... in list order.
    pub fn to_html(&self, site_title: &str) -> String {
        let mut parts = vec![
            format!("<h1>{}</h1>", coursite_core::escape(site_title)),
            format!("<h2>{}</h2>", self.topic),
            format!("<p>{}</p>", self.instruction),
        ];
        parts.extend(
            self.question_list
                .iter()
                .enumerate()
                .map(|(index, question)| question.to_html(&format!("question-{}", index + 1))),
        );
        parts.join("\n")
    }
}

impl Question {
    fn to_html(&self, id: &str) -> String {
        format!(
            "<b>{label}</b> database: {db}\n\
             <div class=\"{QUESTION_CLASS}\">\n\
             {assignment}\n\
             <input id=\"{id}\" type=\"checkbox\" class=\"{QUESTION_CLASS}\">\n\
             <label for=\"{id}\" class=\"{QUESTION_CLASS}\"></label>\n\
             {solution}\n\
             </div>",
            label = self.label,
            db = self.db,
            assignment = self.assignment,
            solution = coursite_core::sql::to_html(&self.solution, Some(QUESTION_CLASS)),
        )
    }
}
