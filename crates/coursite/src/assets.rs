//! Optional assets from the config directory, with built-in fallbacks.

use std::path::Path;

use eyre::{Result, WrapErr};
use tracing::debug;

use crate::config::Config;
use crate::layout::Layout;
use crate::template::Template;

/// Inlined into C/C++ pages; overridden by `config/cpp.css`
pub const CPP_STYLE_FILE: &str = "cpp.css";

/// Inlined into SQL question lists; overridden by `config/sql.question.css`
pub const SQL_QUESTION_STYLE_FILE: &str = "sql.question.css";

pub const TEMPLATE_FILE: &str = "template.html";

pub const DEFAULT_CPP_STYLE: &str = r#".keyword {
    color: blue;
}
.comment {
    color: green;
    font-style: italic;
}
.preprocessor {
    color: blue;
    font-weight: bold;
}
.data {
    color: red;
}

label {
    background-color: yellow;
    box-shadow: inset 0 2px 3px rgba(255,255,255,0.2), inset 0 -2px 3px rgba(0,0,0,0.2);
    border-radius: 4px;
    display: inline-block;
    padding: 2px 5px;
    cursor: pointer;
}

input + label:after {
    content: "show solution";
}

input:checked + label:after {
    content: "hide solution";
}

.assignment {
    background: linear-gradient(to right,rgb(240,240,240) 1%, white 50%);
}

.solution {
    background: linear-gradient(to right,yellow 1%, white 50%);
}"#;

pub const DEFAULT_SQL_QUESTION_STYLE: &str = r#"pre.question-sql {
    display: none;
}
input.question-sql {
    display: none;
}
input:checked.question-sql ~ pre {
    display: block;
}
div.question-sql {
    border: 1px solid lightgray;
    border-radius: 0.5rem;
    padding: 0.5rem;
    margin: 0.5rem;
}
label.question-sql {
    background-color: #e7e7e7;
    box-shadow: inset 0 2px 3px rgba(255,255,255,0.2), inset 0 -2px 3px rgba(0,0,0,0.2);
    border-radius: 4px;
    display: inline-block;
    padding: 2px 5px;
    cursor: pointer;
}
input + label.question-sql:after {
    content: "show solution";
}
input:checked + label.question-sql:after {
    content: "hide solution";
}
.keyword {
    color: blue;
}
.comment {
    color: green;
    font-style: italic;
}
.data {
    color: red;
}"#;

/// Everything a page builder reads from `config/`, loaded once per build.
#[derive(Debug, Clone)]
pub struct Assets {
    pub template: Template,
    pub cpp_style: String,
    pub sql_question_style: String,
    /// Site-wide stylesheets, copied to the dist root and linked from every page
    pub stylesheets: Vec<String>,
}

impl Assets {
    pub fn load(layout: &Layout, config: &Config) -> Result<Self> {
        let stylesheets = site_stylesheets(layout.config_dir())?;
        let template = match read_optional(&layout.config_file(TEMPLATE_FILE)) {
            Some(text) => Template::from_text(text),
            None => Template::generated(config, &stylesheets),
        };

        Ok(Self {
            template,
            cpp_style: read_optional(&layout.config_file(CPP_STYLE_FILE))
                .unwrap_or_else(|| DEFAULT_CPP_STYLE.to_string()),
            sql_question_style: read_optional(&layout.config_file(SQL_QUESTION_STYLE_FILE))
                .unwrap_or_else(|| DEFAULT_SQL_QUESTION_STYLE.to_string()),
            stylesheets,
        })
    }
}

fn read_optional(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) => {
            debug!("{} not used ({}), falling back to built-in", path.display(), e);
            None
        }
    }
}

/// `*.css` files directly in the config dir, except the page-specific ones
/// that get inlined. Sorted by name.
fn site_stylesheets(config_dir: &Path) -> Result<Vec<String>> {
    if !config_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(config_dir)
        .wrap_err_with(|| format!("Failed to list {}", config_dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "css") {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str())
            && name != CPP_STYLE_FILE
            && name != SQL_QUESTION_STYLE_FILE
        {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names)
}
