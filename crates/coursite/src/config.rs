//! Configuration schema for coursite
//!
//! Config lives at `config/html.yaml` relative to the project directory.
//! Every key is optional:
//!
//! ```yaml
//! title: "Programming 1"
//! author: "Jane Doe"
//! charset: "UTF-8"
//! favicon: "favicon.png"
//! solution_suffix: "solution"
//! solution_label: "show solution"
//! marks:
//!   - from: "#DU"
//!     to: "Homework"
//! ```

use std::path::Path;

use eyre::{Result, WrapErr};
use facet::Facet;
use tracing::{debug, warn};

/// Root configuration
#[derive(Debug, Clone, Default, Facet)]
pub struct Config {
    /// Value of `<meta charset>` in generated heads (default: UTF-8)
    #[facet(default)]
    pub charset: Option<String>,

    /// Site title, used in `<title>` and question list headers
    #[facet(default)]
    pub title: Option<String>,

    /// Content of `<meta name="author">`; omitted when empty
    #[facet(default)]
    pub author: Option<String>,

    /// Favicon path relative to the site root (default: favicon.png)
    #[facet(default)]
    pub favicon: Option<String>,

    /// Infix for solution artifacts: `x.cpp` -> `x.<suffix>.cpp` (default: solution)
    #[facet(default)]
    pub solution_suffix: Option<String>,

    /// Label of the toggle that `#R` produces in Markdown pages
    #[facet(default)]
    pub solution_label: Option<String>,

    /// Text replacements applied to rendered Markdown.
    /// When absent, [`DEFAULT_MARKS`] is used.
    #[facet(default)]
    pub marks: Option<Vec<Mark>>,
}

/// A literal text replacement applied to rendered Markdown
#[derive(Debug, Clone, PartialEq, Eq, Facet)]
pub struct Mark {
    pub from: String,
    pub to: String,
}

/// Replacements used when the config does not list any
pub const DEFAULT_MARKS: &[(&str, &str)] = &[
    ("#DU", "Homework"),
    ("#CV", "In class"),
    ("#university", "(database: university)"),
    ("#sakila", "(database: sakila)"),
];

impl Config {
    pub fn charset(&self) -> &str {
        self.charset.as_deref().unwrap_or("UTF-8")
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or_default()
    }

    pub fn favicon(&self) -> &str {
        self.favicon.as_deref().unwrap_or("favicon.png")
    }

    pub fn solution_suffix(&self) -> &str {
        self.solution_suffix.as_deref().unwrap_or("solution")
    }

    pub fn solution_label(&self) -> &str {
        self.solution_label.as_deref().unwrap_or("show solution")
    }

    /// Configured Markdown replacements, or the defaults
    pub fn marks(&self) -> Vec<Mark> {
        match &self.marks {
            Some(marks) => marks.clone(),
            None => DEFAULT_MARKS
                .iter()
                .map(|(from, to)| Mark {
                    from: from.to_string(),
                    to: to.to_string(),
                })
                .collect(),
        }
    }
}

/// Parse a config file, failing if it is missing or malformed
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = facet_yaml::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

/// Load config if it exists, otherwise return the default config.
///
/// A malformed file is reported and replaced by defaults so one bad
/// optional asset never aborts a build.
pub fn load_config_or_default(path: &Path) -> Config {
    if !path.exists() {
        debug!("Config file {} not found, using defaults", path.display());
        return Config::default();
    }

    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{:#}; using defaults", e);
            Config::default()
        }
    }
}
