//! Page template and the wrapper that fills it.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::Config;

/// Placeholder replaced by the `../` chain from a page back to the dist root
pub const ROOT_PLACEHOLDER: &str = "{{root}}";

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<title>(.*?)</title>").expect("title pattern is valid"));

static HEAD_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</head>").expect("head pattern is valid"));

static BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(<body[^>]*>).*(</body>)").expect("body pattern is valid")
});

/// One page handed to [`Template::wrap`]
#[derive(Debug, Clone)]
pub struct Page<'a> {
    /// Source file name, appended to the title
    pub file_name: &'a str,
    pub body: &'a str,
    /// Page-specific CSS, inlined in a `<style>` element
    pub style: Option<&'a str>,
    /// Relative path from the page to the dist root (`""` or `../..../`)
    pub root: &'a str,
}

#[derive(Debug, Clone)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Head built from the config when no `template.html` exists.
    pub fn generated(config: &Config, stylesheets: &[String]) -> Self {
        let mut head = String::new();
        head.push_str(&format!(
            "        <meta charset=\"{}\">\n",
            escape_attr(config.charset())
        ));
        head.push_str(&format!(
            "        <title>{}</title>\n",
            coursite_core::escape(config.title())
        ));
        if !config.author().is_empty() {
            head.push_str(&format!(
                "        <meta name=\"author\" content=\"{}\">\n",
                escape_attr(config.author())
            ));
        }
        head.push_str(&format!(
            "        <link rel=\"shortcut icon\" type=\"image/png\" href=\"{ROOT_PLACEHOLDER}{}\"/>\n",
            escape_attr(config.favicon())
        ));
        for css in stylesheets {
            head.push_str(&format!(
                "        <link rel=\"stylesheet\" type=\"text/css\" href=\"{ROOT_PLACEHOLDER}{}\">\n",
                escape_attr(css)
            ));
        }

        Self {
            text: format!(
                "<!DOCTYPE html>\n<html>\n    <head>\n{head}    </head>\n    <body>\n    </body>\n</html>\n"
            ),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Fill the template with one page.
    ///
    /// The file name is appended to `<title>`, the page style goes right
    /// before `</head>` and the page body replaces the content of `<body>`.
    /// A template without `<body>` gets the page body appended.
    pub fn wrap(&self, page: &Page<'_>) -> String {
        let html = self.text.replace(ROOT_PLACEHOLDER, page.root);

        let mut html = TITLE
            .replace(&html, |caps: &Captures| {
                let title = caps[1].trim();
                let file_name = coursite_core::escape(page.file_name);
                if title.is_empty() {
                    format!("<title>{file_name}</title>")
                } else {
                    format!("<title>{title} - {file_name}</title>")
                }
            })
            .into_owned();

        if let Some(style) = page.style {
            html = HEAD_END
                .replace(&html, |caps: &Captures| {
                    format!("<style>\n{}\n</style>\n{}", style, &caps[0])
                })
                .into_owned();
        }

        if BODY.is_match(&html) {
            BODY.replace(&html, |caps: &Captures| {
                format!("{}\n\n{}\n\n{}", &caps[1], page.body, &caps[2])
            })
            .into_owned()
        } else {
            format!("{}\n{}\n", html, page.body)
        }
    }
}

fn escape_attr(value: &str) -> String {
    coursite_core::escape(value).replace('"', "&quot;")
}
