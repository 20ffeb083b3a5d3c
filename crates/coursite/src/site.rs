//! Site build: walk `src/`, convert every file, write `dist/`.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr, bail};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::assets::Assets;
use crate::config::{Config, load_config_or_default};
use crate::cpp::{self, CppPage};
use crate::html::expand_macros;
use crate::layout::Layout;
use crate::markdown::{apply_marks, render_markdown};
use crate::questions;
use crate::template::Page;

/// Config file inside the config dir
pub const CONFIG_FILE: &str = "html.yaml";

const SQL_QUESTIONS_SUFFIX: &str = ".sql.yaml";

/// How a source file is converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileKind {
    Html,
    Markdown,
    Cpp,
    SqlQuestions,
    /// Copied verbatim
    Other,
}

impl FileKind {
    pub fn of(path: &Path) -> Self {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        if name.ends_with(SQL_QUESTIONS_SUFFIX) && name.len() > SQL_QUESTIONS_SUFFIX.len() {
            return FileKind::SqlQuestions;
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("html" | "htm") => FileKind::Html,
            Some("md") => FileKind::Markdown,
            Some(ext) if coursite_core::cpp::is_cpp_extension(ext) => FileKind::Cpp,
            _ => FileKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Html => "html",
            FileKind::Markdown => "markdown",
            FileKind::Cpp => "c/c++",
            FileKind::SqlQuestions => "sql questions",
            FileKind::Other => "other",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A converted file, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub path: PathBuf,
    pub contents: String,
}

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Remove the dist directory before building
    pub clean: bool,
}

#[derive(Debug, Clone)]
pub struct Failure {
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Successfully processed source files per kind
    pub counts: BTreeMap<FileKind, usize>,
    /// Every file written to dist, sorted
    pub written: Vec<PathBuf>,
    pub failures: Vec<Failure>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Source files processed without error
    pub fn processed(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn count(&self, kind: FileKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or_default()
    }
}

/// Everything shared by the conversions of one build
#[derive(Debug, Clone)]
pub struct Site {
    layout: Layout,
    config: Config,
    assets: Assets,
}

impl Site {
    pub fn new(layout: Layout, config: Config, assets: Assets) -> Self {
        Self {
            layout,
            config,
            assets,
        }
    }

    /// Read `config/html.yaml` and the optional assets next to it
    pub fn load(layout: Layout) -> Result<Self> {
        let config = load_config_or_default(&layout.config_file(CONFIG_FILE));
        let assets = Assets::load(&layout, &config)?;
        Ok(Self::new(layout, config, assets))
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    /// Convert one source file into the files it produces in dist.
    ///
    /// Files of kind [`FileKind::Other`] produce nothing here; they are
    /// copied byte for byte by [`build_site`].
    pub fn convert(&self, src_file: &Path) -> Result<Vec<Output>> {
        let kind = FileKind::of(src_file);
        if kind == FileKind::Other {
            return Ok(Vec::new());
        }

        let text = std::fs::read_to_string(src_file)
            .wrap_err_with(|| format!("Failed to read {}", src_file.display()))?;
        self.convert_text(kind, src_file, &text)
    }

    /// Same as [`Self::convert`] with the content already loaded
    pub fn convert_text(&self, kind: FileKind, src_file: &Path, text: &str) -> Result<Vec<Output>> {
        let dist_file = self.layout.dist_file_of(src_file)?;
        let dist_dir = dist_file.parent().unwrap_or(self.layout.dist_dir());
        let root = self.layout.root_prefix(src_file)?;
        let file_name = file_name_of(src_file)?;

        let page = |name: &str, body: &str, style: Option<&str>| {
            self.assets.template.wrap(&Page {
                file_name: name,
                body,
                style,
                root: &root,
            })
        };

        let outputs = match kind {
            FileKind::Html => vec![Output {
                path: dist_file.clone(),
                contents: page(file_name, &expand_macros(text), None),
            }],
            FileKind::Markdown => {
                let body = apply_marks(
                    &render_markdown(text),
                    self.config.solution_label(),
                    &self.config.marks(),
                );
                vec![Output {
                    path: dist_file.with_extension("html"),
                    contents: page(file_name, &body, None),
                }]
            }
            FileKind::SqlQuestions => {
                let Some(stem) = file_name.strip_suffix(SQL_QUESTIONS_SUFFIX) else {
                    bail!("{file_name} does not end with {SQL_QUESTIONS_SUFFIX}");
                };
                let list = questions::parse(text)?;
                vec![Output {
                    path: dist_dir.join(format!("{stem}.html")),
                    contents: page(
                        file_name,
                        &list.to_html(self.config.title()),
                        Some(self.assets.sql_question_style.as_str()),
                    ),
                }]
            }
            FileKind::Cpp => cpp::pages(
                file_name,
                text,
                self.config.solution_suffix(),
                &self.assets.cpp_style,
            )
            .into_iter()
            .map(|cpp_page| match cpp_page {
                CppPage::Source { name, text } => Output {
                    path: dist_dir.join(name),
                    contents: text,
                },
                CppPage::Html { name, body, style } => {
                    let title = name.strip_suffix(".html").unwrap_or(&name);
                    Output {
                        contents: page(title, &body, Some(style.as_str())),
                        path: dist_dir.join(&name),
                    }
                }
            })
            .collect(),
            FileKind::Other => Vec::new(),
        };

        Ok(outputs)
    }

    fn process(&self, src_file: &Path) -> Result<(FileKind, Vec<PathBuf>)> {
        let kind = FileKind::of(src_file);

        let written = if kind == FileKind::Other {
            let dist_file = self.layout.dist_file_of(src_file)?;
            create_parent(&dist_file)?;
            std::fs::copy(src_file, &dist_file).wrap_err_with(|| {
                format!(
                    "Failed to copy {} to {}",
                    src_file.display(),
                    dist_file.display()
                )
            })?;
            vec![dist_file]
        } else {
            let mut written = Vec::new();
            for output in self.convert(src_file)? {
                create_parent(&output.path)?;
                std::fs::write(&output.path, &output.contents)
                    .wrap_err_with(|| format!("Failed to write {}", output.path.display()))?;
                written.push(output.path);
            }
            written
        };

        debug!("{} ({}) -> {} file(s)", src_file.display(), kind, written.len());
        Ok((kind, written))
    }
}

/// Build the whole site.
///
/// Errors only for problems with the project itself (missing `src/`,
/// unwritable dist). A file that fails to convert is recorded in the
/// report and the rest of the build goes on.
pub fn build_site(layout: Layout, options: &BuildOptions) -> Result<BuildReport> {
    if !layout.src_dir().is_dir() {
        bail!("Source directory {} does not exist", layout.src_dir().display());
    }

    let site = Site::load(layout)?;
    let layout = site.layout();

    if options.clean && layout.dist_dir().exists() {
        info!("Removing {}", layout.dist_dir().display());
        std::fs::remove_dir_all(layout.dist_dir())
            .wrap_err_with(|| format!("Failed to remove {}", layout.dist_dir().display()))?;
    }
    std::fs::create_dir_all(layout.dist_dir())
        .wrap_err_with(|| format!("Failed to create {}", layout.dist_dir().display()))?;

    let files = source_files(layout.src_dir());
    info!("Building {} source file(s) from {}", files.len(), layout.src_dir().display());

    let results: Vec<_> = files
        .par_iter()
        .map(|path| (path, site.process(path)))
        .collect();

    let mut report = BuildReport::default();
    for (path, result) in results {
        match result {
            Ok((kind, written)) => {
                *report.counts.entry(kind).or_default() += 1;
                report.written.extend(written);
            }
            Err(e) => {
                warn!("{}: {:#}", path.display(), e);
                report.failures.push(Failure {
                    path: path.clone(),
                    error: format!("{:#}", e),
                });
            }
        }
    }

    for name in &site.assets().stylesheets {
        let from = layout.config_file(name);
        let to = layout.dist_dir().join(name);
        match std::fs::copy(&from, &to) {
            Ok(_) => report.written.push(to),
            Err(e) => {
                warn!("Failed to copy stylesheet {}: {}", from.display(), e);
                report.failures.push(Failure {
                    path: from,
                    error: e.to_string(),
                });
            }
        }
    }

    report.written.sort();
    Ok(report)
}

/// Every file below `src_dir`, hidden ones included, sorted
fn source_files(src_dir: &Path) -> Vec<PathBuf> {
    use ignore::WalkBuilder;

    let walker = WalkBuilder::new(src_dir)
        .hidden(false)
        .ignore(false)
        .parents(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .build();

    let mut files: Vec<PathBuf> = walker
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

fn file_name_of(path: &Path) -> Result<&str> {
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => Ok(name),
        None => bail!("{} has no usable file name", path.display()),
    }
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(())
}
