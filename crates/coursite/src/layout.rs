//! Project directory layout.
//!
//! ```text
//! <base>/src      input tree
//! <base>/config   optional assets (html.yaml, template.html, *.css)
//! <base>/dist     output tree, mirrors src/
//! ```

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};

#[derive(Debug, Clone)]
pub struct Layout {
    base_dir: PathBuf,
    src_dir: PathBuf,
    dist_dir: PathBuf,
    config_dir: PathBuf,
}

impl Layout {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            src_dir: base_dir.join("src"),
            dist_dir: base_dir.join("dist"),
            config_dir: base_dir.join("config"),
            base_dir,
        }
    }

    /// Write output somewhere other than `<base>/dist`
    pub fn with_dist_dir(mut self, dist_dir: impl Into<PathBuf>) -> Self {
        self.dist_dir = dist_dir.into();
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn src_dir(&self) -> &Path {
        &self.src_dir
    }

    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self, name: &str) -> PathBuf {
        self.config_dir.join(name)
    }

    /// Path of `src_file` relative to the source root
    pub fn relative<'a>(&self, src_file: &'a Path) -> Result<&'a Path> {
        src_file.strip_prefix(&self.src_dir).map_err(|_| {
            eyre!(
                "{} is outside the source directory {}",
                src_file.display(),
                self.src_dir.display()
            )
        })
    }

    /// `src/a/b.x` -> `dist/a/b.x`
    pub fn dist_file_of(&self, src_file: &Path) -> Result<PathBuf> {
        Ok(self.dist_dir.join(self.relative(src_file)?))
    }

    /// `../` chain leading from the output directory of `src_file` back to
    /// the dist root; empty for files at the top level.
    pub fn root_prefix(&self, src_file: &Path) -> Result<String> {
        let depth = self
            .relative(src_file)?
            .parent()
            .map_or(0, |dir| dir.components().count());
        Ok("../".repeat(depth))
    }
}
