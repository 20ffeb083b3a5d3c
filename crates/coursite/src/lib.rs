//! coursite - Turn a tree of course materials into a static site
//!
//! A project has three directories:
//!
//! - `src/` holds the material: HTML and Markdown pages, C/C++ listings,
//!   SQL question lists (`*.sql.yaml`) and anything else, which is copied.
//! - `config/` holds the optional `html.yaml`, `template.html` and stylesheets.
//! - `dist/` receives the generated site, mirroring `src/`.
//!
//! C/C++ listings may mark lines with `//#Z <group>` (assignment only) and
//! `//#R <group>` (solution only). Such listings are split into an
//! assignment file, a solution file and an interactive page that toggles
//! each group between the two.
//!
//! ```no_run
//! use coursite::{BuildOptions, Layout, build_site};
//!
//! let report = build_site(Layout::new("course"), &BuildOptions::default())?;
//! println!("{} files written", report.written.len());
//! # Ok::<(), eyre::Report>(())
//! ```

pub mod assets;
pub mod config;
pub mod cpp;
pub mod html;
pub mod layout;
pub mod markdown;
pub mod questions;
pub mod site;
pub mod template;

pub use assets::Assets;
pub use config::{Config, Mark, load_config, load_config_or_default};
pub use layout::Layout;
pub use site::{BuildOptions, BuildReport, Failure, FileKind, Output, Site, build_site};
pub use template::{Page, Template};
