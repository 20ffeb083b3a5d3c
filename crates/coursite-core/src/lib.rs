//! coursite-core - Highlighting and assignment/solution splitting for course listings
//!
//! This crate provides the building blocks for:
//! - Tagging source text with lexical categories from an ordered rule set
//! - Rendering tagged text as nested HTML spans
//! - Splitting annotated C/C++ listings into assignment and solution variants
//! - Highlighting standalone SQL snippets
//!
//! Nothing here touches the filesystem. Every call is a pure function of its
//! input text and the fixed rule tables.
//!
//! # Rule Sets and Tokenizing
//!
//! A [`RuleSet`] is an ordered list of `(category, pattern, class)` rules.
//! [`tokenize`] applies them front to back; text claimed by an earlier rule
//! is masked from later ones:
//!
//! ```
//! use coursite_core::{Category, RuleSet, WordCase, highlight};
//!
//! let rules = RuleSet::new()
//!     .pattern(Category::String, r#""[^"]*""#)?
//!     .words(Category::Keyword, &["return"], WordCase::Sensitive)?;
//!
//! let html = highlight(r#"return "return""#, &rules);
//! assert_eq!(
//!     html,
//!     r#"<span class="keyword">return</span> <span class="data">"return"</span>"#
//! );
//! # Ok::<(), eyre::Report>(())
//! ```
//!
//! # Assignment and Solution Variants
//!
//! C/C++ lines ending in `//#Z <group>` belong to the assignment only, lines
//! ending in `//#R <group>` to the solution only:
//!
//! ```
//! use coursite_core::Listing;
//!
//! let listing = Listing::cpp("A\nx=1; //#Z g1\ny=2; //#R g1\nB");
//! assert!(listing.is_fork_needed());
//! assert_eq!(listing.plain_assignment(), "A\nx=1;\nB");
//! assert_eq!(listing.plain_solution(), "A\ny=2;\nB");
//! ```
//!
//! # SQL Snippets
//!
//! ```
//! let html = coursite_core::sql::to_html("SELECT 1", Some("question-sql"));
//! assert!(html.starts_with(r#"<pre class="question-sql"><code>"#));
//! ```

pub mod cpp;
mod lines;
mod listing;
mod render;
mod segment;
pub mod sql;
mod tokenizer;

pub use lines::{Line, Ownership, Variant, classify};
pub use listing::{Artifacts, Listing};
pub use render::{escape, escape_html, highlight, render, render_with, strip_markup};
pub use segment::{Category, RuleSet, SegmentRule, WordCase};
pub use tokenizer::{MASK, PositionTags, Segment, TagTable, tokenize};
