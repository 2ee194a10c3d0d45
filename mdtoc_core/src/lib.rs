//! `mdtoc_core` is the core library for the [mdtoc](https://github.com/ifiokjr/mdtoc)
//! table of contents generator. It scans a markdown document's section
//! headers and splices a navigable, linked TOC into the document, replacing
//! any stale TOC blocks left behind by earlier runs.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Markdown document
//!   → Stale-TOC remover (deletes previously generated TOC blocks)
//!   → Title locator (finds the `# ` document title)
//!   → Header collector (selects configured heading levels, builds slugs)
//!   → Renderer (flat ordinals or nested dotted numbering)
//!   → Assembler (splices the TOC in and normalizes blank-line spacing)
//! ```
//!
//! The whole transformation is a pure function over the document text — the
//! core performs no I/O, and identical (document, configuration) input
//! always yields identical output.
//!
//! ## Key Types
//!
//! - [`TocConfig`] — configuration loaded from `mdtoc.yaml`.
//! - [`IndentStyle`] — flat ordinal list vs. nested hierarchical numbering.
//! - [`TocEntry`] — a collected header with nesting depth, text, and slug.
//! - [`TocError`] — failures from the configuration layer; the
//!   transformation itself never fails.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdtoc_core::TocConfig;
//! use mdtoc_core::generate_toc;
//!
//! let config = TocConfig::default();
//! let updated = generate_toc("# Title\n\n## First\n\n## Second\n", &config);
//! assert!(updated.contains("1. [First](#first)"));
//! assert!(updated.contains("2. [Second](#second)"));
//! ```

pub use config::*;
pub use engine::*;
pub use error::*;
pub use headers::*;
pub use outline::*;
pub use render::*;

pub mod config;
mod engine;
mod error;
mod headers;
mod outline;
mod render;

#[cfg(test)]
mod __fixtures;
