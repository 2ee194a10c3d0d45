use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::TocError;
use crate::TocResult;
use crate::headers::parse_header;

/// Supported config file locations in discovery order (highest precedence
/// first), probed relative to the input file's directory.
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["mdtoc.yaml", ".mdtoc.yaml", ".config/mdtoc.yaml"];

/// The heading line emitted for the generated table of contents when no
/// `toc_title` is configured.
pub const DEFAULT_TOC_TITLE: &str = "## Table of Contents";

/// Heading texts that always mark a table of contents, regardless of the
/// configured `toc_title`. Headers with these texts are never collected as
/// entries, and heading lines built from them are removed as stale blocks.
pub const RESERVED_TOC_TITLES: [&str; 2] = ["Table of Contents", "Contents"];

/// Rendering style for TOC entries.
#[derive(Debug, Clone, Copy, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum IndentStyle {
	/// Flat ordinal list: `1. [text](#slug)` for top-level entries, a
	/// fixed-indent `-` bullet for nested ones. `github` is accepted as an
	/// alias since this is the style GitHub readmes conventionally use.
	#[default]
	#[serde(alias = "github")]
	Flat,
	/// Nested hierarchical numbering: each entry renders the dotted path of
	/// its section counters (`1.2`), indented four spaces per depth.
	Nested,
}

/// Configuration for TOC generation, loaded from an `mdtoc.yaml` file.
///
/// ```yaml
/// header_levels: [2, 3]
/// toc_title: "## Contents"
/// indent_style: nested
/// ```
///
/// Unspecified fields fall back to their defaults, and user-supplied fields
/// override wholesale. Unknown keys are accepted and ignored.
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct TocConfig {
	/// Heading levels (number of `#` markers) that become TOC entries. The
	/// smallest configured level is the primary level; the second smallest,
	/// if any, nests under it. Further levels are never collected.
	pub header_levels: BTreeSet<u8>,
	/// The literal heading line emitted as the TOC's own heading.
	pub toc_title: String,
	/// Selects the flat or nested renderer.
	pub indent_style: IndentStyle,
}

impl Default for TocConfig {
	fn default() -> Self {
		Self {
			header_levels: BTreeSet::from([2]),
			toc_title: DEFAULT_TOC_TITLE.to_string(),
			indent_style: IndentStyle::Flat,
		}
	}
}

impl TocConfig {
	/// The primary heading level — the smallest configured level.
	pub fn primary_level(&self) -> Option<usize> {
		self.header_levels.first().copied().map(usize::from)
	}

	/// The secondary heading level — the second smallest configured level,
	/// whose headers nest under the most recent primary entry.
	pub fn secondary_level(&self) -> Option<usize> {
		self.header_levels.iter().nth(1).copied().map(usize::from)
	}

	/// The display text of the configured TOC heading, markers stripped.
	pub fn toc_title_text(&self) -> &str {
		parse_header(&self.toc_title).map_or_else(|| self.toc_title.trim(), |header| header.text.trim())
	}

	/// Heading texts that must never become TOC entries: the reserved titles
	/// plus the configured heading's own text.
	pub fn reserved_heading_texts(&self) -> Vec<String> {
		let mut texts: Vec<String> = RESERVED_TOC_TITLES
			.iter()
			.map(|title| (*title).to_string())
			.collect();
		let configured = self.toc_title_text().to_string();

		if !texts.contains(&configured) {
			texts.push(configured);
		}

		texts
	}

	/// Heading lines whose presence marks a previously generated TOC block.
	/// Includes the configured `toc_title` so regenerating under a custom
	/// heading still replaces the old block.
	pub fn recognized_toc_headings(&self) -> Vec<String> {
		let mut headings: Vec<String> = RESERVED_TOC_TITLES
			.iter()
			.map(|title| format!("## {title}"))
			.collect();
		let configured = self.toc_title.trim().to_string();

		if !headings.contains(&configured) {
			headings.push(configured);
		}

		headings
	}

	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(dir: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| dir.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file in `dir`.
	/// Returns `None` if no candidate file exists.
	pub fn load(dir: &Path) -> TocResult<Option<TocConfig>> {
		let Some(config_path) = Self::resolve_path(dir) else {
			return Ok(None);
		};

		Self::load_file(&config_path).map(Some)
	}

	/// Load the config from an explicit YAML file path.
	pub fn load_file(path: &Path) -> TocResult<TocConfig> {
		let content = std::fs::read_to_string(path).map_err(|e| TocError::ConfigRead {
			path: path.display().to_string(),
			reason: e.to_string(),
		})?;

		serde_yaml_ng::from_str(&content).map_err(|e| TocError::ConfigParse(e.to_string()))
	}
}
