use crate::config::TocConfig;
use crate::headers::parse_header;
use crate::headers::slugify;

/// A single entry in the generated table of contents.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TocEntry {
	/// Nesting depth: 0 for primary-level headers, 1 for secondary-level
	/// headers attached to the most recent primary entry.
	pub depth: usize,
	/// The header's display text.
	pub text: String,
	/// The anchor slug the entry links to.
	pub slug: String,
}

impl TocEntry {
	fn new(depth: usize, text: &str) -> Self {
		Self {
			depth,
			text: text.to_string(),
			slug: slugify(text),
		}
	}
}

/// Collect TOC entries from `lines`, which must already start at the
/// description boundary.
///
/// Primary-level headers start a new depth-0 entry. Secondary-level headers
/// nest under the most recent primary entry and are silently dropped when no
/// primary header has been seen yet in this scan. Headers whose text is a
/// reserved TOC heading are skipped so a TOC never lists itself.
pub fn collect_entries(lines: &[&str], config: &TocConfig) -> Vec<TocEntry> {
	let reserved = config.reserved_heading_texts();
	let primary = config.primary_level();
	let secondary = config.secondary_level();

	let mut entries = Vec::new();
	let mut primary_seen = false;

	for line in lines {
		let Some(header) = parse_header(line) else {
			continue;
		};

		if reserved.iter().any(|title| title == header.text.trim()) {
			continue;
		}

		if Some(header.level) == primary {
			entries.push(TocEntry::new(0, header.text));
			primary_seen = true;
		} else if Some(header.level) == secondary && primary_seen {
			entries.push(TocEntry::new(1, header.text));
		}
	}

	entries
}
