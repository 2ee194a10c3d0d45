use crate::config::IndentStyle;
use crate::config::TocConfig;
use crate::outline::TocEntry;

/// Number of nesting levels the nested renderer tracks.
const MAX_NESTING_LEVELS: usize = 6;

/// Render the collected entries into TOC lines, starting with the
/// configured TOC heading. With no entries the heading is all that remains.
pub fn render_toc(entries: &[TocEntry], config: &TocConfig) -> Vec<String> {
	let mut lines = vec![config.toc_title.clone()];

	match config.indent_style {
		IndentStyle::Flat => render_flat(entries, &mut lines),
		IndentStyle::Nested => render_nested(entries, &mut lines),
	}

	lines
}

/// Flat ordinal list: top-level entries are numbered consecutively, nested
/// entries become fixed-indent bullets with no numbering of their own.
fn render_flat(entries: &[TocEntry], lines: &mut Vec<String>) {
	let mut ordinal = 0;

	for entry in entries {
		if entry.depth == 0 {
			ordinal += 1;
			lines.push(format!("{ordinal}. [{}](#{})", entry.text, entry.slug));
		} else {
			lines.push(format!("   - [{}](#{})", entry.text, entry.slug));
		}
	}
}

/// Nested hierarchical numbering: each entry increments the counter at its
/// own depth and resets all deeper counters, then renders the dotted path of
/// non-zero counters, indented four spaces per depth.
fn render_nested(entries: &[TocEntry], lines: &mut Vec<String>) {
	let mut counters = [0usize; MAX_NESTING_LEVELS];

	for entry in entries {
		counters[entry.depth] += 1;
		for counter in &mut counters[entry.depth + 1..] {
			*counter = 0;
		}

		let path = counters[..=entry.depth]
			.iter()
			.filter(|&&count| count != 0)
			.map(ToString::to_string)
			.collect::<Vec<_>>()
			.join(".");
		let indent = "    ".repeat(entry.depth);

		lines.push(format!("{indent}{path}. [{}](#{})", entry.text, entry.slug));
	}
}
