use std::ops::Range;

use tracing::debug;

use crate::config::TocConfig;
use crate::headers::is_header_line;
use crate::outline::collect_entries;
use crate::render::render_toc;

/// Generate a table of contents for `document` and splice it into place,
/// replacing any previously generated TOC blocks.
///
/// The transformation is total: any string is a valid document. A document
/// without a title gets the TOC inserted at the top, and a document without
/// matching headers gets a TOC consisting of the heading line alone. Running
/// the generator on its own output is idempotent.
pub fn generate_toc(document: &str, config: &TocConfig) -> String {
	let mut lines: Vec<&str> = document.split('\n').collect();

	let removed = remove_stale_tocs(&mut lines, &config.recognized_toc_headings());
	if removed > 0 {
		debug!(removed, "removed stale toc block(s)");
	}

	let title_index = find_title(&lines).unwrap_or(0);
	let description_end = description_boundary(&lines, title_index);
	let body_start = body_boundary(&lines, description_end);

	let entries = collect_entries(&lines[description_end..], config);
	debug!(entries = entries.len(), "collected toc entries");
	let toc_lines = render_toc(&entries, config);

	let mut result: Vec<&str> = Vec::with_capacity(lines.len() + toc_lines.len() + 2);
	result.extend(&lines[..description_end]);
	result.push("");
	result.extend(toc_lines.iter().map(String::as_str));
	result.push("");
	result.extend(&lines[body_start..]);

	collapse_blank_runs(&result)
}

fn is_blank(line: &str) -> bool {
	line.trim().is_empty()
}

/// Locate the document title: the first line beginning with a single marker
/// and a space. Deeper headers never match since their second character is
/// another marker.
fn find_title(lines: &[&str]) -> Option<usize> {
	lines.iter().position(|line| line.starts_with("# "))
}

/// The description block runs from the line after the title to the first
/// header found after the title; without one it is empty. Trailing blank
/// lines are walked back so the TOC lands directly after the last non-blank
/// description line.
fn description_boundary(lines: &[&str], title_index: usize) -> usize {
	let mut boundary = (title_index + 1..lines.len())
		.find(|&index| is_header_line(lines[index]))
		.unwrap_or(title_index + 1);

	while boundary > 0 && is_blank(lines[boundary - 1]) {
		boundary -= 1;
	}

	boundary
}

/// The replaced region ends at the first header at or after the description
/// boundary, or at end of document. Anything in between is leftover spacing
/// from a removed TOC block and is discarded.
fn body_boundary(lines: &[&str], description_end: usize) -> usize {
	(description_end..lines.len())
		.find(|&index| is_header_line(lines[index]))
		.unwrap_or(lines.len())
}

/// Delete every stale TOC block in a single linear pass and return how many
/// blocks were removed.
///
/// A block starts at a line whose trimmed text equals one of the
/// `recognized` heading lines and runs up to the next header line, or up to
/// a blank line immediately followed by a header (the blank separator is
/// deleted with the block). All deletion ranges are recorded up front and
/// removed together, so the scan never restarts and always terminates.
fn remove_stale_tocs(lines: &mut Vec<&str>, recognized: &[String]) -> usize {
	let mut ranges: Vec<Range<usize>> = Vec::new();
	let mut index = 0;

	while index < lines.len() {
		if recognized.iter().any(|heading| heading == lines[index].trim()) {
			let end = stale_toc_end(lines, index);
			ranges.push(index..end);
			index = end;
		} else {
			index += 1;
		}
	}

	if ranges.is_empty() {
		return 0;
	}

	let mut kept = Vec::with_capacity(lines.len());
	let mut next_range = 0;

	for (index, line) in lines.iter().enumerate() {
		while next_range < ranges.len() && index >= ranges[next_range].end {
			next_range += 1;
		}

		if next_range < ranges.len() && ranges[next_range].contains(&index) {
			continue;
		}

		kept.push(*line);
	}

	*lines = kept;
	ranges.len()
}

fn stale_toc_end(lines: &[&str], start: usize) -> usize {
	let mut index = start + 1;

	while index < lines.len() {
		if is_header_line(lines[index]) {
			return index;
		}

		if is_blank(lines[index])
			&& lines
				.get(index + 1)
				.is_some_and(|line| is_header_line(line))
		{
			return index + 1;
		}

		index += 1;
	}

	lines.len()
}

/// Collapse every run of consecutive blank lines into a single blank line
/// and join the result back into one document string.
fn collapse_blank_runs(lines: &[&str]) -> String {
	let mut kept: Vec<&str> = Vec::with_capacity(lines.len());

	for (index, &line) in lines.iter().enumerate() {
		let next_is_blank = lines.get(index + 1).is_some_and(|next| is_blank(next));
		if is_blank(line) && next_is_blank {
			continue;
		}

		kept.push(line);
	}

	kept.join("\n")
}
