/// The marker character that prefixes heading lines.
pub const HEADER_MARKER: char = '#';

/// A raw header line: its nesting level and display text.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct HeaderLine<'a> {
	/// Number of leading marker characters (1 = document title, 2 = first
	/// sub-level, and so on).
	pub level: usize,
	/// The text after the markers and the separating space.
	pub text: &'a str,
}

/// Returns `true` when the line begins with one or more markers followed by
/// a space. This is the boundary test used when walking a document — it does
/// not require any text after the space.
pub fn is_header_line(line: &str) -> bool {
	let marker_count = marker_count(line);
	marker_count > 0 && line[marker_count..].starts_with(' ')
}

/// Parse a line as a header: one or more `#` markers, a space, then
/// non-empty text. Returns `None` for anything else.
pub fn parse_header(line: &str) -> Option<HeaderLine<'_>> {
	let marker_count = marker_count(line);
	if marker_count == 0 {
		return None;
	}

	let text = line[marker_count..].strip_prefix(' ')?;
	if text.trim().is_empty() {
		return None;
	}

	Some(HeaderLine {
		level: marker_count,
		text,
	})
}

fn marker_count(line: &str) -> usize {
	line.chars().take_while(|&c| c == HEADER_MARKER).count()
}

/// Convert header text to a GitHub-style anchor slug: lowercase, drop every
/// character that is not alphanumeric, underscore, whitespace, or hyphen,
/// then replace each whitespace run with a single hyphen.
///
/// Dropped punctuation does not break a whitespace run, so `"API & Usage!"`
/// becomes `api-usage`, matching the anchor GitHub generates for the
/// heading.
pub fn slugify(text: &str) -> String {
	let mut slug = String::with_capacity(text.len());
	let mut in_whitespace = false;

	for ch in text.to_lowercase().chars() {
		if ch.is_whitespace() {
			in_whitespace = true;
		} else if ch.is_alphanumeric() || ch == '_' || ch == '-' {
			if in_whitespace {
				slug.push('-');
				in_whitespace = false;
			}

			slug.push(ch);
		}
	}

	if in_whitespace {
		slug.push('-');
	}

	slug
}
