use std::collections::BTreeSet;

use crate::IndentStyle;
use crate::TocConfig;

/// A title, a short description, and two sections at the default level.
pub const SIMPLE_DOC: &str = "# Title\n\nIntro text.\n\n## Section A\n\n## Section B\n";

/// A document that already carries a generated TOC listing a section that no
/// longer exists.
pub const STALE_TOC_DOC: &str =
	"# Title\n\nIntro.\n\n## Table of Contents\n1. [Old](#old)\n\n## Real\n\nBody.\n";

/// Two levels of sections for exercising nested collection and numbering.
pub const NESTED_DOC: &str =
	"# Guide\n\nOverview.\n\n## Install\n\n### Linux\n\n### Macos\n\n## Usage\n\n### Basics\n";

pub fn config_with_levels(levels: &[u8]) -> TocConfig {
	TocConfig {
		header_levels: levels.iter().copied().collect::<BTreeSet<_>>(),
		..TocConfig::default()
	}
}

pub fn nested_config(levels: &[u8]) -> TocConfig {
	TocConfig {
		indent_style: IndentStyle::Nested,
		..config_with_levels(levels)
	}
}

pub fn custom_title_config(title: &str) -> TocConfig {
	TocConfig {
		toc_title: title.to_string(),
		..TocConfig::default()
	}
}
