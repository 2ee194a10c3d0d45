use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate a linked table of contents for markdown files.",
	long_about = "mdtoc scans a markdown document's section headers and inserts a navigable table \
	              of contents, replacing any previously generated one. Running it again after the \
	              document changes refreshes the TOC in place.\n\nQuick start:\n  mdtoc            \
	              Update README.md in the current directory\n  mdtoc docs/guide.md    Update a \
	              specific file\n  mdtoc -c mdtoc.yaml    Use a custom configuration\n  mdtoc \
	              --dry-run        Preview the changes without writing"
)]
pub struct MdtocCli {
	/// Input markdown file. Defaults to `README.md` (or `readme.md`) in the
	/// current directory.
	pub input_file: Option<PathBuf>,

	/// Path to a YAML configuration file. When omitted, `mdtoc.yaml`,
	/// `.mdtoc.yaml`, and `.config/mdtoc.yaml` are probed next to the input
	/// file. A missing or unparsable config is a warning, not an error —
	/// generation proceeds with default settings.
	#[arg(long, short)]
	pub config: Option<PathBuf>,

	/// Output markdown file. Defaults to rewriting the input file in place.
	#[arg(long, short)]
	pub output: Option<PathBuf>,

	/// Show a unified diff of the changes without writing anything.
	#[arg(long, default_value_t = false)]
	pub dry_run: bool,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}
