use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use mdtoc_cli::MdtocCli;
use mdtoc_core::TocConfig;
use mdtoc_core::TocError;
use mdtoc_core::generate_toc;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = MdtocCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	if args.verbose {
		tracing_subscriber::fmt()
			.with_env_filter(
				tracing_subscriber::EnvFilter::try_from_default_env()
					.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mdtoc_core=debug")),
			)
			.with_writer(std::io::stderr)
			.init();
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	if let Err(e) = run(&args) {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<TocError>() {
			Ok(toc_err) => {
				let report: miette::Report = (*toc_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(1);
	}
}

fn run(args: &MdtocCli) -> Result<(), Box<dyn std::error::Error>> {
	let input_file = resolve_input(args)?;
	let config = load_config(args, &input_file);

	let document = std::fs::read_to_string(&input_file)
		.map_err(|e| format!("failed to read input file `{}`: {e}", input_file.display()))?;

	let updated = generate_toc(&document, &config);
	let output_file = args.output.clone().unwrap_or_else(|| input_file.clone());

	if args.dry_run {
		if updated == document {
			println!("{} is already up to date.", output_file.display());
		} else {
			println!("Dry run: would update {}:", output_file.display());
			print_diff(&document, &updated);
		}
		return Ok(());
	}

	if updated == document && output_file == input_file {
		println!("{} is already up to date.", input_file.display());
		return Ok(());
	}

	std::fs::write(&output_file, &updated)
		.map_err(|e| format!("failed to write output file `{}`: {e}", output_file.display()))?;
	println!("Table of Contents generated in {}", output_file.display());

	Ok(())
}

/// Resolve the input path: the positional argument if given, otherwise a
/// `README.md` (or `readme.md`) in the current directory.
fn resolve_input(args: &MdtocCli) -> Result<PathBuf, Box<dyn std::error::Error>> {
	if let Some(input) = &args.input_file {
		if !input.is_file() {
			return Err(format!("input file `{}` not found", input.display()).into());
		}
		return Ok(input.clone());
	}

	let current_dir = std::env::current_dir()?;
	for candidate in ["README.md", "readme.md"] {
		let path = current_dir.join(candidate);
		if path.is_file() {
			return Ok(path);
		}
	}

	Err("no README.md found in the current directory and no input file specified".into())
}

/// Load configuration with the config layer's failure semantics: a missing
/// file is a warning, a parse failure is a warning, and default settings are
/// retained in both cases. Generation always proceeds.
fn load_config(args: &MdtocCli, input_file: &Path) -> TocConfig {
	if let Some(config_path) = &args.config {
		if !config_path.is_file() {
			eprintln!(
				"{} configuration file {} not found, using default settings",
				colored!("warning:", yellow),
				config_path.display()
			);
			return TocConfig::default();
		}

		return match TocConfig::load_file(config_path) {
			Ok(config) => config,
			Err(e) => {
				eprintln!("{} {e}, using default settings", colored!("warning:", yellow));
				TocConfig::default()
			}
		};
	}

	let search_dir = input_file
		.parent()
		.filter(|parent| !parent.as_os_str().is_empty())
		.map_or_else(|| PathBuf::from("."), Path::to_path_buf);

	match TocConfig::load(&search_dir) {
		Ok(Some(config)) => config,
		Ok(None) => TocConfig::default(),
		Err(e) => {
			eprintln!("{} {e}, using default settings", colored!("warning:", yellow));
			TocConfig::default()
		}
	}
}

/// Print a unified diff between the current and updated document, colorized.
fn print_diff(current: &str, updated: &str) {
	let diff = TextDiff::from_lines(current, updated);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}
