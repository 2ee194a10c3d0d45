mod common;

use mdtoc_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;
use similar_asserts::assert_eq;

#[test]
fn generates_toc_in_place() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let readme = tmp.path().join("README.md");
	std::fs::write(&readme, "# Title\n\nIntro.\n\n## First\n\n## Second\n")?;

	let mut cmd = common::mdtoc_cmd();
	cmd.arg(&readme)
		.assert()
		.success()
		.stdout(predicates::str::contains("Table of Contents generated in"));

	let content = std::fs::read_to_string(&readme)?;
	assert_eq!(
		content,
		concat!(
			"# Title\n",
			"\n",
			"Intro.\n",
			"\n",
			"## Table of Contents\n",
			"1. [First](#first)\n",
			"2. [Second](#second)\n",
			"\n",
			"## First\n",
			"\n",
			"## Second\n",
		)
	);

	Ok(())
}

#[test]
fn second_run_reports_up_to_date() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let readme = tmp.path().join("README.md");
	std::fs::write(&readme, "# Title\n\n## First\n")?;

	let mut cmd = common::mdtoc_cmd();
	cmd.arg(&readme).assert().success();
	let after_first = std::fs::read_to_string(&readme)?;

	let mut cmd = common::mdtoc_cmd();
	cmd.arg(&readme)
		.assert()
		.success()
		.stdout(predicates::str::contains("already up to date"));

	let after_second = std::fs::read_to_string(&readme)?;
	assert_eq!(after_second, after_first);

	Ok(())
}

#[test]
fn replaces_stale_toc() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let readme = tmp.path().join("README.md");
	std::fs::write(
		&readme,
		"# Title\n\n## Table of Contents\n1. [Old](#old)\n\n## Real\n",
	)?;

	let mut cmd = common::mdtoc_cmd();
	cmd.arg(&readme).assert().success();

	let content = std::fs::read_to_string(&readme)?;
	assert!(content.contains("1. [Real](#real)"));
	assert!(!content.contains("[Old](#old)"));

	Ok(())
}

#[test]
fn writes_to_output_file_and_leaves_input_untouched() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("input.md");
	let output = tmp.path().join("output.md");
	let original = "# Title\n\n## Section\n";
	std::fs::write(&input, original)?;

	let mut cmd = common::mdtoc_cmd();
	cmd.arg(&input).arg("--output").arg(&output).assert().success();

	assert_eq!(std::fs::read_to_string(&input)?, original);
	let written = std::fs::read_to_string(&output)?;
	assert!(written.contains("## Table of Contents"));
	assert!(written.contains("1. [Section](#section)"));

	Ok(())
}

#[test]
fn defaults_to_readme_in_current_directory() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("README.md"),
		"# Project\n\n## Install\n\n## Usage\n",
	)?;

	let mut cmd = common::mdtoc_cmd();
	cmd.current_dir(tmp.path()).assert().success();

	let content = std::fs::read_to_string(tmp.path().join("README.md"))?;
	assert!(content.contains("1. [Install](#install)"));
	assert!(content.contains("2. [Usage](#usage)"));

	Ok(())
}

#[test]
fn fails_without_input_file_or_readme() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let mut cmd = common::mdtoc_cmd();
	cmd.current_dir(tmp.path())
		.assert()
		.failure()
		.stderr(predicates::str::contains("no README.md found"));

	Ok(())
}

#[test]
fn fails_when_input_file_is_missing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let mut cmd = common::mdtoc_cmd();
	cmd.arg(tmp.path().join("missing.md"))
		.assert()
		.failure()
		.stderr(predicates::str::contains("not found"));

	Ok(())
}

#[test]
fn dry_run_leaves_the_file_untouched() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let readme = tmp.path().join("README.md");
	let original = "# Title\n\n## Section\n";
	std::fs::write(&readme, original)?;

	let mut cmd = common::mdtoc_cmd();
	cmd.arg(&readme)
		.arg("--dry-run")
		.assert()
		.success()
		.stdout(
			predicates::str::contains("Dry run: would update")
				.and(predicates::str::contains("generated in").not()),
		);

	assert_eq!(std::fs::read_to_string(&readme)?, original);

	Ok(())
}
