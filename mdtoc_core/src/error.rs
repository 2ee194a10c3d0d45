use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum TocError {
	#[error(transparent)]
	#[diagnostic(code(mdtoc::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to read config file `{path}`: {reason}")]
	#[diagnostic(
		code(mdtoc::config_read),
		help("pass a readable YAML file to `--config`, or omit the flag to use defaults")
	)]
	ConfigRead { path: String, reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(mdtoc::config_parse),
		help(
			"check that the config is valid YAML with `header_levels`, `toc_title`, and \
			 `indent_style` keys"
		)
	)]
	ConfigParse(String),
}

pub type TocResult<T> = Result<T, TocError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
