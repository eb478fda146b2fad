use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlagError {
	#[error("Unable to read play flag from: {input}")]
	InvalidFlag { input: String },

	#[error("Unable to read numeric value from: {input}")]
	InvalidNumber { input: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TeamAbbreviationError {
	#[error("Invalid team abbreviation: {0}")]
	InvalidTeamAbbreviation(String),
}

#[derive(Debug, Error)]
pub enum ReadError {
	#[error("Failed to open play-by-play file {path}")]
	Open {
		path: PathBuf,
		#[source]
		source: csv::Error,
	},

	#[error("Failed to read play-by-play header row")]
	Header(#[source] csv::Error),

	#[error(transparent)]
	Csv(#[from] csv::Error),
}

impl FlagError {
	#[must_use]
	pub fn invalid_flag(input: &str) -> Self {
		Self::InvalidFlag { input: input.to_string() }
	}

	#[must_use]
	pub fn invalid_number(input: &str) -> Self {
		Self::InvalidNumber { input: input.to_string() }
	}
}

impl ReadError {
	#[must_use]
	pub fn open(path: impl Into<PathBuf>, source: csv::Error) -> Self {
		Self::Open { path: path.into(), source }
	}
}
