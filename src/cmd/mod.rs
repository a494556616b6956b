use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use cfgval::value::{Value, ValueError};
use thiserror::Error;

/// Field path lookup command.
pub mod get;
/// Human-readable value tree rendering.
pub mod print;
/// Whole-document inspection command.
pub mod show;

/// Command-level failures.
#[derive(Debug, Error)]
pub enum CliError {
	/// Reading the document failed.
	#[error("cannot read {path}: {source}")]
	Io {
		/// Document path.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},
	/// Parsing the document or rendering JSON output failed.
	#[error(transparent)]
	Json(#[from] serde_json::Error),
	/// Value model failure, e.g. an invalid field path.
	#[error(transparent)]
	Value(#[from] ValueError),
	/// Field path resolved to nothing.
	#[error("path not found: {path}")]
	PathNotFound {
		/// Path expression as given.
		path: String,
	},
}

/// Read a JSON document into a value tree.
pub fn load_document(path: &Path) -> Result<Value, CliError> {
	let file = File::open(path).map_err(|source| CliError::Io { path: path.to_owned(), source })?;
	let json: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;
	tracing::debug!(path = %path.display(), "loaded document");
	Ok(Value::from(json))
}

pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<(), CliError> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}
