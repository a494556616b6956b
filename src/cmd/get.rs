use std::path::PathBuf;

use cfgval::value::{FieldPath, Kind, Value};

use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::{CliError, emit_json, load_document};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long = "path")]
	pub path_expr: String,
	#[arg(long)]
	pub json: bool,
}

#[derive(serde::Serialize)]
struct GetJson<'a> {
	path: String,
	path_expr: String,
	kind: Kind,
	value: &'a Value,
}

/// Resolve one field path inside a document and print the selected value.
pub fn run(args: Args) -> Result<(), CliError> {
	let Args { file: path, path_expr, json } = args;

	let field_path = FieldPath::parse(&path_expr)?;
	let document = load_document(&path)?;
	let value = document.lookup(&field_path).ok_or_else(|| CliError::PathNotFound { path: path_expr.clone() })?;

	if json {
		return emit_json(&GetJson {
			path: path.display().to_string(),
			path_expr: field_path.to_string(),
			kind: value.kind(),
			value,
		});
	}

	println!("path: {}", path.display());
	println!("path_expr: {field_path}");
	println!("kind: {}", value.kind());
	println!("value:");
	print_value(value, 2, PrintOptions::default());

	Ok(())
}
