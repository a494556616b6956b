use std::path::PathBuf;

use cfgval::value::{Kind, Value};

use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::{CliError, emit_json, load_document};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long = "max-array")]
	pub max_array: Option<usize>,
	#[arg(long)]
	pub compact: bool,
}

#[derive(serde::Serialize)]
struct ShowJson<'a> {
	path: String,
	kind: Kind,
	entries: Option<usize>,
	value: &'a Value,
}

/// Load a document and print its whole value tree.
pub fn run(args: Args) -> Result<(), CliError> {
	let Args {
		file: path,
		json,
		max_depth,
		max_array,
		compact,
	} = args;

	let value = load_document(&path)?;

	if json {
		return emit_json(&ShowJson {
			path: path.display().to_string(),
			kind: value.kind(),
			entries: value.len(),
			value: &value,
		});
	}

	let mut print = if compact { PrintOptions::compact() } else { PrintOptions::default() };
	if let Some(max_depth) = max_depth {
		print.max_print_depth = max_depth;
	}
	if let Some(max_array) = max_array {
		print.max_array_items = max_array;
	}

	println!("path: {}", path.display());
	println!("kind: {}", value.kind());
	if let Some(entries) = value.len() {
		println!("entries: {entries}");
	}
	println!("value:");
	print_value(&value, 2, print);

	Ok(())
}
