#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use log::LevelFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "cfgval", about = "Configuration value inspection tools")]
struct Cli {
	/// Log decoding details to stderr.
	#[arg(long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print a whole JSON document as a value tree.
	Show(cmd::show::Args),
	/// Print the value selected by a field path.
	Get(cmd::get::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> Result<(), cmd::CliError> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	match cli.command {
		Commands::Show(args) => cmd::show::run(args),
		Commands::Get(args) => cmd::get::run(args),
	}
}

fn init_logging(verbose: bool) {
	let mut builder = pretty_env_logger::formatted_builder();
	builder.filter_level(if verbose { LevelFilter::Debug } else { LevelFilter::Warn });
	if let Ok(filters) = std::env::var("RUST_LOG") {
		builder.parse_filters(&filters);
	}
	let _ = builder.try_init();
}
