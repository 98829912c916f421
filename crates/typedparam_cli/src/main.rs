#![allow(missing_docs)]

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "typedparam", about = "Typed parameter array validation and selection tools")]
struct Cli {
	/// Enable verbose logging on stderr. Repeat for more (-v, -vv, -vvv).
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Validate a params document against a schema.
	Validate(cmd::validate::Args),
	/// List entries matching a name and type.
	Pick(cmd::pick::Args),
	/// List string values for a name.
	PickStrings(cmd::pick_strings::Args),
	/// Show the first entry for a name.
	Get(cmd::get::Args),
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	let filter = match cli.verbose {
		0 => EnvFilter::new("warn"),
		1 => EnvFilter::new("info"),
		2 => EnvFilter::new("debug"),
		_ => EnvFilter::new("trace"),
	};
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();

	match run(cli.command) {
		Ok(code) => code,
		Err(err) => {
			eprintln!("error: {err}");
			ExitCode::FAILURE
		}
	}
}

fn run(command: Commands) -> typedparam::param::Result<ExitCode> {
	match command {
		Commands::Validate(args) => cmd::validate::run(args),
		Commands::Pick(args) => cmd::pick::run(args),
		Commands::PickStrings(args) => cmd::pick_strings::run(args),
		Commands::Get(args) => cmd::get::run(args),
	}
}
