use std::path::PathBuf;
use std::process::ExitCode;

use typedparam::param::{Result, pick_strings};

use crate::cmd::util::{emit_json, load_params};

#[derive(clap::Args)]
pub struct Args {
	pub params: PathBuf,
	#[arg(long)]
	pub name: String,
	#[arg(long)]
	pub json: bool,
}

/// Print the string values stored under a name, keeping absent values.
pub fn run(args: Args) -> Result<ExitCode> {
	let Args { params: path, name, json } = args;

	let params = load_params(&path)?;
	let values = pick_strings(&params, &name);

	if json {
		emit_json(&PickStringsJson {
			name: &name,
			count: values.len(),
			values: &values,
		});
	} else {
		for value in &values {
			println!("{}", value.unwrap_or("<absent>"));
		}
	}

	Ok(ExitCode::SUCCESS)
}

#[derive(serde::Serialize)]
struct PickStringsJson<'a> {
	name: &'a str,
	count: usize,
	values: &'a [Option<&'a str>],
}
