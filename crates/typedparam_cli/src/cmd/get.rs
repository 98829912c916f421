use std::path::PathBuf;
use std::process::ExitCode;

use typedparam::param::{ParamType, Result, get, get_as};

use crate::cmd::util::{emit_json, load_params, negative, value_to_json};

#[derive(clap::Args)]
pub struct Args {
	pub params: PathBuf,
	#[arg(long)]
	pub name: String,
	/// Require the first entry to carry this type.
	#[arg(long = "type")]
	pub kind: Option<ParamType>,
	#[arg(long)]
	pub json: bool,
}

/// Print the first entry stored under a name.
pub fn run(args: Args) -> Result<ExitCode> {
	let Args { params: path, name, kind, json } = args;

	let params = load_params(&path)?;
	let found = match kind {
		Some(kind) => get_as(&params, &name, kind)?,
		None => get(&params, &name),
	};

	let Some(param) = found else {
		eprintln!("parameter '{name}' not found");
		return Ok(negative());
	};

	if json {
		emit_json(&GetJson {
			name: param.name(),
			kind: param.param_type().as_str(),
			value: value_to_json(param.value()),
		});
	} else {
		println!("{param}\t{}", param.param_type());
	}

	Ok(ExitCode::SUCCESS)
}

#[derive(serde::Serialize)]
struct GetJson<'a> {
	name: &'a str,
	#[serde(rename = "type")]
	kind: &'static str,
	value: serde_json::Value,
}
