use std::path::PathBuf;
use std::process::ExitCode;

use typedparam::param::{ParamType, Result, pick_indices};

use crate::cmd::util::{emit_json, load_params, value_to_json};

#[derive(clap::Args)]
pub struct Args {
	pub params: PathBuf,
	#[arg(long)]
	pub name: String,
	#[arg(long = "type")]
	pub kind: ParamType,
	#[arg(long)]
	pub json: bool,
}

/// Print every entry matching a name and type, in document order.
pub fn run(args: Args) -> Result<ExitCode> {
	let Args { params: path, name, kind, json } = args;

	let params = load_params(&path)?;
	let indices = pick_indices(&params, &name, kind);
	tracing::debug!(matches = indices.len(), "picked {name}:{kind}");

	if json {
		let matches = indices
			.iter()
			.map(|&index| PickMatchJson {
				index,
				value: value_to_json(params[index].value()),
			})
			.collect();
		emit_json(&PickJson {
			name: &name,
			kind: kind.as_str(),
			count: indices.len(),
			matches,
		});
	} else {
		for index in indices {
			println!("{index}\t{}", params[index]);
		}
	}

	Ok(ExitCode::SUCCESS)
}

#[derive(serde::Serialize)]
struct PickJson<'a> {
	name: &'a str,
	#[serde(rename = "type")]
	kind: &'static str,
	count: usize,
	matches: Vec<PickMatchJson>,
}

#[derive(serde::Serialize)]
struct PickMatchJson {
	index: usize,
	value: serde_json::Value,
}
