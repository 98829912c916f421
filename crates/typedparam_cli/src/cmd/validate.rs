use std::path::PathBuf;
use std::process::ExitCode;

use typedparam::param::{LastError, Result, validate};

use crate::cmd::util::{emit_json, load_params, load_schema, negative, parse_field_spec};

#[derive(clap::Args)]
pub struct Args {
	pub params: PathBuf,
	/// JSON schema document, applied before any `--field` entries.
	#[arg(long)]
	pub schema: Option<PathBuf>,
	/// Inline schema entry as `name:type[:multiple]`.
	#[arg(long = "field")]
	pub fields: Vec<String>,
	#[arg(long)]
	pub json: bool,
}

/// Validate a params document and report the first violation.
pub fn run(args: Args) -> Result<ExitCode> {
	let Args { params: path, schema, fields, json } = args;

	let params = load_params(&path)?;
	let mut entries = match schema {
		Some(schema_path) => load_schema(&schema_path)?,
		None => Vec::new(),
	};
	for spec in &fields {
		entries.push(parse_field_spec(spec)?);
	}

	tracing::info!(params = params.len(), schema = entries.len(), "validating {}", path.display());
	let failure = validate(&params, &entries).err().map(|err| LastError::from(&err));

	if json {
		emit_json(&ValidateJson {
			valid: failure.is_none(),
			code: failure.as_ref().map(|item| item.code.as_str()),
			message: failure.as_ref().map(|item| item.message.as_str()),
		});
	} else {
		match &failure {
			None => println!("ok"),
			Some(item) => println!("{}", item.message),
		}
	}

	Ok(if failure.is_none() { ExitCode::SUCCESS } else { negative() })
}

#[derive(serde::Serialize)]
struct ValidateJson<'a> {
	valid: bool,
	code: Option<&'a str>,
	message: Option<&'a str>,
}
