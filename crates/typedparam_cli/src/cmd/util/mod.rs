use std::path::Path;
use std::process::ExitCode;

use typedparam::param::{ParamError, ParamType, ParamValue, Result, SchemaEntry, TypedParam};

/// Exit status for a well-formed request whose answer is negative.
const EXIT_NEGATIVE: u8 = 2;

/// Exit code for a negative answer.
pub(crate) fn negative() -> ExitCode {
	ExitCode::from(EXIT_NEGATIVE)
}

#[derive(serde::Deserialize)]
struct ParamDoc {
	name: String,
	#[serde(rename = "type")]
	kind: String,
	#[serde(default)]
	value: serde_json::Value,
}

#[derive(serde::Deserialize)]
struct SchemaDoc {
	name: String,
	#[serde(rename = "type")]
	kind: String,
	#[serde(default)]
	multiple: bool,
}

/// Load a params document: a JSON array of `{name, type, value}` objects.
pub(crate) fn load_params(path: &Path) -> Result<Vec<TypedParam>> {
	let docs: Vec<ParamDoc> = read_json(path)?;
	docs.into_iter().map(param_from_doc).collect()
}

/// Load a schema document: a JSON array of `{name, type, multiple}` objects.
pub(crate) fn load_schema(path: &Path) -> Result<Vec<SchemaEntry<'static>>> {
	let docs: Vec<SchemaDoc> = read_json(path)?;
	docs.into_iter()
		.map(|doc| -> Result<SchemaEntry<'static>> { Ok(SchemaEntry::new(doc.name, doc.kind.parse()?, doc.multiple)) })
		.collect()
}

/// Parse a `name:type[:multiple]` schema field flag.
pub(crate) fn parse_field_spec(spec: &str) -> Result<SchemaEntry<'static>> {
	let invalid = || ParamError::InvalidFieldSpec { spec: spec.to_owned() };

	let mut parts = spec.split(':');
	let name = parts.next().filter(|name| !name.is_empty()).ok_or_else(invalid)?;
	let kind: ParamType = parts.next().ok_or_else(invalid)?.parse()?;
	let multiple = match parts.next() {
		None => false,
		Some("multiple") => true,
		Some(_) => return Err(invalid()),
	};
	if parts.next().is_some() {
		return Err(invalid());
	}

	Ok(SchemaEntry::new(name.to_owned(), kind, multiple))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
	let text = std::fs::read_to_string(path)?;
	serde_json::from_str(&text).map_err(|err| ParamError::InvalidDocument {
		path: path.display().to_string(),
		reason: err.to_string(),
	})
}

fn param_from_doc(doc: ParamDoc) -> Result<TypedParam> {
	let kind: ParamType = doc.kind.parse()?;
	let value = value_from_json(&doc.value, kind).ok_or_else(|| ParamError::InvalidValue {
		name: doc.name.clone(),
		kind,
	})?;
	TypedParam::new(doc.name, value)
}

fn value_from_json(value: &serde_json::Value, kind: ParamType) -> Option<ParamValue> {
	if value.is_null() {
		return Some(ParamValue::zero(kind));
	}

	let out = match kind {
		ParamType::Int => ParamValue::Int(i32::try_from(value.as_i64()?).ok()?),
		ParamType::UInt => ParamValue::UInt(u32::try_from(value.as_u64()?).ok()?),
		ParamType::LLong => ParamValue::LLong(value.as_i64()?),
		ParamType::ULLong => ParamValue::ULLong(value.as_u64()?),
		ParamType::Double => ParamValue::Double(value.as_f64()?),
		ParamType::Boolean => ParamValue::Boolean(value.as_bool()?),
		ParamType::String => ParamValue::String(Some(value.as_str()?.into())),
	};
	Some(out)
}

/// Render a payload for JSON output.
pub(crate) fn value_to_json(value: &ParamValue) -> serde_json::Value {
	match value {
		ParamValue::Int(v) => serde_json::json!(v),
		ParamValue::UInt(v) => serde_json::json!(v),
		ParamValue::LLong(v) => serde_json::json!(v),
		ParamValue::ULLong(v) => serde_json::json!(v),
		ParamValue::Double(v) => serde_json::json!(v),
		ParamValue::Boolean(v) => serde_json::json!(v),
		ParamValue::String(v) => serde_json::json!(v.as_deref()),
	}
}

/// Print a payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => tracing::error!("failed to encode json output: {err}"),
	}
}
