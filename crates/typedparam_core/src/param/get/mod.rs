use crate::param::last_error::raise;
use crate::param::{ParamError, ParamType, ParamValue, Result, TypedParam};

/// First entry named `name`, whatever its type.
pub fn get<'a>(params: &'a [TypedParam], name: &str) -> Option<&'a TypedParam> {
	params.iter().find(|param| param.name() == name)
}

/// First entry named `name`, required to carry `kind`.
///
/// A missing name is `Ok(None)`; a first match with another tag is reported as [`ParamError::InvalidType`].
pub fn get_as<'a>(params: &'a [TypedParam], name: &str, kind: ParamType) -> Result<Option<&'a TypedParam>> {
	let Some(param) = get(params, name) else {
		return Ok(None);
	};

	if param.param_type() != kind {
		return Err(raise(ParamError::InvalidType {
			name: name.to_owned(),
			actual: param.param_type(),
			expected: kind,
		}));
	}

	Ok(Some(param))
}

fn get_typed<'a, T>(params: &'a [TypedParam], name: &str, kind: ParamType, extract: impl FnOnce(&'a ParamValue) -> Option<T>) -> Result<Option<T>> {
	Ok(get_as(params, name, kind)?.and_then(|param| extract(param.value())))
}

/// First `name` entry as a signed 32-bit value.
pub fn get_int(params: &[TypedParam], name: &str) -> Result<Option<i32>> {
	get_typed(params, name, ParamType::Int, |value| match value {
		ParamValue::Int(v) => Some(*v),
		_ => None,
	})
}

/// First `name` entry as an unsigned 32-bit value.
pub fn get_uint(params: &[TypedParam], name: &str) -> Result<Option<u32>> {
	get_typed(params, name, ParamType::UInt, |value| match value {
		ParamValue::UInt(v) => Some(*v),
		_ => None,
	})
}

/// First `name` entry as a signed 64-bit value.
pub fn get_llong(params: &[TypedParam], name: &str) -> Result<Option<i64>> {
	get_typed(params, name, ParamType::LLong, |value| match value {
		ParamValue::LLong(v) => Some(*v),
		_ => None,
	})
}

/// First `name` entry as an unsigned 64-bit value.
pub fn get_ullong(params: &[TypedParam], name: &str) -> Result<Option<u64>> {
	get_typed(params, name, ParamType::ULLong, |value| match value {
		ParamValue::ULLong(v) => Some(*v),
		_ => None,
	})
}

/// First `name` entry as a float.
pub fn get_double(params: &[TypedParam], name: &str) -> Result<Option<f64>> {
	get_typed(params, name, ParamType::Double, |value| match value {
		ParamValue::Double(v) => Some(*v),
		_ => None,
	})
}

/// First `name` entry as a boolean.
pub fn get_boolean(params: &[TypedParam], name: &str) -> Result<Option<bool>> {
	get_typed(params, name, ParamType::Boolean, |value| match value {
		ParamValue::Boolean(v) => Some(*v),
		_ => None,
	})
}

/// First `name` entry as a string. An absent string reads as `None`, same as a missing entry.
pub fn get_string<'a>(params: &'a [TypedParam], name: &str) -> Result<Option<&'a str>> {
	get_typed(params, name, ParamType::String, ParamValue::as_str)
}
