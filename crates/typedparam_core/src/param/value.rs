use std::fmt;

use crate::param::ParamType;

/// Payload of one typed parameter, one variant per type tag.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
	/// Signed 32-bit integer.
	Int(i32),
	/// Unsigned 32-bit integer.
	UInt(u32),
	/// Signed 64-bit integer.
	LLong(i64),
	/// Unsigned 64-bit integer.
	ULLong(u64),
	/// 64-bit float.
	Double(f64),
	/// Boolean flag.
	Boolean(bool),
	/// String payload; `None` marks an absent string, distinct from `Some("")`.
	String(Option<Box<str>>),
}

impl ParamValue {
	/// Type tag matching the active variant.
	pub fn param_type(&self) -> ParamType {
		match self {
			Self::Int(_) => ParamType::Int,
			Self::UInt(_) => ParamType::UInt,
			Self::LLong(_) => ParamType::LLong,
			Self::ULLong(_) => ParamType::ULLong,
			Self::Double(_) => ParamType::Double,
			Self::Boolean(_) => ParamType::Boolean,
			Self::String(_) => ParamType::String,
		}
	}

	/// Zero value for a tag. Strings start absent.
	pub fn zero(kind: ParamType) -> Self {
		match kind {
			ParamType::Int => Self::Int(0),
			ParamType::UInt => Self::UInt(0),
			ParamType::LLong => Self::LLong(0),
			ParamType::ULLong => Self::ULLong(0),
			ParamType::Double => Self::Double(0.0),
			ParamType::Boolean => Self::Boolean(false),
			ParamType::String => Self::String(None),
		}
	}

	/// Borrow the string payload, if this is a present string.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(text) => text.as_deref(),
			_ => None,
		}
	}
}

impl fmt::Display for ParamValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int(v) => write!(f, "{v}"),
			Self::UInt(v) => write!(f, "{v}"),
			Self::LLong(v) => write!(f, "{v}"),
			Self::ULLong(v) => write!(f, "{v}"),
			Self::Double(v) => write!(f, "{v}"),
			Self::Boolean(v) => write!(f, "{v}"),
			Self::String(Some(text)) => f.write_str(text),
			Self::String(None) => Ok(()),
		}
	}
}
