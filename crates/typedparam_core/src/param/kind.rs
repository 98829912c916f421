use std::fmt;
use std::str::FromStr;

use crate::param::ParamError;

/// Closed set of type tags an entry may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
	/// Signed 32-bit integer.
	Int,
	/// Unsigned 32-bit integer.
	UInt,
	/// Signed 64-bit integer.
	LLong,
	/// Unsigned 64-bit integer.
	ULLong,
	/// 64-bit float.
	Double,
	/// Boolean flag.
	Boolean,
	/// Optional string.
	String,
}

impl ParamType {
	/// Every tag, in declaration order.
	pub const ALL: [ParamType; 7] = [
		Self::Int,
		Self::UInt,
		Self::LLong,
		Self::ULLong,
		Self::Double,
		Self::Boolean,
		Self::String,
	];

	/// Render tag as its canonical lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Int => "int",
			Self::UInt => "uint",
			Self::LLong => "llong",
			Self::ULLong => "ullong",
			Self::Double => "double",
			Self::Boolean => "boolean",
			Self::String => "string",
		}
	}

	/// Parse a canonical label back into a tag.
	pub fn from_label(label: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.as_str() == label)
	}
}

impl fmt::Display for ParamType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ParamType {
	type Err = ParamError;

	fn from_str(label: &str) -> Result<Self, Self::Err> {
		Self::from_label(label).ok_or_else(|| ParamError::UnknownType { label: label.to_owned() })
	}
}
