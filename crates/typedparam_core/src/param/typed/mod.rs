use std::fmt;

use crate::param::last_error::raise;
use crate::param::{ParamError, ParamType, ParamValue, Result};

/// Fixed field length for entry names, counting one byte for the terminator.
pub const FIELD_LENGTH: usize = 80;

/// One named, typed entry of a parameter array.
///
/// The type tag is derived from the value, so the two cannot disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedParam {
	name: Box<str>,
	value: ParamValue,
}

impl TypedParam {
	/// Build an entry, rejecting names that do not fit [`FIELD_LENGTH`].
	pub fn new(name: impl Into<Box<str>>, value: ParamValue) -> Result<Self> {
		let name = name.into();
		if name.len() >= FIELD_LENGTH {
			return Err(raise(ParamError::FieldNameTooLong { name: name.into_string() }));
		}
		Ok(Self { name, value })
	}

	/// Build an entry holding the zero value of `kind`.
	pub fn zero(name: impl Into<Box<str>>, kind: ParamType) -> Result<Self> {
		Self::new(name, ParamValue::zero(kind))
	}

	/// Signed 32-bit entry.
	pub fn int(name: impl Into<Box<str>>, value: i32) -> Result<Self> {
		Self::new(name, ParamValue::Int(value))
	}

	/// Unsigned 32-bit entry.
	pub fn uint(name: impl Into<Box<str>>, value: u32) -> Result<Self> {
		Self::new(name, ParamValue::UInt(value))
	}

	/// Signed 64-bit entry.
	pub fn llong(name: impl Into<Box<str>>, value: i64) -> Result<Self> {
		Self::new(name, ParamValue::LLong(value))
	}

	/// Unsigned 64-bit entry.
	pub fn ullong(name: impl Into<Box<str>>, value: u64) -> Result<Self> {
		Self::new(name, ParamValue::ULLong(value))
	}

	/// Float entry.
	pub fn double(name: impl Into<Box<str>>, value: f64) -> Result<Self> {
		Self::new(name, ParamValue::Double(value))
	}

	/// Boolean entry.
	pub fn boolean(name: impl Into<Box<str>>, value: bool) -> Result<Self> {
		Self::new(name, ParamValue::Boolean(value))
	}

	/// Present string entry.
	pub fn string(name: impl Into<Box<str>>, value: impl Into<Box<str>>) -> Result<Self> {
		Self::new(name, ParamValue::String(Some(value.into())))
	}

	/// String entry with an absent value.
	pub fn null_string(name: impl Into<Box<str>>) -> Result<Self> {
		Self::new(name, ParamValue::String(None))
	}

	/// Entry name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Entry payload.
	pub fn value(&self) -> &ParamValue {
		&self.value
	}

	/// Entry type tag.
	pub fn param_type(&self) -> ParamType {
		self.value.param_type()
	}

	pub(crate) fn is(&self, name: &str, kind: ParamType) -> bool {
		self.param_type() == kind && &*self.name == name
	}
}

impl fmt::Display for TypedParam {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}={}", self.name, self.value)
	}
}
