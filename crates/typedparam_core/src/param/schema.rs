use std::borrow::Cow;

use crate::param::ParamType;

/// One expected `(name, type, multiple)` triple of a validation schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry<'a> {
	/// Accepted entry name.
	pub name: Cow<'a, str>,
	/// Tag every entry with this name must carry.
	pub kind: ParamType,
	/// Whether more than one entry may share this name.
	pub multiple: bool,
}

impl<'a> SchemaEntry<'a> {
	/// Schema entry with explicit repeat policy.
	pub fn new(name: impl Into<Cow<'a, str>>, kind: ParamType, multiple: bool) -> Self {
		Self {
			name: name.into(),
			kind,
			multiple,
		}
	}

	/// Name that may appear at most once.
	pub fn single(name: impl Into<Cow<'a, str>>, kind: ParamType) -> Self {
		Self::new(name, kind, false)
	}

	/// Name that may repeat any number of times.
	pub fn multiple(name: impl Into<Cow<'a, str>>, kind: ParamType) -> Self {
		Self::new(name, kind, true)
	}
}
