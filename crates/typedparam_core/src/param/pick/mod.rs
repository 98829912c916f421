use crate::param::{ParamType, ParamValue, TypedParam};

/// Borrow every entry matching both `name` and `kind`, in array order.
///
/// No match yields an empty vector.
pub fn pick<'a>(params: &'a [TypedParam], name: &str, kind: ParamType) -> Vec<&'a TypedParam> {
	params.iter().filter(|param| param.is(name, kind)).collect()
}

/// Positions of every entry matching both `name` and `kind`, ascending.
pub fn pick_indices(params: &[TypedParam], name: &str, kind: ParamType) -> Vec<usize> {
	params
		.iter()
		.enumerate()
		.filter(|(_, param)| param.is(name, kind))
		.map(|(idx, _)| idx)
		.collect()
}

/// Borrow the payload of every string entry named `name`, in array order.
///
/// Absent strings stay in place as `None`; the end of the vector ends the sequence.
pub fn pick_strings<'a>(params: &'a [TypedParam], name: &str) -> Vec<Option<&'a str>> {
	pick(params, name, ParamType::String)
		.into_iter()
		.map(|param| match param.value() {
			ParamValue::String(text) => text.as_deref(),
			_ => None,
		})
		.collect()
}
