use crate::param::{ErrorCode, ParamError, ParamType, SchemaEntry, TypedParam, check, last_error, reset_last_error, validate};

fn schema(foobar_multiple: bool) -> [SchemaEntry<'static>; 3] {
	[
		SchemaEntry::new("foobar", ParamType::String, foobar_multiple),
		SchemaEntry::single("foo", ParamType::Int),
		SchemaEntry::single("bar", ParamType::UInt),
	]
}

fn param(name: &str, kind: ParamType) -> TypedParam {
	TypedParam::zero(name, kind).expect("entry builds")
}

#[test]
fn empty_array_is_valid() {
	validate(&[], &schema(false)).expect("no entries to reject");
}

#[test]
fn unknown_name_wins_over_later_duplicate() {
	let params = [
		param("foo", ParamType::Int),
		param("nope", ParamType::Int),
		param("foo", ParamType::Int),
	];

	let err = validate(&params, &schema(false)).expect_err("unknown name rejected");
	assert!(matches!(&err, ParamError::UnsupportedParameter { name } if name == "nope"));
}

#[test]
fn duplicate_before_unknown_name_reports_duplicate() {
	let params = [
		param("foo", ParamType::Int),
		param("foo", ParamType::Int),
		param("nope", ParamType::Int),
	];

	let err = validate(&params, &schema(false)).expect_err("duplicate rejected");
	assert!(matches!(&err, ParamError::DuplicateParameter { name } if name == "foo"));
}

#[test]
fn repeated_entries_are_type_checked() {
	let params = [param("foobar", ParamType::String), param("foobar", ParamType::Boolean)];

	let err = validate(&params, &schema(true)).expect_err("second entry has wrong tag");
	assert!(matches!(
		&err,
		ParamError::InvalidType {
			actual: ParamType::Boolean,
			expected: ParamType::String,
			..
		}
	));
	assert_eq!(err.to_string(), "invalid argument: invalid type 'boolean' for parameter 'foobar', expected 'string'");
}

#[test]
fn type_mismatch_on_repeat_wins_over_duplicate() {
	let params = [param("foo", ParamType::Int), param("foo", ParamType::LLong)];

	let err = validate(&params, &schema(false)).expect_err("repeat rejected");
	assert!(matches!(&err, ParamError::InvalidType { .. }));
}

#[test]
fn multiple_names_repeat_without_limit() {
	let params: Vec<_> = (0..64).map(|_| param("foobar", ParamType::String)).collect();
	validate(&params, &schema(true)).expect("repeats allowed");
}

#[test]
fn first_schema_entry_with_a_name_wins() {
	let schema = [SchemaEntry::single("x", ParamType::Int), SchemaEntry::multiple("x", ParamType::UInt)];
	let err = validate(&[param("x", ParamType::UInt)], &schema).expect_err("first declaration applies");
	assert!(matches!(&err, ParamError::InvalidType { expected: ParamType::Int, .. }));
}

#[test]
fn failure_is_recorded_and_success_leaves_it() {
	reset_last_error();
	validate(&[param("f", ParamType::Int)], &schema(false)).expect_err("unknown name rejected");

	let recorded = last_error().expect("failure recorded");
	assert_eq!(recorded.code, ErrorCode::ArgumentUnsupported);
	assert_eq!(recorded.message, "argument unsupported: parameter 'f' not supported");

	validate(&[param("foo", ParamType::Int)], &schema(false)).expect("valid array");
	assert_eq!(last_error(), Some(recorded));
}

#[test]
fn check_accepts_listed_names_only() {
	let params = [param("foo", ParamType::Int), param("bar", ParamType::String)];

	assert!(check(&params, &["foo", "bar"]));
	assert!(check(&params, &["bar", "foo", "baz"]));
	assert!(!check(&params, &["foo"]));
	assert!(check(&[], &[]));
}
