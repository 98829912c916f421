use thiserror::Error;

use crate::param::ParamType;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ParamError>;

/// Errors produced while building, validating, and querying typed parameter arrays.
#[derive(Debug, Error)]
pub enum ParamError {
	/// Array entry name is absent from the schema.
	#[error("argument unsupported: parameter '{name}' not supported")]
	UnsupportedParameter {
		/// Offending entry name.
		name: String,
	},
	/// Array entry tag disagrees with the tag the schema declares for its name.
	#[error("invalid argument: invalid type '{actual}' for parameter '{name}', expected '{expected}'")]
	InvalidType {
		/// Offending entry name.
		name: String,
		/// Tag carried by the entry.
		actual: ParamType,
		/// Tag declared by the schema or requested by the caller.
		expected: ParamType,
	},
	/// Non-repeatable name occurred more than once.
	#[error("invalid argument: parameter '{name}' occurs multiple times")]
	DuplicateParameter {
		/// Repeated entry name.
		name: String,
	},
	/// Entry name does not fit the fixed field length.
	#[error("internal error: Field name '{name}' too long")]
	FieldNameTooLong {
		/// Rejected name.
		name: String,
	},
	/// Type label did not name a known tag.
	#[error("invalid argument: unknown parameter type '{label}'")]
	UnknownType {
		/// User-provided label.
		label: String,
	},
	/// Document value could not be represented by the declared tag.
	#[error("invalid argument: invalid value for parameter '{name}' of type '{kind}'")]
	InvalidValue {
		/// Entry name carrying the value.
		name: String,
		/// Declared tag.
		kind: ParamType,
	},
	/// CLI schema field spec was malformed.
	#[error("invalid argument: invalid field spec '{spec}' (expected name:type[:multiple])")]
	InvalidFieldSpec {
		/// User-provided spec string.
		spec: String,
	},
	/// Parameter or schema document could not be parsed.
	#[error("internal error: invalid document {path}: {reason}")]
	InvalidDocument {
		/// Document path as given by the caller.
		path: String,
		/// Parser diagnostic.
		reason: String,
	},
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
}

impl ParamError {
	/// Stable machine-checkable error kind.
	pub fn code(&self) -> ErrorCode {
		match self {
			Self::UnsupportedParameter { .. } => ErrorCode::ArgumentUnsupported,
			Self::InvalidType { .. }
			| Self::DuplicateParameter { .. }
			| Self::UnknownType { .. }
			| Self::InvalidValue { .. }
			| Self::InvalidFieldSpec { .. } => ErrorCode::InvalidArg,
			Self::FieldNameTooLong { .. } | Self::InvalidDocument { .. } | Self::Io(_) => ErrorCode::InternalError,
		}
	}
}

/// Error kinds reported alongside formatted messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
	/// Argument was recognized but is not acceptable.
	InvalidArg,
	/// Argument is not supported by the callee.
	ArgumentUnsupported,
	/// Caller programming error or environment failure.
	InternalError,
}

impl ErrorCode {
	/// Stable snake_case label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::InvalidArg => "invalid_arg",
			Self::ArgumentUnsupported => "argument_unsupported",
			Self::InternalError => "internal_error",
		}
	}
}

impl std::fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
