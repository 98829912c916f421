mod error;
mod get;
mod kind;
mod last_error;
mod pick;
mod schema;
mod typed;
mod validate;
mod value;

/// Error, error kind, and result aliases.
pub use error::{ErrorCode, ParamError, Result};
/// First-match lookup helpers.
pub use get::{get, get_as, get_boolean, get_double, get_int, get_llong, get_string, get_uint, get_ullong};
/// Type tag set.
pub use kind::ParamType;
/// Per-thread last-error facility.
pub use last_error::{LastError, last_error, reset_last_error};
/// Order-preserving selection helpers.
pub use pick::{pick, pick_indices, pick_strings};
/// Validation schema entry.
pub use schema::SchemaEntry;
/// Typed entry and name bound.
pub use typed::{FIELD_LENGTH, TypedParam};
/// Schema validation entry points.
pub use validate::{check, validate};
/// Entry payload.
pub use value::ParamValue;
