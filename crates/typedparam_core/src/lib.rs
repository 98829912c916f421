//! Public library API for validating and selecting typed parameter arrays.

/// Typed parameter model, schema validation, selection, and lookup helpers.
pub mod param;
