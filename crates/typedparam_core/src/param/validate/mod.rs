use crate::param::last_error::raise;
use crate::param::{ParamError, Result, SchemaEntry, TypedParam};

/// Validate `params` against `schema`, scanning entries in array order.
///
/// Each entry is checked for a known name, then for the declared tag, then for
/// an unexpected repeat. The first violation found is recorded with the
/// last-error facility and returned; later entries are not inspected.
pub fn validate(params: &[TypedParam], schema: &[SchemaEntry<'_>]) -> Result<()> {
	let mut seen = vec![0_usize; schema.len()];

	for param in params {
		let Some(slot) = schema.iter().position(|entry| entry.name == param.name()) else {
			return Err(raise(ParamError::UnsupportedParameter {
				name: param.name().to_owned(),
			}));
		};
		let entry = &schema[slot];

		if param.param_type() != entry.kind {
			return Err(raise(ParamError::InvalidType {
				name: param.name().to_owned(),
				actual: param.param_type(),
				expected: entry.kind,
			}));
		}

		if seen[slot] > 0 && !entry.multiple {
			return Err(raise(ParamError::DuplicateParameter {
				name: param.name().to_owned(),
			}));
		}
		seen[slot] += 1;
	}

	tracing::trace!(params = params.len(), schema = schema.len(), "typed params validated");
	Ok(())
}

/// Whether every entry name appears in `names`.
///
/// Types and repeats are not considered, and nothing is reported on failure.
pub fn check(params: &[TypedParam], names: &[&str]) -> bool {
	params.iter().all(|param| names.contains(&param.name()))
}

#[cfg(test)]
mod tests;
