use std::cell::RefCell;

use crate::param::{ErrorCode, ParamError};

thread_local! {
	static LAST_ERROR: RefCell<Option<LastError>> = const { RefCell::new(None) };
}

/// Snapshot of the most recent failure reported on the current thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastError {
	/// Machine-checkable error kind.
	pub code: ErrorCode,
	/// Fully formatted message.
	pub message: String,
}

impl From<&ParamError> for LastError {
	fn from(err: &ParamError) -> Self {
		Self {
			code: err.code(),
			message: err.to_string(),
		}
	}
}

/// Record `err` as the current thread's last error, replacing any earlier one.
pub(crate) fn report(err: &ParamError) {
	tracing::debug!(code = %err.code(), "{err}");
	LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(LastError::from(err)));
}

/// Record and hand back `err`, for use in `Err(...)` position.
pub(crate) fn raise(err: ParamError) -> ParamError {
	report(&err);
	err
}

/// Most recent failure reported on the current thread.
///
/// Successful operations never clear this state, so read it right after the failing call.
pub fn last_error() -> Option<LastError> {
	LAST_ERROR.with(|slot| slot.borrow().clone())
}

/// Clear the current thread's last error.
pub fn reset_last_error() {
	LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}
