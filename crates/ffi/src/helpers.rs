use crate::error::{with_last_error_mut, DefaultWcvError, WcvErrorCode, WcvFfiError};
use std::ffi::CString;

/// Set the thread-local error message and code.
/// Accepts any type implementing `WcvFfiError` trait.
pub(crate) fn set_last_error(error: &impl WcvFfiError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl WcvFfiError) -> WcvErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = WcvErrorCode::Ok;
    });
}

/// Record the outcome of an operation: clear on success, track on failure.
pub(crate) fn track_result(result: Result<(), DefaultWcvError>) -> WcvErrorCode {
    match result {
        Ok(()) => {
            clear_last_error();
            WcvErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}
