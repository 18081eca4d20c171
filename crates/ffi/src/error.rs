use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use wcv_core::WcvError;

/// Common interface for errors reported across the FFI boundary.
///
/// - `code()` - the error code returned to the caller
/// - `msg()` - the diagnostic message stored for `wcv_get_last_error`
pub(crate) trait WcvFfiError {
    fn code(&self) -> WcvErrorCode;

    fn msg(&self) -> &str;
}

/// Default implementation of `WcvFfiError`: an error code plus a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultWcvError {
    code: WcvErrorCode,
    msg: String,
}

impl DefaultWcvError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_value"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: WcvErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a threshold set that failed validation.
    pub fn invalid_thresholds(error: &WcvError) -> Self {
        Self {
            code: WcvErrorCode::InvalidThresholds,
            msg: error.to_string(),
        }
    }

    /// Create error for invalid parameter.
    ///
    /// # Arguments
    /// * `message` - Description of the error
    pub fn invalid_parameter(message: String) -> Self {
        Self {
            code: WcvErrorCode::InvalidParameter,
            msg: message,
        }
    }
}

impl From<WcvError> for DefaultWcvError {
    fn from(error: WcvError) -> Self {
        match error {
            WcvError::InvalidThreshold { .. } => Self::invalid_thresholds(&error),
            WcvError::InvalidComponent { .. }
            | WcvError::UnknownVariant { .. }
            | WcvError::InvalidSampling { .. } => Self::invalid_parameter(error.to_string()),
        }
    }
}

impl WcvFfiError for DefaultWcvError {
    fn code(&self) -> WcvErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by WCV functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WcvErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Thresholds must be finite, with DTHR and ZTHR positive and TTHR and
    /// TCOA non-negative.
    InvalidThresholds = 2,

    /// Invalid parameter passed to function (unknown variant, bad sampling plan).
    InvalidParameter = 3,
}

thread_local! {
    /// Most recent FFI error on this thread (C string, error code).
    /// The `CString` is owned here so the pointer handed out stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, WcvErrorCode)> = const { RefCell::new((None, WcvErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, WcvErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, WcvErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded or no call has been made yet.
///
/// # Lifetime
/// The returned pointer is valid until the next WCV call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// double value;
/// WcvErrorCode err = wcv_norm_evaluate(&thresholds, s, v, WCV_VARIANT_ALT, &value);
/// if (err != Ok) {
///     const char* error = wcv_get_last_error();
///     if (error) {
///         printf("norm evaluation failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn wcv_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `Ok` (0) if the last call on this thread succeeded.
#[no_mangle]
pub extern "C" fn wcv_get_last_error_code() -> WcvErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
