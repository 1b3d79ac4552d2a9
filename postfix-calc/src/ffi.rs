use libc::{c_char, c_double, c_int, size_t};

use crate::Error;

/// Status codes returned by [`postfix_evaluate`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixStatus {
    Ok = 0,
    NullPointer = 1,
    InvalidUtf8 = 2,
    InvalidToken = 3,
    MalformedExpression = 4,
}

impl From<&Error> for PostfixStatus {
    fn from(error: &Error) -> Self {
        match error {
            Error::Tokenize(_) => PostfixStatus::InvalidToken,
            Error::Evaluate(_) => PostfixStatus::MalformedExpression,
        }
    }
}

/// Writes `error` into the caller's buffer as a NUL-terminated string,
/// truncating it to fit.
unsafe fn fill_error_buffer(output_error: *mut c_char, output_error_len: size_t, error: &str) {
    if output_error.is_null() || output_error_len == 0 {
        return;
    }

    let output_error = std::slice::from_raw_parts_mut(output_error as *mut u8, output_error_len);
    let mut len = error.len().min(output_error_len - 1);
    // Never split a multi-byte character.
    while !error.is_char_boundary(len) {
        len -= 1;
    }
    output_error[..len].copy_from_slice(&error.as_bytes()[..len]);
    output_error[len] = 0;
}

/// Evaluate a postfix expression.
///
/// # Arguments
///
/// * `input` - The NUL-terminated expression to evaluate.
/// * `result_out` - Where the result is stored on success.
/// * `output_error` - The buffer to write the error message to. May be null.
/// * `output_error_len` - The length of the error buffer.
///
/// # Returns
///
/// [`PostfixStatus::Ok`] as an integer on success. On failure `result_out` is
/// left untouched and the error message is written into `output_error`.
///
/// # Safety
///
/// `input` must point to a valid NUL-terminated string, `result_out` must be
/// valid for writes, and `output_error` (if non-null) must be valid for
/// `output_error_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn postfix_evaluate(
    input: *const c_char,
    result_out: *mut c_double,
    output_error: *mut c_char,
    output_error_len: size_t,
) -> c_int {
    if input.is_null() || result_out.is_null() {
        unsafe {
            fill_error_buffer(output_error, output_error_len, "Invalid pointer!");
        }
        return PostfixStatus::NullPointer as c_int;
    }

    let input = match unsafe { std::ffi::CStr::from_ptr(input).to_str() } {
        Ok(input) => input,
        Err(_) => {
            unsafe {
                fill_error_buffer(
                    output_error,
                    output_error_len,
                    "Failed to convert the input string to a Rust string!",
                );
            }
            return PostfixStatus::InvalidUtf8 as c_int;
        }
    };

    match crate::evaluate(input) {
        Ok(value) => {
            unsafe {
                *result_out = value;
            }
            PostfixStatus::Ok as c_int
        }
        Err(e) => {
            unsafe {
                fill_error_buffer(
                    output_error,
                    output_error_len,
                    &format!("Failed to evaluate the expression: {}", e),
                );
            }
            PostfixStatus::from(&e) as c_int
        }
    }
}
