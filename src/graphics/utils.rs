use std::ffi::CStr;
use std::os::raw::c_char;

/// Allocates a zeroed buffer big enough for an info log of `len` bytes, terminator included.
pub fn info_log_buffer(len: i32) -> Vec<u8> {
    vec![0u8; len.max(1) as usize]
}

/// Turns a buffer filled by `glGet*InfoLog` into a string, keeping only the `written` bytes.
pub fn info_log_to_string(mut buf: Vec<u8>, written: i32) -> String {
    buf.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buf).trim_end().to_owned()
}

/// Copies a NUL-terminated string owned by the driver.
///
/// # Safety
/// `ptr` must be null or point to a valid NUL-terminated string.
pub unsafe fn driver_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
    }
}
