//! GL error checking.
//!
//! OpenGL doesn't report errors from the call that caused them; it queues error flags that have
//! to be polled with `glGetError`. [`gl_call!`] wraps a single call so that any flag raised after
//! it can be traced back to it: the queue is drained first, the call runs, and then the queue is
//! polled again.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use super::gl_types::{Gl, GlEnum};

lazy_static! {
    static ref ERROR_NAMES: HashMap<GlEnum, &'static str> = {
        let mut names = HashMap::new();
        names.insert(gl::INVALID_ENUM, "GL_INVALID_ENUM");
        names.insert(gl::INVALID_VALUE, "GL_INVALID_VALUE");
        names.insert(gl::INVALID_OPERATION, "GL_INVALID_OPERATION");
        names.insert(gl::STACK_OVERFLOW, "GL_STACK_OVERFLOW");
        names.insert(gl::STACK_UNDERFLOW, "GL_STACK_UNDERFLOW");
        names.insert(gl::OUT_OF_MEMORY, "GL_OUT_OF_MEMORY");
        names.insert(gl::INVALID_FRAMEBUFFER_OPERATION, "GL_INVALID_FRAMEBUFFER_OPERATION");
        names
    };
}

// Some drivers keep reporting an error while no context is current
const MAX_QUEUED_ERRORS: usize = 64;

/// Human-readable name of a `glGetError` code.
pub fn error_name(code: GlEnum) -> &'static str {
    ERROR_NAMES.get(&code).copied().unwrap_or("unknown GL error")
}

/// One or more error flags raised by a GL call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{call} raised {} at {file}:{line}", ErrorCodes(.codes))]
pub struct GlError {
    pub call: &'static str,
    pub file: &'static str,
    pub line: u32,
    pub codes: Vec<GlEnum>,
}

struct ErrorCodes<'a>(&'a [GlEnum]);

impl fmt::Display for ErrorCodes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, code) in self.0.iter().enumerate() {
            if n > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} (0x{:04X})", error_name(*code), code)?;
        }
        Ok(())
    }
}

/// Throws away every pending error flag.
pub fn clear_errors(gl: &dyn Gl) {
    for _ in 0..MAX_QUEUED_ERRORS {
        if gl.get_error() == gl::NO_ERROR {
            break;
        }
    }
}

/// Collects every pending error flag and blames them on `call`.
pub fn check_errors(
    gl: &dyn Gl,
    call: &'static str,
    file: &'static str,
    line: u32,
) -> Result<(), GlError> {
    let mut codes = Vec::new();
    while codes.len() < MAX_QUEUED_ERRORS {
        match gl.get_error() {
            gl::NO_ERROR => break,
            code => codes.push(code),
        }
    }

    if codes.is_empty() {
        Ok(())
    } else {
        Err(GlError { call, file, line, codes })
    }
}

/// Logs any pending error flag, then panics in debug builds.
pub fn assert_no_errors(gl: &dyn Gl, call: &'static str, file: &'static str, line: u32) {
    if let Err(e) = check_errors(gl, call, file, line) {
        error!("[OpenGL Error] {}", e);
        if cfg!(debug_assertions) {
            panic!("[OpenGL Error] {}", e);
        }
    }
}

/// Runs a GL call with error checking around it and evaluates to the call's result.
///
/// The first argument is anything that derefs to a [`Gl`] (an `Rc<dyn Gl>` or a `&dyn Gl`).
///
/// ```ignore
/// let id = gl_call!(self.gl, self.gl.gen_buffer());
/// ```
#[macro_export]
macro_rules! gl_call {
    ($gl:expr, $call:expr) => {{
        $crate::graphics::debug::clear_errors(&*$gl);
        let result = $call;
        $crate::graphics::debug::assert_no_errors(&*$gl, stringify!($call), file!(), line!());
        result
    }};
}
