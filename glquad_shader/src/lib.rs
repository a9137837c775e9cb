//! Loading of single-file shader programs.
//!
//! A shader program file holds the source of both pipeline stages, each introduced by a marker
//! line:
//!
//! ```text
//! #shader vertex
//! #version 330 core
//! ...
//! #shader fragment
//! #version 330 core
//! ...
//! ```
//!
//! Nothing in here touches OpenGL, so it can be used (and tested) without a context.

pub mod program;

pub use program::{parse, parse_file, ShaderProgramSource, SourceError};
