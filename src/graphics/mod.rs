//! A small set of safe wrappers over the OpenGL objects this program uses.

#[macro_use]
pub mod debug;
pub mod gl_types;
pub mod opengl;
pub mod utils;

pub mod buffers;
pub mod layout;
pub mod renderer;
pub mod shader;
pub mod vertex_array;

#[cfg(test)]
pub mod test_utils;
