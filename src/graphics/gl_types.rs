//! The slice of the OpenGL API that the wrappers in this module need.
//!
//! Rather than calling the `gl` crate's free functions directly, every wrapper goes through the
//! [`Gl`] trait. [`NativeGl`](super::opengl::NativeGl) forwards each method to the loaded
//! function pointers, and the tests swap in a recording implementation so the lifecycle of GPU
//! objects can be checked without a window or a driver.
//!
//! The methods are named after the GL functions they stand for, minus the `gl` prefix, and take
//! plain Rust integers instead of the `GLuint`/`GLenum` aliases. Calls still have to happen with a
//! current context on the thread that owns it; none of the methods check that.

/// A GL object name (`GLuint`).
pub type GlId = u32;

/// A GL enumerant (`GLenum`).
pub type GlEnum = u32;

/// Value returned by [`Gl::get_uniform_location`] for names the program doesn't use.
pub const NO_UNIFORM: i32 = -1;

pub trait Gl {
    // Buffers
    fn gen_buffer(&self) -> GlId;
    fn delete_buffer(&self, id: GlId);
    fn bind_buffer(&self, target: GlEnum, id: GlId);
    fn buffer_data(&self, target: GlEnum, data: &[u8], usage: GlEnum);

    // Vertex arrays
    fn gen_vertex_array(&self) -> GlId;
    fn delete_vertex_array(&self, id: GlId);
    fn bind_vertex_array(&self, id: GlId);
    fn enable_vertex_attrib_array(&self, index: u32);
    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        kind: GlEnum,
        normalized: bool,
        stride: i32,
        offset: usize,
    );

    // Shaders
    fn create_shader(&self, kind: GlEnum) -> GlId;
    fn shader_source(&self, id: GlId, source: &str);
    fn compile_shader(&self, id: GlId);
    fn shader_compile_status(&self, id: GlId) -> bool;
    fn shader_info_log(&self, id: GlId) -> String;
    fn delete_shader(&self, id: GlId);

    // Programs
    fn create_program(&self) -> GlId;
    fn attach_shader(&self, program: GlId, shader: GlId);
    fn link_program(&self, program: GlId);
    fn validate_program(&self, program: GlId);
    fn program_link_status(&self, program: GlId) -> bool;
    fn program_info_log(&self, program: GlId) -> String;
    fn use_program(&self, program: GlId);
    fn delete_program(&self, program: GlId);

    // Uniforms
    fn get_uniform_location(&self, program: GlId, name: &str) -> i32;
    fn uniform_1i(&self, location: i32, v0: i32);
    fn uniform_1f(&self, location: i32, v0: f32);
    fn uniform_4f(&self, location: i32, v0: f32, v1: f32, v2: f32, v3: f32);

    // Drawing and state
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn clear(&self, mask: GlEnum);
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn draw_elements(&self, mode: GlEnum, count: i32, kind: GlEnum);
    fn get_string(&self, name: GlEnum) -> Option<String>;
    fn get_error(&self) -> GlEnum;
}
