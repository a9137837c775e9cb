//! The [`Gl`] implementation backed by real OpenGL.
//!
//! I went with raw OpenGL calls instead of a rendering library because all this program does is
//! upload a handful of vertices and draw them. Still, even that takes a pile of cryptic, unsafe
//! function calls, so they all live here behind a safe interface and the rest of the code never
//! writes `unsafe`.
//!
//! A knowledge of OpenGL is *necessary* to follow any of this. [Learn OpenGL](learnopengl) is the
//! classic set of tutorials, with [a Rust port of the example code](learnopengl-rs), and
//! [Rust and OpenGL from scratch](rs-opengl-from-scratch) is a brilliant walkthrough of writing a
//! safe interface over these calls.
//!
//! [learnopengl]: https://learnopengl.com/
//! [learnopengl-rs]: https://github.com/bwasty/learn-opengl-rs
//! [rs-opengl-from-scratch]: http://nercury.github.io/rust/opengl/tutorial/2018/02/09/opengl-in-rust-from-scratch-02-opengl-context.html

use std::ffi::{c_void, CString};
use std::ptr::null;

use gl;
use gl::types::*;

use super::gl_types::{Gl, GlEnum, GlId, NO_UNIFORM};
use super::utils::*;

/// OpenGL as loaded from the current context.
///
/// Constructing one loads the function pointers, so it must happen after a context has been made
/// current. Every method then assumes that context is still current on the calling thread.
pub struct NativeGl {
    _private: (),
}

impl NativeGl {
    pub fn load_with<F>(loader: F) -> Self
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loader);
        Self { _private: () }
    }
}

impl Gl for NativeGl {
    fn gen_buffer(&self) -> GlId {
        let mut id = 0;
        unsafe { gl::GenBuffers(1, &mut id) };
        id
    }

    fn delete_buffer(&self, id: GlId) {
        unsafe { gl::DeleteBuffers(1, &id) }
    }

    fn bind_buffer(&self, target: GlEnum, id: GlId) {
        unsafe { gl::BindBuffer(target, id) }
    }

    fn buffer_data(&self, target: GlEnum, data: &[u8], usage: GlEnum) {
        unsafe {
            gl::BufferData(
                target,
                data.len() as GLsizeiptr,
                data.as_ptr() as *const c_void,
                usage,
            )
        }
    }

    fn gen_vertex_array(&self) -> GlId {
        let mut id = 0;
        unsafe { gl::GenVertexArrays(1, &mut id) };
        id
    }

    fn delete_vertex_array(&self, id: GlId) {
        unsafe { gl::DeleteVertexArrays(1, &id) }
    }

    fn bind_vertex_array(&self, id: GlId) {
        unsafe { gl::BindVertexArray(id) }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { gl::EnableVertexAttribArray(index) }
    }

    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        kind: GlEnum,
        normalized: bool,
        stride: i32,
        offset: usize,
    ) {
        unsafe {
            gl::VertexAttribPointer(
                index,
                size,
                kind,
                if normalized { gl::TRUE } else { gl::FALSE },
                stride,
                offset as *const c_void,
            )
        }
    }

    fn create_shader(&self, kind: GlEnum) -> GlId {
        unsafe { gl::CreateShader(kind) }
    }

    fn shader_source(&self, id: GlId, source: &str) {
        // Passing the length means the source doesn't need a NUL terminator
        let ptr = source.as_ptr() as *const GLchar;
        let len = source.len() as GLint;
        unsafe { gl::ShaderSource(id, 1, &ptr, &len) }
    }

    fn compile_shader(&self, id: GlId) {
        unsafe { gl::CompileShader(id) }
    }

    fn shader_compile_status(&self, id: GlId) -> bool {
        let mut status = gl::FALSE as GLint;
        unsafe { gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut status) };
        status != gl::FALSE as GLint
    }

    fn shader_info_log(&self, id: GlId) -> String {
        let mut len = 0;
        unsafe { gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut len) };

        let mut buf = info_log_buffer(len);
        let mut written = 0;
        unsafe {
            gl::GetShaderInfoLog(
                id,
                buf.len() as GLsizei,
                &mut written,
                buf.as_mut_ptr() as *mut GLchar,
            )
        };

        info_log_to_string(buf, written)
    }

    fn delete_shader(&self, id: GlId) {
        unsafe { gl::DeleteShader(id) }
    }

    fn create_program(&self) -> GlId {
        unsafe { gl::CreateProgram() }
    }

    fn attach_shader(&self, program: GlId, shader: GlId) {
        unsafe { gl::AttachShader(program, shader) }
    }

    fn link_program(&self, program: GlId) {
        unsafe { gl::LinkProgram(program) }
    }

    fn validate_program(&self, program: GlId) {
        unsafe { gl::ValidateProgram(program) }
    }

    fn program_link_status(&self, program: GlId) -> bool {
        let mut status = gl::FALSE as GLint;
        unsafe { gl::GetProgramiv(program, gl::LINK_STATUS, &mut status) };
        status != gl::FALSE as GLint
    }

    fn program_info_log(&self, program: GlId) -> String {
        let mut len = 0;
        unsafe { gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len) };

        let mut buf = info_log_buffer(len);
        let mut written = 0;
        unsafe {
            gl::GetProgramInfoLog(
                program,
                buf.len() as GLsizei,
                &mut written,
                buf.as_mut_ptr() as *mut GLchar,
            )
        };

        info_log_to_string(buf, written)
    }

    fn use_program(&self, program: GlId) {
        unsafe { gl::UseProgram(program) }
    }

    fn delete_program(&self, program: GlId) {
        unsafe { gl::DeleteProgram(program) }
    }

    fn get_uniform_location(&self, program: GlId, name: &str) -> i32 {
        // A name with an interior NUL can't be a GLSL identifier anyway
        match CString::new(name) {
            Ok(name) => unsafe { gl::GetUniformLocation(program, name.as_ptr()) },
            Err(_) => NO_UNIFORM,
        }
    }

    fn uniform_1i(&self, location: i32, v0: i32) {
        unsafe { gl::Uniform1i(location, v0) }
    }

    fn uniform_1f(&self, location: i32, v0: f32) {
        unsafe { gl::Uniform1f(location, v0) }
    }

    fn uniform_4f(&self, location: i32, v0: f32, v1: f32, v2: f32, v3: f32) {
        unsafe { gl::Uniform4f(location, v0, v1, v2, v3) }
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { gl::ClearColor(r, g, b, a) }
    }

    fn clear(&self, mask: GlEnum) {
        unsafe { gl::Clear(mask) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { gl::Viewport(x, y, width, height) }
    }

    fn draw_elements(&self, mode: GlEnum, count: i32, kind: GlEnum) {
        // Indices come from the bound element buffer, so the pointer is an offset of 0
        unsafe { gl::DrawElements(mode, count, kind, null()) }
    }

    fn get_string(&self, name: GlEnum) -> Option<String> {
        unsafe { driver_string(gl::GetString(name) as *const _) }
    }

    fn get_error(&self) -> GlEnum {
        unsafe { gl::GetError() }
    }
}
