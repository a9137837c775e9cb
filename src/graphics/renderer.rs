use std::rc::Rc;

use super::buffers::IndexBuffer;
use super::gl_types::Gl;
use super::shader::Shader;
use super::vertex_array::VertexArray;

/// Issues the per-frame GL calls: clearing the screen and drawing indexed geometry.
pub struct Renderer {
    gl: Rc<dyn Gl>,
}

impl Renderer {
    pub fn new(gl: Rc<dyn Gl>) -> Self {
        Self { gl }
    }

    pub fn set_clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        gl_call!(self.gl, self.gl.clear_color(r, g, b, a));
    }

    pub fn set_viewport(&self, width: u32, height: u32) {
        gl_call!(self.gl, self.gl.viewport(0, 0, width as i32, height as i32));
    }

    pub fn clear(&self) {
        gl_call!(self.gl, self.gl.clear(gl::COLOR_BUFFER_BIT));
    }

    /// Draws every index of `ib` as triangles, reading vertices through `va` and shading them
    /// with `shader`.
    pub fn draw(&self, va: &VertexArray, ib: &IndexBuffer, shader: &Shader) {
        shader.bind();
        va.bind();
        ib.bind();

        gl_call!(
            self.gl,
            self.gl.draw_elements(gl::TRIANGLES, ib.count() as i32, gl::UNSIGNED_INT)
        );
    }
}
