use std::rc::Rc;

use bytemuck::Pod;

use super::gl_types::{Gl, GlId};

/// Represents a [vertex buffer object (VBO)](vbo), which is a representation of vertex data that's
/// sent to the graphics card. Vertices don't have to be spatial; they can represent color, normal
/// vectors, or any other data you want sent to the graphics card.
///
/// The buffer is created and filled on construction and deleted when dropped. There's no way to
/// resize it or update part of it.
///
/// [vbo]: https://en.wikipedia.org/wiki/Vertex_buffer_object
pub struct VertexBuffer {
    gl: Rc<dyn Gl>,
    id: GlId,
}

impl VertexBuffer {
    /// Uploads `data` into a new buffer, which is left bound to `GL_ARRAY_BUFFER`.
    pub fn new<T: Pod>(gl: Rc<dyn Gl>, data: &[T]) -> Self {
        let id = gl_call!(gl, gl.gen_buffer());
        let vbo = Self { gl, id };

        vbo.bind();
        gl_call!(
            vbo.gl,
            vbo.gl.buffer_data(gl::ARRAY_BUFFER, bytemuck::cast_slice(data), gl::STATIC_DRAW)
        );

        vbo
    }

    pub fn id(&self) -> GlId { self.id }

    pub fn bind(&self) {
        gl_call!(self.gl, self.gl.bind_buffer(gl::ARRAY_BUFFER, self.id));
    }

    pub fn unbind(&self) {
        gl_call!(self.gl, self.gl.bind_buffer(gl::ARRAY_BUFFER, 0));
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        gl_call!(self.gl, self.gl.delete_buffer(self.id));
    }
}

/// Represents an index buffer (what OpenGL calls an element buffer), which is a list of vertex
/// ID's. This allows you to reuse vertex data. This way, to draw a rectangle (which is two
/// triangles that share a common side), you don't need to send data for the shared vertices twice.
pub struct IndexBuffer {
    gl: Rc<dyn Gl>,
    id: GlId,
    count: usize,
}

impl IndexBuffer {
    /// Uploads `indices` into a new buffer, which is left bound to `GL_ELEMENT_ARRAY_BUFFER`.
    pub fn new(gl: Rc<dyn Gl>, indices: &[u32]) -> Self {
        let id = gl_call!(gl, gl.gen_buffer());
        let ibo = Self { gl, id, count: indices.len() };

        ibo.bind();
        gl_call!(
            ibo.gl,
            ibo.gl.buffer_data(gl::ELEMENT_ARRAY_BUFFER, bytemuck::cast_slice(indices), gl::STATIC_DRAW)
        );

        ibo
    }

    pub fn id(&self) -> GlId { self.id }

    /// The number of indices (not bytes) in the buffer.
    pub fn count(&self) -> usize { self.count }

    pub fn bind(&self) {
        gl_call!(self.gl, self.gl.bind_buffer(gl::ELEMENT_ARRAY_BUFFER, self.id));
    }

    pub fn unbind(&self) {
        gl_call!(self.gl, self.gl.bind_buffer(gl::ELEMENT_ARRAY_BUFFER, 0));
    }
}

impl Drop for IndexBuffer {
    fn drop(&mut self) {
        gl_call!(self.gl, self.gl.delete_buffer(self.id));
    }
}
