use std::rc::Rc;

use super::buffers::VertexBuffer;
use super::gl_types::{Gl, GlId};
use super::layout::VertexBufferLayout;

/// A vertex array object (VAO) remembers which buffers feed which vertex attributes, so a draw
/// only needs to bind the array instead of redescribing every attribute.
pub struct VertexArray {
    gl: Rc<dyn Gl>,
    id: GlId,
}

impl VertexArray {
    pub fn new(gl: Rc<dyn Gl>) -> Self {
        let id = gl_call!(gl, gl.gen_vertex_array());
        Self { gl, id }
    }

    pub fn id(&self) -> GlId { self.id }

    /// Attaches `vb` to this array, describing one attribute per element of `layout`. Attribute
    /// indices start at 0 and follow the order the elements were pushed in.
    pub fn add_buffer(&self, vb: &VertexBuffer, layout: &VertexBufferLayout) {
        self.bind();
        vb.bind();

        let mut offset = 0;
        for (index, element) in layout.elements().iter().enumerate() {
            let index = index as u32;
            gl_call!(self.gl, self.gl.enable_vertex_attrib_array(index));
            gl_call!(
                self.gl,
                self.gl.vertex_attrib_pointer(
                    index,
                    element.count,
                    element.kind,
                    element.normalized,
                    layout.stride(),
                    offset,
                )
            );
            offset += element.size();
        }
    }

    pub fn bind(&self) {
        gl_call!(self.gl, self.gl.bind_vertex_array(self.id));
    }

    pub fn unbind(&self) {
        gl_call!(self.gl, self.gl.bind_vertex_array(0));
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        gl_call!(self.gl, self.gl.delete_vertex_array(self.id));
    }
}
