//! Describing how vertex data is laid out, so the vertex array knows how to feed it to the
//! vertex shader.

use std::mem::size_of;

use super::gl_types::GlEnum;

/// One attribute of a vertex: `count` components of type `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexBufferElement {
    pub kind: GlEnum,
    pub count: i32,
    pub normalized: bool,
}

impl VertexBufferElement {
    /// Size in bytes of a single component of `kind`.
    pub fn size_of_kind(kind: GlEnum) -> usize {
        match kind {
            gl::FLOAT => size_of::<f32>(),
            gl::UNSIGNED_INT => size_of::<u32>(),
            gl::UNSIGNED_BYTE => size_of::<u8>(),
            _ => 0,
        }
    }

    /// Size in bytes of the whole attribute.
    pub fn size(&self) -> usize {
        Self::size_of_kind(self.kind) * self.count as usize
    }
}

/// Component types that can make up a vertex attribute.
pub trait AttributeComponent {
    const KIND: GlEnum;
    const NORMALIZED: bool;
}

impl AttributeComponent for f32 {
    const KIND: GlEnum = gl::FLOAT;
    const NORMALIZED: bool = false;
}

impl AttributeComponent for u32 {
    const KIND: GlEnum = gl::UNSIGNED_INT;
    const NORMALIZED: bool = false;
}

// Bytes are almost always colors, which the shader wants in 0.0..=1.0
impl AttributeComponent for u8 {
    const KIND: GlEnum = gl::UNSIGNED_BYTE;
    const NORMALIZED: bool = true;
}

/// The ordered attributes of one vertex, with the stride between consecutive vertices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexBufferLayout {
    elements: Vec<VertexBufferElement>,
    stride: i32,
}

impl VertexBufferLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute of `count` components of type `T`.
    pub fn push<T: AttributeComponent>(&mut self, count: i32) -> &mut Self {
        let element = VertexBufferElement {
            kind: T::KIND,
            count,
            normalized: T::NORMALIZED,
        };
        self.stride += element.size() as i32;
        self.elements.push(element);
        self
    }

    pub fn elements(&self) -> &[VertexBufferElement] {
        &self.elements
    }

    pub fn stride(&self) -> i32 {
        self.stride
    }
}
