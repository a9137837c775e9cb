//! The scene drawn every frame: a single quad whose red channel pulses.

use std::path::Path;
use std::rc::Rc;

use crate::graphics::buffers::{IndexBuffer, VertexBuffer};
use crate::graphics::gl_types::Gl;
use crate::graphics::layout::VertexBufferLayout;
use crate::graphics::renderer::Renderer;
use crate::graphics::shader::{Shader, ShaderError};
use crate::graphics::vertex_array::VertexArray;

/// The uniform the fragment shader takes its color from.
pub const COLOR_UNIFORM: &str = "u_Color";

#[rustfmt::skip]
const QUAD_POSITIONS: [f32; 8] = [
    -0.5, -0.5,
     0.5, -0.5,
     0.5,  0.5,
    -0.5,  0.5,
];

#[rustfmt::skip]
const QUAD_INDICES: [u32; 6] = [
    0, 1, 2,
    2, 3, 0,
];

/// A value that walks back and forth between 0 and 1 in fixed steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPulse {
    value: f32,
    increment: f32,
}

impl ColorPulse {
    pub const STEP: f32 = 0.05;

    pub fn new() -> Self {
        Self { value: 0.0, increment: Self::STEP }
    }

    pub fn value(&self) -> f32 { self.value }

    /// Turns around once the value has left 0..=1, then takes one step.
    pub fn step(&mut self) {
        if self.value > 1.0 {
            self.increment = -Self::STEP;
        } else if self.value < 0.0 {
            self.increment = Self::STEP;
        }

        self.value += self.increment;
    }
}

impl Default for ColorPulse {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Scene {
    renderer: Renderer,
    va: VertexArray,
    // Owned so the buffer lives as long as the array reading from it
    _vb: VertexBuffer,
    ib: IndexBuffer,
    shader: Shader,
    pulse: ColorPulse,
}

impl Scene {
    pub fn new(gl: Rc<dyn Gl>, shader_path: &Path) -> Result<Self, ShaderError> {
        let va = VertexArray::new(gl.clone());
        let vb = VertexBuffer::new(gl.clone(), &QUAD_POSITIONS);

        let mut layout = VertexBufferLayout::new();
        layout.push::<f32>(2);
        va.add_buffer(&vb, &layout);

        let ib = IndexBuffer::new(gl.clone(), &QUAD_INDICES);

        let mut shader = Shader::from_file(gl.clone(), shader_path)?;
        shader.bind();
        shader.set_uniform_4f(COLOR_UNIFORM, 0.8, 0.3, 0.8, 1.0);

        // Everything is bound again at draw time
        va.unbind();
        vb.unbind();
        ib.unbind();
        shader.unbind();

        Ok(Self {
            renderer: Renderer::new(gl),
            va,
            _vb: vb,
            ib,
            shader,
            pulse: ColorPulse::new(),
        })
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.renderer.set_viewport(width, height);
    }

    /// Draws one frame and advances the color.
    pub fn render(&mut self) {
        self.renderer.clear();

        self.shader.bind();
        self.shader.set_uniform_4f(COLOR_UNIFORM, self.pulse.value(), 0.3, 0.8, 1.0);

        self.renderer.draw(&self.va, &self.ib, &self.shader);

        self.pulse.step();
    }
}
