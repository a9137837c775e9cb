//! A fake [`Gl`] that records what the wrappers ask of it.
//!
//! Object names are handed out from a counter and tracked per kind, so a test can check that
//! everything created was also deleted. Errors, failing compiles and failing links can be
//! injected to drive the error paths.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use super::gl_types::{Gl, GlEnum, GlId, NO_UNIFORM};

pub const BUFFER: &str = "buffer";
pub const VERTEX_ARRAY: &str = "vertex array";
pub const SHADER: &str = "shader";
pub const PROGRAM: &str = "program";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attrib {
    pub index: u32,
    pub size: i32,
    pub kind: GlEnum,
    pub normalized: bool,
    pub stride: i32,
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Int(i32),
    Float(f32),
    Vec4([f32; 4]),
}

#[derive(Default)]
struct State {
    next_id: GlId,
    live: HashMap<&'static str, HashSet<GlId>>,
    created: HashMap<&'static str, usize>,
    deleted: HashMap<&'static str, usize>,
    shader_kinds: HashMap<GlId, GlEnum>,
    attached: Vec<(GlId, GlId)>,
    failing_stage: Option<GlEnum>,
    failing_link: bool,

    bound_buffers: HashMap<GlEnum, GlId>,
    bound_array: GlId,
    current_program: GlId,
    uploads: Vec<(GlEnum, Vec<u8>)>,
    enabled: Vec<u32>,
    attribs: Vec<Attrib>,

    uniforms: HashMap<String, i32>,
    location_queries: Vec<String>,
    uniform_writes: Vec<(i32, UniformValue)>,

    clear_color: Option<[f32; 4]>,
    clears: Vec<GlEnum>,
    viewport: Option<(i32, i32, i32, i32)>,
    draws: Vec<(GlEnum, i32, GlEnum)>,

    pending_errors: VecDeque<GlEnum>,
    armed_error: Option<GlEnum>,
}

impl State {
    fn create(&mut self, kind: &'static str) -> GlId {
        self.next_id += 1;
        self.live.entry(kind).or_default().insert(self.next_id);
        *self.created.entry(kind).or_default() += 1;
        self.next_id
    }

    fn delete(&mut self, kind: &'static str, id: GlId) {
        // Deleting 0 or an unknown name is silently ignored by GL
        if self.live.entry(kind).or_default().remove(&id) {
            *self.deleted.entry(kind).or_default() += 1;
        }
    }
}

#[derive(Default)]
pub struct RecordingGl {
    state: RefCell<State>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the fake twice: once to inspect it, once as the trait object the wrappers take.
    pub fn shared() -> (Rc<RecordingGl>, Rc<dyn Gl>) {
        let gl = Rc::new(Self::new());
        let dyn_gl: Rc<dyn Gl> = gl.clone();
        (gl, dyn_gl)
    }

    /// Queues an error flag right away.
    pub fn raise_error(&self, code: GlEnum) {
        self.state.borrow_mut().pending_errors.push_back(code);
    }

    /// Queues an error flag as a side effect of the next call that isn't `get_error`.
    pub fn raise_error_on_next_call(&self, code: GlEnum) {
        self.state.borrow_mut().armed_error = Some(code);
    }

    /// Makes every shader of `kind` fail to compile.
    pub fn fail_compile(&self, kind: GlEnum) {
        self.state.borrow_mut().failing_stage = Some(kind);
    }

    pub fn fail_link(&self) {
        self.state.borrow_mut().failing_link = true;
    }

    /// Makes `name` an active uniform of every program.
    pub fn declare_uniform(&self, name: &str, location: i32) {
        self.state.borrow_mut().uniforms.insert(name.to_owned(), location);
    }

    pub fn live(&self, kind: &'static str) -> usize {
        self.state.borrow().live.get(kind).map_or(0, HashSet::len)
    }

    pub fn created(&self, kind: &'static str) -> usize {
        self.state.borrow().created.get(kind).copied().unwrap_or(0)
    }

    pub fn deleted(&self, kind: &'static str) -> usize {
        self.state.borrow().deleted.get(kind).copied().unwrap_or(0)
    }

    pub fn attached(&self) -> Vec<(GlId, GlId)> {
        self.state.borrow().attached.clone()
    }

    pub fn bound_buffer(&self, target: GlEnum) -> GlId {
        self.state.borrow().bound_buffers.get(&target).copied().unwrap_or(0)
    }

    pub fn bound_vertex_array(&self) -> GlId {
        self.state.borrow().bound_array
    }

    pub fn current_program(&self) -> GlId {
        self.state.borrow().current_program
    }

    pub fn uploads(&self) -> Vec<(GlEnum, Vec<u8>)> {
        self.state.borrow().uploads.clone()
    }

    pub fn enabled_attribs(&self) -> Vec<u32> {
        self.state.borrow().enabled.clone()
    }

    pub fn attribs(&self) -> Vec<Attrib> {
        self.state.borrow().attribs.clone()
    }

    pub fn location_queries(&self) -> Vec<String> {
        self.state.borrow().location_queries.clone()
    }

    pub fn uniform_writes(&self) -> Vec<(i32, UniformValue)> {
        self.state.borrow().uniform_writes.clone()
    }

    pub fn clear_color_value(&self) -> Option<[f32; 4]> {
        self.state.borrow().clear_color
    }

    pub fn clears(&self) -> Vec<GlEnum> {
        self.state.borrow().clears.clone()
    }

    pub fn viewport_value(&self) -> Option<(i32, i32, i32, i32)> {
        self.state.borrow().viewport
    }

    pub fn draws(&self) -> Vec<(GlEnum, i32, GlEnum)> {
        self.state.borrow().draws.clone()
    }

    fn call(&self) -> std::cell::RefMut<'_, State> {
        let mut state = self.state.borrow_mut();
        if let Some(code) = state.armed_error.take() {
            state.pending_errors.push_back(code);
        }
        state
    }
}

impl Gl for RecordingGl {
    fn gen_buffer(&self) -> GlId {
        self.call().create(BUFFER)
    }

    fn delete_buffer(&self, id: GlId) {
        self.call().delete(BUFFER, id)
    }

    fn bind_buffer(&self, target: GlEnum, id: GlId) {
        self.call().bound_buffers.insert(target, id);
    }

    fn buffer_data(&self, target: GlEnum, data: &[u8], _usage: GlEnum) {
        self.call().uploads.push((target, data.to_vec()));
    }

    fn gen_vertex_array(&self) -> GlId {
        self.call().create(VERTEX_ARRAY)
    }

    fn delete_vertex_array(&self, id: GlId) {
        self.call().delete(VERTEX_ARRAY, id)
    }

    fn bind_vertex_array(&self, id: GlId) {
        self.call().bound_array = id;
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.call().enabled.push(index);
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
        self.call().attribs.push(Attrib { index, size, kind, normalized, stride, offset });
    }

    fn create_shader(&self, kind: GlEnum) -> GlId {
        let mut state = self.call();
        let id = state.create(SHADER);
        state.shader_kinds.insert(id, kind);
        id
    }

    fn shader_source(&self, _id: GlId, _source: &str) {
        self.call();
    }

    fn compile_shader(&self, _id: GlId) {
        self.call();
    }

    fn shader_compile_status(&self, id: GlId) -> bool {
        let state = self.call();
        state.failing_stage.is_none() || state.failing_stage != state.shader_kinds.get(&id).copied()
    }

    fn shader_info_log(&self, id: GlId) -> String {
        self.call();
        format!("0:1({}): error: syntax error, unexpected end of file", id)
    }

    fn delete_shader(&self, id: GlId) {
        self.call().delete(SHADER, id)
    }

    fn create_program(&self) -> GlId {
        self.call().create(PROGRAM)
    }

    fn attach_shader(&self, program: GlId, shader: GlId) {
        self.call().attached.push((program, shader));
    }

    fn link_program(&self, _program: GlId) {
        self.call();
    }

    fn validate_program(&self, _program: GlId) {
        self.call();
    }

    fn program_link_status(&self, _program: GlId) -> bool {
        !self.call().failing_link
    }

    fn program_info_log(&self, _program: GlId) -> String {
        self.call();
        String::from("error: vertex shader output `v_TexCoord` not read by fragment shader")
    }

    fn use_program(&self, program: GlId) {
        self.call().current_program = program;
    }

    fn delete_program(&self, program: GlId) {
        self.call().delete(PROGRAM, program)
    }

    fn get_uniform_location(&self, _program: GlId, name: &str) -> i32 {
        let mut state = self.call();
        state.location_queries.push(name.to_owned());
        state.uniforms.get(name).copied().unwrap_or(NO_UNIFORM)
    }

    fn uniform_1i(&self, location: i32, v0: i32) {
        self.call().uniform_writes.push((location, UniformValue::Int(v0)));
    }

    fn uniform_1f(&self, location: i32, v0: f32) {
        self.call().uniform_writes.push((location, UniformValue::Float(v0)));
    }

    fn uniform_4f(&self, location: i32, v0: f32, v1: f32, v2: f32, v3: f32) {
        self.call().uniform_writes.push((location, UniformValue::Vec4([v0, v1, v2, v3])));
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.call().clear_color = Some([r, g, b, a]);
    }

    fn clear(&self, mask: GlEnum) {
        self.call().clears.push(mask);
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.call().viewport = Some((x, y, width, height));
    }

    fn draw_elements(&self, mode: GlEnum, count: i32, kind: GlEnum) {
        self.call().draws.push((mode, count, kind));
    }

    fn get_string(&self, name: GlEnum) -> Option<String> {
        self.call();
        if name == gl::VERSION {
            Some(String::from("3.3.0 (recording)"))
        } else {
            None
        }
    }

    fn get_error(&self) -> GlEnum {
        self.state.borrow_mut().pending_errors.pop_front().unwrap_or(gl::NO_ERROR)
    }
}
