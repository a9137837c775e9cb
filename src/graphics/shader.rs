use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use shader_source::{ShaderProgramSource, SourceError};
use thiserror::Error;

use super::gl_types::{Gl, GlEnum, GlId, NO_UNIFORM};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex = gl::VERTEX_SHADER as isize,
    Fragment = gl::FRAGMENT_SHADER as isize,
}

impl ShaderStage {
    pub fn gl_enum(self) -> GlEnum {
        self as GlEnum
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ShaderError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("failed to compile {stage} shader:\n{log}")]
    Compile { stage: ShaderStage, log: String },

    #[error("failed to link shader program:\n{log}")]
    Link { log: String },
}

/// Compiles one stage, returning the shader object's name.
///
/// On failure the driver's info log is logged and returned, and the shader object is deleted.
pub fn compile_shader(gl: &dyn Gl, stage: ShaderStage, source: &str) -> Result<GlId, ShaderError> {
    let id = gl_call!(gl, gl.create_shader(stage.gl_enum()));
    gl_call!(gl, gl.shader_source(id, source));
    gl_call!(gl, gl.compile_shader(id));

    if !gl_call!(gl, gl.shader_compile_status(id)) {
        let log = gl_call!(gl, gl.shader_info_log(id));
        error!("Failed to compile {} shader!\n{}", stage, log);
        gl_call!(gl, gl.delete_shader(id));
        return Err(ShaderError::Compile { stage, log });
    }

    Ok(id)
}

/// Compiles both stages and links them into a program, returning the program's name.
///
/// The shader objects are deleted once linked; the program keeps what it needs of them. Nothing
/// created here outlives a failure.
pub fn create_program(gl: &dyn Gl, vertex: &str, fragment: &str) -> Result<GlId, ShaderError> {
    let vs = compile_shader(gl, ShaderStage::Vertex, vertex)?;
    let fs = match compile_shader(gl, ShaderStage::Fragment, fragment) {
        Ok(fs) => fs,
        Err(e) => {
            gl_call!(gl, gl.delete_shader(vs));
            return Err(e);
        }
    };

    let program = gl_call!(gl, gl.create_program());
    gl_call!(gl, gl.attach_shader(program, vs));
    gl_call!(gl, gl.attach_shader(program, fs));
    gl_call!(gl, gl.link_program(program));
    gl_call!(gl, gl.validate_program(program));

    gl_call!(gl, gl.delete_shader(vs));
    gl_call!(gl, gl.delete_shader(fs));

    if !gl_call!(gl, gl.program_link_status(program)) {
        let log = gl_call!(gl, gl.program_info_log(program));
        error!("Failed to link shader program!\n{}", log);
        gl_call!(gl, gl.delete_program(program));
        return Err(ShaderError::Link { log });
    }

    Ok(program)
}

/// A linked shader program, which is the programmable part of the graphics pipeline.
///
/// Uniform locations are looked up the first time they're set and cached by name for the life
/// of the program.
pub struct Shader {
    gl: Rc<dyn Gl>,
    id: GlId,
    path: Option<PathBuf>,
    uniform_locations: HashMap<String, i32>,
}

impl Shader {
    /// Loads, compiles and links the shader program file at `path`.
    pub fn from_file<P: AsRef<Path>>(gl: Rc<dyn Gl>, path: P) -> Result<Self, ShaderError> {
        let path = path.as_ref();
        let source = shader_source::parse_file(path)?;
        if source.is_empty() {
            warn!("{} has no #shader sections", path.display());
        }

        let mut shader = Self::from_source(gl, &source)?;
        shader.path = Some(path.to_path_buf());
        debug!("Loaded shader program {} from {}", shader.id, path.display());

        Ok(shader)
    }

    pub fn from_source(gl: Rc<dyn Gl>, source: &ShaderProgramSource) -> Result<Self, ShaderError> {
        let id = create_program(&*gl, &source.vertex, &source.fragment)?;

        Ok(Self {
            gl,
            id,
            path: None,
            uniform_locations: HashMap::new(),
        })
    }

    pub fn id(&self) -> GlId { self.id }

    /// The file this program was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn bind(&self) {
        gl_call!(self.gl, self.gl.use_program(self.id));
    }

    pub fn unbind(&self) {
        gl_call!(self.gl, self.gl.use_program(0));
    }

    // Uniform setters apply to the bound program, so bind first.

    pub fn set_uniform_1i(&mut self, name: &str, value: i32) {
        let location = self.uniform_location(name);
        gl_call!(self.gl, self.gl.uniform_1i(location, value));
    }

    pub fn set_uniform_1f(&mut self, name: &str, value: f32) {
        let location = self.uniform_location(name);
        gl_call!(self.gl, self.gl.uniform_1f(location, value));
    }

    pub fn set_uniform_4f(&mut self, name: &str, v0: f32, v1: f32, v2: f32, v3: f32) {
        let location = self.uniform_location(name);
        gl_call!(self.gl, self.gl.uniform_4f(location, v0, v1, v2, v3));
    }

    /// Location of the uniform `name`, or -1 if the program doesn't use it. Setting a uniform at
    /// -1 is silently ignored by GL, so a missing uniform only gets a warning.
    pub fn uniform_location(&mut self, name: &str) -> i32 {
        if let Some(&location) = self.uniform_locations.get(name) {
            return location;
        }

        let location = gl_call!(self.gl, self.gl.get_uniform_location(self.id, name));
        if location == NO_UNIFORM {
            warn!("Warning: uniform '{}' doesn't exist!", name);
        }

        self.uniform_locations.insert(name.to_owned(), location);
        location
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        gl_call!(self.gl, self.gl.delete_program(self.id));
        match self.path() {
            Some(path) => debug!("Deleted shader program {} ({})", self.id, path.display()),
            None => debug!("Deleted shader program {}", self.id),
        }
    }
}
