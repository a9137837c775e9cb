use thiserror::Error;

use crate::graphics::shader::ShaderError;
use crate::interface::cli::ConfigError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid arguments: {0}")]
    Config(#[from] ConfigError),

    #[error("could not create window: {0}")]
    Window(#[from] glutin::CreationError),

    #[error("could not make GL context current: {0}")]
    Context(#[from] glutin::ContextError),

    #[error("could not load shader: {0}")]
    Shader(#[from] ShaderError),
}
