//! Crate-wide error type.
//!
//! Every failure the program can detect ends up as an [`Error`] returned to `main`, which logs it
//! and exits.

use thiserror::Error;

use crate::abs::{GlVersion, ShaderError};

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to initialize SDL: {0}")]
    Init(String),
    #[error("failed to create window: {0}")]
    Window(#[from] sdl2::video::WindowBuildError),
    #[error("failed to create OpenGL context: {0}")]
    Context(String),
    #[error("OpenGL {required} core was requested but the driver reports \"{found}\"")]
    UnsupportedVersion { required: GlVersion, found: String },
    #[error("OpenGL context is not a core profile context")]
    NotCoreProfile,
    #[error("failed to allocate {kind}: {reason}")]
    Allocation { kind: &'static str, reason: String },
    #[error(transparent)]
    Shader(#[from] ShaderError),
}
