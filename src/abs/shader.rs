//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for managing OpenGL shaders.
//! Both own their GL object and delete it on drop.

use std::{fmt, sync::Arc};

use glow::HasContext;
use thiserror::Error;

/// The pipeline stage a [`Shader`] is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The GL enum passed to `glCreateShader`.
    pub fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("failed to create {0}: {1}")]
    Create(&'static str, String),
    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("shader program failed to link: {0}")]
    Link(String),
}

/// Represents an individual OpenGL shader.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
    stage: ShaderStage,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    ///
    /// On failure the driver's info log is returned in the error and the shader object is deleted.
    pub fn new(
        gl: &Arc<glow::Context>,
        stage: ShaderStage,
        source: &str,
    ) -> Result<Self, ShaderError> {
        unsafe {
            let shader = gl
                .create_shader(stage.gl_type())
                .map_err(|e| ShaderError::Create("shader", e))?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(ShaderError::Compile { stage, log });
            }

            log::debug!("compiled {stage} shader");

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
                stage,
            })
        }
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    /// The raw GL name of the shader object.
    pub fn handle(&self) -> glow::Shader {
        self.id
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// Represents an OpenGL shader program composed of multiple shaders.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Links a new shader program from the given shaders.
    pub fn new(gl: &Arc<glow::Context>, shaders: &[&Shader]) -> Result<Self, ShaderError> {
        unsafe {
            let program = gl
                .create_program()
                .map_err(|e| ShaderError::Create("program", e))?;

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(ShaderError::Link(log));
            }

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            log::debug!("linked shader program from {} stages", shaders.len());

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
            })
        }
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }

    /// The raw GL name of the program object.
    pub fn handle(&self) -> glow::Program {
        self.id
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}
