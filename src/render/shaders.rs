//! Shader sources baked into the binary.

use std::sync::Arc;

use crate::abs::{Shader, ShaderError, ShaderProgram, ShaderStage};

/// A vertex/fragment pair that links into one program.
#[derive(Debug, Clone, Copy)]
pub struct ShaderSources {
    pub vertex: &'static str,
    pub fragment: &'static str,
}

impl ShaderSources {
    /// Compiles both stages and links them. The stage objects are released once the program is
    /// linked.
    pub fn build(&self, gl: &Arc<glow::Context>) -> Result<ShaderProgram, ShaderError> {
        let vert = Shader::new(gl, ShaderStage::Vertex, self.vertex)?;
        let frag = Shader::new(gl, ShaderStage::Fragment, self.fragment)?;
        ShaderProgram::new(gl, &[&vert, &frag])
    }
}

/// Passes `vp` straight through and writes solid colours to draw buffers 0 and 1.
pub const TRIANGLE: ShaderSources = ShaderSources {
    vertex: include_str!("shaders/triangle/vert.glsl"),
    fragment: include_str!("shaders/triangle/frag.glsl"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_sources_target_glsl_410() {
        assert!(TRIANGLE.vertex.starts_with("#version 410"));
        assert!(TRIANGLE.fragment.starts_with("#version 410"));
    }

    #[test]
    fn test_triangle_vertex_input() {
        assert!(TRIANGLE.vertex.contains("in vec3 vp;"));
        assert!(TRIANGLE.vertex.contains("gl_Position = vec4(vp, 1.0);"));
    }

    #[test]
    fn test_triangle_fragment_outputs() {
        assert!(TRIANGLE.fragment.contains("layout(location = 0) out vec4 red_colour;"));
        assert!(TRIANGLE.fragment.contains("layout(location = 1) out vec4 blue_colour;"));
    }
}
