//! Mesh management module.
//!
//! This module defines the [`Mesh`] struct for managing triangle data on the GPU side, and the
//! [`VertexLayout`] describing how a vertex array reads its buffer.

use std::sync::Arc;

use glow::HasContext;

use crate::{error::Error, render::geometry::Triangle};

/// How one vertex attribute is read out of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    pub attribute: u32,
    pub components: i32,
    pub stride: i32,
    pub normalized: bool,
}

impl VertexLayout {
    /// Tightly packed `vec3` float positions at the given attribute index.
    pub fn positions(attribute: u32) -> Self {
        Self {
            attribute,
            components: 3,
            stride: 3 * std::mem::size_of::<f32>() as i32,
            normalized: false,
        }
    }

    /// How many vertices a buffer of `floats` floats holds under this layout.
    pub fn vertex_count(&self, floats: usize) -> usize {
        floats / self.components as usize
    }

    /// Enables and describes the attribute on the currently bound vertex array and buffer.
    fn apply(&self, gl: &glow::Context) {
        unsafe {
            gl.enable_vertex_attrib_array(self.attribute);
            gl.vertex_attrib_pointer_f32(
                self.attribute,
                self.components,
                glow::FLOAT,
                self.normalized,
                self.stride,
                0,
            );
        }
    }
}

/// Represents a mesh stored on the GPU side.
pub struct Mesh {
    gl: Arc<glow::Context>,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    layout: VertexLayout,
    vertex_count: usize,
}

impl Mesh {
    /// Uploads a triangle into a new buffer and wires it to `attribute` in a new vertex array.
    pub fn new(gl: &Arc<glow::Context>, triangle: &Triangle, attribute: u32) -> Result<Self, Error> {
        let floats = triangle.to_floats();
        let layout = VertexLayout::positions(attribute);

        unsafe {
            let vbo = gl.create_buffer().map_err(|reason| Error::Allocation {
                kind: "vertex buffer",
                reason,
            })?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                std::slice::from_raw_parts(
                    floats.as_ptr() as *const u8,
                    std::mem::size_of_val(&floats),
                ),
                glow::STATIC_DRAW,
            );

            let vao = match gl.create_vertex_array() {
                Ok(vao) => vao,
                Err(reason) => {
                    gl.bind_buffer(glow::ARRAY_BUFFER, None);
                    gl.delete_buffer(vbo);
                    return Err(Error::Allocation {
                        kind: "vertex array",
                        reason,
                    });
                }
            };
            gl.bind_vertex_array(Some(vao));
            layout.apply(gl);

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            log::debug!("uploaded triangle to attribute {attribute}");

            Ok(Self {
                gl: Arc::clone(gl),
                vao,
                vbo,
                layout,
                vertex_count: layout.vertex_count(floats.len()),
            })
        }
    }

    /// Draws the mesh.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl
                .draw_arrays(glow::TRIANGLES, 0, self.vertex_count as i32);
            self.gl.bind_vertex_array(None);
        }
    }

    /// Returns the amount of vertices drawn per call.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn layout(&self) -> VertexLayout {
        self.layout
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.vbo);
            self.gl.delete_vertex_array(self.vao);
        }
    }
}
