//! The fixed triangles the program draws.

use glam::Vec3;

/// Three points in normalized device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
}

impl Triangle {
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Flattens the vertices into `x, y, z` triples in vertex order.
    pub fn to_floats(&self) -> [f32; 9] {
        let [a, b, c] = self.vertices;
        [a.x, a.y, a.z, b.x, b.y, b.z, c.x, c.y, c.z]
    }
}

/// Lower-left half of the square.
pub const LEFT: Triangle = Triangle::new(
    Vec3::new(-0.5, 0.5, 0.0),
    Vec3::new(-0.5, -0.5, 0.0),
    Vec3::new(0.5, -0.5, 0.0),
);

/// Upper-right half of the square.
pub const RIGHT: Triangle = Triangle::new(
    Vec3::new(-0.5, 0.5, 0.0),
    Vec3::new(0.5, 0.5, 0.0),
    Vec3::new(0.5, -0.5, 0.0),
);
