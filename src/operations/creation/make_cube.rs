use crate::error::Result;
use crate::math::{Point3, Rgba, Vector3};
use crate::mesh::GeometryStore;

/// Outward normal and in-plane axes of each cube face, with `u × v = normal`.
const FACE_FRAMES: [([f64; 3], [f64; 3], [f64; 3]); 6] = [
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
];

/// Quad corners in `(u, v)` signs, counter-clockwise seen from outside.
const CORNERS: [(f64, f64); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

/// Corner order of the two triangles of each quad.
const QUAD_TRIANGLES: [usize; 6] = [0, 1, 2, 0, 2, 3];

/// Creates a flat-shaded cube centered at the origin.
///
/// Every triangle corner gets its own vertex, so the cube has 36 vertices,
/// sequential indices, and 6 quad faces ordered +Z, -Z, +X, -X, +Y, -Y.
pub struct MakeCube {
    size: f64,
    color: Rgba,
}

impl MakeCube {
    /// Face id of the +Y (top) face.
    pub const TOP_FACE: f64 = 4.0;

    /// Creates a new `MakeCube` operation.
    #[must_use]
    pub fn new(size: f64, color: Rgba) -> Self {
        Self { size, color }
    }

    /// Executes the operation, returning the cube's buffers.
    ///
    /// # Errors
    ///
    /// Returns an error if the generated buffers fail validation.
    pub fn execute(&self) -> Result<GeometryStore> {
        let half = self.size * 0.5;
        let mut positions = Vec::with_capacity(FACE_FRAMES.len() * QUAD_TRIANGLES.len());

        for (normal, u, v) in FACE_FRAMES {
            let normal = Vector3::from(normal);
            let u = Vector3::from(u);
            let v = Vector3::from(v);
            let corners = CORNERS.map(|(su, sv)| Point3::from((normal + u * su + v * sv) * half));
            positions.extend(QUAD_TRIANGLES.iter().map(|&c| corners[c]));
        }

        let indices = (0..36).collect();
        let geometry = GeometryStore::with_uniform_color(positions, indices, self.color)?;
        Ok(geometry)
    }
}

impl Default for MakeCube {
    fn default() -> Self {
        Self::new(1.0, Rgba::WHITE)
    }
}
