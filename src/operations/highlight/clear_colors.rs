use crate::math::Rgba;
use crate::mesh::GeometryStore;

/// Sets every vertex of a mesh to one color.
pub struct ClearColors {
    color: Rgba,
}

impl ClearColors {
    /// Creates a new `ClearColors` operation.
    #[must_use]
    pub fn new(color: Rgba) -> Self {
        Self { color }
    }

    /// Executes the operation, overwriting the color buffer in place.
    pub fn execute(&self, geometry: &mut GeometryStore) {
        geometry.colors_mut().fill(self.color);
    }
}
