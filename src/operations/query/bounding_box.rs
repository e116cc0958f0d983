use crate::math::Point3;
use crate::mesh::GeometryStore;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Center point of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Edge lengths along x, y and z.
    #[must_use]
    pub fn extents(&self) -> [f64; 3] {
        let d = self.max - self.min;
        [d.x, d.y, d.z]
    }
}

/// Computes the axis-aligned bounding box of the vertices referenced by a mesh.
pub struct BoundingBox;

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query, returning the AABB.
    ///
    /// A validated geometry store always references at least one vertex, so
    /// `None` is only returned for a store built without indices.
    #[must_use]
    pub fn execute(&self, geometry: &GeometryStore) -> Option<Aabb> {
        let mut points = geometry
            .indices()
            .iter()
            .filter_map(|&v| geometry.position(v));
        let first = *points.next()?;

        Some(points.fold(Aabb { min: first, max: first }, |acc, p| Aabb {
            min: acc.min.inf(p),
            max: acc.max.sup(p),
        }))
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Rgba, Vector3};
    use crate::mesh::SolidData;
    use crate::operations::creation::MakeCube;
    use crate::operations::shaping::ExtrudeFace;
    use approx::assert_relative_eq;

    #[test]
    fn unit_cube_is_centered_at_origin() {
        let cube = MakeCube::default().execute().unwrap();
        let aabb = BoundingBox::new().execute(&cube).unwrap();
        assert_relative_eq!(aabb.min, Point3::new(-0.5, -0.5, -0.5));
        assert_relative_eq!(aabb.max, Point3::new(0.5, 0.5, 0.5));
        assert_relative_eq!(aabb.center(), Point3::origin());
        assert_eq!(aabb.extents(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn extruded_cube_grows_along_normal() {
        let mut solid = SolidData::new(MakeCube::new(2.0, Rgba::WHITE).execute().unwrap());
        ExtrudeFace::new(8, Vector3::y(), Vector3::new(0.0, 0.25, 0.0), 4.0)
            .execute(&mut solid.geometry, &solid.adjacency)
            .unwrap();

        let aabb = BoundingBox::new().execute(&solid.geometry).unwrap();
        assert_relative_eq!(aabb.max, Point3::new(1.0, 2.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(aabb.min, Point3::new(-1.0, -1.0, -1.0), epsilon = 1e-12);
    }
}
