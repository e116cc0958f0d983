use std::collections::BTreeSet;

use crate::error::MeshError;
use crate::math::Vector3;
use crate::mesh::{AdjacencyIndex, GeometryStore, ResolveFace};

/// Pushes a quad face along a fixed normal by an incremental pointer offset.
///
/// The face's six vertices and every vertex coincident with them move
/// together, so neighboring faces stretch instead of tearing. Each call adds
/// `speed * dot(offset, normal) * normal` to the current positions; repeated
/// calls accumulate.
pub struct ExtrudeFace {
    facet: usize,
    normal: Vector3,
    offset: Vector3,
    speed: f64,
}

impl ExtrudeFace {
    /// Creates a new `ExtrudeFace` operation.
    ///
    /// `offset` is the pointer motion already projected into world space and
    /// `speed` the gain converting it into mesh-space displacement.
    #[must_use]
    pub fn new(facet: usize, normal: Vector3, offset: Vector3, speed: f64) -> Self {
        Self {
            facet,
            normal,
            offset,
            speed,
        }
    }

    /// Scalar displacement along the normal applied to every affected vertex.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.speed * self.offset.dot(&self.normal)
    }

    /// Executes the extrusion, moving positions in place.
    ///
    /// Returns the affected vertices in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::FaceOutOfRange`] if the facet is odd or not in the
    /// mesh.
    pub fn execute(
        &self,
        geometry: &mut GeometryStore,
        adjacency: &AdjacencyIndex,
    ) -> Result<Vec<u32>, MeshError> {
        let affected = affected_vertices(geometry, adjacency, self.facet)?;
        let displacement = self.normal * self.magnitude();

        let positions = geometry.positions_mut();
        for &v in &affected {
            positions[v as usize] += displacement;
        }

        Ok(affected)
    }
}

/// Collects the vertices of a facet plus every vertex adjacent to them.
///
/// # Errors
///
/// Returns [`MeshError::FaceOutOfRange`] if the facet is odd or not in the
/// mesh.
pub fn affected_vertices(
    geometry: &GeometryStore,
    adjacency: &AdjacencyIndex,
    facet: usize,
) -> Result<Vec<u32>, MeshError> {
    let selection = ResolveFace::from_facet(facet).execute(geometry)?;

    let mut affected = BTreeSet::new();
    for v in selection.vertices {
        affected.insert(v);
        affected.extend(adjacency.adjacent(v).iter().copied());
    }

    Ok(affected.into_iter().collect())
}
