use crate::error::MeshError;
use crate::math::Point3;
use crate::mesh::{GeometryStore, ResolveFace, QUAD_INDEX_COUNT};

/// Reads the current positions of the six vertices of a quad face.
pub struct FacePositions {
    face: f64,
}

impl FacePositions {
    /// Creates a new `FacePositions` query.
    #[must_use]
    pub fn new(face: f64) -> Self {
        Self { face }
    }

    /// Executes the query, returning positions in index-buffer order.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::FaceOutOfRange`] if the face is not in the mesh.
    pub fn execute(
        &self,
        geometry: &GeometryStore,
    ) -> Result<[Point3; QUAD_INDEX_COUNT], MeshError> {
        let selection = ResolveFace::from_face(self.face).execute(geometry)?;
        let positions = geometry.positions();
        Ok(selection.vertices.map(|v| positions[v as usize]))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::MakeCube;

    #[test]
    fn top_face_positions_lie_on_top_plane() {
        let cube = MakeCube::default().execute().unwrap();
        let positions = FacePositions::new(MakeCube::TOP_FACE).execute(&cube).unwrap();
        assert!(positions.iter().all(|p| (p.y - 0.5).abs() < f64::EPSILON));
    }

    #[test]
    fn unknown_face_is_an_error() {
        let cube = MakeCube::default().execute().unwrap();
        assert!(FacePositions::new(9.0).execute(&cube).is_err());
    }
}
