use crate::error::MeshError;
use crate::math::Rgba;
use crate::mesh::{FaceSelection, GeometryStore, ResolveFace};

/// Colors the six vertices of one quad face.
///
/// Only the face's own vertices change; coincident vertices of neighboring
/// faces keep their colors so each face reads as a flat patch.
pub struct SetFaceColor {
    face: f64,
    color: Rgba,
}

impl SetFaceColor {
    /// Creates a new `SetFaceColor` operation for a face id.
    #[must_use]
    pub fn new(face: f64, color: Rgba) -> Self {
        Self { face, color }
    }

    /// Executes the operation, returning the face that was colored.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::FaceOutOfRange`] if the face is not in the mesh.
    pub fn execute(&self, geometry: &mut GeometryStore) -> Result<FaceSelection, MeshError> {
        let selection = ResolveFace::from_face(self.face).execute(geometry)?;
        let colors = geometry.colors_mut();
        for v in selection.vertices {
            colors[v as usize] = self.color;
        }
        Ok(selection)
    }
}
