use crate::error::MeshError;
use crate::math::{newell_normal, Vector3};

use super::geometry::QUAD_INDEX_COUNT;
use super::GeometryStore;

/// A quad face resolved from a picked triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceSelection {
    /// Face id as reported by picking: `triangle_id / 2`, possibly fractional.
    pub face: f64,
    /// Offset of the face's first triangle: `2 * floor(face)`.
    pub facet: usize,
    /// The six vertex indices spanning both triangles of the quad.
    pub vertices: [u32; QUAD_INDEX_COUNT],
}

impl FaceSelection {
    /// Computes the outward normal of the face from its first triangle.
    ///
    /// Returns `None` if that triangle is degenerate.
    #[must_use]
    pub fn normal(&self, geometry: &GeometryStore) -> Option<Vector3> {
        let corners = self.vertices[..3]
            .iter()
            .map(|&v| geometry.position(v).copied())
            .collect::<Option<Vec<_>>>()?;
        newell_normal(&corners)
    }
}

/// Returns the facet of a face id: `2 * floor(face)`.
///
/// Returns `None` for negative or non-finite face ids, and for face ids too
/// large to address an index buffer.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn facet_of(face: f64) -> Option<usize> {
    if !face.is_finite() || face < 0.0 {
        return None;
    }
    // Float-to-int casts saturate, so only the doubling can overflow.
    (face.floor() as usize).checked_mul(2)
}

/// Maps a picked triangle (or face id) to its quad face and six vertices.
pub struct ResolveFace {
    face: f64,
}

impl ResolveFace {
    /// Creates a resolver for the triangle reported by a pick.
    #[must_use]
    pub fn from_triangle(triangle_id: u32) -> Self {
        Self {
            face: f64::from(triangle_id) / 2.0,
        }
    }

    /// Creates a resolver for an already-halved face id.
    #[must_use]
    pub fn from_face(face: f64) -> Self {
        Self { face }
    }

    /// Creates a resolver for the facet (first triangle) of a quad.
    ///
    /// Odd facets do not start a quad and resolve to no face.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_facet(facet: usize) -> Self {
        let face = if facet % 2 == 0 {
            (facet / 2) as f64
        } else {
            f64::NAN
        };
        Self { face }
    }

    /// Executes the resolution against the mesh's index buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::FaceOutOfRange`] if the face id is negative,
    /// non-finite, or past the last quad of the index buffer.
    pub fn execute(&self, geometry: &GeometryStore) -> Result<FaceSelection, MeshError> {
        let out_of_range = || MeshError::FaceOutOfRange {
            face: self.face,
            face_count: geometry.face_count(),
        };

        let facet = facet_of(self.face).ok_or_else(out_of_range)?;
        let start = facet.checked_mul(3).ok_or_else(out_of_range)?;
        let end = start
            .checked_add(QUAD_INDEX_COUNT)
            .ok_or_else(out_of_range)?;
        let slots = geometry
            .indices()
            .get(start..end)
            .ok_or_else(out_of_range)?;

        let mut vertices = [0; QUAD_INDEX_COUNT];
        vertices.copy_from_slice(slots);

        Ok(FaceSelection {
            face: self.face,
            facet,
            vertices,
        })
    }
}
