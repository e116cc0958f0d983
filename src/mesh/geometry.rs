use crate::error::MeshError;
use crate::math::{Point3, Rgba};

/// Number of index-buffer slots spanned by one quad face (two triangles).
pub const QUAD_INDEX_COUNT: usize = 6;

/// Raw vertex buffers of a flat-shaded triangle mesh.
///
/// Positions and colors are indexed by vertex; every three entries of the
/// index buffer form one triangle and every two consecutive triangles form one
/// quad face. Vertices that coincide in space are still distinct entries here.
#[derive(Debug, Clone)]
pub struct GeometryStore {
    positions: Vec<Point3>,
    colors: Vec<Rgba>,
    indices: Vec<u32>,
}

impl GeometryStore {
    /// Creates a geometry store from its three buffers.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::MalformedIndexBuffer`] if the index buffer is empty
    /// or not a multiple of 6, [`MeshError::PositionCountMismatch`] if there is
    /// not exactly one color per position, and [`MeshError::IndexOutOfRange`]
    /// if an index refers past the end of the vertex buffers.
    pub fn new(
        positions: Vec<Point3>,
        colors: Vec<Rgba>,
        indices: Vec<u32>,
    ) -> Result<Self, MeshError> {
        if indices.is_empty() || indices.len() % QUAD_INDEX_COUNT != 0 {
            return Err(MeshError::MalformedIndexBuffer { len: indices.len() });
        }
        if positions.len() != colors.len() {
            return Err(MeshError::PositionCountMismatch {
                positions: positions.len(),
                colors: colors.len(),
            });
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= positions.len()) {
            return Err(MeshError::IndexOutOfRange {
                index,
                vertex_count: positions.len(),
            });
        }

        Ok(Self {
            positions,
            colors,
            indices,
        })
    }

    /// Creates a geometry store where every vertex has the same color.
    ///
    /// # Errors
    ///
    /// Same as [`GeometryStore::new`].
    pub fn with_uniform_color(
        positions: Vec<Point3>,
        indices: Vec<u32>,
        color: Rgba,
    ) -> Result<Self, MeshError> {
        let colors = vec![color; positions.len()];
        Self::new(positions, colors, indices)
    }

    #[must_use]
    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    #[must_use]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub(crate) fn positions_mut(&mut self) -> &mut [Point3] {
        &mut self.positions
    }

    pub(crate) fn colors_mut(&mut self) -> &mut [Rgba] {
        &mut self.colors
    }

    /// Returns the position of a vertex, or `None` if out of range.
    #[must_use]
    pub fn position(&self, vertex: u32) -> Option<&Point3> {
        self.positions.get(vertex as usize)
    }

    /// Returns the color of a vertex, or `None` if out of range.
    #[must_use]
    pub fn color(&self, vertex: u32) -> Option<&Rgba> {
        self.colors.get(vertex as usize)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the index buffer.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of quad faces in the index buffer.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.indices.len() / QUAD_INDEX_COUNT
    }

    /// Positions flattened to `[x0, y0, z0, x1, ...]` for upload to a renderer.
    #[must_use]
    pub fn flat_positions(&self) -> Vec<f64> {
        self.positions
            .iter()
            .flat_map(|p| [p.x, p.y, p.z])
            .collect()
    }

    /// Colors flattened to `[r0, g0, b0, a0, r1, ...]` for upload to a renderer.
    #[must_use]
    pub fn flat_colors(&self) -> Vec<f64> {
        self.colors.iter().flat_map(|c| c.to_array()).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn quad() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn accepts_single_quad() {
        let store = GeometryStore::with_uniform_color(quad(), vec![0, 1, 2, 0, 2, 3], Rgba::WHITE)
            .unwrap();
        assert_eq!(store.vertex_count(), 4);
        assert_eq!(store.triangle_count(), 2);
        assert_eq!(store.face_count(), 1);
        assert_eq!(store.flat_positions().len(), 12);
        assert_eq!(store.flat_colors().len(), 16);
    }

    #[test]
    fn rejects_index_buffer_not_multiple_of_six() {
        let result = GeometryStore::with_uniform_color(quad(), vec![0, 1, 2], Rgba::WHITE);
        assert!(matches!(
            result,
            Err(MeshError::MalformedIndexBuffer { len: 3 })
        ));
    }

    #[test]
    fn rejects_empty_index_buffer() {
        let result = GeometryStore::with_uniform_color(quad(), vec![], Rgba::WHITE);
        assert!(matches!(
            result,
            Err(MeshError::MalformedIndexBuffer { len: 0 })
        ));
    }

    #[test]
    fn rejects_out_of_range_index() {
        let result =
            GeometryStore::with_uniform_color(quad(), vec![0, 1, 2, 0, 2, 4], Rgba::WHITE);
        assert!(matches!(
            result,
            Err(MeshError::IndexOutOfRange {
                index: 4,
                vertex_count: 4
            })
        ));
    }

    #[test]
    fn rejects_color_count_mismatch() {
        let result = GeometryStore::new(quad(), vec![Rgba::WHITE; 3], vec![0, 1, 2, 0, 2, 3]);
        assert!(matches!(
            result,
            Err(MeshError::PositionCountMismatch {
                positions: 4,
                colors: 3
            })
        ));
    }
}
