use crate::math::Point3;

use super::GeometryStore;

/// Maps each vertex to every vertex that occupies the same position.
///
/// Built once from the initial positions and never updated: topology is fixed
/// while the solid is edited, only positions move. The relation is reflexive
/// and symmetric for every vertex referenced by the index buffer.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    adjacent: Vec<Vec<u32>>,
}

impl AdjacencyIndex {
    /// Builds the index by comparing every pair of index-buffer slots.
    ///
    /// Positions are compared with exact componentwise equality. The scan is
    /// quadratic in the index-buffer length. Slots whose index has no position
    /// are skipped.
    #[must_use]
    pub fn build(indices: &[u32], positions: &[Point3]) -> Self {
        let mut adjacent = vec![Vec::new(); positions.len()];

        for &a in indices {
            let Some(pa) = positions.get(a as usize) else {
                continue;
            };
            for &b in indices {
                if positions.get(b as usize) == Some(pa) {
                    adjacent[a as usize].push(b);
                }
            }
        }

        for list in &mut adjacent {
            list.sort_unstable();
            list.dedup();
        }

        Self { adjacent }
    }

    /// Builds the index from a geometry store's current buffers.
    #[must_use]
    pub fn from_geometry(geometry: &GeometryStore) -> Self {
        Self::build(geometry.indices(), geometry.positions())
    }

    /// Returns the vertices coincident with `vertex`, itself included.
    ///
    /// Sorted ascending. Empty for vertices outside the index.
    #[must_use]
    pub fn adjacent(&self, vertex: u32) -> &[u32] {
        self.adjacent
            .get(vertex as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns `true` if `a` and `b` share a position.
    #[must_use]
    pub fn contains(&self, a: u32, b: u32) -> bool {
        self.adjacent(a).binary_search(&b).is_ok()
    }

    /// Number of vertices covered by the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacent.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacent.is_empty()
    }

    /// Number of distinct positions among the indexed vertices.
    ///
    /// Each group of coincident vertices is counted once, by its smallest
    /// member.
    #[must_use]
    pub fn distinct_position_count(&self) -> usize {
        self.adjacent
            .iter()
            .enumerate()
            .filter(|(v, list)| list.first().is_some_and(|&first| first as usize == *v))
            .count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::MakeCube;

    fn cube() -> GeometryStore {
        MakeCube::default().execute().unwrap()
    }

    fn referenced(geometry: &GeometryStore) -> Vec<u32> {
        let mut verts = geometry.indices().to_vec();
        verts.sort_unstable();
        verts.dedup();
        verts
    }

    #[test]
    fn every_vertex_is_adjacent_to_itself() {
        let geometry = cube();
        let index = AdjacencyIndex::from_geometry(&geometry);
        for v in referenced(&geometry) {
            assert!(index.contains(v, v), "vertex {v} missing self-adjacency");
        }
    }

    #[test]
    fn adjacency_is_symmetric() {
        let geometry = cube();
        let index = AdjacencyIndex::from_geometry(&geometry);
        for u in referenced(&geometry) {
            for &v in index.adjacent(u) {
                assert!(index.contains(v, u), "{v} adjacent to {u} but not reverse");
            }
        }
    }

    #[test]
    fn adjacency_matches_exact_position_equality() {
        let geometry = cube();
        let index = AdjacencyIndex::from_geometry(&geometry);
        for u in referenced(&geometry) {
            for v in referenced(&geometry) {
                let same = geometry.position(u) == geometry.position(v);
                assert_eq!(index.contains(u, v), same, "u={u} v={v}");
            }
        }
    }

    #[test]
    fn cube_corners_are_shared_by_three_faces() {
        let geometry = cube();
        let index = AdjacencyIndex::from_geometry(&geometry);
        assert_eq!(index.len(), 36);
        assert_eq!(index.distinct_position_count(), 8);
        // Each corner appears in 3 faces, and in 1 or 2 triangles per face.
        for v in referenced(&geometry) {
            let n = index.adjacent(v).len();
            assert!((3..=6).contains(&n), "vertex {v} has {n} duplicates");
        }
        let covered: usize = (0..36u32)
            .filter(|&v| index.adjacent(v).first() == Some(&v))
            .map(|v| index.adjacent(v).len())
            .sum();
        assert_eq!(covered, 36);
    }

    #[test]
    fn near_but_unequal_positions_are_not_adjacent() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1e-15),
            Point3::new(1.0, 0.0, 0.0),
        ];
        let index = AdjacencyIndex::build(&[0, 1, 2, 0, 2, 1], &positions);
        assert!(!index.contains(0, 1));
        assert_eq!(index.adjacent(0), &[0]);
        assert_eq!(index.distinct_position_count(), 3);
    }

    #[test]
    fn unknown_vertex_has_no_adjacency() {
        let index = AdjacencyIndex::default();
        assert!(index.is_empty());
        assert!(index.adjacent(7).is_empty());
    }
}
