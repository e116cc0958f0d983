use slotmap::SlotMap;

use crate::error::SceneError;
use crate::math::{Point3, Rgba};

use super::{AdjacencyIndex, GeometryStore};

slotmap::new_key_type! {
    /// Unique identifier for an editable solid in the scene store.
    pub struct SolidId;
}

slotmap::new_key_type! {
    /// Unique identifier for a preview surface in the scene store.
    pub struct PreviewId;
}

/// An editable solid: its buffers plus the adjacency computed from them.
#[derive(Debug, Clone)]
pub struct SolidData {
    /// Vertex, color and index buffers. Positions are edited in place.
    pub geometry: GeometryStore,
    /// Coincident-vertex groups of the initial positions.
    pub adjacency: AdjacencyIndex,
}

impl SolidData {
    /// Wraps a geometry store, building its adjacency index.
    #[must_use]
    pub fn new(geometry: GeometryStore) -> Self {
        let adjacency = AdjacencyIndex::from_geometry(&geometry);
        Self {
            geometry,
            adjacency,
        }
    }
}

/// A transient surface shown at the selected face while it is extruded.
#[derive(Debug, Clone)]
pub struct PreviewSurface {
    pub positions: Vec<Point3>,
    pub colors: Vec<Rgba>,
    pub indices: Vec<u32>,
}

impl PreviewSurface {
    /// Creates a preview from the six positions of a face, in a single color.
    #[must_use]
    pub fn new(positions: [Point3; 6], color: Rgba) -> Self {
        Self {
            positions: positions.to_vec(),
            colors: vec![color; positions.len()],
            indices: (0..6).collect(),
        }
    }
}

/// Arena that owns the editable solid and any preview surfaces.
///
/// Ids are generational, so an id kept past the removal of its entity is
/// reported as not found rather than aliasing a newer entity.
#[derive(Debug, Default)]
pub struct SceneStore {
    solids: SlotMap<SolidId, SolidData>,
    previews: SlotMap<PreviewId, PreviewSurface>,
}

impl SceneStore {
    /// Creates a new, empty scene store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Solid operations ---

    /// Inserts a solid and returns its ID.
    pub fn add_solid(&mut self, data: SolidData) -> SolidId {
        self.solids.insert(data)
    }

    /// Returns a reference to the solid data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn solid(&self, id: SolidId) -> Result<&SolidData, SceneError> {
        self.solids
            .get(id)
            .ok_or(SceneError::EntityNotFound("solid"))
    }

    /// Returns a mutable reference to the solid data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn solid_mut(&mut self, id: SolidId) -> Result<&mut SolidData, SceneError> {
        self.solids
            .get_mut(id)
            .ok_or(SceneError::EntityNotFound("solid"))
    }

    /// Removes a solid, returning its data.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn remove_solid(&mut self, id: SolidId) -> Result<SolidData, SceneError> {
        self.solids
            .remove(id)
            .ok_or(SceneError::EntityNotFound("solid"))
    }

    #[must_use]
    pub fn solid_count(&self) -> usize {
        self.solids.len()
    }

    // --- Preview operations ---

    /// Inserts a preview surface and returns its ID.
    pub fn add_preview(&mut self, surface: PreviewSurface) -> PreviewId {
        self.previews.insert(surface)
    }

    /// Returns a reference to the preview surface, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn preview(&self, id: PreviewId) -> Result<&PreviewSurface, SceneError> {
        self.previews
            .get(id)
            .ok_or(SceneError::EntityNotFound("preview"))
    }

    /// Removes a preview surface, returning it.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn remove_preview(&mut self, id: PreviewId) -> Result<PreviewSurface, SceneError> {
        self.previews
            .remove(id)
            .ok_or(SceneError::EntityNotFound("preview"))
    }

    #[must_use]
    pub fn preview_count(&self) -> usize {
        self.previews.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::MakeCube;

    #[test]
    fn removed_solid_id_is_stale() {
        let mut scene = SceneStore::new();
        let id = scene.add_solid(SolidData::new(MakeCube::default().execute().unwrap()));
        assert_eq!(scene.solid_count(), 1);

        scene.remove_solid(id).unwrap();
        let replacement = scene.add_solid(SolidData::new(MakeCube::default().execute().unwrap()));

        assert!(scene.solid(id).is_err());
        assert!(scene.solid(replacement).is_ok());
        assert_eq!(scene.solid_count(), 1);
    }

    #[test]
    fn preview_has_six_uniformly_colored_vertices() {
        let mut scene = SceneStore::new();
        let color = Rgba::from_rgb8(12, 242, 93, 1.0);
        let id = scene.add_preview(PreviewSurface::new([Point3::origin(); 6], color));

        let preview = scene.preview(id).unwrap();
        assert_eq!(preview.indices, vec![0, 1, 2, 3, 4, 5]);
        assert!(preview.colors.iter().all(|c| *c == color));

        scene.remove_preview(id).unwrap();
        assert_eq!(scene.preview_count(), 0);
        assert!(scene.remove_preview(id).is_err());
    }
}
