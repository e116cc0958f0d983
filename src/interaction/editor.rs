use tracing::{debug, info, trace, warn};

use crate::config::EditorConfig;
use crate::error::Result;
use crate::math::{ScreenPoint, TOLERANCE};
use crate::mesh::{
    FaceSelection, GeometryStore, PreviewSurface, ResolveFace, SceneStore, SolidData, SolidId,
};
use crate::operations::creation::MakeCube;
use crate::operations::highlight::{ClearColors, SetFaceColor};
use crate::operations::query::FacePositions;
use crate::operations::shaping::ExtrudeFace;

use super::{HitRecord, InteractionState, PickHit, RenderHost};

/// Click-drag-click face extrusion on a single solid.
///
/// While idle, moving the pointer highlights the face under it. A press on a
/// face starts an extrusion: the solid turns translucent, the face takes the
/// ghost color, a preview surface marks where the face started, and camera
/// navigation is suspended. Each following move pushes the face along its
/// normal by the pointer motion since the previous move. The next press ends
/// the extrusion wherever it happens.
#[derive(Debug)]
pub struct Editor {
    config: EditorConfig,
    scene: SceneStore,
    solid: SolidId,
    pristine: GeometryStore,
    state: InteractionState,
}

impl Editor {
    /// Creates an editor holding the canonical cube.
    ///
    /// # Errors
    ///
    /// Returns an error if the cube cannot be built.
    pub fn new(config: EditorConfig) -> Result<Self> {
        let cube = MakeCube::new(config.cube_size(), config.palette.base).execute()?;
        Ok(Self::with_geometry(config, cube))
    }

    /// Creates an editor holding an arbitrary quad mesh.
    ///
    /// [`Editor::reset`] restores this geometry.
    #[must_use]
    pub fn with_geometry(config: EditorConfig, geometry: GeometryStore) -> Self {
        let mut scene = SceneStore::new();
        let solid = scene.add_solid(SolidData::new(geometry.clone()));
        Self {
            config,
            scene,
            solid,
            pristine: geometry,
            state: InteractionState::Idle,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    #[must_use]
    pub fn is_extruding(&self) -> bool {
        self.state.is_extruding()
    }

    #[must_use]
    pub fn scene(&self) -> &SceneStore {
        &self.scene
    }

    /// Returns the solid being edited.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is missing from the scene store.
    pub fn solid(&self) -> Result<&SolidData> {
        Ok(self.scene.solid(self.solid)?)
    }

    /// Returns the current buffers of the solid being edited.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is missing from the scene store.
    pub fn geometry(&self) -> Result<&GeometryStore> {
        Ok(&self.solid()?.geometry)
    }

    /// Uploads both buffers of the solid to the host.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is missing from the scene store.
    pub fn sync<H: RenderHost>(&self, host: &mut H) -> Result<()> {
        let geometry = self.geometry()?;
        host.commit_positions(geometry);
        host.commit_colors(geometry);
        Ok(())
    }

    /// Handles a pointer press.
    ///
    /// Starts an extrusion when idle and over a face, or ends the current
    /// extrusion regardless of what is under the pointer.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene store lost the solid or preview.
    pub fn pointer_down<H: RenderHost>(
        &mut self,
        host: &mut H,
        pointer: ScreenPoint,
    ) -> Result<()> {
        match std::mem::take(&mut self.state) {
            InteractionState::Extruding(hit) => self.end_extrusion(host, &hit),
            InteractionState::Idle => {
                if let Some((pick, selection)) = self.pick_face(host, pointer)? {
                    self.begin_extrusion(host, pointer, pick, selection)?;
                }
                Ok(())
            }
        }
    }

    /// Handles a pointer move.
    ///
    /// Extrudes while a drag is active, otherwise recomputes the hover
    /// highlight.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene store lost the solid.
    pub fn pointer_move<H: RenderHost>(
        &mut self,
        host: &mut H,
        pointer: ScreenPoint,
    ) -> Result<()> {
        if let InteractionState::Extruding(hit) = &mut self.state {
            let offset = host.project_screen_to_world(pointer)
                - host.project_screen_to_world(hit.pointer);
            let op = ExtrudeFace::new(hit.facet, hit.normal, offset, self.config.move_speed());

            let solid = self.scene.solid_mut(hit.solid)?;
            let affected = op.execute(&mut solid.geometry, &solid.adjacency)?;
            host.commit_positions(&solid.geometry);
            hit.pointer = pointer;

            trace!(
                facet = hit.facet,
                magnitude = op.magnitude(),
                vertices = affected.len(),
                "extruded"
            );
            return Ok(());
        }

        self.hover(host, pointer)
    }

    /// Replaces the solid with a fresh copy of its initial geometry.
    ///
    /// An extrusion in progress is ended first, so no hit record or preview
    /// outlives the solid it refers to.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene store lost the solid or preview.
    pub fn reset<H: RenderHost>(&mut self, host: &mut H) -> Result<()> {
        if let InteractionState::Extruding(hit) = std::mem::take(&mut self.state) {
            self.end_extrusion(host, &hit)?;
        }

        self.scene.remove_solid(self.solid)?;
        self.solid = self
            .scene
            .add_solid(SolidData::new(self.pristine.clone()));
        self.sync(host)?;

        info!("solid reset");
        Ok(())
    }

    /// Colors the face under the pointer, all others back to the base color.
    fn hover<H: RenderHost>(&mut self, host: &mut H, pointer: ScreenPoint) -> Result<()> {
        let palette = self.config.palette;
        let picked = self.pick_face(host, pointer)?;

        let solid = self.scene.solid_mut(self.solid)?;
        ClearColors::new(palette.base).execute(&mut solid.geometry);
        if let Some((_, selection)) = &picked {
            SetFaceColor::new(selection.face, palette.hover).execute(&mut solid.geometry)?;
        }
        host.commit_colors(&solid.geometry);

        trace!(face = picked.map(|(_, s)| s.face), "hover");
        Ok(())
    }

    /// Picks through the host and resolves the hit to a face of the solid.
    ///
    /// A triangle id outside the mesh counts as no pick.
    fn pick_face<H: RenderHost>(
        &self,
        host: &H,
        pointer: ScreenPoint,
    ) -> Result<Option<(PickHit, FaceSelection)>> {
        let Some(pick) = host.pick(pointer) else {
            return Ok(None);
        };

        match ResolveFace::from_triangle(pick.triangle_id).execute(self.geometry()?) {
            Ok(selection) => Ok(Some((pick, selection))),
            Err(err) => {
                warn!(triangle = pick.triangle_id, %err, "pick ignored");
                Ok(None)
            }
        }
    }

    fn begin_extrusion<H: RenderHost>(
        &mut self,
        host: &mut H,
        pointer: ScreenPoint,
        pick: PickHit,
        selection: FaceSelection,
    ) -> Result<()> {
        let palette = self.config.palette;
        let solid = self.scene.solid_mut(self.solid)?;

        let normal = if pick.normal.norm() > TOLERANCE {
            pick.normal
        } else if let Some(normal) = selection.normal(&solid.geometry) {
            normal
        } else {
            warn!(face = selection.face, "degenerate face, extrusion not started");
            return Ok(());
        };

        ClearColors::new(palette.ghost_base).execute(&mut solid.geometry);
        SetFaceColor::new(selection.face, palette.ghost).execute(&mut solid.geometry)?;
        host.commit_colors(&solid.geometry);

        let corners = FacePositions::new(selection.face).execute(&solid.geometry)?;
        let preview = self
            .scene
            .add_preview(PreviewSurface::new(corners, palette.hover));
        host.show_preview(preview, self.scene.preview(preview)?);
        host.set_camera_navigation(false);

        self.state = InteractionState::Extruding(HitRecord {
            solid: self.solid,
            face: selection.face,
            facet: selection.facet,
            normal,
            pointer,
            preview,
        });

        debug!(face = selection.face, facet = selection.facet, "extrusion started");
        Ok(())
    }

    /// Tears down the drag on the host side before touching the scene store,
    /// so a missing preview cannot leave navigation disabled.
    fn end_extrusion<H: RenderHost>(&mut self, host: &mut H, hit: &HitRecord) -> Result<()> {
        host.dispose_preview(hit.preview);
        host.set_camera_navigation(true);
        self.scene.remove_preview(hit.preview)?;

        debug!(face = hit.face, "extrusion ended");
        Ok(())
    }
}
