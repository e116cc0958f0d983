use crate::math::{Point3, ScreenPoint, Vector3};
use crate::mesh::{GeometryStore, PreviewId, PreviewSurface};

/// A successful pick against the editable solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Index of the triangle under the pointer.
    pub triangle_id: u32,
    /// Surface normal at the hit. A zero vector asks the editor to derive the
    /// normal from the face's geometry.
    pub normal: Vector3,
}

/// The rendering and windowing side of the editor.
///
/// The host owns the scene graph, camera and picking. The editor calls back
/// into it from pointer handlers; all calls happen on the host's event thread.
pub trait RenderHost {
    /// Picks the solid under a screen position.
    fn pick(&self, pointer: ScreenPoint) -> Option<PickHit>;

    /// Unprojects a screen position onto the near plane in world space.
    fn project_screen_to_world(&self, pointer: ScreenPoint) -> Point3;

    /// Uploads the solid's position buffer after it changed.
    fn commit_positions(&mut self, geometry: &GeometryStore);

    /// Uploads the solid's color buffer after it changed.
    fn commit_colors(&mut self, geometry: &GeometryStore);

    /// Creates the visual for a preview surface.
    fn show_preview(&mut self, id: PreviewId, surface: &PreviewSurface);

    /// Destroys the visual created by [`RenderHost::show_preview`].
    fn dispose_preview(&mut self, id: PreviewId);

    /// Enables or disables camera navigation from pointer input.
    fn set_camera_navigation(&mut self, enabled: bool);
}
