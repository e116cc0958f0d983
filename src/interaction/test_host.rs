use crate::math::{Point3, Rgba, ScreenPoint};
use crate::mesh::{GeometryStore, PreviewId, PreviewSurface};

use super::{PickHit, RenderHost};

/// Host double that records every call from the editor.
///
/// Picking returns whatever `hit` is set to. Unprojection maps pixels onto
/// the z = 0 plane with screen y pointing down.
#[derive(Debug)]
pub(crate) struct TestHost {
    pub hit: Option<PickHit>,
    pub units_per_pixel: f64,
    pub positions: Vec<Point3>,
    pub colors: Vec<Rgba>,
    pub position_commits: usize,
    pub color_commits: usize,
    pub live_previews: Vec<(PreviewId, PreviewSurface)>,
    pub disposed_previews: Vec<PreviewId>,
    pub navigation: bool,
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            hit: None,
            units_per_pixel: 0.01,
            positions: Vec::new(),
            colors: Vec::new(),
            position_commits: 0,
            color_commits: 0,
            live_previews: Vec::new(),
            disposed_previews: Vec::new(),
            navigation: true,
        }
    }
}

impl RenderHost for TestHost {
    fn pick(&self, _pointer: ScreenPoint) -> Option<PickHit> {
        self.hit
    }

    fn project_screen_to_world(&self, pointer: ScreenPoint) -> Point3 {
        Point3::new(
            pointer.x * self.units_per_pixel,
            -pointer.y * self.units_per_pixel,
            0.0,
        )
    }

    fn commit_positions(&mut self, geometry: &GeometryStore) {
        self.positions = geometry.positions().to_vec();
        self.position_commits += 1;
    }

    fn commit_colors(&mut self, geometry: &GeometryStore) {
        self.colors = geometry.colors().to_vec();
        self.color_commits += 1;
    }

    fn show_preview(&mut self, id: PreviewId, surface: &PreviewSurface) {
        self.live_previews.push((id, surface.clone()));
    }

    fn dispose_preview(&mut self, id: PreviewId) {
        self.live_previews.retain(|(live, _)| *live != id);
        self.disposed_previews.push(id);
    }

    fn set_camera_navigation(&mut self, enabled: bool) {
        self.navigation = enabled;
    }
}
