//! Headless pushmesh session against a console host.
//!
//! ```text
//! cargo run --example session
//! RUST_LOG=pushmesh=trace cargo run --example session
//! ```
//!
//! The host looks straight down the -Z axis at the cube: the square in the
//! middle of an 800x600 viewport picks the +Z face, everything else misses.

use pushmesh::math::{Point3, ScreenPoint, Vector3};
use pushmesh::mesh::{GeometryStore, PreviewId, PreviewSurface};
use pushmesh::operations::query::BoundingBox;
use pushmesh::{Editor, EditorConfig, PickHit, PushmeshError, RenderHost};

/// Triangle id of the first half of the +Z face.
const FRONT_TRIANGLE: u32 = 0;

struct ConsoleHost {
    width: f64,
    height: f64,
    pixels_per_unit: f64,
}

impl ConsoleHost {
    fn to_world(&self, pointer: ScreenPoint) -> (f64, f64) {
        (
            (pointer.x - self.width / 2.0) / self.pixels_per_unit,
            (self.height / 2.0 - pointer.y) / self.pixels_per_unit,
        )
    }
}

impl RenderHost for ConsoleHost {
    fn pick(&self, pointer: ScreenPoint) -> Option<PickHit> {
        let (x, y) = self.to_world(pointer);
        (x.abs() <= 0.5 && y.abs() <= 0.5).then_some(PickHit {
            triangle_id: FRONT_TRIANGLE,
            normal: Vector3::z(),
        })
    }

    fn project_screen_to_world(&self, pointer: ScreenPoint) -> Point3 {
        // Oblique view: vertical motion also reads as depth.
        let (x, y) = self.to_world(pointer);
        Point3::new(x, y, y)
    }

    fn commit_positions(&mut self, geometry: &GeometryStore) {
        if let Some(aabb) = BoundingBox::new().execute(geometry) {
            println!("positions -> bounds {:?}", aabb.extents());
        }
    }

    fn commit_colors(&mut self, geometry: &GeometryStore) {
        println!("colors    -> {} vertices", geometry.vertex_count());
    }

    fn show_preview(&mut self, id: PreviewId, surface: &PreviewSurface) {
        println!("preview   -> show {id:?} ({} vertices)", surface.positions.len());
    }

    fn dispose_preview(&mut self, id: PreviewId) {
        println!("preview   -> dispose {id:?}");
    }

    fn set_camera_navigation(&mut self, enabled: bool) {
        println!("camera    -> navigation {}", if enabled { "on" } else { "off" });
    }
}

fn main() -> Result<(), PushmeshError> {
    // Default: WARN for everything, INFO for pushmesh.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("pushmesh=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut host = ConsoleHost {
        width: 800.0,
        height: 600.0,
        pixels_per_unit: 200.0,
    };
    let mut editor = Editor::new(EditorConfig::default())?;
    editor.sync(&mut host)?;

    let center = ScreenPoint::new(400.0, 300.0);
    editor.pointer_move(&mut host, ScreenPoint::new(10.0, 10.0))?;
    editor.pointer_move(&mut host, center)?;

    editor.pointer_down(&mut host, center)?;
    for step in 1..=4 {
        let y = 300.0 - 5.0 * f64::from(step);
        editor.pointer_move(&mut host, ScreenPoint::new(400.0, y))?;
    }
    editor.pointer_down(&mut host, ScreenPoint::new(400.0, 280.0))?;

    if let Some(aabb) = BoundingBox::new().execute(editor.geometry()?) {
        println!("extruded  -> min {:?} max {:?}", aabb.min, aabb.max);
    }

    editor.reset(&mut host)?;
    Ok(())
}
