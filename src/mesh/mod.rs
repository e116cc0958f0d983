pub mod adjacency;
pub mod face;
pub mod geometry;
pub mod scene;

pub use adjacency::AdjacencyIndex;
pub use face::{facet_of, FaceSelection, ResolveFace};
pub use geometry::{GeometryStore, QUAD_INDEX_COUNT};
pub use scene::{PreviewId, PreviewSurface, SceneStore, SolidData, SolidId};
