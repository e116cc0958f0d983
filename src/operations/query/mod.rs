mod bounding_box;
mod face_positions;

pub use bounding_box::{Aabb, BoundingBox};
pub use face_positions::FacePositions;
