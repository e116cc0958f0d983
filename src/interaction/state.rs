use crate::math::{ScreenPoint, Vector3};
use crate::mesh::{PreviewId, SolidId};

/// What was grabbed when an extrusion started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// The solid being extruded.
    pub solid: SolidId,
    /// Face id, `triangle_id / 2`.
    pub face: f64,
    /// Offset of the face's first triangle, `2 * floor(face)`.
    pub facet: usize,
    /// Extrusion direction, fixed for the whole drag.
    pub normal: Vector3,
    /// Pointer position of the previous event of this drag.
    pub pointer: ScreenPoint,
    /// Preview surface shown for the duration of the drag.
    pub preview: PreviewId,
}

/// Interaction mode shared by the pointer handlers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// Hovering highlights the face under the pointer.
    #[default]
    Idle,
    /// A face is following the pointer.
    Extruding(HitRecord),
}

impl InteractionState {
    #[must_use]
    pub fn is_extruding(&self) -> bool {
        matches!(self, Self::Extruding(_))
    }

    /// Returns the active hit record, if extruding.
    #[must_use]
    pub fn hit(&self) -> Option<&HitRecord> {
        match self {
            Self::Idle => None,
            Self::Extruding(hit) => Some(hit),
        }
    }
}
