pub mod color;
pub mod normal;

pub use color::Rgba;
pub use normal::newell_normal;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Pointer position in host screen coordinates (pixels).
pub type ScreenPoint = Point2;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
