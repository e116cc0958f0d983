mod clear_colors;
mod set_face_color;

pub use clear_colors::ClearColors;
pub use set_face_color::SetFaceColor;
