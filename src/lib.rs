pub mod config;
pub mod error;
pub mod interaction;
pub mod math;
pub mod mesh;
pub mod operations;

pub use config::{EditorConfig, Palette};
pub use error::{PushmeshError, Result};
pub use interaction::{Editor, PickHit, RenderHost};
