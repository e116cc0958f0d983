mod editor;
mod host;
mod state;
#[cfg(test)]
pub(crate) mod test_host;

pub use editor::Editor;
pub use host::{PickHit, RenderHost};
pub use state::{HitRecord, InteractionState};
