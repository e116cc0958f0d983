mod extrude;

pub use extrude::{affected_vertices, ExtrudeFace};
