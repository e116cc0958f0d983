mod make_cube;

pub use make_cube::MakeCube;
