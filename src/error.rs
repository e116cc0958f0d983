use thiserror::Error;

/// Top-level error type for the pushmesh editing core.
#[derive(Debug, Error)]
pub enum PushmeshError {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to the vertex and index buffers of a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("index buffer length {len} is not a positive multiple of 6")]
    MalformedIndexBuffer { len: usize },

    #[error("index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    #[error("{positions} positions but {colors} colors")]
    PositionCountMismatch { positions: usize, colors: usize },

    #[error("face {face} is out of range for a mesh with {face_count} faces")]
    FaceOutOfRange { face: f64, face_count: usize },
}

/// Errors related to entities held by the scene store.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),
}

/// Errors related to editor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parameter {parameter} = {value} must be finite and positive")]
    ParameterOutOfRange { parameter: &'static str, value: f64 },
}

/// Convenience type alias for results using [`PushmeshError`].
pub type Result<T> = std::result::Result<T, PushmeshError>;
