use crate::error::{ConfigError, Result};
use crate::math::Rgba;

/// Colors used by the editor for the solid, the selection and the host scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Unselected faces while idle.
    pub base: Rgba,
    /// The whole solid while a face is being extruded.
    pub ghost_base: Rgba,
    /// The face under the pointer while idle, and the preview surface.
    pub hover: Rgba,
    /// The face being extruded.
    pub ghost: Rgba,
    /// Clear color suggested to the host.
    pub background: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            base: Rgba::WHITE,
            ghost_base: Rgba::WHITE.with_alpha(0.35),
            hover: Rgba::from_rgb8(12, 242, 93, 1.0),
            ghost: Rgba::from_rgb8(30, 114, 95, 1.0),
            background: Rgba::from_rgb8(129, 65, 89, 1.0),
        }
    }
}

/// Parameters controlling the editor.
#[derive(Debug, Clone, Copy)]
pub struct EditorConfig {
    move_speed: f64,
    cube_size: f64,
    /// Colors applied to the solid and preview.
    pub palette: Palette,
}

impl EditorConfig {
    /// Gain applied to the projected pointer offset when moving vertices.
    pub const DEFAULT_MOVE_SPEED: f64 = 5.0;

    /// Edge length of the canonical cube.
    pub const DEFAULT_CUBE_SIZE: f64 = 1.0;

    /// Creates a configuration with the default palette.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParameterOutOfRange`] if `move_speed` or
    /// `cube_size` is not finite and positive.
    pub fn new(move_speed: f64, cube_size: f64) -> Result<Self> {
        for (parameter, value) in [("move_speed", move_speed), ("cube_size", cube_size)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ParameterOutOfRange { parameter, value }.into());
            }
        }
        Ok(Self {
            move_speed,
            cube_size,
            palette: Palette::default(),
        })
    }

    /// Replaces the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn move_speed(&self) -> f64 {
        self.move_speed
    }

    #[must_use]
    pub fn cube_size(&self) -> f64 {
        self.cube_size
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            move_speed: Self::DEFAULT_MOVE_SPEED,
            cube_size: Self::DEFAULT_CUBE_SIZE,
            palette: Palette::default(),
        }
    }
}
