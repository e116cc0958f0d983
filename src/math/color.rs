/// A linear RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from floating-point components.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from 8-bit channel values and an alpha in `[0, 1]`.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            a,
        )
    }

    /// Returns a copy of this color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Returns the components as `[r, g, b, a]`.
    #[must_use]
    pub const fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgb8_scales_channels() {
        let c = Rgba::from_rgb8(255, 0, 51, 0.5);
        assert!((c.r - 1.0).abs() < f64::EPSILON);
        assert!(c.g.abs() < f64::EPSILON);
        assert!((c.b - 0.2).abs() < 1e-12);
        assert!((c.a - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Rgba::WHITE.with_alpha(0.25);
        assert_eq!(c.to_array(), [1.0, 1.0, 1.0, 0.25]);
    }
}
