//! 3x3 convolution kernel definitions.

/// A 3x3 convolution kernel.
///
/// Weights are stored row-major: `weights[(dy + 1) * 3 + (dx + 1)]` is the
/// weight applied to the neighbor at offset `(dx, dy)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel3x3 {
    pub weights: [f64; 9],
}

impl Kernel3x3 {
    pub const fn new(weights: [f64; 9]) -> Self {
        Self { weights }
    }

    /// Weight for the neighbor at `(dx, dy)`, each in `-1..=1`.
    #[inline]
    pub fn weight(&self, dx: i32, dy: i32) -> f64 {
        self.weights[((dy + 1) * 3 + (dx + 1)) as usize]
    }

    /// Sum of all weights. A smoothing kernel sums to 1.
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}

impl Default for Kernel3x3 {
    fn default() -> Self {
        BOX
    }
}

/// Mean (box) filter: every neighbor weighted 1/9.
///
/// ```text
///    1   1   1
///    1   1   1   x 1/9
///    1   1   1
/// ```
pub const BOX: Kernel3x3 = Kernel3x3::new([1.0 / 9.0; 9]);

/// Identity kernel, useful for checking border handling.
///
/// ```text
///    0   0   0
///    0   1   0
///    0   0   0
/// ```
pub const IDENTITY: Kernel3x3 =
    Kernel3x3::new([0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_sums_to_one() {
        assert!((BOX.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_weight_layout() {
        let k = Kernel3x3::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(k.weight(-1, -1), 1.0);
        assert_eq!(k.weight(1, -1), 3.0);
        assert_eq!(k.weight(0, 0), 5.0);
        assert_eq!(k.weight(-1, 1), 7.0);
        assert_eq!(k.weight(1, 1), 9.0);
    }

    #[test]
    fn test_default_is_box() {
        assert_eq!(Kernel3x3::default(), BOX);
    }
}
