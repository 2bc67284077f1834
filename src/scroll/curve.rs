//! Pointer displacement to scroll velocity mapping.

use crate::config::DragScrollConfig;

/// Largest magnitude the curve will produce, in pixels per step.
///
/// Large displacements with a steep exponent overflow `f64` to infinity;
/// the result is clamped here before converting to an integer.
pub const CURVE_CEILING: f64 = i32::MAX as f64;

/// Map a pointer displacement to a signed scroll delta.
///
/// The displacement is first expressed in lines (`f = delta / line_height`),
/// then `(|f| * scale) ^ (1 + |f| * accel)` lines are scrolled, converted back
/// to pixels. The power is applied to the magnitude and the sign of `delta`
/// reapplied afterwards, so negative displacements never feed a fractional
/// exponent a negative base.
///
/// `accel = 0` gives a linear response; larger values keep small motions
/// precise while large drags accelerate.
pub fn curve(delta: i64, line_height: u32, scale: f64, accel: f64) -> i64 {
    if delta == 0 {
        return 0;
    }

    let height = f64::from(line_height.max(1));
    let lines = (delta as f64 / height).abs();
    let magnitude = (lines * scale).powf(1.0 + lines * accel) * height;

    let magnitude = if magnitude.is_nan() {
        0
    } else {
        magnitude.min(CURVE_CEILING) as i64
    };

    if delta < 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// The curve parameters of one gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityCurve {
    /// Multiplier applied to the displacement in lines.
    pub scale: f64,
    /// How quickly the exponent grows with the displacement.
    pub accel: f64,
}

impl VelocityCurve {
    /// Curve with explicit parameters.
    pub fn new(scale: f64, accel: f64) -> Self {
        Self { scale, accel }
    }

    /// Curve configured by `motion_scale` / `motion_accelerate`.
    pub fn from_config(config: &DragScrollConfig) -> Self {
        Self::new(config.motion_scale, config.motion_accelerate)
    }

    /// Scroll delta in pixels for a displacement of `delta` pixels.
    pub fn apply(&self, delta: i64, line_height: u32) -> i64 {
        curve(delta, line_height, self.scale, self.accel)
    }
}
