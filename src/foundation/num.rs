use crate::foundation::error::{UserpicError, UserpicResult};

/// Bound `value` to `[min, max]`.
///
/// Total over ordinary inputs; callers must not pass `min > max` (contract
/// violation, checked only in debug builds).
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    debug_assert!(min <= max, "clamp requires min <= max");
    value.min(max).max(min)
}

/// Physical display density: device pixels per layout unit.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PixelDensity(f64);

impl Default for PixelDensity {
    fn default() -> Self {
        Self(1.0)
    }
}

impl PixelDensity {
    /// Density with `scale` device pixels per layout unit.
    pub fn new(scale: f64) -> UserpicResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(UserpicError::validation(
                "pixel density scale must be finite and > 0",
            ));
        }
        Ok(Self(scale))
    }

    /// Device pixels per layout unit.
    pub fn scale(self) -> f64 {
        self.0
    }

    /// Round `value` to the nearest unit addressable by this display.
    ///
    /// Used only for offsets, never for sizes that feed back into layout
    /// measurement.
    pub fn round_to_nearest_pixel(self, value: f64) -> f64 {
        (value * self.0).round() / self.0
    }

    /// Layout size converted to whole device pixels.
    pub fn pixel_size(self, layout_size: f64) -> u32 {
        (layout_size * self.0).round().max(0.0) as u32
    }
}
