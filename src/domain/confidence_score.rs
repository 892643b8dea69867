use serde::Serialize;

/// Provider certainty, always within `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ConfidenceScore(f64);

impl ConfidenceScore {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 1.0;

    /// Clamps finite values into range. Returns `None` for NaN or infinities.
    pub fn clamped(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(Self(value.clamp(Self::MIN, Self::MAX)))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Rounded percentage shown on the result card.
    pub fn as_percent(&self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}
