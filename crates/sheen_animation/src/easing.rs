//! Easing curves applied to transition progress

use std::fmt;
use std::str::FromStr;

/// Easing curve.
///
/// Every curve maps `0 -> 0` and `1 -> 1` exactly and is point-symmetric
/// around `(0.5, 0.5)`, so a transition that reverses mid-flight is drawn
/// from the same point on the way back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    #[default]
    Linear,
    /// Quadratic ease-in-out
    EaseInOut,
    /// Cubic ease-in-out
    EaseInOutCubic,
}

impl Easing {
    pub const ALL: [Easing; 3] = [Easing::Linear, Easing::EaseInOut, Easing::EaseInOutCubic];

    /// Apply the curve to a linear progress value, clamped to `0.0..=1.0`
    pub fn apply(&self, t: f32) -> f32 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }

    /// Stable id used in configuration files
    pub fn id(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInOut => "ease-in-out",
            Easing::EaseInOutCubic => "ease-in-out-cubic",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Easing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::ALL
            .into_iter()
            .find(|easing| easing.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown easing `{s}`"))
    }
}
