//! Pure easing functions for tab transitions
//!
//! Each function maps normalized time `t` in [0, 1] to normalized progress.
//! The tween engine is agnostic to which curve is used.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Easing curve selectable per call site or through configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Constant velocity
    Linear,
    /// Symmetric acceleration and deceleration, no overshoot
    #[default]
    CubicInOut,
    /// Oscillating overshoot near both ends
    ElasticInOut,
}

impl EasingType {
    /// Apply the easing function to a progress value
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            EasingType::Linear => linear(t),
            EasingType::CubicInOut => cubic_in_out(t),
            EasingType::ElasticInOut => elastic_in_out(t),
        }
    }

    /// Whether every output stays within [0, 1] and never reverses
    pub fn is_monotonic(&self) -> bool {
        !matches!(self, EasingType::ElasticInOut)
    }
}

#[inline]
pub fn linear(t: f64) -> f64 {
    t
}

/// Cubic in-out: 4t³ below the midpoint, 1 + ½(2t − 2)³ above
#[inline]
pub fn cubic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        0.5 * (2.0 * t - 2.0).powi(3) + 1.0
    }
}

/// Elastic in-out: exponentially decaying sine, non-monotonic on purpose
#[inline]
pub fn elastic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        0.5 * (6.5 * PI * 2.0 * t).sin() * 2.0_f64.powf(10.0 * (2.0 * t - 1.0))
    } else {
        0.5 * (-6.5 * PI * ((2.0 * t - 1.0) + 1.0)).sin() * 2.0_f64.powf(-10.0 * (2.0 * t - 1.0))
            + 1.0
    }
}
