// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for navigation and zoom transitions.

#[cfg(feature = "std")]
#[inline]
fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[cfg(feature = "std")]
#[inline]
fn sin(x: f64) -> f64 {
    x.sin()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
fn sin(x: f64) -> f64 {
    libm::sin(x)
}

/// Interpolation curve applied to a tween's normalized progress.
///
/// The two non-linear curves are the ones the Coppice controllers actually
/// use: zoom transitions run on [`Easing::CircleOut`]; page navigation runs
/// on [`Easing::BackOut`] with amplitude `0.3`, which overshoots slightly
/// before settling and gives the cascade its bounce.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Easing {
    /// Straight-line interpolation.
    #[default]
    Linear,
    /// Circular ease-out: fast start, decelerating along a quarter circle.
    CircleOut,
    /// Back ease-out: overshoots the target, then pulls back.
    ///
    /// `amplitude` controls the overshoot; `0.0` degenerates to a cubic
    /// ease-out.
    BackOut {
        /// Overshoot strength.
        amplitude: f64,
    },
}

impl Easing {
    /// The navigation cascade curve.
    pub const NAV: Self = Self::BackOut { amplitude: 0.3 };

    /// Evaluates the curve at progress `t`.
    ///
    /// `t` is clamped to `[0, 1]`; `eval(0.0) == 0.0` and `eval(1.0) == 1.0`
    /// for every variant.
    #[must_use]
    pub fn eval(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CircleOut => {
                let u = 1.0 - t;
                sqrt(1.0 - u * u)
            }
            Self::BackOut { amplitude } => {
                // Ease-out is the mirrored ease-in core.
                let u = 1.0 - t;
                1.0 - (u * u * u - u * amplitude * sin(u * core::f64::consts::PI))
            }
        }
    }
}
