/*
 * bezier-menu
 *
 * Copyright 2022 - Manos Pitsidianakis
 *
 * This file is part of bezier-menu.
 *
 * bezier-menu is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * bezier-menu is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with bezier-menu. If not, see <http://www.gnu.org/licenses/>.
 */

//! Damped spring used for settle animations.
//!
//! The spring is parameterised the way toolkit animation APIs usually are: a damping ratio and a
//! fixed duration. The natural frequency is chosen so the distance to the target is bounded by
//! [`Spring::SETTLE_THRESHOLD`] at the end of the duration, and the last frame is forced onto the
//! target so completion is exact.

use std::time::Duration;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spring {
    damping: f64,
    duration: Duration,
    omega: f64,
}

impl Spring {
    pub const SETTLE_THRESHOLD: f64 = 1e-3;

    /// `damping` is expected in `(0, 1]`; the configuration validates it.
    pub fn new(damping: f64, duration: Duration) -> Self {
        let damping = damping.clamp(f64::EPSILON, 1.0);
        Self {
            damping,
            duration,
            omega: Self::decay_rate() / damping,
        }
    }

    /// Solves `e^-x (1 + x) = SETTLE_THRESHOLD` for `x`. For any damping ratio up to 1 the
    /// distance to the target after `t` is at most `e^(-ζωt) (1 + ζωt)`, so `ζω = x` settles by
    /// the end of the duration.
    fn decay_rate() -> f64 {
        let target = -Self::SETTLE_THRESHOLD.ln();
        let mut x = target;
        // Contraction with factor 1 / (1 + x) < 0.1.
        for _ in 0..32 {
            x = target + x.ln_1p();
        }
        x
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Normalized displacement from start (`0.0`) to target (`1.0`) after `fraction` of the
    /// duration has elapsed, with zero initial velocity. Under-damped springs overshoot past
    /// `1.0` before settling.
    pub fn value_at(&self, fraction: f64) -> f64 {
        if fraction.is_nan() || fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        let zeta = self.damping;
        let omega = self.omega;
        let t = fraction;
        let envelope = (-zeta * omega * t).exp();
        if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            1.0 - envelope * ((omega_d * t).cos() + (zeta * omega / omega_d) * (omega_d * t).sin())
        } else {
            1.0 - envelope * (1.0 + omega * t)
        }
    }

    pub fn fraction(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// [`Spring::value_at`] for wall-clock elapsed time.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        self.value_at(self.fraction(elapsed))
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}
