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

mod points {
    use gtk::glib;
    use std::ops::{Add, Mul, Sub};

    #[derive(Clone, Debug, Default, Copy, PartialEq, glib::Boxed)]
    #[boxed_type(name = "Point", nullable)]
    pub struct Point {
        pub x: f64,
        pub y: f64,
    }

    impl Point {
        pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

        pub const fn new(x: f64, y: f64) -> Self {
            Self { x, y }
        }

        pub const fn with_x(self, x: f64) -> Self {
            Self { x, y: self.y }
        }

        /// Linear interpolation towards `other`. `t` is not clamped, so values outside `0..=1`
        /// extrapolate, which is what spring overshoot needs.
        pub fn lerp(self, other: Self, t: f64) -> Self {
            self + (other - self) * t
        }
    }

    impl From<(f64, f64)> for Point {
        fn from((x, y): (f64, f64)) -> Point {
            Point { x, y }
        }
    }

    impl Add<Self> for Point {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            (self.x + rhs.x, self.y + rhs.y).into()
        }
    }

    impl Sub<Self> for Point {
        type Output = Self;

        fn sub(self, rhs: Self) -> Self::Output {
            (self.x - rhs.x, self.y - rhs.y).into()
        }
    }

    impl Mul<f64> for Point {
        type Output = Self;

        fn mul(self, f: f64) -> Self::Output {
            (self.x * f, self.y * f).into()
        }
    }

}
pub use points::Point;
