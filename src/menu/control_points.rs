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

//! The seven points that shape the menu's curved edge.
//!
//! ```text
//!  (0,0)      u3
//!    +--------+
//!    |         \    u2
//!    |          \
//!    |           )  u1
//!    |            > c      bulge follows the touch
//!    |           )  l1
//!    |          /
//!    |         /    l2
//!    +--------+
//!  (0,h)      l3
//! ```
//!
//! `u3` and `l3` pin the curve to the anchor edge (x = 0 when the menu is closed, x = menu width
//! when it is open). `c` is the bulge centre.

use super::config::MenuConfiguration;
use crate::utils::Point;
use std::ops::{Index, IndexMut};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ControlPoint {
    U3,
    U2,
    U1,
    C,
    L1,
    L2,
    L3,
}

impl ControlPoint {
    pub const ALL: [ControlPoint; 7] = [
        Self::U3,
        Self::U2,
        Self::U1,
        Self::C,
        Self::L1,
        Self::L2,
        Self::L3,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::U3 => "u3",
            Self::U2 => "u2",
            Self::U1 => "u1",
            Self::C => "c",
            Self::L1 => "l1",
            Self::L2 => "l2",
            Self::L3 => "l3",
        }
    }
}

/// Scalar inputs the gesture interpreter derives from a drag sample.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct CurveInputs {
    pub base_width: f64,
    pub wave_width: f64,
    pub location_y: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ControlPointSet([Point; 7]);

impl Index<ControlPoint> for ControlPointSet {
    type Output = Point;

    fn index(&self, index: ControlPoint) -> &Point {
        &self.0[index as usize]
    }
}

impl IndexMut<ControlPoint> for ControlPointSet {
    fn index_mut(&mut self, index: ControlPoint) -> &mut Point {
        &mut self.0[index as usize]
    }
}

impl ControlPointSet {
    pub fn recompute(
        CurveInputs {
            base_width,
            wave_width,
            location_y,
        }: CurveInputs,
        is_menu_showing: bool,
        config: &MenuConfiguration,
        view_height: f64,
    ) -> Self {
        let anchor_x = anchor_x(is_menu_showing, config);
        let ratio = config.inner_control_point_ratio;
        let spread = config.outer_control_point_distance;
        let bulge_x = base_width + wave_width;

        let mut ret = Self::default();
        ret[ControlPoint::U3] = Point::new(anchor_x, 0.0);
        ret[ControlPoint::U2] = Point::new(base_width, location_y * ratio);
        ret[ControlPoint::U1] = Point::new(bulge_x, location_y - spread);
        ret[ControlPoint::C] = Point::new(bulge_x, location_y);
        ret[ControlPoint::L1] = Point::new(bulge_x, location_y + spread);
        ret[ControlPoint::L2] = Point::new(
            base_width,
            location_y + (view_height - location_y) * (1.0 - ratio),
        );
        ret[ControlPoint::L3] = Point::new(anchor_x, view_height);
        ret
    }

    /// Resting layout: no bulge, curve flat against the anchor of the committed side.
    pub fn resting(is_menu_showing: bool, config: &MenuConfiguration, view_height: f64) -> Self {
        let base_width = anchor_x(is_menu_showing, config);
        Self::recompute(
            CurveInputs {
                base_width,
                wave_width: 0.0,
                location_y: view_height / 2.0,
            },
            is_menu_showing,
            config,
            view_height,
        )
    }

    /// Same points with every x-coordinate replaced by `x`. Used as the target of a settle
    /// animation, which only moves points horizontally.
    pub fn with_x(mut self, x: f64) -> Self {
        for p in self.0.iter_mut() {
            *p = p.with_x(x);
        }
        self
    }

    /// Interpolates every point towards `target` by `progress`.
    pub fn interpolate(&self, target: &Self, progress: f64) -> Self {
        let mut ret = *self;
        for cp in ControlPoint::ALL {
            ret[cp] = self[cp].lerp(target[cp], progress);
        }
        ret
    }

    pub fn iter(&self) -> impl Iterator<Item = (ControlPoint, Point)> + '_ {
        ControlPoint::ALL.into_iter().map(move |cp| (cp, self[cp]))
    }
}

pub fn anchor_x(is_menu_showing: bool, config: &MenuConfiguration) -> f64 {
    if is_menu_showing {
        config.width
    } else {
        0.0
    }
}
