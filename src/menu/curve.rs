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

//! Builds the closed outline of the menu pane from the control points and hands it to the
//! render sinks.

use super::control_points::{ControlPoint, ControlPointSet};
use crate::utils::Point;
use std::fmt::Write;
use std::rc::Rc;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathElement {
    MoveTo(Point),
    LineTo(Point),
    CurveTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    ClosePath,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VectorPath {
    elements: Vec<PathElement>,
}

impl VectorPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.elements.push(PathElement::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.elements.push(PathElement::LineTo(p));
        self
    }

    pub fn curve_to(&mut self, control1: Point, control2: Point, end: Point) -> &mut Self {
        self.elements.push(PathElement::CurveTo {
            control1,
            control2,
            end,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.elements.push(PathElement::ClosePath);
        self
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Replays the path on a cairo context as a new path. The caller decides whether to fill,
    /// clip or stroke it.
    pub fn apply(&self, cr: &gtk::cairo::Context) {
        cr.new_path();
        for element in &self.elements {
            match *element {
                PathElement::MoveTo(p) => cr.move_to(p.x, p.y),
                PathElement::LineTo(p) => cr.line_to(p.x, p.y),
                PathElement::CurveTo {
                    control1,
                    control2,
                    end,
                } => cr.curve_to(
                    control1.x, control1.y, control2.x, control2.y, end.x, end.y,
                ),
                PathElement::ClosePath => cr.close_path(),
            }
        }
    }
}

/// SVG path data, e.g. `M0 0 L280 0 C...`. Handy for logging and for comparing paths in tests.
impl std::fmt::Display for VectorPath {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut sep = "";
        for element in &self.elements {
            fmt.write_str(sep)?;
            sep = " ";
            match element {
                PathElement::MoveTo(p) => write!(fmt, "M{} {}", p.x, p.y)?,
                PathElement::LineTo(p) => write!(fmt, "L{} {}", p.x, p.y)?,
                PathElement::CurveTo {
                    control1,
                    control2,
                    end,
                } => write!(
                    fmt,
                    "C{} {} {} {} {} {}",
                    control1.x, control1.y, control2.x, control2.y, end.x, end.y
                )?,
                PathElement::ClosePath => fmt.write_char('Z')?,
            }
        }
        Ok(())
    }
}

/// Outline of the menu pane: along the top edge to the anchor, down the curved edge through the
/// bulge, back along the bottom edge and up the left side.
pub fn build_path(points: &ControlPointSet, view_height: f64) -> VectorPath {
    use ControlPoint::*;

    let mut path = VectorPath::new();
    path.move_to(Point::ZERO)
        .line_to(Point::new(points[U3].x, 0.0))
        .curve_to(points[U2], points[U1], points[C])
        .curve_to(points[L1], points[L2], points[L3])
        .line_to(Point::new(0.0, view_height))
        .close();
    path
}

/// Consumer of the rendered outline.
pub trait PathSink {
    fn set_path(&self, path: &VectorPath);
}

impl<S: PathSink + ?Sized> PathSink for Rc<S> {
    fn set_path(&self, path: &VectorPath) {
        (**self).set_path(path)
    }
}

/// Pushes one path per frame to the fill sink and the mask sink. Both always receive the same
/// path.
pub struct CurveRenderer {
    fill: Box<dyn PathSink>,
    mask: Box<dyn PathSink>,
}

impl std::fmt::Debug for CurveRenderer {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.debug_struct("CurveRenderer").finish()
    }
}

impl CurveRenderer {
    pub fn new(fill: impl PathSink + 'static, mask: impl PathSink + 'static) -> Self {
        Self {
            fill: Box::new(fill),
            mask: Box::new(mask),
        }
    }

    pub fn emit(&self, points: &ControlPointSet, view_height: f64) -> VectorPath {
        let path = build_path(points, view_height);
        log::trace!("curve {path}");
        self.fill.set_path(&path);
        self.mask.set_path(&path);
        path
    }
}
