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

//! Maps drag samples to curve inputs and decides how a drag ends.

use super::config::MenuConfiguration;
use super::control_points::CurveInputs;
use super::state::Transition;
use crate::utils::Point;

/// Largest horizontal protrusion of the bulge, whatever the drag distance.
pub const MAX_BULGE: f64 = 100.0;
/// Share of the drag distance that goes into the bulge rather than the base of the curve.
pub const WAVE_FACTOR: f64 = 0.6;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

impl GesturePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled | Self::Failed)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GestureSample {
    /// Touch position in host coordinates.
    pub position: Point,
    /// Translation since the drag started.
    pub translation: Point,
    pub phase: GesturePhase,
}

impl GestureSample {
    pub fn new(position: Point, translation: Point, phase: GesturePhase) -> Self {
        Self {
            position,
            translation,
            phase,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GestureInterpreter<'a> {
    pub config: &'a MenuConfiguration,
    pub view_width: f64,
    pub is_menu_showing: bool,
}

impl GestureInterpreter<'_> {
    /// Admission check run before a pan is allowed to start: near the left edge when the menu is
    /// hidden, or a leftward drag on the uncovered centre pane when it is showing.
    pub fn should_begin(&self, sample: &GestureSample) -> bool {
        let GestureSample {
            position: touch,
            translation,
            ..
        } = *sample;
        if !self.is_menu_showing {
            touch.x < self.view_width / 4.0
        } else {
            touch.x > self.config.width && translation.x < 0.0
        }
    }

    /// Capped at [`MAX_BULGE`] but not below: a leftward drag on a showing menu yields a negative
    /// wave so the bulge follows the finger towards the left edge.
    pub fn wave_width(&self, additional_width: f64) -> f64 {
        (additional_width * WAVE_FACTOR).min(MAX_BULGE)
    }

    pub fn curve_inputs(&self, sample: &GestureSample) -> CurveInputs {
        let additional_width = if self.is_menu_showing {
            sample.translation.x
        } else {
            sample.translation.x.max(0.0)
        };
        let wave_width = self.wave_width(additional_width);
        let base_width = if self.is_menu_showing {
            self.config.width + wave_width
        } else {
            additional_width - wave_width
        };
        CurveInputs {
            base_width,
            wave_width,
            location_y: sample.position.y,
        }
    }

    /// Outcome of a finished drag: close when an open menu is flicked left past two thirds of
    /// its width, open when a closed menu is dragged past a third of the view, otherwise spring
    /// back.
    pub fn resolve_end(&self, sample: &GestureSample) -> Transition {
        let touch = sample.position;
        if self.is_menu_showing {
            if sample.translation.x < 0.0 && touch.x < 2.0 * self.config.width / 3.0 {
                return Transition::Close;
            }
        } else if touch.x > self.view_width / 3.0 {
            return Transition::Open;
        }
        Transition::SnapBack
    }
}

#[cfg(test)]
mod tests {
    use super::super::control_points::{ControlPoint, ControlPointSet};
    use super::*;

    fn sample(x: f64, dx: f64, phase: GesturePhase) -> GestureSample {
        GestureSample::new(Point::new(x, 300.0), Point::new(dx, 0.0), phase)
    }

    #[test]
    fn test_wave_width_is_capped() {
        let config = MenuConfiguration::new(280.0).unwrap();
        for showing in [false, true] {
            let interpreter = GestureInterpreter {
                config: &config,
                view_width: 400.0,
                is_menu_showing: showing,
            };
            for dx in [-10_000.0, -500.0, -1.0, 0.0, 1.0, 50.0, 166.0, 167.0, 10_000.0] {
                let inputs = interpreter.curve_inputs(&sample(10.0, dx, GesturePhase::Changed));
                assert!(inputs.wave_width <= MAX_BULGE, "{dx}");
                if !showing {
                    assert!(inputs.wave_width >= 0.0, "{dx}");
                }
            }
        }
    }

    #[test]
    fn test_curve_inputs_hidden() {
        let config = MenuConfiguration::new(280.0).unwrap();
        let interpreter = GestureInterpreter {
            config: &config,
            view_width: 400.0,
            is_menu_showing: false,
        };
        let inputs = interpreter.curve_inputs(&sample(60.0, 50.0, GesturePhase::Changed));
        assert_eq!(inputs.wave_width, 30.0);
        assert_eq!(inputs.base_width, 20.0);
        assert_eq!(inputs.location_y, 300.0);

        // Leftward drags on a hidden menu don't move the curve.
        let inputs = interpreter.curve_inputs(&sample(5.0, -30.0, GesturePhase::Changed));
        assert_eq!(inputs.wave_width, 0.0);
        assert_eq!(inputs.base_width, 0.0);

        // Past the bulge limit the base takes up the rest of the drag.
        let inputs = interpreter.curve_inputs(&sample(300.0, 300.0, GesturePhase::Changed));
        assert_eq!(inputs.wave_width, MAX_BULGE);
        assert_eq!(inputs.base_width, 200.0);
    }

    #[test]
    fn test_curve_inputs_showing() {
        let config = MenuConfiguration::new(280.0).unwrap();
        let interpreter = GestureInterpreter {
            config: &config,
            view_width: 400.0,
            is_menu_showing: true,
        };
        // Closing drags pull the bulge left of the anchor.
        let inputs = interpreter.curve_inputs(&sample(290.0, -110.0, GesturePhase::Changed));
        assert_eq!(inputs.wave_width, -66.0);
        assert_eq!(inputs.base_width, 214.0);
        let points = ControlPointSet::recompute(inputs, true, &config, 800.0);
        assert_eq!(points[ControlPoint::C].x, 148.0);
        assert_eq!(points[ControlPoint::U3].x, 280.0);
        assert_eq!(points[ControlPoint::L3].x, 280.0);
        let inputs = interpreter.curve_inputs(&sample(350.0, 20.0, GesturePhase::Changed));
        assert_eq!(inputs.wave_width, 12.0);
        assert_eq!(inputs.base_width, 292.0);
    }

    #[test]
    fn test_admission() {
        let config = MenuConfiguration::new(280.0).unwrap();
        let hidden = GestureInterpreter {
            config: &config,
            view_width: 400.0,
            is_menu_showing: false,
        };
        assert!(hidden.should_begin(&sample(99.0, 5.0, GesturePhase::Began)));
        assert!(!hidden.should_begin(&sample(100.0, 5.0, GesturePhase::Began)));
        assert!(!hidden.should_begin(&sample(350.0, -5.0, GesturePhase::Began)));

        let showing = GestureInterpreter {
            is_menu_showing: true,
            ..hidden
        };
        assert!(showing.should_begin(&sample(300.0, -5.0, GesturePhase::Began)));
        assert!(!showing.should_begin(&sample(300.0, 5.0, GesturePhase::Began)));
        assert!(!showing.should_begin(&sample(280.0, -5.0, GesturePhase::Began)));
        assert!(!showing.should_begin(&sample(50.0, -5.0, GesturePhase::Began)));
    }

    #[test]
    fn test_resolve_end() {
        let config = MenuConfiguration::new(280.0).unwrap();
        let hidden = GestureInterpreter {
            config: &config,
            view_width: 400.0,
            is_menu_showing: false,
        };
        assert_eq!(
            hidden.resolve_end(&sample(200.0, 50.0, GesturePhase::Ended)),
            Transition::Open
        );
        assert_eq!(
            hidden.resolve_end(&sample(80.0, 50.0, GesturePhase::Ended)),
            Transition::SnapBack
        );
        // Cancelled and failed drags are judged the same way.
        assert_eq!(
            hidden.resolve_end(&sample(200.0, 50.0, GesturePhase::Cancelled)),
            Transition::Open
        );

        let showing = GestureInterpreter {
            is_menu_showing: true,
            ..hidden
        };
        assert_eq!(
            showing.resolve_end(&sample(100.0, -40.0, GesturePhase::Ended)),
            Transition::Close
        );
        assert_eq!(
            showing.resolve_end(&sample(190.0, -40.0, GesturePhase::Ended)),
            Transition::SnapBack
        );
        assert_eq!(
            showing.resolve_end(&sample(100.0, 10.0, GesturePhase::Failed)),
            Transition::SnapBack
        );
    }
}
