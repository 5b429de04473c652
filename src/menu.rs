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

//! Toolkit-independent core of the menu: control point model, outline builder, spring and the
//! gesture-driven state machine. Nothing in here needs a running GTK main loop.

pub mod bus;
pub mod config;
pub mod control_points;
pub mod controller;
pub mod curve;
pub mod gesture;
pub mod spring;
pub mod state;

pub use bus::{EventBus, SubscriptionId};
pub use config::MenuConfiguration;
pub use control_points::{ControlPoint, ControlPointSet, CurveInputs};
pub use controller::{Frame, MenuController, OVERLAY_OPEN_ALPHA};
pub use curve::{build_path, CurveRenderer, PathElement, PathSink, VectorPath};
pub use gesture::{GestureInterpreter, GesturePhase, GestureSample, MAX_BULGE};
pub use spring::Spring;
pub use state::{MenuEvent, MenuState, PaneOrder, Transition, TransitionHandle};
