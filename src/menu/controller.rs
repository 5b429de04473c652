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

//! Menu state machine.
//!
//! The controller owns the live control points. Hosts feed it drag samples and frame
//! timestamps and render whatever [`Frame`] it hands back:
//!
//! - [`MenuController::handle_gesture`] tracks a live drag and, when it ends, starts a settle
//!   animation,
//! - [`MenuController::tick`] advances a settle animation and reports its completion,
//! - [`MenuController::toggle_menu`] and queued [`EventBus`] requests start full transitions.
//!
//! Only one of {live drag, settle animation} is active at any time. While a settle is in
//! flight all input is ignored.

use super::bus::EventBus;
use super::config::MenuConfiguration;
use super::control_points::{anchor_x, ControlPointSet};
use super::curve::{build_path, VectorPath};
use super::gesture::{GestureInterpreter, GesturePhase, GestureSample};
use super::spring::Spring;
use super::state::{MenuEvent, MenuState, PaneOrder, Transition, TransitionHandle};
use crate::error::Result;
use std::time::Duration;

/// Opacity of the dimming overlay over the centre pane while the menu is open.
pub const OVERLAY_OPEN_ALPHA: f64 = 0.5;

/// What a host should draw for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub points: ControlPointSet,
    pub view_height: f64,
    pub overlay_alpha: f64,
    /// Set on the frame that finishes a settle animation.
    pub completed: Option<TransitionHandle>,
}

#[derive(Debug, Clone, Copy)]
struct Settle {
    handle: TransitionHandle,
    spring: Spring,
    from: ControlPointSet,
    to: ControlPointSet,
    overlay_from: f64,
    overlay_to: f64,
    started_at: Option<Duration>,
}

#[derive(Debug)]
pub struct MenuController {
    config: MenuConfiguration,
    bus: EventBus,
    view_width: f64,
    view_height: f64,
    points: ControlPointSet,
    is_menu_showing: bool,
    interaction_active: bool,
    settle: Option<Settle>,
    overlay_alpha: f64,
    pane_order: PaneOrder,
    next_transition_id: u64,
    reported_state: MenuState,
}

impl MenuController {
    pub fn new(config: MenuConfiguration, bus: EventBus) -> Result<Self> {
        let config = config.validate()?;
        Ok(Self {
            points: ControlPointSet::resting(false, &config, 0.0),
            config,
            bus,
            view_width: 0.0,
            view_height: 0.0,
            is_menu_showing: false,
            interaction_active: false,
            settle: None,
            overlay_alpha: 0.0,
            pane_order: PaneOrder::MenuBack,
            next_transition_id: 0,
            reported_state: MenuState::Closed,
        })
    }

    pub fn config(&self) -> &MenuConfiguration {
        &self.config
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn points(&self) -> &ControlPointSet {
        &self.points
    }

    pub fn view_size(&self) -> (f64, f64) {
        (self.view_width, self.view_height)
    }

    pub fn is_menu_showing(&self) -> bool {
        self.is_menu_showing
    }

    pub fn is_animating(&self) -> bool {
        self.settle.is_some()
    }

    pub fn interaction_active(&self) -> bool {
        self.interaction_active
    }

    /// The host should keep its frame ticker running while this is true.
    pub fn needs_frames(&self) -> bool {
        self.is_animating() || self.interaction_active
    }

    pub fn overlay_alpha(&self) -> f64 {
        self.overlay_alpha
    }

    pub fn pane_order(&self) -> PaneOrder {
        self.pane_order
    }

    pub fn anchor_x(&self) -> f64 {
        anchor_x(self.is_menu_showing, &self.config)
    }

    pub fn state(&self) -> MenuState {
        match self.settle.map(|s| s.handle.transition) {
            Some(Transition::Open) => MenuState::Opening,
            Some(Transition::Close) => MenuState::Closing,
            Some(Transition::SnapBack) if self.is_menu_showing => MenuState::Opening,
            Some(Transition::SnapBack) => MenuState::Closing,
            None if self.interaction_active && self.is_menu_showing => MenuState::Closing,
            None if self.interaction_active => MenuState::Opening,
            None if self.is_menu_showing => MenuState::Open,
            None => MenuState::Closed,
        }
    }

    /// Returns the current state if it differs from the one returned by the previous call.
    pub fn take_state_change(&mut self) -> Option<MenuState> {
        let state = self.state();
        (std::mem::replace(&mut self.reported_state, state) != state).then_some(state)
    }

    pub fn current_path(&self) -> VectorPath {
        build_path(&self.points, self.view_height)
    }

    pub fn frame(&self) -> Frame {
        Frame {
            points: self.points,
            view_height: self.view_height,
            overlay_alpha: self.overlay_alpha,
            completed: None,
        }
    }

    fn interpreter(&self) -> GestureInterpreter<'_> {
        GestureInterpreter {
            config: &self.config,
            view_width: self.view_width,
            is_menu_showing: self.is_menu_showing,
        }
    }

    /// Updates the host size. When idle the curve is laid out flat against the anchor again.
    pub fn set_view_size(&mut self, width: f64, height: f64) -> Frame {
        self.view_width = width;
        self.view_height = height;
        if !self.needs_frames() {
            self.points = ControlPointSet::resting(self.is_menu_showing, &self.config, height);
        }
        self.frame()
    }

    /// Admission check for a new drag.
    pub fn should_begin(&self, sample: &GestureSample) -> bool {
        if self.is_animating() {
            return false;
        }
        let ret = self.interpreter().should_begin(sample);
        log::debug!(
            "drag at {:?} translation {:?}: {}",
            sample.position,
            sample.translation,
            if ret { "admitted" } else { "rejected" }
        );
        ret
    }

    /// Feeds one drag sample. Returns the frame to render for tracking samples.
    pub fn handle_gesture(&mut self, sample: &GestureSample) -> Option<Frame> {
        if self.is_animating() {
            return None;
        }
        match sample.phase {
            phase if phase.is_terminal() => {
                let transition = if self.interaction_active {
                    self.interpreter().resolve_end(sample)
                } else {
                    log::warn!("drag {phase:?} without an admitted drag");
                    Transition::SnapBack
                };
                self.interaction_active = false;
                self.start_transition(transition);
                Some(self.frame())
            }
            GesturePhase::Began => {
                if !self.interpreter().should_begin(sample) {
                    return None;
                }
                self.interaction_active = true;
                Some(self.track(sample))
            }
            GesturePhase::Changed if self.interaction_active => Some(self.track(sample)),
            _ => {
                log::warn!("drag update without an admitted drag, ignoring");
                None
            }
        }
    }

    fn track(&mut self, sample: &GestureSample) -> Frame {
        let inputs = self.interpreter().curve_inputs(sample);
        self.points = ControlPointSet::recompute(
            inputs,
            self.is_menu_showing,
            &self.config,
            self.view_height,
        );
        self.frame()
    }

    pub fn toggle_menu(&mut self) -> Option<TransitionHandle> {
        self.start_transition(if self.is_menu_showing {
            Transition::Close
        } else {
            Transition::Open
        })
    }

    /// Drains toggle requests queued on the bus. Only the first can start a transition; the rest
    /// land while it is animating and are dropped.
    pub fn process_requests(&mut self) -> Option<TransitionHandle> {
        let mut ret = None;
        for _ in 0..self.bus.take_toggle_requests() {
            ret = ret.or(self.toggle_menu());
        }
        ret
    }

    /// Starts a settle animation towards `transition`'s side. Returns `None` without side effects
    /// when another settle is in flight or when the transition doesn't apply to the current side
    /// (opening an open menu, closing a closed one).
    pub fn start_transition(&mut self, transition: Transition) -> Option<TransitionHandle> {
        if self.is_animating() {
            log::debug!("{transition:?} requested while animating, ignoring");
            return None;
        }
        let (target_x, overlay_to, event) = match transition {
            Transition::Open if !self.is_menu_showing => {
                (self.config.width, OVERLAY_OPEN_ALPHA, Some(MenuEvent::WillOpen))
            }
            Transition::Close if self.is_menu_showing => (0.0, 0.0, Some(MenuEvent::WillClose)),
            Transition::SnapBack => (
                self.anchor_x(),
                if self.is_menu_showing {
                    OVERLAY_OPEN_ALPHA
                } else {
                    0.0
                },
                None,
            ),
            Transition::Open | Transition::Close => {
                log::debug!(
                    "{transition:?} requested while menu is {:?}, ignoring",
                    self.state()
                );
                return None;
            }
        };

        self.interaction_active = false;
        let handle = TransitionHandle {
            id: self.next_transition_id,
            transition,
        };
        self.next_transition_id += 1;
        self.settle = Some(Settle {
            handle,
            spring: Spring::new(self.config.spring_damping, self.config.duration()),
            from: self.points,
            to: self.points.with_x(target_x),
            overlay_from: self.overlay_alpha,
            overlay_to,
            started_at: None,
        });
        match transition {
            Transition::Open => self.pane_order = PaneOrder::MenuFront,
            Transition::Close => self.pane_order = PaneOrder::MenuBack,
            Transition::SnapBack => {}
        }
        log::debug!("starting {transition:?} towards x = {target_x}");
        if let Some(event) = event {
            self.bus.publish(event);
        }
        Some(handle)
    }

    /// Advances the settle animation to `now`, a monotonic timestamp. The first tick after a
    /// transition starts is its time origin. Returns `None` when there is nothing to animate, in
    /// which case the host can stop ticking.
    pub fn tick(&mut self, now: Duration) -> Option<Frame> {
        let Some(mut settle) = self.settle.take() else {
            return self.interaction_active.then(|| self.frame());
        };
        let started_at = *settle.started_at.get_or_insert(now);
        let elapsed = now.saturating_sub(started_at);

        if !settle.spring.is_finished(elapsed) {
            let progress = settle.spring.progress(elapsed);
            self.points = settle.from.interpolate(&settle.to, progress);
            self.overlay_alpha = (settle.overlay_from
                + (settle.overlay_to - settle.overlay_from) * progress)
                .clamp(0.0, 1.0);
            self.settle = Some(settle);
            return Some(self.frame());
        }

        self.overlay_alpha = settle.overlay_to;
        let completed = match settle.handle.transition {
            Transition::Open => {
                self.is_menu_showing = true;
                Some(MenuEvent::DidOpen)
            }
            Transition::Close => {
                self.is_menu_showing = false;
                Some(MenuEvent::DidClose)
            }
            Transition::SnapBack => None,
        };
        // The view may have been resized mid-flight, so lay out against the current height.
        self.points =
            ControlPointSet::resting(self.is_menu_showing, &self.config, self.view_height);
        log::debug!("{:?} finished", settle.handle.transition);
        if let Some(event) = completed {
            self.bus.publish(event);
        }
        Some(Frame {
            completed: Some(settle.handle),
            ..self.frame()
        })
    }
}
