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

mod utils;
use utils::*;

use bezier_menu::menu::*;
use bezier_menu::utils::Point;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const VIEW_WIDTH: f64 = 400.0;
const VIEW_HEIGHT: f64 = 800.0;

struct Harness {
    controller: MenuController,
    events: Rc<RefCell<Vec<MenuEvent>>>,
    now: Duration,
}

impl Harness {
    fn new() -> Self {
        let bus = EventBus::new();
        let events = Rc::new(RefCell::new(vec![]));
        {
            let events = events.clone();
            bus.subscribe(move |ev| events.borrow_mut().push(ev));
        }
        let mut controller =
            MenuController::new(MenuConfiguration::new(280.0).unwrap(), bus).unwrap();
        controller.set_view_size(VIEW_WIDTH, VIEW_HEIGHT);
        Self {
            controller,
            events,
            now: Duration::from_secs(1),
        }
    }

    fn opened() -> Self {
        let mut ret = Self::new();
        assert!(ret.controller.toggle_menu().is_some());
        ret.settle();
        assert!(ret.controller.is_menu_showing());
        ret.events.borrow_mut().clear();
        ret
    }

    fn drag(&mut self, x: f64, dx: f64, phase: GesturePhase) -> Option<Frame> {
        self.controller.handle_gesture(&GestureSample::new(
            Point::new(x, VIEW_HEIGHT / 2.0),
            Point::new(dx, 0.0),
            phase,
        ))
    }

    fn settle(&mut self) {
        self.now = run_to_end(&mut self.controller, self.now);
    }

    fn events(&self) -> Vec<MenuEvent> {
        self.events.borrow().clone()
    }

    fn anchor_points_x(&self) -> (f64, f64) {
        let points = self.controller.points();
        (points[ControlPoint::U3].x, points[ControlPoint::L3].x)
    }
}

#[test]
fn test_drag_past_a_third_opens() {
    let mut h = Harness::new();
    assert!(h.drag(20.0, 0.0, GesturePhase::Began).is_some());
    assert!(h.drag(120.0, 50.0, GesturePhase::Changed).is_some());
    assert_eq!(h.controller.state(), MenuState::Opening);
    h.drag(VIEW_WIDTH * 0.5, 50.0, GesturePhase::Ended);

    assert!(h.controller.is_animating());
    assert_eq!(h.controller.pane_order(), PaneOrder::MenuFront);
    assert_eq!(h.events(), vec![MenuEvent::WillOpen]);
    assert!(!h.controller.is_menu_showing());

    h.settle();
    assert!(h.controller.is_menu_showing());
    assert_eq!(h.controller.state(), MenuState::Open);
    assert_eq!(h.anchor_points_x(), (280.0, 280.0));
    assert!(h.controller.points().iter().all(|(_, p)| p.x == 280.0));
    assert_eq!(h.events(), vec![MenuEvent::WillOpen, MenuEvent::DidOpen]);
}

#[test]
fn test_flick_left_closes() {
    let mut h = Harness::opened();
    assert_eq!(h.anchor_points_x(), (280.0, 280.0));

    assert!(h.drag(300.0, -10.0, GesturePhase::Began).is_some());
    h.drag(100.0, -40.0, GesturePhase::Ended);
    assert_eq!(h.controller.state(), MenuState::Closing);
    assert_eq!(h.controller.pane_order(), PaneOrder::MenuBack);
    assert_eq!(h.events(), vec![MenuEvent::WillClose]);

    h.settle();
    assert!(!h.controller.is_menu_showing());
    assert_eq!(h.controller.state(), MenuState::Closed);
    assert_eq!(h.anchor_points_x(), (0.0, 0.0));
    assert_eq!(h.controller.overlay_alpha(), 0.0);
    assert_eq!(h.events(), vec![MenuEvent::WillClose, MenuEvent::DidClose]);
}

#[test]
fn test_close_drag_pulls_the_bulge_left() {
    let mut h = Harness::opened();
    assert!(h.drag(390.0, -10.0, GesturePhase::Began).is_some());
    let frame = h.drag(290.0, -110.0, GesturePhase::Changed).unwrap();
    assert_eq!(frame.points[ControlPoint::U3].x, 280.0);
    assert_eq!(frame.points[ControlPoint::L3].x, 280.0);
    assert_eq!(frame.points[ControlPoint::U2].x, 214.0);
    assert_eq!(frame.points[ControlPoint::C].x, 148.0);
    assert_eq!(frame.points[ControlPoint::U1].x, 148.0);
    assert_eq!(frame.points[ControlPoint::L1].x, 148.0);
    assert_eq!(h.controller.state(), MenuState::Closing);

    // Released right of two thirds of the width: back to open, no events.
    h.drag(290.0, -110.0, GesturePhase::Ended);
    h.settle();
    assert!(h.controller.is_menu_showing());
    assert!(h.controller.points().iter().all(|(_, p)| p.x == 280.0));
    assert!(h.events().is_empty());
}

#[test]
fn test_short_drag_snaps_back() {
    let mut h = Harness::new();
    assert!(h.drag(10.0, 0.0, GesturePhase::Began).is_some());
    let frame = h.drag(60.0, 50.0, GesturePhase::Changed).unwrap();
    assert!(frame.points[ControlPoint::C].x > 0.0);
    h.drag(VIEW_WIDTH * 0.2, 70.0, GesturePhase::Ended);
    assert!(h.controller.is_animating());

    h.settle();
    assert_eq!(h.controller.state(), MenuState::Closed);
    assert!(h.controller.points().iter().all(|(_, p)| p.x == 0.0));
    assert!(h.events().is_empty());
}

#[test]
fn test_double_toggle_is_ignored_while_animating() {
    let mut h = Harness::new();
    let first = h.controller.toggle_menu();
    assert!(first.is_some());
    h.controller.tick(h.now);
    h.now += Duration::from_millis(100);
    h.controller.tick(h.now);
    assert_eq!(h.controller.toggle_menu(), None);

    h.settle();
    assert!(h.controller.is_menu_showing());
    assert_eq!(h.events(), vec![MenuEvent::WillOpen, MenuEvent::DidOpen]);
}

#[test]
fn test_completion_reports_the_started_handle() {
    let mut h = Harness::new();
    let handle = h.controller.toggle_menu().unwrap();
    assert_eq!(handle.transition, Transition::Open);
    let mut completed = None;
    while let Some(frame) = h.controller.tick(h.now) {
        completed = completed.or(frame.completed);
        h.now += Duration::from_millis(16);
    }
    assert_eq!(completed, Some(handle));
}

#[test]
fn test_input_ignored_during_settle() {
    let mut h = Harness::new();
    h.controller.toggle_menu();
    h.controller.tick(h.now);
    let before = *h.controller.points();
    let sample = GestureSample::new(Point::new(10.0, 100.0), Point::ZERO, GesturePhase::Began);
    assert!(!h.controller.should_begin(&sample));
    assert_eq!(h.drag(10.0, 0.0, GesturePhase::Began), None);
    assert_eq!(h.drag(200.0, 190.0, GesturePhase::Changed), None);
    assert_eq!(*h.controller.points(), before);
}

#[test]
fn test_lifecycle_alternates() {
    let mut h = Harness::new();
    for _ in 0..3 {
        h.controller.toggle_menu().unwrap();
        h.settle();
        h.controller.toggle_menu().unwrap();
        h.settle();
    }
    let events = h.events();
    assert_eq!(events.len(), 12);
    for pair in events.chunks(4) {
        assert_eq!(
            pair,
            &[
                MenuEvent::WillOpen,
                MenuEvent::DidOpen,
                MenuEvent::WillClose,
                MenuEvent::DidClose
            ]
        );
    }
}

#[test]
fn test_listener_can_request_toggle_from_callback() {
    let mut h = Harness::new();
    let bus = h.controller.bus().clone();
    {
        let requester = bus.clone();
        bus.subscribe(move |ev| {
            if ev == MenuEvent::DidOpen {
                requester.request_toggle();
            }
        });
    }
    h.controller.toggle_menu().unwrap();
    h.settle();
    assert!(h.controller.is_menu_showing());
    assert_eq!(bus.pending_toggle_requests(), 1);

    let handle = h.controller.process_requests().unwrap();
    assert_eq!(handle.transition, Transition::Close);
    h.settle();
    assert!(!h.controller.is_menu_showing());
    assert_eq!(
        h.events(),
        vec![
            MenuEvent::WillOpen,
            MenuEvent::DidOpen,
            MenuEvent::WillClose,
            MenuEvent::DidClose
        ]
    );
}

#[test]
fn test_rendered_outline_follows_points() {
    let h = Harness::opened();
    let path = h.controller.current_path();
    assert_eq!(
        path.elements().first(),
        Some(&PathElement::MoveTo(Point::new(0.0, 0.0)))
    );
    assert_eq!(path.elements().last(), Some(&PathElement::ClosePath));
    assert_eq!(
        path.to_string(),
        "M0 0 L280 0 C280 280 280 325 280 400 C280 475 280 520 280 800 L0 800 Z"
    );
}
