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

//! GTK host for the menu core.
//!
//! The widget stacks, bottom to top:
//!
//! - the centre pane,
//! - a dimming overlay that closes the menu when tapped,
//! - a drawing area that fills the menu outline,
//! - the menu pane, clipped to the same outline,
//! - a drawing area for the debug control point markers.
//!
//! Drags are tracked with a [`gtk::GestureDrag`] on the whole widget and settle animations are
//! driven by the GDK frame clock through a tick callback that only lives while something moves.

use crate::app::Settings;
use crate::error::Result;
use crate::menu::{
    ControlPointSet, CurveRenderer, EventBus, Frame, GesturePhase, GestureSample, MenuController,
    MenuEvent, MenuState, PaneOrder, VectorPath,
};
use crate::utils::{square_at, Color, ColorExt, Point};
use glib::subclass::Signal;
use glib::{ParamFlags, ParamSpec, ParamSpecBoolean, ParamSpecEnum, Value};
use gtk::glib;
use gtk::prelude::*;
use gtk::subclass::prelude::*;
use gtk::Inhibit;
use once_cell::sync::Lazy;
use once_cell::unsync::OnceCell;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

mod sinks;
pub use sinks::WidgetPathSink;

const MARKER_SIZE: f64 = 3.0;

#[derive(Debug, Default)]
pub struct BezierMenuInner {
    overlay: gtk::Overlay,
    dim: gtk::DrawingArea,
    shape: gtk::DrawingArea,
    menu_holder: gtk::EventBox,
    markers: gtk::DrawingArea,
    controller: OnceCell<Rc<RefCell<MenuController>>>,
    renderer: OnceCell<CurveRenderer>,
    settings: OnceCell<Settings>,
    drag: OnceCell<gtk::GestureDrag>,
    tap: OnceCell<gtk::GestureMultiPress>,
    fill_path: Rc<RefCell<VectorPath>>,
    mask_path: Rc<RefCell<VectorPath>>,
    marker_points: Cell<ControlPointSet>,
    dim_alpha: Cell<f64>,
    show_control_points: Cell<bool>,
    drag_start: Cell<Point>,
    drag_translation: Cell<Point>,
    drag_pending: Cell<bool>,
    dragging: Cell<bool>,
    ticking: Cell<bool>,
    pending_events: RefCell<Vec<MenuEvent>>,
}

#[glib::object_subclass]
impl ObjectSubclass for BezierMenuInner {
    const NAME: &'static str = "BezierMenu";
    type Type = BezierMenu;
    type ParentType = gtk::Box;
}

impl ObjectImpl for BezierMenuInner {
    fn constructed(&self, obj: &Self::Type) {
        self.parent_constructed(obj);
        obj.set_expand(true);
        obj.set_visible(true);
        self.overlay.set_expand(true);
        self.overlay.set_visible(true);
        obj.add(&self.overlay);

        // Visibility of these two follows the menu state, not `show_all`.
        self.dim.set_no_show_all(true);
        self.dim.set_visible(false);
        self.menu_holder.set_no_show_all(true);
        self.dim.add_events(
            gtk::gdk::EventMask::BUTTON_PRESS_MASK | gtk::gdk::EventMask::BUTTON_RELEASE_MASK,
        );
        self.shape.set_visible(true);
        self.markers.set_visible(true);
        self.menu_holder.set_halign(gtk::Align::Start);
        self.menu_holder.set_valign(gtk::Align::Fill);
        self.menu_holder.set_visible(false);

        self.overlay.add_overlay(&self.dim);
        self.overlay.add_overlay(&self.shape);
        self.overlay.set_overlay_pass_through(&self.shape, true);
        self.overlay.add_overlay(&self.menu_holder);
        self.overlay.add_overlay(&self.markers);
        self.overlay.set_overlay_pass_through(&self.markers, true);
    }

    fn properties() -> &'static [ParamSpec] {
        static PROPERTIES: Lazy<Vec<ParamSpec>> = Lazy::new(|| {
            vec![
                ParamSpecEnum::new(
                    BezierMenu::MENU_STATE,
                    BezierMenu::MENU_STATE,
                    BezierMenu::MENU_STATE,
                    MenuState::static_type(),
                    MenuState::Closed as i32,
                    ParamFlags::READABLE,
                ),
                ParamSpecBoolean::new(
                    BezierMenu::IS_MENU_SHOWING,
                    BezierMenu::IS_MENU_SHOWING,
                    BezierMenu::IS_MENU_SHOWING,
                    false,
                    ParamFlags::READABLE,
                ),
                ParamSpecBoolean::new(
                    BezierMenu::SHOW_CONTROL_POINTS,
                    BezierMenu::SHOW_CONTROL_POINTS,
                    BezierMenu::SHOW_CONTROL_POINTS,
                    false,
                    ParamFlags::READWRITE,
                ),
            ]
        });
        PROPERTIES.as_ref()
    }

    fn property(&self, _obj: &Self::Type, _id: usize, pspec: &ParamSpec) -> Value {
        let controller = self.controller.get().and_then(|c| c.try_borrow().ok());
        match pspec.name() {
            BezierMenu::MENU_STATE => controller
                .map(|c| c.state())
                .unwrap_or_default()
                .to_value(),
            BezierMenu::IS_MENU_SHOWING => controller
                .map(|c| c.is_menu_showing())
                .unwrap_or(false)
                .to_value(),
            BezierMenu::SHOW_CONTROL_POINTS => self.show_control_points.get().to_value(),
            _ => unimplemented!("{}", pspec.name()),
        }
    }

    fn set_property(&self, _obj: &Self::Type, _id: usize, value: &Value, pspec: &ParamSpec) {
        match pspec.name() {
            BezierMenu::SHOW_CONTROL_POINTS => {
                self.show_control_points.set(value.get().unwrap());
                self.markers.queue_draw();
            }
            _ => unimplemented!("{}", pspec.name()),
        }
    }

    fn signals() -> &'static [Signal] {
        static SIGNALS: Lazy<Vec<Signal>> = Lazy::new(|| {
            [
                MenuEvent::WillOpen,
                MenuEvent::DidOpen,
                MenuEvent::WillClose,
                MenuEvent::DidClose,
            ]
            .into_iter()
            .map(|ev| Signal::builder(ev.signal_name(), &[], <()>::static_type().into()).build())
            .collect()
        });
        SIGNALS.as_ref()
    }
}

impl WidgetImpl for BezierMenuInner {}
impl ContainerImpl for BezierMenuInner {}
impl BoxImpl for BezierMenuInner {}

glib::wrapper! {
    pub struct BezierMenu(ObjectSubclass<BezierMenuInner>)
        @extends gtk::Widget, gtk::Container, gtk::Box;
}

impl BezierMenu {
    pub const MENU_STATE: &str = "menu-state";
    pub const IS_MENU_SHOWING: &str = "is-menu-showing";
    pub const SHOW_CONTROL_POINTS: &str = "show-control-points";

    /// Hosts `center` and `menu`. The menu geometry is read from `settings` once; later changes
    /// of `show-control-points` and `fill-color` are picked up live.
    pub fn new(
        center: &impl IsA<gtk::Widget>,
        menu: &impl IsA<gtk::Widget>,
        settings: Settings,
        bus: EventBus,
    ) -> Result<Self> {
        let config = settings.configuration()?;
        let controller = MenuController::new(config, bus.clone())?;
        let ret: Self = glib::Object::new(&[]).expect("Failed to create BezierMenu");
        let imp = ret.imp();

        imp.overlay.add(center);
        imp.menu_holder.add(menu);
        menu.show_all();
        imp.menu_holder.set_size_request(config.width.ceil() as i32, -1);
        imp.controller
            .set(Rc::new(RefCell::new(controller)))
            .unwrap();
        imp.renderer
            .set(CurveRenderer::new(
                WidgetPathSink::new(&imp.shape, imp.fill_path.clone()),
                WidgetPathSink::new(&imp.menu_holder, imp.mask_path.clone()),
            ))
            .unwrap();
        settings
            .bind_property(Settings::SHOW_CONTROL_POINTS, &ret, Self::SHOW_CONTROL_POINTS)
            .flags(glib::BindingFlags::SYNC_CREATE)
            .build();
        settings.connect_notify_local(
            Some(Settings::FILL_COLOR),
            glib::clone!(@weak ret => move |_, _| {
                ret.imp().shape.queue_draw();
            }),
        );
        imp.settings.set(settings).unwrap();

        ret.setup_drawing();
        ret.setup_gestures();
        ret.setup_bus(&bus);
        ret.connect_size_allocate(|obj, _rect| {
            let frame = obj.controller().borrow_mut().set_view_size(
                obj.allocated_width() as f64,
                obj.allocated_height() as f64,
            );
            obj.render(&frame);
        });
        Ok(ret)
    }

    fn controller(&self) -> &Rc<RefCell<MenuController>> {
        self.imp()
            .controller
            .get()
            .expect("BezierMenu used before construction finished")
    }

    /// Handle for unrelated parts of the application: subscribe to lifecycle events or request
    /// a toggle without a reference to the widget.
    pub fn bus(&self) -> EventBus {
        self.controller().borrow().bus().clone()
    }

    pub fn state(&self) -> MenuState {
        self.property::<MenuState>(Self::MENU_STATE)
    }

    pub fn is_menu_showing(&self) -> bool {
        self.property::<bool>(Self::IS_MENU_SHOWING)
    }

    /// Opens a closed menu or closes an open one. Ignored while a settle animation runs.
    pub fn toggle_menu(&self) {
        let started = match self.controller().try_borrow_mut() {
            Ok(mut controller) => controller.toggle_menu().is_some(),
            Err(_) => {
                // Called from inside a lifecycle callback; retry from the main loop.
                self.bus().request_toggle();
                return;
            }
        };
        if started {
            self.sync();
        }
    }

    fn process_requests(&self) {
        let started = match self.controller().try_borrow_mut() {
            Ok(mut controller) => controller.process_requests().is_some(),
            Err(_) => {
                self.schedule_requests();
                return;
            }
        };
        if started {
            self.sync();
        }
    }

    fn schedule_requests(&self) {
        glib::idle_add_local(glib::clone!(@weak self as obj => @default-return glib::Continue(false), move || {
            obj.process_requests();
            glib::Continue(false)
        }));
    }

    fn setup_bus(&self, bus: &EventBus) {
        bus.subscribe(glib::clone!(@weak self as obj => move |event| {
            obj.imp().pending_events.borrow_mut().push(event);
        }));
        let waker: Rc<dyn Fn()> = Rc::new(glib::clone!(@weak self as obj => move || {
            obj.schedule_requests();
        }));
        bus.set_waker(Some(waker));
    }

    fn setup_drawing(&self) {
        let imp = self.imp();
        imp.shape.connect_draw(
            glib::clone!(@weak self as obj => @default-return Inhibit(false), move |_, cr| {
                if let Err(err) = obj.draw_fill(cr) {
                    log::warn!("could not draw menu outline: {err}");
                }
                Inhibit(false)
            }),
        );
        imp.menu_holder.connect_draw(
            glib::clone!(@weak self as obj => @default-return Inhibit(false), move |_, cr| {
                obj.imp().mask_path.borrow().apply(cr);
                cr.clip();
                Inhibit(false)
            }),
        );
        imp.dim.connect_draw(
            glib::clone!(@weak self as obj => @default-return Inhibit(false), move |_, cr| {
                cr.set_source_color_alpha(Color::BLACK.with_alpha(obj.imp().dim_alpha.get()));
                if let Err(err) = cr.paint() {
                    log::warn!("could not draw dimming overlay: {err}");
                }
                Inhibit(false)
            }),
        );
        imp.markers.connect_draw(
            glib::clone!(@weak self as obj => @default-return Inhibit(false), move |_, cr| {
                if let Err(err) = obj.draw_markers(cr) {
                    log::warn!("could not draw control points: {err}");
                }
                Inhibit(false)
            }),
        );
    }

    fn draw_fill(&self, cr: &gtk::cairo::Context) -> std::result::Result<(), gtk::cairo::Error> {
        let imp = self.imp();
        let fill_color = imp
            .settings
            .get()
            .map(|s| s.property::<Color>(Settings::FILL_COLOR))
            .unwrap_or_default();
        cr.save()?;
        imp.fill_path.borrow().apply(cr);
        cr.set_source_color_alpha(fill_color);
        cr.fill()?;
        cr.restore()
    }

    fn draw_markers(&self, cr: &gtk::cairo::Context) -> std::result::Result<(), gtk::cairo::Error> {
        let imp = self.imp();
        if !imp.show_control_points.get() {
            return Ok(());
        }
        cr.save()?;
        cr.new_path();
        for (_, p) in imp.marker_points.get().iter() {
            square_at(cr, p, MARKER_SIZE);
        }
        cr.set_source_color(Color::RED);
        cr.fill()?;
        cr.restore()
    }

    fn setup_gestures(&self) {
        let imp = self.imp();

        let drag = gtk::GestureDrag::new(&imp.overlay);
        drag.set_propagation_phase(gtk::PropagationPhase::Capture);
        drag.connect_drag_begin(glib::clone!(@weak self as obj => move |gesture, x, y| {
            let imp = obj.imp();
            if obj.controller().borrow().is_animating() {
                gesture.set_state(gtk::EventSequenceState::Denied);
                return;
            }
            imp.drag_start.set(Point::new(x, y));
            imp.drag_translation.set(Point::ZERO);
            imp.drag_pending.set(true);
            imp.dragging.set(false);
        }));
        drag.connect_drag_update(glib::clone!(@weak self as obj => move |gesture, dx, dy| {
            obj.on_drag_update(gesture, Point::new(dx, dy));
        }));
        drag.connect_drag_end(glib::clone!(@weak self as obj => move |_, dx, dy| {
            obj.on_drag_finished(Point::new(dx, dy), GesturePhase::Ended);
        }));
        drag.connect_cancel(glib::clone!(@weak self as obj => move |_, _| {
            let translation = obj.imp().drag_translation.get();
            obj.on_drag_finished(translation, GesturePhase::Cancelled);
        }));
        imp.drag.set(drag).unwrap();

        let tap = gtk::GestureMultiPress::new(&imp.dim);
        tap.connect_released(glib::clone!(@weak self as obj => move |_, _, _, _| {
            obj.toggle_menu();
        }));
        imp.tap.set(tap).unwrap();
    }

    fn on_drag_update(&self, gesture: &gtk::GestureDrag, translation: Point) {
        let imp = self.imp();
        let position = imp.drag_start.get() + translation;
        imp.drag_translation.set(translation);
        let phase = if imp.drag_pending.replace(false) {
            let sample = GestureSample::new(position, translation, GesturePhase::Began);
            if !self.controller().borrow().should_begin(&sample) {
                gesture.set_state(gtk::EventSequenceState::Denied);
                return;
            }
            gesture.set_state(gtk::EventSequenceState::Claimed);
            imp.dragging.set(true);
            GesturePhase::Began
        } else if imp.dragging.get() {
            GesturePhase::Changed
        } else {
            return;
        };
        let frame = self
            .controller()
            .borrow_mut()
            .handle_gesture(&GestureSample::new(position, translation, phase));
        if let Some(frame) = frame {
            self.render(&frame);
        }
        self.sync();
    }

    fn on_drag_finished(&self, translation: Point, phase: GesturePhase) {
        let imp = self.imp();
        imp.drag_pending.set(false);
        if !imp.dragging.replace(false) {
            return;
        }
        let position = imp.drag_start.get() + translation;
        let frame = self
            .controller()
            .borrow_mut()
            .handle_gesture(&GestureSample::new(position, translation, phase));
        if let Some(frame) = frame {
            self.render(&frame);
        }
        self.sync();
    }

    fn render(&self, frame: &Frame) {
        let imp = self.imp();
        if let Some(renderer) = imp.renderer.get() {
            renderer.emit(&frame.points, frame.view_height);
        }
        imp.marker_points.set(frame.points);
        imp.markers.queue_draw();
        imp.dim_alpha.set(frame.overlay_alpha);
        imp.dim.set_visible(frame.overlay_alpha > 0.0);
        imp.dim.queue_draw();
    }

    /// Applies controller state that isn't part of a frame, emits queued lifecycle signals and
    /// starts the frame ticker when something needs to move.
    fn sync(&self) {
        let imp = self.imp();
        let Ok(mut controller) = self.controller().try_borrow_mut() else {
            return;
        };
        let pane_order = controller.pane_order();
        let needs_frames = controller.needs_frames();
        let state_change = controller.take_state_change();
        drop(controller);

        imp.menu_holder
            .set_visible(matches!(pane_order, PaneOrder::MenuFront));
        if needs_frames {
            self.start_ticking();
        }
        if state_change.is_some() {
            self.notify(Self::MENU_STATE);
        }
        let events = std::mem::take(&mut *imp.pending_events.borrow_mut());
        if events
            .iter()
            .any(|ev| matches!(ev, MenuEvent::DidOpen | MenuEvent::DidClose))
        {
            self.notify(Self::IS_MENU_SHOWING);
        }
        for event in events {
            self.emit_by_name::<()>(event.signal_name(), &[]);
        }
    }

    fn start_ticking(&self) {
        let imp = self.imp();
        if imp.ticking.replace(true) {
            return;
        }
        imp.overlay.add_tick_callback(
            glib::clone!(@weak self as obj => @default-return glib::Continue(false), move |_, clock| {
                obj.on_tick(clock)
            }),
        );
    }

    fn on_tick(&self, clock: &gtk::gdk::FrameClock) -> glib::Continue {
        let now = Duration::from_micros(clock.frame_time().max(0) as u64);
        let frame = match self.controller().try_borrow_mut() {
            Ok(mut controller) => controller.tick(now),
            Err(_) => return glib::Continue(true),
        };
        if let Some(frame) = frame {
            self.render(&frame);
            if frame.completed.is_some() {
                self.sync();
            }
        }
        let keep_going = self.controller().borrow().needs_frames();
        self.imp().ticking.set(keep_going);
        glib::Continue(keep_going)
    }
}
