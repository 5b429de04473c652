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

//! Demo application: a window with a list menu behind a [`BezierMenu`].

use gtk::prelude::*;
use gtk::subclass::prelude::*;
use once_cell::unsync::OnceCell;

use crate::menu::{EventBus, MenuConfiguration, MenuEvent};
use crate::views::BezierMenu;

use gio::ApplicationFlags;
use gtk::{gio, glib};
use std::cell::RefCell;

mod settings;
pub use settings::*;

const MENU_ENTRIES: &[&str] = &["Inbox", "Starred", "Sent", "Drafts", "Archive", "Trash"];

glib::wrapper! {
    pub struct Application(ObjectSubclass<ApplicationInner>)
        @extends gio::Application, gtk::Application;
}

impl Application {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        glib::Object::new(&[
            ("application-id", &crate::APPLICATION_ID),
            ("flags", &ApplicationFlags::empty()),
        ])
        .expect("Failed to create App")
    }

    /// Replaces the settings the menu is built from. Has no effect on an already built window.
    pub fn set_configuration(&self, config: MenuConfiguration) {
        *self.imp().settings.borrow_mut() = Settings::from_configuration(config);
    }

    pub fn settings(&self) -> Settings {
        self.imp().settings.borrow().clone()
    }

    pub fn bus(&self) -> &EventBus {
        &self.imp().bus
    }
}

#[derive(Debug, Default)]
pub struct ApplicationInner {
    pub window: OnceCell<gtk::ApplicationWindow>,
    pub menu: OnceCell<BezierMenu>,
    pub settings: RefCell<Settings>,
    pub bus: EventBus,
}

#[glib::object_subclass]
impl ObjectSubclass for ApplicationInner {
    const NAME: &'static str = "BezierMenuApplication";
    type Type = Application;
    type ParentType = gtk::Application;
}

impl ObjectImpl for ApplicationInner {}

impl ApplicationImpl for ApplicationInner {
    fn activate(&self, app: &Self::Type) {
        self.parent_activate(app);
        if let Some(window) = self.window.get() {
            window.show_all();
            window.present();
        }
    }

    /// Widgets can't be created before `startup` has been called, so the window is built here.
    fn startup(&self, app: &Self::Type) {
        self.parent_startup(app);
        let window = gtk::ApplicationWindow::new(app);
        window.set_title("bezier-menu");
        window.set_default_size(400, 800);
        window.set_resizable(true);

        let status = gtk::Label::new(Some("Drag from the left edge, or press Toggle."));
        status.set_line_wrap(true);
        let toggle = gtk::Button::with_label("Toggle");
        toggle.set_halign(gtk::Align::Center);
        // The button only knows the bus, not the widget.
        let bus = self.bus.clone();
        toggle.connect_clicked(move |_| bus.request_toggle());
        let center = gtk::Box::new(gtk::Orientation::Vertical, 12);
        center.set_valign(gtk::Align::Center);
        center.set_margin_start(24);
        center.set_margin_end(24);
        center.pack_start(&status, false, false, 0);
        center.pack_start(&toggle, false, false, 0);

        let menu_pane = gtk::ListBox::new();
        menu_pane.set_selection_mode(gtk::SelectionMode::Single);
        for entry in MENU_ENTRIES {
            let label = gtk::Label::new(Some(entry));
            label.set_halign(gtk::Align::Start);
            label.set_margin_start(18);
            label.set_margin_top(12);
            label.set_margin_bottom(12);
            menu_pane.add(&label);
        }

        self.bus.subscribe(|event| log::info!("menu event: {event:?}"));

        let settings = self.settings.borrow().clone();
        match BezierMenu::new(&center, &menu_pane, settings, self.bus.clone()) {
            Ok(menu) => {
                for (event, text) in [
                    (MenuEvent::DidOpen, "Menu open."),
                    (MenuEvent::DidClose, "Menu closed."),
                ] {
                    menu.connect_local(
                        event.signal_name(),
                        false,
                        glib::clone!(@weak status => @default-return None, move |_| {
                            status.set_text(text);
                            None
                        }),
                    );
                }
                menu_pane.connect_row_activated(glib::clone!(@weak menu => move |_, _| {
                    menu.toggle_menu();
                }));
                window.add(&menu);
                self.menu.set(menu).unwrap();
            }
            Err(err) => {
                log::error!("could not build menu: {err}");
                status.set_text(&crate::error::Error::suggest_bug_report(&err.to_string()));
                toggle.set_sensitive(false);
                window.add(&center);
            }
        }
        self.window.set(window).unwrap();
        app.add_actions();
    }
}

impl GtkApplicationImpl for ApplicationInner {}

impl Application {
    fn add_actions(&self) {
        let application = self.upcast_ref::<gtk::Application>();
        application.set_accels_for_action("app.quit", &["<Primary>Q"]);
        application.set_accels_for_action("app.toggle-menu", &["<Primary>M", "F9"]);
        application.set_accels_for_action("app.show-control-points", &["<Primary>D"]);
        let window = match self.imp().window.get() {
            Some(w) => w.clone(),
            None => return,
        };

        let quit = gio::SimpleAction::new("quit", None);
        quit.connect_activate(glib::clone!(@weak window => move |_, _| {
            window.close();
        }));

        let toggle_menu = gio::SimpleAction::new("toggle-menu", None);
        toggle_menu.connect_activate(glib::clone!(@weak self as app => move |_, _| {
            if let Some(menu) = app.imp().menu.get() {
                menu.toggle_menu();
            }
        }));

        let show_control_points = gio::SimpleAction::new("show-control-points", None);
        show_control_points.connect_activate(glib::clone!(@weak self as app => move |_, _| {
            let settings = app.settings();
            let val: bool = settings.property(Settings::SHOW_CONTROL_POINTS);
            settings.set_property(Settings::SHOW_CONTROL_POINTS, !val);
        }));

        let about = gio::SimpleAction::new("about", None);
        about.connect_activate(glib::clone!(@weak window => move |_, _| {
            let p = gtk::AboutDialog::new();
            p.set_program_name(crate::APPLICATION_NAME);
            p.set_version(Some(env!("CARGO_PKG_VERSION")));
            p.set_authors(&["Manos Pitsidianakis"]);
            p.set_copyright(Some("2022 - Manos Pitsidianakis"));
            p.set_title("About bezier-menu");
            p.set_license_type(gtk::License::Gpl30);
            p.set_transient_for(Some(&window));
            p.show_all();
        }));

        application.add_action(&quit);
        application.add_action(&toggle_menu);
        application.add_action(&show_control_points);
        application.add_action(&about);
    }
}
