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

#[macro_use]
extern crate glib;

pub mod app;
pub mod error;
pub mod menu;
pub mod utils;
pub mod views;

pub const APPLICATION_NAME: &str = "bezier-menu";
pub const APPLICATION_ID: &str = "com.epilys.bezier-menu";
pub const ISSUE_TRACKER: &str = "https://github.com/epilys/bezier-menu/issues";
pub const VERSION_INFO: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

pub mod prelude {
    pub use super::*;
    pub use app::{Application, Settings};
    pub use error::{Error, Result};
    pub use menu::{
        EventBus, MenuConfiguration, MenuController, MenuEvent, MenuState, Transition,
    };
    pub use utils::colors::*;
    pub use utils::points::*;
    pub use views::BezierMenu;

    pub use glib::prelude::*;
    pub use gtk::prelude::*;
    pub use gtk::subclass::prelude::ObjectSubclassIsExt;
    pub use gtk::{cairo, gdk, gio, glib};
    pub use std::cell::{Cell, RefCell};
    pub use std::path::{Path, PathBuf};
    pub use std::rc::Rc;
}
