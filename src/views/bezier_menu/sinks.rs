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

use crate::menu::{PathSink, VectorPath};
use gtk::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Stores the latest outline for a widget's draw handler and schedules a redraw.
#[derive(Debug, Clone)]
pub struct WidgetPathSink {
    widget: gtk::Widget,
    path: Rc<RefCell<VectorPath>>,
}

impl WidgetPathSink {
    pub fn new(widget: &impl IsA<gtk::Widget>, path: Rc<RefCell<VectorPath>>) -> Self {
        Self {
            widget: widget.clone().upcast(),
            path,
        }
    }
}

impl PathSink for WidgetPathSink {
    fn set_path(&self, path: &VectorPath) {
        self.path.borrow_mut().clone_from(path);
        self.widget.queue_draw();
    }
}
