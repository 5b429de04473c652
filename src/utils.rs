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

use gtk::cairo::Context;

pub mod colors;
pub mod points;
pub use colors::*;
pub use points::Point;

/// Adds a `size` by `size` square centred on `p` to the current path.
pub fn square_at(cr: &Context, p: Point, size: f64) {
    cr.rectangle(p.x - size / 2.0, p.y - size / 2.0, size, size);
}
