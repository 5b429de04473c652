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

use gtk::glib;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, glib::Enum)]
#[enum_type(name = "BezierMenuState")]
pub enum MenuState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Lifecycle notifications. `Will*` fire when a transition starts, `Did*` when it completes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, glib::Enum)]
#[enum_type(name = "BezierMenuEvent")]
pub enum MenuEvent {
    WillOpen,
    DidOpen,
    WillClose,
    DidClose,
}

impl MenuEvent {
    /// Name of the matching widget signal.
    pub const fn signal_name(self) -> &'static str {
        match self {
            Self::WillOpen => "will-open",
            Self::DidOpen => "did-open",
            Self::WillClose => "will-close",
            Self::DidClose => "did-close",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Transition {
    Open,
    Close,
    /// Spring back to the side the menu is already committed to.
    SnapBack,
}

/// Stacking of the menu pane relative to the centre pane.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum PaneOrder {
    MenuFront,
    #[default]
    MenuBack,
}

/// Identifies one started settle animation. Reported again by
/// [`MenuController::tick`](super::MenuController::tick) when it completes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TransitionHandle {
    pub(super) id: u64,
    pub transition: Transition,
}
