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

//! Observer hub shared between a menu and the rest of the application.
//!
//! Cloning an [`EventBus`] hands out another reference to the same hub. Code that has no access
//! to the menu widget can still subscribe to lifecycle events or ask for the menu to be toggled.

use super::state::MenuEvent;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type Listener = dyn Fn(MenuEvent);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct EventBusInner {
    listeners: RefCell<Vec<(SubscriptionId, Rc<Listener>)>>,
    next_id: Cell<u64>,
    toggle_requests: Cell<usize>,
    waker: RefCell<Option<Rc<dyn Fn()>>>,
}

#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<EventBusInner>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.debug_struct("EventBus")
            .field("listeners", &self.inner.listeners.borrow().len())
            .field("toggle_requests", &self.inner.toggle_requests.get())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(MenuEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let len = listeners.len();
        listeners.retain(|(i, _)| *i != id);
        listeners.len() != len
    }

    /// Delivers `event` to every listener subscribed at the time of the call. Listeners may
    /// subscribe, unsubscribe or request toggles from inside the callback.
    pub fn publish(&self, event: MenuEvent) {
        let listeners: Vec<Rc<Listener>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    /// Queues a toggle. The menu drains the queue with
    /// [`MenuController::process_requests`](super::MenuController::process_requests).
    pub fn request_toggle(&self) {
        self.inner
            .toggle_requests
            .set(self.inner.toggle_requests.get() + 1);
        let waker = self.inner.waker.borrow().clone();
        if let Some(waker) = waker {
            waker();
        }
    }

    pub fn take_toggle_requests(&self) -> usize {
        self.inner.toggle_requests.replace(0)
    }

    pub fn pending_toggle_requests(&self) -> usize {
        self.inner.toggle_requests.get()
    }

    /// Called after every [`EventBus::request_toggle`], so an idle host can schedule work.
    pub fn set_waker(&self, waker: Option<Rc<dyn Fn()>>) {
        *self.inner.waker.borrow_mut() = waker;
    }
}
