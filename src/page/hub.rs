use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::foundation::core::Vec2;

/// Input delivered to mounted pages.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    Scroll { y: f64 },
    PointerMove { position: Vec2 },
    Frame { dt: f64 },
}

pub trait InputListener {
    fn on_event(&mut self, event: &InputEvent);
}

type Registry = RefCell<Vec<(u64, Weak<RefCell<dyn InputListener>>)>>;

/// Single-threaded event source. Listeners are held weakly; a [`Subscription`] keeps the
/// registration alive and removes it when dropped.
#[derive(Default)]
pub struct InputHub {
    listeners: Rc<Registry>,
    next_id: std::cell::Cell<u64>,
}

impl std::fmt::Debug for InputHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl InputHub {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn listen(&self, listener: &Rc<RefCell<dyn InputListener>>) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let mut listeners = self.listeners.borrow_mut();
        listeners.retain(|(_, w)| w.strong_count() > 0);
        listeners.push((id, Rc::downgrade(listener)));
        Subscription {
            id,
            registry: Rc::downgrade(&self.listeners),
        }
    }

    /// Delivers `event` to every live listener; returns how many received it.
    pub fn dispatch(&self, event: InputEvent) -> usize {
        // Snapshot first so listeners may subscribe or unsubscribe while handling.
        let live: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .filter_map(|(_, w)| w.upgrade())
            .collect();
        let mut delivered = 0;
        for listener in &live {
            // A listener already handling an event is skipped rather than re-entered.
            if let Ok(mut listener) = listener.try_borrow_mut() {
                listener.on_event(&event);
                delivered += 1;
            }
        }
        delivered
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(_, w)| w.strong_count() > 0)
            .count()
    }
}

/// Registration guard returned by [`InputHub::listen`].
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Registry>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        if let Ok(mut listeners) = registry.try_borrow_mut() {
            listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/hub.rs"]
mod tests;
