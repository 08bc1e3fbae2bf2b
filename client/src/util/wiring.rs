//! Lifetime of one component's listeners and background work.
//!
//! A [`Wiring`] owns every `EventListener` a component registered, plus any
//! teardown hooks (observer disconnects, loop cancellation, stop flags).
//! Dropping it removes the listeners and runs the hooks in registration order.

use std::borrow::Cow;

use gloo_events::{EventListener, EventListenerOptions};
use web_sys::{Event, EventTarget};

pub struct Wiring {
    name: &'static str,
    listeners: Vec<EventListener>,
    on_stop: Vec<Box<dyn FnOnce()>>,
}

impl Wiring {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self { name, listeners: Vec::new(), on_stop: Vec::new() }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Register a passive listener.
    pub fn on<F>(&mut self, target: &EventTarget, event: impl Into<Cow<'static, str>>, callback: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.listeners.push(EventListener::new(target, event, callback));
    }

    /// Register a listener that may call `preventDefault`.
    pub fn on_cancelable<F>(&mut self, target: &EventTarget, event: impl Into<Cow<'static, str>>, callback: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.listeners
            .push(EventListener::new_with_options(target, event, EventListenerOptions::enable_prevent_default(), callback));
    }

    /// Run `hook` when this wiring is torn down.
    pub fn on_stop(&mut self, hook: impl FnOnce() + 'static) {
        self.on_stop.push(Box::new(hook));
    }
}

impl Drop for Wiring {
    fn drop(&mut self) {
        self.listeners.clear();
        for hook in self.on_stop.drain(..) {
            hook();
        }
        log::debug!("{}: stopped", self.name);
    }
}
