//! Dependent control gating
//!
//! The input field drives a second control (the "add" action). It is only
//! enabled when the typed value names an entry the catalog has confirmed.

use std::sync::Arc;
use std::time::Duration;

use crate::cache::SharedCache;
use crate::debouncer::Debouncer;
use crate::presenter::Presenter;

pub struct ControlGate<P> {
    cache: SharedCache,
    presenter: P,
}

impl<P: Presenter> ControlGate<P> {
    pub fn new(cache: SharedCache, presenter: P) -> Self {
        Self { cache, presenter }
    }

    /// Decide whether the control is enabled for `raw` and report it.
    pub fn evaluate(&self, raw: &str) -> bool {
        let value = raw.trim();
        let enabled = !value.is_empty() && self.cache.lock().contains(value);
        self.presenter.set_control_enabled(enabled);
        enabled
    }
}

impl<P: Presenter + 'static> ControlGate<P> {
    /// Wrap `evaluate` in a debouncer with the given wait
    pub fn debounced(self: Arc<Self>, wait: Duration) -> Debouncer<String> {
        Debouncer::new(wait, move |value: String| {
            let gate = Arc::clone(&self);
            async move {
                gate.evaluate(&value);
            }
        })
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod gate_tests;
