//! Presentation seam
//!
//! The core never renders anything itself. It reports errors, asks for the
//! option list to be rebuilt and toggles the dependent control through this
//! trait. `TerminalPresenter` is the line-oriented implementation used by the
//! binary.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Sink for everything the core wants shown to the user
pub trait Presenter: Send + Sync {
    /// Show a human-readable error; an empty string clears it
    fn show_error(&self, message: &str);

    /// Rebuild the selectable options from the full sorted cache contents
    fn rebuild_options(&self, entries: &[String]);

    /// Enable or disable the control that depends on the input value
    fn set_control_enabled(&self, enabled: bool);

    fn clear_error(&self) {
        self.show_error("");
    }
}

impl<T: Presenter + ?Sized> Presenter for Arc<T> {
    fn show_error(&self, message: &str) {
        (**self).show_error(message)
    }

    fn rebuild_options(&self, entries: &[String]) {
        (**self).rebuild_options(entries)
    }

    fn set_control_enabled(&self, enabled: bool) {
        (**self).set_control_enabled(enabled)
    }
}

#[derive(Debug, Default)]
struct TerminalState {
    error: String,
    control_enabled: Option<bool>,
}

/// Writes presentation changes as plain lines.
///
/// Errors and control state are only written when they change, so repeated
/// identical signals do not flood the output.
pub struct TerminalPresenter<W: Write + Send> {
    out: Mutex<W>,
    state: Mutex<TerminalState>,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            state: Mutex::new(TerminalState::default()),
        }
    }

    /// Consume the presenter and hand back the writer
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_line(&self, line: &str) {
        let mut out = self.out.lock();
        // Output failures are not recoverable here; drop the line
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
    }
}

impl<W: Write + Send> Presenter for TerminalPresenter<W> {
    fn show_error(&self, message: &str) {
        {
            let mut state = self.state.lock();
            if state.error == message {
                return;
            }
            state.error = message.to_string();
        }

        if message.is_empty() {
            self.write_line("error cleared");
        } else {
            self.write_line(&format!("error: {}", message));
        }
    }

    fn rebuild_options(&self, entries: &[String]) {
        self.write_line(&format!("options ({}): {}", entries.len(), entries.join(", ")));
    }

    fn set_control_enabled(&self, enabled: bool) {
        {
            let mut state = self.state.lock();
            if state.control_enabled == Some(enabled) {
                return;
            }
            state.control_enabled = Some(enabled);
        }

        self.write_line(if enabled {
            "control: enabled"
        } else {
            "control: disabled"
        });
    }
}

#[cfg(test)]
#[path = "presenter_tests.rs"]
mod presenter_tests;
