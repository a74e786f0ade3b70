//! Shared test utilities for catalog-suggest
//!
//! Fakes for the two collaborators the core talks to: the remote catalog and
//! the presentation layer.

#[cfg(test)]
pub mod test_helpers {
    use std::collections::VecDeque;

    use parking_lot::Mutex;

    use crate::error::SuggestError;
    use crate::presenter::Presenter;
    use crate::source::CatalogSource;

    /// Catalog that replays scripted responses and records every lookup.
    ///
    /// Once the script runs out, lookups succeed with an empty list.
    #[derive(Default)]
    pub struct FakeSource {
        responses: Mutex<VecDeque<Result<Vec<String>, SuggestError>>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeSource {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a successful response
        pub fn respond(self, names: &[&str]) -> Self {
            self.responses
                .lock()
                .push_back(Ok(names.iter().map(|n| n.to_string()).collect()));
            self
        }

        /// Queue a failed response
        pub fn fail(self, error: SuggestError) -> Self {
            self.responses.lock().push_back(Err(error));
            self
        }

        /// Queries received so far, in order
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }
    }

    impl CatalogSource for FakeSource {
        async fn fetch(&self, name: &str) -> Result<Vec<String>, SuggestError> {
            self.calls.lock().push(name.to_string());
            self.responses.lock().pop_front().unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    /// Everything a presenter was asked to do
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum PresenterEvent {
        Error(String),
        Rebuild(Vec<String>),
        Control(bool),
    }

    #[derive(Default)]
    pub struct RecordingPresenter {
        events: Mutex<Vec<PresenterEvent>>,
    }

    impl RecordingPresenter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<PresenterEvent> {
            self.events.lock().clone()
        }

        pub fn rebuilds(&self) -> Vec<Vec<String>> {
            self.events
                .lock()
                .iter()
                .filter_map(|event| match event {
                    PresenterEvent::Rebuild(entries) => Some(entries.clone()),
                    _ => None,
                })
                .collect()
        }

        /// Messages passed to `show_error`, including clears
        pub fn errors(&self) -> Vec<String> {
            self.events
                .lock()
                .iter()
                .filter_map(|event| match event {
                    PresenterEvent::Error(message) => Some(message.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Presenter for RecordingPresenter {
        fn show_error(&self, message: &str) {
            self.events
                .lock()
                .push(PresenterEvent::Error(message.to_string()));
        }

        fn rebuild_options(&self, entries: &[String]) {
            self.events
                .lock()
                .push(PresenterEvent::Rebuild(entries.to_vec()));
        }

        fn set_control_enabled(&self, enabled: bool) {
            self.events.lock().push(PresenterEvent::Control(enabled));
        }
    }
}
