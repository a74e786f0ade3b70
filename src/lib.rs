//! catalog-suggest library - input suggestions backed by a remote name catalog
//!
//! The core is a sorted, deduplicated prefix cache plus a coordinator that
//! only consults the remote catalog on a cache miss, driven through a
//! debouncer so bursts of keystrokes collapse into one lookup.

pub mod cache;
pub mod config;
pub mod coordinator;
pub mod debouncer;
pub mod error;
pub mod gate;
pub mod presenter;
pub mod source;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use cache::{SharedCache, SuggestionCache};
pub use config::Config;
pub use coordinator::{QueryCoordinator, QueryOutcome, SERVER_UNREACHABLE_MESSAGE};
pub use debouncer::Debouncer;
pub use error::SuggestError;
pub use gate::ControlGate;
pub use presenter::{Presenter, TerminalPresenter};
pub use source::{CatalogSource, HttpCatalogSource};
