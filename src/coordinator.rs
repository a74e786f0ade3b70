//! Query coordination
//!
//! Turns one debounced input value into at most one catalog lookup:
//! blank input is ignored, a local prefix hit is trusted as-is, and only a
//! miss goes to the remote source. Lookup failures are logged and surfaced
//! as a fixed message; they never escape `handle`.

use std::sync::Arc;
use std::time::Duration;

use crate::cache::SharedCache;
use crate::debouncer::Debouncer;
use crate::presenter::Presenter;
use crate::source::CatalogSource;

/// Shown whenever the catalog cannot be consulted
pub const SERVER_UNREACHABLE_MESSAGE: &str =
    "Unable to reach the server. Please check your connection and try again.";

/// What a single `handle` call did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Input was blank after trimming
    Ignored,
    /// The cache already had prefix matches; no lookup was made
    CacheHit(Vec<String>),
    /// The catalog returned names; `added` of them were new to the cache
    Fetched { added: usize },
    /// The catalog answered with an empty list
    NoMatches,
    /// The lookup failed and the unreachable message was shown
    Failed,
}

pub struct QueryCoordinator<S, P> {
    cache: SharedCache,
    source: S,
    presenter: P,
}

impl<S: CatalogSource, P: Presenter> QueryCoordinator<S, P> {
    pub fn new(cache: SharedCache, source: S, presenter: P) -> Self {
        Self {
            cache,
            source,
            presenter,
        }
    }

    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    /// Handle one input value.
    ///
    /// On a miss the cache is only touched when the lookup succeeds with a
    /// non-empty list, and the option list is only rebuilt when that merge
    /// added something.
    pub async fn handle(&self, raw: &str) -> QueryOutcome {
        let query = raw.trim();
        if query.is_empty() {
            return QueryOutcome::Ignored;
        }

        let matches = self.cache.lock().search(query);
        if !matches.is_empty() {
            log::debug!("Cache hit for {:?}: {} match(es)", query, matches.len());
            return QueryOutcome::CacheHit(matches);
        }

        log::debug!("Cache miss for {:?}, consulting catalog", query);

        match self.source.fetch(query).await {
            Err(e) => {
                log::error!("Catalog lookup for {:?} failed: {}", query, e);
                self.presenter.show_error(SERVER_UNREACHABLE_MESSAGE);
                QueryOutcome::Failed
            }
            Ok(names) if names.is_empty() => {
                log::debug!("Catalog has no names for {:?}", query);
                self.presenter.clear_error();
                QueryOutcome::NoMatches
            }
            Ok(names) => {
                self.presenter.clear_error();

                let (added, entries) = {
                    let mut cache = self.cache.lock();
                    let added = cache.add(&names);
                    (added, cache.entries())
                };
                log::debug!(
                    "Merged {} name(s) for {:?}, {} new, cache size {}",
                    names.len(),
                    query,
                    added,
                    entries.len()
                );

                // Nothing new (blank or already cached names): options are current
                if added > 0 {
                    self.presenter.rebuild_options(&entries);
                }
                QueryOutcome::Fetched { added }
            }
        }
    }
}

impl<S: CatalogSource + 'static, P: Presenter + 'static> QueryCoordinator<S, P> {
    /// Wrap `handle` in a debouncer with the given wait
    pub fn debounced(self: Arc<Self>, wait: Duration) -> Debouncer<String> {
        Debouncer::new(wait, move |value: String| {
            let coordinator = Arc::clone(&self);
            async move {
                coordinator.handle(&value).await;
            }
        })
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod coordinator_tests;
