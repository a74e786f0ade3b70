//! Remote catalog abstraction
//!
//! The coordinator only needs "give me the names related to this query".
//! `HttpCatalogSource` answers that over HTTP; tests inject fakes.

use std::future::Future;
use std::sync::Arc;

use crate::error::SuggestError;

mod http;

pub use http::HttpCatalogSource;

/// Fetch capability consulted on a cache miss
pub trait CatalogSource: Send + Sync {
    /// Look up catalog names for a trimmed, non-empty query.
    ///
    /// Success yields the names in the order the catalog returned them.
    fn fetch(&self, name: &str) -> impl Future<Output = Result<Vec<String>, SuggestError>> + Send;
}

impl<T: CatalogSource> CatalogSource for Arc<T> {
    fn fetch(&self, name: &str) -> impl Future<Output = Result<Vec<String>, SuggestError>> + Send {
        (**self).fetch(name)
    }
}
