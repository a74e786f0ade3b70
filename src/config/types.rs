// Configuration type definitions

use serde::Deserialize;

use crate::debouncer::{DEFAULT_CONTROL_WAIT_MS, DEFAULT_SEARCH_WAIT_MS};

fn default_endpoint() -> String {
    "http://localhost:8080/languages".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_search_ms() -> u64 {
    DEFAULT_SEARCH_WAIT_MS
}

fn default_control_ms() -> u64 {
    DEFAULT_CONTROL_WAIT_MS
}

/// Remote catalog section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteConfig {
    /// URL the lookup request is POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Debounce section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DebounceConfig {
    /// Quiet period before consulting the cache / catalog
    #[serde(default = "default_search_ms")]
    pub search_ms: u64,
    /// Quiet period before re-evaluating the dependent control
    #[serde(default = "default_control_ms")]
    pub control_ms: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        DebounceConfig {
            search_ms: default_search_ms(),
            control_ms: default_control_ms(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub debounce: DebounceConfig,
}
