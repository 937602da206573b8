//! Character store settings read from the environment.

use std::time::Duration;

/// Default character API base URL.
pub const DEFAULT_CHARACTER_API_BASE_URL: &str =
    "https://recruiting.verylongdomaintotestwith.ca/api";

/// Default user segment of the character resource path.
pub const DEFAULT_CHARACTER_API_USER: &str = "player";

/// Default HTTP timeout for store requests.
pub const DEFAULT_CHARACTER_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub base_url: String,
    pub user: String,
    pub timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CHARACTER_API_BASE_URL.to_string(),
            user: DEFAULT_CHARACTER_API_USER.to_string(),
            timeout: Duration::from_secs(DEFAULT_CHARACTER_API_TIMEOUT_SECS),
        }
    }
}

impl StoreConfig {
    /// Read `CHARACTER_API_BASE_URL`, `CHARACTER_API_USER`, and
    /// `CHARACTER_API_TIMEOUT_SECS`, falling back to defaults if not set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let base_url = read("CHARACTER_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_CHARACTER_API_BASE_URL.to_string());
        let user =
            read("CHARACTER_API_USER").unwrap_or_else(|| DEFAULT_CHARACTER_API_USER.to_string());
        let timeout_secs = match read("CHARACTER_API_TIMEOUT_SECS") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    value = %raw,
                    default = DEFAULT_CHARACTER_API_TIMEOUT_SECS,
                    "Invalid CHARACTER_API_TIMEOUT_SECS, using default"
                );
                DEFAULT_CHARACTER_API_TIMEOUT_SECS
            }),
            None => DEFAULT_CHARACTER_API_TIMEOUT_SECS,
        };

        Self {
            base_url,
            user,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
