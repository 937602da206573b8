//! Port traits for infrastructure boundaries.
//!
//! The character store is the only abstraction in the engine; everything
//! else is concrete. It exists so the remote API can be swapped for a mock
//! in tests (or another backend later).

use async_trait::async_trait;
use pointbuy_shared::CharacterData;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store request failed: {0}")]
    RequestFailed(String),
    #[error("Store returned status {code}: {message}")]
    Status { code: u16, message: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// =============================================================================
// Character Store Port
// =============================================================================

/// Remote persistence for the single saved character.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterStore: Send + Sync {
    /// Fetch the saved character. `Ok(None)` means nothing has been saved.
    async fn load(&self) -> Result<Option<CharacterData>, StoreError>;

    /// Overwrite the saved character.
    async fn save(&self, data: &CharacterData) -> Result<(), StoreError>;
}
