//! Domain Events
//!
//! Return types from aggregate mutations, communicating what happened when
//! character state was modified. Rejections are ordinary outcomes, not errors.

pub mod character_events;

pub use character_events::*;
