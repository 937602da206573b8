//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity (or owns things that do)
//! - Exposes behavior through methods, not public fields
//! - Returns outcome enums from mutations
//!
//! | Aggregate | Owns |
//! |-----------|------|
//! | [`Character`] | attributes, skill investment, class selection |
//! | [`CharacterCollection`] | characters in creation order, current selection |

pub mod character;
pub mod collection;

pub use character::{Character, CharacterSnapshot, CharacterUpdate};
pub use collection::CharacterCollection;
