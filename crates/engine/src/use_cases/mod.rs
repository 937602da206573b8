//! Use cases - User story orchestration.
//!
//! Use cases orchestrate the domain aggregates and the store port.

pub mod character;

pub use character::{
    CharacterManager, CharacterSheetView, LoadOutcome, SaveOutcome, LOADED_CHARACTER_NAME,
};
