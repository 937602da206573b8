//! Character use cases.
//!
//! Owns the character collection, routes edits to the current character,
//! and moves the current character to and from the remote store.

mod sheet;

pub use sheet::CharacterSheetView;

use std::sync::Arc;

use pointbuy_domain::{
    Attribute, AttributeChange, Character, CharacterClass, CharacterCollection, CharacterId,
    CharacterSnapshot, CharacterUpdate, ClassSelectionChange, SkillPointChange,
};
use pointbuy_shared::CharacterData;

use crate::infrastructure::ports::CharacterStore;

/// Name given to the character produced by a load.
pub const LOADED_CHARACTER_NAME: &str = "Character 1";

// =============================================================================
// Result Types
// =============================================================================

/// What a load found. Every outcome leaves exactly one current character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A saved character was restored.
    Restored,
    /// Nothing was saved; a default character was created.
    Absent,
    /// The store failed; a default character was created.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// No character is selected; nothing was sent.
    NoCurrentCharacter,
    /// The store rejected the save. Local state is unchanged.
    Failed(String),
}

// =============================================================================
// Character Manager
// =============================================================================

/// Collection owner and persistence coordinator.
///
/// `load_characters` takes `&mut self` across its await, so no save or edit
/// can run while a load is in flight. A load/save race would only become
/// possible if the manager were shared behind an async lock.
pub struct CharacterManager {
    collection: CharacterCollection,
    store: Arc<dyn CharacterStore>,
    is_loading: bool,
}

impl CharacterManager {
    pub fn new(store: Arc<dyn CharacterStore>) -> Self {
        Self {
            collection: CharacterCollection::new(),
            store,
            is_loading: false,
        }
    }

    pub fn collection(&self) -> &CharacterCollection {
        &self.collection
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn current(&self) -> Option<&Character> {
        self.collection.current()
    }

    pub fn current_id(&self) -> Option<CharacterId> {
        self.collection.current_id()
    }

    // =========================================================================
    // Collection operations
    // =========================================================================

    pub fn create_character(&mut self, name: impl Into<String>) -> CharacterId {
        let id = self.collection.create(name);
        tracing::debug!(character_id = %id, "Character created");
        id
    }

    pub fn update_character(&mut self, id: CharacterId, update: CharacterUpdate) -> bool {
        self.collection.update(id, update)
    }

    pub fn delete_character(&mut self, id: CharacterId) -> bool {
        let deleted = self.collection.delete(id);
        if deleted {
            tracing::debug!(
                character_id = %id,
                current_id = ?self.collection.current_id(),
                "Character deleted"
            );
        }
        deleted
    }

    pub fn set_current(&mut self, id: Option<CharacterId>) {
        self.collection.set_current(id);
    }

    // =========================================================================
    // Edits on the current character
    // =========================================================================

    /// `None` when no character is selected.
    pub fn adjust_attribute(&mut self, attribute: Attribute, delta: i32) -> Option<AttributeChange> {
        let character = self.collection.current_mut()?;
        let change = character.adjust_attribute(attribute, delta);
        match change {
            AttributeChange::Rejected { .. } => tracing::debug!(
                character_id = %character.id(),
                attribute = %attribute,
                delta,
                total = character.attributes().total(),
                "Attribute change rejected"
            ),
            AttributeChange::Applied {
                skills_rebalanced: true,
                ..
            } => tracing::debug!(
                character_id = %character.id(),
                skill_budget = character.skill_budget(),
                "Skill points rebalanced"
            ),
            AttributeChange::Applied { .. } => {}
        }
        Some(change)
    }

    pub fn add_skill_point(&mut self, skill: &str) -> Option<SkillPointChange> {
        self.collection.current_mut().map(|c| c.add_skill_point(skill))
    }

    pub fn remove_skill_point(&mut self, skill: &str) -> Option<SkillPointChange> {
        self.collection
            .current_mut()
            .map(|c| c.remove_skill_point(skill))
    }

    pub fn toggle_class(&mut self, class: CharacterClass) -> Option<ClassSelectionChange> {
        self.collection.current_mut().map(|c| c.toggle_class(class))
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Replace the collection with the saved character, or a default one.
    ///
    /// Never fails: store errors are logged and reported through the outcome.
    ///
    /// `is_loading` is cleared on every exit, including when the returned
    /// future is dropped before the store answers.
    pub async fn load_characters(&mut self) -> LoadOutcome {
        let _loading = LoadingFlag::raise(&mut self.is_loading);

        let (snapshot, outcome) = match self.store.load().await {
            Ok(Some(data)) => (data.into_snapshot(), LoadOutcome::Restored),
            Ok(None) => (CharacterSnapshot::default(), LoadOutcome::Absent),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load character, starting fresh");
                (CharacterSnapshot::default(), LoadOutcome::Failed(e.to_string()))
            }
        };

        let character =
            Character::from_snapshot(CharacterId::new(), LOADED_CHARACTER_NAME, snapshot);
        tracing::info!(
            character_id = %character.id(),
            outcome = ?outcome,
            "Characters loaded"
        );
        self.collection.replace_with(character);
        outcome
    }

    /// Send the current character to the store.
    ///
    /// Never fails: store errors are logged and reported through the outcome.
    pub async fn save_current(&self) -> SaveOutcome {
        let Some(character) = self.collection.current() else {
            tracing::debug!("No current character to save");
            return SaveOutcome::NoCurrentCharacter;
        };

        let data = CharacterData::from(&character.snapshot());
        match self.store.save(&data).await {
            Ok(()) => {
                tracing::info!(character_id = %character.id(), "Character saved");
                SaveOutcome::Saved
            }
            Err(e) => {
                tracing::error!(
                    character_id = %character.id(),
                    error = %e,
                    "Failed to save character"
                );
                SaveOutcome::Failed(e.to_string())
            }
        }
    }
}

/// Holds `is_loading` up until dropped.
struct LoadingFlag<'a>(&'a mut bool);

impl<'a> LoadingFlag<'a> {
    fn raise(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for LoadingFlag<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
