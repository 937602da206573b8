//! Character collection - the ordered set of characters and the current selection
//!
//! The collection does not validate the current selection: `set_current` accepts
//! any id, and `current()` simply returns `None` when it matches nothing.

use crate::ids::CharacterId;

use super::character::{Character, CharacterUpdate};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterCollection {
    characters: Vec<Character>,
    current_id: Option<CharacterId>,
}

impl CharacterCollection {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn current_id(&self) -> Option<CharacterId> {
        self.current_id
    }

    pub fn current(&self) -> Option<&Character> {
        self.current_id.and_then(|id| self.get(id))
    }

    pub fn current_mut(&mut self) -> Option<&mut Character> {
        let id = self.current_id?;
        self.get_mut(id)
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id() == id)
    }

    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id() == id)
    }

    /// Characters in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a default character and make it current.
    pub fn create(&mut self, name: impl Into<String>) -> CharacterId {
        let mut id = CharacterId::new();
        while self.get(id).is_some() {
            id = CharacterId::new();
        }
        self.characters
            .push(Character::from_snapshot(id, name, Default::default()));
        self.current_id = Some(id);
        id
    }

    /// Apply `update` to the character with `id`. Returns `false` if there is none.
    pub fn update(&mut self, id: CharacterId, update: CharacterUpdate) -> bool {
        match self.get_mut(id) {
            Some(character) => {
                character.apply_update(update);
                true
            }
            None => false,
        }
    }

    /// Remove the character with `id`. Returns `false` if there is none.
    ///
    /// Deleting the current character moves the selection to the first
    /// remaining character. Emptying the collection always clears the selection,
    /// even one that pointed at an unknown id.
    pub fn delete(&mut self, id: CharacterId) -> bool {
        let before = self.characters.len();
        self.characters.retain(|c| c.id() != id);
        if self.characters.len() == before {
            return false;
        }
        if self.current_id == Some(id) || self.characters.is_empty() {
            self.current_id = self.characters.first().map(Character::id);
        }
        true
    }

    pub fn set_current(&mut self, id: Option<CharacterId>) {
        self.current_id = id;
    }

    /// Discard every character and keep only `character`, selected.
    pub fn replace_with(&mut self, character: Character) {
        self.current_id = Some(character.id());
        self.characters = vec![character];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{Attribute, AttributeSet, CharacterClass};

    #[test]
    fn create_appends_default_character_and_selects_it() {
        let mut collection = CharacterCollection::new();
        let id = collection.create("Hero");

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.current_id(), Some(id));
        let hero = collection.current().unwrap();
        assert_eq!(hero.name(), "Hero");
        assert_eq!(*hero.attributes(), AttributeSet::default());
        assert!(hero.skill_points().is_empty());
        assert!(hero.selected_class().is_none());
    }

    #[test]
    fn each_create_gets_a_distinct_id_and_becomes_current() {
        let mut collection = CharacterCollection::new();
        let first = collection.create("A");
        let second = collection.create("B");

        assert_ne!(first, second);
        assert_eq!(collection.current_id(), Some(second));
        let names: Vec<_> = collection.iter().map(Character::name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn deleting_current_selects_first_remaining() {
        let mut collection = CharacterCollection::new();
        let first = collection.create("A");
        let second = collection.create("B");
        let third = collection.create("C");
        collection.set_current(Some(second));

        assert!(collection.delete(second));
        assert_eq!(collection.current_id(), Some(first));
        assert!(collection.get(third).is_some());
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn deleting_last_character_clears_selection() {
        let mut collection = CharacterCollection::new();
        let id = collection.create("Solo");

        assert!(collection.delete(id));
        assert!(collection.is_empty());
        assert_eq!(collection.current_id(), None);
        assert!(collection.current().is_none());
    }

    #[test]
    fn emptying_collection_clears_dangling_selection() {
        let mut collection = CharacterCollection::new();
        let only = collection.create("Solo");
        collection.set_current(Some(CharacterId::new()));

        assert!(collection.delete(only));
        assert!(collection.is_empty());
        assert_eq!(collection.current_id(), None);
    }

    #[test]
    fn deleting_other_character_keeps_selection() {
        let mut collection = CharacterCollection::new();
        let first = collection.create("A");
        let second = collection.create("B");

        assert!(collection.delete(first));
        assert_eq!(collection.current_id(), Some(second));
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let mut collection = CharacterCollection::new();
        collection.create("A");
        let before = collection.clone();
        let stranger = CharacterId::new();

        assert!(!collection.delete(stranger));
        assert!(!collection.update(stranger, CharacterUpdate::new().with_name("X")));
        assert_eq!(collection, before);
    }

    #[test]
    fn set_current_accepts_any_id() {
        let mut collection = CharacterCollection::new();
        collection.create("A");
        let stranger = CharacterId::new();

        collection.set_current(Some(stranger));
        assert_eq!(collection.current_id(), Some(stranger));
        assert!(collection.current().is_none());

        collection.set_current(None);
        assert_eq!(collection.current_id(), None);
    }

    #[test]
    fn update_applies_to_named_character() {
        let mut collection = CharacterCollection::new();
        let id = collection.create("A");

        let updated = collection.update(
            id,
            CharacterUpdate::new()
                .with_name("Renamed")
                .with_selected_class(Some(CharacterClass::Wizard)),
        );
        assert!(updated);
        let character = collection.get(id).unwrap();
        assert_eq!(character.name(), "Renamed");
        assert_eq!(character.selected_class(), Some(CharacterClass::Wizard));
    }

    #[test]
    fn current_mut_edits_in_place() {
        let mut collection = CharacterCollection::new();
        collection.create("A");
        collection
            .current_mut()
            .unwrap()
            .adjust_attribute(Attribute::Dexterity, 2);
        assert_eq!(
            collection.current().unwrap().attributes().get(Attribute::Dexterity),
            12
        );
    }

    #[test]
    fn replace_with_keeps_only_the_given_character() {
        let mut collection = CharacterCollection::new();
        collection.create("A");
        collection.create("B");

        let loaded = Character::new("Character 1");
        let loaded_id = loaded.id();
        collection.replace_with(loaded);

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.current_id(), Some(loaded_id));
    }
}
