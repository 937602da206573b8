//! Character aggregate - one allocatable character sheet
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: attributes and skill points change only through the
//!   allocation methods below
//! - **Domain events**: mutations return outcome enums (`AttributeChange`, etc.)
//! - **Explicit transitions**: every mutation that can shrink the skill budget
//!   rebalances skill points before returning, so no caller ever observes an
//!   over-budget investment

use crate::events::{AttributeChange, ClassSelectionChange, SkillPointChange};
use crate::ids::CharacterId;
use crate::value_objects::{
    available_classes, skill_budget, skill_modifier, skill_ratings, toggle_class, Attribute,
    AttributeSet, CharacterClass, SkillInvestment, SkillRating,
};

/// The persistable part of a character: everything except identity and name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterSnapshot {
    pub attributes: AttributeSet,
    pub skill_points: SkillInvestment,
    pub selected_class: Option<CharacterClass>,
}

/// Partial update: each `Some` field replaces the current value wholesale.
///
/// `selected_class` is `Option<Option<_>>` so that "leave as is" (`None`) and
/// "clear the selection" (`Some(None)`) are distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterUpdate {
    pub name: Option<String>,
    pub attributes: Option<AttributeSet>,
    pub skill_points: Option<SkillInvestment>,
    pub selected_class: Option<Option<CharacterClass>>,
}

impl CharacterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_attributes(mut self, attributes: AttributeSet) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn with_skill_points(mut self, skill_points: SkillInvestment) -> Self {
        self.skill_points = Some(skill_points);
        self
    }

    pub fn with_selected_class(mut self, selected_class: Option<CharacterClass>) -> Self {
        self.selected_class = Some(selected_class);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.attributes.is_none()
            && self.skill_points.is_none()
            && self.selected_class.is_none()
    }
}

/// A character being built
///
/// # Invariants
///
/// - `id` never changes after construction
/// - `skill_points.spent() <= skill_budget(&attributes)` after every public
///   mutation
///
/// # Example
///
/// ```
/// use pointbuy_domain::{Attribute, Character};
///
/// let mut hero = Character::new("Hero");
/// assert_eq!(hero.attributes().total(), 60);
///
/// assert!(hero.adjust_attribute(Attribute::Intelligence, 4).is_applied());
/// assert_eq!(hero.skill_budget(), 18);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    id: CharacterId,
    name: String,
    attributes: AttributeSet,
    skill_points: SkillInvestment,
    selected_class: Option<CharacterClass>,
}

impl Character {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a character with every attribute at 10, no skill points, and no class.
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_snapshot(CharacterId::new(), name, CharacterSnapshot::default())
    }

    /// Rebuild a character from saved data.
    ///
    /// Attributes are taken as saved; skill points are rebalanced against the
    /// budget those attributes allow.
    pub fn from_snapshot(id: CharacterId, name: impl Into<String>, snapshot: CharacterSnapshot) -> Self {
        let mut character = Self {
            id,
            name: name.into(),
            attributes: snapshot.attributes,
            skill_points: snapshot.skill_points,
            selected_class: snapshot.selected_class,
        };
        character.rebalance_skills();
        character
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    #[inline]
    pub fn skill_points(&self) -> &SkillInvestment {
        &self.skill_points
    }

    #[inline]
    pub fn selected_class(&self) -> Option<CharacterClass> {
        self.selected_class
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    pub fn remaining_attribute_points(&self) -> i32 {
        self.attributes.remaining_points()
    }

    pub fn skill_budget(&self) -> u32 {
        skill_budget(&self.attributes)
    }

    pub fn remaining_skill_points(&self) -> u32 {
        self.skill_points.remaining(self.skill_budget())
    }

    /// Governing attribute modifier plus invested points; 0 for unknown skills.
    pub fn skill_modifier(&self, skill: &str) -> i32 {
        skill_modifier(&self.attributes, &self.skill_points, skill)
    }

    pub fn skill_ratings(&self) -> Vec<SkillRating> {
        skill_ratings(&self.attributes, &self.skill_points)
    }

    pub fn meets_class_requirements(&self, class: CharacterClass) -> bool {
        class.meets_requirements(&self.attributes)
    }

    pub fn available_classes(&self) -> Vec<CharacterClass> {
        available_classes(&self.attributes)
    }

    /// Whether the selected class is currently available, or `None` without a selection.
    ///
    /// A selection whose requirements stopped being met stays selected; this is
    /// how callers flag it.
    pub fn selected_class_available(&self) -> Option<bool> {
        self.selected_class
            .map(|class| self.meets_class_requirements(class))
    }

    /// The persistable part of this character.
    pub fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot {
            attributes: self.attributes,
            skill_points: self.skill_points.clone(),
            selected_class: self.selected_class,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Apply a delta to one attribute, then rebalance skill points.
    pub fn adjust_attribute(&mut self, attribute: Attribute, delta: i32) -> AttributeChange {
        let from = self.attributes.get(attribute);
        if !self.attributes.apply_delta(attribute, delta) {
            return AttributeChange::Rejected { attribute, delta };
        }
        AttributeChange::Applied {
            attribute,
            from,
            to: self.attributes.get(attribute),
            skills_rebalanced: self.rebalance_skills(),
        }
    }

    pub fn add_skill_point(&mut self, skill: &str) -> SkillPointChange {
        let budget = self.skill_budget();
        if self.skill_points.add_point(skill, budget) {
            SkillPointChange::Added {
                points: self.skill_points.points(skill),
            }
        } else {
            SkillPointChange::Unchanged
        }
    }

    pub fn remove_skill_point(&mut self, skill: &str) -> SkillPointChange {
        if self.skill_points.remove_point(skill) {
            SkillPointChange::Removed {
                points: self.skill_points.points(skill),
            }
        } else {
            SkillPointChange::Unchanged
        }
    }

    /// Select `class`, or deselect it if already selected. Requirements are not enforced.
    pub fn toggle_class(&mut self, class: CharacterClass) -> ClassSelectionChange {
        let from = self.selected_class;
        self.selected_class = toggle_class(from, class);
        ClassSelectionChange {
            from,
            to: self.selected_class,
        }
    }

    /// Replace every field present in `update`, then rebalance skill points.
    pub fn apply_update(&mut self, update: CharacterUpdate) {
        let CharacterUpdate {
            name,
            attributes,
            skill_points,
            selected_class,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(attributes) = attributes {
            self.attributes = attributes;
        }
        if let Some(skill_points) = skill_points {
            self.skill_points = skill_points;
        }
        if let Some(selected_class) = selected_class {
            self.selected_class = selected_class;
        }
        self.rebalance_skills();
    }

    fn rebalance_skills(&mut self) -> bool {
        let budget = self.skill_budget();
        self.skill_points.rebalance(budget)
    }
}

// ============================================================================
// Tests
// ============================================================================
