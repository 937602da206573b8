//! Attribute allocator - the six scores and the point budget they share.

use serde::{Deserialize, Serialize};

use super::attribute::{Attribute, DEFAULT_ATTRIBUTE_SCORE};

/// Maximum sum of all six attribute scores.
pub const ATTRIBUTE_POINT_CAP: i32 = 70;

/// The six attribute scores of a character.
///
/// # Invariants
///
/// - every score is `>= 0`
/// - the sum of all six is `<= ATTRIBUTE_POINT_CAP`
///
/// Both invariants are checked against the *proposed* value by
/// [`AttributeSet::apply_delta`], which is the only mutation path. A set
/// decoded from storage is taken as-is (see [`AttributeSet::is_within_budget`]).
///
/// Serializes as `{"Strength": 10, "Dexterity": 10, ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeSet {
    strength: i32,
    dexterity: i32,
    constitution: i32,
    intelligence: i32,
    wisdom: i32,
    charisma: i32,
}

impl AttributeSet {
    /// Build a set from explicit scores, in display order.
    ///
    /// This is the load path for previously saved data and does not enforce the
    /// budget.
    pub fn new(
        strength: i32,
        dexterity: i32,
        constitution: i32,
        intelligence: i32,
        wisdom: i32,
        charisma: i32,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    /// Returns the score for one attribute.
    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    fn slot_mut(&mut self, attribute: Attribute) -> &mut i32 {
        match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Constitution => &mut self.constitution,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Wisdom => &mut self.wisdom,
            Attribute::Charisma => &mut self.charisma,
        }
    }

    /// Iterate `(attribute, score)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL.into_iter().map(|a| (a, self.get(a)))
    }

    /// Sum of all six scores.
    pub fn total(&self) -> i32 {
        self.iter()
            .fold(0i32, |sum, (_, score)| sum.saturating_add(score))
    }

    /// Points left before the cap is reached. Negative for an over-budget set.
    pub fn remaining_points(&self) -> i32 {
        ATTRIBUTE_POINT_CAP.saturating_sub(self.total())
    }

    /// Whether the set satisfies both invariants.
    pub fn is_within_budget(&self) -> bool {
        self.iter().all(|(_, score)| score >= 0) && self.total() <= ATTRIBUTE_POINT_CAP
    }

    /// The set that would result from applying `delta` to `attribute`, or
    /// `None` if the proposed score would be negative or push the sum past
    /// the cap.
    pub fn with_delta(&self, attribute: Attribute, delta: i32) -> Option<Self> {
        let candidate = self.get(attribute).checked_add(delta)?;
        if candidate < 0 {
            return None;
        }

        let sum_others = self
            .iter()
            .filter(|(a, _)| *a != attribute)
            .fold(0i32, |sum, (_, score)| sum.saturating_add(score));
        if sum_others.saturating_add(candidate) > ATTRIBUTE_POINT_CAP {
            return None;
        }

        let mut next = *self;
        *next.slot_mut(attribute) = candidate;
        Some(next)
    }

    /// Apply a single-attribute delta, all or nothing.
    ///
    /// Returns `true` if the delta was committed. A rejected delta leaves the
    /// set untouched.
    pub fn apply_delta(&mut self, attribute: Attribute, delta: i32) -> bool {
        match self.with_delta(attribute, delta) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }
}

impl Default for AttributeSet {
    /// Every score at 10, for a total of 60.
    fn default() -> Self {
        let s = DEFAULT_ATTRIBUTE_SCORE;
        Self::new(s, s, s, s, s, s)
    }
}
