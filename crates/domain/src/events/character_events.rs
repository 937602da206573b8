//! Character-related domain events
//!
//! These enums communicate what happened when character state was modified,
//! allowing callers to react appropriately.

use crate::value_objects::{Attribute, CharacterClass};

/// Outcome of adjusting one attribute score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeChange {
    /// The delta was committed
    Applied {
        attribute: Attribute,
        from: i32,
        to: i32,
        /// Skill points were trimmed because the budget shrank
        skills_rebalanced: bool,
    },
    /// The delta would have broken the point cap or gone negative; nothing changed
    Rejected { attribute: Attribute, delta: i32 },
}

impl AttributeChange {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Outcome of spending or refunding one skill point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillPointChange {
    /// A point was spent; `points` is the new total for the skill
    Added { points: u32 },
    /// A point was refunded; `points` is the new total for the skill
    Removed { points: u32 },
    /// Budget exhausted, or nothing to refund
    Unchanged,
}

impl SkillPointChange {
    pub fn is_changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// A class selection transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSelectionChange {
    pub from: Option<CharacterClass>,
    pub to: Option<CharacterClass>,
}
