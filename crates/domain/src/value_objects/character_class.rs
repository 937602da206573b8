//! Class gate - classes and the minimum attribute scores that make them available.
//!
//! The gate is advisory: a class may be selected while its requirements are
//! unmet, and a selection is never cleared when attributes later drop.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::attribute::Attribute;
use super::attribute_set::AttributeSet;
use crate::error::DomainError;

/// Selectable character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CharacterClass {
    Barbarian,
    Wizard,
    Bard,
}

impl CharacterClass {
    /// All classes in display order.
    pub const ALL: [CharacterClass; 3] = [Self::Barbarian, Self::Wizard, Self::Bard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Barbarian => "Barbarian",
            Self::Wizard => "Wizard",
            Self::Bard => "Bard",
        }
    }

    /// Minimum score per attribute, in attribute order.
    pub fn requirements(&self) -> [(Attribute, i32); 6] {
        let [strength, dexterity, constitution, intelligence, wisdom, charisma] = match self {
            Self::Barbarian => [14, 9, 9, 5, 7, 7],
            Self::Wizard => [7, 7, 9, 14, 9, 9],
            Self::Bard => [7, 9, 9, 5, 9, 14],
        };
        [
            (Attribute::Strength, strength),
            (Attribute::Dexterity, dexterity),
            (Attribute::Constitution, constitution),
            (Attribute::Intelligence, intelligence),
            (Attribute::Wisdom, wisdom),
            (Attribute::Charisma, charisma),
        ]
    }

    /// Whether `attributes` meet every minimum for this class.
    pub fn meets_requirements(&self, attributes: &AttributeSet) -> bool {
        meets_requirements(&self.requirements(), attributes)
    }

    /// Per-attribute comparison against this class's minimums.
    pub fn requirement_status(&self, attributes: &AttributeSet) -> Vec<RequirementStatus> {
        self.requirements()
            .into_iter()
            .map(|(attribute, minimum)| {
                let current = attributes.get(attribute);
                RequirementStatus {
                    attribute,
                    current,
                    minimum,
                    met: current >= minimum,
                }
            })
            .collect()
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "barbarian" => Ok(Self::Barbarian),
            "wizard" => Ok(Self::Wizard),
            "bard" => Ok(Self::Bard),
            _ => Err(DomainError::parse(format!("Unknown class: {}", s))),
        }
    }
}

/// One line of a class's requirement breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementStatus {
    pub attribute: Attribute,
    pub current: i32,
    pub minimum: i32,
    pub met: bool,
}

/// AND over `(attribute, minimum)` pairs. An empty table is trivially met.
pub fn meets_requirements(requirements: &[(Attribute, i32)], attributes: &AttributeSet) -> bool {
    requirements
        .iter()
        .all(|(attribute, minimum)| attributes.get(*attribute) >= *minimum)
}

/// Select `clicked`, or deselect it if it is already the selection.
pub fn toggle_class(
    current: Option<CharacterClass>,
    clicked: CharacterClass,
) -> Option<CharacterClass> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Classes whose requirements `attributes` currently meet, in display order.
pub fn available_classes(attributes: &AttributeSet) -> Vec<CharacterClass> {
    CharacterClass::ALL
        .into_iter()
        .filter(|class| class.meets_requirements(attributes))
        .collect()
}
