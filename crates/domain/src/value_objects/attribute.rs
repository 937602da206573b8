//! Attribute value object - the six ability scores a character allocates points into.
//!
//! Provides type safety for attribute references instead of using magic strings like
//! "Strength" throughout the allocator, skill catalog, and class tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Score every attribute starts at on a freshly created character.
pub const DEFAULT_ATTRIBUTE_SCORE: i32 = 10;

/// Ability modifier for a score: `floor((score - 10) / 2)`.
///
/// Rust's `/` rounds toward zero, so a score of 1 would give -4 instead of -5.
/// `div_euclid` with a positive divisor floors.
///
/// ```
/// use pointbuy_domain::ability_modifier;
///
/// assert_eq!(ability_modifier(1), -5);
/// assert_eq!(ability_modifier(11), 0);
/// assert_eq!(ability_modifier(18), 4);
/// ```
pub fn ability_modifier(score: i32) -> i32 {
    let diff = i64::from(score) - i64::from(DEFAULT_ATTRIBUTE_SCORE);
    // Result magnitude is at most half the i64 diff, which fits in i32.
    diff.div_euclid(2) as i32
}

/// The six ability scores.
///
/// Declaration order is the display order and the order used when iterating
/// requirement tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    /// Strength - physical power
    Strength,
    /// Dexterity - agility and reflexes
    Dexterity,
    /// Constitution - endurance and health
    Constitution,
    /// Intelligence - reasoning and memory; drives the skill point budget
    Intelligence,
    /// Wisdom - perception and insight
    Wisdom,
    /// Charisma - force of personality
    Charisma,
}

impl Attribute {
    /// All attributes in display order.
    pub const ALL: [Attribute; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Returns the full name used on the wire (e.g., "Strength").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }

    /// Returns the short uppercase abbreviation (e.g., "STR").
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STR" | "STRENGTH" => Ok(Self::Strength),
            "DEX" | "DEXTERITY" => Ok(Self::Dexterity),
            "CON" | "CONSTITUTION" => Ok(Self::Constitution),
            "INT" | "INTELLIGENCE" => Ok(Self::Intelligence),
            "WIS" | "WISDOM" => Ok(Self::Wisdom),
            "CHA" | "CHARISMA" => Ok(Self::Charisma),
            _ => Err(DomainError::parse(format!("Unknown attribute: {}", s))),
        }
    }
}
