//! Skill catalog - the fixed, ordered list of skills and their governing attributes.

use super::attribute::Attribute;

/// A catalog entry: a skill name and the attribute whose modifier it adds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SkillDefinition {
    pub name: &'static str,
    pub attribute: Attribute,
}

impl SkillDefinition {
    const fn new(name: &'static str, attribute: Attribute) -> Self {
        Self { name, attribute }
    }
}

/// Every skill, in catalog order.
///
/// Catalog order is authoritative for skill point rebalancing: when the budget
/// shrinks, earlier skills keep their points first.
pub const SKILL_CATALOG: [SkillDefinition; 18] = [
    SkillDefinition::new("Acrobatics", Attribute::Dexterity),
    SkillDefinition::new("Animal Handling", Attribute::Wisdom),
    SkillDefinition::new("Arcana", Attribute::Intelligence),
    SkillDefinition::new("Athletics", Attribute::Strength),
    SkillDefinition::new("Deception", Attribute::Charisma),
    SkillDefinition::new("History", Attribute::Intelligence),
    SkillDefinition::new("Insight", Attribute::Wisdom),
    SkillDefinition::new("Intimidation", Attribute::Charisma),
    SkillDefinition::new("Investigation", Attribute::Intelligence),
    SkillDefinition::new("Medicine", Attribute::Wisdom),
    SkillDefinition::new("Nature", Attribute::Intelligence),
    SkillDefinition::new("Perception", Attribute::Wisdom),
    SkillDefinition::new("Performance", Attribute::Charisma),
    SkillDefinition::new("Persuasion", Attribute::Charisma),
    SkillDefinition::new("Religion", Attribute::Intelligence),
    SkillDefinition::new("Sleight of Hand", Attribute::Dexterity),
    SkillDefinition::new("Stealth", Attribute::Dexterity),
    SkillDefinition::new("Survival", Attribute::Wisdom),
];

/// Look up a skill by exact name.
pub fn find_skill(name: &str) -> Option<&'static SkillDefinition> {
    SKILL_CATALOG.iter().find(|skill| skill.name == name)
}

/// Position of a skill in the catalog, if it is one.
pub(crate) fn catalog_position(name: &str) -> Option<usize> {
    SKILL_CATALOG.iter().position(|skill| skill.name == name)
}
