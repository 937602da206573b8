//! Value objects - immutable rule data and the allocators that guard it

mod attribute;
mod attribute_set;
mod character_class;
mod skill;
mod skill_investment;

pub use attribute::{ability_modifier, Attribute, DEFAULT_ATTRIBUTE_SCORE};
pub use attribute_set::{AttributeSet, ATTRIBUTE_POINT_CAP};
pub use character_class::{
    available_classes, meets_requirements, toggle_class, CharacterClass, RequirementStatus,
};
pub use skill::{find_skill, SkillDefinition, SKILL_CATALOG};
pub use skill_investment::{
    skill_budget, skill_modifier, skill_ratings, SkillInvestment, SkillRating, BASE_SKILL_POINTS,
    SKILL_POINTS_PER_INT_MODIFIER,
};
