//! Point-buy character rules.
//!
//! Pure domain logic: attribute allocation under a point cap, an
//! Intelligence-driven skill budget, class requirement gates, and the
//! character collection. No I/O and no logging happen here.

pub mod aggregates;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{Character, CharacterCollection, CharacterSnapshot, CharacterUpdate};
pub use error::DomainError;
pub use events::{AttributeChange, ClassSelectionChange, SkillPointChange};
pub use ids::CharacterId;
pub use value_objects::{
    ability_modifier, available_classes, find_skill, meets_requirements, skill_budget,
    skill_modifier, skill_ratings, toggle_class, Attribute, AttributeSet, CharacterClass,
    RequirementStatus, SkillDefinition, SkillInvestment, SkillRating, ATTRIBUTE_POINT_CAP,
    BASE_SKILL_POINTS, DEFAULT_ATTRIBUTE_SCORE, SKILL_CATALOG, SKILL_POINTS_PER_INT_MODIFIER,
};
