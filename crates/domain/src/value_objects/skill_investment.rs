//! Skill allocator - points invested per skill, bounded by an Intelligence-derived budget.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::attribute::{ability_modifier, Attribute};
use super::attribute_set::AttributeSet;
use super::skill::{catalog_position, find_skill, SKILL_CATALOG};

/// Skill points granted before the Intelligence modifier is applied.
pub const BASE_SKILL_POINTS: i64 = 10;

/// Skill points granted per point of Intelligence modifier.
pub const SKILL_POINTS_PER_INT_MODIFIER: i64 = 4;

/// Total skill points available: `max(0, 10 + 4 * modifier(Intelligence))`.
pub fn skill_budget(attributes: &AttributeSet) -> u32 {
    let modifier = i64::from(ability_modifier(attributes.get(Attribute::Intelligence)));
    let budget = BASE_SKILL_POINTS + SKILL_POINTS_PER_INT_MODIFIER * modifier;
    u32::try_from(budget.max(0)).unwrap_or(u32::MAX)
}

/// Points invested per skill name.
///
/// # Invariants
///
/// - every value is `>= 0` (by type)
/// - the sum of all values is `<= budget` once [`SkillInvestment::rebalance`]
///   has run against the current budget
///
/// Keys are skill names rather than catalog indices so that a saved record
/// round-trips unchanged; names outside the catalog are kept but contribute
/// nothing to modifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillInvestment(BTreeMap<String, u32>);

impl SkillInvestment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points invested in one skill (0 if none).
    pub fn points(&self, skill: &str) -> u32 {
        self.0.get(skill).copied().unwrap_or(0)
    }

    /// Sum of all invested points.
    pub fn spent(&self) -> u32 {
        self.0
            .values()
            .fold(0u32, |sum, points| sum.saturating_add(*points))
    }

    /// Points still available under `budget`.
    pub fn remaining(&self, budget: u32) -> u32 {
        budget.saturating_sub(self.spent())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Spend one point on `skill` if anything is left under `budget`.
    ///
    /// Returns `true` if the point was added.
    pub fn add_point(&mut self, skill: &str, budget: u32) -> bool {
        if self.spent() >= budget {
            return false;
        }
        let points = self.0.entry(skill.to_string()).or_insert(0);
        *points = points.saturating_add(1);
        true
    }

    /// Refund one point from `skill` if it has any.
    ///
    /// Returns `true` if a point was removed.
    pub fn remove_point(&mut self, skill: &str) -> bool {
        match self.0.get_mut(skill) {
            Some(points) if *points > 0 => {
                *points -= 1;
                true
            }
            _ => false,
        }
    }

    /// Bring the total back under `budget` after the budget shrank.
    ///
    /// Skills are visited in catalog order; each keeps `min(points, remaining)`
    /// and everything after the budget runs out drops to 0. Names that are not
    /// in the catalog are visited last, in name order.
    ///
    /// Returns `true` if anything changed.
    pub fn rebalance(&mut self, budget: u32) -> bool {
        if self.spent() <= budget {
            return false;
        }

        // BTreeMap keys are already in name order; the stable sort keeps that
        // order among names outside the catalog.
        let mut order: Vec<String> = self.0.keys().cloned().collect();
        order.sort_by_key(|name| catalog_position(name).unwrap_or(usize::MAX));

        let mut remaining = budget;
        for name in order {
            if let Some(points) = self.0.get_mut(&name) {
                let kept = (*points).min(remaining);
                *points = kept;
                remaining -= kept;
            }
        }
        true
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for SkillInvestment {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, points)| (name.into(), points))
                .collect(),
        )
    }
}

/// Total modifier for a skill: governing attribute modifier plus invested points.
///
/// Returns 0 for a name that is not in the catalog.
pub fn skill_modifier(attributes: &AttributeSet, investment: &SkillInvestment, skill: &str) -> i32 {
    let Some(definition) = find_skill(skill) else {
        return 0;
    };
    let points = i32::try_from(investment.points(skill)).unwrap_or(i32::MAX);
    ability_modifier(attributes.get(definition.attribute)).saturating_add(points)
}

/// One row of the skills panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillRating {
    pub name: &'static str,
    pub attribute: Attribute,
    pub attribute_modifier: i32,
    pub points: u32,
    pub total: i32,
}

/// Ratings for every catalog skill, in catalog order.
pub fn skill_ratings(attributes: &AttributeSet, investment: &SkillInvestment) -> Vec<SkillRating> {
    SKILL_CATALOG
        .iter()
        .map(|skill| SkillRating {
            name: skill.name,
            attribute: skill.attribute,
            attribute_modifier: ability_modifier(attributes.get(skill.attribute)),
            points: investment.points(skill.name),
            total: skill_modifier(attributes, investment, skill.name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn with_intelligence(intelligence: i32) -> AttributeSet {
        AttributeSet::new(12, 14, 10, intelligence, 8, 10)
    }

    mod budget {
        use super::*;

        #[test]
        fn high_intelligence_grants_extra_points() {
            assert_eq!(skill_budget(&with_intelligence(16)), 22);
        }

        #[test]
        fn low_intelligence_reduces_points() {
            assert_eq!(skill_budget(&with_intelligence(8)), 6);
        }

        #[test]
        fn average_intelligence_grants_base_points() {
            assert_eq!(skill_budget(&with_intelligence(10)), 10);
        }

        #[test]
        fn budget_never_goes_negative() {
            assert_eq!(skill_budget(&with_intelligence(0)), 0);
            assert_eq!(skill_budget(&with_intelligence(2)), 0);
            assert_eq!(skill_budget(&with_intelligence(4)), 0);
            assert_eq!(skill_budget(&with_intelligence(5)), 0);
            assert_eq!(skill_budget(&with_intelligence(6)), 2);
        }
    }

    mod spending {
        use super::*;

        #[test]
        fn add_point_within_budget() {
            let mut investment = SkillInvestment::new();
            assert!(investment.add_point("Athletics", 22));
            assert_eq!(investment.points("Athletics"), 1);
            assert_eq!(investment.remaining(22), 21);
        }

        #[test]
        fn add_point_stops_at_budget() {
            let mut investment = SkillInvestment::new();
            for _ in 0..6 {
                assert!(investment.add_point("Athletics", 6));
            }
            assert!(!investment.add_point("Acrobatics", 6));
            assert_eq!(investment.points("Acrobatics"), 0);
            assert_eq!(investment.spent(), 6);
            assert_eq!(investment.remaining(6), 0);
        }

        #[test]
        fn remove_point_refunds() {
            let mut investment = SkillInvestment::from_iter([("Athletics", 2)]);
            assert!(investment.remove_point("Athletics"));
            assert_eq!(investment.points("Athletics"), 1);
        }

        #[test]
        fn remove_point_at_zero_is_a_no_op() {
            let mut investment = SkillInvestment::from_iter([("Athletics", 0)]);
            assert!(!investment.remove_point("Athletics"));
            assert!(!investment.remove_point("Stealth"));
            assert_eq!(investment.points("Athletics"), 0);
            assert_eq!(investment.spent(), 0);
        }

        #[test]
        fn zero_budget_accepts_nothing() {
            let mut investment = SkillInvestment::new();
            assert!(!investment.add_point("Arcana", 0));
            assert!(investment.is_empty());
        }
    }

    mod rebalance {
        use super::*;

        #[test]
        fn caps_then_zeroes_in_catalog_order() {
            let mut investment =
                SkillInvestment::from_iter([("Acrobatics", 3), ("Animal Handling", 3), ("Arcana", 3)]);
            assert!(investment.rebalance(4));
            assert_eq!(investment.points("Acrobatics"), 3);
            assert_eq!(investment.points("Animal Handling"), 1);
            assert_eq!(investment.points("Arcana"), 0);
            assert_eq!(investment.spent(), 4);
        }

        #[test]
        fn within_budget_is_untouched() {
            let before = SkillInvestment::from_iter([("Stealth", 3), ("Survival", 2)]);
            let mut investment = before.clone();
            assert!(!investment.rebalance(5));
            assert_eq!(investment, before);
        }

        #[test]
        fn names_outside_the_catalog_go_last() {
            let mut investment =
                SkillInvestment::from_iter([("Aaa Homebrew", 4), ("Survival", 4)]);
            assert!(investment.rebalance(5));
            assert_eq!(investment.points("Survival"), 4);
            assert_eq!(investment.points("Aaa Homebrew"), 1);
        }

        #[test]
        fn zero_budget_clears_everything() {
            let mut investment = SkillInvestment::from_iter([("History", 2), ("Nature", 1)]);
            assert!(investment.rebalance(0));
            assert_eq!(investment.spent(), 0);
        }
    }

    mod modifiers {
        use super::*;

        #[test]
        fn skill_modifier_adds_attribute_modifier_and_points() {
            let attributes = with_intelligence(16);
            let investment = SkillInvestment::from_iter([("Arcana", 2), ("Athletics", 1)]);
            assert_eq!(skill_modifier(&attributes, &investment, "Arcana"), 5);
            assert_eq!(skill_modifier(&attributes, &investment, "Athletics"), 2);
            assert_eq!(skill_modifier(&attributes, &investment, "Perception"), -1);
        }

        #[test]
        fn unknown_skill_has_neutral_modifier() {
            let attributes = with_intelligence(16);
            let investment = SkillInvestment::from_iter([("Juggling", 3)]);
            assert_eq!(skill_modifier(&attributes, &investment, "Juggling"), 0);
        }

        #[test]
        fn ratings_cover_the_catalog_in_order() {
            let attributes = with_intelligence(16);
            let investment = SkillInvestment::from_iter([("Stealth", 2)]);
            let ratings = skill_ratings(&attributes, &investment);

            assert_eq!(ratings.len(), SKILL_CATALOG.len());
            assert_eq!(ratings[0].name, "Acrobatics");
            let stealth = ratings.iter().find(|r| r.name == "Stealth").unwrap();
            assert_eq!(stealth.attribute, Attribute::Dexterity);
            assert_eq!(stealth.attribute_modifier, 2);
            assert_eq!(stealth.points, 2);
            assert_eq!(stealth.total, 4);
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn serializes_as_plain_object() {
            let investment = SkillInvestment::from_iter([("Athletics", 3), ("Acrobatics", 2)]);
            let json = serde_json::to_string(&investment).unwrap();
            assert_eq!(json, r#"{"Acrobatics":2,"Athletics":3}"#);
        }

        #[test]
        fn negative_points_do_not_decode() {
            let result: Result<SkillInvestment, _> = serde_json::from_str(r#"{"Athletics":-1}"#);
            assert!(result.is_err());
        }
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize),
        Remove(usize),
        SetBudget(u32),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..SKILL_CATALOG.len()).prop_map(Op::Add),
            (0..SKILL_CATALOG.len()).prop_map(Op::Remove),
            (0u32..=30).prop_map(Op::SetBudget),
        ]
    }

    proptest! {
        #[test]
        fn spent_never_exceeds_budget(
            initial_budget in 0u32..=30,
            ops in prop::collection::vec(arb_op(), 0..60),
        ) {
            let mut budget = initial_budget;
            let mut investment = SkillInvestment::new();
            for op in ops {
                match op {
                    Op::Add(i) => { investment.add_point(SKILL_CATALOG[i].name, budget); }
                    Op::Remove(i) => { investment.remove_point(SKILL_CATALOG[i].name); }
                    Op::SetBudget(b) => {
                        budget = b;
                        investment.rebalance(budget);
                    }
                }
                prop_assert!(investment.spent() <= budget);
            }
        }
    }
}
