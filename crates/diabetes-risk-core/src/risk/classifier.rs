//! Risk classifier.
//!
//! The decision table is an ordered list of [`RiskRule`]s; the first rule that
//! matches decides the category, and [`RiskLevel::None`] applies when none does.

use std::ops::RangeInclusive;

use crate::models::{Gender, RiskLevel};

/// Age from which the adult part of the table applies.
pub const ADULT_AGE: u32 = 30;

/// Age band a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    Any,
    /// Strictly below [`ADULT_AGE`]
    Under30,
    /// [`ADULT_AGE`] and above
    ThirtyOrOver,
}

impl AgeBand {
    fn contains(&self, age: u32) -> bool {
        match self {
            AgeBand::Any => true,
            AgeBand::Under30 => age < ADULT_AGE,
            AgeBand::ThirtyOrOver => age >= ADULT_AGE,
        }
    }
}

/// One row of the decision table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskRule {
    pub age: AgeBand,
    /// `None` matches any gender, including an unspecified one
    pub gender: Option<Gender>,
    pub triggers: RangeInclusive<usize>,
    pub level: RiskLevel,
}

impl RiskRule {
    /// Whether this rule applies to the given inputs.
    pub fn matches(&self, age: u32, gender: Gender, trigger_count: usize) -> bool {
        self.age.contains(age)
            && self.gender.map_or(true, |g| g == gender)
            && self.triggers.contains(&trigger_count)
    }
}

const fn rule(
    age: AgeBand,
    gender: Option<Gender>,
    triggers: RangeInclusive<usize>,
    level: RiskLevel,
) -> RiskRule {
    RiskRule {
        age,
        gender,
        triggers,
        level,
    }
}

// Under-30 counts not listed here (1 and 2 for men, 1 to 3 for women, any
// count for an unspecified gender) fall through to `RiskLevel::None`.
pub static RISK_RULES: [RiskRule; 8] = [
    rule(AgeBand::Any, None, 0..=0, RiskLevel::None),
    rule(AgeBand::ThirtyOrOver, None, 2..=5, RiskLevel::Borderline),
    rule(AgeBand::ThirtyOrOver, None, 6..=7, RiskLevel::InDanger),
    rule(AgeBand::ThirtyOrOver, None, 8..=usize::MAX, RiskLevel::EarlyOnset),
    rule(AgeBand::Under30, Some(Gender::Male), 3..=3, RiskLevel::InDanger),
    rule(AgeBand::Under30, Some(Gender::Male), 5..=usize::MAX, RiskLevel::EarlyOnset),
    rule(AgeBand::Under30, Some(Gender::Female), 4..=4, RiskLevel::InDanger),
    rule(AgeBand::Under30, Some(Gender::Female), 7..=usize::MAX, RiskLevel::EarlyOnset),
];

/// The rule that decides the category, if any.
pub fn matching_rule(age: u32, gender: Gender, trigger_count: usize) -> Option<&'static RiskRule> {
    RISK_RULES
        .iter()
        .find(|r| r.matches(age, gender, trigger_count))
}

/// Classify a patient from age, gender and distinct trigger count.
pub fn classify(age: u32, gender: Gender, trigger_count: usize) -> RiskLevel {
    matching_rule(age, gender, trigger_count)
        .map(|r| r.level)
        .unwrap_or(RiskLevel::None)
}
