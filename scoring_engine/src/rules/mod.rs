//! Condition rules - the declarative predicate language over score vectors.

use serde::{Deserialize, Serialize};

use crate::resolver::ConfigError;
use crate::scores::{Dimension, DimensionScores};

/// A single predicate over a score vector.
///
/// Rules form a small closed language: threshold checks on one
/// dimension, boolean combinators, and two whole-vector profile checks.
/// Rules nest arbitrarily through `And`/`Or` (in practice the reference
/// configuration stays within depth 4) and are built once as static
/// configuration, so evaluation is a pure walk over a finite tree.
///
/// The serialized form matches the authored content: a `type` tag plus
/// camelCase fields, e.g. `{"type": "gte", "dimension": "selfWorth",
/// "value": 2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ConditionRule {
    /// `scores[dimension] >= value`.
    Gte { dimension: Dimension, value: i32 },

    /// `scores[dimension] <= value`.
    Lte { dimension: Dimension, value: i32 },

    /// `min <= scores[dimension] <= max`, both ends inclusive.
    Range {
        dimension: Dimension,
        min: i32,
        max: i32,
    },

    /// Every sub-rule holds. An empty list is vacuously true.
    And { rules: Vec<ConditionRule> },

    /// At least one sub-rule holds. An empty list is false.
    Or { rules: Vec<ConditionRule> },

    /// Every one of the six dimensions falls within `[min, max]`
    /// inclusive. Detects balanced/neutral profiles.
    AllInRange { min: i32, max: i32 },

    /// The spread of the vector (max minus min across all six
    /// dimensions) is at least `min_variance`. Detects polarized
    /// profiles.
    Variance { min_variance: i32 },
}

impl ConditionRule {
    /// A `>=` threshold check on one dimension.
    pub fn gte(dimension: Dimension, value: i32) -> Self {
        ConditionRule::Gte { dimension, value }
    }

    /// A `<=` threshold check on one dimension.
    pub fn lte(dimension: Dimension, value: i32) -> Self {
        ConditionRule::Lte { dimension, value }
    }

    /// An inclusive range check on one dimension.
    pub fn range(dimension: Dimension, min: i32, max: i32) -> Self {
        ConditionRule::Range {
            dimension,
            min,
            max,
        }
    }

    /// A conjunction of sub-rules.
    pub fn and(rules: Vec<ConditionRule>) -> Self {
        ConditionRule::And { rules }
    }

    /// A disjunction of sub-rules.
    pub fn or(rules: Vec<ConditionRule>) -> Self {
        ConditionRule::Or { rules }
    }

    /// An inclusive range check over every dimension at once.
    pub fn all_in_range(min: i32, max: i32) -> Self {
        ConditionRule::AllInRange { min, max }
    }

    /// A minimum-spread check over the whole vector.
    pub fn variance(min_variance: i32) -> Self {
        ConditionRule::Variance { min_variance }
    }

    /// Evaluate this rule against a score vector.
    ///
    /// Pure and total: well-formed rules never fail, and the rule tree
    /// is static data built once, so recursion depth is bounded.
    pub fn is_satisfied(&self, scores: &DimensionScores) -> bool {
        match self {
            ConditionRule::Gte { dimension, value } => scores.get(*dimension) >= *value,
            ConditionRule::Lte { dimension, value } => scores.get(*dimension) <= *value,
            ConditionRule::Range {
                dimension,
                min,
                max,
            } => {
                let value = scores.get(*dimension);
                value >= *min && value <= *max
            }
            ConditionRule::And { rules } => rules.iter().all(|rule| rule.is_satisfied(scores)),
            ConditionRule::Or { rules } => rules.iter().any(|rule| rule.is_satisfied(scores)),
            ConditionRule::AllInRange { min, max } => scores
                .values()
                .iter()
                .all(|value| value >= min && value <= max),
            ConditionRule::Variance { min_variance } => scores.spread() >= *min_variance,
        }
    }

    /// Walk the rule tree checking structural sanity.
    ///
    /// Catches authoring mistakes (inverted ranges, negative variance
    /// thresholds) at configuration time rather than silently never
    /// matching at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            ConditionRule::Gte { .. } | ConditionRule::Lte { .. } => Ok(()),
            ConditionRule::Range { min, max, .. } | ConditionRule::AllInRange { min, max } => {
                if min > max {
                    Err(ConfigError::InvertedRange {
                        min: *min,
                        max: *max,
                    })
                } else {
                    Ok(())
                }
            }
            ConditionRule::And { rules } | ConditionRule::Or { rules } => {
                for rule in rules {
                    rule.validate()?;
                }
                Ok(())
            }
            ConditionRule::Variance { min_variance } => {
                if *min_variance < 0 {
                    Err(ConfigError::NegativeVariance(*min_variance))
                } else {
                    Ok(())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_scores() -> DimensionScores {
        DimensionScores {
            honesty: 3,
            vulnerability: 1,
            hope: -2,
            self_worth: 0,
            action: 2,
            compassion: -1,
        }
    }

    #[test]
    fn test_gte() {
        let scores = test_scores();
        assert!(ConditionRule::gte(Dimension::Honesty, 3).is_satisfied(&scores));
        assert!(!ConditionRule::gte(Dimension::Honesty, 4).is_satisfied(&scores));
    }

    #[test]
    fn test_lte() {
        let scores = test_scores();
        assert!(ConditionRule::lte(Dimension::Hope, -2).is_satisfied(&scores));
        assert!(!ConditionRule::lte(Dimension::Hope, -3).is_satisfied(&scores));
    }

    #[test]
    fn test_range_is_inclusive() {
        let scores = test_scores();
        assert!(ConditionRule::range(Dimension::SelfWorth, -1, 1).is_satisfied(&scores));
        assert!(ConditionRule::range(Dimension::Honesty, 3, 3).is_satisfied(&scores));
        assert!(!ConditionRule::range(Dimension::Honesty, -1, 1).is_satisfied(&scores));
    }

    #[test]
    fn test_and() {
        let scores = test_scores();
        let both_hold = ConditionRule::and(vec![
            ConditionRule::gte(Dimension::Honesty, 3),
            ConditionRule::gte(Dimension::Action, 2),
        ]);
        assert!(both_hold.is_satisfied(&scores));

        let one_fails = ConditionRule::and(vec![
            ConditionRule::gte(Dimension::Honesty, 3),
            ConditionRule::gte(Dimension::Hope, 0),
        ]);
        assert!(!one_fails.is_satisfied(&scores));
    }

    #[test]
    fn test_or() {
        let scores = test_scores();
        let one_holds = ConditionRule::or(vec![
            ConditionRule::gte(Dimension::Hope, 2),
            ConditionRule::gte(Dimension::Action, 2),
        ]);
        assert!(one_holds.is_satisfied(&scores));

        let none_hold = ConditionRule::or(vec![
            ConditionRule::gte(Dimension::Hope, 2),
            ConditionRule::lte(Dimension::Compassion, -2),
        ]);
        assert!(!none_hold.is_satisfied(&scores));
    }

    #[test]
    fn test_empty_combinators() {
        // Documented edge case: empty `and` is vacuously true, empty
        // `or` is false. The reference configuration never exercises
        // either.
        let scores = DimensionScores::new();
        assert!(ConditionRule::and(vec![]).is_satisfied(&scores));
        assert!(!ConditionRule::or(vec![]).is_satisfied(&scores));
    }

    #[test]
    fn test_all_in_range() {
        let balanced = DimensionScores {
            honesty: 0,
            vulnerability: 1,
            hope: -1,
            self_worth: 1,
            action: 0,
            compassion: -1,
        };
        let rule = ConditionRule::all_in_range(-1, 1);
        assert!(rule.is_satisfied(&balanced));
        assert!(!rule.is_satisfied(&test_scores()));
    }

    #[test]
    fn test_variance() {
        let polarized = DimensionScores {
            honesty: 4,
            vulnerability: -3,
            hope: 3,
            self_worth: -2,
            action: 2,
            compassion: -4,
        };
        let rule = ConditionRule::variance(6);
        assert!(rule.is_satisfied(&polarized));
        assert!(!rule.is_satisfied(&DimensionScores::new()));
    }

    #[test]
    fn test_deserialize_from_wire_shape() {
        let rule: ConditionRule =
            serde_json::from_str(r#"{"type":"gte","dimension":"selfWorth","value":2}"#)
                .expect("gte rule should parse");
        assert_eq!(rule, ConditionRule::gte(Dimension::SelfWorth, 2));

        let rule: ConditionRule =
            serde_json::from_str(r#"{"type":"variance","minVariance":6}"#)
                .expect("variance rule should parse");
        assert_eq!(rule, ConditionRule::variance(6));

        let rule: ConditionRule = serde_json::from_str(
            r#"{"type":"and","rules":[{"type":"allInRange","min":-1,"max":1}]}"#,
        )
        .expect("nested rule should parse");
        assert_eq!(
            rule,
            ConditionRule::and(vec![ConditionRule::all_in_range(-1, 1)])
        );
    }

    #[test]
    fn test_unknown_dimension_is_a_parse_error() {
        let result: Result<ConditionRule, _> =
            serde_json::from_str(r#"{"type":"gte","dimension":"charisma","value":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        assert!(ConditionRule::range(Dimension::Hope, 2, -2).validate().is_err());
        assert!(ConditionRule::all_in_range(1, -1).validate().is_err());
        assert!(ConditionRule::variance(-1).validate().is_err());
        assert!(ConditionRule::and(vec![ConditionRule::range(Dimension::Hope, 2, -2)])
            .validate()
            .is_err());
        assert!(ConditionRule::all_in_range(-1, 1).validate().is_ok());
    }
}
