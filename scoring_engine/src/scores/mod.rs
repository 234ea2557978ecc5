//! Score vectors - the six psychological dimensions and choice deltas.

use serde::{Deserialize, Serialize};

/// One of the six axes a journey is scored along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    /// Willingness to be truthful vs. protective or avoidant.
    Honesty,
    /// Openness to emotional risk vs. self-protection.
    Vulnerability,
    /// Optimism about the future vs. resignation.
    Hope,
    /// Self-value and confidence vs. self-doubt.
    SelfWorth,
    /// Proactiveness and agency vs. passivity.
    Action,
    /// Care for others vs. self-focus.
    Compassion,
}

impl Dimension {
    /// All six dimensions in canonical declared order.
    pub const ALL: [Dimension; 6] = [
        Dimension::Honesty,
        Dimension::Vulnerability,
        Dimension::Hope,
        Dimension::SelfWorth,
        Dimension::Action,
        Dimension::Compassion,
    ];

    /// The wire name of this dimension.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Honesty => "honesty",
            Dimension::Vulnerability => "vulnerability",
            Dimension::Hope => "hope",
            Dimension::SelfWorth => "selfWorth",
            Dimension::Action => "action",
            Dimension::Compassion => "compassion",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Accumulated scores across all six dimensions.
///
/// Every dimension is always present; there are no sparse vectors in
/// accumulated state. A journey starts from the zero vector. Values are
/// unbounded `i32`s, in practice kept within roughly -6..=6 by the
/// narrative's choice deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScores {
    pub honesty: i32,
    pub vulnerability: i32,
    pub hope: i32,
    pub self_worth: i32,
    pub action: i32,
    pub compassion: i32,
}

impl DimensionScores {
    /// The zero vector, the state every journey starts from.
    pub fn new() -> Self {
        Self::default()
    }

    /// The value of a single dimension.
    pub fn get(&self, dimension: Dimension) -> i32 {
        match dimension {
            Dimension::Honesty => self.honesty,
            Dimension::Vulnerability => self.vulnerability,
            Dimension::Hope => self.hope,
            Dimension::SelfWorth => self.self_worth,
            Dimension::Action => self.action,
            Dimension::Compassion => self.compassion,
        }
    }

    /// All six values in canonical dimension order.
    pub fn values(&self) -> [i32; 6] {
        [
            self.honesty,
            self.vulnerability,
            self.hope,
            self.self_worth,
            self.action,
            self.compassion,
        ]
    }

    /// Apply a choice's delta, returning the new vector.
    ///
    /// `self` is left untouched; each application produces a fresh
    /// vector. Dimensions the delta does not touch carry over unchanged.
    pub fn apply(&self, delta: &ScoreDelta) -> DimensionScores {
        DimensionScores {
            honesty: self.honesty + delta.honesty,
            vulnerability: self.vulnerability + delta.vulnerability,
            hope: self.hope + delta.hope,
            self_worth: self.self_worth + delta.self_worth,
            action: self.action + delta.action,
            compassion: self.compassion + delta.compassion,
        }
    }

    /// The spread of the vector: maximum value minus minimum value
    /// across all six dimensions. Used to detect polarized profiles.
    pub fn spread(&self) -> i32 {
        let values = self.values();
        let mut min = values[0];
        let mut max = values[0];
        for value in values {
            if value < min {
                min = value;
            }
            if value > max {
                max = value;
            }
        }
        max - min
    }
}

/// A per-choice adjustment to the score vector.
///
/// Deltas are partial: any dimension a choice does not name defaults to
/// a zero effect. Produced by narrative choice data and consumed only by
/// [`DimensionScores::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoreDelta {
    pub honesty: i32,
    pub vulnerability: i32,
    pub hope: i32,
    pub self_worth: i32,
    pub action: i32,
    pub compassion: i32,
}

impl ScoreDelta {
    /// An empty delta with no effect on any dimension.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the adjustment for one dimension.
    pub fn with(mut self, dimension: Dimension, value: i32) -> Self {
        match dimension {
            Dimension::Honesty => self.honesty = value,
            Dimension::Vulnerability => self.vulnerability = value,
            Dimension::Hope => self.hope = value,
            Dimension::SelfWorth => self.self_worth = value,
            Dimension::Action => self.action = value,
            Dimension::Compassion => self.compassion = value,
        }
        self
    }

    /// The adjustment for a single dimension.
    pub fn get(&self, dimension: Dimension) -> i32 {
        match dimension {
            Dimension::Honesty => self.honesty,
            Dimension::Vulnerability => self.vulnerability,
            Dimension::Hope => self.hope,
            Dimension::SelfWorth => self.self_worth,
            Dimension::Action => self.action,
            Dimension::Compassion => self.compassion,
        }
    }

    /// Combine two deltas by summing per dimension.
    ///
    /// Applying the merged delta is equivalent to applying both deltas
    /// in sequence.
    pub fn merge(&self, other: &ScoreDelta) -> ScoreDelta {
        ScoreDelta {
            honesty: self.honesty + other.honesty,
            vulnerability: self.vulnerability + other.vulnerability,
            hope: self.hope + other.hope,
            self_worth: self.self_worth + other.self_worth,
            action: self.action + other.action,
            compassion: self.compassion + other.compassion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_scores_are_zero() {
        let scores = DimensionScores::new();
        assert_eq!(scores.values(), [0, 0, 0, 0, 0, 0]);
        for dimension in Dimension::ALL {
            assert_eq!(scores.get(dimension), 0);
        }
    }

    #[test]
    fn test_apply_positive_delta() {
        let current = DimensionScores {
            honesty: 1,
            hope: 2,
            action: 1,
            ..DimensionScores::new()
        };
        let delta = ScoreDelta::new()
            .with(Dimension::Honesty, 2)
            .with(Dimension::Vulnerability, 1)
            .with(Dimension::Hope, 1);

        let result = current.apply(&delta);
        assert_eq!(result.honesty, 3);
        assert_eq!(result.vulnerability, 1);
        assert_eq!(result.hope, 3);
        assert_eq!(result.self_worth, 0);
        assert_eq!(result.action, 1);
        assert_eq!(result.compassion, 0);
    }

    #[test]
    fn test_apply_negative_delta() {
        let current = DimensionScores {
            honesty: 1,
            vulnerability: 2,
            self_worth: 1,
            compassion: 1,
            ..DimensionScores::new()
        };
        let delta = ScoreDelta::new()
            .with(Dimension::Honesty, -1)
            .with(Dimension::Hope, -2)
            .with(Dimension::Action, -1);

        let result = current.apply(&delta);
        assert_eq!(result.honesty, 0);
        assert_eq!(result.vulnerability, 2);
        assert_eq!(result.hope, -2);
        assert_eq!(result.self_worth, 1);
        assert_eq!(result.action, -1);
        assert_eq!(result.compassion, 1);
    }

    #[test]
    fn test_apply_partial_delta() {
        let current = DimensionScores::new();
        let delta = ScoreDelta::new().with(Dimension::Hope, 1);

        let result = current.apply(&delta);
        assert_eq!(result.hope, 1);
        assert_eq!(result.values(), [0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_apply_does_not_mutate_current() {
        let current = DimensionScores {
            hope: 1,
            ..DimensionScores::new()
        };
        let snapshot = current;

        let first = current.apply(&ScoreDelta::new().with(Dimension::Hope, 2));
        let second = current.apply(&ScoreDelta::new().with(Dimension::Hope, 2));

        assert_eq!(current, snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn test_deltas_sum_per_dimension() {
        let start = DimensionScores::new();
        let d1 = ScoreDelta::new()
            .with(Dimension::Hope, 1)
            .with(Dimension::Honesty, 2);
        let d2 = ScoreDelta::new()
            .with(Dimension::Hope, -3)
            .with(Dimension::Compassion, 1);

        let sequential = start.apply(&d1).apply(&d2);
        let merged = start.apply(&d1.merge(&d2));
        assert_eq!(sequential, merged);
        assert_eq!(sequential.hope, -2);
        assert_eq!(sequential.honesty, 2);
        assert_eq!(sequential.compassion, 1);
    }

    #[test]
    fn test_spread() {
        let scores = DimensionScores {
            honesty: 4,
            vulnerability: -3,
            hope: 3,
            self_worth: -2,
            action: 2,
            compassion: -4,
        };
        assert_eq!(scores.spread(), 8);
        assert_eq!(DimensionScores::new().spread(), 0);
    }

    #[test]
    fn test_dimension_wire_names() {
        assert_eq!(Dimension::SelfWorth.as_str(), "selfWorth");
        assert_eq!(Dimension::Honesty.to_string(), "honesty");
    }

    #[test]
    fn test_delta_deserializes_with_defaults() {
        let delta: ScoreDelta = serde_json::from_str(r#"{"hope":1,"selfWorth":-1}"#)
            .expect("delta should parse");
        assert_eq!(delta.hope, 1);
        assert_eq!(delta.self_worth, -1);
        assert_eq!(delta.honesty, 0);
        assert_eq!(delta.compassion, 0);
    }

    #[test]
    fn test_scores_serde_round_trip() {
        let scores = DimensionScores {
            honesty: 2,
            self_worth: -1,
            ..DimensionScores::new()
        };
        let json = serde_json::to_string(&scores).expect("scores should serialize");
        assert!(json.contains("\"selfWorth\":-1"));

        let back: DimensionScores = serde_json::from_str(&json).expect("scores should parse");
        assert_eq!(back, scores);
    }
}
