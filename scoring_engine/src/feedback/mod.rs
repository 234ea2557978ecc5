//! Midpoint feedback - dominant-dimension selection and evocative
//! phrases surfaced partway through a journey.

use crate::scores::{Dimension, DimensionScores};

/// The dimension with the highest absolute value.
///
/// Scans the canonical dimension order with a strict comparison, so
/// when several dimensions tie at the maximum the earliest one wins.
/// The all-zero vector has no dominant axis and yields the fixed
/// [`Dimension::Hope`] default.
pub fn dominant_dimension(scores: &DimensionScores) -> Dimension {
    let mut dominant = Dimension::Hope;
    let mut max_abs = 0;

    for dimension in Dimension::ALL {
        let abs = scores.get(dimension).abs();
        if abs > max_abs {
            max_abs = abs;
            dominant = dimension;
        }
    }

    dominant
}

/// The evocative phrase reflecting the current dominant tendency.
///
/// Looks up (dominant dimension, sign of its value) in a fixed table of
/// exactly two phrases per dimension. A zero value is treated as
/// non-negative and maps to the positive-leaning phrase.
pub fn midpoint_feedback_phrase(scores: &DimensionScores) -> &'static str {
    let dominant = dominant_dimension(scores);
    let (positive, negative) = phrase_pair(dominant);
    if scores.get(dominant) >= 0 {
        positive
    } else {
        negative
    }
}

/// The fixed per-dimension phrase table: (positive-leaning,
/// negative-leaning).
fn phrase_pair(dimension: Dimension) -> (&'static str, &'static str) {
    match dimension {
        Dimension::Honesty => (
            "Your heart leans toward truth...",
            "You guard what's inside carefully...",
        ),
        Dimension::Vulnerability => (
            "You're learning to open up...",
            "Your walls feel safer than risk...",
        ),
        Dimension::Hope => ("Hope guides your path...", "Shadows color your view..."),
        Dimension::SelfWorth => (
            "You're learning your own value...",
            "You question what you deserve...",
        ),
        Dimension::Action => (
            "You move forward with purpose...",
            "You wait, watching from stillness...",
        ),
        Dimension::Compassion => (
            "Your heart reaches toward others...",
            "You turn inward, protecting yourself...",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::ScoreDelta;

    #[test]
    fn test_dominant_is_highest_absolute_value() {
        let scores = DimensionScores {
            honesty: 1,
            vulnerability: -3,
            hope: 2,
            self_worth: 0,
            action: -2,
            compassion: 1,
        };
        assert_eq!(dominant_dimension(&scores), Dimension::Vulnerability);

        let scores = DimensionScores {
            honesty: 4,
            vulnerability: 1,
            hope: -2,
            self_worth: 0,
            action: 1,
            compassion: -1,
        };
        assert_eq!(dominant_dimension(&scores), Dimension::Honesty);
    }

    #[test]
    fn test_zero_vector_defaults_to_hope() {
        assert_eq!(
            dominant_dimension(&DimensionScores::new()),
            Dimension::Hope
        );
        // Zero is non-negative, so the default also picks the
        // positive-leaning phrase.
        assert_eq!(
            midpoint_feedback_phrase(&DimensionScores::new()),
            "Hope guides your path..."
        );
    }

    #[test]
    fn test_ties_keep_the_earliest_dimension() {
        let scores = DimensionScores {
            honesty: 2,
            action: -2,
            ..DimensionScores::new()
        };
        assert_eq!(dominant_dimension(&scores), Dimension::Honesty);
    }

    #[test]
    fn test_positive_phrase_for_positive_dominant() {
        let scores = DimensionScores {
            honesty: 3,
            vulnerability: 1,
            action: 1,
            ..DimensionScores::new()
        };
        assert_eq!(
            midpoint_feedback_phrase(&scores),
            "Your heart leans toward truth..."
        );
    }

    #[test]
    fn test_negative_phrase_for_negative_dominant() {
        let scores = DimensionScores {
            vulnerability: 1,
            hope: -3,
            compassion: 1,
            ..DimensionScores::new()
        };
        assert_eq!(midpoint_feedback_phrase(&scores), "Shadows color your view...");
    }

    #[test]
    fn test_each_dimension_has_two_distinct_phrases() {
        for dimension in Dimension::ALL {
            let positive =
                midpoint_feedback_phrase(&DimensionScores::new().apply(&ScoreDelta::new().with(dimension, 3)));
            let negative =
                midpoint_feedback_phrase(&DimensionScores::new().apply(&ScoreDelta::new().with(dimension, -3)));

            assert!(!positive.is_empty());
            assert!(!negative.is_empty());
            assert_ne!(positive, negative);
        }
    }
}
