//! The reference resolution table: sixteen endings in priority order.
//!
//! Priority order: E15, E16, E1, E6, E9, E4, E12, E11, E10, E13, E2,
//! E7, E3, E8, E5, E14. The two secret endings lead; a balanced or
//! polarized profile would otherwise be swallowed by the broader
//! category rules below them.

use super::{EndingCondition, EndingId, ResolutionTable};
use crate::rules::ConditionRule;
use crate::scores::Dimension;

impl ResolutionTable {
    /// Build the reference table.
    ///
    /// Infallible: the entries are known-good static configuration
    /// (covered by a validation test).
    pub fn reference() -> Self {
        Self {
            entries: reference_entries(),
        }
    }
}

fn reference_entries() -> Vec<EndingCondition> {
    vec![
        // E15 - The Unnamed Heart. Secret: every dimension balanced
        // near zero.
        EndingCondition::new(EndingId::E15, ConditionRule::all_in_range(-1, 1)),
        // E16 - The Heart Between Worlds. Secret: a polarized profile,
        // at least a 6-point spread with one of the leading dimensions
        // pushed out of the neutral band.
        EndingCondition::new(
            EndingId::E16,
            ConditionRule::and(vec![
                ConditionRule::variance(6),
                ConditionRule::or(vec![
                    ConditionRule::or(vec![
                        ConditionRule::gte(Dimension::Honesty, 2),
                        ConditionRule::lte(Dimension::Honesty, -2),
                    ]),
                    ConditionRule::or(vec![
                        ConditionRule::gte(Dimension::Vulnerability, 2),
                        ConditionRule::lte(Dimension::Vulnerability, -2),
                    ]),
                    ConditionRule::or(vec![
                        ConditionRule::gte(Dimension::Hope, 2),
                        ConditionRule::lte(Dimension::Hope, -2),
                    ]),
                ]),
            ]),
        ),
        // E1 - The Brave Heart. High honesty and vulnerability.
        EndingCondition::new(
            EndingId::E1,
            ConditionRule::and(vec![
                ConditionRule::gte(Dimension::Honesty, 3),
                ConditionRule::gte(Dimension::Vulnerability, 2),
            ]),
        ),
        // E6 - The Open Heart. High self-worth and hope.
        EndingCondition::new(
            EndingId::E6,
            ConditionRule::and(vec![
                ConditionRule::gte(Dimension::SelfWorth, 3),
                ConditionRule::gte(Dimension::Hope, 2),
            ]),
        ),
        // E9 - The Growing Soul. High action and compassion. The action
        // threshold sits at 1 so the single path can still reach it.
        EndingCondition::new(
            EndingId::E9,
            ConditionRule::and(vec![
                ConditionRule::gte(Dimension::Action, 1),
                ConditionRule::gte(Dimension::Compassion, 2),
            ]),
        ),
        // E4 - The Hopeful Believer. Hope recovered from a low start.
        // Capped at action <= 1 so it does not intercept E9.
        EndingCondition::new(
            EndingId::E4,
            ConditionRule::and(vec![
                ConditionRule::gte(Dimension::Hope, 2),
                ConditionRule::gte(Dimension::Compassion, 1),
                ConditionRule::lte(Dimension::Action, 1),
            ]),
        ),
        // E12 - The Passionate Wanderer. High action, low vulnerability.
        EndingCondition::new(
            EndingId::E12,
            ConditionRule::and(vec![
                ConditionRule::gte(Dimension::Action, 2),
                ConditionRule::lte(Dimension::Vulnerability, -1),
            ]),
        ),
        // E11 - The Forgiver. High compassion.
        EndingCondition::new(
            EndingId::E11,
            ConditionRule::and(vec![ConditionRule::gte(Dimension::Compassion, 3)]),
        ),
        // E10 - The Mirror Seeker. High vulnerability and honesty.
        EndingCondition::new(
            EndingId::E10,
            ConditionRule::and(vec![
                ConditionRule::gte(Dimension::Vulnerability, 2),
                ConditionRule::gte(Dimension::Honesty, 2),
            ]),
        ),
        // E13 - The Peaceful One. Solid self-worth, non-negative hope.
        EndingCondition::new(
            EndingId::E13,
            ConditionRule::and(vec![
                ConditionRule::gte(Dimension::SelfWorth, 2),
                ConditionRule::gte(Dimension::Hope, 0),
            ]),
        ),
        // E2 - The Quiet Protector. Low honesty, positive compassion.
        EndingCondition::new(
            EndingId::E2,
            ConditionRule::and(vec![
                ConditionRule::lte(Dimension::Honesty, 0),
                ConditionRule::gte(Dimension::Compassion, 1),
            ]),
        ),
        // E7 - The Guarded Soul. Low vulnerability and honesty.
        EndingCondition::new(
            EndingId::E7,
            ConditionRule::and(vec![
                ConditionRule::lte(Dimension::Vulnerability, -1),
                ConditionRule::lte(Dimension::Honesty, 0),
            ]),
        ),
        // E3 - The Heart That Waits. Low action, positive hope.
        EndingCondition::new(
            EndingId::E3,
            ConditionRule::and(vec![
                ConditionRule::lte(Dimension::Action, 0),
                ConditionRule::gte(Dimension::Hope, 1),
            ]),
        ),
        // E8 - The Quiet Dreamer. Low action, non-negative compassion.
        EndingCondition::new(
            EndingId::E8,
            ConditionRule::and(vec![
                ConditionRule::lte(Dimension::Action, -1),
                ConditionRule::gte(Dimension::Compassion, 0),
            ]),
        ),
        // E5 - The Lonely Companion. Low hope and self-worth.
        EndingCondition::new(
            EndingId::E5,
            ConditionRule::and(vec![
                ConditionRule::lte(Dimension::Hope, -2),
                ConditionRule::lte(Dimension::SelfWorth, -1),
            ]),
        ),
        // E14 - The Shadow Holder. Checked last: a predominantly
        // negative profile. Vectors that match nothing here still fall
        // back to E14 through the resolver.
        EndingCondition::new(
            EndingId::E14,
            ConditionRule::or(vec![
                // At least three core dimensions negative.
                ConditionRule::and(vec![
                    ConditionRule::lte(Dimension::Hope, -1),
                    ConditionRule::lte(Dimension::Vulnerability, -1),
                    ConditionRule::lte(Dimension::Honesty, -1),
                ]),
                // Severe negativity in hope plus one other axis.
                ConditionRule::and(vec![
                    ConditionRule::lte(Dimension::Hope, -2),
                    ConditionRule::or(vec![
                        ConditionRule::lte(Dimension::SelfWorth, -1),
                        ConditionRule::lte(Dimension::Action, -2),
                    ]),
                ]),
            ]),
        ),
    ]
}
