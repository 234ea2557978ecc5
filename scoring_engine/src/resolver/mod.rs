//! Ending resolution - priority-ordered first-match over the rule table.

mod reference;

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rules::ConditionRule;
use crate::scores::DimensionScores;

/// Identifier of one of the sixteen narrative endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndingId {
    E1,
    E2,
    E3,
    E4,
    E5,
    E6,
    E7,
    E8,
    E9,
    E10,
    E11,
    E12,
    E13,
    E14,
    E15,
    E16,
}

impl EndingId {
    /// All endings, in identifier order (not resolution priority).
    pub const ALL: [EndingId; 16] = [
        EndingId::E1,
        EndingId::E2,
        EndingId::E3,
        EndingId::E4,
        EndingId::E5,
        EndingId::E6,
        EndingId::E7,
        EndingId::E8,
        EndingId::E9,
        EndingId::E10,
        EndingId::E11,
        EndingId::E12,
        EndingId::E13,
        EndingId::E14,
        EndingId::E15,
        EndingId::E16,
    ];

    /// The ending returned when no table entry matches.
    ///
    /// Some vectors slip past every rule in the reference table, so
    /// this branch is live; it keeps resolution total.
    pub const FALLBACK: EndingId = EndingId::E14;

    /// The wire name of this ending.
    pub fn as_str(&self) -> &'static str {
        match self {
            EndingId::E1 => "E1",
            EndingId::E2 => "E2",
            EndingId::E3 => "E3",
            EndingId::E4 => "E4",
            EndingId::E5 => "E5",
            EndingId::E6 => "E6",
            EndingId::E7 => "E7",
            EndingId::E8 => "E8",
            EndingId::E9 => "E9",
            EndingId::E10 => "E10",
            EndingId::E11 => "E11",
            EndingId::E12 => "E12",
            EndingId::E13 => "E13",
            EndingId::E14 => "E14",
            EndingId::E15 => "E15",
            EndingId::E16 => "E16",
        }
    }
}

impl std::fmt::Display for EndingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of the resolution table: an ending and the rule that
/// grants it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndingCondition {
    pub id: EndingId,
    pub condition: ConditionRule,
}

impl EndingCondition {
    /// Pair an ending with its root rule.
    pub fn new(id: EndingId, condition: ConditionRule) -> Self {
        Self { id, condition }
    }
}

/// Errors raised while validating or parsing authored configuration.
///
/// These are programmer/content errors caught fail-fast at load time;
/// resolution itself never fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("resolution table has no entries")]
    EmptyTable,

    #[error("ending {0} appears more than once in the resolution table")]
    DuplicateEnding(EndingId),

    #[error("range [{min}, {max}] has min greater than max")]
    InvertedRange { min: i32, max: i32 },

    #[error("variance threshold {0} is negative")]
    NegativeVariance(i32),

    #[error("failed to parse resolution table: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse resolution table: {0}")]
    Json(#[from] serde_json::Error),
}

/// The ordered list of ending conditions.
///
/// Order is semantically significant and must never be treated as a
/// set: [`resolve`](ResolutionTable::resolve) walks the entries
/// top-to-bottom and returns the first satisfied ending, so earlier
/// entries take priority. A narrow "secret" rule (all dimensions near
/// zero, say) must appear before the broad category rules that would
/// otherwise shadow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolutionTable {
    entries: Vec<EndingCondition>,
}

/// On-disk shape of an authored table: a `[[endings]]` TOML array.
#[derive(Debug, Deserialize)]
struct TableDocument {
    endings: Vec<EndingCondition>,
}

impl ResolutionTable {
    /// Build a table from entries in priority order, validating
    /// fail-fast.
    pub fn new(entries: Vec<EndingCondition>) -> Result<Self, ConfigError> {
        Self::validate(&entries)?;
        Ok(Self { entries })
    }

    /// Parse and validate a table from a TOML `[[endings]]` document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let document: TableDocument = toml::from_str(text)?;
        Self::new(document.endings)
    }

    /// Parse and validate a table from a JSON array of entries.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let entries: Vec<EndingCondition> = serde_json::from_str(text)?;
        Self::new(entries)
    }

    /// The entries in priority order.
    pub fn entries(&self) -> &[EndingCondition] {
        &self.entries
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries. Never true for a validated
    /// table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve the ending for a final score vector.
    ///
    /// First match wins: the table is walked in its declared order and
    /// the first entry whose rule is satisfied decides the ending. If
    /// no entry matches, [`EndingId::FALLBACK`] is returned, so
    /// resolution is total for every well-formed vector. Pure and
    /// deterministic: identical vectors always resolve identically.
    pub fn resolve(&self, scores: &DimensionScores) -> EndingId {
        self.entries
            .iter()
            .find(|entry| entry.condition.is_satisfied(scores))
            .map(|entry| entry.id)
            .unwrap_or(EndingId::FALLBACK)
    }

    fn validate(entries: &[EndingCondition]) -> Result<(), ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyTable);
        }
        let mut seen = std::collections::HashSet::new();
        for entry in entries {
            if !seen.insert(entry.id) {
                return Err(ConfigError::DuplicateEnding(entry.id));
            }
            entry.condition.validate()?;
        }
        Ok(())
    }
}

/// Resolve a score vector against the built-in reference table.
pub fn evaluate_ending(scores: &DimensionScores) -> EndingId {
    static TABLE: OnceLock<ResolutionTable> = OnceLock::new();
    TABLE.get_or_init(ResolutionTable::reference).resolve(scores)
}
