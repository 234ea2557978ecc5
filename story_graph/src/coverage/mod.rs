//! Coverage analysis - deterministic enumeration of every journey.
//!
//! Walks every combination of choices on every path and tallies which
//! endings come out. Backs the reachability and balance checks on
//! authored content: every ending should be reachable somewhere, and
//! no single ending should dominate the distribution.

use std::collections::HashMap;

use scoring_engine::{DimensionScores, EndingId, ResolutionTable};

use crate::scenes::{ChoiceTarget, GraphError, SceneId, StoryGraph, StoryPath};

/// The result of one fully-walked journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyOutcome {
    pub path: StoryPath,
    /// Choice index taken at each visited scene, in order.
    pub choices: Vec<usize>,
    pub scores: DimensionScores,
    pub ending: EndingId,
}

/// Enumerate every choice combination for one path.
///
/// The story graph is a shallow DAG, so plain depth-first descent
/// visits each terminal exactly once. Deterministic: outcomes are
/// emitted in choice-index order.
pub fn enumerate_journeys(
    graph: &StoryGraph,
    table: &ResolutionTable,
    path: StoryPath,
) -> Result<Vec<JourneyOutcome>, GraphError> {
    let start = path.start_scene();
    let scores = DimensionScores::new().apply(&path.initial_delta());

    let mut outcomes = Vec::new();
    walk(graph, table, path, &start, scores, Vec::new(), &mut outcomes)?;
    Ok(outcomes)
}

/// Enumerate every choice combination across all paths.
pub fn enumerate_all_journeys(
    graph: &StoryGraph,
    table: &ResolutionTable,
) -> Result<Vec<JourneyOutcome>, GraphError> {
    let mut outcomes = Vec::new();
    for path in StoryPath::ALL {
        outcomes.extend(enumerate_journeys(graph, table, path)?);
    }
    Ok(outcomes)
}

fn walk(
    graph: &StoryGraph,
    table: &ResolutionTable,
    path: StoryPath,
    scene_id: &SceneId,
    scores: DimensionScores,
    trail: Vec<usize>,
    outcomes: &mut Vec<JourneyOutcome>,
) -> Result<(), GraphError> {
    let scene = graph
        .scene(scene_id)
        .ok_or_else(|| GraphError::MissingStart(scene_id.clone()))?;

    for (index, choice) in scene.choices.iter().enumerate() {
        let scores = scores.apply(&choice.delta);
        let mut trail = trail.clone();
        trail.push(index);

        match &choice.target {
            ChoiceTarget::Scene(next) => {
                if graph.scene(next).is_none() {
                    return Err(GraphError::DanglingTarget {
                        scene: scene.id.clone(),
                        index,
                        target: next.clone(),
                    });
                }
                walk(graph, table, path, next, scores, trail, outcomes)?;
            }
            ChoiceTarget::Ending => {
                outcomes.push(JourneyOutcome {
                    path,
                    choices: trail,
                    scores,
                    ending: table.resolve(&scores),
                });
            }
        }
    }

    Ok(())
}

/// Reachability tally across a set of enumerated outcomes.
#[derive(Debug, Clone, Default)]
pub struct EndingCoverage {
    counts: HashMap<EndingId, usize>,
    total: usize,
}

impl EndingCoverage {
    /// Tally the endings of the given outcomes.
    pub fn summarize(outcomes: &[JourneyOutcome]) -> Self {
        let mut coverage = Self::default();
        for outcome in outcomes {
            *coverage.counts.entry(outcome.ending).or_default() += 1;
            coverage.total += 1;
        }
        coverage
    }

    /// How many journeys landed on this ending.
    pub fn count(&self, id: EndingId) -> usize {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// Whether any journey landed on this ending.
    pub fn reached(&self, id: EndingId) -> bool {
        self.count(id) > 0
    }

    /// Total number of journeys tallied.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Fraction of journeys landing on this ending.
    pub fn share(&self, id: EndingId) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count(id) as f64 / self.total as f64
        }
    }

    /// Endings no enumerated journey produced.
    pub fn unreached(&self) -> Vec<EndingId> {
        EndingId::ALL
            .into_iter()
            .filter(|id| !self.reached(*id))
            .collect()
    }
}
