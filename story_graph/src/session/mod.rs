//! Journey sessions - one user's walk through the story.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use scoring_engine::{evaluate_ending, midpoint_feedback_phrase, DimensionScores, EndingId};

use crate::scenes::{ChoiceTarget, SceneId, StoryGraph, StoryPath};

/// Number of in-scene choices after which the midpoint feedback phrase
/// is surfaced (the third beat of every path).
pub const MIDPOINT_CHOICES: usize = 2;

/// Unique identifier for a playthrough session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One recorded choice within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceRecord {
    pub scene: SceneId,
    pub index: usize,
    pub label: String,
}

/// Errors from invalid session operations.
#[derive(Debug, Error)]
pub enum JourneyError {
    #[error("current scene {0} is not in the story graph")]
    UnknownScene(SceneId),

    #[error("scene {scene} has no choice {index}")]
    InvalidChoice { scene: SceneId, index: usize },

    #[error("the journey has already ended")]
    JourneyComplete,
}

/// What happened after taking a choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The journey moved to another scene.
    Scene(SceneId),
    /// The journey ended and the accumulated scores were resolved.
    Ended(EndingId),
}

/// Where a session currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum Position {
    At(SceneId),
    Ended(EndingId),
}

/// A single in-memory playthrough.
///
/// Holds the only mutable state in the system: the current scene, the
/// accumulated score vector, and the choice history. The vector is
/// mutated only by replacement (each choice produces a fresh vector via
/// [`DimensionScores::apply`]) and is discarded with the session on
/// restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneySession {
    pub id: SessionId,
    pub path: StoryPath,
    scores: DimensionScores,
    position: Position,
    history: Vec<ChoiceRecord>,
}

impl JourneySession {
    /// Start a new journey on the given path.
    ///
    /// The score vector starts at zero and immediately absorbs the
    /// path's initial delta.
    pub fn start(path: StoryPath) -> Self {
        Self {
            id: SessionId::new(),
            path,
            scores: DimensionScores::new().apply(&path.initial_delta()),
            position: Position::At(path.start_scene()),
            history: Vec::new(),
        }
    }

    /// The accumulated score vector.
    pub fn scores(&self) -> &DimensionScores {
        &self.scores
    }

    /// Choices taken so far, in order.
    pub fn history(&self) -> &[ChoiceRecord] {
        &self.history
    }

    /// The scene the session is at, if the journey is still running.
    pub fn current_scene(&self) -> Option<&SceneId> {
        match &self.position {
            Position::At(scene) => Some(scene),
            Position::Ended(_) => None,
        }
    }

    /// The resolved ending, once the journey is over.
    pub fn ending(&self) -> Option<EndingId> {
        match &self.position {
            Position::At(_) => None,
            Position::Ended(ending) => Some(*ending),
        }
    }

    /// Whether the journey has ended.
    pub fn is_complete(&self) -> bool {
        matches!(self.position, Position::Ended(_))
    }

    /// Number of in-scene choices taken (the path's initial delta does
    /// not count).
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Whether the session sits at the beat where midpoint feedback is
    /// shown.
    pub fn at_midpoint(&self) -> bool {
        self.depth() == MIDPOINT_CHOICES && !self.is_complete()
    }

    /// The evocative phrase for the current dominant dimension.
    pub fn midpoint_feedback(&self) -> &'static str {
        midpoint_feedback_phrase(&self.scores)
    }

    /// Take the `index`-th choice of the current scene.
    ///
    /// Applies the choice's delta (producing a fresh vector) and either
    /// advances to the next scene or, on a terminal choice, resolves
    /// the accumulated scores into an ending.
    pub fn choose(&mut self, graph: &StoryGraph, index: usize) -> Result<Advance, JourneyError> {
        let scene_id = match &self.position {
            Position::At(scene) => scene.clone(),
            Position::Ended(_) => return Err(JourneyError::JourneyComplete),
        };

        let scene = graph
            .scene(&scene_id)
            .ok_or_else(|| JourneyError::UnknownScene(scene_id.clone()))?;
        let choice = scene
            .choices
            .get(index)
            .ok_or_else(|| JourneyError::InvalidChoice {
                scene: scene_id.clone(),
                index,
            })?;

        self.scores = self.scores.apply(&choice.delta);
        self.history.push(ChoiceRecord {
            scene: scene_id,
            index,
            label: choice.label.clone(),
        });

        match &choice.target {
            ChoiceTarget::Scene(next) => {
                self.position = Position::At(next.clone());
                Ok(Advance::Scene(next.clone()))
            }
            ChoiceTarget::Ending => {
                let ending = evaluate_ending(&self.scores);
                self.position = Position::Ended(ending);
                Ok(Advance::Ended(ending))
            }
        }
    }
}
